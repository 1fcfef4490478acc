//! Round sequencing: groups -> quarterfinals -> semifinals -> final.

use crate::logic::qualification::{
    knockout_round_for, knockout_winners, pair_next_round, select_qualifiers,
};
use crate::logic::standings::compute_standings;
use crate::models::{Match, Round, TeamId, Tournament, TournamentError, TournamentState};
use chrono::Days;

/// Latest round that has any generated match.
pub fn current_round(matches: &[Match]) -> Option<Round> {
    matches.iter().map(|m| m.round).max()
}

/// True iff the round has matches and all of them are completed.
/// An empty round is "not generated yet", never "complete".
pub fn can_advance(round_matches: &[Match]) -> bool {
    !round_matches.is_empty() && round_matches.iter().all(Match::is_completed)
}

/// Where a tournament stands, derived from its matches alone.
pub fn tournament_state(matches: &[Match]) -> TournamentState {
    match current_round(matches) {
        None => TournamentState::Setup,
        Some(round) => {
            let completed = matches
                .iter()
                .filter(|m| m.round == round)
                .all(Match::is_completed);
            TournamentState::at(round, completed)
        }
    }
}

fn incomplete(round: Round, matches: &[Match]) -> TournamentError {
    TournamentError::RoundIncomplete {
        round,
        pending: matches.iter().filter(|m| !m.is_completed()).count(),
    }
}

/// Build the matches of the round after the current one.
///
/// Re-checks the gate on the snapshot it is given and fails with `RoundIncomplete` without
/// producing anything when the current round is not fully completed. Callers must serialize
/// calls per tournament and persist the returned matches themselves.
pub fn advance_round(tournament: &Tournament) -> Result<Vec<Match>, TournamentError> {
    let round = current_round(&tournament.matches).ok_or(TournamentError::RoundIncomplete {
        round: Round::Groups,
        pending: 0,
    })?;
    let finished = round_matches(tournament, round);
    for m in &finished {
        m.validate()?;
    }
    if !can_advance(&finished) {
        return Err(incomplete(round, &finished));
    }
    if round == Round::Final {
        return Err(TournamentError::TournamentFinished);
    }

    let participants = match round {
        Round::Groups => group_qualifiers(tournament)?,
        _ => knockout_winners(round, &finished)?,
    };
    let next = knockout_round_for(participants.len())?;
    if next <= round {
        return Err(TournamentError::InvalidInput(format!(
            "{} teams advance from the {} round; the bracket cannot shrink into {}",
            participants.len(),
            round,
            next
        )));
    }

    let last_date = finished
        .iter()
        .map(|m| m.date)
        .max()
        .unwrap_or(tournament.settings.start_date);
    let date = last_date
        .checked_add_days(Days::new(u64::from(tournament.settings.days_between_rounds)))
        .ok_or_else(|| TournamentError::InvalidInput("round date out of range".to_string()))?;

    log::debug!(
        "Advancing from {} with {} team(s) into {}",
        round,
        participants.len(),
        next
    );
    pair_next_round(&participants, next, date, &tournament.settings.default_venue)
}

fn round_matches(tournament: &Tournament, round: Round) -> Vec<Match> {
    tournament
        .matches
        .iter()
        .filter(|m| m.round == round)
        .cloned()
        .collect()
}

/// Qualifiers of every group, concatenated in group order.
fn group_qualifiers(tournament: &Tournament) -> Result<Vec<TeamId>, TournamentError> {
    let mut qualified = Vec::new();
    for group in &tournament.groups {
        let matches: Vec<Match> = tournament
            .matches
            .iter()
            .filter(|m| m.round == Round::Groups && m.group_id.as_deref() == Some(group.id.as_str()))
            .cloned()
            .collect();
        if !can_advance(&matches) {
            return Err(incomplete(Round::Groups, &matches));
        }
        let teams = tournament.group_teams(group)?;
        let standings = compute_standings(&teams, &matches);
        qualified.extend(select_qualifiers(&standings, tournament.settings.slots_per_group)?);
    }
    Ok(qualified)
}
