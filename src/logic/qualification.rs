//! Knockout rounds: picking qualifiers, extracting winners and pairing the next round.

use crate::models::{Match, Round, TeamId, TeamStanding, TournamentError};
use chrono::NaiveDate;
use std::cmp::Ordering;
use std::collections::HashSet;

/// Top `slots_per_group` teams of a finished group table, in table order.
pub fn select_qualifiers(
    standings: &[TeamStanding],
    slots_per_group: usize,
) -> Result<Vec<TeamId>, TournamentError> {
    if slots_per_group == 0 {
        return Err(TournamentError::InvalidInput(
            "at least one team per group must qualify".to_string(),
        ));
    }
    if standings.len() < slots_per_group {
        return Err(TournamentError::InsufficientParticipants {
            needed: slots_per_group,
            found: standings.len(),
        });
    }
    Ok(standings
        .iter()
        .take(slots_per_group)
        .map(|s| s.team_id.clone())
        .collect())
}

/// Winner of a match by score; None for a level score. Does not look at the status.
pub fn winner(m: &Match) -> Option<&TeamId> {
    match m.home_score.cmp(&m.away_score) {
        Ordering::Greater => Some(&m.home_team),
        Ordering::Less => Some(&m.away_team),
        Ordering::Equal => None,
    }
}

/// Winners of a finished `round`, in the order its matches are listed. Matches of other
/// rounds are ignored; a round without matches has not been generated yet.
pub fn knockout_winners(round: Round, matches: &[Match]) -> Result<Vec<TeamId>, TournamentError> {
    let in_round: Vec<&Match> = matches.iter().filter(|m| m.round == round).collect();
    let pending = in_round.iter().filter(|m| !m.is_completed()).count();
    if in_round.is_empty() || pending > 0 {
        return Err(TournamentError::RoundIncomplete { round, pending });
    }
    in_round
        .into_iter()
        .map(|m| {
            winner(m)
                .cloned()
                .ok_or(TournamentError::AmbiguousResult(m.id))
        })
        .collect()
}

/// Elimination round label for a bracket of `participants` teams.
///
/// The label follows the bracket size, not the previous round: two groups with two
/// qualifiers each go from the group stage straight to the semifinals, so that the
/// bracket still ends in a two-team final.
pub fn knockout_round_for(participants: usize) -> Result<Round, TournamentError> {
    match participants {
        0 | 1 => Err(TournamentError::InsufficientParticipants {
            needed: 2,
            found: participants,
        }),
        2 => Ok(Round::Final),
        4 => Ok(Round::Semifinal),
        8 => Ok(Round::Quarterfinal),
        n => Err(TournamentError::InvalidInput(format!(
            "{} teams cannot form a knockout bracket (need 2, 4 or 8)",
            n
        ))),
    }
}

/// Pair `participants` in the order given: `2i` hosts `2i + 1`. One match per pair.
pub fn pair_next_round(
    participants: &[TeamId],
    round: Round,
    date: NaiveDate,
    venue: &str,
) -> Result<Vec<Match>, TournamentError> {
    if !round.is_elimination() {
        return Err(TournamentError::InvalidInput(
            "group matches come from the round-robin schedule".to_string(),
        ));
    }
    if participants.len() < 2 {
        return Err(TournamentError::InsufficientParticipants {
            needed: 2,
            found: participants.len(),
        });
    }
    if participants.len() % 2 == 1 {
        return Err(TournamentError::InvalidInput(format!(
            "cannot pair an odd number of teams ({})",
            participants.len()
        )));
    }
    if round == Round::Final && participants.len() != 2 {
        return Err(TournamentError::InvalidInput(format!(
            "the final takes exactly 2 teams (got {})",
            participants.len()
        )));
    }
    let mut seen = HashSet::new();
    if let Some(dup) = participants.iter().find(|id| !seen.insert(id.as_str())) {
        return Err(TournamentError::InvalidInput(format!(
            "team {} appears twice in the {} draw",
            dup, round
        )));
    }

    Ok(participants
        .chunks_exact(2)
        .map(|pair| {
            Match::scheduled(pair[0].clone(), pair[1].clone(), round, None, date, venue)
        })
        .collect())
}
