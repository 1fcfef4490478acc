//! Group stage: round-robin schedule generation (circle method).

use crate::models::{Match, Round, TeamId, TournamentError};
use chrono::{Days, NaiveDate};
use std::collections::HashSet;

/// Generate every pairing of a group, one circle-round per match-day.
///
/// 1. Reject fewer than 2 teams or duplicate ids.
/// 2. Pad an odd list with a bye slot.
/// 3. For each of `n - 1` rounds pair slot `i` with slot `n - 1 - i`, skipping the bye,
///    then rotate every slot but the first by one.
///
/// Round `r` is played on `start_date + r` days. The order of `team_ids` drives the
/// rotation, so identical input gives identical output.
pub fn generate_group_schedule(
    group_id: &str,
    team_ids: &[TeamId],
    start_date: NaiveDate,
    venue: &str,
) -> Result<Vec<Match>, TournamentError> {
    if team_ids.len() < 2 {
        return Err(TournamentError::InvalidInput(format!(
            "group {} needs at least 2 teams to schedule (has {})",
            group_id,
            team_ids.len()
        )));
    }
    let mut seen = HashSet::new();
    if let Some(dup) = team_ids.iter().find(|id| !seen.insert(id.as_str())) {
        return Err(TournamentError::InvalidInput(format!(
            "team {} appears twice in group {}",
            dup, group_id
        )));
    }

    // None is the bye.
    let mut slots: Vec<Option<&TeamId>> = team_ids.iter().map(Some).collect();
    if slots.len() % 2 == 1 {
        slots.push(None);
    }
    let n = slots.len();

    let mut matches = Vec::with_capacity(team_ids.len() * (team_ids.len() - 1) / 2);
    for round in 0..n - 1 {
        let date = start_date
            .checked_add_days(Days::new(round as u64))
            .ok_or_else(|| {
                TournamentError::InvalidInput("schedule runs past the calendar".to_string())
            })?;
        for i in 0..n / 2 {
            if let (Some(home), Some(away)) = (slots[i], slots[n - 1 - i]) {
                matches.push(Match::scheduled(
                    home.clone(),
                    away.clone(),
                    Round::Groups,
                    Some(group_id.to_string()),
                    date,
                    venue,
                ));
            }
        }
        slots[1..].rotate_right(1);
    }

    log::debug!(
        "Group {}: {} matches over {} match-days",
        group_id,
        matches.len(),
        n - 1
    );
    Ok(matches)
}
