//! Group table computation.

use crate::models::{Match, Team, TeamStanding};
use std::collections::HashMap;

/// Compute the ordered table for `teams` from scratch.
///
/// Only completed matches between two members of `teams` count; anything else
/// (scheduled, live, foreign or unknown teams) is skipped. Teams without a completed
/// match still get an all-zero row. Order: points, goal difference, goals for, then name.
pub fn compute_standings(teams: &[Team], matches: &[Match]) -> Vec<TeamStanding> {
    let mut rows: Vec<TeamStanding> = Vec::with_capacity(teams.len());
    let mut index: HashMap<&str, usize> = HashMap::with_capacity(teams.len());
    for team in teams {
        if !index.contains_key(team.id.as_str()) {
            index.insert(team.id.as_str(), rows.len());
            rows.push(TeamStanding::for_team(team));
        }
    }

    for m in matches.iter().filter(|m| m.is_completed()) {
        let (Some(&home), Some(&away)) = (
            index.get(m.home_team.as_str()),
            index.get(m.away_team.as_str()),
        ) else {
            log::debug!("Skipping match {}: team outside this table", m.id);
            continue;
        };
        if home == away {
            continue;
        }
        rows[home].record(m.home_score, m.away_score);
        rows[away].record(m.away_score, m.home_score);
    }

    rows.sort_by(TeamStanding::rank_cmp);
    rows
}
