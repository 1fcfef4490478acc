//! TeamStanding: one row of a group table.

use crate::models::team::{Team, TeamId};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Derived statistics for one team. Only changed through `record`, so
/// `points`, `goal_difference` and `matches_played` always agree with the counters.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStanding {
    pub team_id: TeamId,
    pub team_name: String,
    pub points: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    pub matches_played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
}

impl TeamStanding {
    /// All-zero row for a team that has not played yet.
    pub fn for_team(team: &Team) -> Self {
        Self {
            team_id: team.id.clone(),
            team_name: team.name.clone(),
            ..Self::default()
        }
    }

    /// Record one completed match from this team's point of view.
    pub fn record(&mut self, scored: u32, conceded: u32) {
        self.goals_for = self.goals_for.saturating_add(scored);
        self.goals_against = self.goals_against.saturating_add(conceded);
        self.goal_difference = i64::from(self.goals_for) - i64::from(self.goals_against);
        self.matches_played += 1;
        match scored.cmp(&conceded) {
            Ordering::Greater => self.wins += 1,
            Ordering::Equal => self.draws += 1,
            Ordering::Less => self.losses += 1,
        }
        self.points = 3 * self.wins + self.draws;
    }

    /// Table order: points, goal difference, goals for (all descending), then name and id.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .points
            .cmp(&self.points)
            .then_with(|| other.goal_difference.cmp(&self.goal_difference))
            .then_with(|| other.goals_for.cmp(&self.goals_for))
            .then_with(|| self.team_name.cmp(&other.team_name))
            .then_with(|| self.team_id.cmp(&other.team_id))
    }
}
