//! Match, MatchStatus and Round.

use crate::models::team::{GroupId, TeamId};
use crate::models::tournament::TournamentError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Phase of the tournament this match belongs to. Ordered from first to last.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub enum Round {
    Groups,
    Quarterfinal,
    Semifinal,
    Final,
}

impl Round {
    pub fn label(self) -> &'static str {
        match self {
            Round::Groups => "Groups",
            Round::Quarterfinal => "Quarterfinal",
            Round::Semifinal => "Semifinal",
            Round::Final => "Final",
        }
    }

    pub fn is_elimination(self) -> bool {
        self != Round::Groups
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    Live,
    Completed,
}

/// A single match between two teams. Home/away order is cosmetic.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: MatchId,
    pub home_team: TeamId,
    pub away_team: TeamId,
    /// Only meaningful when `status` is `Completed`.
    #[serde(default)]
    pub home_score: u32,
    #[serde(default)]
    pub away_score: u32,
    #[serde(default)]
    pub status: MatchStatus,
    pub round: Round,
    /// Present only for group-phase matches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<GroupId>,
    pub date: NaiveDate,
    pub venue: String,
}

impl Match {
    /// Highest score accepted for one side.
    pub const MAX_SCORE: u32 = u16::MAX as u32;

    /// Create a scheduled match. The id is derived from round, group and teams, so the same
    /// fixture always gets the same id.
    pub fn scheduled(
        home_team: TeamId,
        away_team: TeamId,
        round: Round,
        group_id: Option<GroupId>,
        date: NaiveDate,
        venue: impl Into<String>,
    ) -> Self {
        let key = format!(
            "{}/{}/{}/{}",
            round,
            group_id.as_deref().unwrap_or("-"),
            home_team,
            away_team
        );
        Self {
            id: Uuid::new_v5(&Uuid::NAMESPACE_OID, key.as_bytes()),
            home_team,
            away_team,
            home_score: 0,
            away_score: 0,
            status: MatchStatus::Scheduled,
            round,
            group_id,
            date,
            venue: venue.into(),
        }
    }

    /// Reject records that cannot be a real fixture.
    pub fn validate(&self) -> Result<(), TournamentError> {
        check_score(self.home_score, self.away_score)?;
        if self.home_team == self.away_team {
            return Err(TournamentError::InvalidInput(format!(
                "match {} has the same team on both sides",
                self.id
            )));
        }
        match (self.round, &self.group_id) {
            (Round::Groups, None) => Err(TournamentError::InvalidInput(format!(
                "group match {} has no group",
                self.id
            ))),
            (round, Some(_)) if round.is_elimination() => Err(TournamentError::InvalidInput(
                format!("{} match {} must not reference a group", round, self.id),
            )),
            _ => Ok(()),
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == MatchStatus::Completed
    }

    pub fn involves(&self, team_id: &str) -> bool {
        self.home_team == team_id || self.away_team == team_id
    }
}

/// Reject scores no real match can produce.
pub(crate) fn check_score(home_score: u32, away_score: u32) -> Result<(), TournamentError> {
    if home_score > Match::MAX_SCORE || away_score > Match::MAX_SCORE {
        return Err(TournamentError::InvalidInput(format!(
            "score {}-{} is out of range (max {} per side)",
            home_score,
            away_score,
            Match::MAX_SCORE
        )));
    }
    Ok(())
}
