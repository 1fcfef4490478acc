//! Team and Group data structures.

use serde::{Deserialize, Serialize};

/// Unique identifier for a team (used in matches and lookups).
pub type TeamId = String;

/// Unique identifier for a group within a tournament (e.g. "A").
pub type GroupId = String;

/// A registered team. The engine only ever reads its id and name.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
}

impl Team {
    pub fn new(id: impl Into<TeamId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A group of the group phase. Member order is kept as given; it feeds the schedule rotation.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: GroupId,
    /// Display name, e.g. "Group A".
    pub name: String,
    pub team_ids: Vec<TeamId>,
}

impl Group {
    pub fn new(id: impl Into<GroupId>, name: impl Into<String>, team_ids: Vec<TeamId>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            team_ids,
        }
    }

    pub fn contains(&self, team_id: &str) -> bool {
        self.team_ids.iter().any(|t| t == team_id)
    }
}
