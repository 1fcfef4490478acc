//! Tournament, TournamentSettings and TournamentState.

use crate::logic;
use crate::models::game::{check_score, Match, MatchId, MatchStatus, Round};
use crate::models::standing::TeamStanding;
use crate::models::team::{Group, GroupId, Team, TeamId};
use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Malformed or insufficient arguments (e.g. fewer than 2 teams to schedule).
    InvalidInput(String),
    /// Not enough qualifiers or winners to pair a round.
    InsufficientParticipants { needed: usize, found: usize },
    /// A completed elimination match ended level; no winner can be taken from it.
    AmbiguousResult(MatchId),
    /// Matches of the current round are still scheduled or live.
    RoundIncomplete { round: Round, pending: usize },
    /// The final has been played; there is no next round.
    TournamentFinished,
    /// Tournament is not in a state that allows this action.
    InvalidState,
    TeamNotFound(TeamId),
    GroupNotFound(GroupId),
    MatchNotFound(MatchId),
    /// A team with this name already exists (names are unique, case-insensitive).
    DuplicateTeamName,
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::InvalidInput(reason) => write!(f, "Invalid input: {}", reason),
            TournamentError::InsufficientParticipants { needed, found } => {
                write!(f, "Need at least {} teams to pair a round (found {})", needed, found)
            }
            TournamentError::AmbiguousResult(id) => {
                write!(f, "Match {} ended in a draw; record the decisive result first", id)
            }
            TournamentError::RoundIncomplete { round, pending } if *pending == 0 => {
                write!(f, "Cannot start next round: {} round has no matches yet", round)
            }
            TournamentError::RoundIncomplete { round, pending } => write!(
                f,
                "Cannot start next round: {} {} match(es) still in progress",
                pending, round
            ),
            TournamentError::TournamentFinished => write!(f, "The tournament is already finished"),
            TournamentError::InvalidState => write!(f, "Invalid state for this action"),
            TournamentError::TeamNotFound(id) => write!(f, "Team {} not found", id),
            TournamentError::GroupNotFound(id) => write!(f, "Group {} not found", id),
            TournamentError::MatchNotFound(id) => write!(f, "Match {} not found", id),
            TournamentError::DuplicateTeamName => write!(f, "A team with this name already exists"),
        }
    }
}

impl std::error::Error for TournamentError {}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Position of the tournament in its phase sequence, derived from its matches.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentState {
    /// Registering teams and drawing groups; no match exists yet.
    #[default]
    Setup,
    GroupsScheduled,
    GroupsCompleted,
    QuarterfinalGenerated,
    QuarterfinalCompleted,
    SemifinalGenerated,
    SemifinalCompleted,
    FinalGenerated,
    /// Final played; the tournament is over.
    Completed,
}

impl TournamentState {
    /// State for the latest round present and whether all its matches are completed.
    pub fn at(round: Round, completed: bool) -> Self {
        use TournamentState::*;
        match (round, completed) {
            (Round::Groups, false) => GroupsScheduled,
            (Round::Groups, true) => GroupsCompleted,
            (Round::Quarterfinal, false) => QuarterfinalGenerated,
            (Round::Quarterfinal, true) => QuarterfinalCompleted,
            (Round::Semifinal, false) => SemifinalGenerated,
            (Round::Semifinal, true) => SemifinalCompleted,
            (Round::Final, false) => FinalGenerated,
            (Round::Final, true) => Completed,
        }
    }
}

/// Per-tournament configuration.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentSettings {
    /// Teams advancing from each group.
    #[serde(default = "default_slots_per_group")]
    pub slots_per_group: usize,
    #[serde(default = "default_venue")]
    pub default_venue: String,
    /// First match-day of the group phase.
    #[serde(default = "default_start_date")]
    pub start_date: NaiveDate,
    /// Days between the last match of a round and the next elimination round.
    #[serde(default = "default_days_between_rounds")]
    pub days_between_rounds: u32,
}

fn default_slots_per_group() -> usize {
    2
}

fn default_venue() -> String {
    "Main Pitch".to_string()
}

fn default_start_date() -> NaiveDate {
    chrono::Local::now().date_naive()
}

fn default_days_between_rounds() -> u32 {
    1
}

impl Default for TournamentSettings {
    fn default() -> Self {
        Self {
            slots_per_group: default_slots_per_group(),
            default_venue: default_venue(),
            start_date: default_start_date(),
            days_between_rounds: default_days_between_rounds(),
        }
    }
}

/// Full tournament: registered teams, drawn groups and every generated match.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub settings: TournamentSettings,
    pub teams: Vec<Team>,
    pub groups: Vec<Group>,
    /// All matches of all rounds, in generation order. Never removed.
    pub matches: Vec<Match>,
}

impl Tournament {
    /// Create a new tournament in Setup state with no teams.
    pub fn new(name: impl Into<String>, settings: TournamentSettings) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            settings,
            teams: Vec::new(),
            groups: Vec::new(),
            matches: Vec::new(),
        }
    }

    /// Create a tournament with teams already registered. Still in Setup.
    pub fn with_teams(
        name: impl Into<String>,
        teams: Vec<Team>,
        settings: TournamentSettings,
    ) -> Self {
        Self {
            teams,
            ..Self::new(name, settings)
        }
    }

    pub fn state(&self) -> TournamentState {
        logic::tournament_state(&self.matches)
    }

    pub fn team(&self, id: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn group(&self, id: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == id)
    }

    fn require_setup(&self) -> Result<(), TournamentError> {
        if self.state() != TournamentState::Setup {
            return Err(TournamentError::InvalidState);
        }
        Ok(())
    }

    /// Register a new team under a fresh id (Setup only). Returns the id.
    pub fn add_team(&mut self, name: impl Into<String>) -> Result<TeamId, TournamentError> {
        let team = Team::new(Uuid::new_v4().to_string(), name);
        self.register_team(team)
    }

    /// Register a team with a caller-chosen id (Setup only). Names are trimmed and unique.
    pub fn register_team(&mut self, team: Team) -> Result<TeamId, TournamentError> {
        self.require_setup()?;
        let name = team.name.trim();
        if name.is_empty() {
            return Err(TournamentError::InvalidInput("team name is empty".to_string()));
        }
        if team.id.trim().is_empty() {
            return Err(TournamentError::InvalidInput("team id is empty".to_string()));
        }
        if self.teams.iter().any(|t| t.name.eq_ignore_ascii_case(name)) {
            return Err(TournamentError::DuplicateTeamName);
        }
        if self.team(&team.id).is_some() {
            return Err(TournamentError::InvalidInput(format!(
                "team id {} is already registered",
                team.id
            )));
        }
        let team = Team::new(team.id, name);
        let id = team.id.clone();
        self.teams.push(team);
        Ok(id)
    }

    /// Remove a team by id (Setup only). Also drops it from its group.
    pub fn remove_team(&mut self, team_id: &str) -> Result<(), TournamentError> {
        self.require_setup()?;
        let idx = self
            .teams
            .iter()
            .position(|t| t.id == team_id)
            .ok_or_else(|| TournamentError::TeamNotFound(team_id.to_string()))?;
        self.teams.remove(idx);
        for g in &mut self.groups {
            g.team_ids.retain(|t| t != team_id);
        }
        Ok(())
    }

    /// Add a hand-made group (Setup only). Members must be registered and not yet grouped.
    pub fn add_group(&mut self, group: Group) -> Result<(), TournamentError> {
        self.require_setup()?;
        if self.group(&group.id).is_some() {
            return Err(TournamentError::InvalidInput(format!(
                "group {} already exists",
                group.id
            )));
        }
        let mut seen = HashSet::new();
        for team_id in &group.team_ids {
            if self.team(team_id).is_none() {
                return Err(TournamentError::TeamNotFound(team_id.clone()));
            }
            if !seen.insert(team_id.as_str()) || self.groups.iter().any(|g| g.contains(team_id)) {
                return Err(TournamentError::InvalidInput(format!(
                    "team {} is already in a group",
                    team_id
                )));
            }
        }
        self.groups.push(group);
        Ok(())
    }

    /// Randomly draw all registered teams into `group_count` groups (Setup only).
    /// Replaces any existing groups.
    pub fn draw_groups<R: Rng + ?Sized>(
        &mut self,
        group_count: usize,
        rng: &mut R,
    ) -> Result<(), TournamentError> {
        self.require_setup()?;
        let team_ids: Vec<TeamId> = self.teams.iter().map(|t| t.id.clone()).collect();
        self.groups = logic::draw_groups(&team_ids, group_count, rng)?;
        Ok(())
    }

    /// Generate the round-robin schedule of every group (Setup only). All or nothing.
    /// Returns the number of matches created.
    pub fn schedule_groups(&mut self) -> Result<usize, TournamentError> {
        self.require_setup()?;
        if self.groups.is_empty() {
            return Err(TournamentError::InvalidState);
        }
        let mut scheduled = Vec::new();
        for group in &self.groups {
            scheduled.extend(logic::generate_group_schedule(
                &group.id,
                &group.team_ids,
                self.settings.start_date,
                &self.settings.default_venue,
            )?);
        }
        let created = scheduled.len();
        self.matches.extend(scheduled);
        log::info!(
            "Tournament {}: scheduled {} group matches in {} group(s)",
            self.id,
            created,
            self.groups.len()
        );
        Ok(created)
    }

    fn match_mut(&mut self, match_id: MatchId) -> Result<&mut Match, TournamentError> {
        self.matches
            .iter_mut()
            .find(|m| m.id == match_id)
            .ok_or(TournamentError::MatchNotFound(match_id))
    }

    /// Mark a scheduled match as being played.
    pub fn set_live(&mut self, match_id: MatchId) -> Result<(), TournamentError> {
        let m = self.match_mut(match_id)?;
        if m.status == MatchStatus::Completed {
            return Err(TournamentError::InvalidState);
        }
        m.status = MatchStatus::Live;
        Ok(())
    }

    /// Record the final score of a match and mark it completed.
    /// A score may be corrected until the following round has been generated.
    pub fn record_result(
        &mut self,
        match_id: MatchId,
        home_score: u32,
        away_score: u32,
    ) -> Result<(), TournamentError> {
        check_score(home_score, away_score)?;
        let latest = logic::current_round(&self.matches);
        let m = self.match_mut(match_id)?;
        if latest.is_some_and(|r| r > m.round) {
            return Err(TournamentError::InvalidState);
        }
        m.home_score = home_score;
        m.away_score = away_score;
        m.status = MatchStatus::Completed;
        Ok(())
    }

    /// Teams of a group, in the group's member order.
    pub fn group_teams(&self, group: &Group) -> Result<Vec<Team>, TournamentError> {
        group
            .team_ids
            .iter()
            .map(|id| {
                self.team(id)
                    .cloned()
                    .ok_or_else(|| TournamentError::TeamNotFound(id.clone()))
            })
            .collect()
    }

    /// Current table of one group.
    pub fn standings(&self, group_id: &str) -> Result<Vec<TeamStanding>, TournamentError> {
        let group = self
            .group(group_id)
            .ok_or_else(|| TournamentError::GroupNotFound(group_id.to_string()))?;
        let teams = self.group_teams(group)?;
        let matches: Vec<Match> = self
            .matches
            .iter()
            .filter(|m| m.group_id.as_deref() == Some(group_id))
            .cloned()
            .collect();
        Ok(logic::compute_standings(&teams, &matches))
    }

    /// Generate the next round once the current one is complete. Returns the number of
    /// matches created.
    pub fn advance(&mut self) -> Result<usize, TournamentError> {
        let next = logic::advance_round(self)?;
        let created = next.len();
        if let Some(m) = next.first() {
            log::info!(
                "Tournament {}: generated {} {} match(es)",
                self.id,
                created,
                m.round
            );
        }
        self.matches.extend(next);
        Ok(created)
    }
}
