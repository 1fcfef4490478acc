//! Data structures for the tournament: teams, groups, matches, standings and tournament state.

mod game;
mod standing;
mod team;
mod tournament;

pub use game::{Match, MatchId, MatchStatus, Round};
pub use standing::TeamStanding;
pub use team::{Group, GroupId, Team, TeamId};
pub use tournament::{
    Tournament, TournamentError, TournamentId, TournamentSettings, TournamentState,
};
