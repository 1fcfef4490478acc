//! Mini-football tournament engine: models, round-robin scheduling, standings and knockout rounds.

pub mod logic;
pub mod models;
pub mod roster;

pub use logic::{
    advance_round, can_advance, compute_standings, current_round, draw_groups,
    generate_group_schedule, knockout_round_for, knockout_winners, pair_next_round,
    select_qualifiers, tournament_state, winner,
};
pub use models::{
    Group, GroupId, Match, MatchId, MatchStatus, Round, Team, TeamId, TeamStanding, Tournament,
    TournamentError, TournamentId, TournamentSettings, TournamentState,
};
