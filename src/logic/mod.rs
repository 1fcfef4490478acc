//! Tournament business logic: group draw, schedule, standings, knockout rounds.

mod draw;
mod qualification;
mod rounds;
mod schedule;
mod standings;

pub use draw::draw_groups;
pub use qualification::{
    knockout_round_for, knockout_winners, pair_next_round, select_qualifiers, winner,
};
pub use rounds::{advance_round, can_advance, current_round, tournament_state};
pub use schedule::generate_group_schedule;
pub use standings::compute_standings;
