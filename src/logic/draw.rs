//! Group draw: deal registered teams into groups.

use crate::models::{Group, TeamId, TournamentError};
use rand::seq::SliceRandom;
use rand::Rng;

/// Shuffle the teams and deal them one by one into groups "A", "B", ...
/// Group sizes differ by at most one.
pub fn draw_groups<R: Rng + ?Sized>(
    team_ids: &[TeamId],
    group_count: usize,
    rng: &mut R,
) -> Result<Vec<Group>, TournamentError> {
    if group_count == 0 {
        return Err(TournamentError::InvalidInput(
            "need at least one group".to_string(),
        ));
    }
    let needed = group_count * 2;
    if team_ids.len() < needed {
        return Err(TournamentError::InsufficientParticipants {
            needed,
            found: team_ids.len(),
        });
    }

    let mut pool = team_ids.to_vec();
    pool.shuffle(rng);

    let mut groups: Vec<Group> = (0..group_count)
        .map(|i| {
            let id = group_label(i);
            Group::new(id.clone(), format!("Group {}", id), Vec::new())
        })
        .collect();
    for (i, team_id) in pool.into_iter().enumerate() {
        groups[i % group_count].team_ids.push(team_id);
    }
    Ok(groups)
}

/// "A".."Z", then "G27", "G28", ...
fn group_label(index: usize) -> String {
    if index < 26 {
        char::from(b'A' + index as u8).to_string()
    } else {
        format!("G{}", index + 1)
    }
}
