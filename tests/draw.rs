//! Integration tests for the group draw.

use minifoot_tournament::{draw_groups, Team, TeamId, Tournament, TournamentError, TournamentSettings};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn team_ids(n: usize) -> Vec<TeamId> {
    (0..n).map(|i| format!("T{i}")).collect()
}

#[test]
fn deals_every_team_into_balanced_groups() {
    let teams = team_ids(10);
    let groups = draw_groups(&teams, 3, &mut StdRng::seed_from_u64(7)).unwrap();

    let labels: Vec<_> = groups.iter().map(|g| (g.id.as_str(), g.name.as_str())).collect();
    assert_eq!(labels, vec![("A", "Group A"), ("B", "Group B"), ("C", "Group C")]);

    let sizes: Vec<_> = groups.iter().map(|g| g.team_ids.len()).collect();
    assert_eq!(sizes, vec![4, 3, 3]);

    let drawn: HashSet<_> = groups.iter().flat_map(|g| g.team_ids.iter().cloned()).collect();
    assert_eq!(drawn, teams.into_iter().collect::<HashSet<_>>());
}

#[test]
fn same_seed_gives_same_draw() {
    let teams = team_ids(8);
    let first = draw_groups(&teams, 2, &mut StdRng::seed_from_u64(42)).unwrap();
    let second = draw_groups(&teams, 2, &mut StdRng::seed_from_u64(42)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn rejects_impossible_draws() {
    assert!(matches!(
        draw_groups(&team_ids(4), 0, &mut StdRng::seed_from_u64(1)),
        Err(TournamentError::InvalidInput(_))
    ));
    assert_eq!(
        draw_groups(&team_ids(5), 3, &mut StdRng::seed_from_u64(1)),
        Err(TournamentError::InsufficientParticipants { needed: 6, found: 5 })
    );
}

#[test]
fn tournament_draw_then_schedule() {
    let teams: Vec<Team> = (0..8).map(|i| Team::new(format!("T{i}"), format!("Team {i}"))).collect();
    let mut t = Tournament::with_teams("Cup", teams, TournamentSettings::default());
    t.draw_groups(2, &mut StdRng::seed_from_u64(3)).unwrap();
    assert_eq!(t.groups.len(), 2);
    assert_eq!(t.schedule_groups().unwrap(), 12);
    assert_eq!(
        t.draw_groups(2, &mut StdRng::seed_from_u64(3)),
        Err(TournamentError::InvalidState)
    );
}
