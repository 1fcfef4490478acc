//! Integration tests for qualification and knockout pairing.

use chrono::NaiveDate;
use minifoot_tournament::{
    compute_standings, knockout_round_for, knockout_winners, pair_next_round, select_qualifiers,
    winner, Match, MatchStatus, Round, Team, TeamId, TournamentError,
};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, 10).unwrap()
}

fn ids(names: &[&str]) -> Vec<TeamId> {
    names.iter().map(|s| s.to_string()).collect()
}

fn result(home: &str, away: &str, home_score: u32, away_score: u32, round: Round) -> Match {
    let group = (round == Round::Groups).then(|| "A".to_string());
    let mut m = Match::scheduled(home.to_string(), away.to_string(), round, group, day(), "Main Pitch");
    m.home_score = home_score;
    m.away_score = away_score;
    m.status = MatchStatus::Completed;
    m
}

#[test]
fn qualifiers_are_top_of_each_table_in_order() {
    let group_a: Vec<Team> = ["A", "B", "C", "D"].iter().map(|n| Team::new(*n, *n)).collect();
    let table_a = compute_standings(
        &group_a,
        &[
            result("A", "B", 3, 1, Round::Groups),
            result("C", "D", 2, 2, Round::Groups),
        ],
    );
    let group_b: Vec<Team> = ["W", "X", "Y", "Z"].iter().map(|n| Team::new(*n, *n)).collect();
    let table_b = compute_standings(
        &group_b,
        &[
            result("X", "W", 1, 0, Round::Groups),
            result("Y", "Z", 0, 2, Round::Groups),
        ],
    );

    let mut qualified = select_qualifiers(&table_a, 2).unwrap();
    qualified.extend(select_qualifiers(&table_b, 2).unwrap());
    assert_eq!(qualified, ids(&["A", "C", "Z", "X"]));
}

#[test]
fn qualifier_slots_are_validated() {
    let table = compute_standings(&[Team::new("A", "A")], &[]);
    assert!(matches!(
        select_qualifiers(&table, 0),
        Err(TournamentError::InvalidInput(_))
    ));
    assert_eq!(
        select_qualifiers(&table, 2),
        Err(TournamentError::InsufficientParticipants { needed: 2, found: 1 })
    );
}

#[test]
fn quarterfinals_pair_in_arrival_order() {
    let matches = pair_next_round(&ids(&["A", "D", "X", "Y"]), Round::Quarterfinal, day(), "Main Pitch")
        .unwrap();
    assert_eq!(matches.len(), 2);
    assert_eq!((matches[0].home_team.as_str(), matches[0].away_team.as_str()), ("A", "D"));
    assert_eq!((matches[1].home_team.as_str(), matches[1].away_team.as_str()), ("X", "Y"));
    for m in &matches {
        assert_eq!(m.round, Round::Quarterfinal);
        assert_eq!(m.status, MatchStatus::Scheduled);
        assert_eq!(m.group_id, None);
        assert_eq!(m.date, day());
    }
}

#[test]
fn pairing_rejects_bad_participant_lists() {
    let pair = |names: &[&str], round| pair_next_round(&ids(names), round, day(), "Main Pitch");

    assert_eq!(
        pair(&["A"], Round::Semifinal),
        Err(TournamentError::InsufficientParticipants { needed: 2, found: 1 })
    );
    assert!(matches!(
        pair(&[], Round::Final),
        Err(TournamentError::InsufficientParticipants { .. })
    ));
    assert!(matches!(
        pair(&["A", "B", "C"], Round::Semifinal),
        Err(TournamentError::InvalidInput(_))
    ));
    assert!(matches!(
        pair(&["A", "B", "C", "D"], Round::Final),
        Err(TournamentError::InvalidInput(_))
    ));
    assert!(matches!(
        pair(&["A", "B"], Round::Groups),
        Err(TournamentError::InvalidInput(_))
    ));
    assert!(matches!(
        pair(&["A", "B", "A", "C"], Round::Semifinal),
        Err(TournamentError::InvalidInput(_))
    ));
}

#[test]
fn final_takes_the_two_semifinal_winners() {
    let semis = vec![
        result("A", "X", 2, 1, Round::Semifinal),
        result("D", "Y", 0, 3, Round::Semifinal),
    ];
    let finalists = knockout_winners(Round::Semifinal, &semis).unwrap();
    assert_eq!(finalists, ids(&["A", "Y"]));

    let fixture = pair_next_round(&finalists, Round::Final, day(), "Main Pitch").unwrap();
    assert_eq!(fixture.len(), 1);
    assert_eq!(fixture[0].round, Round::Final);
}

#[test]
fn winner_follows_the_score() {
    assert_eq!(winner(&result("A", "B", 2, 0, Round::Final)).map(String::as_str), Some("A"));
    assert_eq!(winner(&result("A", "B", 1, 4, Round::Final)).map(String::as_str), Some("B"));
    assert_eq!(winner(&result("A", "B", 1, 1, Round::Final)), None);
}

#[test]
fn drawn_knockout_match_is_ambiguous() {
    let quarters = vec![
        result("A", "B", 1, 0, Round::Quarterfinal),
        result("C", "D", 2, 2, Round::Quarterfinal),
    ];
    assert_eq!(
        knockout_winners(Round::Quarterfinal, &quarters),
        Err(TournamentError::AmbiguousResult(quarters[1].id))
    );
}

#[test]
fn unfinished_knockout_round_has_no_winners() {
    let mut quarters = vec![
        result("A", "B", 1, 0, Round::Quarterfinal),
        result("C", "D", 0, 0, Round::Quarterfinal),
    ];
    quarters[1].status = MatchStatus::Live;
    assert_eq!(
        knockout_winners(Round::Quarterfinal, &quarters),
        Err(TournamentError::RoundIncomplete {
            round: Round::Quarterfinal,
            pending: 1
        })
    );
}

#[test]
fn bracket_size_picks_the_round() {
    assert_eq!(knockout_round_for(8), Ok(Round::Quarterfinal));
    assert_eq!(knockout_round_for(4), Ok(Round::Semifinal));
    assert_eq!(knockout_round_for(2), Ok(Round::Final));
    assert!(matches!(
        knockout_round_for(1),
        Err(TournamentError::InsufficientParticipants { .. })
    ));
    assert!(matches!(
        knockout_round_for(6),
        Err(TournamentError::InvalidInput(_))
    ));
}

#[test]
fn round_without_matches_has_no_winners() {
    assert_eq!(
        knockout_winners(Round::Semifinal, &[]),
        Err(TournamentError::RoundIncomplete {
            round: Round::Semifinal,
            pending: 0
        })
    );

    // Quarterfinals alone do not make a semifinal round.
    let quarters = vec![result("A", "B", 1, 0, Round::Quarterfinal)];
    assert_eq!(
        knockout_winners(Round::Semifinal, &quarters),
        Err(TournamentError::RoundIncomplete {
            round: Round::Semifinal,
            pending: 0
        })
    );
    assert_eq!(knockout_winners(Round::Quarterfinal, &quarters), Ok(ids(&["A"])));
}
