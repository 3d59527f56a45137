//! Integration tests for schedule generation: pairings, numbering, guards.

use bracket_tournament_web::{
    generate_matches, start_round_robin, Round, Team, Tournament, TournamentError,
    TournamentStatus,
};

fn teams(n: usize) -> Vec<Team> {
    (1..=n).map(|i| Team::new(format!("T{i}"), vec![])).collect()
}

#[test]
fn generates_n_choose_2_matches() {
    for n in [0usize, 1, 2, 3, 5, 8] {
        let roster = teams(n);
        let matches = generate_matches(&roster);
        assert_eq!(matches.len(), n * n.saturating_sub(1) / 2, "roster size {n}");
    }
}

#[test]
fn every_pair_appears_exactly_once_and_never_self_paired() {
    let roster = teams(5);
    let matches = generate_matches(&roster);

    let mut seen = std::collections::HashSet::new();
    for m in &matches {
        let a = m.slots[0].team().unwrap().id;
        let b = m.slots[1].team().unwrap().id;
        assert_ne!(a, b, "a team must not play itself");
        // Unordered pair key
        let key = if a < b { (a, b) } else { (b, a) };
        assert!(seen.insert(key), "pair played twice");
    }
    assert_eq!(seen.len(), 10);
}

#[test]
fn three_teams_numbered_1_2_3_in_pair_scan_order() {
    let roster = teams(3);
    let matches = generate_matches(&roster);

    assert_eq!(matches.len(), 3);
    let expected = [(0usize, 1usize), (0, 2), (1, 2)];
    for (k, m) in matches.iter().enumerate() {
        assert_eq!(m.match_number, (k + 1) as u32);
        assert_eq!(m.round, Round::Regular);
        assert!(!m.is_completed);
        assert_eq!(m.scores, [None, None]);
        let (i, j) = expected[k];
        assert_eq!(m.slots[0].team().unwrap().id, roster[i].id);
        assert_eq!(m.slots[1].team().unwrap().id, roster[j].id);
    }
}

#[test]
fn numbering_is_repeatable_for_the_same_input_order() {
    let roster = teams(4);
    let first = generate_matches(&roster);
    let second = generate_matches(&roster);
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.match_number, b.match_number);
        assert_eq!(
            a.slots[0].team().unwrap().id,
            b.slots[0].team().unwrap().id
        );
        assert_eq!(
            a.slots[1].team().unwrap().id,
            b.slots[1].team().unwrap().id
        );
        // Identities are freshly allocated per call
        assert_ne!(a.id, b.id);
    }
}

#[test]
fn start_round_robin_requires_two_teams() {
    let mut t = Tournament::new("Cup", "Main hall");
    t.add_team("Solo", vec![]).unwrap();
    assert!(matches!(
        start_round_robin(&mut t),
        Err(TournamentError::NotEnoughTeams)
    ));
    assert!(t.matches.is_empty());
}

#[test]
fn start_round_robin_fills_fixture_and_locks_roster() {
    let mut t = Tournament::new("Cup", "Main hall");
    for name in ["A", "B", "C"] {
        t.add_team(name, vec![]).unwrap();
    }
    start_round_robin(&mut t).unwrap();

    assert_eq!(t.matches.len(), 3);
    assert_eq!(t.status, TournamentStatus::InProgress);
    let team_id = t.teams[0].id;
    assert!(matches!(
        t.add_team("Late", vec![]),
        Err(TournamentError::RosterLocked)
    ));
    assert!(matches!(
        t.remove_team(team_id),
        Err(TournamentError::RosterLocked)
    ));
}

#[test]
fn regenerating_the_fixture_is_a_hard_error() {
    let mut t = Tournament::new("Cup", "Main hall");
    t.add_team("A", vec![]).unwrap();
    t.add_team("B", vec![]).unwrap();
    start_round_robin(&mut t).unwrap();

    let before = t.matches.len();
    assert!(matches!(
        start_round_robin(&mut t),
        Err(TournamentError::MatchesAlreadyGenerated)
    ));
    assert_eq!(t.matches.len(), before, "no duplicate fixtures");
}
