//! Integration tests for next-round pairing: no rematches, single byes, the bye swap.

use swiss_pairing::{
    compute_standings, generate_pairings, swiss_pairings, InMemoryRepository, Match, MatchHistory,
    Pairing, Player, PlayerId, StandingEntry, TournamentError, TournamentId,
};

fn tournament_with_players(n: usize) -> (InMemoryRepository, TournamentId, Vec<PlayerId>) {
    let mut repo = InMemoryRepository::new();
    let t = repo.create_tournament("Race of the Century");
    let ids = (0..n)
        .map(|i| repo.register_player(t, format!("P{i}")).unwrap())
        .collect();
    (repo, t, ids)
}

/// Pairings as `(first, second)` id tuples, in output order.
fn pairs(pairings: &[Pairing]) -> Vec<(PlayerId, Option<PlayerId>)> {
    pairings.iter().map(|p| (p.id1, p.id2)).collect()
}

#[test]
fn four_fresh_players_pair_in_rank_order_without_bye() {
    let (repo, t, ids) = tournament_with_players(4);
    let pairings = swiss_pairings(&repo, t).unwrap();
    assert_eq!(
        pairs(&pairings),
        vec![(ids[0], Some(ids[1])), (ids[2], Some(ids[3]))]
    );
    assert!(pairings.iter().all(|p| !p.is_bye()));
}

#[test]
fn winners_meet_winners_after_one_round() {
    let (mut repo, t, ids) = tournament_with_players(4);
    repo.report_match(t, ids[0], Some(ids[1]), false).unwrap();
    repo.report_match(t, ids[2], Some(ids[3]), false).unwrap();

    let pairings = swiss_pairings(&repo, t).unwrap();
    assert_eq!(
        pairs(&pairings),
        vec![(ids[0], Some(ids[2])), (ids[1], Some(ids[3]))]
    );
}

#[test]
fn odd_field_gives_the_bye_to_the_lowest_player() {
    let (mut repo, t, ids) = tournament_with_players(5);
    repo.report_match(t, ids[0], Some(ids[1]), false).unwrap();
    repo.report_match(t, ids[2], Some(ids[3]), false).unwrap();
    repo.report_match(t, ids[4], None, false).unwrap();

    // Standings: 0, 2, 4 (one win each), then 1, 3.
    let pairings = swiss_pairings(&repo, t).unwrap();
    assert_eq!(
        pairs(&pairings),
        vec![
            (ids[0], Some(ids[2])),
            (ids[4], Some(ids[1])),
            (ids[3], None)
        ]
    );
    assert_eq!(pairings[2].name2, None);
}

#[test]
fn repeated_bye_is_swapped_to_a_paired_player() {
    let (mut repo, t, ids) = tournament_with_players(5);
    let [a, b, c, d, e] = [ids[0], ids[1], ids[2], ids[3], ids[4]];
    // Round 1: A-B, C-D, E bye.
    repo.report_match(t, a, Some(b), false).unwrap();
    repo.report_match(t, c, Some(d), false).unwrap();
    repo.report_match(t, e, None, false).unwrap();
    // Round 2 as generated: A-C, E-B, D bye.
    let round2 = swiss_pairings(&repo, t).unwrap();
    assert_eq!(pairs(&round2), vec![(a, Some(c)), (e, Some(b)), (d, None)]);
    repo.report_match(t, a, Some(c), false).unwrap();
    repo.report_match(t, b, Some(e), false).unwrap();
    repo.report_match(t, d, None, false).unwrap();

    // Standings A, B, C, D, E. Greedy gives A-D, B-C and leaves E, who already
    // had a bye. D had one too; C's partner B has played E; so B takes the bye
    // and C plays E.
    let round3 = swiss_pairings(&repo, t).unwrap();
    assert_eq!(pairs(&round3), vec![(a, Some(d)), (b, None), (c, Some(e))]);
}

#[test]
fn no_valid_bye_when_every_candidate_already_had_one() {
    let (mut repo, t, ids) = tournament_with_players(3);
    repo.report_match(t, ids[0], Some(ids[1]), false).unwrap();
    for &p in &ids {
        repo.report_match(t, p, None, false).unwrap();
    }
    // Standings 0, 1, 2: 0 plays 2, leaving 1 who already had a bye.
    assert_eq!(
        swiss_pairings(&repo, t),
        Err(TournamentError::NoValidBye(ids[1]))
    );
}

#[test]
fn no_valid_pairing_when_top_player_has_met_everyone() {
    let (mut repo, t, ids) = tournament_with_players(4);
    for &opponent in &ids[1..] {
        repo.report_match(t, ids[0], Some(opponent), false).unwrap();
    }
    assert_eq!(
        swiss_pairings(&repo, t),
        Err(TournamentError::NoValidPairing(ids[0]))
    );
}

#[test]
fn recorded_pairing_is_never_generated_again() {
    let (mut repo, t, ids) = tournament_with_players(8);
    for _round in 0..2 {
        let pairings = swiss_pairings(&repo, t).unwrap();
        for p in &pairings {
            repo.report_match(t, p.id1, p.id2, false).unwrap();
        }
    }
    let history = repo.tournament(t).unwrap().matches.clone();
    let next = swiss_pairings(&repo, t).unwrap();
    for p in &next {
        let id2 = p.id2.unwrap();
        assert!(
            !history.iter().any(|m| m.involves(p.id1) && m.involves(id2)),
            "{} and {} already met",
            p.id1,
            id2
        );
    }
    assert_eq!(next.len(), ids.len() / 2);
}

#[test]
fn pairing_is_deterministic() {
    let (mut repo, t, ids) = tournament_with_players(7);
    repo.report_match(t, ids[3], Some(ids[0]), false).unwrap();
    repo.report_match(t, ids[5], Some(ids[1]), true).unwrap();
    repo.report_match(t, ids[6], None, false).unwrap();
    let first = swiss_pairings(&repo, t).unwrap();
    for _ in 0..10 {
        assert_eq!(swiss_pairings(&repo, t).unwrap(), first);
    }
}

#[test]
fn single_player_gets_the_bye() {
    let (repo, t, ids) = tournament_with_players(1);
    let pairings = swiss_pairings(&repo, t).unwrap();
    assert_eq!(pairs(&pairings), vec![(ids[0], None)]);
}

#[test]
fn empty_standings_produce_no_pairings() {
    assert!(generate_pairings(&[], &[]).unwrap().is_empty());
}

#[test]
fn duplicate_entries_in_standings_are_rejected() {
    let entry = StandingEntry::new(PlayerId(7), "Seven");
    let standings = vec![entry.clone(), entry];
    assert_eq!(
        generate_pairings(&standings, &[]),
        Err(TournamentError::DuplicatePlayer(PlayerId(7)))
    );
}

#[test]
fn rematch_is_skipped_in_favour_of_next_ranked_player() {
    let t = TournamentId(1);
    let players: Vec<Player> = (1..=4u32)
        .map(|i| Player::new(PlayerId(i), format!("P{i}")))
        .collect();
    // 1 and 2 drew: standings stay in id order, but 1-2 is now a rematch.
    let matches = vec![Match::tie(t, PlayerId(1), PlayerId(2))];
    let standings = compute_standings(&players, &matches).unwrap();
    let pairings = generate_pairings(&standings, &matches).unwrap();
    assert_eq!(
        pairs(&pairings),
        vec![
            (PlayerId(1), Some(PlayerId(3))),
            (PlayerId(2), Some(PlayerId(4)))
        ]
    );
}

#[test]
fn bye_pairing_serializes_with_null_opponent() {
    let (repo, t, ids) = tournament_with_players(3);
    let pairings = swiss_pairings(&repo, t).unwrap();
    let json = serde_json::to_value(&pairings).unwrap();
    assert_eq!(json[1]["id1"], serde_json::json!(ids[2].0));
    assert!(json[1]["id2"].is_null());
    assert!(json[1]["name2"].is_null());
}

#[test]
fn history_lookup_ignores_order_and_byes() {
    let t = TournamentId(1);
    let history = MatchHistory::from_matches(&[
        Match::won(t, PlayerId(4), PlayerId(2)),
        Match::bye(t, PlayerId(3)),
    ]);
    assert!(history.have_played(PlayerId(2), PlayerId(4)));
    assert!(history.have_played(PlayerId(4), PlayerId(2)));
    assert!(!history.have_played(PlayerId(3), PlayerId(4)));
    assert!(history.has_had_bye(PlayerId(3)));
    assert!(!history.has_had_bye(PlayerId(4)));
}
