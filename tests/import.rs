//! Integration tests for CSV import.

use swiss_pairing::{
    import_tournament, player_standings, swiss_pairings, ImportError, InMemoryRepository,
    TournamentError,
};

const PLAYERS: &str = "\
id,name
10,Twilight Sparkle
20,Fluttershy
30,Applejack
40,Pinkie Pie
50,Purple Dinosaur
";

#[test]
fn imports_players_matches_and_byes() {
    let matches = "winner,loser,is_tie\n10,20,false\n30,40,\n50,,\n";
    let mut repo = InMemoryRepository::new();
    let t = import_tournament(&mut repo, "Ponies", PLAYERS.as_bytes(), matches.as_bytes()).unwrap();

    assert_eq!(repo.count_players(Some(t)), Ok(5));
    let standings = player_standings(&repo, t).unwrap();
    let names: Vec<&str> = standings.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        names,
        ["Twilight Sparkle", "Applejack", "Purple Dinosaur", "Fluttershy", "Pinkie Pie"]
    );
    assert_eq!(standings[2].byes, 1);

    let pairings = swiss_pairings(&repo, t).unwrap();
    assert_eq!(pairings.len(), 3);
    assert_eq!(pairings[2].name1, "Pinkie Pie");
    assert!(pairings[2].is_bye());
}

#[test]
fn tie_column_is_optional() {
    let matches = "winner,loser\n10,20\n";
    let mut repo = InMemoryRepository::new();
    let t = import_tournament(&mut repo, "No ties", PLAYERS.as_bytes(), matches.as_bytes()).unwrap();
    let standings = player_standings(&repo, t).unwrap();
    assert_eq!(standings[0].name, "Twilight Sparkle");
    assert_eq!(standings[0].wins, 1);
}

#[test]
fn ties_are_imported() {
    let matches = "winner,loser,is_tie\n10,20,true\n";
    let mut repo = InMemoryRepository::new();
    let t = import_tournament(&mut repo, "Ties", PLAYERS.as_bytes(), matches.as_bytes()).unwrap();
    let standings = player_standings(&repo, t).unwrap();
    assert!(standings.iter().all(|s| s.wins == 0));
    assert_eq!(standings.iter().map(|s| s.ties).sum::<u32>(), 2);
}

#[test]
fn unknown_player_in_matches_is_reported_with_line() {
    let matches = "winner,loser,is_tie\n10,20,false\n10,99,false\n";
    let mut repo = InMemoryRepository::new();
    let err = import_tournament(&mut repo, "Broken", PLAYERS.as_bytes(), matches.as_bytes()).unwrap_err();
    match err {
        ImportError::InvalidRow { line, message } => {
            assert_eq!(line, 3);
            assert!(message.contains("99"));
        }
        other => panic!("unexpected error: {other}"),
    }
    // The half-imported tournament is gone.
    assert_eq!(repo.count_players(None), Ok(0));
}

#[test]
fn rematch_in_file_is_rejected() {
    let matches = "winner,loser,is_tie\n10,20,false\n20,10,false\n";
    let mut repo = InMemoryRepository::new();
    let err = import_tournament(&mut repo, "Rematch", PLAYERS.as_bytes(), matches.as_bytes()).unwrap_err();
    assert!(matches!(
        err,
        ImportError::Tournament(TournamentError::Rematch(_, _))
    ));
}

#[test]
fn duplicate_player_id_is_rejected() {
    let players = "id,name\n1,A\n1,B\n";
    let mut repo = InMemoryRepository::new();
    let err = import_tournament(&mut repo, "Dupes", players.as_bytes(), "winner,loser\n".as_bytes()).unwrap_err();
    assert!(matches!(err, ImportError::InvalidRow { line: 3, .. }));
}

#[test]
fn malformed_csv_is_a_csv_error() {
    let players = "id,name\nnot-a-number,A\n";
    let mut repo = InMemoryRepository::new();
    let err = import_tournament(&mut repo, "Bad", players.as_bytes(), "winner,loser\n".as_bytes()).unwrap_err();
    assert!(matches!(err, ImportError::Csv(_)));
}
