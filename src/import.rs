//! CSV import: load a tournament's players and match history into a repository.
//!
//! Players file: `id,name` (ids are the file's own, any `u32`).
//! Matches file: `winner,loser,is_tie`; an empty `loser` is a bye, `is_tie` defaults to false.

use crate::models::{PlayerId, TournamentError, TournamentId};
use crate::repository::InMemoryRepository;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::io::Read;

/// Errors while importing CSV data.
#[derive(Debug)]
pub enum ImportError {
    /// Malformed CSV or a row that does not match the expected columns.
    Csv(csv::Error),
    /// A row that parsed but refers to something that does not exist.
    InvalidRow { line: u64, message: String },
    /// The repository rejected a player or match (rematch, second bye, ...).
    Tournament(TournamentError),
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportError::Csv(e) => write!(f, "CSV error: {}", e),
            ImportError::InvalidRow { line, message } => write!(f, "Line {}: {}", line, message),
            ImportError::Tournament(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImportError::Csv(e) => Some(e),
            ImportError::Tournament(e) => Some(e),
            ImportError::InvalidRow { .. } => None,
        }
    }
}

impl From<csv::Error> for ImportError {
    fn from(e: csv::Error) -> Self {
        ImportError::Csv(e)
    }
}

impl From<TournamentError> for ImportError {
    fn from(e: TournamentError) -> Self {
        ImportError::Tournament(e)
    }
}

#[derive(Debug, Deserialize)]
struct PlayerRow {
    id: u32,
    name: String,
}

#[derive(Debug, Deserialize)]
struct MatchRow {
    winner: u32,
    loser: Option<u32>,
    #[serde(default)]
    is_tie: Option<bool>,
}

/// Create tournament `name` in `repo`, register every player from `players`
/// and report every match from `matches` in file order.
///
/// Matches go through [`InMemoryRepository::report_match`], so an imported
/// history obeys the same no-rematch and single-bye rules as a live one.
/// On error the partially imported tournament is removed again.
pub fn import_tournament<P: Read, M: Read>(
    repo: &mut InMemoryRepository,
    name: &str,
    players: P,
    matches: M,
) -> Result<TournamentId, ImportError> {
    let tournament = repo.create_tournament(name);
    match fill_tournament(repo, tournament, players, matches) {
        Ok(()) => Ok(tournament),
        Err(e) => {
            repo.delete_tournament(tournament)?;
            Err(e)
        }
    }
}

fn fill_tournament<P: Read, M: Read>(
    repo: &mut InMemoryRepository,
    tournament: TournamentId,
    players: P,
    matches: M,
) -> Result<(), ImportError> {
    let mut ids: HashMap<u32, PlayerId> = HashMap::new();
    let mut reader = csv_reader(players);
    let headers = reader.headers()?.clone();
    let mut record = csv::StringRecord::new();
    while reader.read_record(&mut record)? {
        let row: PlayerRow = record.deserialize(Some(&headers))?;
        if ids.contains_key(&row.id) {
            return Err(ImportError::InvalidRow {
                line: line_of(&record),
                message: format!("duplicate player id {}", row.id),
            });
        }
        let id = repo.register_player(tournament, row.name)?;
        ids.insert(row.id, id);
    }

    let mut reader = csv_reader(matches);
    let headers = reader.headers()?.clone();
    let mut count = 0usize;
    while reader.read_record(&mut record)? {
        let row: MatchRow = record.deserialize(Some(&headers))?;
        let line = line_of(&record);
        let lookup = |external: u32| {
            ids.get(&external).copied().ok_or_else(|| ImportError::InvalidRow {
                line,
                message: format!("unknown player id {}", external),
            })
        };
        let winner = lookup(row.winner)?;
        let loser = row.loser.map(lookup).transpose()?;
        repo.report_match(tournament, winner, loser, row.is_tie.unwrap_or(false))?;
        count += 1;
    }

    log::info!(
        "Imported {} players and {} matches into tournament {}",
        ids.len(),
        count,
        tournament
    );
    Ok(())
}

fn csv_reader<R: Read>(input: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(input)
}

fn line_of(record: &csv::StringRecord) -> u64 {
    record.position().map_or(0, |p| p.line())
}
