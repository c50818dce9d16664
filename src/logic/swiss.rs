//! Repository-backed entry points: standings and next-round pairings for a tournament id.

use crate::logic::pairing::generate_pairings;
use crate::logic::standings::compute_standings;
use crate::models::{Pairing, StandingEntry, TournamentError, TournamentId};
use crate::repository::MatchRepository;

/// Ranked standings for `tournament`: `(id, name, wins, matches, omw)` and the
/// loss/tie/bye breakdown, one entry per registered player.
pub fn player_standings<R: MatchRepository + ?Sized>(
    repo: &R,
    tournament: TournamentId,
) -> Result<Vec<StandingEntry>, TournamentError> {
    let players = repo.list_players(tournament)?;
    let matches = repo.list_matches(tournament)?;
    compute_standings(&players, &matches)
}

/// Pairings for the next round of `tournament`. Nothing is recorded; report the
/// played matches afterwards and they exclude these pairs from later rounds.
pub fn swiss_pairings<R: MatchRepository + ?Sized>(
    repo: &R,
    tournament: TournamentId,
) -> Result<Vec<Pairing>, TournamentError> {
    let players = repo.list_players(tournament)?;
    let matches = repo.list_matches(tournament)?;
    let standings = compute_standings(&players, &matches)?;
    let pairings = generate_pairings(&standings, &matches)?;
    log::info!(
        "Tournament {}: {} pairings for {} players",
        tournament,
        pairings.len(),
        standings.len()
    );
    Ok(pairings)
}
