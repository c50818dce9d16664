//! Data structures for a Swiss tournament: players, matches, standings, pairings.

mod game;
mod pairing;
mod player;
mod standing;
mod tournament;

pub use game::{Match, MatchResult};
pub use pairing::Pairing;
pub use player::{Player, PlayerId};
pub use standing::StandingEntry;
pub use tournament::{Tournament, TournamentError, TournamentId};
