//! Swiss-system tournament engine: ranked standings and next-round pairings
//! computed from a tournament's match history.

pub mod import;
pub mod logic;
pub mod models;
pub mod repository;

pub use import::{import_tournament, ImportError};
pub use logic::{
    compute_standings, generate_pairings, player_standings, rank_order, swiss_pairings, MatchHistory,
};
pub use models::{
    Match, MatchResult, Pairing, Player, PlayerId, StandingEntry, Tournament, TournamentError,
    TournamentId,
};
pub use repository::{InMemoryRepository, MatchRepository};
