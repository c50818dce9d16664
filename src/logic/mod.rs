//! Swiss tournament logic: standings, pairing, and their repository-backed entry points.

mod history;
mod pairing;
mod standings;
mod swiss;

pub use history::MatchHistory;
pub use pairing::generate_pairings;
pub use standings::{compute_standings, rank_order};
pub use swiss::{player_standings, swiss_pairings};
