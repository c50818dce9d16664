//! StandingEntry: one derived row of the standings table.

use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};

/// A player's record, derived from the match history. Never stored.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct StandingEntry {
    pub player_id: PlayerId,
    pub name: String,
    /// Decisive wins plus byes.
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub byes: u32,
    /// Matches played, ties and byes included.
    pub matches: u32,
    /// Opponent match wins: sum of the wins of everyone this player has faced.
    pub omw: u32,
}

impl StandingEntry {
    /// A zeroed entry for a player who has not played yet.
    pub fn new(player_id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            player_id,
            name: name.into(),
            wins: 0,
            losses: 0,
            ties: 0,
            byes: 0,
            matches: 0,
            omw: 0,
        }
    }

    /// Wins earned against a real opponent.
    pub fn decisive_wins(&self) -> u32 {
        self.wins - self.byes
    }
}
