//! Pairing: one table of the next round, or a bye.

use crate::models::player::PlayerId;
use crate::models::standing::StandingEntry;
use serde::{Deserialize, Serialize};

/// Two players to meet next round. `id2`/`name2` are `None` when `id1` receives the bye.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Pairing {
    pub id1: PlayerId,
    pub name1: String,
    pub id2: Option<PlayerId>,
    pub name2: Option<String>,
}

impl Pairing {
    pub fn new(first: &StandingEntry, second: Option<&StandingEntry>) -> Self {
        Self {
            id1: first.player_id,
            name1: first.name.clone(),
            id2: second.map(|s| s.player_id),
            name2: second.map(|s| s.name.clone()),
        }
    }

    pub fn is_bye(&self) -> bool {
        self.id2.is_none()
    }
}
