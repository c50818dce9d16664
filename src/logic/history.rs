//! Lookup index over a match history: who has played whom, who has had a bye.

use crate::models::{Match, PlayerId};
use std::collections::HashSet;

/// Played pairs and bye receivers, built once per call from the raw match list.
#[derive(Clone, Debug, Default)]
pub struct MatchHistory {
    played: HashSet<(PlayerId, PlayerId)>,
    byes: HashSet<PlayerId>,
}

impl MatchHistory {
    pub fn from_matches(matches: &[Match]) -> Self {
        let mut history = Self::default();
        for m in matches {
            if let Some((a, b)) = m.opponents() {
                history.played.insert(pair_key(a, b));
            }
            if let Some(p) = m.bye_player() {
                history.byes.insert(p);
            }
        }
        history
    }

    /// Whether `a` and `b` have met, in either order.
    pub fn have_played(&self, a: PlayerId, b: PlayerId) -> bool {
        self.played.contains(&pair_key(a, b))
    }

    pub fn has_had_bye(&self, player: PlayerId) -> bool {
        self.byes.contains(&player)
    }
}

// Unordered pair, smaller id first.
fn pair_key(a: PlayerId, b: PlayerId) -> (PlayerId, PlayerId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
