//! Match records: decisive results, ties and byes.

use crate::models::player::PlayerId;
use crate::models::tournament::{TournamentError, TournamentId};
use serde::{Deserialize, Serialize};

/// How a match ended. A bye has no opponent and can never be a tie.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum MatchResult {
    Win { winner: PlayerId, loser: PlayerId },
    Tie { first: PlayerId, second: PlayerId },
    Bye { player: PlayerId },
}

/// One recorded contest within a tournament. Immutable once recorded.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub tournament: TournamentId,
    #[serde(flatten)]
    pub result: MatchResult,
}

impl Match {
    pub fn won(tournament: TournamentId, winner: PlayerId, loser: PlayerId) -> Self {
        Self {
            tournament,
            result: MatchResult::Win { winner, loser },
        }
    }

    pub fn tie(tournament: TournamentId, first: PlayerId, second: PlayerId) -> Self {
        Self {
            tournament,
            result: MatchResult::Tie { first, second },
        }
    }

    pub fn bye(tournament: TournamentId, player: PlayerId) -> Self {
        Self {
            tournament,
            result: MatchResult::Bye { player },
        }
    }

    /// Build a match from the flat report form `(winner, loser, is_tie)`.
    ///
    /// `loser == None` records a bye for `winner`. A tied bye and a player
    /// facing themselves are rejected.
    pub fn from_report(
        tournament: TournamentId,
        winner: PlayerId,
        loser: Option<PlayerId>,
        is_tie: bool,
    ) -> Result<Self, TournamentError> {
        match loser {
            None if is_tie => Err(TournamentError::TiedBye(winner)),
            None => Ok(Self::bye(tournament, winner)),
            Some(loser) if loser == winner => Err(TournamentError::SelfMatch(winner)),
            Some(loser) if is_tie => Ok(Self::tie(tournament, winner, loser)),
            Some(loser) => Ok(Self::won(tournament, winner, loser)),
        }
    }

    /// The two real players of a non-bye match, in recorded order.
    pub fn opponents(&self) -> Option<(PlayerId, PlayerId)> {
        match self.result {
            MatchResult::Win { winner, loser } => Some((winner, loser)),
            MatchResult::Tie { first, second } => Some((first, second)),
            MatchResult::Bye { .. } => None,
        }
    }

    pub fn bye_player(&self) -> Option<PlayerId> {
        match self.result {
            MatchResult::Bye { player } => Some(player),
            _ => None,
        }
    }

    /// Whether `player` took part in this match.
    pub fn involves(&self, player: PlayerId) -> bool {
        match self.result {
            MatchResult::Win { winner, loser } => winner == player || loser == player,
            MatchResult::Tie { first, second } => first == player || second == player,
            MatchResult::Bye { player: p } => p == player,
        }
    }
}
