//! Tournament, TournamentId and TournamentError.

use crate::models::game::{Match, MatchResult};
use crate::models::player::{Player, PlayerId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// No tournament with this id exists.
    InvalidTournament(TournamentId),
    /// This player has already played every remaining unpaired player.
    NoValidPairing(PlayerId),
    /// The leftover player already had a bye and no swap can free another player.
    NoValidBye(PlayerId),
    /// The same player id appears twice in a player list or in standings.
    DuplicatePlayer(PlayerId),
    /// A match names a player who is not registered in the tournament.
    UnknownPlayer(PlayerId),
    /// These two players have already faced each other in this tournament.
    Rematch(PlayerId, PlayerId),
    /// A second bye for the same player.
    ByeAlreadyReceived(PlayerId),
    /// A match with the same player on both sides.
    SelfMatch(PlayerId),
    /// A bye reported as a tie.
    TiedBye(PlayerId),
    /// Player names must not be blank.
    EmptyPlayerName,
}

impl fmt::Display for TournamentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TournamentError::InvalidTournament(id) => write!(f, "Tournament {} does not exist", id),
            TournamentError::NoValidPairing(p) => {
                write!(f, "Player {} has already played every remaining player", p)
            }
            TournamentError::NoValidBye(p) => {
                write!(f, "Player {} already had a bye and no other player can take it", p)
            }
            TournamentError::DuplicatePlayer(p) => write!(f, "Player {} is listed more than once", p),
            TournamentError::UnknownPlayer(p) => {
                write!(f, "Player {} is not registered in this tournament", p)
            }
            TournamentError::Rematch(a, b) => {
                write!(f, "Players {} and {} have faced each other in this tournament before", a, b)
            }
            TournamentError::ByeAlreadyReceived(p) => {
                write!(f, "Player {} has already received a bye in this tournament", p)
            }
            TournamentError::SelfMatch(p) => write!(f, "Player {} cannot play against themselves", p),
            TournamentError::TiedBye(p) => write!(f, "Bye for player {} cannot be a tie", p),
            TournamentError::EmptyPlayerName => write!(f, "Player name must not be empty"),
        }
    }
}

impl std::error::Error for TournamentError {}

/// Unique identifier for a tournament (serial, assigned at creation).
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TournamentId(pub u32);

impl fmt::Display for TournamentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A tournament: its registered players and every match recorded so far.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    /// Display name (need not be unique).
    pub name: String,
    /// Registered players in registration order.
    pub players: Vec<Player>,
    /// Complete match history, in recording order.
    pub matches: Vec<Match>,
}

impl Tournament {
    /// Create an empty tournament.
    pub fn new(id: TournamentId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            players: Vec::new(),
            matches: Vec::new(),
        }
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn is_registered(&self, id: PlayerId) -> bool {
        self.player(id).is_some()
    }

    /// Register a player under an already-assigned id. Names are trimmed and must not be blank.
    pub fn add_player(&mut self, id: PlayerId, name: impl Into<String>) -> Result<(), TournamentError> {
        let name = name.into();
        let name_trimmed = name.trim();
        if name_trimmed.is_empty() {
            return Err(TournamentError::EmptyPlayerName);
        }
        if self.is_registered(id) {
            return Err(TournamentError::DuplicatePlayer(id));
        }
        self.players.push(Player::new(id, name_trimmed));
        Ok(())
    }

    /// Whether `a` and `b` have met in a (non-bye) match, in either order.
    pub fn have_played(&self, a: PlayerId, b: PlayerId) -> bool {
        self.matches.iter().any(|m| match m.opponents() {
            Some((x, y)) => (x == a && y == b) || (x == b && y == a),
            None => false,
        })
    }

    pub fn has_had_bye(&self, player: PlayerId) -> bool {
        self.matches.iter().any(|m| m.bye_player() == Some(player))
    }

    /// Record a finished match, refusing anything that would break the tournament's invariants:
    /// unregistered players, self-matches, rematches and second byes.
    pub fn record_match(&mut self, m: Match) -> Result<(), TournamentError> {
        if m.tournament != self.id {
            return Err(TournamentError::InvalidTournament(m.tournament));
        }
        match m.result {
            MatchResult::Win { winner: a, loser: b } | MatchResult::Tie { first: a, second: b } => {
                for p in [a, b] {
                    if !self.is_registered(p) {
                        return Err(TournamentError::UnknownPlayer(p));
                    }
                }
                if a == b {
                    return Err(TournamentError::SelfMatch(a));
                }
                if self.have_played(a, b) {
                    return Err(TournamentError::Rematch(a, b));
                }
            }
            MatchResult::Bye { player } => {
                if !self.is_registered(player) {
                    return Err(TournamentError::UnknownPlayer(player));
                }
                if self.has_had_bye(player) {
                    return Err(TournamentError::ByeAlreadyReceived(player));
                }
            }
        }
        self.matches.push(m);
        Ok(())
    }
}
