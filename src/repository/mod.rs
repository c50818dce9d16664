//! Persistence seam: the repository the standings and pairing logic read from.

mod memory;

pub use memory::InMemoryRepository;

use crate::models::{Match, Player, PlayerId, TournamentError, TournamentId};

/// Read access to a tournament's players and match history.
///
/// Every method fails with [`TournamentError::InvalidTournament`] for an unknown tournament.
pub trait MatchRepository {
    /// Every player registered in the tournament, including those without matches.
    fn list_players(&self, tournament: TournamentId) -> Result<Vec<Player>, TournamentError>;

    /// The tournament's complete match history. Order carries no meaning.
    fn list_matches(&self, tournament: TournamentId) -> Result<Vec<Match>, TournamentError>;

    /// Whether `player` has received a bye in this tournament.
    fn has_player_had_bye(
        &self,
        tournament: TournamentId,
        player: PlayerId,
    ) -> Result<bool, TournamentError> {
        Ok(self
            .list_matches(tournament)?
            .iter()
            .any(|m| m.bye_player() == Some(player)))
    }
}
