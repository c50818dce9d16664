//! In-memory repository: tournament, registration and match-reporting operations.

use crate::models::{Match, Player, PlayerId, Tournament, TournamentError, TournamentId};
use crate::repository::MatchRepository;
use std::collections::BTreeMap;

/// All tournaments held in memory. Ids are handed out serially starting at 1
/// and are never reused, even after deletion.
#[derive(Clone, Debug, Default)]
pub struct InMemoryRepository {
    tournaments: BTreeMap<TournamentId, Tournament>,
    last_tournament_id: u32,
    last_player_id: u32,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty tournament and return its id. Names need not be unique.
    pub fn create_tournament(&mut self, name: impl Into<String>) -> TournamentId {
        self.last_tournament_id += 1;
        let id = TournamentId(self.last_tournament_id);
        self.tournaments.insert(id, Tournament::new(id, name));
        log::debug!("Created tournament {}", id);
        id
    }

    pub fn tournament(&self, id: TournamentId) -> Result<&Tournament, TournamentError> {
        self.tournaments
            .get(&id)
            .ok_or(TournamentError::InvalidTournament(id))
    }

    fn tournament_mut(&mut self, id: TournamentId) -> Result<&mut Tournament, TournamentError> {
        self.tournaments
            .get_mut(&id)
            .ok_or(TournamentError::InvalidTournament(id))
    }

    /// Remove a tournament together with its players and matches.
    pub fn delete_tournament(&mut self, id: TournamentId) -> Result<(), TournamentError> {
        self.tournaments
            .remove(&id)
            .map(|_| ())
            .ok_or(TournamentError::InvalidTournament(id))
    }

    pub fn delete_all_tournaments(&mut self) {
        self.tournaments.clear();
    }

    /// Register a new player in `tournament` and return the assigned id.
    pub fn register_player(
        &mut self,
        tournament: TournamentId,
        name: impl Into<String>,
    ) -> Result<PlayerId, TournamentError> {
        let id = PlayerId(self.last_player_id + 1);
        self.tournament_mut(tournament)?.add_player(id, name)?;
        self.last_player_id = id.0;
        Ok(id)
    }

    /// Number of registered players in one tournament, or across all of them.
    pub fn count_players(&self, tournament: Option<TournamentId>) -> Result<usize, TournamentError> {
        match tournament {
            Some(id) => Ok(self.tournament(id)?.players.len()),
            None => Ok(self.tournaments.values().map(|t| t.players.len()).sum()),
        }
    }

    /// Remove every player from every tournament. Their matches go with them.
    pub fn delete_players(&mut self) {
        for t in self.tournaments.values_mut() {
            t.players.clear();
            t.matches.clear();
        }
    }

    /// Record the outcome of a single match.
    ///
    /// `loser == None` records a bye for `winner`; `is_tie` records a drawn match
    /// where neither side is credited a win. Rematches, second byes, tied byes
    /// and unregistered players are rejected and nothing is stored.
    pub fn report_match(
        &mut self,
        tournament: TournamentId,
        winner: PlayerId,
        loser: Option<PlayerId>,
        is_tie: bool,
    ) -> Result<(), TournamentError> {
        let m = Match::from_report(tournament, winner, loser, is_tie)?;
        self.tournament_mut(tournament)?.record_match(m)?;
        log::debug!("Recorded {:?} in tournament {}", m.result, tournament);
        Ok(())
    }

    /// Remove the match history of one tournament, or of every tournament.
    pub fn delete_matches(&mut self, tournament: Option<TournamentId>) -> Result<(), TournamentError> {
        match tournament {
            Some(id) => self.tournament_mut(id)?.matches.clear(),
            None => self.tournaments.values_mut().for_each(|t| t.matches.clear()),
        }
        Ok(())
    }
}

impl MatchRepository for InMemoryRepository {
    fn list_players(&self, tournament: TournamentId) -> Result<Vec<Player>, TournamentError> {
        Ok(self.tournament(tournament)?.players.clone())
    }

    fn list_matches(&self, tournament: TournamentId) -> Result<Vec<Match>, TournamentError> {
        Ok(self.tournament(tournament)?.matches.clone())
    }

    fn has_player_had_bye(
        &self,
        tournament: TournamentId,
        player: PlayerId,
    ) -> Result<bool, TournamentError> {
        Ok(self.tournament(tournament)?.has_had_bye(player))
    }
}
