//! Next-round pairing: greedy adjacent pairing with a single-bye swap.

use crate::logic::history::MatchHistory;
use crate::models::{Match, Pairing, StandingEntry, TournamentError};
use std::collections::HashSet;

/// Generate the next round's pairings from ranked `standings`.
///
/// `matches` is only consulted for who has played whom and who has had a bye.
///
/// 1. Take the highest-ranked unpaired player and pair them with the first
///    lower-ranked unpaired player they have not met yet.
/// 2. If nobody is left for them, fail with `NoValidPairing`; rematches are never emitted.
/// 3. An odd player out gets the bye, unless they already had one. Then the
///    lowest-ranked paired player without a bye whose partner can take the
///    leftover player instead gives up their seat (see [`assign_bye`]).
///
/// Pairings come back in rank order of their first (higher-ranked) player.
pub fn generate_pairings(
    standings: &[StandingEntry],
    matches: &[Match],
) -> Result<Vec<Pairing>, TournamentError> {
    let mut seen = HashSet::with_capacity(standings.len());
    for entry in standings {
        if !seen.insert(entry.player_id) {
            return Err(TournamentError::DuplicatePlayer(entry.player_id));
        }
    }

    let history = MatchHistory::from_matches(matches);

    // Positions into `standings`, so rank order is index order.
    let mut unpaired: Vec<usize> = (0..standings.len()).collect();
    let mut pairs: Vec<(usize, usize)> = Vec::with_capacity(standings.len() / 2);

    while unpaired.len() >= 2 {
        let top = unpaired.remove(0);
        let top_id = standings[top].player_id;
        let Some(pos) = unpaired
            .iter()
            .position(|&c| !history.have_played(top_id, standings[c].player_id))
        else {
            log::warn!("Player {} has already played all {} remaining players", top_id, unpaired.len());
            return Err(TournamentError::NoValidPairing(top_id));
        };
        let partner = unpaired.remove(pos);
        log::debug!("Paired {} with {}", top_id, standings[partner].player_id);
        pairs.push((top, partner));
    }

    let bye = match unpaired.pop() {
        Some(leftover) => Some(assign_bye(standings, &history, &mut pairs, leftover)?),
        None => None,
    };

    let mut slots: Vec<(usize, Option<usize>)> = pairs
        .into_iter()
        .map(|(a, b)| (a.min(b), Some(a.max(b))))
        .chain(bye.map(|b| (b, None)))
        .collect();
    slots.sort_by_key(|&(first, _)| first);

    Ok(slots
        .into_iter()
        .map(|(first, second)| Pairing::new(&standings[first], second.map(|s| &standings[s])))
        .collect())
}

/// Decide who sits out. Returns the standings position of the bye receiver.
///
/// The leftover player takes the bye if they never had one. Otherwise walk the
/// already-paired players from the lowest rank upward and free the first one who
/// (a) never had a bye and (b) whose partner has not met the leftover player yet;
/// that partner is re-paired with the leftover player.
fn assign_bye(
    standings: &[StandingEntry],
    history: &MatchHistory,
    pairs: &mut [(usize, usize)],
    leftover: usize,
) -> Result<usize, TournamentError> {
    let leftover_id = standings[leftover].player_id;
    if !history.has_had_bye(leftover_id) {
        log::info!("Bye assigned to {}", leftover_id);
        return Ok(leftover);
    }

    // (freed player, partner, index into `pairs`)
    let mut candidates: Vec<(usize, usize, usize)> = pairs
        .iter()
        .enumerate()
        .flat_map(|(i, &(a, b))| [(a, b, i), (b, a, i)])
        .collect();
    candidates.sort_by(|x, y| y.0.cmp(&x.0));

    for (freed, partner, i) in candidates {
        let freed_id = standings[freed].player_id;
        let partner_id = standings[partner].player_id;
        if history.has_had_bye(freed_id) || history.have_played(partner_id, leftover_id) {
            continue;
        }
        pairs[i] = (partner, leftover);
        log::info!(
            "{} already had a bye; bye moved to {}, {} now plays {}",
            leftover_id,
            freed_id,
            partner_id,
            leftover_id
        );
        return Ok(freed);
    }

    log::warn!("No player can take the bye from {}", leftover_id);
    Err(TournamentError::NoValidBye(leftover_id))
}
