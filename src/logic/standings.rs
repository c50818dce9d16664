//! Standings: per-player records and the opponent-match-wins tie-break.

use crate::models::{Match, MatchResult, Player, PlayerId, StandingEntry, TournamentError};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Compute ranked standings for `players` from their complete match history.
///
/// 1. Tally every match: a win credits the winner, a tie credits nobody, a bye
///    credits its receiver with a win and a bye. Everyone involved gets a match played.
/// 2. OMW = sum of the decisive wins of every opponent faced (byes have no opponent).
/// 3. Sort by wins desc, OMW desc, player id asc.
///
/// Every registered player gets an entry, including players with no matches.
pub fn compute_standings(
    players: &[Player],
    matches: &[Match],
) -> Result<Vec<StandingEntry>, TournamentError> {
    let mut index: HashMap<PlayerId, usize> = HashMap::with_capacity(players.len());
    let mut entries: Vec<StandingEntry> = Vec::with_capacity(players.len());
    for p in players {
        if index.insert(p.id, entries.len()).is_some() {
            return Err(TournamentError::DuplicatePlayer(p.id));
        }
        entries.push(StandingEntry::new(p.id, p.name.clone()));
    }

    let slot = |id: PlayerId| index.get(&id).copied().ok_or(TournamentError::UnknownPlayer(id));
    let mut opponents: Vec<Vec<usize>> = vec![Vec::new(); entries.len()];

    for m in matches {
        match m.result {
            MatchResult::Win { winner, loser } => {
                let (w, l) = (slot(winner)?, slot(loser)?);
                entries[w].wins += 1;
                entries[l].losses += 1;
                record_meeting(&mut entries, &mut opponents, w, l);
            }
            MatchResult::Tie { first, second } => {
                let (a, b) = (slot(first)?, slot(second)?);
                entries[a].ties += 1;
                entries[b].ties += 1;
                record_meeting(&mut entries, &mut opponents, a, b);
            }
            MatchResult::Bye { player } => {
                let p = slot(player)?;
                entries[p].wins += 1;
                entries[p].byes += 1;
                entries[p].matches += 1;
            }
        }
    }

    // One level only: OMW reads the finished win tallies, never other OMWs.
    let decisive: Vec<u32> = entries.iter().map(StandingEntry::decisive_wins).collect();
    for (entry, faced) in entries.iter_mut().zip(&opponents) {
        entry.omw = faced.iter().map(|&o| decisive[o]).sum();
    }

    entries.sort_by(rank_order);
    log::debug!("Computed standings for {} players over {} matches", entries.len(), matches.len());
    Ok(entries)
}

/// Ranking order: wins desc, then OMW desc, then player id asc.
pub fn rank_order(a: &StandingEntry, b: &StandingEntry) -> Ordering {
    b.wins
        .cmp(&a.wins)
        .then(b.omw.cmp(&a.omw))
        .then(a.player_id.cmp(&b.player_id))
}

fn record_meeting(entries: &mut [StandingEntry], opponents: &mut [Vec<usize>], a: usize, b: usize) {
    entries[a].matches += 1;
    entries[b].matches += 1;
    opponents[a].push(b);
    opponents[b].push(a);
}
