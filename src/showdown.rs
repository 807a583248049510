use std::collections::BTreeMap;

use log::debug;

use crate::hand::{Board, HoleCards};
use crate::player::PlayerId;
use crate::pot::{PotError, PotKey};
use crate::table::Table;

/// Relative hand strength. Only the ordering matters: higher wins, equal
/// scores split the pot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandScore(pub u64);

/// Ranks a player's hand against the board. The engine stays agnostic to
/// how strength is computed; plug in anything that totally orders hands.
pub trait HandEvaluator {
    fn rank(&self, hole: &HoleCards, board: &Board) -> HandScore;
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ShowdownError {
    #[error("player {0} reached showdown without hole cards")]
    MissingHoleCards(PlayerId),
    #[error(transparent)]
    Pot(#[from] PotError),
}

/// Carve the pot by contribution level and pay every tier out to its
/// best live hand. Ties split, odd chips going to the earliest seat left
/// of the button. A tier with a single live claimant is returned to them
/// without a reveal, which is how an uncalled bet finds its way home.
///
/// Returns each paid player with the total they received, in seat order
/// starting left of the button.
pub fn settle<E>(table: &mut Table, evaluator: &E) -> Result<Vec<(PlayerId, u64)>, ShowdownError>
where
    E: HandEvaluator + ?Sized,
{
    table.pot.resolve_side_pots();

    let top = table.pot.contributions().map(|(_, c)| c).max().unwrap_or(0);
    let mut pots: Vec<(PotKey, Vec<PlayerId>)> = Vec::new();
    pots.push((
        PotKey::Main,
        table
            .pot
            .contributions()
            .filter(|&(_, c)| c >= top)
            .map(|(id, _)| id)
            .collect(),
    ));
    for (i, side) in table.pot.side_pots().iter().enumerate() {
        pots.push((PotKey::Side(i), side.contributors().iter().copied().collect()));
    }

    let n = table.n_seats();
    let start = (table.button + 1) % n;
    let seat_order = |table: &Table, id: PlayerId| {
        table.seat_of(id).map_or(usize::MAX, |s| (s + n - start) % n)
    };

    let mut scores: BTreeMap<PlayerId, HandScore> = BTreeMap::new();
    let mut winners: BTreeMap<PotKey, Vec<PlayerId>> = BTreeMap::new();
    for (key, contributors) in pots {
        let live: Vec<PlayerId> = contributors
            .iter()
            .copied()
            .filter(|&id| table.player(id).map_or(false, |p| !p.has_folded()))
            .collect();
        // With nobody live the chips go back to whoever put them in.
        let claimants = if live.is_empty() { contributors } else { live };
        let mut pot_winners = if claimants.len() <= 1 {
            claimants
        } else {
            for &id in &claimants {
                if let std::collections::btree_map::Entry::Vacant(e) = scores.entry(id) {
                    let p = table
                        .player(id)
                        .ok_or(ShowdownError::MissingHoleCards(id))?;
                    let hole = p.hole().ok_or(ShowdownError::MissingHoleCards(id))?;
                    e.insert(evaluator.rank(&hole, table.board()));
                }
            }
            let best = claimants.iter().filter_map(|id| scores.get(id)).max().copied();
            claimants
                .into_iter()
                .filter(|id| scores.get(id).copied() == best)
                .collect()
        };
        pot_winners.sort_by_key(|&id| seat_order(table, id));
        winners.insert(key, pot_winners);
    }

    let before: BTreeMap<PlayerId, u64> = table.roster.iter().map(|(id, p)| (id, p.stack())).collect();
    table.award_pots(&winners)?;

    let mut payouts = Vec::new();
    for i in 0..n {
        let pos = (start + i) % n;
        if let Some(id) = table.id_at(pos) {
            if let Some(p) = table.player(id) {
                let won = p.stack().saturating_sub(before.get(&id).copied().unwrap_or(0));
                if won > 0 {
                    payouts.push((id, won));
                }
            }
        }
    }
    for (id, won) in &payouts {
        debug!("{id} collects {won}");
    }
    Ok(payouts)
}
