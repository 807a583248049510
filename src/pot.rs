use std::collections::{BTreeMap, BTreeSet};

use crate::player::{PlayerId, Roster};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PotError {
    #[error("winner {0} is not in the roster")]
    UnknownWinner(PlayerId),
}

/// One carved-off side pot: its chips and the players whose contributions
/// reached its level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidePot {
    pub(crate) amount: u64,
    pub(crate) contributors: BTreeSet<PlayerId>,
}

impl SidePot {
    pub fn amount(&self) -> u64 {
        self.amount
    }

    pub fn contributors(&self) -> &BTreeSet<PlayerId> {
        &self.contributors
    }
}

/// Addresses one pot when awarding by pot. Side pots are indexed in the
/// order [`Pot::resolve_side_pots`] created them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PotKey {
    Main,
    Side(usize),
}

/// Chips wagered this hand, tracked per contributor so uneven all-in
/// levels can be carved into side pots at settlement.
///
/// With contributions of 100, 50 and 75 the carve yields a 150 pot shared
/// by all three, a 50 pot shared by the two larger stacks, and 25 left in
/// the main pot for the largest alone.
#[derive(Debug, Clone, Default)]
pub struct Pot {
    pub(crate) main: u64,
    pub(crate) sides: Vec<SidePot>,
    pub(crate) contributions: BTreeMap<PlayerId, u64>,
}

impl Pot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit `amount` chips from `player`. Zero-chip contributions are
    /// ignored so callers can pass through short posts unconditionally.
    pub fn add_contribution(&mut self, player: PlayerId, amount: u64) {
        if amount == 0 {
            return;
        }
        self.main += amount;
        *self.contributions.entry(player).or_insert(0) += amount;
    }

    /// Everything on the table: main pot plus all side pots.
    pub fn total(&self) -> u64 {
        self.main + self.sides.iter().map(|s| s.amount).sum::<u64>()
    }

    pub fn main(&self) -> u64 {
        self.main
    }

    pub fn side_pots(&self) -> &[SidePot] {
        &self.sides
    }

    /// Total chips `player` has put in this hand.
    pub fn contribution(&self, player: PlayerId) -> u64 {
        self.contributions.get(&player).copied().unwrap_or(0)
    }

    pub fn contributions(&self) -> impl Iterator<Item = (PlayerId, u64)> + '_ {
        self.contributions.iter().map(|(&id, &c)| (id, c))
    }

    /// Carve side pots out of the contributions. Each distinct contribution
    /// level below the largest becomes a side pot holding that slice from
    /// every player who reached it; the main pot keeps the top slice.
    ///
    /// Call once per hand, after the final street and before awarding.
    pub fn resolve_side_pots(&mut self) {
        let mut levels: Vec<u64> = self.contributions.values().copied().collect();
        levels.sort_unstable();
        levels.dedup();
        if levels.len() <= 1 {
            return;
        }

        self.sides.clear();
        let mut prev = 0u64;
        for &level in &levels[..levels.len() - 1] {
            let contributors: BTreeSet<PlayerId> = self
                .contributions
                .iter()
                .filter(|&(_, &c)| c >= level)
                .map(|(&id, _)| id)
                .collect();
            let amount = (level - prev) * contributors.len() as u64;
            if amount > 0 {
                self.sides.push(SidePot { amount, contributors });
            }
            prev = level;
        }

        // Main is rebuilt from the books; carving twice leaves the split
        // unchanged.
        let total: u64 = self.contributions.values().sum();
        let carved: u64 = self.sides.iter().map(|s| s.amount).sum();
        self.main = total - carved;
    }

    /// Split the main pot evenly among `winners`, handing leftover odd
    /// chips one each in list order. An empty list leaves the pot alone.
    pub fn award_to(&mut self, roster: &mut Roster, winners: &[PlayerId]) -> Result<(), PotError> {
        if winners.is_empty() {
            return Ok(());
        }
        for &id in winners {
            if !roster.contains(id) {
                return Err(PotError::UnknownWinner(id));
            }
        }
        Self::pay_out(roster, winners, self.main);
        self.main = 0;
        Ok(())
    }

    /// Award each keyed pot to its own winner list. Pots with no entry,
    /// or an empty list, keep their chips; awarded side pots stay in the
    /// vector with their amount zeroed. Any unknown winner fails the whole
    /// call before a single chip moves.
    pub fn award_by_pot(
        &mut self,
        roster: &mut Roster,
        winners: &BTreeMap<PotKey, Vec<PlayerId>>,
    ) -> Result<(), PotError> {
        for ids in winners.values() {
            for &id in ids {
                if !roster.contains(id) {
                    return Err(PotError::UnknownWinner(id));
                }
            }
        }
        if let Some(main_winners) = winners.get(&PotKey::Main) {
            if !main_winners.is_empty() {
                Self::pay_out(roster, main_winners, self.main);
                self.main = 0;
            }
        }
        for (i, side) in self.sides.iter_mut().enumerate() {
            if let Some(side_winners) = winners.get(&PotKey::Side(i)) {
                if !side_winners.is_empty() {
                    Self::pay_out(roster, side_winners, side.amount);
                    side.amount = 0;
                }
            }
        }
        Ok(())
    }

    fn pay_out(roster: &mut Roster, winners: &[PlayerId], amount: u64) {
        let share = amount / winners.len() as u64;
        let mut odd = (amount % winners.len() as u64) as usize;
        for &id in winners {
            let mut take = share;
            if odd > 0 {
                take += 1;
                odd -= 1;
            }
            if let Some(p) = roster.get_mut(id) {
                p.stack += take;
            }
        }
    }

    /// Clear everything for the next hand.
    pub fn reset(&mut self) {
        self.main = 0;
        self.sides.clear();
        self.contributions.clear();
    }
}
