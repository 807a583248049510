use std::collections::BTreeMap;
use std::fmt;

use crate::hand::HoleCards;

/// Stable handle for a player, assigned by the roster and valid for the
/// player's whole stay at the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlayerId(pub(crate) u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// One seated player: chip stack plus per-hand betting state.
#[derive(Debug, Clone, PartialEq)]
pub struct Participant {
    pub(crate) name: String,
    pub(crate) stack: u64,
    pub(crate) hole: Option<HoleCards>,
    pub(crate) street_bet: u64,
    pub(crate) is_active: bool,
    pub(crate) has_folded: bool,
    pub(crate) is_all_in: bool,
}

impl Participant {
    pub fn new(name: impl Into<String>, stack: u64) -> Self {
        Self {
            name: name.into(),
            stack,
            hole: None,
            street_bet: 0,
            is_active: stack > 0,
            has_folded: false,
            is_all_in: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Chips behind, not counting anything already wagered.
    pub fn stack(&self) -> u64 {
        self.stack
    }

    /// Chips wagered on the current street.
    pub fn street_bet(&self) -> u64 {
        self.street_bet
    }

    pub fn hole(&self) -> Option<HoleCards> {
        self.hole
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn has_folded(&self) -> bool {
        self.has_folded
    }

    pub fn is_all_in(&self) -> bool {
        self.is_all_in
    }

    /// Move up to `amount` chips from the stack into the street bet.
    /// A short stack pays what it has and is marked all-in.
    /// Returns the chips actually paid.
    pub(crate) fn commit(&mut self, amount: u64) -> u64 {
        let paid = amount.min(self.stack);
        self.stack -= paid;
        self.street_bet += paid;
        if self.stack == 0 {
            self.is_all_in = true;
        }
        paid
    }

    /// Post a forced blind. Pays up to the stack and sets the street bet
    /// to the amount actually paid.
    pub(crate) fn post_blind(&mut self, amount: u64) -> u64 {
        let paid = amount.min(self.stack);
        self.stack -= paid;
        self.street_bet = paid;
        if self.stack == 0 {
            self.is_all_in = true;
        }
        paid
    }

    pub(crate) fn fold(&mut self) {
        self.has_folded = true;
        self.is_active = false;
    }

    /// Ready this player for the next hand. Stacks carry over; a player
    /// left with no chips sits out until re-funded.
    pub(crate) fn reset_for_hand(&mut self) {
        self.hole = None;
        self.street_bet = 0;
        self.has_folded = false;
        self.is_all_in = false;
        self.is_active = self.stack > 0;
    }
}

/// Owning arena for participants, keyed by [`PlayerId`]. Iteration order
/// follows id order, which is join order.
#[derive(Debug, Default)]
pub struct Roster {
    players: BTreeMap<PlayerId, Participant>,
    next_id: u32,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, participant: Participant) -> PlayerId {
        let id = PlayerId(self.next_id);
        self.next_id += 1;
        self.players.insert(id, participant);
        id
    }

    pub(crate) fn remove(&mut self, id: PlayerId) -> Option<Participant> {
        self.players.remove(&id)
    }

    pub fn get(&self, id: PlayerId) -> Option<&Participant> {
        self.players.get(&id)
    }

    pub(crate) fn get_mut(&mut self, id: PlayerId) -> Option<&mut Participant> {
        self.players.get_mut(&id)
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut Participant)> {
        self.players.iter_mut().map(|(&id, p)| (id, p))
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.players.contains_key(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &Participant)> {
        self.players.iter().map(|(&id, p)| (id, p))
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
