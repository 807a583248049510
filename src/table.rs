use std::collections::BTreeMap;

use crate::hand::Board;
use crate::player::{Participant, PlayerId, Roster};
use crate::pot::{Pot, PotError, PotKey};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TableError {
    #[error("no available seats")]
    NoSeats,
    #[error("seat {0} is already occupied")]
    SeatOccupied(usize),
    #[error("seat {0} is out of range for a {1}-seat table")]
    SeatOutOfRange(usize, usize),
    #[error("player {0} is not at the table")]
    PlayerNotFound(PlayerId),
}

/// A table: fixed ring of seats, the roster of players in them, the shared
/// board and the pot. Needs at least two seats for the blind and button
/// arithmetic to mean anything.
#[derive(Debug)]
pub struct Table {
    pub(crate) seats: Vec<Option<PlayerId>>,
    pub(crate) roster: Roster,
    pub(crate) pot: Pot,
    pub(crate) board: Board,
    pub(crate) button: usize,
    pub(crate) small_blind: u64,
    pub(crate) big_blind: u64,
}

impl Table {
    pub fn new(seats: usize, small_blind: u64, big_blind: u64) -> Self {
        Self {
            seats: vec![None; seats],
            roster: Roster::new(),
            pot: Pot::new(),
            board: Board::new(),
            button: 0,
            small_blind,
            big_blind,
        }
    }

    /// Seat a player. `seat` claims a specific position; `None` takes the
    /// first empty one. The buy-in becomes the player's stack.
    pub fn add_player(
        &mut self,
        name: &str,
        buy_in: u64,
        seat: Option<usize>,
    ) -> Result<PlayerId, TableError> {
        let pos = match seat {
            Some(pos) => {
                if pos >= self.seats.len() {
                    return Err(TableError::SeatOutOfRange(pos, self.seats.len()));
                }
                if self.seats[pos].is_some() {
                    return Err(TableError::SeatOccupied(pos));
                }
                pos
            }
            None => self
                .seats
                .iter()
                .position(Option::is_none)
                .ok_or(TableError::NoSeats)?,
        };
        let id = self.roster.insert(Participant::new(name, buy_in));
        self.seats[pos] = Some(id);
        Ok(id)
    }

    /// Remove a player and return them, seat freed.
    pub fn remove_player(&mut self, id: PlayerId) -> Result<Participant, TableError> {
        let pos = self.seat_of(id).ok_or(TableError::PlayerNotFound(id))?;
        self.seats[pos] = None;
        self.roster.remove(id).ok_or(TableError::PlayerNotFound(id))
    }

    pub fn seat_of(&self, id: PlayerId) -> Option<usize> {
        self.seats.iter().position(|s| *s == Some(id))
    }

    pub fn id_at(&self, seat: usize) -> Option<PlayerId> {
        self.seats.get(seat).copied().flatten()
    }

    pub fn player(&self, id: PlayerId) -> Option<&Participant> {
        self.roster.get(id)
    }

    pub(crate) fn player_mut(&mut self, id: PlayerId) -> Option<&mut Participant> {
        self.roster.get_mut(id)
    }

    /// Players still in the hand, in seat order.
    pub fn active_players(&self) -> Vec<PlayerId> {
        self.seats
            .iter()
            .flatten()
            .copied()
            .filter(|&id| {
                self.roster
                    .get(id)
                    .map_or(false, |p| p.is_active && !p.has_folded)
            })
            .collect()
    }

    /// The first seat strictly after `start` (wrapping) holding a player
    /// who can still take an action: active, not folded, not all-in.
    pub fn next_active_after(&self, start: usize) -> Option<(usize, PlayerId)> {
        let n = self.seats.len();
        for i in 1..=n {
            let pos = (start + i) % n;
            if let Some(id) = self.seats[pos] {
                if let Some(p) = self.roster.get(id) {
                    if p.is_active && !p.has_folded && !p.is_all_in {
                        return Some((pos, id));
                    }
                }
            }
        }
        None
    }

    /// Clear the previous hand: board wiped, pot reset, every player's
    /// per-hand state cleared. Stacks carry over.
    pub fn reset_hand(&mut self) {
        self.board.clear();
        self.pot.reset();
        for (_, p) in self.roster.iter_mut() {
            p.reset_for_hand();
        }
    }

    /// Split the main pot among `winners`.
    pub fn award_pot(&mut self, winners: &[PlayerId]) -> Result<(), PotError> {
        let Self { pot, roster, .. } = self;
        pot.award_to(roster, winners)
    }

    /// Award each keyed pot to its own winner list.
    pub fn award_pots(
        &mut self,
        winners: &BTreeMap<PotKey, Vec<PlayerId>>,
    ) -> Result<(), PotError> {
        let Self { pot, roster, .. } = self;
        pot.award_by_pot(roster, winners)
    }

    pub fn n_seats(&self) -> usize {
        self.seats.len()
    }

    pub fn player_count(&self) -> usize {
        self.roster.len()
    }

    pub fn button(&self) -> usize {
        self.button
    }

    /// Park the button on a specific seat, wrapping out-of-range values.
    pub fn set_button(&mut self, seat: usize) {
        self.button = seat % self.seats.len().max(1);
    }

    pub fn small_blind(&self) -> u64 {
        self.small_blind
    }

    pub fn big_blind(&self) -> u64 {
        self.big_blind
    }

    pub fn pot(&self) -> &Pot {
        &self.pot
    }

    pub fn pot_mut(&mut self) -> &mut Pot {
        &mut self.pot
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
}

impl Default for Table {
    /// Six seats, blinds 1/2.
    fn default() -> Self {
        Self::new(6, 1, 2)
    }
}
