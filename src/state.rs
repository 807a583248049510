use std::fmt;

use log::debug;

use crate::action::{Action, ActionKind, ActionRecord};
use crate::dealer::{DealError, Dealer};
use crate::player::{Participant, PlayerId};
use crate::table::Table;

/// Streets of a hand, in the only order they can occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    PreFlop,
    Flop,
    Turn,
    River,
    Showdown,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::PreFlop => "pre_flop",
            Phase::Flop => "flop",
            Phase::Turn => "turn",
            Phase::River => "river",
            Phase::Showdown => "showdown",
        })
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActionError {
    #[error("player {0} is not seated at the table")]
    UnknownPlayer(PlayerId),
    #[error("{0} cannot act")]
    CannotAct(String),
    #[error("{player} has no legal {action} here")]
    Unavailable { player: String, action: ActionKind },
    #[error("bet of {amount} is below the minimum of {min}")]
    BetTooSmall { amount: u64, min: u64 },
    #[error("bet of {amount} exceeds the stack of {stack}")]
    BetOverStack { amount: u64, stack: u64 },
    #[error("raise to {amount} is below the minimum of {min}")]
    RaiseTooSmall { amount: u64, min: u64 },
    #[error("raise to {amount} exceeds the {available} chips available")]
    RaiseOverStack { amount: u64, available: u64 },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AdvanceError {
    #[error("the hand is already at showdown")]
    TerminalPhase,
    #[error(transparent)]
    Deal(#[from] DealError),
}

/// Everything a decision source gets to see when asked to act.
#[derive(Debug, Clone)]
pub struct TurnView {
    pub player: PlayerId,
    pub seat: usize,
    pub phase: Phase,
    pub current_bet: u64,
    pub min_raise: u64,
    pub call_amount: u64,
    pub stack: u64,
    pub street_bet: u64,
    pub pot_total: u64,
    pub valid: Vec<ActionKind>,
}

/// The betting state of one hand: whose turn it is, what the table bet
/// is, and what has happened this street.
///
/// Construct it after the blinds are posted; the opening bet level is
/// read off the table. Turn order starts three seats after the button
/// before the flop and one seat after it once the board is out.
#[derive(Debug)]
pub struct HandState {
    phase: Phase,
    current_bet: u64,
    min_raise: u64,
    last_raiser: Option<usize>,
    to_act_index: usize,
    active: Vec<PlayerId>,
    history: Vec<ActionRecord>,
}

impl HandState {
    pub fn new(table: &Table) -> Self {
        let n = table.n_seats();
        let current_bet = table
            .roster
            .iter()
            .map(|(_, p)| p.street_bet)
            .max()
            .unwrap_or(0);
        Self {
            phase: Phase::PreFlop,
            current_bet,
            min_raise: table.big_blind(),
            last_raiser: None,
            to_act_index: (table.button() + 3) % n,
            active: table.active_players(),
            history: Vec::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Highest street bet any player has out.
    pub fn current_bet(&self) -> u64 {
        self.current_bet
    }

    pub fn min_raise(&self) -> u64 {
        self.min_raise
    }

    /// Seat of the last player to bet or raise this street.
    pub fn last_raiser(&self) -> Option<usize> {
        self.last_raiser
    }

    pub fn to_act_index(&self) -> usize {
        self.to_act_index
    }

    /// Actions taken this street, oldest first. Cleared when the street
    /// ends.
    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }

    /// Players dealt into the hand who have not folded out of it, in the
    /// seat order they held when the hand began.
    pub fn active_ids(&self) -> &[PlayerId] {
        &self.active
    }

    pub fn unfolded_count(&self, table: &Table) -> usize {
        self.active
            .iter()
            .filter(|&&id| table.player(id).map_or(false, |p| !p.has_folded))
            .count()
    }

    /// Chips `p` must put in to match the table bet.
    pub fn call_amount(&self, p: &Participant) -> u64 {
        self.current_bet.saturating_sub(p.street_bet)
    }

    /// The actions `p` may legally take right now. A short stack may
    /// always call for less; all-in is open to anyone with chips.
    pub fn valid_actions(&self, p: &Participant) -> Vec<ActionKind> {
        let mut valid = vec![ActionKind::Fold];
        let call = self.call_amount(p);
        if call == 0 {
            valid.push(ActionKind::Check);
            if self.current_bet == 0 && p.stack > 0 {
                valid.push(ActionKind::Bet);
            }
        } else {
            valid.push(ActionKind::Call);
            let needed = (self.current_bet + self.min_raise).saturating_sub(p.street_bet);
            if needed <= p.stack {
                valid.push(ActionKind::Raise);
            }
        }
        if p.stack > 0 {
            valid.push(ActionKind::AllIn);
        }
        valid
    }

    /// Find the next player owing action and park the turn cursor on
    /// them. Scans from the cursor, wrapping once around the table, for a
    /// player who can act and is below the table bet. `None` means the
    /// round is settled.
    pub fn next_to_act(&mut self, table: &Table) -> Option<(usize, PlayerId)> {
        if self.round_complete(table) {
            return None;
        }
        let n = table.n_seats();
        for i in 0..n {
            let pos = (self.to_act_index + i) % n;
            if let Some(id) = table.seats[pos] {
                if let Some(p) = table.player(id) {
                    if p.is_active
                        && !p.has_folded
                        && !p.is_all_in
                        && p.street_bet < self.current_bet
                    {
                        self.to_act_index = pos;
                        return Some((pos, id));
                    }
                }
            }
        }
        None
    }

    /// A betting round is settled when at most one player is left in, or
    /// when nobody who can still act is below the table bet and action
    /// has come back around to the last raiser.
    pub fn round_complete(&self, table: &Table) -> bool {
        if self.unfolded_count(table) <= 1 {
            return true;
        }
        for &id in &self.active {
            if let Some(p) = table.player(id) {
                if !p.has_folded && !p.is_all_in && p.street_bet < self.current_bet {
                    return false;
                }
            }
        }
        let Some(raiser) = self.last_raiser else {
            return true;
        };
        let n = table.n_seats();
        for i in 1..n {
            let pos = (raiser + i) % n;
            if let Some(id) = table.seats[pos] {
                if let Some(p) = table.player(id) {
                    if p.is_active && !p.has_folded && !p.is_all_in && p.street_bet < self.current_bet
                    {
                        return false;
                    }
                }
            }
        }
        true
    }

    /// Validate and apply one action. Nothing is mutated unless every
    /// check passes. Returns the chips the player put in.
    ///
    /// Turn order is not enforced here; callers drive it through
    /// [`HandState::next_to_act`].
    pub fn execute_action(
        &mut self,
        table: &mut Table,
        player: PlayerId,
        action: Action,
    ) -> Result<u64, ActionError> {
        let seat = table
            .seat_of(player)
            .ok_or(ActionError::UnknownPlayer(player))?;
        let (name, stack, street_bet, eligible, valid) = {
            let p = table
                .player(player)
                .ok_or(ActionError::UnknownPlayer(player))?;
            (
                p.name().to_string(),
                p.stack(),
                p.street_bet(),
                p.is_active() && !p.has_folded() && !p.is_all_in(),
                self.valid_actions(p),
            )
        };
        if !eligible {
            return Err(ActionError::CannotAct(name));
        }
        if !valid.contains(&action.kind()) {
            return Err(ActionError::Unavailable {
                player: name,
                action: action.kind(),
            });
        }
        match action {
            Action::Bet(amount) => {
                if amount < self.min_raise {
                    return Err(ActionError::BetTooSmall {
                        amount,
                        min: self.min_raise,
                    });
                }
                if amount > stack {
                    return Err(ActionError::BetOverStack { amount, stack });
                }
            }
            Action::Raise(amount) => {
                let min = self.current_bet + self.min_raise;
                if amount < min {
                    return Err(ActionError::RaiseTooSmall { amount, min });
                }
                if amount > stack + street_bet {
                    return Err(ActionError::RaiseOverStack {
                        amount,
                        available: stack + street_bet,
                    });
                }
            }
            _ => {}
        }

        let mut paid = 0u64;
        let Table { roster, pot, .. } = table;
        if let Some(p) = roster.get_mut(player) {
            match action {
                Action::Fold => p.fold(),
                Action::Check => {}
                Action::Call => {
                    let owed = self.current_bet.saturating_sub(p.street_bet);
                    if owed > 0 {
                        paid = p.commit(owed);
                        pot.add_contribution(player, paid);
                    }
                }
                Action::Bet(amount) => {
                    paid = p.commit(amount);
                    pot.add_contribution(player, paid);
                    self.current_bet = p.street_bet;
                    self.last_raiser = Some(seat);
                }
                Action::Raise(amount) => {
                    let charge = amount - p.street_bet;
                    paid = p.commit(charge);
                    pot.add_contribution(player, paid);
                    self.current_bet = p.street_bet;
                    self.last_raiser = Some(seat);
                }
                Action::AllIn => {
                    let behind = p.stack;
                    paid = p.commit(behind);
                    pot.add_contribution(player, paid);
                    if p.street_bet > self.current_bet {
                        self.current_bet = p.street_bet;
                        self.last_raiser = Some(seat);
                    }
                }
            }
        }
        if action.kind() == ActionKind::Fold {
            self.active.retain(|&id| id != player);
        }

        let recorded = match action {
            Action::Fold | Action::Check => 0,
            Action::Call | Action::AllIn => paid,
            Action::Bet(a) | Action::Raise(a) => a,
        };
        let record = ActionRecord::new(player, action.kind(), recorded);
        debug!("{name} {record}");
        self.history.push(record);

        if action.kind() != ActionKind::Fold {
            self.to_act_index = (seat + 1) % table.n_seats();
        }
        Ok(paid)
    }

    /// Close out the street: the table bet and raiser reset, the street
    /// history empties, and every live player's street bet returns to
    /// zero. Pot contributions are untouched.
    pub fn resolve_bets(&mut self, table: &mut Table) {
        self.current_bet = 0;
        self.last_raiser = None;
        self.history.clear();
        for &id in &self.active {
            if let Some(p) = table.player_mut(id) {
                p.street_bet = 0;
            }
        }
    }

    /// Move to the next street, dealing its cards and resetting the
    /// betting round. Entering showdown deals nothing and leaves the
    /// river bets in place for settlement to read. Advancing past
    /// showdown is an error.
    pub fn advance_phase(
        &mut self,
        table: &mut Table,
        dealer: &mut Dealer,
    ) -> Result<(), AdvanceError> {
        match self.phase {
            Phase::PreFlop => {
                dealer.deal_community(table, "FLOP")?;
                self.phase = Phase::Flop;
                self.resolve_bets(table);
                self.to_act_index = (table.button() + 1) % table.n_seats();
            }
            Phase::Flop => {
                dealer.deal_community(table, "TURN")?;
                self.phase = Phase::Turn;
                self.resolve_bets(table);
                self.to_act_index = (table.button() + 1) % table.n_seats();
            }
            Phase::Turn => {
                dealer.deal_community(table, "RIVER")?;
                self.phase = Phase::River;
                self.resolve_bets(table);
                self.to_act_index = (table.button() + 1) % table.n_seats();
            }
            Phase::River => {
                self.phase = Phase::Showdown;
            }
            Phase::Showdown => return Err(AdvanceError::TerminalPhase),
        }
        debug!("entering {}", self.phase);
        Ok(())
    }

    /// Snapshot of the decision `player` faces, or `None` if they are
    /// not at the table.
    pub fn turn_view(&self, table: &Table, seat: usize, player: PlayerId) -> Option<TurnView> {
        let p = table.player(player)?;
        Some(TurnView {
            player,
            seat,
            phase: self.phase,
            current_bet: self.current_bet,
            min_raise: self.min_raise,
            call_amount: self.call_amount(p),
            stack: p.stack(),
            street_bet: p.street_bet(),
            pot_total: table.pot().total(),
            valid: self.valid_actions(p),
        })
    }
}
