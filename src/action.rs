use std::fmt;

use crate::player::PlayerId;

/// The six legal action shapes, without amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Fold,
    Check,
    Call,
    Bet,
    Raise,
    AllIn,
}

impl ActionKind {
    pub fn label(self) -> &'static str {
        match self {
            ActionKind::Fold => "fold",
            ActionKind::Check => "check",
            ActionKind::Call => "call",
            ActionKind::Bet => "bet",
            ActionKind::Raise => "raise",
            ActionKind::AllIn => "all_in",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A player's decision at one turn. `Bet` carries the opening wager;
/// `Raise` carries the total street bet to reach, not the increment.
/// Call and all-in amounts are derived from table state at execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Fold,
    Check,
    Call,
    Bet(u64),
    Raise(u64),
    AllIn,
}

impl Action {
    pub fn kind(self) -> ActionKind {
        match self {
            Action::Fold => ActionKind::Fold,
            Action::Check => ActionKind::Check,
            Action::Call => ActionKind::Call,
            Action::Bet(_) => ActionKind::Bet,
            Action::Raise(_) => ActionKind::Raise,
            Action::AllIn => ActionKind::AllIn,
        }
    }
}

/// One executed action as it went into the street history. For calls and
/// all-ins `amount` is the chips actually paid; for raises it is the
/// total reached.
///
/// ```
/// use holdem_engine::action::{ActionKind, ActionRecord};
/// use holdem_engine::player::PlayerId;
///
/// let rec = ActionRecord::new(PlayerId::default(), ActionKind::Raise, 100);
/// assert_eq!(rec.to_string(), "raises to 100");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionRecord {
    pub player: PlayerId,
    pub kind: ActionKind,
    pub amount: u64,
}

impl ActionRecord {
    pub fn new(player: PlayerId, kind: ActionKind, amount: u64) -> Self {
        Self { player, kind, amount }
    }
}

impl fmt::Display for ActionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ActionKind::Fold => write!(f, "folds"),
            ActionKind::Check => write!(f, "checks"),
            ActionKind::Call => write!(f, "calls {}", self.amount),
            ActionKind::Bet => write!(f, "bets {}", self.amount),
            ActionKind::Raise => write!(f, "raises to {}", self.amount),
            ActionKind::AllIn => write!(f, "goes all-in with {}", self.amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(kind: ActionKind, amount: u64) -> ActionRecord {
        ActionRecord::new(PlayerId::default(), kind, amount)
    }

    #[test]
    fn display_covers_every_kind() {
        assert_eq!(rec(ActionKind::Fold, 0).to_string(), "folds");
        assert_eq!(rec(ActionKind::Check, 0).to_string(), "checks");
        assert_eq!(rec(ActionKind::Call, 50).to_string(), "calls 50");
        assert_eq!(rec(ActionKind::Bet, 25).to_string(), "bets 25");
        assert_eq!(rec(ActionKind::Raise, 100).to_string(), "raises to 100");
        assert_eq!(rec(ActionKind::AllIn, 100).to_string(), "goes all-in with 100");
    }

    #[test]
    fn labels_are_snake_case() {
        assert_eq!(ActionKind::AllIn.label(), "all_in");
        assert_eq!(ActionKind::Raise.label(), "raise");
    }

    #[test]
    fn decision_kind_strips_amounts() {
        assert_eq!(Action::Bet(40).kind(), ActionKind::Bet);
        assert_eq!(Action::Raise(80).kind(), ActionKind::Raise);
        assert_eq!(Action::AllIn.kind(), ActionKind::AllIn);
    }
}
