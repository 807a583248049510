//! Pluggable decision sources. The betting loop asks the source mapped
//! to the player on turn for an [`Action`]; executing it stays with the
//! caller, so a source never touches the table.

use std::collections::{BTreeMap, VecDeque};
use std::fmt;

use crate::action::Action;
use crate::player::PlayerId;
use crate::state::TurnView;

/// Something that can choose an action when it is a player's turn.
pub trait ActionSource {
    fn decide(&mut self, view: &TurnView) -> Action;

    /// Queue an intent ahead of the next turn. Sources that do not take
    /// intents ignore it and return false.
    fn submit(&mut self, _intent: Action) -> bool {
        false
    }
}

/// The safe default when nobody has a better idea: check a free option,
/// fold to a bet.
pub fn check_or_fold(view: &TurnView) -> Action {
    if view.call_amount == 0 {
        Action::Check
    } else {
        Action::Fold
    }
}

/// Plays a fixed list of actions in order, then folds every turn after
/// the script runs out.
#[derive(Debug, Clone)]
pub struct ScriptedAgent {
    plan: VecDeque<Action>,
}

impl ScriptedAgent {
    pub fn new<I>(plan: I) -> Self
    where
        I: IntoIterator<Item = Action>,
    {
        Self {
            plan: plan.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.plan.len()
    }
}

impl ActionSource for ScriptedAgent {
    fn decide(&mut self, _view: &TurnView) -> Action {
        self.plan.pop_front().unwrap_or(Action::Fold)
    }
}

/// The call station: checks when the option is free, otherwise calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct CallingAgent;

impl ActionSource for CallingAgent {
    fn decide(&mut self, view: &TurnView) -> Action {
        if view.call_amount == 0 {
            Action::Check
        } else {
            Action::Call
        }
    }
}

/// Holds one pending intent submitted from outside, typically a UI.
/// With no intent waiting it falls back to [`check_or_fold`], so a hand
/// can never stall on an absent human.
#[derive(Debug, Default)]
pub struct HumanAgent {
    pending: Option<Action>,
}

impl HumanAgent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl ActionSource for HumanAgent {
    fn decide(&mut self, view: &TurnView) -> Action {
        match self.pending.take() {
            Some(intent) => intent,
            None => check_or_fold(view),
        }
    }

    fn submit(&mut self, intent: Action) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(intent);
        true
    }
}

/// Maps players to their decision sources. Players without one play
/// [`check_or_fold`].
#[derive(Default)]
pub struct SourceTable {
    sources: BTreeMap<PlayerId, Box<dyn ActionSource>>,
}

impl fmt::Debug for SourceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SourceTable(")?;
        let mut sep = "";
        for id in self.sources.keys() {
            write!(f, "{sep}{id}")?;
            sep = ", ";
        }
        write!(f, ")")
    }
}

impl SourceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assign(&mut self, id: PlayerId, source: Box<dyn ActionSource>) {
        self.sources.insert(id, source);
    }

    pub fn remove(&mut self, id: PlayerId) -> Option<Box<dyn ActionSource>> {
        self.sources.remove(&id)
    }

    pub fn has_source(&self, id: PlayerId) -> bool {
        self.sources.contains_key(&id)
    }

    /// Pass an intent through to the player's source.
    pub fn submit(&mut self, id: PlayerId, intent: Action) -> bool {
        self.sources
            .get_mut(&id)
            .map_or(false, |s| s.submit(intent))
    }

    /// Ask the player's source to act on `view`.
    pub fn decide(&mut self, id: PlayerId, view: &TurnView) -> Action {
        match self.sources.get_mut(&id) {
            Some(source) => source.decide(view),
            None => check_or_fold(view),
        }
    }

    pub fn clear(&mut self) {
        self.sources.clear();
    }
}
