//! holdem-engine: Texas Hold'em betting engine
//!
//! Goals:
//! - Chip-exact betting, pot and side-pot accounting for Hold'em
//! - Small, well-documented public API
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! Hand strength is deliberately out of scope: settlement ranks hands
//! through the [`showdown::HandEvaluator`] trait, so any evaluator can
//! plug in.
//!
//! ## Quick start: run a betting round
//! ```
//! use holdem_engine::action::Action;
//! use holdem_engine::dealer::Dealer;
//! use holdem_engine::state::HandState;
//! use holdem_engine::table::Table;
//!
//! let mut table = Table::default();
//! let alice = table.add_player("Alice", 200, None).unwrap();
//! let bob = table.add_player("Bob", 200, None).unwrap();
//! table.add_player("Carol", 200, None).unwrap();
//!
//! let mut dealer = Dealer::seeded(7);
//! dealer.collect_blinds(&mut table);
//! let mut state = HandState::new(&table);
//! dealer.deal_hole_cards(&mut table).unwrap();
//!
//! // Blinds are 1/2: Alice opens, the blinds are already part-way in.
//! let (_, first) = state.next_to_act(&table).unwrap();
//! assert_eq!(first, alice);
//! state.execute_action(&mut table, alice, Action::Call).unwrap();
//! state.execute_action(&mut table, bob, Action::Call).unwrap();
//! assert!(state.round_complete(&table));
//! assert_eq!(table.pot().total(), 6);
//! ```
//!
//! ## Whole hands
//! [`runner::play_hand`] drives a complete hand against pluggable
//! [`agents::ActionSource`] decision sources: blinds, a betting round
//! per street, then a fold-through award or a full side-pot settlement.

pub mod action;
pub mod agents;
pub mod cards;
pub mod dealer;
pub mod deck;
pub mod hand;
pub mod player;
pub mod pot;
pub mod runner;
pub mod showdown;
pub mod state;
pub mod table;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
