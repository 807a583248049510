use log::debug;

use crate::agents::SourceTable;
use crate::dealer::{DealError, Dealer};
use crate::player::PlayerId;
use crate::pot::PotError;
use crate::showdown::{settle, HandEvaluator, ShowdownError};
use crate::state::{ActionError, AdvanceError, HandState, Phase};
use crate::table::Table;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PlayError {
    #[error("need at least two funded players, have {0}")]
    NotEnoughPlayers(usize),
    #[error(transparent)]
    Deal(#[from] DealError),
    #[error(transparent)]
    Action(#[from] ActionError),
    #[error(transparent)]
    Advance(#[from] AdvanceError),
    #[error(transparent)]
    Showdown(#[from] ShowdownError),
    #[error(transparent)]
    Pot(#[from] PotError),
}

/// How a hand finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandEnding {
    /// Everyone else folded; the pot moved without a reveal.
    FoldedOut { winner: PlayerId },
    /// The hand was settled at showdown.
    Showdown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandOutcome {
    /// Who collected chips and how many, in seat order left of the button.
    pub payouts: Vec<(PlayerId, u64)>,
    pub ending: HandEnding,
}

/// Play one complete hand: blinds, hole cards, a betting round per
/// street, then either a fold-through award or a full settlement.
///
/// The dealer's deck is used as-is so tests can stack it; give the
/// dealer a fresh shuffle between hands. The button moves to the next
/// funded seat once the hand ends.
pub fn play_hand<E>(
    table: &mut Table,
    dealer: &mut Dealer,
    sources: &mut SourceTable,
    evaluator: &E,
) -> Result<HandOutcome, PlayError>
where
    E: HandEvaluator + ?Sized,
{
    table.reset_hand();
    let funded = table.active_players().len();
    if funded < 2 {
        return Err(PlayError::NotEnoughPlayers(funded));
    }
    debug!("new hand, button at seat {}", table.button());

    dealer.collect_blinds(table);
    let mut state = HandState::new(table);
    dealer.deal_hole_cards(table)?;

    loop {
        while let Some((seat, id)) = state.next_to_act(table) {
            let Some(view) = state.turn_view(table, seat, id) else {
                break;
            };
            let action = sources.decide(id, &view);
            state.execute_action(table, id, action)?;
            if state.unfolded_count(table) <= 1 {
                break;
            }
        }

        let live: Vec<PlayerId> = state
            .active_ids()
            .iter()
            .copied()
            .filter(|&id| table.player(id).map_or(false, |p| !p.has_folded()))
            .collect();
        if let [survivor] = live.as_slice() {
            let survivor = *survivor;
            let amount = table.pot().total();
            table.award_pot(&[survivor])?;
            debug!("{survivor} takes {amount} uncontested");
            dealer.rotate_button(table);
            return Ok(HandOutcome {
                payouts: vec![(survivor, amount)],
                ending: HandEnding::FoldedOut { winner: survivor },
            });
        }

        state.advance_phase(table, dealer)?;
        if state.phase() == Phase::Showdown {
            break;
        }
    }

    let payouts = settle(table, evaluator)?;
    dealer.rotate_button(table);
    Ok(HandOutcome {
        payouts,
        ending: HandEnding::Showdown,
    })
}
