use log::debug;
use rand::Rng;

use crate::cards::Card;
use crate::deck::Deck;
use crate::hand::{HandError, HoleCards};
use crate::table::Table;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DealError {
    #[error("the deck is out of cards")]
    EmptyDeck,
    #[error("unknown street '{0}'")]
    UnknownStreet(String),
    #[error("bad deal: {0}")]
    Card(#[from] HandError),
}

/// Runs the deck for a table: pitches hole cards, burns and turns the
/// board, moves the button and collects the blinds.
#[derive(Debug)]
pub struct Dealer {
    deck: Deck,
}

impl Dealer {
    pub fn new(deck: Deck) -> Self {
        Self { deck }
    }

    /// Dealer holding a full deck shuffled from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(Deck::seeded(seed))
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Swap in a freshly shuffled 52-card deck between hands.
    pub fn refill_and_shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.deck.refill_and_shuffle(rng);
    }

    /// Deal two hole cards to every player still in the hand, one card per
    /// player per pass around the table. The table is only written once
    /// every card has been drawn.
    pub fn deal_hole_cards(&mut self, table: &mut Table) -> Result<(), DealError> {
        let order = table.active_players();
        let mut firsts = Vec::with_capacity(order.len());
        for _ in &order {
            firsts.push(self.deck.draw().ok_or(DealError::EmptyDeck)?);
        }
        let mut holes = Vec::with_capacity(order.len());
        for first in firsts {
            let second = self.deck.draw().ok_or(DealError::EmptyDeck)?;
            holes.push(HoleCards::try_new(first, second)?);
        }
        for (&id, hole) in order.iter().zip(holes) {
            if let Some(p) = table.player_mut(id) {
                p.hole = Some(hole);
            }
        }
        Ok(())
    }

    /// Burn one card, then deal the street onto the board: three for
    /// "FLOP", one for "TURN" or "RIVER" (case-insensitive). Returns the
    /// cards dealt.
    pub fn deal_community(
        &mut self,
        table: &mut Table,
        street: &str,
    ) -> Result<Vec<Card>, DealError> {
        let count = match street.to_ascii_uppercase().as_str() {
            "FLOP" => 3,
            "TURN" | "RIVER" => 1,
            _ => return Err(DealError::UnknownStreet(street.to_string())),
        };
        self.deck.draw().ok_or(DealError::EmptyDeck)?;
        let mut dealt = Vec::with_capacity(count);
        for _ in 0..count {
            dealt.push(self.deck.draw().ok_or(DealError::EmptyDeck)?);
        }
        for &card in &dealt {
            table.board.push(card)?;
        }
        debug!("board now {}", table.board);
        Ok(dealt)
    }

    /// Move the button to the next seat whose player still has chips,
    /// skipping empty seats and busted stacks. If nobody qualifies the
    /// button still advances one seat.
    pub fn rotate_button(&self, table: &mut Table) {
        let n = table.seats.len();
        for i in 1..=n {
            let pos = (table.button + i) % n;
            if let Some(id) = table.seats[pos] {
                if table.roster.get(id).map_or(false, |p| p.stack > 0) {
                    table.button = pos;
                    return;
                }
            }
        }
        table.button = (table.button + 1) % n;
    }

    /// Post the small and big blinds from the two seats left of the
    /// button. Short stacks post what they have; empty seats post nothing.
    /// Returns the amounts actually posted.
    pub fn collect_blinds(&self, table: &mut Table) -> (u64, u64) {
        let n = table.seats.len();
        let sb_seat = (table.button + 1) % n;
        let bb_seat = (table.button + 2) % n;
        let (sb, bb) = (table.small_blind, table.big_blind);
        let sb_paid = Self::post_from(table, sb_seat, sb);
        let bb_paid = Self::post_from(table, bb_seat, bb);
        debug!("blinds posted: {sb_paid} and {bb_paid}");
        (sb_paid, bb_paid)
    }

    fn post_from(table: &mut Table, seat: usize, amount: u64) -> u64 {
        let Some(id) = table.seats[seat] else {
            return 0;
        };
        let Table { roster, pot, .. } = table;
        let Some(p) = roster.get_mut(id) else {
            return 0;
        };
        let paid = p.post_blind(amount);
        pot.add_contribution(id, paid);
        paid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::card_list;
    use crate::player::PlayerId;

    fn rigged(cards: &str) -> Dealer {
        Dealer::new(Deck::from_cards(card_list(cards).unwrap()))
    }

    fn three_seated() -> (Table, Vec<PlayerId>) {
        let mut table = Table::default();
        let ids = ["A", "B", "C"]
            .iter()
            .map(|n| table.add_player(n, 100, None).unwrap())
            .collect();
        (table, ids)
    }

    #[test]
    fn hole_cards_go_out_one_per_pass() {
        let (mut table, ids) = three_seated();
        let mut dealer = rigged("Ah Kh Qh Ad Kd Qd");
        dealer.deal_hole_cards(&mut table).unwrap();

        let a = table.player(ids[0]).unwrap().hole().unwrap();
        assert_eq!(a.to_string(), "Ah Ad");
        let b = table.player(ids[1]).unwrap().hole().unwrap();
        assert_eq!(b.to_string(), "Kh Kd");
        let c = table.player(ids[2]).unwrap().hole().unwrap();
        assert_eq!(c.to_string(), "Qh Qd");
    }

    #[test]
    fn folded_players_are_not_dealt_in() {
        let (mut table, ids) = three_seated();
        table.player_mut(ids[1]).unwrap().fold();
        let mut dealer = rigged("Ah Kh Ad Kd");
        dealer.deal_hole_cards(&mut table).unwrap();
        assert!(table.player(ids[1]).unwrap().hole().is_none());
        assert!(table.player(ids[2]).unwrap().hole().is_some());
    }

    #[test]
    fn flop_burns_one_and_deals_three() {
        let (mut table, _) = three_seated();
        let mut dealer = rigged("2c 7h 8h 9h");
        let dealt = dealer.deal_community(&mut table, "flop").unwrap();
        assert_eq!(dealt.len(), 3);
        assert_eq!(table.board().to_string(), "7h 8h 9h", "2c was burned");
        assert_eq!(dealer.deck().remaining(), 0);
    }

    #[test]
    fn turn_and_river_burn_and_deal_one() {
        let (mut table, _) = three_seated();
        let mut dealer = rigged("2c 7h 2d 8h");
        dealer.deal_community(&mut table, "TURN").unwrap();
        dealer.deal_community(&mut table, "River").unwrap();
        assert_eq!(table.board().to_string(), "7h 8h");
    }

    #[test]
    fn unknown_street_is_rejected() {
        let (mut table, _) = three_seated();
        let mut dealer = rigged("2c 7h");
        assert_eq!(
            dealer.deal_community(&mut table, "PREFLOP"),
            Err(DealError::UnknownStreet("PREFLOP".into()))
        );
        assert!(table.board().is_empty());
    }

    #[test]
    fn running_out_of_cards_errors() {
        let (mut table, _) = three_seated();
        let mut dealer = rigged("2c 7h 8h");
        assert_eq!(
            dealer.deal_community(&mut table, "FLOP"),
            Err(DealError::EmptyDeck)
        );
    }

    #[test]
    fn button_skips_busted_stacks() {
        let (mut table, ids) = three_seated();
        table.player_mut(ids[1]).unwrap().stack = 0;
        let dealer = rigged("");
        dealer.rotate_button(&mut table);
        assert_eq!(table.button(), 2, "seat 1 is broke, button lands on seat 2");
    }

    #[test]
    fn button_advances_even_with_nobody_funded() {
        let (mut table, ids) = three_seated();
        for id in ids {
            table.player_mut(id).unwrap().stack = 0;
        }
        let dealer = rigged("");
        dealer.rotate_button(&mut table);
        assert_eq!(table.button(), 1);
    }

    #[test]
    fn blinds_come_from_the_two_seats_after_the_button() {
        let (mut table, ids) = three_seated();
        let dealer = rigged("");
        let (sb, bb) = dealer.collect_blinds(&mut table);
        assert_eq!((sb, bb), (1, 2));
        assert_eq!(table.player(ids[1]).unwrap().street_bet(), 1);
        assert_eq!(table.player(ids[2]).unwrap().street_bet(), 2);
        assert_eq!(table.pot().total(), 3);
    }

    #[test]
    fn short_stack_posts_what_it_has_and_is_all_in() {
        let mut table = Table::default();
        table.add_player("A", 100, None).unwrap();
        table.add_player("B", 100, None).unwrap();
        let shorty = table.add_player("C", 1, None).unwrap();
        let dealer = rigged("");
        let (_, bb) = dealer.collect_blinds(&mut table);
        assert_eq!(bb, 1);
        let p = table.player(shorty).unwrap();
        assert_eq!(p.stack(), 0);
        assert!(p.is_all_in());
        assert_eq!(table.pot().total(), 2);
    }

    #[test]
    fn empty_blind_seat_posts_nothing() {
        let mut table = Table::default();
        table.add_player("A", 100, Some(0)).unwrap();
        table.add_player("B", 100, Some(2)).unwrap();
        let dealer = rigged("");
        let (sb, bb) = dealer.collect_blinds(&mut table);
        assert_eq!((sb, bb), (0, 2), "seat 1 is empty so no small blind");
        assert_eq!(table.pot().total(), 2);
    }
}
