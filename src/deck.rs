use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::cards::{Card, Rank, Suit};

/// A draw pile. Starts as the full 52 cards and shrinks as the dealer
/// burns and deals.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Fresh, unshuffled 52-card deck.
    ///
    /// ```
    /// use holdem_engine::deck::Deck;
    ///
    /// assert_eq!(Deck::standard().remaining(), 52);
    /// ```
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(52);
        for &suit in &Suit::ALL {
            for &rank in &Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    /// Full deck shuffled with a seeded RNG, for reproducible deals.
    pub fn seeded(seed: u64) -> Self {
        let mut deck = Self::standard();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        deck.shuffle_with(&mut rng);
        deck
    }

    /// Deck that yields exactly `cards`, first element drawn first.
    /// Intended for rigging known deals in tests.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        let mut cards = cards;
        cards.reverse();
        Self { cards }
    }

    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Restore all 52 cards and shuffle, ready for the next hand.
    pub fn refill_and_shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        *self = Self::standard();
        self.shuffle_with(rng);
    }

    /// Take the top card, or `None` once the deck runs dry.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}
