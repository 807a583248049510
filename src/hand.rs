use std::fmt;

use crate::cards::Card;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("hole cards must be distinct, got {0} twice")]
    DuplicateHoleCard(Card),
    #[error("board already holds {0}")]
    DuplicateBoardCard(Card),
    #[error("board is limited to five cards")]
    BoardFull,
}

/// The two private cards dealt to one player.
///
/// ```
/// use holdem_engine::cards::card_list;
/// use holdem_engine::hand::HoleCards;
///
/// let cards = card_list("Ah Kh").unwrap();
/// let hole = HoleCards::try_new(cards[0], cards[1]).unwrap();
/// assert_eq!(hole.to_string(), "Ah Kh");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoleCards {
    first: Card,
    second: Card,
}

impl HoleCards {
    pub fn try_new(first: Card, second: Card) -> Result<Self, HandError> {
        if first == second {
            return Err(HandError::DuplicateHoleCard(first));
        }
        Ok(Self { first, second })
    }

    pub const fn first(self) -> Card {
        self.first
    }

    pub const fn second(self) -> Card {
        self.second
    }

    pub const fn cards(self) -> [Card; 2] {
        [self.first, self.second]
    }
}

impl fmt::Display for HoleCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first, self.second)
    }
}

/// The shared community cards, at most five.
///
/// Starts empty; the dealer pushes three on the flop and one each on the
/// turn and river.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from up to five distinct cards, mainly for tests.
    pub fn try_new(cards: Vec<Card>) -> Result<Self, HandError> {
        let mut board = Board::new();
        for card in cards {
            board.push(card)?;
        }
        Ok(board)
    }

    pub(crate) fn push(&mut self, card: Card) -> Result<(), HandError> {
        if self.cards.len() >= 5 {
            return Err(HandError::BoardFull);
        }
        if self.cards.contains(&card) {
            return Err(HandError::DuplicateBoardCard(card));
        }
        self.cards.push(card);
        Ok(())
    }

    pub(crate) fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        for card in &self.cards {
            write!(f, "{sep}{card}")?;
            sep = " ";
        }
        Ok(())
    }
}
