use crate::core::card::Rank;

use rand::Rng;
use rand::seq::SliceRandom;

/// `Deck` is the four card Kuhn deck. Cards are dealt from the end.
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    /// Card storage.
    cards: Vec<Rank>,
}

impl Deck {
    /// Create the full four card deck, lowest rank first.
    ///
    /// ```
    /// use kuhn3p::core::Deck;
    ///
    /// assert_eq!(4, Deck::new().len());
    /// ```
    pub fn new() -> Self {
        Self {
            cards: Rank::ranks().to_vec(),
        }
    }

    /// How many cards are there in the deck ?
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Have all cards been dealt ?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Randomly shuffle the deck.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng)
    }

    /// Deal a card if there is one there to deal.
    /// None if the deck is empty
    pub fn deal(&mut self) -> Option<Rank> {
        self.cards.pop()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<Rank>> for Deck {
    fn from(value: Vec<Rank>) -> Self {
        Self { cards: value }
    }
}
