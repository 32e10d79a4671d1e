//! This is the core module. It exports the cards of the
//! four card Kuhn deck.

/// card.rs has the rank.
mod card;
/// Re-export Rank
pub use self::card::{NUM_RANKS, Rank};

/// Deck is the four card deck.
mod deck;
/// Export `Deck`
pub use self::deck::Deck;
