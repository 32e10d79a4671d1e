//! kuhn3p plays three player Kuhn poker according to a parameterized
//! family of Nash equilibrium strategies.
//!
//! The game is the four card, single round, limit variant: one card each
//! from the jack, queen, king and ace, an ante from every seat, and at most
//! one raise.

/// Card ranks and the four card deck.
pub mod core;
/// The game definition, actions and what a seat sees when it acts.
pub mod game;
/// Parameter validation and the equilibrium strategy itself.
pub mod equilibrium;
/// Agents and hand simulation.
pub mod arena;

/// Loading players from JSON.
#[cfg(feature = "serde")]
pub mod config;
