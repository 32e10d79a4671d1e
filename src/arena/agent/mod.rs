//! `Agent`s are the automatic players in the hand simulations.
//!
//! The equilibrium player is the interesting one; the agents here are
//! baselines and test helpers.
mod calling;
mod replay;

use crate::game::{Action, MatchState};

/// This is the trait that you need to implement in order to implement
/// different strategies. It's up to you to implement the logic and state.
pub trait Agent {
    /// Called by the simulation whenever the agent's seat is next to act.
    /// The agent only sees its own card.
    fn act(&mut self, state: &MatchState) -> Action;
}

pub use calling::CallingAgent;
pub use replay::VecReplayAgent;
