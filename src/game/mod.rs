//! The fixed three player Kuhn poker game: the game definition, the
//! actions, and the view of a hand that a single seat gets when asked to
//! act.
mod action;
mod round;
mod seat;
mod shape;
mod state;

pub use action::{Action, ActionType, NUM_ACTION_TYPES};
pub use round::BettingRound;
pub use seat::{NUM_SEATS, Seat};
pub use shape::{BettingType, GameShape};
pub use state::MatchState;
