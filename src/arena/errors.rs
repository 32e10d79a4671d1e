use thiserror::Error;

use crate::core::Rank;
use crate::game::{ActionType, Seat};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    #[error("Hand simulations are only defined for three player Kuhn poker")]
    WrongGame,
    #[error("Need exactly three agents, got {0}")]
    WrongAgentCount(usize),
    #[error("Card {0} dealt more than once")]
    DuplicateCard(Rank),
    #[error("Ran out of cards to deal")]
    DeckExhausted,
    #[error("Seat {seat} can't {action} here")]
    IllegalAction { seat: Seat, action: ActionType },
}
