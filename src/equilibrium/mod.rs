//! The equilibrium family for three player Kuhn poker.
//!
//! A profile of the family is picked by six free parameters. Constructing
//! an [`EquilibriumPlayer`] checks which sub-family the parameters belong
//! to, verifies the sub-family's inequalities, and fills in the
//! parameters the algebra forces. After that every decision is a table
//! lookup keyed by the seat, the situation the public betting puts the
//! seat in, and the seat's card, followed by one uniform draw.
//!
//! ```
//! use kuhn3p::core::Rank;
//! use kuhn3p::equilibrium::{EquilibriumPlayer, ParameterVector, StrategyError};
//! use kuhn3p::game::{GameShape, MatchState};
//!
//! let game = GameShape::kuhn_three_player();
//!
//! // b21 has to be at most 1/4
//! let bad = ParameterVector::from_free(0.1, 0.3, 0.5, 0.25, 0.25, 0.0);
//! assert!(matches!(
//!     EquilibriumPlayer::new(&game, bad, 1),
//!     Err(StrategyError::FamilyConstraintViolated(_))
//! ));
//!
//! let good = ParameterVector::from_free(0.1, 0.2, 0.5, 0.25, 0.25, 0.0);
//! let player = EquilibriumPlayer::new(&game, good, 1).unwrap();
//!
//! // Third seat holding the ace after two checks always bets.
//! let state = MatchState::parse("2:A:cc").unwrap();
//! assert_eq!(1.0, player.action_probs(&state).raise());
//! ```
mod errors;
pub mod family;
mod params;
mod player;
mod probs;
mod situation;
pub mod tables;

pub use errors::{FamilyOneConstraint, StrategyError};
pub use family::{SubFamily, check_family_one, check_params};
pub use params::{NUM_PARAMS, ParamSlot, ParameterVector};
pub use player::EquilibriumPlayer;
pub use probs::ActionProbs;
pub use situation::{Situation, SituationClassifier};
