//! This is the arena module for simulating hands via agents.
//!
//! # Single Hand
//!
//! ```
//! use rand::{SeedableRng, rngs::StdRng};
//! use kuhn3p::arena::{Agent, HandSimulation};
//! use kuhn3p::equilibrium::{EquilibriumPlayer, ParameterVector};
//! use kuhn3p::game::GameShape;
//!
//! let game = GameShape::kuhn_three_player();
//! let params = ParameterVector::from_free(0.1, 0.2, 0.5, 0.25, 0.25, 0.5);
//! let agents: Vec<Box<dyn Agent>> = (0..3)
//!     .map(|seed| -> Box<dyn Agent> {
//!         Box::new(EquilibriumPlayer::new(&game, params, seed).unwrap())
//!     })
//!     .collect();
//!
//! let mut sim = HandSimulation::new(game, agents).unwrap();
//! let mut rng = StdRng::seed_from_u64(420);
//! let result = sim.run(&mut rng).unwrap();
//! assert!(result.round.is_complete());
//! ```
//!
//! # Competition
//!
//! The same agents can play many hands with the results tabulated.
//!
//! ```
//! use rand::{SeedableRng, rngs::StdRng};
//! use kuhn3p::arena::{Agent, CallingAgent, Competition, HandSimulation};
//! use kuhn3p::game::GameShape;
//!
//! let agents: Vec<Box<dyn Agent>> = vec![
//!     Box::<CallingAgent>::default(),
//!     Box::<CallingAgent>::default(),
//!     Box::<CallingAgent>::default(),
//! ];
//! let sim = HandSimulation::new(GameShape::kuhn_three_player(), agents).unwrap();
//! let mut competition = Competition::new(sim);
//! competition.run(100, &mut StdRng::seed_from_u64(1)).unwrap();
//!
//! println!("{:?}", competition);
//! ```
pub mod agent;
pub mod competition;
pub mod errors;
pub mod simulation;

pub use agent::{Agent, CallingAgent, VecReplayAgent};
pub use competition::Competition;
pub use errors::SimulationError;
pub use simulation::{HandResult, HandSimulation};
