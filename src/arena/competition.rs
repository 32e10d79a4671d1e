use std::fmt::Debug;

use rand::Rng;
use tracing::event;

use crate::game::NUM_SEATS;

use super::{HandSimulation, errors::SimulationError, simulation::HandResult};

/// Plays many hands with the same three agents and tabulates how each
/// seat did.
pub struct Competition {
    sim: HandSimulation,
    /// The number of hands that have been played.
    pub num_hands: usize,
    /// Running total of chips won by each seat.
    pub total_payoff: [i64; NUM_SEATS],
    /// How many hands each seat won chips in.
    pub win_count: [usize; NUM_SEATS],
    /// How many hands each seat lost chips in.
    pub loss_count: [usize; NUM_SEATS],
}

impl Competition {
    pub fn new(sim: HandSimulation) -> Self {
        Self {
            sim,
            num_hands: 0,
            total_payoff: [0; NUM_SEATS],
            win_count: [0; NUM_SEATS],
            loss_count: [0; NUM_SEATS],
        }
    }

    /// Play `num_hands` more hands.
    pub fn run<R: Rng>(&mut self, num_hands: usize, rng: &mut R) -> Result<(), SimulationError> {
        for _ in 0..num_hands {
            let result = self.sim.run(rng)?;
            self.update_metrics(&result);
        }
        event!(
            tracing::Level::INFO,
            num_hands = self.num_hands,
            total_payoff = ?self.total_payoff,
            "Finished hands"
        );
        Ok(())
    }

    /// Average chips won per hand by each seat.
    pub fn average_payoff(&self) -> [f64; NUM_SEATS] {
        if self.num_hands == 0 {
            return [0.0; NUM_SEATS];
        }
        self.total_payoff.map(|total| total as f64 / self.num_hands as f64)
    }

    fn update_metrics(&mut self, result: &HandResult) {
        self.num_hands += 1;
        for (idx, payoff) in result.payoffs.iter().enumerate() {
            self.total_payoff[idx] += payoff;
            if *payoff > 0 {
                self.win_count[idx] += 1;
            } else if *payoff < 0 {
                self.loss_count[idx] += 1;
            }
        }
    }
}

impl Debug for Competition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Competition")
            .field("num_hands", &self.num_hands)
            .field("total_payoff", &self.total_payoff)
            .field("win_count", &self.win_count)
            .field("loss_count", &self.loss_count)
            .finish()
    }
}
