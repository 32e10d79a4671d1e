use crate::game::{Action, MatchState};

use super::Agent;

/// Checks when nothing has been bet and calls any raise.
#[derive(Debug, Clone, Copy, Default)]
pub struct CallingAgent {}

impl Agent for CallingAgent {
    fn act(&mut self, _state: &MatchState) -> Action {
        Action::call()
    }
}

#[cfg(test)]
mod tests {
    use crate::arena::HandSimulation;
    use crate::core::Rank;
    use crate::game::{ActionType, GameShape};

    use super::*;

    #[test]
    fn test_call_agents() {
        let mut sim = HandSimulation::new(
            GameShape::kuhn_three_player(),
            vec![
                Box::new(CallingAgent {}),
                Box::new(CallingAgent {}),
                Box::new(CallingAgent {}),
            ],
        )
        .unwrap();

        let result = sim
            .run_with_cards([Rank::Queen, Rank::Ace, Rank::Jack])
            .unwrap();

        assert_eq!(&[ActionType::Call; 3], result.round.actions());
        // Ace takes the three antes.
        assert_eq!([-1, 2, -1], result.payoffs);
    }
}
