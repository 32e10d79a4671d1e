use crate::game::{Action, ActionType, MatchState};

use super::Agent;

/// A replay agent that will replay a sequence of actions
/// from a vector. Once the actions run out it calls.
#[derive(Debug, Clone)]
pub struct VecReplayAgent {
    actions: Vec<ActionType>,
    idx: usize,
    default: ActionType,
}

impl VecReplayAgent {
    pub fn new(actions: Vec<ActionType>) -> Self {
        Self {
            actions,
            idx: 0,
            default: ActionType::Call,
        }
    }
}

impl Agent for VecReplayAgent {
    fn act(&mut self, _state: &MatchState) -> Action {
        let idx = self.idx;
        self.idx += 1;
        Action::new(self.actions.get(idx).copied().unwrap_or(self.default))
    }
}

#[cfg(test)]
mod tests {
    use crate::arena::{CallingAgent, HandSimulation};
    use crate::core::Rank;
    use crate::game::{ActionType::*, GameShape, Seat};

    use super::*;

    #[test_log::test]
    fn test_raise_then_folds() {
        let mut sim = HandSimulation::new(
            GameShape::kuhn_three_player(),
            vec![
                Box::new(VecReplayAgent::new(vec![Raise])),
                Box::new(VecReplayAgent::new(vec![Fold])),
                Box::new(VecReplayAgent::new(vec![Fold])),
            ],
        )
        .unwrap();

        // The jack steals the antes.
        let result = sim
            .run_with_cards([Rank::Jack, Rank::King, Rank::Ace])
            .unwrap();
        assert_eq!(&[Raise, Fold, Fold], result.round.actions());
        assert_eq!([2, -1, -1], result.payoffs);
        assert_eq!(Some(Seat::First), result.winner);
    }

    #[test_log::test]
    fn test_defaults_to_call() {
        let mut sim = HandSimulation::new(
            GameShape::kuhn_three_player(),
            vec![
                Box::new(VecReplayAgent::new(vec![])),
                Box::new(CallingAgent {}),
                Box::new(VecReplayAgent::new(vec![Raise])),
            ],
        )
        .unwrap();

        // Everyone calls the raise and the king wins 6.
        let result = sim
            .run_with_cards([Rank::King, Rank::Jack, Rank::Queen])
            .unwrap();
        assert_eq!(&[Call, Call, Raise, Call, Call], result.round.actions());
        assert_eq!([4, -2, -2], result.payoffs);
    }
}
