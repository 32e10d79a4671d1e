use std::fmt;

use crate::core::Rank;
use crate::game::{ActionType, Seat};

use super::params::ParameterVector;
use super::probs::ActionProbs;
use super::tables::{A, B, C};

/// A pattern of the public betting seen by the seat about to act.
///
/// What each situation means depends on the seat; see
/// [`SituationClassifier::classify`]. The first situation is always the
/// seat's decision with no raise to face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Situation {
    One = 0,
    Two = 1,
    Three = 2,
    Four = 3,
}

impl Situation {
    pub const ALL: [Situation; 4] = [
        Situation::One,
        Situation::Two,
        Situation::Three,
        Situation::Four,
    ];

    /// Column of this situation in the strategy tables.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Can the seat still raise? Only when nobody has raised yet.
    pub fn is_open(self) -> bool {
        self == Situation::One
    }
}

impl fmt::Display for Situation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "situation {}", self.index() + 1)
    }
}

/// Maps a seat's view of the hand to its strategy.
pub trait SituationClassifier {
    /// Which situation the betting history puts this seat in.
    fn classify(&self, history: &[ActionType]) -> Situation;

    /// The aggressive-action probability for a situation and rank.
    fn mixing(&self, situation: Situation, rank: Rank, params: &ParameterVector) -> f64;

    /// Classify the history and turn the table entry into a distribution.
    fn action_probs(
        &self,
        history: &[ActionType],
        rank: Rank,
        params: &ParameterVector,
    ) -> ActionProbs {
        let situation = self.classify(history);
        let p = self.mixing(situation, rank, params);
        if situation.is_open() {
            ActionProbs::open(p)
        } else {
            ActionProbs::facing_raise(p)
        }
    }
}

impl SituationClassifier for Seat {
    /// - First seat: 1 nothing has happened, 2 the second seat checked and
    ///   the third raised, 3 the second seat raised and the third folded,
    ///   4 the second seat raised and the third called.
    /// - Second seat: 1 the first seat checked, 2 the first seat raised,
    ///   3 the third seat raised and the first folded, 4 the third seat
    ///   raised and the first called.
    /// - Third seat: 1 both checked, 2 check then raise, 3 raise then fold,
    ///   4 raise then call.
    ///
    /// Histories the seat can never see are a caller bug and only trip a
    /// debug assertion.
    fn classify(&self, history: &[ActionType]) -> Situation {
        let action = |idx: usize| history.get(idx).copied();
        match self {
            Seat::First => {
                debug_assert!(
                    history.is_empty() || history.len() == 3,
                    "First seat can't act after {} actions",
                    history.len()
                );
                if history.is_empty() {
                    Situation::One
                } else if action(1) == Some(ActionType::Call) {
                    Situation::Two
                } else if action(2) == Some(ActionType::Fold) {
                    Situation::Three
                } else {
                    Situation::Four
                }
            }
            Seat::Second => {
                debug_assert!(
                    history.len() == 1 || history.len() == 4,
                    "Second seat can't act after {} actions",
                    history.len()
                );
                if history.len() == 1 {
                    if action(0) == Some(ActionType::Call) {
                        Situation::One
                    } else {
                        Situation::Two
                    }
                } else if action(3) == Some(ActionType::Fold) {
                    Situation::Three
                } else {
                    Situation::Four
                }
            }
            Seat::Third => {
                debug_assert!(
                    history.len() == 2,
                    "Third seat can't act after {} actions",
                    history.len()
                );
                match (action(0), action(1)) {
                    (Some(ActionType::Call), Some(ActionType::Call)) => Situation::One,
                    (Some(ActionType::Call), _) => Situation::Two,
                    (_, Some(ActionType::Fold)) => Situation::Three,
                    _ => Situation::Four,
                }
            }
        }
    }

    fn mixing(&self, situation: Situation, rank: Rank, params: &ParameterVector) -> f64 {
        let (row, col) = (rank.index(), situation.index());
        match self {
            Seat::First => A[row][col],
            Seat::Second => B[row][col].resolve(params),
            Seat::Third => C[row][col].resolve(params),
        }
    }
}
