use std::ops::Index;

use crate::game::{ActionType, NUM_ACTION_TYPES};

/// A distribution over fold, call and raise.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ActionProbs {
    probs: [f64; NUM_ACTION_TYPES],
}

impl ActionProbs {
    pub fn new(fold: f64, call: f64, raise: f64) -> Self {
        Self {
            probs: [fold, call, raise],
        }
    }

    /// Nothing to call yet: raise with probability `p`, otherwise check.
    pub fn open(p: f64) -> Self {
        Self::new(0.0, 1.0 - p, p)
    }

    /// Facing the capped raise: call with probability `p`, otherwise fold.
    pub fn facing_raise(p: f64) -> Self {
        Self::new(1.0 - p, p, 0.0)
    }

    pub fn fold(&self) -> f64 {
        self.probs[ActionType::Fold.index()]
    }

    pub fn call(&self) -> f64 {
        self.probs[ActionType::Call.index()]
    }

    pub fn raise(&self) -> f64 {
        self.probs[ActionType::Raise.index()]
    }

    pub fn as_array(&self) -> &[f64; NUM_ACTION_TYPES] {
        &self.probs
    }

    /// Action types with a nonzero probability.
    pub fn support(&self) -> impl Iterator<Item = ActionType> + '_ {
        ActionType::ALL
            .into_iter()
            .filter(|a| self.probs[a.index()] > 0.0)
    }

    /// Inverse CDF selection for a uniform draw `r` in `[0, 1)`.
    ///
    /// Walks fold, call, raise and picks the first action with nonzero
    /// probability whose entry covers what is left of `r`. If rounding
    /// leaves `r` uncovered the last action with nonzero probability is
    /// used, so an action that can't be played is never picked.
    ///
    /// This differs from a plain "first entry with `r <= p`, else raise"
    /// walk in two places: zero entries are skipped, so `r == 0` can't
    /// select an illegal fold, and the fallback is the last supported
    /// action rather than always raise.
    ///
    /// ```
    /// use kuhn3p::equilibrium::ActionProbs;
    /// use kuhn3p::game::ActionType;
    ///
    /// let probs = ActionProbs::new(0.0, 0.7, 0.3);
    /// assert_eq!(ActionType::Call, probs.sample(0.5));
    /// assert_eq!(ActionType::Raise, probs.sample(0.8));
    /// ```
    pub fn sample(&self, r: f64) -> ActionType {
        let mut r = r;
        let mut last = ActionType::Raise;
        for action in ActionType::ALL {
            let p = self.probs[action.index()];
            if p <= 0.0 {
                continue;
            }
            if r <= p {
                return action;
            }
            r -= p;
            last = action;
        }
        last
    }
}

impl Index<ActionType> for ActionProbs {
    type Output = f64;
    fn index(&self, action: ActionType) -> &f64 {
        &self.probs[action.index()]
    }
}
