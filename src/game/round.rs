use super::action::ActionType;
use super::seat::{NUM_SEATS, Seat};

/// The public action history of the single betting round.
///
/// Seats act in order starting from the first seat. A raise re-opens the
/// action for every other seat still in the hand, and the round ends once
/// no seat still in the hand owes an action.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BettingRound {
    actions: Vec<ActionType>,
}

/// Who still owes an action and who has folded after a sequence of actions.
#[derive(Debug, Clone, Copy)]
struct Progress {
    needs_action: [bool; NUM_SEATS],
    folded: [bool; NUM_SEATS],
    last: Option<Seat>,
}

impl Progress {
    fn replay(actions: &[ActionType]) -> Self {
        let mut progress = Progress {
            needs_action: [true; NUM_SEATS],
            folded: [false; NUM_SEATS],
            last: None,
        };
        for action in actions {
            let Some(seat) = progress.next() else {
                break;
            };
            progress.apply(seat, *action);
        }
        progress
    }

    fn apply(&mut self, seat: Seat, action: ActionType) {
        let idx = seat.index();
        self.needs_action[idx] = false;
        match action {
            ActionType::Fold => self.folded[idx] = true,
            ActionType::Raise => {
                for other in 0..NUM_SEATS {
                    if other != idx && !self.folded[other] {
                        self.needs_action[other] = true;
                    }
                }
            }
            ActionType::Call => {}
        }
        self.last = Some(seat);
    }

    fn next(&self) -> Option<Seat> {
        let mut seat = self.last.map_or(Seat::First, Seat::next);
        for _ in 0..NUM_SEATS {
            if self.needs_action[seat.index()] && !self.folded[seat.index()] {
                return Some(seat);
            }
            seat = seat.next();
        }
        None
    }
}

impl BettingRound {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the next action. The caller is responsible for checking
    /// legality with `legal_actions` first.
    pub fn push(&mut self, action: ActionType) {
        self.actions.push(action);
    }

    pub fn actions(&self) -> &[ActionType] {
        &self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn num_raises(&self) -> usize {
        self.actions
            .iter()
            .filter(|a| **a == ActionType::Raise)
            .count()
    }

    /// The seat that acts next, or `None` once the round is over.
    pub fn next_to_act(&self) -> Option<Seat> {
        Progress::replay(&self.actions).next()
    }

    pub fn is_complete(&self) -> bool {
        self.next_to_act().is_none()
    }

    /// Seats that have folded so far.
    pub fn folded(&self) -> [bool; NUM_SEATS] {
        Progress::replay(&self.actions).folded
    }

    /// Every action paired with the seat that took it.
    pub fn seated_actions(&self) -> Vec<(Seat, ActionType)> {
        let mut progress = Progress::replay(&[]);
        let mut res = Vec::with_capacity(self.actions.len());
        for action in &self.actions {
            let Some(seat) = progress.next() else {
                break;
            };
            progress.apply(seat, *action);
            res.push((seat, *action));
        }
        res
    }

    /// The seat that made the raise, if any.
    pub fn raiser(&self) -> Option<Seat> {
        self.seated_actions()
            .into_iter()
            .find(|(_, a)| *a == ActionType::Raise)
            .map(|(seat, _)| seat)
    }

    /// Actions the next seat may legally take given at most `max_raises`
    /// raises in the round. Empty once the round is complete.
    ///
    /// Folding is only allowed when facing a raise.
    pub fn legal_actions(&self, max_raises: u8) -> Vec<ActionType> {
        if self.is_complete() {
            return Vec::new();
        }
        let raises = self.num_raises();
        let mut res = Vec::with_capacity(3);
        if raises > 0 {
            res.push(ActionType::Fold);
        }
        res.push(ActionType::Call);
        if raises < max_raises as usize {
            res.push(ActionType::Raise);
        }
        res
    }
}

impl From<Vec<ActionType>> for BettingRound {
    fn from(actions: Vec<ActionType>) -> Self {
        Self { actions }
    }
}

impl FromIterator<ActionType> for BettingRound {
    fn from_iter<T: IntoIterator<Item = ActionType>>(iter: T) -> Self {
        Self {
            actions: iter.into_iter().collect(),
        }
    }
}
