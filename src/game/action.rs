use std::fmt;

/// The three kinds of action in a limit betting round.
///
/// A call with nothing to call is a check, and the only raise of the round
/// is the opening bet.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ActionType {
    Fold = 0,
    Call = 1,
    Raise = 2,
}

/// Number of action types.
pub const NUM_ACTION_TYPES: usize = 3;

impl ActionType {
    /// All action types in sampling order.
    pub const ALL: [ActionType; NUM_ACTION_TYPES] =
        [ActionType::Fold, ActionType::Call, ActionType::Raise];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_char(c: char) -> Option<ActionType> {
        match c {
            'f' => Some(ActionType::Fold),
            'c' => Some(ActionType::Call),
            'r' => Some(ActionType::Raise),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            ActionType::Fold => 'f',
            ActionType::Call => 'c',
            ActionType::Raise => 'r',
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// An action as sent back to the dealer.
///
/// Limit games have no bet sizing so `size` is always 0 for actions
/// produced by this crate.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Action {
    pub action_type: ActionType,
    pub size: u32,
}

impl Action {
    pub fn new(action_type: ActionType) -> Self {
        Self {
            action_type,
            size: 0,
        }
    }

    pub fn fold() -> Self {
        Self::new(ActionType::Fold)
    }

    pub fn call() -> Self {
        Self::new(ActionType::Call)
    }

    pub fn raise() -> Self {
        Self::new(ActionType::Raise)
    }
}

impl From<ActionType> for Action {
    fn from(value: ActionType) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_size() {
        let a = Action::raise();
        assert_eq!(ActionType::Raise, a.action_type);
        assert_eq!(0, a.size);
        assert_eq!(Action::call(), ActionType::Call.into());
    }

    #[test]
    fn test_chars() {
        for t in ActionType::ALL {
            assert_eq!(Some(t), ActionType::from_char(t.to_char()));
        }
        assert_eq!(None, ActionType::from_char('x'));
    }
}
