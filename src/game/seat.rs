use std::fmt;

/// Number of seats at the table.
pub const NUM_SEATS: usize = 3;

/// A seat at the three player table in acting order.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Seat {
    /// Acts first.
    First = 0,
    Second = 1,
    /// Acts last before the first seat gets a second turn.
    Third = 2,
}

impl Seat {
    pub const ALL: [Seat; NUM_SEATS] = [Seat::First, Seat::Second, Seat::Third];

    pub fn from_index(idx: usize) -> Option<Seat> {
        Self::ALL.get(idx).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// The seat that acts after this one, wrapping around the table.
    pub fn next(self) -> Seat {
        Self::ALL[(self.index() + 1) % NUM_SEATS]
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}
