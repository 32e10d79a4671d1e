use std::fmt;

/// Card rank in the four card Kuhn deck.
///
/// There is only a single suit so the rank is the whole card.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub enum Rank {
    /// J
    Jack = 0,
    /// Q
    Queen = 1,
    /// K
    King = 2,
    /// A
    Ace = 3,
}

/// Number of ranks in the deck.
pub const NUM_RANKS: usize = 4;

/// Constant of all the ranks.
/// This is what `Rank::ranks()` returns
const RANKS: [Rank; NUM_RANKS] = [Rank::Jack, Rank::Queen, Rank::King, Rank::Ace];

impl Rank {
    /// Take a u8 and convert it to a rank.
    ///
    /// Returns `None` for anything past the ace.
    ///
    /// ```
    /// use kuhn3p::core::Rank;
    ///
    /// assert_eq!(Some(Rank::King), Rank::from_u8(2));
    /// assert_eq!(None, Rank::from_u8(4));
    /// ```
    pub fn from_u8(v: u8) -> Option<Rank> {
        RANKS.get(v as usize).copied()
    }

    /// Get all of the `Rank`'s that are possible, lowest first.
    pub fn ranks() -> [Rank; NUM_RANKS] {
        RANKS
    }

    pub fn from_char(c: char) -> Option<Rank> {
        match c {
            'A' => Some(Rank::Ace),
            'K' => Some(Rank::King),
            'Q' => Some(Rank::Queen),
            'J' => Some(Rank::Jack),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    /// Row of this rank in the strategy tables.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
