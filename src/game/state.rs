use crate::core::Rank;

use super::{action::ActionType, round::BettingRound, seat::Seat};

/// What a single seat can see when it has to act: its own seat, its own
/// card, and the public actions so far.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchState {
    pub seat: Seat,
    pub rank: Rank,
    pub round: BettingRound,
}

impl MatchState {
    pub fn new(seat: Seat, rank: Rank, round: BettingRound) -> Self {
        Self { seat, rank, round }
    }

    /// Parse a compact view like `"1:K:cr"`: seat index, rank character,
    /// then one character per action.
    ///
    /// ```
    /// use kuhn3p::core::Rank;
    /// use kuhn3p::game::{MatchState, Seat};
    ///
    /// let state = MatchState::parse("2:A:cr").unwrap();
    /// assert_eq!(Seat::Third, state.seat);
    /// assert_eq!(Rank::Ace, state.rank);
    /// assert_eq!(2, state.actions().len());
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s.splitn(3, ':');
        let seat = parts
            .next()?
            .parse::<usize>()
            .ok()
            .and_then(Seat::from_index)?;
        let mut rank_chars = parts.next()?.chars();
        let rank = Rank::from_char(rank_chars.next()?)?;
        if rank_chars.next().is_some() {
            return None;
        }
        let round = parts
            .next()
            .unwrap_or("")
            .chars()
            .map(ActionType::from_char)
            .collect::<Option<BettingRound>>()?;
        Some(Self::new(seat, rank, round))
    }

    pub fn actions(&self) -> &[ActionType] {
        self.round.actions()
    }
}
