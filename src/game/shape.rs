/// How bets are sized.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BettingType {
    /// Every raise is the fixed raise size.
    Limit,
    NoLimit,
}

/// Description of a poker game as handed out by a dealer.
///
/// Only the fields needed to recognise Kuhn poker and settle its hands are
/// kept. Round indexed fields hold one entry per betting round.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameShape {
    pub betting_type: BettingType,
    pub num_rounds: u8,
    pub max_raises: Vec<u8>,
    pub num_suits: u8,
    pub num_ranks: u8,
    pub num_hole_cards: u8,
    pub num_board_cards: Vec<u8>,
    pub num_players: u8,
    /// Chips every player puts in before the cards are dealt.
    pub ante: u32,
    /// Size of the single limit raise.
    pub raise_size: u32,
}

impl GameShape {
    /// The three player, four rank Kuhn poker game.
    ///
    /// ```
    /// use kuhn3p::game::GameShape;
    ///
    /// assert!(GameShape::kuhn_three_player().is_three_player_kuhn());
    /// ```
    pub fn kuhn_three_player() -> Self {
        Self {
            betting_type: BettingType::Limit,
            num_rounds: 1,
            max_raises: vec![1],
            num_suits: 1,
            num_ranks: 4,
            num_hole_cards: 1,
            num_board_cards: vec![0],
            num_players: 3,
            ante: 1,
            raise_size: 1,
        }
    }

    /// Is this the three player Kuhn poker game?
    ///
    /// Round indexed fields are only checked for the first round. The ante
    /// and raise size are not part of the check.
    pub fn is_three_player_kuhn(&self) -> bool {
        self.betting_type == BettingType::Limit
            && self.num_rounds == 1
            && self.max_raises.first() == Some(&1)
            && self.num_suits == 1
            && self.num_ranks == 4
            && self.num_hole_cards == 1
            && self.num_board_cards.first() == Some(&0)
            && self.num_players == 3
    }

    /// Maximum number of raises in the first (and only) round.
    pub fn first_round_max_raises(&self) -> u8 {
        self.max_raises.first().copied().unwrap_or(0)
    }
}

impl Default for GameShape {
    fn default() -> Self {
        Self::kuhn_three_player()
    }
}
