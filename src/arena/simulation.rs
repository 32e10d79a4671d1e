use rand::Rng;
use tracing::{event, instrument};

use crate::core::{Deck, Rank};
use crate::game::{ActionType, BettingRound, GameShape, MatchState, NUM_SEATS, Seat};

use super::{Agent, errors::SimulationError};

/// The outcome of one simulated hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandResult {
    /// The card dealt to each seat.
    pub cards: [Rank; NUM_SEATS],
    /// Every action taken.
    pub round: BettingRound,
    /// What each seat put in the pot.
    pub contributed: [i64; NUM_SEATS],
    /// Net chips won or lost by each seat. Sums to zero.
    pub payoffs: [i64; NUM_SEATS],
    pub winner: Option<Seat>,
}

/// Plays hands of three player Kuhn poker between three agents.
///
/// Each agent only ever sees its own card. Agents that try an action that
/// isn't legal at that point end the hand with an error.
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use kuhn3p::arena::{Agent, CallingAgent, HandSimulation};
/// use kuhn3p::game::GameShape;
///
/// let agents: Vec<Box<dyn Agent>> = vec![
///     Box::<CallingAgent>::default(),
///     Box::<CallingAgent>::default(),
///     Box::<CallingAgent>::default(),
/// ];
/// let mut sim = HandSimulation::new(GameShape::kuhn_three_player(), agents).unwrap();
/// let mut rng = StdRng::seed_from_u64(420);
///
/// let result = sim.run(&mut rng).unwrap();
/// assert_eq!(0, result.payoffs.iter().sum::<i64>());
/// ```
pub struct HandSimulation {
    game: GameShape,
    agents: Vec<Box<dyn Agent>>,
}

impl HandSimulation {
    pub fn new(game: GameShape, agents: Vec<Box<dyn Agent>>) -> Result<Self, SimulationError> {
        if !game.is_three_player_kuhn() {
            return Err(SimulationError::WrongGame);
        }
        if agents.len() != NUM_SEATS {
            return Err(SimulationError::WrongAgentCount(agents.len()));
        }
        Ok(Self { game, agents })
    }

    pub fn game(&self) -> &GameShape {
        &self.game
    }

    /// Shuffle a fresh deck, deal one card to each seat and play the hand.
    pub fn run<R: Rng>(&mut self, rng: &mut R) -> Result<HandResult, SimulationError> {
        let mut deck = Deck::new();
        deck.shuffle(rng);

        let mut cards = [Rank::Jack; NUM_SEATS];
        for card in cards.iter_mut() {
            *card = deck.deal().ok_or(SimulationError::DeckExhausted)?;
        }
        self.run_with_cards(cards)
    }

    /// Play a hand with a fixed deal.
    #[instrument(level = "debug", skip(self))]
    pub fn run_with_cards(
        &mut self,
        cards: [Rank; NUM_SEATS],
    ) -> Result<HandResult, SimulationError> {
        for (i, card) in cards.iter().enumerate() {
            if cards[..i].contains(card) {
                return Err(SimulationError::DuplicateCard(*card));
            }
        }

        let max_raises = self.game.first_round_max_raises();
        let mut round = BettingRound::new();
        while let Some(seat) = round.next_to_act() {
            let state = MatchState::new(seat, cards[seat.index()], round.clone());
            let action = self.agents[seat.index()].act(&state).action_type;

            if !round.legal_actions(max_raises).contains(&action) {
                event!(
                    tracing::Level::WARN,
                    seat = seat.index(),
                    action = %action,
                    "Agent tried an illegal action"
                );
                return Err(SimulationError::IllegalAction { seat, action });
            }

            event!(
                tracing::Level::DEBUG,
                seat = seat.index(),
                card = %cards[seat.index()],
                action = %action,
                "Agent acted"
            );
            round.push(action);
        }

        let result = self.settle(cards, round);
        event!(
            tracing::Level::DEBUG,
            payoffs = ?result.payoffs,
            winner = ?result.winner,
            "Hand complete"
        );
        Ok(result)
    }

    /// Everyone antes, the raise and every call of it add the raise size,
    /// and the best card still in takes the pot.
    fn settle(&self, cards: [Rank; NUM_SEATS], round: BettingRound) -> HandResult {
        let ante = i64::from(self.game.ante);
        let raise_size = i64::from(self.game.raise_size);

        let mut contributed = [ante; NUM_SEATS];
        let mut raised = false;
        for (seat, action) in round.seated_actions() {
            match action {
                ActionType::Raise => {
                    raised = true;
                    contributed[seat.index()] += raise_size;
                }
                ActionType::Call if raised => contributed[seat.index()] += raise_size,
                _ => {}
            }
        }

        let folded = round.folded();
        let winner = Seat::ALL
            .into_iter()
            .filter(|s| !folded[s.index()])
            .max_by_key(|s| cards[s.index()]);

        let pot: i64 = contributed.iter().sum();
        let mut payoffs = [0; NUM_SEATS];
        for seat in Seat::ALL {
            let won = if Some(seat) == winner { pot } else { 0 };
            payoffs[seat.index()] = won - contributed[seat.index()];
        }

        HandResult {
            cards,
            round,
            contributed,
            payoffs,
            winner,
        }
    }
}
