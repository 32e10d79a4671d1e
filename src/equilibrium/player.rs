use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::event;

use crate::arena::Agent;
use crate::game::{Action, GameShape, MatchState};

use super::errors::StrategyError;
use super::family::{SubFamily, check_params};
use super::params::ParameterVector;
use super::probs::ActionProbs;
use super::situation::SituationClassifier;

/// A three player Kuhn poker player that plays one profile of the
/// equilibrium family.
///
/// The same player can sit in any seat; the seat it is playing comes from
/// the `MatchState` it is asked to act on.
///
/// ```
/// use kuhn3p::core::Rank;
/// use kuhn3p::equilibrium::{EquilibriumPlayer, ParameterVector};
/// use kuhn3p::game::{ActionType, GameShape, MatchState, Seat};
///
/// let params = ParameterVector::from_free(0.1, 0.2, 0.5, 0.25, 0.25, 0.0);
/// let mut player = EquilibriumPlayer::new(&GameShape::kuhn_three_player(), params, 42).unwrap();
///
/// // The first seat never opens the betting.
/// let state = MatchState::new(Seat::First, Rank::Ace, Default::default());
/// assert_eq!(ActionType::Call, player.act(&state).action_type);
/// ```
#[derive(Debug, Clone)]
pub struct EquilibriumPlayer {
    game: GameShape,
    params: ParameterVector,
    family: SubFamily,
    seed: u64,
    rng: StdRng,
}

impl EquilibriumPlayer {
    /// Validate `params` against `game` and build a player whose draws come
    /// from an rng seeded with `seed`.
    ///
    /// # Errors
    ///
    /// - `StrategyError::WrongGame` if `game` isn't three player Kuhn poker.
    /// - `StrategyError::ParameterOutOfFamilyRange` if `c11` picks no
    ///   sub-family.
    /// - `StrategyError::FamilyConstraintViolated` naming the first broken
    ///   sub-family 1 inequality.
    /// - `StrategyError::ParameterOutOfUnitInterval` if any slot ends up
    ///   outside of `[0, 1]`.
    pub fn new(
        game: &GameShape,
        params: ParameterVector,
        seed: u64,
    ) -> Result<Self, StrategyError> {
        if !game.is_three_player_kuhn() {
            event!(tracing::Level::WARN, game = ?game, "Not a three player Kuhn game");
            return Err(StrategyError::WrongGame);
        }

        let mut params = params;
        let family = check_params(&mut params).inspect_err(|e| {
            event!(tracing::Level::WARN, error = %e, "Rejected strategy parameters");
        })?;

        event!(
            tracing::Level::DEBUG,
            family = family.number(),
            seed = seed,
            params = ?params.values(),
            "Created equilibrium player"
        );

        Ok(Self {
            game: game.clone(),
            params,
            family,
            seed,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// The validated parameters, derived slots filled in.
    pub fn params(&self) -> &ParameterVector {
        &self.params
    }

    pub fn family(&self) -> SubFamily {
        self.family
    }

    pub fn game(&self) -> &GameShape {
        &self.game
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The distribution the player would sample from in `view`. Doesn't
    /// consume any randomness.
    pub fn action_probs(&self, view: &MatchState) -> ActionProbs {
        let probs = view
            .seat
            .action_probs(view.actions(), view.rank, &self.params);
        event!(
            tracing::Level::TRACE,
            seat = view.seat.index(),
            rank = %view.rank,
            situation = %view.seat.classify(view.actions()),
            probs = ?probs.as_array(),
            "Resolved action probabilities"
        );
        probs
    }

    /// Pick an action for `view` using the player's own rng.
    pub fn act(&mut self, view: &MatchState) -> Action {
        let r: f64 = self.rng.random();
        self.act_with_draw(view, r)
    }

    /// Pick an action for `view` with an externally supplied uniform draw
    /// in `[0, 1)`.
    pub fn act_with_draw(&self, view: &MatchState, r: f64) -> Action {
        let probs = self.action_probs(view);
        let action_type = probs.sample(r);
        event!(
            tracing::Level::DEBUG,
            seat = view.seat.index(),
            rank = %view.rank,
            draw = r,
            action = %action_type,
            "Equilibrium player acted"
        );
        Action::new(action_type)
    }
}

impl Agent for EquilibriumPlayer {
    fn act(&mut self, state: &MatchState) -> Action {
        EquilibriumPlayer::act(self, state)
    }
}
