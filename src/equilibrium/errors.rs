use thiserror::Error;

use super::params::ParamSlot;

/// The inequalities a first sub-family parameter vector has to satisfy,
/// in the order they are checked.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FamilyOneConstraint {
    #[error("b21 greater than 1/4")]
    B21AboveQuarter,
    #[error("b11 greater than b21")]
    B11AboveB21,
    #[error("b32 too large for any sub-family 1 equilibrium")]
    B32TooLarge,
    #[error("c33 too small for any sub-family 1 equilibrium")]
    C33TooSmall,
    #[error("c33 too large for any sub-family 1 equilibrium")]
    C33TooLarge,
}

/// Everything that can go wrong building an `EquilibriumPlayer`.
///
/// These only happen during construction. Once a player exists every
/// decision succeeds.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StrategyError {
    #[error("Equilibrium player used in a game that is not three player Kuhn poker")]
    WrongGame,
    #[error("c11 parameter {0} outside of range for any equilibrium sub-family")]
    ParameterOutOfFamilyRange(f64),
    #[error("Sub-family 1 constraint violated: {0}")]
    FamilyConstraintViolated(#[from] FamilyOneConstraint),
    #[error("Strategy parameter {slot} = {value} must be in [0,1]")]
    ParameterOutOfUnitInterval { slot: ParamSlot, value: f64 },
}
