//! Strategy tables for the three seats.
//!
//! Rows are ranks (jack first), columns are the four situations of the
//! seat. Every entry is the probability of the aggressive option open in
//! that situation: raising when nobody has raised yet, calling when facing
//! the raise.
//!
//! The constants are the legs of the equilibrium family that do not depend
//! on the free parameters.

use crate::core::NUM_RANKS;

use super::params::{ParamSlot, ParameterVector};

/// Number of distinct situations each seat can act in.
pub const NUM_SITUATIONS: usize = 4;

/// Where the mixing probability for one (rank, situation) comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mixing {
    /// Read from the validated parameter vector.
    Param(ParamSlot),
    /// Fixed by the equilibrium.
    Fixed(f64),
}

impl Mixing {
    pub fn resolve(self, params: &ParameterVector) -> f64 {
        match self {
            Mixing::Param(slot) => params[slot],
            Mixing::Fixed(p) => p,
        }
    }
}

/// First seat. It never opens, calls a raise with the ace, and calls with
/// the king half the time when the raise was folded to it by the third
/// seat.
pub const A: [[f64; NUM_SITUATIONS]; NUM_RANKS] = [
    [0.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.5, 0.0],
    [0.0, 1.0, 1.0, 1.0],
];

// Second seat constants.
pub const B31: f64 = 0.0;
pub const B12: f64 = 0.0;
pub const B22: f64 = 0.0;
pub const B42: f64 = 1.0;
pub const B13: f64 = 0.0;
pub const B43: f64 = 1.0;
pub const B14: f64 = 0.0;
pub const B24: f64 = 0.0;
pub const B34: f64 = 0.0;
pub const B44: f64 = 1.0;

// Third seat constants.
pub const C31: f64 = 0.0;
pub const C12: f64 = 0.0;
pub const C22: f64 = 0.0;
pub const C32: f64 = 0.0;
pub const C13: f64 = 0.0;
pub const C23: f64 = 0.0;
pub const C14: f64 = 0.0;
pub const C24: f64 = 0.0;
/// The third seat always plays the ace aggressively.
pub const C4: [f64; NUM_SITUATIONS] = [1.0, 1.0, 1.0, 1.0];

use Mixing::{Fixed, Param};

pub const B: [[Mixing; NUM_SITUATIONS]; NUM_RANKS] = [
    [Param(ParamSlot::B11), Fixed(B12), Fixed(B13), Fixed(B14)],
    [Param(ParamSlot::B21), Fixed(B22), Param(ParamSlot::B23), Fixed(B24)],
    [Fixed(B31), Param(ParamSlot::B32), Param(ParamSlot::B33), Fixed(B34)],
    [Param(ParamSlot::B41), Fixed(B42), Fixed(B43), Fixed(B44)],
];

pub const C: [[Mixing; NUM_SITUATIONS]; NUM_RANKS] = [
    [Param(ParamSlot::C11), Fixed(C12), Fixed(C13), Fixed(C14)],
    [Param(ParamSlot::C21), Fixed(C22), Fixed(C23), Fixed(C24)],
    [Fixed(C31), Fixed(C32), Param(ParamSlot::C33), Param(ParamSlot::C34)],
    [Fixed(C4[0]), Fixed(C4[1]), Fixed(C4[2]), Fixed(C4[3])],
];
