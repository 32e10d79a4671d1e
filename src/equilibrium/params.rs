use std::fmt;
use std::ops::{Index, IndexMut};

/// Number of slots in a `ParameterVector`.
pub const NUM_PARAMS: usize = 10;

/// Named slots of the strategy parameter vector.
///
/// `bXY` parameters belong to the second seat and `cXY` to the third, with
/// `X` the rank (1 = jack .. 4 = ace) and `Y` the situation the seat is
/// in. Each is the probability of the aggressive choice available in that
/// situation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ParamSlot {
    B11 = 0,
    B21 = 1,
    B23 = 2,
    B32 = 3,
    B33 = 4,
    B41 = 5,
    C11 = 6,
    C21 = 7,
    C33 = 8,
    C34 = 9,
}

impl ParamSlot {
    pub const ALL: [ParamSlot; NUM_PARAMS] = [
        ParamSlot::B11,
        ParamSlot::B21,
        ParamSlot::B23,
        ParamSlot::B32,
        ParamSlot::B33,
        ParamSlot::B41,
        ParamSlot::C11,
        ParamSlot::C21,
        ParamSlot::C33,
        ParamSlot::C34,
    ];

    /// The six slots the caller chooses.
    pub const FREE: [ParamSlot; 6] = [
        ParamSlot::B11,
        ParamSlot::B21,
        ParamSlot::B32,
        ParamSlot::C11,
        ParamSlot::C33,
        ParamSlot::C34,
    ];

    /// Slots that the first sub-family's algebra forces.
    pub const DERIVED: [ParamSlot; 4] = [
        ParamSlot::B23,
        ParamSlot::B33,
        ParamSlot::B41,
        ParamSlot::C21,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            ParamSlot::B11 => "b11",
            ParamSlot::B21 => "b21",
            ParamSlot::B23 => "b23",
            ParamSlot::B32 => "b32",
            ParamSlot::B33 => "b33",
            ParamSlot::B41 => "b41",
            ParamSlot::C11 => "c11",
            ParamSlot::C21 => "c21",
            ParamSlot::C33 => "c33",
            ParamSlot::C34 => "c34",
        }
    }

    pub fn is_derived(self) -> bool {
        Self::DERIVED.contains(&self)
    }
}

impl fmt::Display for ParamSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The strategy parameters, one probability per `ParamSlot`.
///
/// The slot order is significant when building from a raw array. In JSON
/// the vector is an object keyed by slot name where the derived slots may
/// be left out.
///
/// ```
/// use kuhn3p::equilibrium::{ParamSlot, ParameterVector};
///
/// let params = ParameterVector::from_free(0.1, 0.2, 0.5, 0.25, 0.25, 0.0);
/// assert_eq!(0.2, params[ParamSlot::B21]);
/// assert_eq!(0.0, params[ParamSlot::B33]);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "named::NamedParams", into = "named::NamedParams")
)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParameterVector {
    values: [f64; NUM_PARAMS],
}

impl ParameterVector {
    /// Build from all ten slots in `ParamSlot::ALL` order.
    pub fn new(values: [f64; NUM_PARAMS]) -> Self {
        Self { values }
    }

    /// Build from the six free parameters. Derived slots start at 0.
    pub fn from_free(b11: f64, b21: f64, b32: f64, c11: f64, c33: f64, c34: f64) -> Self {
        let mut params = Self::default();
        params[ParamSlot::B11] = b11;
        params[ParamSlot::B21] = b21;
        params[ParamSlot::B32] = b32;
        params[ParamSlot::C11] = c11;
        params[ParamSlot::C33] = c33;
        params[ParamSlot::C34] = c34;
        params
    }

    pub fn values(&self) -> &[f64; NUM_PARAMS] {
        &self.values
    }

    /// Iterate over `(slot, value)` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (ParamSlot, f64)> + '_ {
        ParamSlot::ALL.iter().map(|slot| (*slot, self[*slot]))
    }

    /// The first slot whose value is outside of `[0, 1]`. NaN counts as
    /// outside.
    pub fn first_out_of_unit_interval(&self) -> Option<(ParamSlot, f64)> {
        self.iter().find(|(_, v)| !(0.0..=1.0).contains(v))
    }
}

impl Index<ParamSlot> for ParameterVector {
    type Output = f64;
    fn index(&self, slot: ParamSlot) -> &f64 {
        &self.values[slot.index()]
    }
}

impl IndexMut<ParamSlot> for ParameterVector {
    fn index_mut(&mut self, slot: ParamSlot) -> &mut f64 {
        &mut self.values[slot.index()]
    }
}

impl From<[f64; NUM_PARAMS]> for ParameterVector {
    fn from(values: [f64; NUM_PARAMS]) -> Self {
        Self::new(values)
    }
}

#[cfg(feature = "serde")]
mod named {
    use super::{ParamSlot, ParameterVector};

    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(deny_unknown_fields)]
    pub(super) struct NamedParams {
        b11: f64,
        b21: f64,
        #[serde(default)]
        b23: f64,
        b32: f64,
        #[serde(default)]
        b33: f64,
        #[serde(default)]
        b41: f64,
        c11: f64,
        #[serde(default)]
        c21: f64,
        c33: f64,
        c34: f64,
    }

    impl From<NamedParams> for ParameterVector {
        fn from(n: NamedParams) -> Self {
            ParameterVector::new([
                n.b11, n.b21, n.b23, n.b32, n.b33, n.b41, n.c11, n.c21, n.c33, n.c34,
            ])
        }
    }

    impl From<ParameterVector> for NamedParams {
        fn from(p: ParameterVector) -> Self {
            NamedParams {
                b11: p[ParamSlot::B11],
                b21: p[ParamSlot::B21],
                b23: p[ParamSlot::B23],
                b32: p[ParamSlot::B32],
                b33: p[ParamSlot::B33],
                b41: p[ParamSlot::B41],
                c11: p[ParamSlot::C11],
                c21: p[ParamSlot::C21],
                c33: p[ParamSlot::C33],
                c34: p[ParamSlot::C34],
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_order_matches_all() {
        for (i, slot) in ParamSlot::ALL.iter().enumerate() {
            assert_eq!(i, slot.index());
        }
    }

    #[test]
    fn test_free_and_derived_partition() {
        for slot in ParamSlot::ALL {
            assert_ne!(
                ParamSlot::FREE.contains(&slot),
                slot.is_derived(),
                "{slot} should be exactly one of free or derived"
            );
        }
    }

    #[test]
    fn test_unit_interval() {
        let mut params = ParameterVector::from_free(0.1, 0.2, 0.5, 0.25, 0.25, 1.0);
        assert_eq!(None, params.first_out_of_unit_interval());

        params[ParamSlot::B41] = 1.5;
        params[ParamSlot::C34] = -0.1;
        assert_eq!(
            Some((ParamSlot::B41, 1.5)),
            params.first_out_of_unit_interval()
        );

        let mut params = ParameterVector::default();
        params[ParamSlot::C21] = f64::NAN;
        assert_eq!(
            Some(ParamSlot::C21),
            params.first_out_of_unit_interval().map(|(s, _)| s)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_derived_optional() {
        let json = r#"{"b11": 0.1, "b21": 0.2, "b32": 0.5, "c11": 0.25, "c33": 0.25, "c34": 0.0}"#;
        let params: ParameterVector = serde_json::from_str(json).unwrap();
        assert_eq!(
            ParameterVector::from_free(0.1, 0.2, 0.5, 0.25, 0.25, 0.0),
            params
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_unknown_slot() {
        let json = r#"{"b11": 0.1, "b21": 0.2, "b32": 0.5, "c11": 0.25, "c33": 0.25, "c34": 0.0, "c23": 0.1}"#;
        assert!(serde_json::from_str::<ParameterVector>(json).is_err());
    }
}
