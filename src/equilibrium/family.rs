use std::fmt;

use tracing::event;

use super::errors::{FamilyOneConstraint, StrategyError};
use super::params::{ParamSlot, ParameterVector};

/// The parameter that picks the sub-family.
pub const SUB_FAMILY_DEFINING_PARAM: ParamSlot = ParamSlot::C11;

/// The known sub-families of equilibrium profiles.
///
/// Only the first has its constraints checked; the other two are
/// recognised and then only bounds checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubFamily {
    /// `0 < c11 < 1/2`
    One,
    /// `c11 == 0`
    Two,
    /// `c11 == 1/2`
    Three,
}

impl SubFamily {
    /// Pick the sub-family for a value of `c11`.
    ///
    /// The two boundary values are compared exactly, so callers wanting the
    /// second or third sub-family have to pass exactly `0.0` or `0.5`.
    /// Negative values, values above one half and NaN belong to no
    /// sub-family.
    ///
    /// ```
    /// use kuhn3p::equilibrium::SubFamily;
    ///
    /// assert_eq!(Some(SubFamily::Two), SubFamily::classify(0.0));
    /// assert_eq!(Some(SubFamily::One), SubFamily::classify(0.3));
    /// assert_eq!(Some(SubFamily::Three), SubFamily::classify(0.5));
    /// assert_eq!(None, SubFamily::classify(0.6));
    /// ```
    pub fn classify(c11: f64) -> Option<SubFamily> {
        if c11 == 0.0 {
            Some(SubFamily::Two)
        } else if c11 == 0.5 {
            Some(SubFamily::Three)
        } else if c11 > 0.0 && c11 < 0.5 {
            Some(SubFamily::One)
        } else {
            None
        }
    }

    pub fn number(self) -> u8 {
        match self {
            SubFamily::One => 1,
            SubFamily::Two => 2,
            SubFamily::Three => 3,
        }
    }
}

impl fmt::Display for SubFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-family {}", self.number())
    }
}

/// Check the first sub-family inequalities and fill in the derived slots.
///
/// Fails on the first inequality that doesn't hold and leaves `params`
/// untouched in that case.
pub fn check_family_one(params: &mut ParameterVector) -> Result<(), FamilyOneConstraint> {
    let b11 = params[ParamSlot::B11];
    let b21 = params[ParamSlot::B21];
    let b32 = params[ParamSlot::B32];
    let c33 = params[ParamSlot::C33];

    if b21 > 1.0 / 4.0 {
        return Err(FamilyOneConstraint::B21AboveQuarter);
    }
    if b11 > b21 {
        return Err(FamilyOneConstraint::B11AboveB21);
    }
    if b32 > (2.0 + 3.0 * b11 + 4.0 * b21) / 4.0 {
        return Err(FamilyOneConstraint::B32TooLarge);
    }
    if c33 < 0.5 - b32 {
        return Err(FamilyOneConstraint::C33TooSmall);
    }
    if c33 > 0.5 - b32 + (3.0 * b11 + 4.0 * b21) / 4.0 {
        return Err(FamilyOneConstraint::C33TooLarge);
    }

    params[ParamSlot::B23] = 0.0;
    params[ParamSlot::B33] = (1.0 + b11 + 2.0 * b21) / 2.0;
    params[ParamSlot::B41] = 2.0 * b11 + 2.0 * b21;
    params[ParamSlot::C21] = 0.5;
    Ok(())
}

/// Validate a full parameter vector, deriving what the sub-family forces.
///
/// Returns the sub-family the vector belongs to.
pub fn check_params(params: &mut ParameterVector) -> Result<SubFamily, StrategyError> {
    let c11 = params[SUB_FAMILY_DEFINING_PARAM];
    let family = SubFamily::classify(c11).ok_or(StrategyError::ParameterOutOfFamilyRange(c11))?;

    match family {
        SubFamily::One => check_family_one(params)?,
        // TODO: constraint checks for sub-families 2 and 3 once their
        // inequalities are written down; until then only bounds are checked.
        SubFamily::Two | SubFamily::Three => {
            event!(
                tracing::Level::WARN,
                family = family.number(),
                "No constraint checks for this sub-family, only checking bounds"
            );
        }
    }

    if let Some((slot, value)) = params.first_out_of_unit_interval() {
        return Err(StrategyError::ParameterOutOfUnitInterval { slot, value });
    }

    Ok(family)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn valid() -> ParameterVector {
        ParameterVector::from_free(0.1, 0.2, 0.5, 0.25, 0.25, 0.0)
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(Some(SubFamily::Two), SubFamily::classify(0.0));
        assert_eq!(Some(SubFamily::Two), SubFamily::classify(-0.0));
        assert_eq!(Some(SubFamily::Three), SubFamily::classify(0.5));
        assert_eq!(Some(SubFamily::One), SubFamily::classify(f64::MIN_POSITIVE));
        assert_eq!(Some(SubFamily::One), SubFamily::classify(0.499_999));
        assert_eq!(None, SubFamily::classify(0.500_001));
        assert_eq!(None, SubFamily::classify(-0.1));
        assert_eq!(None, SubFamily::classify(1.0));
        assert_eq!(None, SubFamily::classify(f64::NAN));
    }

    #[test]
    fn test_derives_family_one_across_region() {
        let mut checked = 0;
        for b21 in [0.0, 1.0 / 16.0, 0.125, 3.0 / 16.0, 0.25] {
            for b11 in [0.0, 0.5 * b21, b21] {
                let shift = (3.0 * b11 + 4.0 * b21) / 4.0;
                let b32_max = 0.5 + shift;
                for b32 in [0.0, 0.5 * b32_max, 0.9 * b32_max] {
                    let lo = f64::max(0.5 - b32, 0.0);
                    let hi = 0.5 - b32 + shift;
                    for u in [0.0, 0.25, 0.5, 0.75] {
                        let c33 = lo + u * (hi - lo);
                        let mut params = ParameterVector::from_free(b11, b21, b32, 0.25, c33, 0.5);
                        assert_eq!(
                            Ok(SubFamily::One),
                            check_params(&mut params),
                            "b11={b11} b21={b21} b32={b32} c33={c33}"
                        );

                        assert_eq!(0.0, params[ParamSlot::B23]);
                        assert_relative_eq!((1.0 + b11 + 2.0 * b21) / 2.0, params[ParamSlot::B33]);
                        assert_relative_eq!(2.0 * b11 + 2.0 * b21, params[ParamSlot::B41]);
                        assert_relative_eq!(0.5, params[ParamSlot::C21]);
                        // Free slots come through untouched
                        assert_eq!(b11, params[ParamSlot::B11]);
                        assert_eq!(c33, params[ParamSlot::C33]);
                        checked += 1;
                    }
                }
            }
        }
        assert_eq!(5 * 3 * 3 * 4, checked);
    }

    #[test]
    fn test_derives_family_one() {
        let mut params = valid();
        assert_eq!(Ok(SubFamily::One), check_params(&mut params));

        assert_relative_eq!(0.0, params[ParamSlot::B23]);
        assert_relative_eq!(0.75, params[ParamSlot::B33]);
        assert_relative_eq!(0.6, params[ParamSlot::B41]);
        assert_relative_eq!(0.5, params[ParamSlot::C21]);

        // Free slots are left alone
        for slot in ParamSlot::FREE {
            assert_eq!(valid()[slot], params[slot]);
        }
    }

    #[test]
    fn test_derived_slots_overwritten() {
        let mut params = valid();
        params[ParamSlot::B23] = 0.9;
        params[ParamSlot::C21] = 0.1;
        check_params(&mut params).unwrap();
        assert_eq!(0.0, params[ParamSlot::B23]);
        assert_eq!(0.5, params[ParamSlot::C21]);
    }

    #[test]
    fn test_b21_quarter_boundary() {
        let mut params = ParameterVector::from_free(0.1, 0.25, 0.5, 0.25, 0.25, 0.0);
        assert_eq!(Ok(()), check_family_one(&mut params));

        let mut params = ParameterVector::from_free(0.1, 0.2501, 0.5, 0.25, 0.25, 0.0);
        assert_eq!(
            Err(FamilyOneConstraint::B21AboveQuarter),
            check_family_one(&mut params)
        );
        assert_eq!(
            Err(StrategyError::FamilyConstraintViolated(
                FamilyOneConstraint::B21AboveQuarter
            )),
            check_params(&mut params)
        );
    }

    #[test]
    fn test_each_constraint() {
        let cases = [
            (
                ParameterVector::from_free(0.21, 0.2, 0.5, 0.25, 0.25, 0.0),
                FamilyOneConstraint::B11AboveB21,
            ),
            // (2 + 0.3 + 0.8) / 4 = 0.775
            (
                ParameterVector::from_free(0.1, 0.2, 0.8, 0.25, 0.25, 0.0),
                FamilyOneConstraint::B32TooLarge,
            ),
            // 1/2 - 0.2 = 0.3
            (
                ParameterVector::from_free(0.1, 0.2, 0.2, 0.25, 0.29, 0.0),
                FamilyOneConstraint::C33TooSmall,
            ),
            // 1/2 - 0.5 + 1.1 / 4 = 0.275
            (
                ParameterVector::from_free(0.1, 0.2, 0.5, 0.25, 0.3, 0.0),
                FamilyOneConstraint::C33TooLarge,
            ),
        ];
        for (mut params, expected) in cases {
            let before = params;
            assert_eq!(Err(expected), check_family_one(&mut params));
            assert_eq!(before, params, "Failed check should not derive anything");
        }
    }

    #[test]
    fn test_first_violation_wins() {
        // Breaks both the b21 and the b11 inequality
        let mut params = ParameterVector::from_free(0.9, 0.3, 0.5, 0.25, 0.25, 0.0);
        assert_eq!(
            Err(FamilyOneConstraint::B21AboveQuarter),
            check_family_one(&mut params)
        );
    }

    #[test]
    fn test_out_of_family_range() {
        for c11 in [-0.25, 0.75] {
            let mut params = valid();
            params[ParamSlot::C11] = c11;
            assert_eq!(
                Err(StrategyError::ParameterOutOfFamilyRange(c11)),
                check_params(&mut params)
            );
        }
    }

    #[test_log::test]
    fn test_other_families_bounds_only() {
        // Would break every sub-family 1 inequality.
        let mut params = ParameterVector::new([0.9, 0.3, 0.4, 1.0, 0.1, 0.0, 0.0, 0.7, 1.0, 0.2]);
        let before = params;
        assert_eq!(Ok(SubFamily::Two), check_params(&mut params));
        assert_eq!(before, params);

        params[ParamSlot::C11] = 0.5;
        assert_eq!(Ok(SubFamily::Three), check_params(&mut params));
    }

    #[test_log::test]
    fn test_bounds_after_family() {
        let mut params = ParameterVector::default();
        params[ParamSlot::B33] = 1.2;
        assert_eq!(
            Err(StrategyError::ParameterOutOfUnitInterval {
                slot: ParamSlot::B33,
                value: 1.2
            }),
            check_params(&mut params)
        );

        // c34 is free and unconstrained by sub-family 1, only the bounds catch it
        let mut params = valid();
        params[ParamSlot::C34] = 1.01;
        assert_eq!(
            Err(StrategyError::ParameterOutOfUnitInterval {
                slot: ParamSlot::C34,
                value: 1.01
            }),
            check_params(&mut params)
        );
    }
}
