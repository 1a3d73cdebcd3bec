//! Numeric bound rules
//!
//! Generic over any `PartialOrd + Display` number, so one rule covers both
//! integers and floats. Bounds are rendered with `Display`, which prints
//! floats in their shortest form (`3.1`, `2.5`, `10`).
//!
//! NaN compares false against everything: it passes `Min`, `Max` and
//! `InRange` (there is no proof it is out of bounds) but fails
//! `GreaterThan` and `LessThan`, which demand a strict comparison to hold.

// The negated comparisons carry the NaN behaviour described above.
#![allow(clippy::neg_cmp_op_on_partial_ord)]

use std::fmt::Display;

// ============================================================================
// MIN / MAX / IN RANGE
// ============================================================================

crate::rule! {
    /// Validates that `value >= min`.
    #[derive(Copy, PartialEq)]
    pub Min<T: PartialOrd + Display> { value: T, min: T };
    check(self) { !(self.value < self.min) }
    message(self) { format!("must be >= {}", self.min) }
    fn min(value: T, min: T);
}

crate::rule! {
    /// Validates that `value <= max`.
    #[derive(Copy, PartialEq)]
    pub Max<T: PartialOrd + Display> { value: T, max: T };
    check(self) { !(self.value > self.max) }
    message(self) { format!("must be <= {}", self.max) }
    fn max(value: T, max: T);
}

crate::rule! {
    /// Validates that `min <= value <= max`.
    #[derive(Copy, PartialEq)]
    pub InRange<T: PartialOrd + Display> { value: T, min: T, max: T };
    check(self) { !(self.value < self.min || self.value > self.max) }
    message(self) { format!("must be between {} and {}", self.min, self.max) }
    fn in_range(value: T, min: T, max: T);
}

// ============================================================================
// STRICT BOUNDS
// ============================================================================

crate::rule! {
    /// Validates that `value > min`.
    #[derive(Copy, PartialEq)]
    pub GreaterThan<T: PartialOrd + Display> { value: T, min: T };
    check(self) { self.value > self.min }
    message(self) { format!("must be > {}", self.min) }
    fn greater_than(value: T, min: T);
}

crate::rule! {
    /// Validates that `value < max`.
    #[derive(Copy, PartialEq)]
    pub LessThan<T: PartialOrd + Display> { value: T, max: T };
    check(self) { self.value < self.max }
    message(self) { format!("must be < {}", self.max) }
    fn less_than(value: T, max: T);
}

// ============================================================================
// SIGN
// ============================================================================

crate::rule! {
    /// Validates that a number is not zero.
    #[derive(Copy, PartialEq)]
    pub NonZero<T: PartialEq + Default> { value: T };
    check(self) { self.value != T::default() }
    message(self) { "must not be zero" }
    fn non_zero(value: T);
}

crate::rule! {
    /// Validates that a number is strictly positive.
    #[derive(Copy, PartialEq)]
    pub Positive<T: PartialOrd + Default> { value: T };
    check(self) { !(self.value <= T::default()) }
    message(self) { "must be > 0" }
    fn positive(value: T);
}

crate::rule! {
    /// Validates that a number is zero or positive.
    #[derive(Copy, PartialEq)]
    pub NonNegative<T: PartialOrd + Default> { value: T };
    check(self) { !(self.value < T::default()) }
    message(self) { "must be >= 0" }
    fn non_negative(value: T);
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Rule, ValidationResult};
    use rstest::rstest;

    #[rstest]
    #[case::int_min_ok(min(5, 3).check(), None)]
    #[case::int_min_fail(min(2, 3).check(), Some("must be >= 3"))]
    #[case::int_max_ok(max(3, 5).check(), None)]
    #[case::int_max_fail(max(6, 5).check(), Some("must be <= 5"))]
    #[case::int_between_ok(in_range(4, 3, 5).check(), None)]
    #[case::int_between_fail(in_range(2, 3, 5).check(), Some("must be between 3 and 5"))]
    #[case::int_non_zero_ok(non_zero(1).check(), None)]
    #[case::int_non_zero_fail(non_zero(0).check(), Some("must not be zero"))]
    #[case::int_positive_ok(positive(1).check(), None)]
    #[case::int_positive_fail(positive(0).check(), Some("must be > 0"))]
    #[case::int_non_negative_ok(non_negative(0).check(), None)]
    #[case::int_non_negative_fail(non_negative(-1).check(), Some("must be >= 0"))]
    #[case::int_greater_ok(greater_than(6, 5).check(), None)]
    #[case::int_greater_fail(greater_than(5, 5).check(), Some("must be > 5"))]
    #[case::int_less_ok(less_than(4, 5).check(), None)]
    #[case::int_less_fail(less_than(5, 5).check(), Some("must be < 5"))]
    #[case::float_min_ok(min(3.2, 3.1).check(), None)]
    #[case::float_min_fail(min(3.0, 3.1).check(), Some("must be >= 3.1"))]
    #[case::float_max_ok(max(3.2, 3.3).check(), None)]
    #[case::float_max_fail(max(3.4, 3.3).check(), Some("must be <= 3.3"))]
    #[case::float_between_ok(in_range(3.2, 3.1, 3.3).check(), None)]
    #[case::float_between_fail(in_range(3.4, 3.1, 3.3).check(), Some("must be between 3.1 and 3.3"))]
    #[case::float_non_zero_ok(non_zero(0.1).check(), None)]
    #[case::float_non_zero_fail(non_zero(0.0).check(), Some("must not be zero"))]
    #[case::float_greater_ok(greater_than(3.2, 3.1).check(), None)]
    #[case::float_greater_fail(greater_than(3.1, 3.1).check(), Some("must be > 3.1"))]
    #[case::float_less_ok(less_than(3.2, 3.3).check(), None)]
    #[case::float_less_fail(less_than(3.3, 3.3).check(), Some("must be < 3.3"))]
    fn numeric_rules(#[case] got: ValidationResult, #[case] want: Option<&str>) {
        let expected = want.map_or_else(ValidationResult::pass, ValidationResult::fail_with);
        assert_eq!(got, expected);
    }

    #[test]
    fn whole_float_bounds_render_without_fraction() {
        assert_eq!(min(5.0, 10.0).check().messages(), ["must be >= 10"]);
        assert_eq!(max(0.5, 0.0).check().messages(), ["must be <= 0"]);
    }

    #[test]
    fn nan_handling() {
        assert!(min(f64::NAN, 1.0).check().is_valid());
        assert!(max(f64::NAN, 1.0).check().is_valid());
        assert!(in_range(f64::NAN, 0.0, 1.0).check().is_valid());
        assert!(!greater_than(f64::NAN, 1.0).check().is_valid());
        assert!(!less_than(f64::NAN, 1.0).check().is_valid());
        assert!(non_zero(f64::NAN).check().is_valid());
    }

    #[test]
    fn negative_zero_is_zero() {
        assert!(!non_zero(-0.0_f64).check().is_valid());
        assert!(non_negative(-0.0_f64).check().is_valid());
    }

    #[test]
    fn works_with_unsigned_and_wide_types() {
        assert!(positive(1_u8).check().is_valid());
        assert!(!positive(0_u64).check().is_valid());
        assert!(in_range(i128::MAX, 0, i128::MAX).check().is_valid());
    }
}
