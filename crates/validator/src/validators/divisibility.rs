//! Divisibility rules
//!
//! Integer and float variants are separate because they treat a zero divisor
//! differently: the integer rule reports it with its usual wording, the float
//! rule with a dedicated message.

#![allow(clippy::neg_cmp_op_on_partial_ord)]

use crate::foundation::{Rule, ValidationResult};

/// Largest remainder still considered an exact float multiple.
const FLOAT_TOLERANCE: f64 = 1e-9;

// ============================================================================
// INTEGER
// ============================================================================

crate::rule! {
    /// Validates that `value` is an exact multiple of `divisor`.
    ///
    /// A zero divisor never passes.
    ///
    /// # Examples
    ///
    /// ```
    /// use rulechain_validator::validators::multiple_of;
    /// use rulechain_validator::foundation::Rule;
    ///
    /// assert!(multiple_of(10, 5).check().is_valid());
    /// assert_eq!(multiple_of(11, 5).check().messages(), ["must be a multiple of 5"]);
    /// assert_eq!(multiple_of(11, 0).check().messages(), ["must be a multiple of 0"]);
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MultipleOf { value: i64, divisor: i64 };
    check(self) { self.divisor != 0 && self.value.wrapping_rem(self.divisor) == 0 }
    message(self) { format!("must be a multiple of {}", self.divisor) }
    fn multiple_of(value: i64, divisor: i64);
}

// ============================================================================
// FLOAT
// ============================================================================

/// Validates that `value` is a multiple of `divisor` within a `1e-9`
/// tolerance.
///
/// The remainder is taken against the truncated quotient, so results for
/// divisors that are not exactly representable (such as `0.1`) follow
/// floating-point rounding. NaN and infinite values never pass.
///
/// # Examples
///
/// ```
/// use rulechain_validator::validators::float_multiple_of;
/// use rulechain_validator::foundation::Rule;
///
/// assert!(float_multiple_of(10.0, 2.5).check().is_valid());
/// assert_eq!(
///     float_multiple_of(1.0, 0.0).check().messages(),
///     ["must be a multiple of 0 is undefined"]
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatMultipleOf {
    /// The value under test.
    pub value: f64,
    /// The divisor.
    pub divisor: f64,
}

impl FloatMultipleOf {
    /// Creates a new float divisibility rule.
    #[must_use]
    pub fn new(value: f64, divisor: f64) -> Self {
        Self { value, divisor }
    }
}

impl Rule for FloatMultipleOf {
    fn check(&self) -> ValidationResult {
        if self.divisor == 0.0 {
            return ValidationResult::fail_with("must be a multiple of 0 is undefined");
        }

        let quotient = (self.value / self.divisor).trunc();
        let remainder = (self.value - quotient * self.divisor).abs();
        // NaN or infinite inputs leave a NaN remainder, which must not pass.
        if !(remainder <= FLOAT_TOLERANCE) {
            return ValidationResult::fail_with(format!(
                "must be a multiple of {}",
                self.divisor
            ));
        }
        ValidationResult::pass()
    }
}

/// Creates a [`FloatMultipleOf`] rule.
#[must_use]
pub fn float_multiple_of(value: f64, divisor: f64) -> FloatMultipleOf {
    FloatMultipleOf::new(value, divisor)
}

// ============================================================================
// TESTS
// ============================================================================
