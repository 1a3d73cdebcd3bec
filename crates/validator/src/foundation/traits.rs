//! Core traits for the validation system
//!
//! This module defines the capability every rule implements and the
//! extension trait that starts a chain from any rule.

use crate::combinators::Chain;
use crate::foundation::ValidationResult;

// ============================================================================
// CORE RULE TRAIT
// ============================================================================

/// A zero-argument check producing a [`ValidationResult`].
///
/// Rules capture whatever they inspect when they are constructed. Calling
/// [`check`](Rule::check) twice must be safe; rules that read the clock may
/// return different results across calls.
///
/// Any closure `Fn() -> ValidationResult` is a rule.
///
/// # Examples
///
/// ```
/// use rulechain_validator::foundation::{Rule, ValidationResult};
///
/// struct NonBlank(String);
///
/// impl Rule for NonBlank {
///     fn check(&self) -> ValidationResult {
///         if self.0.trim().is_empty() {
///             ValidationResult::fail_with("must not be blank")
///         } else {
///             ValidationResult::pass()
///         }
///     }
/// }
///
/// assert!(NonBlank("x".into()).check().is_valid());
///
/// let closure = || ValidationResult::fail_with("nope");
/// assert_eq!(closure.check().messages(), ["nope"]);
/// ```
pub trait Rule {
    /// Runs the check.
    fn check(&self) -> ValidationResult;
}

impl<F> Rule for F
where
    F: Fn() -> ValidationResult,
{
    fn check(&self) -> ValidationResult {
        self()
    }
}

// ============================================================================
// RULE EXTENSION TRAIT
// ============================================================================

/// Extension trait that starts a [`Chain`] from any rule.
///
/// Automatically implemented for every [`Rule`].
///
/// # Examples
///
/// ```
/// use rulechain_validator::prelude::*;
///
/// let chain = min_len("alice", 3).and(max_len("alice", 20));
/// assert!(chain.evaluate().is_valid());
///
/// let chain = is_ipv4("::1").or(is_ipv6("::1"));
/// assert!(chain.evaluate().is_valid());
/// ```
pub trait RuleExt: Rule + Sized {
    /// Builds `self AND other`.
    fn and<'a, R>(self, other: R) -> Chain<'a>
    where
        Self: Send + Sync + 'a,
        R: Rule + Send + Sync + 'a,
    {
        Chain::new().and(self).and(other)
    }

    /// Builds `self OR other`.
    fn or<'a, R>(self, other: R) -> Chain<'a>
    where
        Self: Send + Sync + 'a,
        R: Rule + Send + Sync + 'a,
    {
        Chain::new().or(self).or(other)
    }
}

impl<T: Rule> RuleExt for T {}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysValid;

    impl Rule for AlwaysValid {
        fn check(&self) -> ValidationResult {
            ValidationResult::pass()
        }
    }

    struct AlwaysFails;

    impl Rule for AlwaysFails {
        fn check(&self) -> ValidationResult {
            ValidationResult::fail_with("always fails")
        }
    }

    #[test]
    fn struct_rule() {
        assert!(AlwaysValid.check().is_valid());
        assert!(!AlwaysFails.check().is_valid());
    }

    #[test]
    fn closure_rule_reads_captured_value() {
        let name = String::from("");
        let rule = move || {
            if name.is_empty() {
                ValidationResult::fail_with("empty")
            } else {
                ValidationResult::pass()
            }
        };
        assert_eq!(rule.check().messages(), ["empty"]);
    }

    #[test]
    fn ext_and_or() {
        assert!(!AlwaysValid.and(AlwaysFails).evaluate().is_valid());
        assert!(AlwaysFails.or(AlwaysValid).evaluate().is_valid());
    }
}
