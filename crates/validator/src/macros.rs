//! Macros for creating rules with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`rule!`]: create a complete rule (struct + `Rule` impl + factory fn)
//! - [`compose!`]: AND-chain multiple rules
//! - [`any_of!`]: OR-chain multiple rules
//!
//! # Examples
//!
//! ```
//! use rulechain_validator::rule;
//! use rulechain_validator::foundation::Rule;
//!
//! rule! {
//!     /// Validates that a string is lowercase.
//!     pub Lowercase { value: String };
//!     check(self) { self.value.chars().all(|c| !c.is_uppercase()) }
//!     message(self) { "must be lowercase" }
//!     new(value: impl Into<String>) { Self { value: value.into() } }
//!     fn lowercase(value: impl Into<String>);
//! }
//!
//! assert!(lowercase("abc").check().is_valid());
//! assert_eq!(lowercase("Abc").check().messages(), ["must be lowercase"]);
//! ```

// ============================================================================
// RULE MACRO
// ============================================================================

/// Creates a complete rule: struct definition, `Rule` implementation,
/// constructor, and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via
/// `#[derive(...)]`. The `message` block yields anything `Into<String>`;
/// it is only evaluated when `check` is false.
///
/// # Variants
///
/// **Custom constructor** (use when arguments need converting):
/// ```rust,ignore
/// rule! {
///     pub MinLen { value: String, min: usize };
///     check(self) { self.value.len() >= self.min }
///     message(self) { format!("too short: min {}", self.min) }
///     new(value: impl Into<String>, min: usize) { Self { value: value.into(), min } }
///     fn min_len(value: impl Into<String>, min: usize);
/// }
/// ```
///
/// **Struct with fields** (auto `new` from all fields):
/// ```rust,ignore
/// rule! {
///     #[derive(Copy, PartialEq, Eq, Hash)]
///     pub NotEmptyLen { len: usize };
///     check(self) { self.len != 0 }
///     message(self) { "must not be empty" }
///     fn not_empty_len(len: usize);
/// }
/// ```
///
/// **Generic rule** (one type parameter, bounds are plain identifiers):
/// ```rust,ignore
/// rule! {
///     #[derive(Copy, PartialEq)]
///     pub Min<T: PartialOrd + Display> { value: T, min: T };
///     check(self) { !(self.value < self.min) }
///     message(self) { format!("must be >= {}", self.min) }
///     fn min(value: T, min: T);
/// }
/// ```
#[macro_export]
macro_rules! rule {
    // ── Variant 1a: Struct with fields + custom new + factory fn ─────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        check($self_:ident) $check:block
        message($self2:ident) $msg:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::rule! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ };
            check($self_) $check
            message($self2) $msg
            new($($narg: $naty),*) $new_body
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Variant 1b: Struct with fields + custom new, no factory ──────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        check($self_:ident) $check:block
        message($self2:ident) $msg:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        impl $crate::foundation::Rule for $name {
            fn check(&$self_) -> $crate::foundation::ValidationResult {
                if $check {
                    $crate::foundation::ValidationResult::pass()
                } else {
                    $crate::foundation::ValidationResult::fail_with($msg)
                }
            }
        }
    };

    // ── Variant 2a: Struct with fields + auto new + factory fn ───────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        check($self_:ident) $check:block
        message($self2:ident) $msg:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::rule! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ };
            check($self_) $check
            message($self2) $msg
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Variant 2b: Struct with fields + auto new, no factory ────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        check($self_:ident) $check:block
        message($self2:ident) $msg:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl $crate::foundation::Rule for $name {
            fn check(&$self_) -> $crate::foundation::ValidationResult {
                if $check {
                    $crate::foundation::ValidationResult::pass()
                } else {
                    $crate::foundation::ValidationResult::fail_with($msg)
                }
            }
        }
    };

    // ── Variant 3a: Generic struct + auto new + factory fn ───────────────
    //
    // Supports a single generic type parameter with one or more trait bounds.
    // Bounds must be simple identifiers (use imports for paths).
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident: $first_bound:ident $(+ $rest_bound:ident)*>
            { $($field:ident: $fty:ty),+ $(,)? };
        check($self_:ident) $check:block
        message($self2:ident) $msg:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::rule! {
            $(#[$meta])*
            $vis $name<$gen: $first_bound $(+ $rest_bound)*>
                { $($field: $fty),+ };
            check($self_) $check
            message($self2) $msg
        }

        #[must_use]
        $vis fn $factory<$gen: $first_bound $(+ $rest_bound)*>($($farg: $faty),*) -> $name<$gen> {
            $name::new($($farg),*)
        }
    };

    // ── Variant 3b: Generic struct + auto new, no factory ────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident: $first_bound:ident $(+ $rest_bound:ident)*>
            { $($field:ident: $fty:ty),+ $(,)? };
        check($self_:ident) $check:block
        message($self2:ident) $msg:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name<$gen> {
            $(pub $field: $fty,)+
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $name<$gen> {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $crate::foundation::Rule for $name<$gen> {
            fn check(&$self_) -> $crate::foundation::ValidationResult {
                if $check {
                    $crate::foundation::ValidationResult::pass()
                } else {
                    $crate::foundation::ValidationResult::fail_with($msg)
                }
            }
        }
    };
}

// ============================================================================
// COMPOSE MACRO
// ============================================================================

/// Composes multiple rules using AND logic into a [`Chain`](crate::combinators::Chain).
///
/// ```
/// use rulechain_validator::compose;
/// use rulechain_validator::prelude::*;
///
/// let chain = compose![non_empty("bob"), min_len("bob", 5), max_len("bob", 2)];
/// assert_eq!(chain.evaluate().messages(), ["too short: min 5"]);
/// ```
#[macro_export]
macro_rules! compose {
    ($($rule:expr),+ $(,)?) => {
        $crate::combinators::Chain::new()$(.and($rule))+
    };
}

// ============================================================================
// ANY_OF MACRO
// ============================================================================

/// Composes multiple rules using OR logic into a [`Chain`](crate::combinators::Chain).
///
/// ```
/// use rulechain_validator::any_of;
/// use rulechain_validator::prelude::*;
///
/// let chain = any_of![is_uuid_v4("nope"), is_ulid("nope")];
/// assert_eq!(chain.evaluate().messages(), ["must be UUID v4", "must be ULID"]);
/// ```
#[macro_export]
macro_rules! any_of {
    ($($rule:expr),+ $(,)?) => {
        $crate::combinators::Chain::new()$(.or($rule))+
    };
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::foundation::Rule;
    use std::fmt::Display;

    // Test 1: Struct with fields + auto new
    rule! {
        #[derive(Copy, PartialEq, Eq, Hash)]
        TestMinLen { len: usize, min: usize };
        check(self) { self.len >= self.min }
        message(self) { format!("need {} chars", self.min) }
        fn test_min_len(len: usize, min: usize);
    }

    #[test]
    fn test_struct_rule() {
        assert!(TestMinLen { len: 3, min: 3 }.check().is_valid());
        assert!(!TestMinLen { len: 2, min: 3 }.check().is_valid());
    }

    #[test]
    fn test_struct_new_and_factory() {
        assert_eq!(TestMinLen::new(5, 3), TestMinLen { len: 5, min: 3 });
        assert_eq!(test_min_len(1, 2).check().messages(), ["need 2 chars"]);
    }

    // Test 2: Custom constructor
    rule! {
        TestPrefix { value: String, prefix: String };
        check(self) { self.value.starts_with(&self.prefix) }
        message(self) { format!("needs {}", self.prefix) }
        new(value: impl Into<String>, prefix: impl Into<String>) {
            Self { value: value.into(), prefix: prefix.into() }
        }
        fn test_prefix(value: impl Into<String>, prefix: impl Into<String>);
    }

    #[test]
    fn test_custom_new() {
        let r = TestPrefix::new("abc", "ab");
        assert_eq!(r.prefix, "ab");
        assert!(r.check().is_valid());
        assert_eq!(test_prefix("abc", "x").check().messages(), ["needs x"]);
    }

    // Test 3: Generic rule
    rule! {
        #[derive(Copy, PartialEq)]
        TestAtLeast<T: PartialOrd + Display> { value: T, min: T };
        check(self) { self.value >= self.min }
        message(self) { format!("must be >= {}", self.min) }
        fn test_at_least(value: T, min: T);
    }

    #[test]
    fn test_generic_rule() {
        assert!(test_at_least(5_i32, 5).check().is_valid());
        assert_eq!(test_at_least(1.5_f64, 2.5).check().messages(), ["must be >= 2.5"]);
    }

    // Test 4: No factory fn
    rule! {
        TestFlag { on: bool };
        check(self) { self.on }
        message(self) { "off" }
    }

    #[test]
    fn test_struct_without_factory() {
        assert!(TestFlag::new(true).check().is_valid());
        assert_eq!(TestFlag::new(false).check().messages(), ["off"]);
    }

    // Test 5: compose! and any_of!
    #[test]
    fn test_compose_short_circuits() {
        let chain = compose![test_min_len(1, 2), test_min_len(0, 5)];
        assert_eq!(chain.evaluate().messages(), ["need 2 chars"]);
    }

    #[test]
    fn test_any_of_collects() {
        let chain = any_of![test_min_len(1, 2), test_min_len(0, 5)];
        assert_eq!(
            chain.evaluate().messages(),
            ["need 2 chars", "need 5 chars"]
        );
        let chain = any_of![test_min_len(1, 2), test_min_len(9, 5)];
        assert!(chain.evaluate().is_valid());
    }

    #[test]
    fn test_single_rule_macros() {
        assert!(compose![TestFlag::new(true)].evaluate().is_valid());
        assert!(!any_of![TestFlag::new(false)].evaluate().is_valid());
    }
}
