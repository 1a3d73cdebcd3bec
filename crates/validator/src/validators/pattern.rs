//! String shape rules: affixes, substrings, character classes and enums.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{Rule, ValidationResult};

// Letters are general category L, digits are Nd only. Superscripts,
// fractions and roman numerals are neither.
static ALPHA_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\p{L}*$").unwrap());
static NUMERIC_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\p{Nd}+$").unwrap());
static ALNUM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}\p{Nd}]*$").unwrap());

// ============================================================================
// AFFIXES AND SUBSTRINGS
// ============================================================================

crate::rule! {
    /// Validates that a string starts with `prefix`.
    pub HasPrefix { value: String, prefix: String };
    check(self) { self.value.starts_with(self.prefix.as_str()) }
    message(self) { format!("must start with {}", self.prefix) }
    new(value: impl Into<String>, prefix: impl Into<String>) {
        Self { value: value.into(), prefix: prefix.into() }
    }
    fn has_prefix(value: impl Into<String>, prefix: impl Into<String>);
}

crate::rule! {
    /// Validates that a string ends with `suffix`.
    pub HasSuffix { value: String, suffix: String };
    check(self) { self.value.ends_with(self.suffix.as_str()) }
    message(self) { format!("must end with {}", self.suffix) }
    new(value: impl Into<String>, suffix: impl Into<String>) {
        Self { value: value.into(), suffix: suffix.into() }
    }
    fn has_suffix(value: impl Into<String>, suffix: impl Into<String>);
}

crate::rule! {
    /// Validates that a string contains `needle`.
    pub Contains { value: String, needle: String };
    check(self) { self.value.contains(self.needle.as_str()) }
    message(self) { format!("must contain {}", self.needle) }
    new(value: impl Into<String>, needle: impl Into<String>) {
        Self { value: value.into(), needle: needle.into() }
    }
    fn contains(value: impl Into<String>, needle: impl Into<String>);
}

crate::rule! {
    /// Validates that a string has no leading or trailing whitespace.
    pub Trimmed { value: String };
    check(self) { self.value.trim() == self.value }
    message(self) { "must not have leading/trailing spaces" }
    new(value: impl Into<String>) { Self { value: value.into() } }
    fn trimmed(value: impl Into<String>);
}

// ============================================================================
// CHARACTER CLASSES
// ============================================================================

crate::rule! {
    /// Validates that every character is a letter. The empty string passes.
    pub IsAlpha { value: String };
    check(self) { ALPHA_REGEX.is_match(&self.value) }
    message(self) { "must contain only letters" }
    new(value: impl Into<String>) { Self { value: value.into() } }
    fn is_alpha(value: impl Into<String>);
}

crate::rule! {
    /// Validates that a string is non-empty and made of decimal digits
    /// (any script).
    pub IsNumeric { value: String };
    check(self) { NUMERIC_REGEX.is_match(&self.value) }
    message(self) { "must be numeric" }
    new(value: impl Into<String>) { Self { value: value.into() } }
    fn is_numeric(value: impl Into<String>);
}

crate::rule! {
    /// Validates that every character is a letter or a digit. The empty
    /// string passes.
    pub IsAlnum { value: String };
    check(self) { ALNUM_REGEX.is_match(&self.value) }
    message(self) { "must be alphanumeric" }
    new(value: impl Into<String>) { Self { value: value.into() } }
    fn is_alnum(value: impl Into<String>);
}

// ============================================================================
// ONE OF
// ============================================================================

/// Validates that a string equals one of the `allowed` values.
///
/// With `case_sensitive == false` both sides are lowercased before comparing.
/// The failure message lists the allowed values as given.
///
/// # Examples
///
/// ```
/// use rulechain_validator::validators::one_of;
/// use rulechain_validator::foundation::Rule;
///
/// let allowed = vec!["draft".to_string(), "live".to_string()];
/// assert!(one_of("LIVE", allowed.clone(), false).check().is_valid());
/// assert_eq!(
///     one_of("gone", allowed, true).check().messages(),
///     ["must be one of: draft, live"]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneOf {
    /// The value under test.
    pub value: String,
    /// Accepted values.
    pub allowed: Vec<String>,
    /// Whether comparison respects case.
    pub case_sensitive: bool,
}

impl OneOf {
    /// Creates a new membership rule.
    #[must_use]
    pub fn new(value: impl Into<String>, allowed: Vec<String>, case_sensitive: bool) -> Self {
        Self {
            value: value.into(),
            allowed,
            case_sensitive,
        }
    }
}

impl Rule for OneOf {
    fn check(&self) -> ValidationResult {
        let found = if self.case_sensitive {
            self.allowed.iter().any(|a| *a == self.value)
        } else {
            let value = self.value.to_lowercase();
            self.allowed.iter().any(|a| a.to_lowercase() == value)
        };

        if found {
            ValidationResult::pass()
        } else {
            ValidationResult::fail_with(format!("must be one of: {}", self.allowed.join(", ")))
        }
    }
}

/// Creates a [`OneOf`] rule.
#[must_use]
pub fn one_of(value: impl Into<String>, allowed: Vec<String>, case_sensitive: bool) -> OneOf {
    OneOf::new(value, allowed, case_sensitive)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn ab() -> Vec<String> {
        vec!["a".into(), "b".into()]
    }

    #[rstest]
    #[case::prefix_ok(has_prefix("foobar", "foo").check(), None)]
    #[case::prefix_fail(has_prefix("bar", "foo").check(), Some("must start with foo"))]
    #[case::suffix_ok(has_suffix("foobar", "bar").check(), None)]
    #[case::suffix_fail(has_suffix("foo", "bar").check(), Some("must end with bar"))]
    #[case::contains_ok(contains("hello world", "world").check(), None)]
    #[case::contains_fail(contains("hello", "world").check(), Some("must contain world"))]
    #[case::trimmed_ok(trimmed("abc").check(), None)]
    #[case::trimmed_fail(trimmed(" abc ").check(), Some("must not have leading/trailing spaces"))]
    #[case::alpha_ok(is_alpha("abcXYZ").check(), None)]
    #[case::alpha_fail(is_alpha("abc123").check(), Some("must contain only letters"))]
    #[case::numeric_ok(is_numeric("123").check(), None)]
    #[case::numeric_fail(is_numeric("12a").check(), Some("must be numeric"))]
    #[case::alnum_ok(is_alnum("abc123").check(), None)]
    #[case::alnum_fail(is_alnum("abc-123").check(), Some("must be alphanumeric"))]
    #[case::numeric_other_script(is_numeric("\u{663}\u{664}").check(), None)]
    #[case::numeric_superscript_fraction(is_numeric("\u{b2}\u{bd}").check(), Some("must be numeric"))]
    #[case::alnum_superscript(is_alnum("x\u{b2}").check(), Some("must be alphanumeric"))]
    #[case::alpha_roman_numeral(is_alpha("\u{216b}").check(), Some("must contain only letters"))]
    #[case::alpha_trailing_newline(is_alpha("abc\n").check(), Some("must contain only letters"))]
    #[case::one_of_ok(one_of("b", ab(), true).check(), None)]
    #[case::one_of_fail(one_of("c", ab(), true).check(), Some("must be one of: a, b"))]
    #[case::one_of_case_insensitive(one_of("B", ab(), false).check(), None)]
    #[case::one_of_case_sensitive(one_of("B", ab(), true).check(), Some("must be one of: a, b"))]
    fn pattern_rules(#[case] got: ValidationResult, #[case] want: Option<&str>) {
        match want {
            None => assert_eq!(got, ValidationResult::pass()),
            Some(msg) => assert_eq!(got, ValidationResult::fail_with(msg)),
        }
    }

    #[test]
    fn empty_string_edges() {
        assert!(is_alpha("").check().is_valid());
        assert!(is_alnum("").check().is_valid());
        assert!(!is_numeric("").check().is_valid());
        assert!(has_prefix("", "").check().is_valid());
        assert!(trimmed("").check().is_valid());
    }

    #[test]
    fn unicode_letters_are_letters() {
        assert!(is_alpha("\u{e9}t\u{e9}").check().is_valid());
        assert!(is_alnum("caf\u{e9}42").check().is_valid());
    }

    #[test]
    fn trimmed_rejects_tabs_and_newlines() {
        assert!(!trimmed("abc\n").check().is_valid());
        assert!(!trimmed("\tabc").check().is_valid());
    }

    #[test]
    fn one_of_with_empty_allowed_list() {
        assert_eq!(
            one_of("x", Vec::new(), true).check().messages(),
            ["must be one of: "]
        );
    }
}
