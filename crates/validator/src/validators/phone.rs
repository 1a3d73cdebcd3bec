//! Phone number rules (E.164).

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{Rule, ValidationResult};

const E164_MESSAGE: &str = "invalid phone (use E.164, e.g. +15551234567)";

// `+`, a non-zero leading digit, 8 to 15 digits in total.
static E164_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\+[1-9][0-9]{7,14}$").unwrap());

crate::rule! {
    /// Validates an E.164 phone number such as `+15551234567`.
    pub PhoneE164 { value: String };
    check(self) { E164_REGEX.is_match(&self.value) }
    message(self) { E164_MESSAGE }
    new(value: impl Into<String>) { Self { value: value.into() } }
    fn phone_e164(value: impl Into<String>);
}

/// Validates an E.164 phone number that starts with a given country code.
///
/// The prefix is checked first, so a number from the wrong country reports
/// the expected code even when it is also malformed.
///
/// # Examples
///
/// ```
/// use rulechain_validator::validators::phone_with_country_code;
/// use rulechain_validator::foundation::Rule;
///
/// assert!(phone_with_country_code("+251911234567", "+251").check().is_valid());
/// assert_eq!(
///     phone_with_country_code("+15551234567", "+251").check().messages(),
///     ["invalid phone: must start with +251"]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneWithCountryCode {
    /// The number under test.
    pub value: String,
    /// Required prefix, including the leading `+`.
    pub country_code: String,
}

impl PhoneWithCountryCode {
    /// Creates a new country-code phone rule.
    #[must_use]
    pub fn new(value: impl Into<String>, country_code: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            country_code: country_code.into(),
        }
    }
}

impl Rule for PhoneWithCountryCode {
    fn check(&self) -> ValidationResult {
        if !self.value.starts_with(&self.country_code) {
            return ValidationResult::fail_with(format!(
                "invalid phone: must start with {}",
                self.country_code
            ));
        }
        if !E164_REGEX.is_match(&self.value) {
            return ValidationResult::fail_with(E164_MESSAGE);
        }
        ValidationResult::pass()
    }
}

/// Creates a [`PhoneWithCountryCode`] rule.
#[must_use]
pub fn phone_with_country_code(
    value: impl Into<String>,
    country_code: impl Into<String>,
) -> PhoneWithCountryCode {
    PhoneWithCountryCode::new(value, country_code)
}
