//! Email rules
//!
//! [`EmailValid`] is a light syntactic check (`local@domain.tld`, no spaces,
//! exactly one `@`), not RFC 5322. The domain policies only split the address
//! at its last `@` and compare domains case-insensitively; pair them with
//! [`EmailValid`] when the shape also matters.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{Rule, ValidationResult};

// ASCII whitespace only, matching the usual `\s` of web form validators.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\t\n\x0C\r ]+@[^@\t\n\x0C\r ]+\.[^@\t\n\x0C\r ]+$").unwrap()
});

/// Returns the lowercased part after the last `@`, if any.
fn domain_of(address: &str) -> Option<String> {
    address
        .rsplit_once('@')
        .map(|(_, domain)| domain.to_lowercase())
}

fn listed(domain: &str, list: &[String]) -> bool {
    list.iter().any(|entry| entry.to_lowercase() == domain)
}

// ============================================================================
// EMAIL VALID
// ============================================================================

/// Validates the shape of an email address.
///
/// # Examples
///
/// ```
/// use rulechain_validator::validators::email_valid;
/// use rulechain_validator::foundation::Rule;
///
/// assert!(email_valid("ops@example.com").check().is_valid());
/// assert_eq!(email_valid("").check().messages(), ["must not be empty"]);
/// assert_eq!(email_valid("ops@localhost").check().messages(), ["invalid email"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailValid {
    /// The address under test.
    pub value: String,
}

impl EmailValid {
    /// Creates a new email rule.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl Rule for EmailValid {
    fn check(&self) -> ValidationResult {
        if self.value.is_empty() {
            return ValidationResult::fail_with("must not be empty");
        }
        if !EMAIL_REGEX.is_match(&self.value) {
            return ValidationResult::fail_with("invalid email");
        }
        ValidationResult::pass()
    }
}

/// Creates an [`EmailValid`] rule.
#[must_use]
pub fn email_valid(value: impl Into<String>) -> EmailValid {
    EmailValid::new(value)
}

// ============================================================================
// DOMAIN POLICIES
// ============================================================================

/// Validates that an address belongs to one of the allowed domains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailDomainAllowlist {
    /// The address under test.
    pub value: String,
    /// Accepted domains, compared case-insensitively.
    pub allowed: Vec<String>,
}

impl EmailDomainAllowlist {
    /// Creates a new allowlist rule.
    #[must_use]
    pub fn new(value: impl Into<String>, allowed: Vec<String>) -> Self {
        Self {
            value: value.into(),
            allowed,
        }
    }
}

impl Rule for EmailDomainAllowlist {
    fn check(&self) -> ValidationResult {
        let Some(domain) = domain_of(&self.value) else {
            return ValidationResult::fail_with("invalid email");
        };
        if listed(&domain, &self.allowed) {
            ValidationResult::pass()
        } else {
            ValidationResult::fail_with("email domain not allowed")
        }
    }
}

/// Creates an [`EmailDomainAllowlist`] rule.
#[must_use]
pub fn email_domain_allowlist(value: impl Into<String>, allowed: Vec<String>) -> EmailDomainAllowlist {
    EmailDomainAllowlist::new(value, allowed)
}

/// Validates that an address does not belong to a blocked domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailDomainBlocklist {
    /// The address under test.
    pub value: String,
    /// Rejected domains, compared case-insensitively.
    pub blocked: Vec<String>,
}

impl EmailDomainBlocklist {
    /// Creates a new blocklist rule.
    #[must_use]
    pub fn new(value: impl Into<String>, blocked: Vec<String>) -> Self {
        Self {
            value: value.into(),
            blocked,
        }
    }
}

impl Rule for EmailDomainBlocklist {
    fn check(&self) -> ValidationResult {
        let Some(domain) = domain_of(&self.value) else {
            return ValidationResult::fail_with("invalid email");
        };
        if listed(&domain, &self.blocked) {
            ValidationResult::fail_with("email domain blocked")
        } else {
            ValidationResult::pass()
        }
    }
}

/// Creates an [`EmailDomainBlocklist`] rule.
#[must_use]
pub fn email_domain_blocklist(value: impl Into<String>, blocked: Vec<String>) -> EmailDomainBlocklist {
    EmailDomainBlocklist::new(value, blocked)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn domains(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[rstest]
    #[case::plain("a@ex.com", None)]
    #[case::subdomain("first.last@mail.ex.co.uk", None)]
    #[case::empty("", Some("must not be empty"))]
    #[case::no_tld("a@ex", Some("invalid email"))]
    #[case::two_ats("a@b@ex.com", Some("invalid email"))]
    #[case::space("a b@ex.com", Some("invalid email"))]
    #[case::no_local("@ex.com", Some("invalid email"))]
    fn test_email_valid(#[case] input: &str, #[case] want: Option<&str>) {
        let expected = want.map_or_else(ValidationResult::pass, ValidationResult::fail_with);
        assert_eq!(email_valid(input).check(), expected);
    }

    #[test]
    fn test_allowlist() {
        let allowed = domains(&["ex.com"]);
        assert!(email_domain_allowlist("a@ex.com", allowed.clone()).check().is_valid());
        assert!(email_domain_allowlist("a@EX.Com", allowed.clone()).check().is_valid());
        assert_eq!(
            email_domain_allowlist("a@other.com", allowed.clone()).check().messages(),
            ["email domain not allowed"]
        );
        assert_eq!(
            email_domain_allowlist("no-at-sign", allowed).check().messages(),
            ["invalid email"]
        );
    }

    #[test]
    fn test_blocklist() {
        let blocked = domains(&["Spam.io"]);
        assert!(email_domain_blocklist("a@ex.com", blocked.clone()).check().is_valid());
        assert_eq!(
            email_domain_blocklist("a@spam.IO", blocked.clone()).check().messages(),
            ["email domain blocked"]
        );
        assert_eq!(
            email_domain_blocklist("", blocked).check().messages(),
            ["invalid email"]
        );
    }

    #[test]
    fn domain_is_taken_after_last_at() {
        let allowed = domains(&["ex.com"]);
        assert!(email_domain_allowlist("a@b@ex.com", allowed).check().is_valid());
    }
}
