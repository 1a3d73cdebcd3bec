//! String content rules
//!
//! Rules for checking string content against patterns and URL syntax.

use regex::Regex;

// ============================================================================
// REGEX RULE
// ============================================================================

crate::rule! {
    /// Validates that a string matches a caller-supplied regular expression.
    ///
    /// The pattern is not anchored implicitly; use `^...$` for a full match.
    pub Matches { value: String, pattern: Regex };
    check(self) { self.pattern.is_match(&self.value) }
    message(self) { "must match pattern" }
    new(value: impl Into<String>, pattern: Regex) { Self { value: value.into(), pattern } }
    fn matches(value: impl Into<String>, pattern: Regex);
}

// ============================================================================
// URL RULE
// ============================================================================

/// Whether `//` and a non-empty authority follow the scheme separator.
#[cfg(feature = "network")]
fn has_explicit_authority(value: &str) -> bool {
    value
        .split_once(':')
        .and_then(|(_, rest)| rest.strip_prefix("//"))
        .is_some_and(|authority| !authority.is_empty() && !authority.starts_with('/'))
}

#[cfg(feature = "network")]
fn has_host(value: &str) -> bool {
    url::Url::parse(value).is_ok_and(|url| url.host_str().is_some_and(|host| !host.is_empty()))
}

#[cfg(feature = "network")]
crate::rule! {
    /// Validates that a string is an absolute URL with a scheme and a host.
    ///
    /// The authority must be written out as `scheme://host`; forms such as
    /// `http:example.com` are rejected even though a WHATWG parser would
    /// supply the missing slashes.
    pub IsUrl { value: String };
    check(self) { has_explicit_authority(&self.value) && has_host(&self.value) }
    message(self) { "must be URL" }
    new(value: impl Into<String>) { Self { value: value.into() } }
    fn is_url(value: impl Into<String>);
}

// ============================================================================
// TESTS
// ============================================================================
