//! Hostname rule (RFC 1123).
//!
//! A hostname is at most 253 bytes of dot-separated labels. Each label is
//! 1..=63 letters, digits or hyphens and neither starts nor ends with a
//! hyphen. A trailing dot is not accepted.

use std::sync::LazyLock;

use regex::Regex;

const MAX_HOSTNAME_LEN: usize = 253;

static HOSTNAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?i:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?)(?:\.(?i:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?))*$",
    )
    .unwrap()
});

crate::rule! {
    /// Validates an RFC 1123 hostname such as `api.example.com`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rulechain_validator::validators::is_hostname;
    /// use rulechain_validator::foundation::Rule;
    ///
    /// assert!(is_hostname("localhost").check().is_valid());
    /// assert_eq!(is_hostname("-bad.com").check().messages(), ["must be hostname"]);
    /// ```
    pub IsHostname { value: String };
    check(self) { self.value.len() <= MAX_HOSTNAME_LEN && HOSTNAME_REGEX.is_match(&self.value) }
    message(self) { "must be hostname" }
    new(value: impl Into<String>) { Self { value: value.into() } }
    fn is_hostname(value: impl Into<String>);
}
