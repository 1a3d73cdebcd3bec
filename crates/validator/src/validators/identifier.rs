//! Identifier format rules: slugs, UUID v4 and ULID.

use std::sync::LazyLock;

use regex::Regex;

static SLUG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap());

static UUID_V4_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$").unwrap()
});

// Crockford base32, first symbol bounded so the 128-bit value cannot overflow.
static ULID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-7][0-9A-HJKMNP-TV-Z]{25}$").unwrap());

crate::rule! {
    /// Validates a lowercase, hyphen-separated slug such as `hello-world`.
    pub IsSlug { value: String };
    check(self) { SLUG_REGEX.is_match(&self.value) }
    message(self) { "must be a slug" }
    new(value: impl Into<String>) { Self { value: value.into() } }
    fn is_slug(value: impl Into<String>);
}

crate::rule! {
    /// Validates the canonical hyphenated form of a version 4 UUID.
    ///
    /// Hex digits may be upper or lower case; the variant nibble must be
    /// one of `8`, `9`, `a`, `b`.
    pub IsUuidV4 { value: String };
    check(self) { UUID_V4_REGEX.is_match(&self.value) }
    message(self) { "must be UUID v4" }
    new(value: impl Into<String>) { Self { value: value.into() } }
    fn is_uuid_v4(value: impl Into<String>);
}

crate::rule! {
    /// Validates a 26-character uppercase ULID.
    pub IsUlid { value: String };
    check(self) { ULID_REGEX.is_match(&self.value) }
    message(self) { "must be ULID" }
    new(value: impl Into<String>) { Self { value: value.into() } }
    fn is_ulid(value: impl Into<String>);
}
