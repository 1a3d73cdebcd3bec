//! Encoding rules: hexadecimal and base64 strings.

use std::borrow::Cow;
use std::sync::LazyLock;

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use regex::Regex;

static HEX_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9a-fA-F]+$").unwrap());

/// Standard alphabet with mandatory padding. Non-zero trailing bits in the
/// last symbol are tolerated.
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::RequireCanonical),
);

// ============================================================================
// HEX
// ============================================================================

crate::rule! {
    /// Validates that a string is a non-empty run of hex digits (any case).
    pub IsHex { value: String };
    check(self) { HEX_REGEX.is_match(&self.value) }
    message(self) { "must be hex" }
    new(value: impl Into<String>) { Self { value: value.into() } }
    fn is_hex(value: impl Into<String>);
}

// ============================================================================
// BASE64
// ============================================================================

/// Decodes with the standard padded alphabet, skipping CR and LF.
fn decodes_as_base64(value: &str) -> bool {
    let input = if value.contains(['\r', '\n']) {
        Cow::Owned(value.replace(['\r', '\n'], ""))
    } else {
        Cow::Borrowed(value)
    };
    STANDARD_LENIENT.decode(input.as_bytes()).is_ok()
}

crate::rule! {
    /// Validates that a string is standard, padded base64.
    ///
    /// Line breaks are ignored and the empty string passes.
    pub IsBase64 { value: String };
    check(self) { decodes_as_base64(&self.value) }
    message(self) { "must be base64" }
    new(value: impl Into<String>) { Self { value: value.into() } }
    fn is_base64(value: impl Into<String>);
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Rule;
    use base64::engine::general_purpose::STANDARD;

    #[test]
    fn test_hex() {
        assert!(is_hex("0A1b").check().is_valid());
        assert_eq!(is_hex("g001").check().messages(), ["must be hex"]);
        assert!(!is_hex("").check().is_valid());
        assert!(!is_hex("0x1f").check().is_valid());
    }

    #[test]
    fn test_base64() {
        let encoded = STANDARD.encode(b"hi");
        assert!(is_base64(encoded).check().is_valid());
        assert_eq!(is_base64("not-base64").check().messages(), ["must be base64"]);
    }

    #[test]
    fn test_base64_edges() {
        assert!(is_base64("").check().is_valid());
        assert!(is_base64("aGVs\r\nbG8=").check().is_valid());
        // Missing padding.
        assert!(!is_base64("aGk").check().is_valid());
        // URL-safe alphabet is rejected.
        assert!(!is_base64("-_8=").check().is_valid());
        // Trailing bits set in the final symbol.
        assert!(is_base64("aGl=").check().is_valid());
    }
}
