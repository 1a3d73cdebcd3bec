//! Luhn checksum rule for card and account numbers.

use crate::foundation::{Rule, ValidationResult};

/// Outcome of scanning a candidate number.
enum Scan {
    NotNumeric,
    Checksum { digits: usize, sum: u32 },
}

/// Walks the bytes right to left, doubling every second digit.
fn scan(value: &str) -> Scan {
    let mut sum = 0_u32;
    let mut digits = 0_usize;
    let mut double = false;

    for byte in value.bytes().rev() {
        if byte == b' ' {
            continue;
        }
        if !byte.is_ascii_digit() {
            return Scan::NotNumeric;
        }
        let mut digit = u32::from(byte - b'0');
        if double {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        // Only the last decimal digit matters; keep the sum bounded.
        sum = (sum + digit) % 10;
        double = !double;
        digits += 1;
    }

    Scan::Checksum { digits, sum }
}

/// Validates a number with the Luhn checksum.
///
/// Spaces are ignored; any other non-digit fails with "must be numeric".
/// A value without digits fails the checksum.
///
/// # Examples
///
/// ```
/// use rulechain_validator::validators::luhn_valid;
/// use rulechain_validator::foundation::Rule;
///
/// assert!(luhn_valid("4539 1488 0343 6467").check().is_valid());
/// assert_eq!(luhn_valid("4539 1488 0343 6468").check().messages(), ["invalid luhn"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LuhnValid {
    /// The number under test.
    pub value: String,
}

impl LuhnValid {
    /// Creates a new Luhn rule.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl Rule for LuhnValid {
    fn check(&self) -> ValidationResult {
        match scan(&self.value) {
            Scan::NotNumeric => ValidationResult::fail_with("must be numeric"),
            Scan::Checksum { digits, sum } if digits == 0 || sum % 10 != 0 => {
                ValidationResult::fail_with("invalid luhn")
            }
            Scan::Checksum { .. } => ValidationResult::pass(),
        }
    }
}

/// Creates a [`LuhnValid`] rule.
#[must_use]
pub fn luhn_valid(value: impl Into<String>) -> LuhnValid {
    LuhnValid::new(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::spaced("4539 1488 0343 6467", None)]
    #[case::compact("4539148803436467", None)]
    #[case::single_zero("0", None)]
    #[case::bad_checksum("4539 1488 0343 6468", Some("invalid luhn"))]
    #[case::empty("", Some("invalid luhn"))]
    #[case::only_spaces("   ", Some("invalid luhn"))]
    #[case::dashes("4539-1488-0343-6467", Some("must be numeric"))]
    #[case::letters("4539a", Some("must be numeric"))]
    fn test_luhn(#[case] input: &str, #[case] want: Option<&str>) {
        let expected = want.map_or_else(ValidationResult::pass, ValidationResult::fail_with);
        assert_eq!(luhn_valid(input).check(), expected);
    }

    #[test]
    fn very_long_numbers_do_not_overflow() {
        // A nine contributes 9 doubled or not, so 2e6 of them sum to 1.8e7.
        let nines = "9".repeat(2_000_000);
        assert!(luhn_valid(nines.as_str()).check().is_valid());
        assert!(!luhn_valid(format!("{nines}9")).check().is_valid());
        let padded = format!("{}79927398713", "0".repeat(1_000_000));
        assert!(luhn_valid(padded).check().is_valid());
    }
}
