//! String length rules
//!
//! Length is measured in bytes (`str::len`), so a multi-byte character counts
//! more than once. Failure messages quote the configured bound.

// ============================================================================
// NON EMPTY
// ============================================================================

crate::rule! {
    /// Validates that a string is not empty.
    pub NonEmpty { value: String };
    check(self) { !self.value.is_empty() }
    message(self) { "must not be empty" }
    new(value: impl Into<String>) { Self { value: value.into() } }
    fn non_empty(value: impl Into<String>);
}

// ============================================================================
// MIN LEN
// ============================================================================

crate::rule! {
    /// Validates that a string is at least `min` bytes long.
    #[derive(PartialEq, Eq, Hash)]
    pub MinLen { value: String, min: usize };
    check(self) { self.value.len() >= self.min }
    message(self) { format!("too short: min {}", self.min) }
    new(value: impl Into<String>, min: usize) { Self { value: value.into(), min } }
    fn min_len(value: impl Into<String>, min: usize);
}

// ============================================================================
// MAX LEN
// ============================================================================

crate::rule! {
    /// Validates that a string is at most `max` bytes long.
    #[derive(PartialEq, Eq, Hash)]
    pub MaxLen { value: String, max: usize };
    check(self) { self.value.len() <= self.max }
    message(self) { format!("too long: max {}", self.max) }
    new(value: impl Into<String>, max: usize) { Self { value: value.into(), max } }
    fn max_len(value: impl Into<String>, max: usize);
}

// ============================================================================
// LEN BETWEEN
// ============================================================================

crate::rule! {
    /// Validates that a string length lies in `min..=max` bytes.
    ///
    /// An inverted range (`min > max`) never passes.
    #[derive(PartialEq, Eq, Hash)]
    pub LenBetween { value: String, min: usize, max: usize };
    check(self) { (self.min..=self.max).contains(&self.value.len()) }
    message(self) { format!("length must be between {} and {}", self.min, self.max) }
    new(value: impl Into<String>, min: usize, max: usize) {
        Self { value: value.into(), min, max }
    }
    fn len_between(value: impl Into<String>, min: usize, max: usize);
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Rule;
    use rstest::rstest;

    #[rstest]
    #[case::non_empty_ok(non_empty("x").check().messages().to_vec(), vec![])]
    #[case::non_empty_fail(non_empty("").check().messages().to_vec(), vec!["must not be empty"])]
    #[case::min_len_ok(min_len("abcd", 3).check().messages().to_vec(), vec![])]
    #[case::min_len_fail(min_len("ab", 3).check().messages().to_vec(), vec!["too short: min 3"])]
    #[case::max_len_ok(max_len("ab", 3).check().messages().to_vec(), vec![])]
    #[case::max_len_fail(max_len("abcd", 3).check().messages().to_vec(), vec!["too long: max 3"])]
    #[case::between_ok(len_between("abc", 2, 3).check().messages().to_vec(), vec![])]
    #[case::between_fail(
        len_between("a", 2, 3).check().messages().to_vec(),
        vec!["length must be between 2 and 3"]
    )]
    fn length_rules(#[case] got: Vec<String>, #[case] want: Vec<&str>) {
        assert_eq!(got, want);
    }

    #[test]
    fn whitespace_is_not_empty() {
        assert!(non_empty(" ").check().is_valid());
    }

    #[test]
    fn boundaries_are_inclusive() {
        assert!(min_len("abc", 3).check().is_valid());
        assert!(max_len("abc", 3).check().is_valid());
        assert!(len_between("ab", 2, 3).check().is_valid());
        assert!(len_between("abc", 2, 3).check().is_valid());
        assert!(!len_between("abcd", 2, 3).check().is_valid());
    }

    #[test]
    fn length_counts_bytes() {
        // "héllo" is five characters but six bytes.
        assert!(min_len("h\u{e9}llo", 6).check().is_valid());
        assert!(!max_len("h\u{e9}llo", 5).check().is_valid());
    }

    #[test]
    fn inverted_range_never_passes() {
        assert!(!len_between("abc", 5, 1).check().is_valid());
    }

    #[test]
    fn rules_are_reusable() {
        let rule = MinLen::new(String::from("abc"), 3);
        assert_eq!(rule.check(), rule.check());
        assert_eq!(rule.min, 3);
    }
}
