//! Collection size rules
//!
//! These take a length that the caller has already measured, so one rule
//! serves slices, maps, sets and anything else with a `len()`.

crate::rule! {
    /// Validates that a collection is not empty.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub NotEmptyLen { len: usize };
    check(self) { self.len != 0 }
    message(self) { "must not be empty" }
    fn not_empty_len(len: usize);
}

crate::rule! {
    /// Validates that a collection holds at least `min` items.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub SizeMin { len: usize, min: usize };
    check(self) { self.len >= self.min }
    message(self) { format!("size too small: min {}", self.min) }
    fn size_min(len: usize, min: usize);
}

crate::rule! {
    /// Validates that a collection holds at most `max` items.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub SizeMax { len: usize, max: usize };
    check(self) { self.len <= self.max }
    message(self) { format!("size too large: max {}", self.max) }
    fn size_max(len: usize, max: usize);
}

crate::rule! {
    /// Validates that `min <= len <= max`.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub SizeBetween { len: usize, min: usize, max: usize };
    check(self) { (self.min..=self.max).contains(&self.len) }
    message(self) { format!("size must be between {} and {}", self.min, self.max) }
    fn size_between(len: usize, min: usize, max: usize);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Rule, ValidationResult};
    use rstest::rstest;

    #[rstest]
    #[case::not_empty_ok(not_empty_len(1).check(), None)]
    #[case::not_empty_fail(not_empty_len(0).check(), Some("must not be empty"))]
    #[case::min_ok(size_min(2, 2).check(), None)]
    #[case::min_fail(size_min(1, 2).check(), Some("size too small: min 2"))]
    #[case::max_ok(size_max(3, 3).check(), None)]
    #[case::max_fail(size_max(4, 3).check(), Some("size too large: max 3"))]
    #[case::between_low_edge(size_between(1, 1, 3).check(), None)]
    #[case::between_high_edge(size_between(3, 1, 3).check(), None)]
    #[case::between_fail(size_between(4, 1, 3).check(), Some("size must be between 1 and 3"))]
    fn size_rules(#[case] got: ValidationResult, #[case] want: Option<&str>) {
        let expected = want.map_or_else(ValidationResult::pass, ValidationResult::fail_with);
        assert_eq!(got, expected);
    }

    #[test]
    fn measures_any_collection() {
        let tags = vec!["a", "b"];
        assert!(size_min(tags.len(), 1).check().is_valid());
        let map = std::collections::HashMap::<&str, i32>::new();
        assert!(!not_empty_len(map.len()).check().is_valid());
    }
}
