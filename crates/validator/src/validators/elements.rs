//! Collection content rules: membership and uniqueness.

use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;

crate::rule! {
    /// Validates that `items` contains `element`.
    ///
    /// The failure message quotes the missing element with `Display`.
    #[derive(PartialEq)]
    pub ContainsElement<T: PartialEq + Display> { items: Vec<T>, element: T };
    check(self) { self.items.contains(&self.element) }
    message(self) { format!("must contain {}", self.element) }
    fn contains_element(items: Vec<T>, element: T);
}

crate::rule! {
    /// Validates that no item appears twice.
    #[derive(PartialEq)]
    pub Unique<T: Eq + Hash> { items: Vec<T> };
    check(self) {
        let mut seen = HashSet::with_capacity(self.items.len());
        self.items.iter().all(|item| seen.insert(item))
    }
    message(self) { "must be unique" }
    fn unique(items: Vec<T>);
}
