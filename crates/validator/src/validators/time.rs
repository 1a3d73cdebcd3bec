//! Timestamp rules
//!
//! Instants are `chrono::DateTime<Utc>`. The zero time is the default
//! instant (the UNIX epoch), so an unset timestamp field fails
//! [`NotZeroTime`]. [`InPast`] and [`InFuture`] read the clock on every
//! check, so re-evaluating a chain can change their outcome.

use chrono::{DateTime, Datelike, Utc, Weekday};

// ============================================================================
// ZERO TIME
// ============================================================================

crate::rule! {
    /// Validates that a timestamp is not the zero time.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub NotZeroTime { value: DateTime<Utc> };
    check(self) { self.value != DateTime::<Utc>::default() }
    message(self) { "must not be zero time" }
    fn not_zero_time(value: DateTime<Utc>);
}

// ============================================================================
// CUTOFFS
// ============================================================================

crate::rule! {
    /// Validates that `value` is strictly before `cutoff`.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Before { value: DateTime<Utc>, cutoff: DateTime<Utc> };
    check(self) { self.value < self.cutoff }
    message(self) { "must be before cutoff" }
    fn before(value: DateTime<Utc>, cutoff: DateTime<Utc>);
}

crate::rule! {
    /// Validates that `value` is strictly after `cutoff`.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub After { value: DateTime<Utc>, cutoff: DateTime<Utc> };
    check(self) { self.value > self.cutoff }
    message(self) { "must be after cutoff" }
    fn after(value: DateTime<Utc>, cutoff: DateTime<Utc>);
}

crate::rule! {
    /// Validates that `start <= value <= end`.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub TimeBetween { value: DateTime<Utc>, start: DateTime<Utc>, end: DateTime<Utc> };
    check(self) { self.value >= self.start && self.value <= self.end }
    message(self) { "must be between start and end" }
    fn time_between(value: DateTime<Utc>, start: DateTime<Utc>, end: DateTime<Utc>);
}

// ============================================================================
// RELATIVE TO NOW
// ============================================================================

crate::rule! {
    /// Validates that a timestamp lies before the moment of the check.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub InPast { value: DateTime<Utc> };
    check(self) { self.value < Utc::now() }
    message(self) { "must be in the past" }
    fn in_past(value: DateTime<Utc>);
}

crate::rule! {
    /// Validates that a timestamp lies after the moment of the check.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub InFuture { value: DateTime<Utc> };
    check(self) { self.value > Utc::now() }
    message(self) { "must be in the future" }
    fn in_future(value: DateTime<Utc>);
}

// ============================================================================
// DAY OF WEEK
// ============================================================================

fn falls_on_weekend(day: Weekday) -> bool {
    matches!(day, Weekday::Sat | Weekday::Sun)
}

crate::rule! {
    /// Validates that a date falls Monday through Friday.
    ///
    /// Works with any `Datelike` value, so local and naive dates are judged
    /// in their own calendar.
    #[derive(Copy, PartialEq, Eq)]
    pub IsWeekday<D: Datelike> { value: D };
    check(self) { !falls_on_weekend(self.value.weekday()) }
    message(self) { "must be a weekday" }
    fn is_weekday(value: D);
}

crate::rule! {
    /// Validates that a date falls on Saturday or Sunday.
    #[derive(Copy, PartialEq, Eq)]
    pub IsWeekend<D: Datelike> { value: D };
    check(self) { falls_on_weekend(self.value.weekday()) }
    message(self) { "must be a weekend day" }
    fn is_weekend(value: D);
}

// ============================================================================
// TESTS
// ============================================================================
