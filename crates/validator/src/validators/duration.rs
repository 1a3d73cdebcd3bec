//! Duration bound rules
//!
//! Bounds are rendered in compact unit notation: `3s`, `1m30s`, `1h0m0s`,
//! `1.5ms`, `250µs`, `10ns`. The zero duration renders as `0s`.

use std::time::Duration;

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Formats a duration the way failure messages quote it.
///
/// Durations under one second use the largest fitting sub-second unit with a
/// fractional part; longer durations are split into hours, minutes and
/// seconds, where leading zero components are omitted.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use rulechain_validator::validators::format_duration;
///
/// assert_eq!(format_duration(Duration::from_secs(90)), "1m30s");
/// assert_eq!(format_duration(Duration::from_micros(1500)), "1.5ms");
/// assert_eq!(format_duration(Duration::ZERO), "0s");
/// ```
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let nanos = duration.as_nanos();
    if nanos == 0 {
        return "0s".to_owned();
    }
    if nanos < NANOS_PER_MICRO {
        return format!("{nanos}ns");
    }
    if nanos < NANOS_PER_MILLI {
        return format!("{}µs", with_fraction(nanos, 3));
    }
    if nanos < NANOS_PER_SEC {
        return format!("{}ms", with_fraction(nanos, 6));
    }

    let total_secs = duration.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs / 60) % 60;
    let seconds = u128::from(total_secs % 60) * NANOS_PER_SEC + u128::from(duration.subsec_nanos());

    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{hours}h"));
    }
    if total_secs >= 60 {
        out.push_str(&format!("{minutes}m"));
    }
    out.push_str(&with_fraction(seconds, 9));
    out.push('s');
    out
}

/// Renders `value / 10^digits` with trailing fractional zeros dropped.
fn with_fraction(value: u128, digits: u32) -> String {
    let scale = 10_u128.pow(digits);
    let whole = value / scale;
    let fraction = value % scale;
    if fraction == 0 {
        return whole.to_string();
    }
    let padded = format!("{fraction:0width$}", width = digits as usize);
    format!("{whole}.{}", padded.trim_end_matches('0'))
}

// ============================================================================
// BOUNDS
// ============================================================================

crate::rule! {
    /// Validates that a duration is at least `min`.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub DurationMin { value: Duration, min: Duration };
    check(self) { self.value >= self.min }
    message(self) { format!("duration too small: min {}", format_duration(self.min)) }
    fn duration_min(value: Duration, min: Duration);
}

crate::rule! {
    /// Validates that a duration is at most `max`.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub DurationMax { value: Duration, max: Duration };
    check(self) { self.value <= self.max }
    message(self) { format!("duration too large: max {}", format_duration(self.max)) }
    fn duration_max(value: Duration, max: Duration);
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
    #[case::zero(Duration::ZERO, "0s")]
    #[case::nanos(Duration::from_nanos(10), "10ns")]
    #[case::micros(Duration::from_micros(250), "250µs")]
    #[case::fractional_micros(Duration::from_nanos(1_500), "1.5µs")]
    #[case::fractional_millis(Duration::from_micros(1_500), "1.5ms")]
    #[case::seconds(Duration::from_secs(3), "3s")]
    #[case::fractional_seconds(Duration::from_millis(2_500), "2.5s")]
    #[case::minutes(Duration::from_secs(90), "1m30s")]
    #[case::hour(Duration::from_secs(3600), "1h0m0s")]
    #[case::mixed(Duration::from_secs(3 * 3600 + 5), "3h0m5s")]
    #[case::sub_nanos_tail(Duration::new(1, 1), "1.000000001s")]
    fn formats_compactly(#[case] duration: Duration, #[case] expected: &str) {
        assert_eq!(format_duration(duration), expected);
    }

    #[test]
    fn test_duration_min() {
        assert!(duration_min(Duration::from_secs(5), Duration::from_secs(3)).check().is_valid());
        assert!(duration_min(Duration::from_secs(3), Duration::from_secs(3)).check().is_valid());
        assert_eq!(
            duration_min(Duration::from_secs(2), Duration::from_secs(3)).check().messages(),
            ["duration too small: min 3s"]
        );
    }

    #[test]
    fn test_duration_max() {
        assert!(duration_max(Duration::from_secs(60), Duration::from_secs(90)).check().is_valid());
        assert_eq!(
            duration_max(Duration::from_secs(120), Duration::from_secs(90)).check().messages(),
            ["duration too large: max 1m30s"]
        );
    }
}
