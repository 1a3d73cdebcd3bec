//! Built-in rules
//!
//! Every rule captures its inputs at construction and implements
//! [`Rule`](crate::foundation::Rule), so it can be checked on its own or
//! attached to a [`Chain`](crate::combinators::Chain). Each rule type comes
//! with a snake_case factory function.
//!
//! # Categories
//!
//! - **String**: length, affixes, character classes, patterns, encodings,
//!   identifiers (slug, UUID v4, ULID)
//! - **Numeric**: bounds, sign, divisibility
//! - **Time**: cutoffs, relative-to-now, day of week, duration bounds
//! - **Collection**: size, membership, uniqueness
//! - **Contact**: email shape and domain policy, E.164 phone numbers
//! - **Network**: URL, hostname, IP address, CIDR
//! - **Checksum**: Luhn
//!
//! # Examples
//!
//! ```
//! use rulechain_validator::prelude::*;
//!
//! let username = "alice_01";
//! let result = Chain::new()
//!     .and(min_len(username, 3))
//!     .and(max_len(username, 20))
//!     .and(is_alnum(username))
//!     .evaluate();
//!
//! assert_eq!(result.messages(), ["must be alphanumeric"]);
//! ```

// String rules
pub mod content;
pub mod encoding;
pub mod identifier;
pub mod length;
pub mod pattern;

// Numeric rules
pub mod divisibility;
pub mod range;

// Time rules
pub mod duration;
#[cfg(feature = "temporal")]
pub mod time;

// Collection rules
pub mod elements;
pub mod size;

// Contact rules
pub mod email;
pub mod phone;

// Network rules
#[cfg(feature = "network")]
pub mod hostname;
#[cfg(feature = "network")]
pub mod ip_address;

// Checksum rules
pub mod luhn;

// ============================================================================
// RE-EXPORTS: String rules
// ============================================================================

#[cfg(feature = "network")]
pub use content::{IsUrl, is_url};
pub use content::{Matches, matches};
pub use encoding::{IsBase64, IsHex, is_base64, is_hex};
pub use identifier::{IsSlug, IsUlid, IsUuidV4, is_slug, is_ulid, is_uuid_v4};
pub use length::{LenBetween, MaxLen, MinLen, NonEmpty, len_between, max_len, min_len, non_empty};
pub use pattern::{
    Contains, HasPrefix, HasSuffix, IsAlnum, IsAlpha, IsNumeric, OneOf, Trimmed, contains,
    has_prefix, has_suffix, is_alnum, is_alpha, is_numeric, one_of, trimmed,
};

// ============================================================================
// RE-EXPORTS: Numeric rules
// ============================================================================

pub use divisibility::{FloatMultipleOf, MultipleOf, float_multiple_of, multiple_of};
pub use range::{
    GreaterThan, InRange, LessThan, Max, Min, NonNegative, NonZero, Positive, greater_than,
    in_range, less_than, max, min, non_negative, non_zero, positive,
};

// ============================================================================
// RE-EXPORTS: Time rules
// ============================================================================

pub use duration::{DurationMax, DurationMin, duration_max, duration_min, format_duration};
#[cfg(feature = "temporal")]
pub use time::{
    After, Before, InFuture, InPast, IsWeekday, IsWeekend, NotZeroTime, TimeBetween, after,
    before, in_future, in_past, is_weekday, is_weekend, not_zero_time, time_between,
};

// ============================================================================
// RE-EXPORTS: Collection rules
// ============================================================================

pub use elements::{ContainsElement, Unique, contains_element, unique};
pub use size::{
    NotEmptyLen, SizeBetween, SizeMax, SizeMin, not_empty_len, size_between, size_max, size_min,
};

// ============================================================================
// RE-EXPORTS: Contact rules
// ============================================================================

pub use email::{
    EmailDomainAllowlist, EmailDomainBlocklist, EmailValid, email_domain_allowlist,
    email_domain_blocklist, email_valid,
};
pub use phone::{PhoneE164, PhoneWithCountryCode, phone_e164, phone_with_country_code};

// ============================================================================
// RE-EXPORTS: Network and checksum rules
// ============================================================================

#[cfg(feature = "network")]
pub use hostname::{IsHostname, is_hostname};
#[cfg(feature = "network")]
pub use ip_address::{IsCidr, IsIp, IsIpv4, IsIpv6, is_cidr, is_ip, is_ipv4, is_ipv6};
pub use luhn::{LuhnValid, luhn_valid};
