//! Prelude module for convenient imports.
//!
//! Provides a single `use rulechain_validator::prelude::*;` import that
//! brings in the core traits and types, the chain builder, and every
//! built-in rule.
//!
//! # Examples
//!
//! ```
//! use rulechain_validator::prelude::*;
//!
//! let code = "2024-summer";
//! let result = is_slug(code).and(max_len(code, 8)).evaluate();
//! assert_eq!(result.messages(), ["too long: max 8"]);
//! ```

// ============================================================================
// FOUNDATION: Core traits, results, errors
// ============================================================================

pub use crate::foundation::{
    Rule, RuleExt, ValidationError, ValidationResult, fail, joined_error, json_error, pass,
};

// ============================================================================
// COMBINATORS: Chain builder
// ============================================================================

pub use crate::combinators::{Chain, Operator};

// ============================================================================
// VALIDATORS: All built-in rules
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;
