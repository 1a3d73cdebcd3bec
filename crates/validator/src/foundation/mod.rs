//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation system:
//!
//! - **Result**: [`ValidationResult`] with the [`pass`] / [`fail`] constructors
//! - **Traits**: [`Rule`], [`RuleExt`]
//! - **Errors**: [`ValidationError`], [`json_error`], [`joined_error`]
//!
//! # Architecture
//!
//! A rule is anything that can produce a [`ValidationResult`] without
//! arguments. Inputs are captured when the rule is built:
//!
//! ```
//! use rulechain_validator::foundation::{Rule, fail, pass};
//!
//! let age = 17;
//! let adult = move || if age >= 18 { pass() } else { fail(["must be an adult"]) };
//! assert_eq!(adult.check().messages(), ["must be an adult"]);
//! ```
//!
//! Rules compose into a [`Chain`](crate::combinators::Chain), which reduces
//! to one result:
//!
//! ```
//! use rulechain_validator::prelude::*;
//!
//! let result = Chain::new()
//!     .and(non_empty("alice"))
//!     .and(min_len("alice", 3))
//!     .evaluate();
//! assert!(result.is_valid());
//! ```

pub mod error;
pub mod result;
pub mod traits;

pub use error::{ValidationError, joined_error, json_error};
pub use result::{ValidationResult, fail, pass};
pub use traits::{Rule, RuleExt};
