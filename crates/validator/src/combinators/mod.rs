//! Composition of rules
//!
//! Rules are combined into a [`Chain`] with AND/OR steps and evaluated left
//! to right with short-circuiting. Groups and parentheses are not supported;
//! a chain is flat.
//!
//! ```
//! use rulechain_validator::prelude::*;
//!
//! let email = "ops@example.com";
//! let result = Chain::new()
//!     .and(email_valid(email))
//!     .and(email_domain_blocklist(email, vec!["spam.io".into()]))
//!     .evaluate();
//! assert!(result.is_valid());
//! ```

pub mod chain;

pub use chain::{Chain, Operator};
