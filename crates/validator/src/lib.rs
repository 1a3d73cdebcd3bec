//! # rulechain-validator
//!
//! Fluent AND/OR composition of validation rules, with a catalog of
//! ready-made rules.
//!
//! ## Quick Start
//!
//! ```
//! use rulechain_validator::prelude::*;
//!
//! let name = "al";
//! let result = Chain::new()
//!     .and(non_empty(name))
//!     .and(min_len(name, 3))
//!     .evaluate();
//!
//! assert!(!result.is_valid());
//! assert_eq!(result.messages(), ["too short: min 3"]);
//! ```
//!
//! ## Evaluation
//!
//! A [`Chain`](combinators::Chain) is a flat list of steps, each an operator
//! and a rule, reduced strictly left to right:
//!
//! - an empty chain passes;
//! - the first step always runs and its operator is ignored;
//! - an AND step is skipped once the chain is failing, otherwise its
//!   messages are appended;
//! - an OR step is skipped once the chain is passing; if it passes it clears
//!   every message collected so far, if it fails its messages are appended.
//!
//! Rules re-run on every [`evaluate`](combinators::Chain::evaluate), so
//! clock-dependent rules may change their outcome between calls.
//!
//! ## Creating Rules
//!
//! Any `Fn() -> ValidationResult` closure is a rule. Use the [`rule!`] macro
//! for reusable rule types, or implement [`Rule`](foundation::Rule) by hand.
//!
//! ## Built-in Rules
//!
//! - **String**: [`MinLen`](validators::MinLen), [`MaxLen`](validators::MaxLen),
//!   [`NonEmpty`](validators::NonEmpty), [`Matches`](validators::Matches),
//!   [`IsUuidV4`](validators::IsUuidV4)
//! - **Numeric**: [`Min`](validators::Min), [`Max`](validators::Max),
//!   [`InRange`](validators::InRange), [`MultipleOf`](validators::MultipleOf)
//! - **Collection**: [`SizeMin`](validators::SizeMin), [`Unique`](validators::Unique)
//! - **Contact**: [`EmailValid`](validators::EmailValid), [`PhoneE164`](validators::PhoneE164)
//! - **Checksum**: [`LuhnValid`](validators::LuhnValid)
//!
//! ## Features
//!
//! - `temporal` (default): timestamp rules backed by `chrono`
//! - `network` (default): URL, hostname, IP and CIDR rules

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validators;
