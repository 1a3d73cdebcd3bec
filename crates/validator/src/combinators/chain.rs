//! Fluent AND/OR chain of rules
//!
//! A [`Chain`] holds an ordered list of `(rule, operator)` steps and reduces
//! them left to right into one [`ValidationResult`]. There is no operator
//! precedence: `a AND b OR c` means "(a AND b), then OR c".
//!
//! # Evaluation
//!
//! - The first step always runs; its operator is ignored.
//! - An AND step runs only while the chain is passing. Its failure messages
//!   are appended, so a run of failing ANDs reports only the first cause.
//! - An OR step runs only while the chain is failing. A passing OR clears
//!   every message gathered so far; a failing OR appends its messages.
//!
//! # Examples
//!
//! ```
//! use rulechain_validator::prelude::*;
//!
//! let result = Chain::new()
//!     .and(fail_rule("e1"))
//!     .and(fail_rule("e2"))
//!     .evaluate();
//! assert_eq!(result.messages(), ["e1"]);
//!
//! let result = Chain::new()
//!     .or(fail_rule("a"))
//!     .or(fail_rule("b"))
//!     .evaluate();
//! assert_eq!(result.messages(), ["a", "b"]);
//!
//! fn fail_rule(msg: &'static str) -> impl Fn() -> ValidationResult {
//!     move || ValidationResult::fail_with(msg)
//! }
//! ```

use std::fmt;

use crate::foundation::{Rule, ValidationResult};

/// How a step combines with the result accumulated before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Both the chain so far and this rule must pass.
    And,
    /// Either the chain so far or this rule must pass.
    Or,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::And => "AND",
            Self::Or => "OR",
        })
    }
}

struct Step<'a> {
    rule: Box<dyn Rule + Send + Sync + 'a>,
    op: Operator,
}

/// Ordered, append-only list of rules joined by AND/OR.
///
/// Building is single-owner: [`and`](Chain::and) / [`or`](Chain::or) take the
/// chain by value, [`attach`](Chain::attach) by `&mut`. A built chain is
/// `Send + Sync` and [`evaluate`](Chain::evaluate) only needs `&self`, so it
/// may be evaluated repeatedly and from several threads. Every evaluation
/// re-runs the rules; nothing is cached.
#[derive(Default)]
pub struct Chain<'a> {
    steps: Vec<Step<'a>>,
}

impl<'a> Chain<'a> {
    /// Creates an empty chain. Evaluating it passes.
    #[must_use]
    pub fn new() -> Self {
        Self {
            steps: Vec::with_capacity(4),
        }
    }

    /// Appends `rule` with AND semantics.
    #[must_use = "the chain is consumed and returned"]
    pub fn and<R>(mut self, rule: R) -> Self
    where
        R: Rule + Send + Sync + 'a,
    {
        self.attach(Operator::And, rule);
        self
    }

    /// Appends `rule` with OR semantics.
    #[must_use = "the chain is consumed and returned"]
    pub fn or<R>(mut self, rule: R) -> Self
    where
        R: Rule + Send + Sync + 'a,
    {
        self.attach(Operator::Or, rule);
        self
    }

    /// Appends `rule` with the given operator.
    ///
    /// # Examples
    ///
    /// ```
    /// use rulechain_validator::prelude::*;
    ///
    /// let tags = ["rust", "rust"];
    /// let mut chain = Chain::new();
    /// for tag in tags {
    ///     chain.attach(Operator::And, is_slug(tag));
    /// }
    /// chain.attach(Operator::And, unique(tags.to_vec()));
    /// assert_eq!(chain.evaluate().messages(), ["must be unique"]);
    /// ```
    pub fn attach<R>(&mut self, op: Operator, rule: R) -> &mut Self
    where
        R: Rule + Send + Sync + 'a,
    {
        self.steps.push(Step {
            rule: Box::new(rule),
            op,
        });
        self
    }

    /// Reduces the chain to a single result.
    pub fn evaluate(&self) -> ValidationResult {
        let Some((first, rest)) = self.steps.split_first() else {
            tracing::trace!("empty chain evaluated");
            return ValidationResult::pass();
        };

        let mut messages = Vec::with_capacity(self.steps.len());

        // The first step seeds the accumulator whatever its operator.
        let seed = first.rule.check();
        let mut valid = seed.is_valid();
        if !valid {
            messages.extend(seed.into_messages());
        }

        for (index, step) in rest.iter().enumerate() {
            let index = index + 1;
            match step.op {
                Operator::And => {
                    if !valid {
                        tracing::trace!(step = index, op = %step.op, "skipped: chain already failing");
                        continue;
                    }
                    let result = step.rule.check();
                    if !result.is_valid() {
                        valid = false;
                        messages.extend(result.into_messages());
                    }
                }
                Operator::Or => {
                    if valid {
                        tracing::trace!(step = index, op = %step.op, "skipped: chain already passing");
                        continue;
                    }
                    let result = step.rule.check();
                    if result.is_valid() {
                        valid = true;
                        messages.clear();
                    } else {
                        messages.extend(result.into_messages());
                    }
                }
            }
        }

        tracing::trace!(
            steps = self.steps.len(),
            valid,
            failures = messages.len(),
            "chain evaluated"
        );

        if valid {
            ValidationResult::pass()
        } else {
            ValidationResult::fail(messages)
        }
    }
}

impl fmt::Debug for Chain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("steps", &self.steps.len())
            .finish_non_exhaustive()
    }
}
