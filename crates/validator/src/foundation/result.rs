//! The uniform outcome every rule and every chain produces.

use serde::Serialize;

use crate::foundation::error::{ValidationError, joined_error};

/// Outcome of a validation step: a pass, or a failure with ordered messages.
///
/// A passing result never carries messages. The fields are private so that
/// the only ways to build one are [`ValidationResult::pass`] and
/// [`ValidationResult::fail`], which keeps that invariant.
///
/// # Examples
///
/// ```
/// use rulechain_validator::foundation::ValidationResult;
///
/// let ok = ValidationResult::pass();
/// assert!(ok.is_valid());
/// assert!(ok.messages().is_empty());
///
/// let bad = ValidationResult::fail(["too short: min 3"]);
/// assert!(!bad.is_valid());
/// assert_eq!(bad.messages(), ["too short: min 3"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    is_valid: bool,
    messages: Vec<String>,
}

impl ValidationResult {
    /// A passing result with no messages.
    #[must_use]
    pub const fn pass() -> Self {
        Self {
            is_valid: true,
            messages: Vec::new(),
        }
    }

    /// A failing result carrying `messages` in order.
    ///
    /// An empty iterator is allowed and yields a failure without explanation.
    #[must_use]
    pub fn fail<I>(messages: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            is_valid: false,
            messages: messages.into_iter().map(Into::into).collect(),
        }
    }

    /// A failing result with a single message.
    #[must_use]
    pub fn fail_with(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            messages: vec![message.into()],
        }
    }

    /// Whether the step passed.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Failure messages in the order they were produced. Empty on a pass.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Consumes the result and returns its messages.
    #[must_use]
    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }

    /// Converts the result into a `Result`, joining failure messages.
    ///
    /// A failure without messages still maps to `Err` with an empty
    /// [`ValidationError::Joined`].
    ///
    /// # Examples
    ///
    /// ```
    /// use rulechain_validator::foundation::ValidationResult;
    ///
    /// assert!(ValidationResult::pass().into_result().is_ok());
    ///
    /// let err = ValidationResult::fail(["a", "b"]).into_result().unwrap_err();
    /// assert_eq!(err.to_string(), "a\nb");
    /// ```
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_valid {
            return Ok(());
        }
        Err(joined_error(&self.messages).unwrap_or(ValidationError::Joined {
            messages: Vec::new(),
        }))
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::pass()
    }
}

impl From<ValidationResult> for Result<(), ValidationError> {
    fn from(result: ValidationResult) -> Self {
        result.into_result()
    }
}

/// Shorthand for [`ValidationResult::pass`].
#[must_use]
pub const fn pass() -> ValidationResult {
    ValidationResult::pass()
}

/// Shorthand for [`ValidationResult::fail`].
#[must_use]
pub fn fail<I>(messages: I) -> ValidationResult
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    ValidationResult::fail(messages)
}
