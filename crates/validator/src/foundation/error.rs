//! Boundary error type for handing failure messages to callers that expect
//! `std::error::Error` values.
//!
//! Evaluation itself never produces these; they exist for the edge of an
//! application, where a list of messages needs to become a single error.

use serde::Serialize;
use thiserror::Error;

/// Error produced from a list of validation failure messages.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// Structured payload of the form `{"errors":[...]}`.
    #[error("{payload}")]
    Json {
        /// The encoded JSON document.
        payload: String,
    },

    /// All messages, one per line.
    #[error("{}", .messages.join("\n"))]
    Joined {
        /// The messages in their original order.
        messages: Vec<String>,
    },

    /// The message list could not be encoded.
    #[error("failed to encode validation errors: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ValidationError {
    /// The individual messages, when the error still carries them.
    pub fn messages(&self) -> Option<&[String]> {
        match self {
            Self::Joined { messages } => Some(messages),
            Self::Json { .. } | Self::Encode(_) => None,
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse<'a> {
    errors: Vec<&'a str>,
}

/// Encodes `messages` as `{"errors":[...]}` and wraps the document in an
/// error. Returns `None` for an empty list.
///
/// # Examples
///
/// ```
/// use rulechain_validator::foundation::json_error;
///
/// assert!(json_error::<&str>(&[]).is_none());
///
/// let err = json_error(&["must not be empty", "invalid email"]).unwrap();
/// assert_eq!(
///     err.to_string(),
///     r#"{"errors":["must not be empty","invalid email"]}"#
/// );
/// ```
pub fn json_error<S: AsRef<str>>(messages: &[S]) -> Option<ValidationError> {
    if messages.is_empty() {
        return None;
    }

    let response = ErrorResponse {
        errors: messages.iter().map(AsRef::as_ref).collect(),
    };
    Some(match serde_json::to_string(&response) {
        Ok(payload) => ValidationError::Json { payload },
        Err(err) => ValidationError::Encode(err),
    })
}

/// Joins `messages` into one error whose `Display` prints one message per
/// line. Returns `None` for an empty list.
///
/// # Examples
///
/// ```
/// use rulechain_validator::foundation::joined_error;
///
/// let err = joined_error(&["e1", "e2"]).unwrap();
/// assert_eq!(err.to_string(), "e1\ne2");
/// ```
pub fn joined_error<S: AsRef<str>>(messages: &[S]) -> Option<ValidationError> {
    if messages.is_empty() {
        return None;
    }

    Some(ValidationError::Joined {
        messages: messages.iter().map(|m| m.as_ref().to_owned()).collect(),
    })
}
