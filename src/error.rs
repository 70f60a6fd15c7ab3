//! Error messages and failures shared by every constrained type
//!
//! Construction failures always carry an [`ErrorMessage`]: a piece of text
//! that is guaranteed to be non-blank. The message is a deterministic function
//! of the rejected input and the violated rule, so tests can assert on the
//! exact string.
//!
//! # Example
//!
//! ```rust
//! use narrow::{Error, ErrorMessage, StrictlyNegativeInt};
//!
//! let error: Error = StrictlyNegativeInt::new(7).unwrap_err();
//! assert_eq!(error.message(), &ErrorMessage::should_be_less_than_zero(7));
//! assert_eq!(error.to_string(), "Number should be less than zero (tried with 7)");
//! ```

use std::fmt;

use thiserror::Error;

/// A failure raised while creating or decoding a constrained value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum Error {
    /// The raw input violates the invariant of the requested type.
    #[error("{0}")]
    InvalidArgument(ErrorMessage),

    /// The decoded primitive violates the invariant of the requested type.
    #[error("{0}")]
    Serialization(ErrorMessage),
}

impl Error {
    /// Returns the message describing this failure.
    pub fn message(&self) -> &ErrorMessage {
        match self {
            Error::InvalidArgument(message) | Error::Serialization(message) => message,
        }
    }

    /// Consumes this failure, returning its message.
    pub fn into_message(self) -> ErrorMessage {
        match self {
            Error::InvalidArgument(message) | Error::Serialization(message) => message,
        }
    }

    /// Re-tags this failure as a serialization failure, keeping its message.
    pub fn into_serialization(self) -> Self {
        Error::Serialization(self.into_message())
    }
}

/// Text describing why a value was rejected. Never blank.
///
/// # Example
///
/// ```rust
/// use narrow::ErrorMessage;
///
/// let message = ErrorMessage::new("Something went wrong").unwrap();
/// assert_eq!(message.as_str(), "Something went wrong");
/// assert!(ErrorMessage::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ErrorMessage(String);

impl ErrorMessage {
    /// Creates an error message from `text`, failing if it is blank.
    pub fn new(text: impl Into<String>) -> Result<Self, Error> {
        let text = text.into();
        if text.trim().is_empty() {
            Err(Error::InvalidArgument(Self::trusted(
                "Error message shouldn't be blank.",
            )))
        } else {
            Ok(Self(text))
        }
    }

    /// Creates an error message from the `Display` text of `error`.
    ///
    /// Fails when that text is blank.
    ///
    /// ```rust
    /// use narrow::{ErrorMessage, NegativeInt};
    ///
    /// let error = NegativeInt::new(3).unwrap_err();
    /// let message = ErrorMessage::from_error(&error).unwrap();
    /// assert_eq!(message, ErrorMessage::should_be_negative(3));
    /// ```
    pub fn from_error<E>(error: &E) -> Result<Self, Error>
    where
        E: std::error::Error + ?Sized,
    {
        Self::new(error.to_string())
            .map_err(|_| Error::InvalidArgument(Self::trusted("Error should have a message.")))
    }

    /// Returns this message as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes this message, returning its text.
    pub fn into_string(self) -> String {
        self.0
    }

    fn trusted(text: impl Into<String>) -> Self {
        let text = text.into();
        debug_assert!(!text.trim().is_empty(), "error message should not be blank");
        Self(text)
    }

    /// Message for a number that should equal zero.
    pub fn should_be_zero(number: impl fmt::Display) -> Self {
        Self::trusted(format!("Number should be zero (tried with {number})"))
    }

    /// Message for a number that should be other than zero.
    pub fn should_be_other_than_zero(number: impl fmt::Display) -> Self {
        Self::trusted(format!("Number should be other than zero (tried with {number})"))
    }

    /// Message for a number that should be greater than or equal to zero.
    pub fn should_be_positive(number: impl fmt::Display) -> Self {
        Self::trusted(format!(
            "Number should be greater than or equal to zero (tried with {number})"
        ))
    }

    /// Message for a number that should be greater than zero.
    pub fn should_be_greater_than_zero(number: impl fmt::Display) -> Self {
        Self::trusted(format!("Number should be greater than zero (tried with {number})"))
    }

    /// Message for a number that should be less than or equal to zero.
    pub fn should_be_negative(number: impl fmt::Display) -> Self {
        Self::trusted(format!(
            "Number should be less than or equal to zero (tried with {number})"
        ))
    }

    /// Message for a number that should be less than zero.
    pub fn should_be_less_than_zero(number: impl fmt::Display) -> Self {
        Self::trusted(format!("Number should be less than zero (tried with {number})"))
    }

    /// Message for text that should contain at least one non-whitespace character.
    pub fn should_not_be_blank(text: &str) -> Self {
        Self::trusted(format!("Text should not be blank (tried with {text:?})"))
    }

    /// Message for a collection that should contain at least one element.
    pub fn collection_should_not_be_empty() -> Self {
        Self::trusted("Given collection shouldn't be empty.")
    }

    /// Message for text that is not shaped like an email address.
    pub fn invalid_email_address(text: &str) -> Self {
        Self::trusted(format!(
            "Email address should match the pattern ^\\S+@\\S+\\.\\S+$ (tried with {text})"
        ))
    }

    pub(crate) fn range_start_after_end(notation: &str) -> Self {
        Self::trusted(format!(
            "Range's start should be less than or equal to its end (tried with {notation})"
        ))
    }

    pub(crate) fn range_exclusive_collapsed(notation: &str) -> Self {
        Self::trusted(format!(
            "Range with an exclusive bound should have a start less than its end (tried with {notation})"
        ))
    }

    pub(crate) fn range_incomparable(notation: &str) -> Self {
        Self::trusted(format!(
            "Range's bounds should be comparable (tried with {notation})"
        ))
    }
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ErrorMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<ErrorMessage> for String {
    fn from(message: ErrorMessage) -> Self {
        message.0
    }
}

/// Aborts on a value that a previous validation already guaranteed.
///
/// Reaching this means an invariant was broken elsewhere in the crate, so the
/// failure is never turned into a recoverable error.
#[cold]
#[track_caller]
pub(crate) fn invariant_breach<T>(error: &Error) -> ! {
    let type_name = std::any::type_name::<T>();
    #[cfg(feature = "tracing")]
    tracing::error!(%type_name, %error, "invariant breach while deriving a value");
    panic!("Unexpected creation failure of {type_name}: {error}")
}
