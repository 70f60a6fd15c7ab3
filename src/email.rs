//! Email addresses (experimental)
//!
//! An [`EmailAddress`] is text shaped like `local@domain.tld`. The check is
//! loose: it only requires non-whitespace text around an `@` and a dot
//! somewhere after it.
//!
//! # Example
//!
//! ```rust
//! use narrow::EmailAddress;
//!
//! let address = EmailAddress::create("contact@kotools.org");
//! assert_eq!(address.local_part(), "contact");
//! assert_eq!(address.domain(), "kotools.org");
//! assert_eq!(address.to_string(), "contact@kotools.org");
//!
//! assert!(EmailAddress::create_or_none("not-an-email").is_none());
//! ```

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, ErrorMessage};
use crate::refined::NotBlankString;
use crate::serial::{Package, PrimitiveKind, SerialDescriptor, Serializable};

static PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(EmailAddress::PATTERN).expect("email address pattern should compile")
});

/// Text shaped like an email address, split into its local part and domain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EmailAddress {
    local_part: NotBlankString,
    domain: NotBlankString,
}

impl EmailAddress {
    /// Regular expression every email address matches.
    pub const PATTERN: &'static str = r"^\S+@\S+\.\S+$";

    /// Compiled form of [`EmailAddress::PATTERN`].
    pub fn regex() -> &'static Regex {
        &PATTERN
    }

    /// Parses `text`, failing if it is not shaped like an email address.
    ///
    /// The text is split at its first `@`.
    ///
    /// ```rust
    /// use narrow::EmailAddress;
    ///
    /// let address = EmailAddress::new("a@b.c").unwrap();
    /// assert_eq!(address.local_part(), "a");
    /// assert_eq!(address.domain(), "b.c");
    ///
    /// assert_eq!(
    ///     EmailAddress::new("a@b").unwrap_err().to_string(),
    ///     r"Email address should match the pattern ^\S+@\S+\.\S+$ (tried with a@b)"
    /// );
    /// ```
    pub fn new(text: &str) -> Result<Self, Error> {
        Self::parse(text).ok_or_else(|| {
            let message = ErrorMessage::invalid_email_address(text);
            #[cfg(feature = "tracing")]
            tracing::debug!(%message, "rejected email address");
            Error::InvalidArgument(message)
        })
    }

    /// Parses `text`, panicking if it is not shaped like an email address.
    ///
    /// # Panics
    ///
    /// Panics with the email address message on invalid input.
    #[track_caller]
    pub fn create(text: &str) -> Self {
        match Self::new(text) {
            Ok(address) => address,
            Err(error) => panic!("{error}"),
        }
    }

    /// Parses `text`, or returns `None` if it is not shaped like an email address.
    pub fn create_or_none(text: &str) -> Option<Self> {
        Self::new(text).ok()
    }

    fn parse(text: &str) -> Option<Self> {
        if !PATTERN.is_match(text) {
            return None;
        }
        let (local_part, domain) = text.split_once('@')?;
        Some(Self {
            local_part: NotBlankString::create_or_none(local_part.to_string())?,
            domain: NotBlankString::create_or_none(domain.to_string())?,
        })
    }

    /// Text before the first `@`.
    pub fn local_part(&self) -> &str {
        self.local_part.get()
    }

    /// Text after the first `@`.
    pub fn domain(&self) -> &str {
        self.domain.get()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.local_part, self.domain)
    }
}

impl FromStr for EmailAddress {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Error> {
        Self::new(text)
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = Error;

    fn try_from(text: String) -> Result<Self, Error> {
        Self::new(&text)
    }
}

impl Serializable for EmailAddress {
    type Encoded = String;

    fn descriptor() -> SerialDescriptor {
        SerialDescriptor::primitive(
            format!("{}.EmailAddress", Package::Experimental),
            PrimitiveKind::String,
        )
    }

    fn encode(&self) -> String {
        self.to_string()
    }

    fn decode(encoded: String) -> Result<Self, Error> {
        Self::new(&encoded).map_err(Error::into_serialization)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for EmailAddress {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for EmailAddress {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::decode(text).map_err(serde::de::Error::custom)
    }
}
