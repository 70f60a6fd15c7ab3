//! Serde support for refined types (feature-gated)
//!
//! A refined value serializes exactly like its primitive. Deserialization
//! reads the primitive, then runs the same validation as
//! [`Refined::new`](super::Refined::new); a rejected value fails with the
//! construction message.
//!
//! # Example
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use narrow::{NotBlankString, StrictlyPositiveInt};
//!
//! #[derive(Serialize, Deserialize)]
//! struct User {
//!     name: NotBlankString,      // Validated on deserialize
//!     age: StrictlyPositiveInt,  // Validated on deserialize
//! }
//!
//! let user: User = serde_json::from_str(r#"{"name": "Alice", "age": 25}"#).unwrap();
//! assert_eq!(user.age.to_primitive(), 25);
//!
//! let result: Result<User, _> = serde_json::from_str(r#"{"name": " ", "age": 25}"#);
//! assert!(result.is_err());
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Predicate, Refined};
use crate::serial::{Primitive, Serializable};

impl<T, P> Serialize for Refined<T, P>
where
    T: Serialize,
    P: Predicate<T>,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.get().serialize(serializer)
    }
}

impl<'de, T, P> Deserialize<'de> for Refined<T, P>
where
    T: Deserialize<'de> + Primitive + Clone,
    P: Predicate<T>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = T::deserialize(deserializer)?;
        Self::decode(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use crate::error::ErrorMessage;
    use crate::refined::{NotBlankString, StrictlyNegativeInt, StrictlyPositiveInt};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct User {
        name: NotBlankString,
        age: StrictlyPositiveInt,
    }

    #[test]
    fn test_serialize() {
        let user = User {
            name: NotBlankString::create("Alice".to_string()),
            age: StrictlyPositiveInt::create(25),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert_eq!(json, r#"{"name":"Alice","age":25}"#);
    }

    #[test]
    fn test_serialize_like_primitive() {
        let number = StrictlyNegativeInt::random();
        assert_eq!(
            serde_json::to_string(&number).unwrap(),
            serde_json::to_string(&number.to_primitive()).unwrap()
        );
    }

    #[test]
    fn test_deserialize_blank_name_fails_with_message() {
        let result: Result<User, _> = serde_json::from_str(r#"{"name":"  ","age":25}"#);
        let err = result.unwrap_err().to_string();
        assert!(err.starts_with(ErrorMessage::should_not_be_blank("  ").as_str()));
    }

    #[test]
    fn test_deserialize_non_positive_age_fails_with_message() {
        let result: Result<User, _> = serde_json::from_str(r#"{"name":"Alice","age":0}"#);
        let err = result.unwrap_err().to_string();
        assert!(err.starts_with("Number should be greater than zero (tried with 0)"));
    }

    #[test]
    fn test_roundtrip() {
        let original = User {
            name: NotBlankString::create("Bob".to_string()),
            age: StrictlyPositiveInt::create(30),
        };
        let json = serde_json::to_string(&original).unwrap();
        let restored: User = serde_json::from_str(&json).unwrap();
        assert_eq!(original, restored);
    }
}
