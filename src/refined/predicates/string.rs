//! String predicates for refined types
//!
//! # Example
//!
//! ```rust
//! use narrow::NotBlankString;
//!
//! let name = NotBlankString::new("Alice".to_string()).unwrap();
//! assert_eq!(name.as_str(), "Alice");
//! assert!(NotBlankString::new("   ".to_string()).is_err());
//! ```

use super::super::Predicate;
use crate::error::ErrorMessage;

/// String must contain at least one non-whitespace character
#[derive(Debug, Clone, Copy, Default)]
pub struct NotBlank;

impl Predicate<String> for NotBlank {
    fn check(value: &String) -> Result<(), ErrorMessage> {
        if value.trim().is_empty() {
            Err(ErrorMessage::should_not_be_blank(value))
        } else {
            Ok(())
        }
    }

    fn description() -> &'static str {
        "not blank string"
    }
}
