//! Predefined predicates for common refinement patterns
//!
//! This module provides ready-to-use predicates for:
//! - **Numeric constraints**: [`Zero`], [`NonZero`], [`Positive`],
//!   [`StrictlyPositive`], [`Negative`], [`StrictlyNegative`]
//! - **String constraints**: [`NotBlank`]
//!
//! [`Zero`]: numeric::Zero
//! [`NonZero`]: numeric::NonZero
//! [`Positive`]: numeric::Positive
//! [`StrictlyPositive`]: numeric::StrictlyPositive
//! [`Negative`]: numeric::Negative
//! [`StrictlyNegative`]: numeric::StrictlyNegative
//! [`NotBlank`]: string::NotBlank

pub mod numeric;
pub mod string;
