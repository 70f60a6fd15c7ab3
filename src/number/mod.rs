//! Integers classified by sign
//!
//! The refined numeric variants live in [`crate::refined`]. This module adds
//! [`AnyInt`], a closed union over the three disjoint variants that together
//! cover every `i32`: zero, strictly positive and strictly negative.

mod any_int;

pub use any_int::AnyInt;
