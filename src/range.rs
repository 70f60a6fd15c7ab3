//! Inclusive/exclusive bounds and the non-empty ranges built from them
//!
//! Every numeric variant publishes the range of values it accepts through
//! [`Domain::range`](crate::refined::Domain::range). Ranges can also be built
//! directly; construction rejects any pair of bounds that would describe an
//! empty set of values.
//!
//! # Example
//!
//! ```rust
//! use narrow::range::{Bound, NotEmptyRange};
//!
//! let range = NotEmptyRange::new(Bound::Inclusive(1), Bound::Exclusive(5)).unwrap();
//! assert!(range.contains(&1));
//! assert!(!range.contains(&5));
//! assert_eq!(range.to_string(), "[1;5[");
//!
//! assert!(NotEmptyRange::new(Bound::Exclusive(3), Bound::Inclusive(3)).is_err());
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::error::{Error, ErrorMessage};

/// One endpoint of a range.
///
/// The tag only matters when a range is built; comparing two bounds with
/// [`Bound::compare_to`] looks at their values alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bound<T> {
    /// The value belongs to the range.
    Inclusive(T),
    /// The value is excluded from the range.
    Exclusive(T),
}

impl<T> Bound<T> {
    /// Returns the value of this bound.
    pub fn value(&self) -> &T {
        match self {
            Bound::Inclusive(value) | Bound::Exclusive(value) => value,
        }
    }

    /// Consumes this bound, returning its value.
    pub fn into_value(self) -> T {
        match self {
            Bound::Inclusive(value) | Bound::Exclusive(value) => value,
        }
    }

    /// Returns `true` if this bound includes its value.
    pub fn is_inclusive(&self) -> bool {
        matches!(self, Bound::Inclusive(_))
    }

    /// Returns `true` if this bound excludes its value.
    pub fn is_exclusive(&self) -> bool {
        matches!(self, Bound::Exclusive(_))
    }

    /// Maps the value of this bound, keeping its tag.
    pub fn map<U, F>(self, f: F) -> Bound<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Bound::Inclusive(value) => Bound::Inclusive(f(value)),
            Bound::Exclusive(value) => Bound::Exclusive(f(value)),
        }
    }
}

impl<T: PartialOrd> Bound<T> {
    /// Compares the values of two bounds, ignoring whether they are inclusive.
    ///
    /// ```rust
    /// use std::cmp::Ordering;
    /// use narrow::range::Bound;
    ///
    /// let order = Bound::Inclusive(1).compare_to(&Bound::Exclusive(1));
    /// assert_eq!(order, Some(Ordering::Equal));
    /// ```
    pub fn compare_to(&self, other: &Bound<T>) -> Option<Ordering> {
        self.value().partial_cmp(other.value())
    }
}

/// A range of comparable values containing at least one value.
///
/// # Invariants
///
/// - `start <= end`
/// - `start < end` when either bound is exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotEmptyRange<T> {
    start: Bound<T>,
    end: Bound<T>,
}

impl<T: PartialOrd + fmt::Display> NotEmptyRange<T> {
    /// Creates a range from its bounds, failing if it would be empty.
    pub fn new(start: Bound<T>, end: Bound<T>) -> Result<Self, Error> {
        let range = Self { start, end };
        match range.start.compare_to(&range.end) {
            Some(Ordering::Less) => Ok(range),
            Some(Ordering::Equal) if range.start.is_inclusive() && range.end.is_inclusive() => {
                Ok(range)
            }
            Some(Ordering::Equal) => Err(Error::InvalidArgument(
                ErrorMessage::range_exclusive_collapsed(&range.to_string()),
            )),
            Some(Ordering::Greater) => Err(Error::InvalidArgument(
                ErrorMessage::range_start_after_end(&range.to_string()),
            )),
            None => Err(Error::InvalidArgument(ErrorMessage::range_incomparable(
                &range.to_string(),
            ))),
        }
    }

    /// Creates a range from its bounds.
    ///
    /// # Panics
    ///
    /// Panics with the failure message if the range would be empty.
    #[track_caller]
    pub fn create(start: Bound<T>, end: Bound<T>) -> Self {
        match Self::new(start, end) {
            Ok(range) => range,
            Err(error) => panic!("{error}"),
        }
    }

    /// Creates a range from its bounds, or returns `None` if it would be empty.
    pub fn create_or_none(start: Bound<T>, end: Bound<T>) -> Option<Self> {
        Self::new(start, end).ok()
    }

    /// Returns `true` if `value` lies within this range.
    pub fn contains(&self, value: &T) -> bool {
        let above_start = match &self.start {
            Bound::Inclusive(start) => value >= start,
            Bound::Exclusive(start) => value > start,
        };
        let below_end = match &self.end {
            Bound::Inclusive(end) => value <= end,
            Bound::Exclusive(end) => value < end,
        };
        above_start && below_end
    }
}

impl<T> NotEmptyRange<T> {
    /// Returns the lower bound.
    pub fn start(&self) -> &Bound<T> {
        &self.start
    }

    /// Returns the upper bound.
    pub fn end(&self) -> &Bound<T> {
        &self.end
    }
}

impl<T: fmt::Display> fmt::Display for NotEmptyRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open = if self.start.is_inclusive() { '[' } else { ']' };
        let close = if self.end.is_inclusive() { ']' } else { '[' };
        write!(f, "{open}{};{}{close}", self.start.value(), self.end.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_compare_by_value_only() {
        assert_eq!(
            Bound::Inclusive(1).compare_to(&Bound::Exclusive(2)),
            Some(Ordering::Less)
        );
        assert_eq!(
            Bound::Exclusive(2).compare_to(&Bound::Inclusive(2)),
            Some(Ordering::Equal)
        );
        assert_eq!(Bound::Inclusive(f64::NAN).compare_to(&Bound::Inclusive(0.0)), None);
    }

    #[test]
    fn bound_accessors() {
        let bound = Bound::Exclusive(3);
        assert_eq!(bound.value(), &3);
        assert!(bound.is_exclusive());
        assert!(!bound.is_inclusive());
        assert_eq!(bound.map(|v| v * 2), Bound::Exclusive(6));
        assert_eq!(Bound::Inclusive(4).into_value(), 4);
    }

    #[test]
    fn range_with_start_before_end() {
        let range = NotEmptyRange::new(Bound::Exclusive(1), Bound::Exclusive(3)).unwrap();
        assert_eq!(range.start(), &Bound::Exclusive(1));
        assert_eq!(range.end(), &Bound::Exclusive(3));
        assert!(range.contains(&2));
        assert!(!range.contains(&1));
        assert!(!range.contains(&3));
    }

    #[test]
    fn single_point_range_is_legal_when_both_inclusive() {
        let range = NotEmptyRange::new(Bound::Inclusive(0), Bound::Inclusive(0)).unwrap();
        assert!(range.contains(&0));
        assert_eq!(range.to_string(), "[0;0]");
    }

    #[test]
    fn range_rejects_start_after_end() {
        let error = NotEmptyRange::new(Bound::Inclusive(3), Bound::Inclusive(1)).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Range's start should be less than or equal to its end (tried with [3;1])"
        );
    }

    #[test]
    fn range_rejects_collapsed_exclusive_bounds() {
        let cases = [
            (Bound::Exclusive(2), Bound::Inclusive(2), "]2;2]"),
            (Bound::Inclusive(2), Bound::Exclusive(2), "[2;2["),
            (Bound::Exclusive(2), Bound::Exclusive(2), "]2;2["),
        ];
        for (start, end, notation) in cases {
            let error = NotEmptyRange::new(start, end).unwrap_err();
            assert_eq!(
                error.to_string(),
                format!(
                    "Range with an exclusive bound should have a start less than its end (tried with {notation})"
                )
            );
            assert!(NotEmptyRange::create_or_none(start, end).is_none());
        }
    }

    #[test]
    fn range_rejects_incomparable_bounds() {
        let error =
            NotEmptyRange::new(Bound::Inclusive(f64::NAN), Bound::Inclusive(1.0)).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Range's bounds should be comparable (tried with [NaN;1])"
        );
    }

    #[test]
    #[should_panic(expected = "Range's start should be less than or equal to its end")]
    fn create_panics_on_empty_range() {
        NotEmptyRange::create(Bound::Inclusive(9), Bound::Exclusive(1));
    }

    #[test]
    fn display_uses_bracket_notation() {
        let range = NotEmptyRange::create(Bound::Exclusive(-1), Bound::Inclusive(1));
        assert_eq!(range.to_string(), "]-1;1]");
    }
}
