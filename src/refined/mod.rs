//! Refined types: primitives whose domain is narrowed by a predicate
//!
//! This module implements the "parse, don't validate" pattern:
//! validate a raw value once, at construction, then let the type carry the
//! guarantee everywhere it goes.
//!
//! # Philosophy
//!
//! Instead of scattering checks through call sites:
//!
//! ```rust,ignore
//! fn withdraw(amount: i32) -> Result<Receipt, Error> {
//!     if amount <= 0 {
//!         return Err(Error::InvalidAmount);
//!     }
//!     // and again in every function `amount` is passed to...
//! }
//! ```
//!
//! encode the invariant in the type:
//!
//! ```rust,ignore
//! use narrow::StrictlyPositiveInt;
//!
//! fn withdraw(amount: StrictlyPositiveInt) -> Receipt {
//!     // amount is greater than zero by construction
//! }
//! ```
//!
//! # Construction protocol
//!
//! Every refined type offers the same three entry points, all backed by a
//! single validation:
//!
//! ```rust
//! use narrow::StrictlyNegativeInt;
//!
//! // Result with an explicit failure payload
//! assert!(StrictlyNegativeInt::new(-7).is_ok());
//! assert!(StrictlyNegativeInt::new(7).is_err());
//!
//! // Option for callers that only branch on validity
//! assert!(StrictlyNegativeInt::create_or_none(0).is_none());
//!
//! // Panicking variant for values that must be valid
//! let number = StrictlyNegativeInt::create(-7);
//! assert_eq!(number.to_string(), "-7");
//! ```
//!
//! # Custom Predicates
//!
//! ```rust
//! use narrow::refined::{Predicate, Refined};
//! use narrow::ErrorMessage;
//!
//! pub struct Even;
//!
//! impl Predicate<i32> for Even {
//!     fn check(value: &i32) -> Result<(), ErrorMessage> {
//!         if value % 2 == 0 {
//!             Ok(())
//!         } else {
//!             Err(ErrorMessage::new(format!("Number should be even (tried with {value})")).unwrap())
//!         }
//!     }
//! }
//!
//! type EvenI32 = Refined<i32, Even>;
//!
//! assert!(EvenI32::new(4).is_ok());
//! assert_eq!(
//!     EvenI32::new(3).unwrap_err().to_string(),
//!     "Number should be even (tried with 3)"
//! );
//! ```

mod aliases;
mod arithmetic;
mod lattice;
pub mod predicates;
#[cfg(feature = "serde")]
mod serde_impl;

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use rand::distr::uniform::SampleUniform;
use rand::Rng;

use crate::error::{invariant_breach, Error, ErrorMessage};
use crate::range::NotEmptyRange;
use crate::serial::{Primitive, SerialDescriptor, Serializable};

pub use aliases::*;
pub use predicates::numeric::{
    Domain, ExcludesZero, Negative, NonZero, Positive, StrictlyNegative, StrictlyPositive, Zero,
};
pub use predicates::string::NotBlank;

/// A predicate that constrains values of type T.
///
/// Predicates are stateless: they only define the check. The values live in
/// [`Refined<T, P>`].
///
/// # Example
///
/// ```rust
/// use narrow::refined::Predicate;
/// use narrow::ErrorMessage;
///
/// pub struct Even;
///
/// impl Predicate<i32> for Even {
///     fn check(value: &i32) -> Result<(), ErrorMessage> {
///         if value % 2 == 0 {
///             Ok(())
///         } else {
///             Err(ErrorMessage::new("value must be even").unwrap())
///         }
///     }
/// }
/// ```
pub trait Predicate<T>: Send + Sync + 'static {
    /// Check if the value satisfies the predicate
    fn check(value: &T) -> Result<(), ErrorMessage>;

    /// Human-readable description of what this predicate requires
    fn description() -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Simple name of this predicate, used to build serial names
    fn name() -> &'static str {
        let full = std::any::type_name::<Self>();
        full.rsplit("::").next().unwrap_or(full)
    }
}

/// A value of type T that is guaranteed to satisfy predicate P.
///
/// # Memory Layout
///
/// `Refined<T, P>` has the same memory layout as `T` (zero overhead).
/// The `PhantomData<P>` is zero-sized.
///
/// # Example
///
/// ```rust
/// use narrow::StrictlyPositiveInt;
///
/// fn halve(quantity: StrictlyPositiveInt) -> i32 {
///     // quantity is guaranteed greater than zero
///     quantity.to_primitive() / 2
/// }
///
/// let quantity = StrictlyPositiveInt::new(10).unwrap();
/// assert_eq!(halve(quantity), 5);
/// ```
pub struct Refined<T, P: Predicate<T>> {
    value: T,
    _predicate: PhantomData<P>,
}

impl<T, P: Predicate<T>> Refined<T, P> {
    /// Create a new refined value, checking the predicate.
    ///
    /// Returns `Err(Error::InvalidArgument)` carrying the predicate's message
    /// if the check fails.
    ///
    /// # Example
    ///
    /// ```rust
    /// use narrow::PositiveInt;
    ///
    /// assert!(PositiveInt::new(0).is_ok());
    /// assert_eq!(
    ///     PositiveInt::new(-5).unwrap_err().to_string(),
    ///     "Number should be greater than or equal to zero (tried with -5)"
    /// );
    /// ```
    pub fn new(value: T) -> Result<Self, Error> {
        match P::check(&value) {
            Ok(()) => Ok(Self::trusted(value)),
            Err(message) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(predicate = P::name(), %message, "rejected value");
                Err(Error::InvalidArgument(message))
            }
        }
    }

    /// Create a new refined value, panicking if the predicate fails.
    ///
    /// # Panics
    ///
    /// Panics with the predicate's message if `value` is rejected.
    ///
    /// ```should_panic
    /// use narrow::StrictlyNegativeInt;
    ///
    /// StrictlyNegativeInt::create(1); // panics
    /// ```
    #[track_caller]
    pub fn create(value: T) -> Self {
        match Self::new(value) {
            Ok(refined) => refined,
            Err(error) => panic!("{error}"),
        }
    }

    /// Create a new refined value, or return `None` if the predicate fails.
    ///
    /// ```rust
    /// use narrow::NonZeroInt;
    ///
    /// assert!(NonZeroInt::create_or_none(3).is_some());
    /// assert!(NonZeroInt::create_or_none(0).is_none());
    /// ```
    pub fn create_or_none(value: T) -> Option<Self> {
        Self::new(value).ok()
    }

    /// Get a reference to the inner value.
    ///
    /// This is zero-cost - no runtime check.
    #[inline]
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Consume the refined value, returning the inner value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Map the inner value, re-checking the predicate.
    ///
    /// ```rust
    /// use narrow::StrictlyPositiveInt;
    ///
    /// let n = StrictlyPositiveInt::create(21);
    /// assert_eq!(n.try_map(|x| x * 2).unwrap().to_primitive(), 42);
    /// assert!(StrictlyPositiveInt::create(5).try_map(|x| -x).is_err());
    /// ```
    pub fn try_map<F>(self, f: F) -> Result<Self, Error>
    where
        F: FnOnce(T) -> T,
    {
        Self::new(f(self.value))
    }

    /// Re-check the inner value against another predicate.
    ///
    /// ```rust
    /// use narrow::{PositiveInt, StrictlyPositive};
    ///
    /// let n = PositiveInt::create(3);
    /// assert!(n.refine::<StrictlyPositive>().is_ok());
    /// assert!(PositiveInt::create(0).refine::<StrictlyPositive>().is_err());
    /// ```
    pub fn refine<Q: Predicate<T>>(self) -> Result<Refined<T, Q>, Error> {
        Refined::new(self.value)
    }

    #[inline]
    fn trusted(value: T) -> Self {
        Self {
            value,
            _predicate: PhantomData,
        }
    }

    /// Builds a value that a previous validation already proved legal.
    #[track_caller]
    pub(crate) fn derived(value: T) -> Self {
        Self::new(value).unwrap_or_else(|error| invariant_breach::<Self>(&error))
    }
}

impl<T: Copy, P: Predicate<T>> Refined<T, P> {
    /// Returns a copy of the inner value.
    ///
    /// ```rust
    /// use narrow::NegativeInt;
    ///
    /// assert_eq!(NegativeInt::create(-3).to_primitive(), -3);
    /// ```
    #[inline]
    pub fn to_primitive(&self) -> T {
        self.value
    }
}

impl<T, P> Refined<T, P>
where
    T: Copy + PartialOrd + SampleUniform,
    P: Domain<T>,
{
    /// The smallest value this type can hold.
    ///
    /// ```rust
    /// use narrow::StrictlyNegativeInt;
    ///
    /// assert_eq!(StrictlyNegativeInt::min().to_primitive(), i32::MIN);
    /// assert_eq!(StrictlyNegativeInt::max().to_primitive(), -1);
    /// ```
    pub fn min() -> Self {
        Self::derived(P::MIN)
    }

    /// The largest value this type can hold.
    pub fn max() -> Self {
        Self::derived(P::MAX)
    }

    /// The canonical range of values this type can hold.
    pub fn range() -> &'static NotEmptyRange<T> {
        P::range()
    }

    /// A uniformly distributed value in `[min, max]`, using the thread-local generator.
    pub fn random() -> Self {
        Self::random_with(&mut rand::rng())
    }

    /// A uniformly distributed value in `[min, max]`, drawn from `rng`.
    ///
    /// Candidates inside the range that still fail the predicate (zero, for
    /// [`NonZero`]) are drawn again.
    pub fn random_with<R: Rng>(rng: &mut R) -> Self {
        loop {
            let candidate = rng.random_range(P::MIN..=P::MAX);
            if P::check(&candidate).is_ok() {
                return Self::trusted(candidate);
            }
        }
    }
}

impl<T, P> Serializable for Refined<T, P>
where
    T: Primitive + Clone,
    P: Predicate<T>,
{
    type Encoded = T;

    fn descriptor() -> SerialDescriptor {
        let serial_name = format!("{}.{}{}", T::PACKAGE, P::name(), T::SUFFIX);
        SerialDescriptor::primitive(serial_name, T::KIND)
    }

    fn encode(&self) -> T {
        self.value.clone()
    }

    fn decode(encoded: T) -> Result<Self, Error> {
        Self::new(encoded).map_err(Error::into_serialization)
    }
}

impl<T: fmt::Debug, P: Predicate<T>> fmt::Debug for Refined<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Refined")
            .field("value", &self.value)
            .field("predicate", &P::name())
            .finish()
    }
}

impl<T: Clone, P: Predicate<T>> Clone for Refined<T, P> {
    fn clone(&self) -> Self {
        Self::trusted(self.value.clone())
    }
}

impl<T: Copy, P: Predicate<T>> Copy for Refined<T, P> {}

impl<T: PartialEq, P: Predicate<T>> PartialEq for Refined<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq, P: Predicate<T>> Eq for Refined<T, P> {}

impl<T: PartialOrd, P: Predicate<T>> PartialOrd for Refined<T, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T: Ord, P: Predicate<T>> Ord for Refined<T, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T: Hash, P: Predicate<T>> Hash for Refined<T, P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T, P: Predicate<T>> AsRef<T> for Refined<T, P> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

impl<T, P: Predicate<T>> std::ops::Deref for Refined<T, P> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T: fmt::Display, P: Predicate<T>> fmt::Display for Refined<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}
