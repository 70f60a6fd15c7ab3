use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Rem, Sub};

use crate::error::Error;
use crate::refined::{
    ExcludesZero, Predicate, Refined, StrictlyNegativeInt, StrictlyPositiveInt, ZeroInt,
};
use crate::serial::{Package, PrimitiveKind, SerialDescriptor, Serializable};

/// Any `i32`, tagged with the variant of the numeric lattice it belongs to.
///
/// Classification is total: every integer is exactly one of zero, strictly
/// positive or strictly negative, so building an `AnyInt` never fails.
///
/// ```rust
/// use narrow::{AnyInt, StrictlyNegativeInt};
///
/// let number = AnyInt::from(-3);
/// assert!(matches!(number, AnyInt::StrictlyNegative(_)));
/// assert_eq!(number.to_i32(), -3);
///
/// let same = AnyInt::from(StrictlyNegativeInt::create(-3));
/// assert_eq!(number, same);
/// assert!(AnyInt::from(0) < AnyInt::from(1));
/// ```
///
/// Arithmetic yields a plain `i32` and wraps on overflow. Division and
/// remainder only accept a divisor that excludes zero.
///
/// ```rust
/// use narrow::{AnyInt, NonZeroInt};
///
/// assert_eq!(AnyInt::from(3) + 4, 7);
/// assert_eq!(10 - AnyInt::from(4), 6);
/// assert_eq!(AnyInt::from(9) / NonZeroInt::create(2), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnyInt {
    /// Zero
    Zero(ZeroInt),
    /// Greater than zero
    StrictlyPositive(StrictlyPositiveInt),
    /// Less than zero
    StrictlyNegative(StrictlyNegativeInt),
}

impl AnyInt {
    /// Returns the wrapped integer.
    pub fn to_i32(self) -> i32 {
        match self {
            AnyInt::Zero(n) => n.to_primitive(),
            AnyInt::StrictlyPositive(n) => n.to_primitive(),
            AnyInt::StrictlyNegative(n) => n.to_primitive(),
        }
    }

    /// Returns `true` for the zero variant.
    pub fn is_zero(self) -> bool {
        matches!(self, AnyInt::Zero(_))
    }
}

impl From<i32> for AnyInt {
    fn from(value: i32) -> Self {
        match value.cmp(&0) {
            Ordering::Equal => AnyInt::Zero(Refined::derived(value)),
            Ordering::Greater => AnyInt::StrictlyPositive(Refined::derived(value)),
            Ordering::Less => AnyInt::StrictlyNegative(Refined::derived(value)),
        }
    }
}

impl<P: Predicate<i32>> From<Refined<i32, P>> for AnyInt {
    fn from(number: Refined<i32, P>) -> Self {
        Self::from(number.into_inner())
    }
}

impl From<AnyInt> for i32 {
    fn from(number: AnyInt) -> Self {
        number.to_i32()
    }
}

impl PartialOrd for AnyInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AnyInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_i32().cmp(&other.to_i32())
    }
}

impl fmt::Display for AnyInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_i32().fmt(f)
    }
}

impl Serializable for AnyInt {
    type Encoded = i32;

    fn descriptor() -> SerialDescriptor {
        SerialDescriptor::primitive(format!("{}.AnyInt", Package::Number), PrimitiveKind::Int)
    }

    fn encode(&self) -> i32 {
        self.to_i32()
    }

    fn decode(encoded: i32) -> Result<Self, Error> {
        Ok(Self::from(encoded))
    }
}

macro_rules! impl_any_int_op {
    ($trait:ident, $method:ident, $wrapping:ident) => {
        impl $trait for AnyInt {
            type Output = i32;

            fn $method(self, other: AnyInt) -> i32 {
                self.to_i32().$wrapping(other.to_i32())
            }
        }

        impl $trait<i32> for AnyInt {
            type Output = i32;

            fn $method(self, other: i32) -> i32 {
                self.to_i32().$wrapping(other)
            }
        }

        impl $trait<AnyInt> for i32 {
            type Output = i32;

            fn $method(self, other: AnyInt) -> i32 {
                self.$wrapping(other.to_i32())
            }
        }
    };
}

macro_rules! impl_any_int_division {
    ($trait:ident, $method:ident, $wrapping:ident) => {
        impl<Q> $trait<Refined<i32, Q>> for AnyInt
        where
            Q: Predicate<i32> + ExcludesZero,
        {
            type Output = i32;

            fn $method(self, other: Refined<i32, Q>) -> i32 {
                self.to_i32().$wrapping(other.to_primitive())
            }
        }
    };
}

impl_any_int_op!(Add, add, wrapping_add);
impl_any_int_op!(Sub, sub, wrapping_sub);
impl_any_int_op!(Mul, mul, wrapping_mul);
impl_any_int_division!(Div, div, wrapping_div);
impl_any_int_division!(Rem, rem, wrapping_rem);

#[cfg(feature = "serde")]
impl serde::Serialize for AnyInt {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.to_i32())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for AnyInt {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = <i32 as serde::Deserialize>::deserialize(deserializer)?;
        Self::decode(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::refined::{NegativeInt, NonZeroInt, PositiveInt};
    use crate::serial::SerialKind;

    #[test]
    fn classifies_by_sign() {
        assert!(AnyInt::from(0).is_zero());
        assert!(matches!(AnyInt::from(i32::MAX), AnyInt::StrictlyPositive(_)));
        assert!(matches!(AnyInt::from(i32::MIN), AnyInt::StrictlyNegative(_)));
    }

    #[test]
    fn from_any_refined_variant() {
        assert!(AnyInt::from(PositiveInt::create(0)).is_zero());
        assert_eq!(AnyInt::from(NegativeInt::create(-8)).to_i32(), -8);
        assert_eq!(i32::from(AnyInt::from(StrictlyPositiveInt::create(4))), 4);
    }

    #[test]
    fn orders_by_value_across_variants() {
        let mut numbers: Vec<AnyInt> = [3, -1, 0, -7, 12].into_iter().map(AnyInt::from).collect();
        numbers.sort();
        let sorted: Vec<i32> = numbers.into_iter().map(AnyInt::to_i32).collect();
        assert_eq!(sorted, vec![-7, -1, 0, 3, 12]);
    }

    #[test]
    fn arithmetic_with_integers_and_other_any_ints() {
        let three = AnyInt::from(3);
        let minus_two = AnyInt::from(-2);
        assert_eq!(three + minus_two, 1);
        assert_eq!(three - minus_two, 5);
        assert_eq!(three * minus_two, -6);
        assert_eq!(three + 4, 7);
        assert_eq!(4 - three, 1);
        assert_eq!(minus_two * 5, -10);
        assert_eq!(5 * minus_two, -10);
    }

    #[test]
    fn division_by_divisors_excluding_zero() {
        let nine = AnyInt::from(9);
        assert_eq!(nine / NonZeroInt::create(2), 4);
        assert_eq!(nine % NonZeroInt::create(2), 1);
        assert_eq!(nine / StrictlyNegativeInt::create(-3), -3);
        assert_eq!(AnyInt::from(0) % StrictlyPositiveInt::create(5), 0);
    }

    #[test]
    fn overflow_wraps() {
        let max = AnyInt::from(i32::MAX);
        let min = AnyInt::from(i32::MIN);
        assert_eq!(max + 1, i32::MIN);
        assert_eq!(min - max, 1);
        assert_eq!(min * AnyInt::from(-1), i32::MIN);
        assert_eq!(min / NonZeroInt::create(-1), i32::MIN);
        assert_eq!(min % NonZeroInt::create(-1), 0);
    }

    #[test]
    fn displays_like_i32() {
        assert_eq!(AnyInt::from(-42).to_string(), "-42");
    }

    #[test]
    fn serial_contract() {
        let descriptor = AnyInt::descriptor();
        assert_eq!(descriptor.serial_name(), "narrow.number.AnyInt");
        assert_eq!(descriptor.kind(), SerialKind::Primitive(PrimitiveKind::Int));
        assert_eq!(AnyInt::decode(-5).unwrap(), AnyInt::from(-5));
        assert_eq!(AnyInt::from(9).encode(), 9);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_roundtrip() {
        let number = AnyInt::from(-17);
        let json = serde_json::to_string(&number).unwrap();
        assert_eq!(json, "-17");
        let restored: AnyInt = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, number);
    }
}
