//! Serialization adapter contract
//!
//! Each constrained type describes how it travels over the wire: a serial
//! name made of a package prefix and the type's simple name, and the kind of
//! primitive it is encoded as. Encoding hands out the underlying primitive;
//! decoding re-runs construction and reports rejections as
//! [`Error::Serialization`] with the construction message unchanged.
//!
//! The contract does not depend on a serialization framework. With the
//! `serde` feature enabled, the `Serialize`/`Deserialize` impls are thin
//! shells over it.
//!
//! # Example
//!
//! ```rust
//! use narrow::serial::{PrimitiveKind, SerialKind, Serializable};
//! use narrow::{Error, NegativeInt};
//!
//! let descriptor = NegativeInt::descriptor();
//! assert_eq!(descriptor.serial_name(), "narrow.number.NegativeInt");
//! assert_eq!(descriptor.kind(), SerialKind::Primitive(PrimitiveKind::Int));
//!
//! let number = NegativeInt::decode(-4).unwrap();
//! assert_eq!(number.encode(), -4);
//!
//! let error = NegativeInt::decode(4).unwrap_err();
//! assert!(matches!(error, Error::Serialization(_)));
//! ```

use std::fmt;

use crate::error::Error;

/// Primitive representation of an encoded value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// 8-bit signed integer
    Byte,
    /// 16-bit signed integer
    Short,
    /// 32-bit signed integer
    Int,
    /// 64-bit signed integer
    Long,
    /// 32-bit floating-point number
    Float,
    /// 64-bit floating-point number
    Double,
    /// Text
    String,
}

/// Shape of an encoded value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SerialKind {
    /// A single primitive
    Primitive(PrimitiveKind),
    /// A sequence of elements
    List,
    /// A sequence of key/value entries
    Map,
}

/// Package prefix of a serial name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Package {
    /// Numbers
    Number,
    /// Text
    Text,
    /// Collections
    Collection,
    /// Experimental types
    Experimental,
}

impl Package {
    /// Returns the dotted prefix of this package.
    pub fn as_str(self) -> &'static str {
        match self {
            Package::Number => "narrow.number",
            Package::Text => "narrow.text",
            Package::Collection => "narrow.collection",
            Package::Experimental => "narrow.experimental",
        }
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name and shape of a serializable type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SerialDescriptor {
    serial_name: String,
    kind: SerialKind,
}

impl SerialDescriptor {
    /// Creates a descriptor.
    pub fn new(serial_name: impl Into<String>, kind: SerialKind) -> Self {
        Self {
            serial_name: serial_name.into(),
            kind,
        }
    }

    /// Creates a descriptor for a type encoded as a primitive.
    pub fn primitive(serial_name: impl Into<String>, kind: PrimitiveKind) -> Self {
        Self::new(serial_name, SerialKind::Primitive(kind))
    }

    /// Fully qualified name: `<package>.<SimpleName>`.
    pub fn serial_name(&self) -> &str {
        &self.serial_name
    }

    /// Shape of the encoded value.
    pub fn kind(&self) -> SerialKind {
        self.kind
    }
}

/// A Rust primitive that refined types can wrap and encode as.
pub trait Primitive {
    /// Encoded kind
    const KIND: PrimitiveKind;
    /// Suffix appended to a predicate's name to form a simple type name
    const SUFFIX: &'static str;
    /// Package of refined types wrapping this primitive
    const PACKAGE: Package;
}

macro_rules! impl_primitive {
    ($($ty:ty => $kind:ident, $suffix:literal, $package:ident;)+) => {
        $(
            impl Primitive for $ty {
                const KIND: PrimitiveKind = PrimitiveKind::$kind;
                const SUFFIX: &'static str = $suffix;
                const PACKAGE: Package = Package::$package;
            }
        )+
    };
}

impl_primitive! {
    i8 => Byte, "Byte", Number;
    i16 => Short, "Short", Number;
    i32 => Int, "Int", Number;
    i64 => Long, "Long", Number;
    f32 => Float, "Float", Number;
    f64 => Double, "Double", Number;
    String => String, "String", Text;
}

/// The adapter contract a serialization engine relies on.
pub trait Serializable: Sized {
    /// Value handed to the underlying encoder
    type Encoded;

    /// Name and shape of this type on the wire.
    fn descriptor() -> SerialDescriptor;

    /// Returns the value to encode in place of `self`.
    fn encode(&self) -> Self::Encoded;

    /// Validates a decoded value, failing with [`Error::Serialization`].
    fn decode(encoded: Self::Encoded) -> Result<Self, Error>;
}
