//! Immutable integer values.

use std::fmt;

use quill_record::builtin;
use quill_record::{DecodeError, NativeValue, Record, TypeName};

/// A value object wrapping a single 64-bit integer.
pub trait ImmutableInteger: Record + fmt::Display {
    fn from_int(value: i64) -> Self;

    fn to_int(&self) -> i64;

    /// Equality with any other integer value object.
    fn equals_value<O: ImmutableInteger>(&self, other: &O) -> bool {
        self.to_int() == other.to_int()
    }
}

/// Decode a native integer for the record type `ty`. Floats are rejected even
/// when they carry an integral value.
pub fn decode(value: &NativeValue, ty: TypeName) -> Result<i64, DecodeError> {
    builtin::decode_int(value, ty)
}

/// Declare an integer value object.
#[macro_export]
macro_rules! immutable_integer {
    ($(#[$meta:meta])* $vis:vis struct $name:ident;) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis struct $name {
            value: i64,
        }

        impl $crate::scalar::ImmutableInteger for $name {
            fn from_int(value: i64) -> Self {
                $name { value }
            }

            fn to_int(&self) -> i64 {
                self.value
            }
        }

        impl $crate::__private::Record for $name {
            fn type_name() -> $crate::__private::TypeName {
                $crate::__private::TypeName::new(stringify!($name))
            }

            fn from_native(
                value: &$crate::__private::NativeValue,
            ) -> ::std::result::Result<Self, $crate::__private::DecodeError> {
                $crate::scalar::integer::decode(value, <Self as $crate::__private::Record>::type_name())
                    .map(|value| $name { value })
            }

            fn to_native(&self) -> $crate::__private::NativeValue {
                $crate::__private::NativeValue::from(self.value)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", self.value)
            }
        }

        impl ::std::convert::From<i64> for $name {
            fn from(value: i64) -> Self {
                $name { value }
            }
        }

        impl ::std::cmp::PartialEq<i64> for $name {
            fn eq(&self, other: &i64) -> bool {
                self.value == *other
            }
        }
    };
}
