//! Immutable float values.

use std::fmt;

use quill_record::builtin;
use quill_record::{DecodeError, NativeValue, Record, TypeName};

/// A value object wrapping a single 64-bit float.
pub trait ImmutableFloat: Record + fmt::Display {
    fn from_float(value: f64) -> Self;

    fn to_float(&self) -> f64;

    /// Build from a finite float. NaN and the infinities are rejected since
    /// they have no native form.
    fn try_from_float(value: f64) -> Result<Self, DecodeError> {
        if value.is_finite() {
            Ok(Self::from_float(value))
        } else {
            Err(DecodeError::new(Self::type_name(), "non-finite float"))
        }
    }

    /// Equality with any other float value object. Exact comparison.
    fn equals_value<O: ImmutableFloat>(&self, other: &O) -> bool {
        self.to_float() == other.to_float()
    }
}

/// Decode a native float for the record type `ty`. Native integers are
/// rejected; the value must already be stored as a float.
pub fn decode(value: &NativeValue, ty: TypeName) -> Result<f64, DecodeError> {
    builtin::decode_float(value, ty)
}

/// Encode a float.
///
/// Non-finite values have no native form and become `null`, which `decode`
/// rejects. A NaN or infinite value object therefore does not survive a
/// native round trip; build with [`ImmutableFloat::try_from_float`] to keep
/// such values out.
pub fn encode(value: f64) -> NativeValue {
    builtin::encode_float(value)
}

/// Declare a float value object.
#[macro_export]
macro_rules! immutable_float {
    ($(#[$meta:meta])* $vis:vis struct $name:ident;) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
        $vis struct $name {
            value: f64,
        }

        impl $crate::scalar::ImmutableFloat for $name {
            fn from_float(value: f64) -> Self {
                $name { value }
            }

            fn to_float(&self) -> f64 {
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
                $crate::scalar::float::decode(value, <Self as $crate::__private::Record>::type_name())
                    .map(|value| $name { value })
            }

            fn to_native(&self) -> $crate::__private::NativeValue {
                $crate::scalar::float::encode(self.value)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", self.value)
            }
        }

        impl ::std::convert::From<f64> for $name {
            fn from(value: f64) -> Self {
                $name { value }
            }
        }

        impl ::std::cmp::PartialEq<f64> for $name {
            fn eq(&self, other: &f64) -> bool {
                self.value == *other
            }
        }
    };
}
