//! Immutable string values.

use std::fmt;

use quill_record::builtin;
use quill_record::{DecodeError, NativeValue, Record, TypeName};

/// A value object wrapping a single string.
pub trait ImmutableString: Record + fmt::Display {
    fn from_string(value: impl Into<String>) -> Self;

    fn as_str(&self) -> &str;

    /// Equality with any other string value object, by content.
    fn equals_value<O: ImmutableString>(&self, other: &O) -> bool {
        self.as_str() == other.as_str()
    }
}

/// Decode a native string for the record type `ty`.
pub fn decode(value: &NativeValue, ty: TypeName) -> Result<String, DecodeError> {
    builtin::decode_string(value, ty)
}

/// Declare a string value object.
///
/// ```
/// use quill_types::scalar::ImmutableString;
///
/// quill_types::immutable_string! {
///     /// A user's login name.
///     pub struct Username;
/// }
///
/// let name = Username::from_string("Jane");
/// assert_eq!(name, "Jane");
/// assert_eq!(name.to_string(), "Jane");
/// ```
#[macro_export]
macro_rules! immutable_string {
    ($(#[$meta:meta])* $vis:vis struct $name:ident;) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis struct $name {
            value: ::std::string::String,
        }

        impl $crate::scalar::ImmutableString for $name {
            fn from_string(value: impl ::std::convert::Into<::std::string::String>) -> Self {
                $name { value: value.into() }
            }

            fn as_str(&self) -> &str {
                &self.value
            }
        }

        impl $crate::__private::Record for $name {
            fn type_name() -> $crate::__private::TypeName {
                $crate::__private::TypeName::new(stringify!($name))
            }

            fn from_native(
                value: &$crate::__private::NativeValue,
            ) -> ::std::result::Result<Self, $crate::__private::DecodeError> {
                $crate::scalar::string::decode(value, <Self as $crate::__private::Record>::type_name())
                    .map(|value| $name { value })
            }

            fn to_native(&self) -> $crate::__private::NativeValue {
                $crate::__private::NativeValue::String(self.value.clone())
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&self.value)
            }
        }

        impl ::std::convert::From<&str> for $name {
            fn from(value: &str) -> Self {
                $name { value: value.to_string() }
            }
        }

        impl ::std::cmp::PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.value == other
            }
        }

        impl ::std::cmp::PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.value == *other
            }
        }
    };
}
