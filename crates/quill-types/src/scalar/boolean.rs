//! Immutable boolean values.

use std::fmt;

use quill_record::builtin;
use quill_record::{DecodeError, NativeValue, Record, TypeName};

/// A value object wrapping a single boolean.
pub trait ImmutableBoolean: Record + fmt::Display {
    fn from_bool(value: bool) -> Self;

    fn to_bool(&self) -> bool;

    /// Equality with any other boolean value object.
    fn equals_value<O: ImmutableBoolean>(&self, other: &O) -> bool {
        self.to_bool() == other.to_bool()
    }
}

/// Decode a native boolean for the record type `ty`.
pub fn decode(value: &NativeValue, ty: TypeName) -> Result<bool, DecodeError> {
    builtin::decode_bool(value, ty)
}

/// Upper-case rendering used by boolean value objects.
pub fn display(value: bool) -> &'static str {
    if value {
        "TRUE"
    } else {
        "FALSE"
    }
}

/// Declare a boolean value object.
#[macro_export]
macro_rules! immutable_boolean {
    ($(#[$meta:meta])* $vis:vis struct $name:ident;) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        $vis struct $name {
            value: bool,
        }

        impl $crate::scalar::ImmutableBoolean for $name {
            fn from_bool(value: bool) -> Self {
                $name { value }
            }

            fn to_bool(&self) -> bool {
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
                $crate::scalar::boolean::decode(value, <Self as $crate::__private::Record>::type_name())
                    .map(|value| $name { value })
            }

            fn to_native(&self) -> $crate::__private::NativeValue {
                $crate::__private::NativeValue::Bool(self.value)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::scalar::boolean::display(self.value))
            }
        }

        impl ::std::convert::From<bool> for $name {
            fn from(value: bool) -> Self {
                $name { value }
            }
        }

        impl ::std::cmp::PartialEq<bool> for $name {
            fn eq(&self, other: &bool) -> bool {
                self.value == *other
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    crate::immutable_boolean! {
        struct Access;
    }

    crate::immutable_boolean! {
        struct Enabled;
    }

    #[test]
    fn created_from_boolean() {
        let access = Access::from_bool(true);
        assert!(access.to_bool());
        assert_eq!(access.to_string(), "TRUE");

        let access = Access::from_bool(false);
        assert_eq!(access.to_string(), "FALSE");
    }

    #[test]
    fn equals_other_booleans_with_same_value() {
        let access = Access::from_bool(true);
        let other = Access::from(true);

        assert_eq!(access, other);
        assert_eq!(access, true);
        assert_ne!(access, false);
        assert!(access.equals_value(&Enabled::from_bool(true)));
        assert!(!access.equals_native(&json!("test")));
    }

    #[test]
    fn decodes_only_native_booleans() {
        assert_eq!(Access::from_native(&json!(false)).unwrap(), false);
        let err = Access::from_native(&json!("true")).unwrap_err();
        assert_eq!(err.to_string(), "expected Access, found string");
        assert_eq!(Access::from_bool(true).to_native(), json!(true));
    }
}
