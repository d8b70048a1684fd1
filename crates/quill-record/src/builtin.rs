//! Builtin native types as records.
//!
//! `String`, `i64`, `f64` and `bool` are records in their own right, named
//! `string`, `int`, `float` and `bool`. Decoding is strict: the native kind
//! must match exactly, so `1` is not a float and `1.0` is not an int.
//!
//! The `decode_*` helpers take the expected type explicitly so value objects
//! wrapping a builtin can report their own name on failure.

use quill_common::{DecodeError, TypeName};

use crate::native::{native_kind, NativeValue};
use crate::record::Record;

pub fn decode_string(value: &NativeValue, ty: TypeName) -> Result<String, DecodeError> {
    match value {
        NativeValue::String(s) => Ok(s.clone()),
        other => Err(DecodeError::new(ty, native_kind(other))),
    }
}

/// Native floats are rejected even when they hold a whole number.
pub fn decode_int(value: &NativeValue, ty: TypeName) -> Result<i64, DecodeError> {
    value
        .as_i64()
        .ok_or_else(|| DecodeError::new(ty, native_kind(value)))
}

/// Native integers are rejected; the value must already be stored as a float.
pub fn decode_float(value: &NativeValue, ty: TypeName) -> Result<f64, DecodeError> {
    match value {
        NativeValue::Number(n) if n.is_f64() => n
            .as_f64()
            .ok_or_else(|| DecodeError::new(ty, native_kind(value))),
        other => Err(DecodeError::new(ty, native_kind(other))),
    }
}

pub fn decode_bool(value: &NativeValue, ty: TypeName) -> Result<bool, DecodeError> {
    value
        .as_bool()
        .ok_or_else(|| DecodeError::new(ty, native_kind(value)))
}

/// Encode a float.
///
/// NaN and the infinities have no native form and encode to `null`, which no
/// float decoder accepts back. Values that must survive a native round trip
/// have to be finite.
pub fn encode_float(value: f64) -> NativeValue {
    serde_json::Number::from_f64(value)
        .map(NativeValue::Number)
        .unwrap_or(NativeValue::Null)
}

impl Record for String {
    fn type_name() -> TypeName {
        TypeName::string()
    }

    fn from_native(value: &NativeValue) -> Result<Self, DecodeError> {
        decode_string(value, Self::type_name())
    }

    fn to_native(&self) -> NativeValue {
        NativeValue::String(self.clone())
    }
}

impl Record for i64 {
    fn type_name() -> TypeName {
        TypeName::int()
    }

    fn from_native(value: &NativeValue) -> Result<Self, DecodeError> {
        decode_int(value, Self::type_name())
    }

    fn to_native(&self) -> NativeValue {
        NativeValue::from(*self)
    }
}

impl Record for f64 {
    fn type_name() -> TypeName {
        TypeName::float()
    }

    fn from_native(value: &NativeValue) -> Result<Self, DecodeError> {
        decode_float(value, Self::type_name())
    }

    fn to_native(&self) -> NativeValue {
        encode_float(*self)
    }
}

impl Record for bool {
    fn type_name() -> TypeName {
        TypeName::bool()
    }

    fn from_native(value: &NativeValue) -> Result<Self, DecodeError> {
        decode_bool(value, Self::type_name())
    }

    fn to_native(&self) -> NativeValue {
        NativeValue::Bool(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builtins_report_native_type_names() {
        assert_eq!(String::type_name(), "string");
        assert_eq!(i64::type_name(), "int");
        assert_eq!(f64::type_name(), "float");
        assert_eq!(bool::type_name(), "bool");
    }

    #[test]
    fn builtins_decode_their_own_kind() {
        assert_eq!(String::from_native(&json!("John")).unwrap(), "John");
        assert_eq!(i64::from_native(&json!(-3)).unwrap(), -3);
        assert_eq!(f64::from_native(&json!(0.5)).unwrap(), 0.5);
        assert!(bool::from_native(&json!(true)).unwrap());
    }

    #[test]
    fn builtins_reject_other_kinds() {
        let err = String::from_native(&json!(1)).unwrap_err();
        assert_eq!(err.to_string(), "expected string, found int");

        let err = i64::from_native(&json!(1.0)).unwrap_err();
        assert_eq!(err.to_string(), "expected int, found float");

        let err = f64::from_native(&json!(1)).unwrap_err();
        assert_eq!(err.to_string(), "expected float, found int");

        let err = bool::from_native(&json!("true")).unwrap_err();
        assert_eq!(err.to_string(), "expected bool, found string");
    }

    #[test]
    fn non_finite_floats_encode_to_null() {
        assert_eq!(f64::NAN.to_native(), NativeValue::Null);
        assert_eq!(f64::INFINITY.to_native(), NativeValue::Null);
        assert_eq!(1.5_f64.to_native(), json!(1.5));
        assert!(f64::from_native(&NativeValue::Null).is_err());
    }
}
