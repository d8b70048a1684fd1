//! The `Record` trait.

use std::fmt;

use quill_common::{DecodeError, TypeName};

use crate::native::NativeValue;

/// A typed value with a native representation.
///
/// `type_name` is the declared type and is what property type maps refer to.
/// `instance_type` is what a particular value reports at runtime; the two only
/// differ for records that wrap several concrete types behind one Rust type.
pub trait Record: Clone + fmt::Debug + 'static {
    /// The declared type of this record.
    fn type_name() -> TypeName;

    /// The runtime type of this value.
    fn instance_type(&self) -> TypeName {
        Self::type_name()
    }

    /// Decode a native value. Fails if the native kind does not fit.
    fn from_native(value: &NativeValue) -> Result<Self, DecodeError>;

    /// Encode this value into its native form.
    fn to_native(&self) -> NativeValue;

    /// Structural equality against a native value. No coercion: `1` is not `1.0`.
    fn equals_native(&self, value: &NativeValue) -> bool {
        self.to_native() == *value
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::native::native_kind;
    use serde_json::json;

    /// Minimal string record used across this crate's tests.
    #[derive(Clone, Debug, PartialEq)]
    pub(crate) struct Name(pub String);

    impl Record for Name {
        fn type_name() -> TypeName {
            TypeName::new("Name")
        }

        fn from_native(value: &NativeValue) -> Result<Self, DecodeError> {
            value
                .as_str()
                .map(|s| Name(s.to_string()))
                .ok_or_else(|| DecodeError::new(Self::type_name(), native_kind(value)))
        }

        fn to_native(&self) -> NativeValue {
            json!(self.0)
        }
    }

    #[test]
    fn instance_type_defaults_to_declared() {
        assert_eq!(Name("a".into()).instance_type(), Name::type_name());
    }

    #[test]
    fn equals_native_is_structural() {
        let name = Name("Jane".into());
        assert!(name.equals_native(&json!("Jane")));
        assert!(!name.equals_native(&json!("John")));
        assert!(!name.equals_native(&json!(["Jane"])));
    }

    #[test]
    fn from_native_rejects_wrong_kind() {
        let err = Name::from_native(&json!(3)).unwrap_err();
        assert_eq!(err.to_string(), "expected Name, found int");
    }
}
