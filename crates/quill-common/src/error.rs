//! Errors shared by the record engine and the value types built on it.
//!
//! Every error is fatal to the operation that raised it. Operations that fail
//! never leave a partially-updated value behind: the receiver is untouched and
//! no new value is produced.

use std::fmt;

use serde::Serialize;

use crate::type_name::TypeName;

/// A single native value could not be decoded into a record type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodeError {
    /// The record type the value was decoded into.
    pub expected: TypeName,
    /// The native kind that was found instead (`string`, `int`, `null`, ...).
    pub found: String,
}

impl DecodeError {
    pub fn new(expected: TypeName, found: impl Into<String>) -> Self {
        Self {
            expected,
            found: found.into(),
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected {}, found {}", self.expected, self.found)
    }
}

impl std::error::Error for DecodeError {}

/// Why a concrete list type's constructor declaration was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ConfigErrorReason {
    /// The type declares no constructor at all.
    NoConstructor,
    /// The constructor exists but is not publicly reachable.
    NotPublic,
    /// The constructor does not take exactly one parameter.
    WrongArity { found: usize },
    /// The single parameter carries no static type.
    Untyped { param: String },
}

impl fmt::Display for ConfigErrorReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoConstructor => write!(f, "no constructor declared"),
            Self::NotPublic => write!(f, "constructor is not public"),
            Self::WrongArity { found } => {
                write!(f, "constructor takes {found} parameters, expected 1")
            }
            Self::Untyped { param } => write!(f, "parameter `{param}` has no declared type"),
        }
    }
}

/// An error raised by a record operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum RecordError {
    /// A concrete type is declared in a way the record engine cannot use.
    Configuration {
        type_name: String,
        reason: ConfigErrorReason,
    },
    /// Element `index` of `field` does not conform to the declared type.
    TypeMismatch {
        field: String,
        index: usize,
        expected: TypeName,
        found: String,
    },
    /// The field has no declared type in the property type map.
    UnknownField { record: String, field: String },
    /// A sequence field was given a native value that is not an array.
    NotASequence { field: String, found: String },
}

impl RecordError {
    pub fn configuration(type_name: impl Into<String>, reason: ConfigErrorReason) -> Self {
        Self::Configuration {
            type_name: type_name.into(),
            reason,
        }
    }

    /// Lift a per-element decode failure into a field-level mismatch.
    pub fn from_decode(field: &str, index: usize, err: DecodeError) -> Self {
        Self::TypeMismatch {
            field: field.to_string(),
            index,
            expected: err.expected,
            found: err.found,
        }
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }

    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration { type_name, reason } => write!(
                f,
                "{type_name} misses a public constructor that defines the item type of the collection ({reason})"
            ),
            Self::TypeMismatch {
                field,
                index,
                expected,
                found,
            } => write!(
                f,
                "type mismatch in `{field}[{index}]`: expected {expected}, found {found}"
            ),
            Self::UnknownField { record, field } => {
                write!(f, "{record} has no declared type for field `{field}`")
            }
            Self::NotASequence { field, found } => {
                write!(f, "field `{field}` expects an array, found {found}")
            }
        }
    }
}

impl std::error::Error for RecordError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_error_names_the_type() {
        let err = RecordError::configuration("UsernameList", ConfigErrorReason::NoConstructor);
        assert!(err.is_configuration());
        insta::assert_snapshot!(
            err.to_string(),
            @"UsernameList misses a public constructor that defines the item type of the collection (no constructor declared)"
        );
    }

    #[test]
    fn config_reason_display_all_variants() {
        assert_eq!(
            ConfigErrorReason::NotPublic.to_string(),
            "constructor is not public"
        );
        assert_eq!(
            ConfigErrorReason::WrongArity { found: 0 }.to_string(),
            "constructor takes 0 parameters, expected 1"
        );
        assert_eq!(
            ConfigErrorReason::Untyped {
                param: "items".into()
            }
            .to_string(),
            "parameter `items` has no declared type"
        );
    }

    #[test]
    fn decode_error_lifts_to_type_mismatch() {
        let err = RecordError::from_decode(
            "items",
            2,
            DecodeError::new(TypeName::new("Username"), "int"),
        );
        assert!(err.is_type_mismatch());
        insta::assert_snapshot!(
            err.to_string(),
            @"type mismatch in `items[2]`: expected Username, found int"
        );
    }

    #[test]
    fn record_error_display_remaining_variants() {
        let unknown = RecordError::UnknownField {
            record: "UsernameList".into(),
            field: "names".into(),
        };
        assert_eq!(
            unknown.to_string(),
            "UsernameList has no declared type for field `names`"
        );

        let not_seq = RecordError::NotASequence {
            field: "items".into(),
            found: "string".into(),
        };
        assert_eq!(not_seq.to_string(), "field `items` expects an array, found string");
    }
}
