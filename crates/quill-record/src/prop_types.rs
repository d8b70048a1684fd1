//! Property type maps.
//!
//! A `PropTypeMap` records which type each field of a record is declared to
//! hold. The engine uses it to assert that values conform before they are
//! stored, and to move sequence fields between native arrays and typed
//! values.

use rustc_hash::FxHashMap;

use quill_common::{RecordError, TypeName};

use crate::native::{native_kind, NativeMap, NativeValue};
use crate::record::Record;

/// The declared type of every field of one concrete record type.
#[derive(Clone, Debug, PartialEq)]
pub struct PropTypeMap {
    /// Name of the concrete type this map describes, for error messages.
    owner: String,
    types: FxHashMap<String, TypeName>,
}

impl PropTypeMap {
    /// Create an empty map for the named owner type.
    pub fn new(owner: impl Into<String>) -> Self {
        PropTypeMap {
            owner: owner.into(),
            types: FxHashMap::default(),
        }
    }

    /// Create a map declaring exactly one field.
    pub fn single(owner: impl Into<String>, field: impl Into<String>, ty: TypeName) -> Self {
        let mut map = PropTypeMap::new(owner);
        map.insert(field, ty);
        map
    }

    pub fn insert(&mut self, field: impl Into<String>, ty: TypeName) {
        self.types.insert(field.into(), ty);
    }

    pub fn get(&self, field: &str) -> Option<&TypeName> {
        self.types.get(field)
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Declared field names, sorted.
    pub fn fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = self.types.keys().map(String::as_str).collect();
        fields.sort_unstable();
        fields
    }

    fn declared(&self, field: &str) -> Result<&TypeName, RecordError> {
        self.types.get(field).ok_or_else(|| RecordError::UnknownField {
            record: self.owner.clone(),
            field: field.to_string(),
        })
    }

    /// Assert that every value conforms to the declared type of `field`.
    ///
    /// Reports the first non-conforming element. Succeeds trivially for an
    /// empty slice as long as the field is declared.
    pub fn assert_type<T: Record>(&self, field: &str, values: &[T]) -> Result<(), RecordError> {
        let expected = self.declared(field)?;
        for (index, value) in values.iter().enumerate() {
            let found = value.instance_type();
            if found != *expected {
                return Err(RecordError::TypeMismatch {
                    field: field.to_string(),
                    index,
                    expected: expected.clone(),
                    found: found.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Decode the sequence field `field` out of a map of native values.
    ///
    /// A missing key decodes as an empty sequence. The declared type must be
    /// `T`'s own type; a declaration naming a different type fails before any
    /// element is decoded.
    pub fn set_native_data<T: Record>(
        &self,
        field: &str,
        data: &NativeMap,
    ) -> Result<Vec<T>, RecordError> {
        let expected = self.declared(field)?;
        let raw = match data.get(field) {
            None => return Ok(Vec::new()),
            Some(NativeValue::Array(raw)) => raw,
            Some(other) => {
                return Err(RecordError::NotASequence {
                    field: field.to_string(),
                    found: native_kind(other).to_string(),
                })
            }
        };

        let item_type = T::type_name();
        if item_type != *expected {
            return Err(RecordError::TypeMismatch {
                field: field.to_string(),
                index: 0,
                expected: expected.clone(),
                found: item_type.to_string(),
            });
        }

        log::trace!(
            "decoding {} native values into {}.{}",
            raw.len(),
            self.owner,
            field
        );

        raw.iter()
            .enumerate()
            .map(|(index, value)| {
                T::from_native(value).map_err(|err| RecordError::from_decode(field, index, err))
            })
            .collect()
    }

    /// Encode a sequence field into a one-entry native map `{field: [...]}`.
    pub fn to_native_map<T: Record>(&self, field: &str, values: &[T]) -> Result<NativeMap, RecordError> {
        self.declared(field)?;
        let mut map = NativeMap::new();
        map.insert(
            field.to_string(),
            NativeValue::Array(values.iter().map(Record::to_native).collect()),
        );
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::tests::Name;
    use serde_json::json;

    fn names_map() -> PropTypeMap {
        PropTypeMap::single("NameList", "items", TypeName::new("Name"))
    }

    fn native(value: NativeValue) -> NativeMap {
        let mut map = NativeMap::new();
        map.insert("items".to_string(), value);
        map
    }

    #[test]
    fn single_declares_one_field() {
        let map = names_map();
        assert_eq!(map.len(), 1);
        assert!(!map.is_empty());
        assert_eq!(map.fields(), vec!["items"]);
        assert_eq!(map.get("items"), Some(&TypeName::new("Name")));
        assert_eq!(map.owner(), "NameList");
    }

    #[test]
    fn assert_type_accepts_conforming_values() {
        let map = names_map();
        let values = vec![Name("John".into()), Name("Jane".into())];
        assert!(map.assert_type("items", &values).is_ok());
        assert!(map.assert_type::<Name>("items", &[]).is_ok());
    }

    #[test]
    fn assert_type_rejects_drifted_declaration() {
        let map = PropTypeMap::single("EmailList", "items", TypeName::new("Email"));
        let err = map
            .assert_type("items", &[Name("John".into())])
            .unwrap_err();
        assert_eq!(
            err,
            RecordError::TypeMismatch {
                field: "items".into(),
                index: 0,
                expected: TypeName::new("Email"),
                found: "Name".into(),
            }
        );
    }

    #[test]
    fn assert_type_rejects_unknown_field() {
        let err = names_map()
            .assert_type("names", &[Name("John".into())])
            .unwrap_err();
        assert!(matches!(err, RecordError::UnknownField { .. }));
    }

    #[test]
    fn set_native_data_decodes_in_order() {
        let values: Vec<Name> = names_map()
            .set_native_data("items", &native(json!(["John", "Jane"])))
            .unwrap();
        assert_eq!(values, vec![Name("John".into()), Name("Jane".into())]);
    }

    #[test]
    fn set_native_data_missing_field_is_empty() {
        let values: Vec<Name> = names_map()
            .set_native_data("items", &NativeMap::new())
            .unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn set_native_data_reports_failing_index() {
        let err = names_map()
            .set_native_data::<Name>("items", &native(json!(["John", 42, "Jane"])))
            .unwrap_err();
        insta::assert_snapshot!(err.to_string(), @"type mismatch in `items[1]`: expected Name, found int");
    }

    #[test]
    fn set_native_data_requires_array() {
        let err = names_map()
            .set_native_data::<Name>("items", &native(json!("John")))
            .unwrap_err();
        assert_eq!(
            err,
            RecordError::NotASequence {
                field: "items".into(),
                found: "string".into(),
            }
        );
    }

    #[test]
    fn to_native_map_wraps_field() {
        let map = names_map()
            .to_native_map("items", &[Name("John".into()), Name("Jane".into())])
            .unwrap();
        assert_eq!(NativeValue::Object(map), json!({"items": ["John", "Jane"]}));
    }
}
