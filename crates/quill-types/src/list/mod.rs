//! Immutable typed lists.
//!
//! A concrete list type holds elements of exactly one record type. That type
//! is not stated separately: it is read from the list's declared constructor
//! (see [`resolver`]) the first time the list type needs it, then cached for
//! the rest of the process.
//!
//! All operations that look like mutations clone the receiver and replace
//! only its element sequence on the clone. The receiver is never changed.
//! Two empty-list cases hand back the receiver itself instead of a copy:
//! `pop` and `shift` on an empty list return a value for which
//! [`ImmutableList::same_instance`] holds. `filter` always builds a new
//! sequence, even when nothing is removed.

pub mod macros;
pub mod resolver;
pub mod seq;
pub mod signature;

use std::fmt;
use std::sync::Arc;

use quill_record::{native_kind, NativeMap, NativeValue, PropTypeMap, Record, RecordError};

pub use resolver::ITEMS;
pub use seq::ItemSeq;
pub use signature::{ConstructorSig, Param, Visibility};

/// An immutable homogeneous list of `Self::Item`.
///
/// Implement it with [`immutable_list!`](crate::immutable_list), which also
/// declares the canonical constructor. Hand-written impls can declare any
/// constructor shape; malformed shapes surface as configuration errors on the
/// first operation that needs the descriptor.
pub trait ImmutableList: Clone + fmt::Debug + 'static {
    type Item: Record;

    /// Name used in descriptors and error messages.
    fn list_name() -> &'static str;

    /// The declared constructor, `None` if the type declares none.
    fn constructor() -> Option<ConstructorSig>;

    fn from_items(items: ItemSeq<Self::Item>) -> Self;

    fn items(&self) -> &ItemSeq<Self::Item>;

    fn items_mut(&mut self) -> &mut ItemSeq<Self::Item>;

    /// The cached `{"items" -> Item}` descriptor of this list type.
    fn descriptor() -> Result<Arc<PropTypeMap>, RecordError> {
        resolver::descriptor::<Self>()
    }

    // ── Construction ──────────────────────────────────────────────────

    /// Build a list directly from typed elements. No assertion runs: the
    /// elements are `Self::Item` by construction.
    fn new(items: impl IntoIterator<Item = Self::Item>) -> Self {
        Self::from_items(items.into_iter().collect())
    }

    fn empty() -> Self {
        Self::from_items(ItemSeq::new())
    }

    /// Build a list from native values, decoding each one into `Self::Item`.
    fn from_array(natives: &[NativeValue]) -> Result<Self, RecordError> {
        Self::from_native(&NativeValue::Array(natives.to_vec()))
    }

    /// Build a list from one native value, which must be an array.
    fn from_native(native: &NativeValue) -> Result<Self, RecordError> {
        let descriptor = Self::descriptor()?;
        let mut data = NativeMap::new();
        data.insert(ITEMS.to_string(), native.clone());

        let items = descriptor.set_native_data::<Self::Item>(ITEMS, &data)?;
        Ok(Self::from_items(ItemSeq::from_vec(items)))
    }

    /// Build a list from already-typed elements. Skips decoding but still
    /// resolves the descriptor and asserts the elements against it.
    fn from_record_data(items: Vec<Self::Item>) -> Result<Self, RecordError> {
        let descriptor = Self::descriptor()?;
        descriptor.assert_type(ITEMS, &items)?;
        Ok(Self::from_items(ItemSeq::from_vec(items)))
    }

    // ── Copy-on-write operations ─────────────────────────────────────

    /// Clone the receiver and swap in a new element sequence.
    fn with_items(&self, items: ItemSeq<Self::Item>) -> Self {
        let mut copy = self.clone();
        *copy.items_mut() = items;
        copy
    }

    /// Append elements at the end, in order.
    fn push(&self, items: impl IntoIterator<Item = Self::Item>) -> Result<Self, RecordError> {
        let descriptor = Self::descriptor()?;
        let added: Vec<Self::Item> = items.into_iter().collect();
        descriptor.assert_type(ITEMS, &added)?;

        Ok(self.with_items(self.items().with(|items| items.extend(added))))
    }

    /// Prepend elements at the start, keeping their relative order.
    fn unshift(&self, items: impl IntoIterator<Item = Self::Item>) -> Result<Self, RecordError> {
        let descriptor = Self::descriptor()?;
        let added: Vec<Self::Item> = items.into_iter().collect();
        descriptor.assert_type(ITEMS, &added)?;

        Ok(self.with_items(self.items().with(|items| {
            items.splice(0..0, added);
        })))
    }

    /// Drop the last element. An empty list hands back the receiver itself.
    fn pop(&self) -> Self {
        if self.is_empty() {
            return self.clone();
        }
        self.with_items(self.items().with(|items| {
            items.pop();
        }))
    }

    /// Drop the first element. An empty list hands back the receiver itself.
    fn shift(&self) -> Self {
        if self.is_empty() {
            return self.clone();
        }
        self.with_items(self.items().with(|items| {
            items.remove(0);
        }))
    }

    /// Keep the elements for which `predicate` holds, in order. Always a new
    /// sequence.
    fn filter(&self, mut predicate: impl FnMut(&Self::Item) -> bool) -> Self {
        let kept: ItemSeq<Self::Item> = self
            .iter()
            .filter(|item| predicate(*item))
            .cloned()
            .collect();
        self.with_items(kept)
    }

    // ── Accessors ────────────────────────────────────────────────────

    fn first(&self) -> Option<&Self::Item> {
        self.items().first()
    }

    fn last(&self) -> Option<&Self::Item> {
        self.items().last()
    }

    fn len(&self) -> usize {
        self.items().len()
    }

    fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    fn iter(&self) -> std::slice::Iter<'_, Self::Item> {
        self.items().iter()
    }

    /// Whether `other` is this very list rather than an equal copy.
    fn same_instance(&self, other: &Self) -> bool {
        self.items().ptr_eq(other.items())
    }

    // ── Serialization and equality ───────────────────────────────────

    /// The native form of every element, in order.
    fn to_array(&self) -> Result<Vec<NativeValue>, RecordError> {
        let descriptor = Self::descriptor()?;
        let record = descriptor.to_native_map(ITEMS, self.items().as_slice())?;
        take_items(Self::list_name(), record)
    }

    fn to_native(&self) -> Result<NativeValue, RecordError> {
        self.to_array().map(NativeValue::Array)
    }

    /// Structural equality against typed elements, compared in native form.
    fn eq_items(&self, other: &[Self::Item]) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| a.to_native() == b.to_native())
    }

    /// Structural equality against a native value. Anything but an array of
    /// matching natives is unequal.
    fn equals_native(&self, other: &NativeValue) -> bool {
        match other {
            NativeValue::Array(values) => {
                self.len() == values.len()
                    && self
                        .iter()
                        .zip(values)
                        .all(|(item, value)| item.equals_native(value))
            }
            _ => false,
        }
    }
}

/// Pull the `items` array out of an encoded record.
fn take_items(list_name: &str, mut record: NativeMap) -> Result<Vec<NativeValue>, RecordError> {
    match record.remove(ITEMS) {
        Some(NativeValue::Array(items)) => Ok(items),
        Some(other) => Err(RecordError::NotASequence {
            field: ITEMS.to_string(),
            found: native_kind(&other).to_string(),
        }),
        None => Err(RecordError::UnknownField {
            record: list_name.to_string(),
            field: ITEMS.to_string(),
        }),
    }
}
