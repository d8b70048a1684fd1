//! Shared immutable storage for list elements.
//!
//! An `ItemSeq` owns its elements behind an `Arc<[T]>`. Cloning a sequence
//! shares the allocation; every edit copies the elements into a fresh
//! allocation, so two sequences never share mutable storage. Because clones
//! share the allocation, `ptr_eq` tells apart "the same value handed back"
//! from "an equal value built anew".

use std::fmt;
use std::sync::Arc;

pub struct ItemSeq<T> {
    items: Arc<[T]>,
}

impl<T> ItemSeq<T> {
    /// An empty sequence.
    pub fn new() -> Self {
        ItemSeq {
            items: Arc::from(Vec::new()),
        }
    }

    pub fn from_vec(items: Vec<T>) -> Self {
        ItemSeq {
            items: Arc::from(items),
        }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Whether both sequences are handles to the same allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }
}

impl<T: Clone> ItemSeq<T> {
    /// Copy the elements, apply `edit` to the copy, and wrap the result.
    pub fn with(&self, edit: impl FnOnce(&mut Vec<T>)) -> Self {
        let mut items = self.items.to_vec();
        edit(&mut items);
        ItemSeq::from_vec(items)
    }
}

impl<T> Clone for ItemSeq<T> {
    fn clone(&self) -> Self {
        ItemSeq {
            items: Arc::clone(&self.items),
        }
    }
}

impl<T> Default for ItemSeq<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ItemSeq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T> From<Vec<T>> for ItemSeq<T> {
    fn from(items: Vec<T>) -> Self {
        ItemSeq::from_vec(items)
    }
}

impl<T> FromIterator<T> for ItemSeq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        ItemSeq::from_vec(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a ItemSeq<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
