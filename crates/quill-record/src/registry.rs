//! Process-wide descriptor registry.
//!
//! Each concrete record type has one property type map for the lifetime of
//! the process. The map is built lazily on first use and cached here, keyed
//! by the type's `TypeId`.
//!
//! ## Semantics
//!
//! - A key is built at most once. Concurrent first uses serialize on the
//!   write lock; the loser re-checks the key and takes the winner's map
//!   without running its own builder.
//! - A failed build is not cached: the next use runs the builder again and
//!   fails with the same error.
//! - Entries are never invalidated.

use std::any::TypeId;
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use quill_common::RecordError;

use crate::prop_types::PropTypeMap;

// ---------------------------------------------------------------------------
// DescriptorRegistry
// ---------------------------------------------------------------------------

/// Cache of built property type maps.
pub struct DescriptorRegistry {
    descriptors: RwLock<FxHashMap<TypeId, Arc<PropTypeMap>>>,
}

impl DescriptorRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        DescriptorRegistry {
            descriptors: RwLock::new(FxHashMap::default()),
        }
    }

    /// Return the cached map for `key`, building it with `build` on a miss.
    ///
    /// `name` is only used for logging. The builder runs under the write
    /// lock, so it must not consult the registry itself.
    pub fn get_or_build<F>(
        &self,
        key: TypeId,
        name: &str,
        build: F,
    ) -> Result<Arc<PropTypeMap>, RecordError>
    where
        F: FnOnce() -> Result<PropTypeMap, RecordError>,
    {
        if let Some(found) = self.descriptors.read().get(&key) {
            return Ok(Arc::clone(found));
        }

        let mut descriptors = self.descriptors.write();
        // Another thread may have built it while we waited for the lock.
        if let Some(found) = descriptors.get(&key) {
            return Ok(Arc::clone(found));
        }

        match build() {
            Ok(map) => {
                log::debug!("descriptor for {} built: {:?}", name, map.fields());
                let map = Arc::new(map);
                descriptors.insert(key, Arc::clone(&map));
                Ok(map)
            }
            Err(err) => {
                log::debug!("descriptor for {} rejected: {}", name, err);
                Err(err)
            }
        }
    }

    /// Look up an already-built map.
    pub fn get(&self, key: TypeId) -> Option<Arc<PropTypeMap>> {
        self.descriptors.read().get(&key).cloned()
    }

    pub fn contains(&self, key: TypeId) -> bool {
        self.descriptors.read().contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.descriptors.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.read().is_empty()
    }
}

impl Default for DescriptorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Global registry instance
// ---------------------------------------------------------------------------

/// The global descriptor registry, lazily initialized.
static GLOBAL_REGISTRY: OnceLock<DescriptorRegistry> = OnceLock::new();

/// Get a reference to the global descriptor registry.
pub fn global_registry() -> &'static DescriptorRegistry {
    GLOBAL_REGISTRY.get_or_init(DescriptorRegistry::new)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
