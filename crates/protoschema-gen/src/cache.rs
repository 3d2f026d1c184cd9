//! # Schema Cache
//!
//! Opt-in memoization of ordered schemas keyed by fully-qualified message
//! name. The "no schema" outcome of a suppressed message is cached too.
//!
//! Entries are only valid while the descriptor registered under a name does
//! not change. Descriptors are immutable once built, so a cache scoped to a
//! single descriptor set is always consistent; mixing sets that reuse names
//! is the caller's responsibility.
//!
//! [`Generator`] never consults a cache on its own.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use protoschema_core::MessageDescriptor;

use crate::generator::Generator;
use crate::ordered::OrderedSchema;

/// Thread-safe memo of generated ordered schemas.
#[derive(Debug, Default)]
pub struct SchemaCache {
    entries: RwLock<HashMap<String, Option<Arc<OrderedSchema>>>>,
}

impl SchemaCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached schema for `message`, generating it on first use.
    ///
    /// `None` means generation is disabled for the message.
    pub fn get_or_generate<M: MessageDescriptor>(
        &self,
        generator: &Generator,
        message: &M,
    ) -> Option<Arc<OrderedSchema>> {
        let key = message.full_name();
        {
            let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(hit) = entries.get(key) {
                return hit.clone();
            }
        }

        let generated = generator.generate_ordered_schema(message).map(Arc::new);
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        // Another thread may have filled the slot while we generated.
        entries.entry(key.to_string()).or_insert(generated).clone()
    }

    pub fn contains(&self, full_name: &str) -> bool {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(full_name)
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
