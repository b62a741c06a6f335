//! Process-wide record cache
//!
//! Injected into the loader rather than living as module state; keys
//! are lookup names plus a sentinel for the full record list. Entries
//! have no TTL: the cache lives for the process lifetime unless the
//! loader runs in dev mode, which clears it wholesale on every load.

use crate::catalog::types::CatalogRecord;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;

/// Sentinel key for the "every record" entry
pub const ALL_RECORDS_KEY: &str = "__all__";

#[derive(Debug)]
pub struct RecordCache {
    entries: DashMap<String, Arc<Vec<CatalogRecord>>>,
    enabled: bool,
}

impl RecordCache {
    pub fn new(enabled: bool) -> Self {
        Self {
            entries: DashMap::new(),
            enabled,
        }
    }

    pub fn get(&self, key: &str) -> Option<Arc<Vec<CatalogRecord>>> {
        if !self.enabled {
            return None;
        }
        let hit = self.entries.get(key).map(|entry| Arc::clone(entry.value()));
        if hit.is_some() {
            debug!("record cache hit: {}", key);
        }
        hit
    }

    pub fn set(&self, key: &str, records: Vec<CatalogRecord>) -> Arc<Vec<CatalogRecord>> {
        let records = Arc::new(records);
        if self.enabled {
            self.entries.insert(key.to_string(), Arc::clone(&records));
        }
        records
    }

    pub fn clear(&self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RecordCache {
    fn default() -> Self {
        Self::new(true)
    }
}
