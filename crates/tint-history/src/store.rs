//! History store
//!
//! Owns the in-memory list, its capacity and the backend. `load` and `append`
//! are the only ways the list changes; every accepted append is written
//! through to the backend immediately.

use tint_color::ColorResolver;

use crate::backend::{HistoryBackend, MemoryBackend};
use crate::display::{DisplayEntry, display_order};
use crate::list::{AppendOutcome, HistoryList};
use crate::StoreError;

/// Bounded history bound to a backend
#[derive(Debug)]
pub struct HistoryStore<B = MemoryBackend> {
    list: HistoryList,
    capacity: usize,
    backend: B,
}

impl<B: HistoryBackend> HistoryStore<B> {
    /// Create a store and load whatever the backend holds
    pub fn open(backend: B, capacity: usize) -> Self {
        let mut store = Self {
            list: HistoryList::new(),
            capacity: capacity.max(1),
            backend,
        };
        store.load();
        store
    }

    /// Re-read the record from the backend.
    ///
    /// A missing or unreadable record yields an empty list. Records longer
    /// than the capacity lose their oldest entries.
    pub fn load(&mut self) -> &HistoryList {
        let entries = match self.backend.read() {
            Ok(entries) => entries.unwrap_or_default(),
            Err(e) => {
                tracing::warn!("Failed to read history, starting empty: {}", e);
                Vec::new()
            }
        };

        self.list = HistoryList::from_entries(entries);
        let dropped = self.list.truncate_oldest(self.capacity);
        if !dropped.is_empty() {
            tracing::debug!("Dropped {} history entries over capacity {}", dropped.len(), self.capacity);
        }
        &self.list
    }

    /// Record `entry` if it is a color and not already present.
    ///
    /// The in-memory list is updated before the write, so on a persistence
    /// error it stays authoritative and the next accepted append writes the
    /// whole list again.
    pub fn append(
        &mut self,
        entry: &str,
        resolver: &dyn ColorResolver,
    ) -> Result<AppendOutcome, StoreError> {
        let outcome = self.list.try_append(entry, self.capacity, resolver);
        match &outcome {
            AppendOutcome::Added { evicted } => {
                tracing::debug!("History += {:?} (evicted {:?})", entry, evicted);
                if let Err(e) = self.backend.write(self.list.entries()) {
                    tracing::warn!("Failed to persist history: {}", e);
                    return Err(e);
                }
            }
            AppendOutcome::Duplicate => tracing::debug!("History already has {:?}", entry),
            AppendOutcome::Rejected => tracing::debug!("Not recording non-color {:?}", entry),
        }
        Ok(outcome)
    }

    pub fn list(&self) -> &HistoryList {
        &self.list
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Newest first, with recency weights
    pub fn display(&self) -> Vec<DisplayEntry<'_>> {
        display_order(&self.list)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}
