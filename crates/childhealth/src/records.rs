//! Free-text health records keyed by child ID.

use std::collections::HashMap;

use tracing::debug;

/// Identifier shared by health records and appointments.
pub type ChildId = i32;

/// In-memory health record store. The last write for a child wins.
#[derive(Debug, Default, Clone)]
pub struct HealthRecordStore {
    records: HashMap<ChildId, String>,
}

impl HealthRecordStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the record for `child_id`.
    pub fn update(&mut self, child_id: ChildId, details: impl Into<String>) {
        let details = details.into();
        debug!(child_id, len = details.len(), "health record updated");
        self.records.insert(child_id, details);
    }

    /// The current record for `child_id`, if any.
    #[must_use]
    pub fn get(&self, child_id: ChildId) -> Option<&str> {
        self.records.get(&child_id).map(String::as_str)
    }

    /// Number of children with a record.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no records have been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_then_get() {
        let mut store = HealthRecordStore::new();
        store.update(7, "checkup ok");
        assert_eq!(store.get(7), Some("checkup ok"));
        assert_eq!(store.get(8), None);
    }

    #[test]
    fn test_last_write_wins() {
        let mut store = HealthRecordStore::new();
        store.update(1, "first");
        store.update(1, "second");
        assert_eq!(store.get(1), Some("second"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_negative_and_zero_ids() {
        let mut store = HealthRecordStore::new();
        store.update(0, "zero");
        store.update(-3, "negative");
        assert_eq!(store.get(0), Some("zero"));
        assert_eq!(store.get(-3), Some("negative"));
    }

    #[test]
    fn test_empty_details_are_stored() {
        let mut store = HealthRecordStore::new();
        assert!(store.is_empty());
        store.update(2, "");
        assert_eq!(store.get(2), Some(""));
    }
}
