use tracing::debug;

use crate::record::{Hospital, HospitalId};

/// Client-side cache of the server's hospital records.
///
/// Keeps whatever order the server returned. Every mutation here corresponds to an API call that
/// has already succeeded; nothing is ever applied speculatively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<Hospital>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[Hospital] {
        &self.records
    }

    pub fn get(&self, id: HospitalId) -> Option<&Hospital> {
        self.records.iter().find(|h| h.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Replace the whole contents with a freshly listed set of records.
    pub fn load(&mut self, records: Vec<Hospital>) {
        debug!("Loaded {} hospitals", records.len());
        self.records = records;
    }

    /// Append a record the server just created.
    pub fn append(&mut self, record: Hospital) {
        debug!("Appended hospital {}", record.id);
        self.records.push(record);
    }

    /// Replace the record sharing `record.id` in place. Does nothing if no such record is held.
    pub fn replace(&mut self, record: Hospital) {
        match self.records.iter_mut().find(|h| h.id == record.id) {
            Some(slot) => {
                debug!("Replaced hospital {}", record.id);
                *slot = record;
            }
            None => debug!("Updated hospital {} is not in the store", record.id),
        }
    }

    /// Drop every record with the given id.
    pub fn remove(&mut self, id: HospitalId) {
        let before = self.records.len();
        self.records.retain(|h| h.id != id);
        debug!(
            "Removed {} record(s) for hospital {id}",
            before - self.records.len()
        );
    }
}

#[cfg(test)]
mod test {
    use super::RecordStore;
    use crate::record::{Hospital, HospitalId};

    fn sample() -> Vec<Hospital> {
        vec![
            Hospital::new(3, "Central", "Elm St"),
            Hospital::new(1, "General", "Main St"),
            Hospital::new(2, "Clinic A", "2nd Ave"),
        ]
    }

    #[test]
    fn test_load_keeps_order() {
        let mut store = RecordStore::new();
        assert!(store.is_empty());

        store.load(sample());

        assert_eq!(store.records(), sample().as_slice());
    }

    #[test]
    fn test_load_replaces_previous_contents() {
        let mut store = RecordStore::new();
        store.load(sample());

        store.load(vec![Hospital::new(9, "North", "Oak Rd")]);

        assert_eq!(store.records(), &[Hospital::new(9, "North", "Oak Rd")]);
    }

    #[test]
    fn test_append() {
        let mut store = RecordStore::new();
        store.load(sample());

        let new = Hospital::new(7, "Clinic B", "3rd Ave");
        store.append(new.clone());

        assert_eq!(store.len(), 4);
        assert_eq!(store.records().last(), Some(&new));
        assert_eq!(store.records().get(..3), Some(sample().as_slice()));
    }

    #[test]
    fn test_replace_in_place() {
        let mut store = RecordStore::new();
        store.load(sample());

        let updated = Hospital::new(1, "General Hospital", "Main St");
        store.replace(updated.clone());

        assert_eq!(store.len(), 3);
        assert_eq!(store.records().get(1), Some(&updated));
        assert_eq!(store.records().first(), sample().first());
        assert_eq!(store.records().last(), sample().last());
    }

    #[test]
    fn test_replace_missing_is_noop() {
        let mut store = RecordStore::new();
        store.load(sample());

        store.replace(Hospital::new(42, "Nowhere", "Void"));

        assert_eq!(store.records(), sample().as_slice());
    }

    #[test]
    fn test_remove() {
        let mut store = RecordStore::new();
        store.load(sample());

        store.remove(HospitalId::new(1));

        assert_eq!(store.len(), 2);
        assert!(store.get(HospitalId::new(1)).is_none());
        assert!(store.get(HospitalId::new(3)).is_some());
    }

    #[test]
    fn test_remove_every_duplicate() {
        let mut store = RecordStore::new();
        let mut records = sample();
        records.push(Hospital::new(1, "General (dup)", "Main St"));
        store.load(records);

        store.remove(HospitalId::new(1));

        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut store = RecordStore::new();
        store.load(sample());

        store.remove(HospitalId::new(99));

        assert_eq!(store.records(), sample().as_slice());
    }
}
