//! Saved-material progress, persisted as a JSON array of titles.

use tracing::{debug, warn};

use super::storage::{KeyValueStore, StorageError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyPresent,
}

#[derive(Debug)]
pub struct ProgressStore<S> {
    store: S,
    key: &'static str,
    titles: Vec<String>,
}

impl<S: KeyValueStore> ProgressStore<S> {
    /// Reads the persisted list. Absent, unreadable or malformed data loads
    /// as an empty list; this never fails.
    pub fn load(store: S, key: &'static str) -> Self {
        let titles = match store.get(key) {
            Ok(Some(raw)) => decode(&raw).unwrap_or_else(|| {
                warn!(key, "ignoring malformed progress data");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(key, %err, "progress storage unreadable; starting empty");
                Vec::new()
            }
        };
        debug!(count = titles.len(), "progress loaded");
        Self { store, key, titles }
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn contains(&self, title: &str) -> bool {
        self.titles.iter().any(|t| t == title)
    }

    /// Appends `title` when it is not saved yet and rewrites the whole list.
    /// A failed write rolls the append back.
    pub fn add_if_absent(&mut self, title: &str) -> Result<AddOutcome, StorageError> {
        if self.contains(title) {
            return Ok(AddOutcome::AlreadyPresent);
        }
        self.titles.push(title.to_string());
        if let Err(err) = self.persist() {
            self.titles.pop();
            return Err(err);
        }
        Ok(AddOutcome::Added)
    }

    fn persist(&mut self) -> Result<(), StorageError> {
        let encoded = serde_json::to_string(&self.titles)
            .map_err(|err| StorageError::Rejected(err.to_string()))?;
        self.store.set(self.key, &encoded)
    }
}

/// Parses the stored array, keeping the first occurrence of any repeated
/// title so a hand-edited value cannot break the uniqueness invariant.
fn decode(raw: &str) -> Option<Vec<String>> {
    let parsed: Vec<String> = serde_json::from_str(raw).ok()?;
    let mut titles: Vec<String> = Vec::with_capacity(parsed.len());
    for title in parsed {
        if !titles.contains(&title) {
            titles.push(title);
        }
    }
    Some(titles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::STORAGE_KEY;
    use crate::core::storage::MemoryStore;

    #[test]
    fn missing_value_loads_empty() {
        let progress = ProgressStore::load(MemoryStore::new(), STORAGE_KEY);
        assert!(progress.titles().is_empty());
    }

    #[test]
    fn malformed_value_loads_empty() {
        for raw in ["not json", "{\"a\":1}", "[1,2]", ""] {
            let store = MemoryStore::with_entry(STORAGE_KEY, raw);
            let progress = ProgressStore::load(store, STORAGE_KEY);
            assert!(progress.titles().is_empty(), "raw = {raw:?}");
        }
    }

    #[test]
    fn duplicate_add_is_a_no_op() {
        let store = MemoryStore::new();
        let mut progress = ProgressStore::load(store.clone(), STORAGE_KEY);

        assert_eq!(progress.add_if_absent("Matematika Dasar").unwrap(), AddOutcome::Added);
        assert_eq!(
            progress.add_if_absent("Matematika Dasar").unwrap(),
            AddOutcome::AlreadyPresent
        );

        let persisted: Vec<String> =
            serde_json::from_str(&store.raw(STORAGE_KEY).unwrap()).unwrap();
        assert_eq!(persisted, vec!["Matematika Dasar".to_string()]);
    }

    #[test]
    fn match_is_exact() {
        let mut progress = ProgressStore::load(MemoryStore::new(), STORAGE_KEY);
        progress.add_if_absent("Sains").unwrap();
        assert_eq!(progress.add_if_absent("sains").unwrap(), AddOutcome::Added);
        assert_eq!(progress.titles().len(), 2);
    }

    #[test]
    fn survives_reload() {
        let store = MemoryStore::new();
        let mut progress = ProgressStore::load(store.clone(), STORAGE_KEY);
        progress.add_if_absent("A").unwrap();
        progress.add_if_absent("B").unwrap();

        let reloaded = ProgressStore::load(store, STORAGE_KEY);
        assert_eq!(reloaded.titles(), ["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn repeated_entries_collapse_on_load() {
        let store = MemoryStore::with_entry(STORAGE_KEY, r#"["A","B","A"]"#);
        let progress = ProgressStore::load(store, STORAGE_KEY);
        assert_eq!(progress.titles(), ["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn failed_write_rolls_back() {
        let store = MemoryStore::with_entry(STORAGE_KEY, r#"["A"]"#);
        let mut progress = ProgressStore::load(store.clone(), STORAGE_KEY);
        store.reject_writes(true);

        assert!(progress.add_if_absent("B").is_err());
        assert_eq!(progress.titles(), ["A".to_string()]);
        assert_eq!(store.raw(STORAGE_KEY).as_deref(), Some(r#"["A"]"#));
    }
}
