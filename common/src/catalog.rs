//! Catalog store: the JSON array of portfolio records.
//!
//! Every write rewrites the whole file. There is no locking; the tool
//! assumes a single local operator and the last writer wins.

use crate::error::{Error, Result};
use crate::types::CatalogRecord;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the parent directories and an empty `[]` catalog if missing.
    pub fn ensure_exists(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        fs::write(&self.path, "[]").map_err(|e| Error::io(&self.path, e))
    }

    /// Read every record. Unreadable or corrupt files yield an empty list;
    /// the next `save` will replace whatever was there.
    pub fn load(&self) -> Vec<CatalogRecord> {
        match self.try_load() {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "catalog could not be read, treating it as empty"
                );
                Vec::new()
            }
        }
    }

    /// Strict variant of [`load`](Self::load) for callers that want to see
    /// the failure.
    pub fn try_load(&self) -> Result<Vec<CatalogRecord>> {
        let content = fs::read_to_string(&self.path).map_err(|e| Error::io(&self.path, e))?;
        let records = serde_json::from_str(&content)?;
        Ok(records)
    }

    /// Overwrite the file with `records` as 2-space indented JSON.
    pub fn save(&self, records: &[CatalogRecord]) -> Result<()> {
        let content = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, content).map_err(|e| Error::io(&self.path, e))
    }

    /// Re-read the file, give `record` the next id, append it and save.
    /// Returns the stored record and the full updated list.
    pub fn append(&self, mut record: CatalogRecord) -> Result<(CatalogRecord, Vec<CatalogRecord>)> {
        let mut records = self.load();
        record.id = next_id(&records)?;
        records.push(record.clone());
        self.save(&records)?;
        tracing::info!(id = record.id, title = %record.title, "catalog record appended");
        Ok((record, records))
    }
}

/// One more than the largest id present, or 1 for an empty catalog.
pub fn next_id(records: &[CatalogRecord]) -> Result<u64> {
    let max = records.iter().map(|r| r.id).max().unwrap_or(0);
    max.checked_add(1).ok_or(Error::IdExhausted(max))
}

/// Records ordered for display, most recent id first.
pub fn listing(records: &[CatalogRecord]) -> Vec<&CatalogRecord> {
    let mut sorted: Vec<&CatalogRecord> = records.iter().collect();
    sorted.sort_by(|a, b| b.id.cmp(&a.id));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MediaKind;
    use tempfile::tempdir;

    fn record(id: u64) -> CatalogRecord {
        CatalogRecord {
            id,
            title: format!("item {id}"),
            category: "interior".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_next_id() {
        assert_eq!(next_id(&[]).unwrap(), 1);
        assert_eq!(next_id(&[record(3), record(7), record(1)]).unwrap(), 8);
    }

    #[test]
    fn test_next_id_at_max_is_an_error() {
        let err = next_id(&[record(2), record(u64::MAX)]).unwrap_err();
        assert!(matches!(err, Error::IdExhausted(u64::MAX)));
    }

    #[test]
    fn test_append_keeps_records_with_mistyped_fields() {
        let dir = tempdir().unwrap();
        let store = CatalogStore::new(dir.path().join("portfolio-data.json"));
        fs::write(
            store.path(),
            r#"[{"id": 1, "title": "Old A", "client": null}, {"id": "2", "title": "Old B", "tags": null}]"#,
        )
        .unwrap();

        let (stored, all) = store.append(record(0)).unwrap();
        assert_eq!(stored.id, 3);
        let titles: Vec<&str> = all.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Old A", "Old B", "item 0"]);
        assert_eq!(store.try_load().unwrap().len(), 3);
    }

    #[test]
    fn test_listing_most_recent_first() {
        let records = vec![record(2), record(9), record(5)];
        let ids: Vec<u64> = listing(&records).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![9, 5, 2]);
    }

    #[test]
    fn test_ensure_exists_creates_empty_array() {
        let dir = tempdir().unwrap();
        let store = CatalogStore::new(dir.path().join("nested/data/portfolio-data.json"));
        store.ensure_exists().unwrap();
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "[]");
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = CatalogStore::new(dir.path().join("missing.json"));
        assert!(store.load().is_empty());
        assert!(store.try_load().is_err());
    }

    #[test]
    fn test_load_corrupt_file_is_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("portfolio-data.json");
        fs::write(&path, "[{\"id\": 1,").unwrap();
        let store = CatalogStore::new(&path);
        assert!(store.load().is_empty());
        assert!(matches!(store.try_load(), Err(Error::Json(_))));
    }

    #[test]
    fn test_save_is_indented() {
        let dir = tempdir().unwrap();
        let store = CatalogStore::new(dir.path().join("portfolio-data.json"));
        store.save(&[record(1)]).unwrap();
        let content = fs::read_to_string(store.path()).unwrap();
        assert!(content.starts_with("[\n  {\n    \"id\": 1,"));
    }

    #[test]
    fn test_save_load_round_trip_is_stable() {
        let dir = tempdir().unwrap();
        let store = CatalogStore::new(dir.path().join("portfolio-data.json"));
        let mut first = record(1);
        first.set_asset(MediaKind::Video, "/videos/portfolio/tour.mp4".into());
        first.tags = vec!["Matterport".into(), "Walkthrough".into()];
        store.save(&[first, record(2)]).unwrap();

        let before = fs::read_to_string(store.path()).unwrap();
        let loaded = store.load();
        store.save(&loaded).unwrap();
        let after = fs::read_to_string(store.path()).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_append_assigns_ids_and_preserves_existing() {
        let dir = tempdir().unwrap();
        let store = CatalogStore::new(dir.path().join("portfolio-data.json"));
        store.save(&[record(3), record(7)]).unwrap();

        let (stored, all) = store.append(record(0)).unwrap();
        assert_eq!(stored.id, 8);
        assert_eq!(all.len(), 3);

        let (stored, all) = store.append(record(0)).unwrap();
        assert_eq!(stored.id, 9);
        let mut ids: Vec<u64> = all.iter().map(|r| r.id).collect();
        ids.dedup();
        assert_eq!(ids, vec![3, 7, 8, 9]);
        assert_eq!(store.load().len(), 4);
    }
}
