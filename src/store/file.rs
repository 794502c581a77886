//! JSON file backed result store
//!
//! Every append rewrites the whole file. The new contents go to a temporary
//! file in the same directory first and are then renamed over the target, so
//! a crash mid-write leaves the previous log intact.

use super::{Outcome, ResultLog, ResultStore, StoreError};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

/// Default location of the result file, relative to the working directory
pub const DEFAULT_RESULTS_PATH: &str = "results.json";

/// Result log stored as a JSON array in a single file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_log(&self, log: &ResultLog) -> Result<(), StoreError> {
        let write_err = |source: io::Error| StoreError::Write {
            path: self.path.clone(),
            source,
        };

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
        serde_json::to_writer_pretty(&mut tmp, log)?;
        tmp.write_all(b"\n").map_err(write_err)?;
        tmp.as_file().sync_all().map_err(write_err)?;
        tmp.persist(&self.path).map_err(|e| write_err(e.error))?;

        Ok(())
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_RESULTS_PATH)
    }
}

impl ResultStore for JsonFileStore {
    fn load(&self) -> ResultLog {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no result file yet");
                return ResultLog::new();
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "cannot read result file");
                return ResultLog::new();
            }
        };

        match serde_json::from_str::<ResultLog>(&content) {
            Ok(log) => {
                debug!(path = %self.path.display(), count = log.len(), "loaded results");
                log
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "result file is not a valid log");
                ResultLog::new()
            }
        }
    }

    fn append(&mut self, outcome: Outcome) -> Result<(), StoreError> {
        let mut log = self.load();
        log.push(outcome);
        self.write_log(&log)?;
        debug!(path = %self.path.display(), count = log.len(), "saved results");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Verdict;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> JsonFileStore {
        JsonFileStore::new(dir.path().join("results.json"))
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(store.load().is_empty());
    }

    #[test]
    fn missing_directory_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("nope").join("results.json"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn corrupt_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "{ not json").unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn append_then_load_preserves_order_and_fields() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        let outcomes = vec![
            Outcome::new("2026-10-16 10:00:00", Verdict::Win, 3),
            Outcome::new("2026-10-16 10:05:12", Verdict::Loss, 10),
            Outcome::new("2026-10-16 10:09:59", Verdict::Win, 1),
        ];
        for outcome in &outcomes {
            store.append(outcome.clone()).unwrap();
        }

        let loaded = store.load();
        assert_eq!(loaded.len(), 3);
        assert_eq!(loaded.outcomes(), outcomes.as_slice());
    }

    #[test]
    fn reopened_store_sees_previous_results() {
        let dir = TempDir::new().unwrap();
        store_in(&dir)
            .append(Outcome::new("2026-10-16 10:00:00", Verdict::Loss, 5))
            .unwrap();

        let reopened = store_in(&dir);
        assert_eq!(reopened.load().len(), 1);
    }

    #[test]
    fn file_is_a_json_array_of_records() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store
            .append(Outcome::new("2026-10-16 10:00:00", Verdict::Win, 2))
            .unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(
            raw,
            serde_json::json!([
                { "date": "2026-10-16 10:00:00", "outcome": "win", "attempts": 2 }
            ])
        );
    }

    #[test]
    fn append_over_corrupt_file_starts_fresh() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        fs::write(store.path(), "garbage").unwrap();

        store
            .append(Outcome::new("2026-10-16 10:00:00", Verdict::Win, 4))
            .unwrap();
        assert_eq!(store.load().len(), 1);
    }

    #[test]
    fn unwritable_location_reports_error() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("missing").join("results.json"));

        let err = store
            .append(Outcome::new("2026-10-16 10:00:00", Verdict::Win, 4))
            .unwrap_err();
        assert!(matches!(err, StoreError::Write { .. }));
    }

    #[test]
    fn no_temp_files_left_behind() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store
            .append(Outcome::new("2026-10-16 10:00:00", Verdict::Win, 4))
            .unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }
}
