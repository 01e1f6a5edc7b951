use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use thiserror::Error;

pub const NEXT_TRIPS_KEY: &str = "nextTrips";
pub const DEFAULT_SUITE_NAME: &str = "group.TrainLog.prochainTrain";

/// Read-only view of the key-value suite the host app writes into.
pub trait SharedStore {
    fn read_string(&self, key: &str) -> Option<String>;
}

impl<T: SharedStore + ?Sized> SharedStore for &T {
    fn read_string(&self, key: &str) -> Option<String> {
        (**self).read_string(key)
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read shared store: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse shared store as JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("shared store must be a JSON object")]
    NotAnObject,
}

/// Suite persisted by the host app as `<group_dir>/<suite>.json`, a JSON object
/// of key to value. Re-read on every lookup.
#[derive(Debug, Clone)]
pub struct GroupFileStore {
    path: PathBuf,
}

impl GroupFileStore {
    pub fn new(group_dir: impl AsRef<Path>, suite_name: &str) -> Self {
        Self {
            path: group_dir.as_ref().join(format!("{suite_name}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Option<Map<String, Value>>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(StoreError::Io(error)),
        };

        match serde_json::from_str::<Value>(&content)? {
            Value::Object(entries) => Ok(Some(entries)),
            _ => Err(StoreError::NotAnObject),
        }
    }
}

impl SharedStore for GroupFileStore {
    fn read_string(&self, key: &str) -> Option<String> {
        let entries = match self.load() {
            Ok(Some(entries)) => entries,
            Ok(None) => {
                tracing::debug!(path = %self.path.display(), "shared store not present");
                return None;
            }
            Err(error) => {
                tracing::debug!(
                    path = %self.path.display(),
                    error = %error,
                    "shared store unreadable, treating as absent"
                );
                return None;
            }
        };

        match entries.get(key) {
            Some(Value::String(value)) => Some(value.clone()),
            Some(_) => {
                tracing::debug!(key, "shared store value is not a string");
                None
            }
            None => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    values: HashMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, key: &str, value: impl Into<String>) -> Self {
        self.values.insert(key.to_string(), value.into());
        self
    }
}

impl SharedStore for InMemoryStore {
    fn read_string(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{
        DEFAULT_SUITE_NAME, GroupFileStore, InMemoryStore, NEXT_TRIPS_KEY, SharedStore,
    };
    use crate::test_support::write_suite_file;

    #[test]
    fn reads_string_value_from_suite_file() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        write_suite_file(
            dir.path(),
            DEFAULT_SUITE_NAME,
            &json!({ NEXT_TRIPS_KEY: "[]", "other": "x" }).to_string(),
        );

        let store = GroupFileStore::new(dir.path(), DEFAULT_SUITE_NAME);

        assert_eq!(store.read_string(NEXT_TRIPS_KEY), Some("[]".to_string()));
        assert_eq!(
            store.path(),
            dir.path().join("group.TrainLog.prochainTrain.json")
        );
    }

    #[test]
    fn missing_group_directory_is_absent() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let store = GroupFileStore::new(dir.path().join("missing"), DEFAULT_SUITE_NAME);

        assert_eq!(store.read_string(NEXT_TRIPS_KEY), None);
    }

    #[test]
    fn missing_key_is_absent() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        write_suite_file(dir.path(), DEFAULT_SUITE_NAME, r#"{"other": "x"}"#);

        let store = GroupFileStore::new(dir.path(), DEFAULT_SUITE_NAME);

        assert_eq!(store.read_string(NEXT_TRIPS_KEY), None);
    }

    #[test]
    fn corrupt_or_non_object_suite_is_absent() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let store = GroupFileStore::new(dir.path(), DEFAULT_SUITE_NAME);

        write_suite_file(dir.path(), DEFAULT_SUITE_NAME, "{\"nextTrips\": ");
        assert_eq!(store.read_string(NEXT_TRIPS_KEY), None);

        write_suite_file(dir.path(), DEFAULT_SUITE_NAME, r#"["nextTrips"]"#);
        assert_eq!(store.read_string(NEXT_TRIPS_KEY), None);
    }

    #[test]
    fn non_string_value_is_absent() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        write_suite_file(
            dir.path(),
            DEFAULT_SUITE_NAME,
            &json!({ NEXT_TRIPS_KEY: [{"id": "1"}] }).to_string(),
        );

        let store = GroupFileStore::new(dir.path(), DEFAULT_SUITE_NAME);

        assert_eq!(store.read_string(NEXT_TRIPS_KEY), None);
    }

    #[test]
    fn observes_external_rewrites_between_reads() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let store = GroupFileStore::new(dir.path(), DEFAULT_SUITE_NAME);

        write_suite_file(dir.path(), DEFAULT_SUITE_NAME, r#"{"nextTrips": "old"}"#);
        assert_eq!(store.read_string(NEXT_TRIPS_KEY), Some("old".to_string()));

        write_suite_file(dir.path(), DEFAULT_SUITE_NAME, r#"{"nextTrips": "new"}"#);
        assert_eq!(store.read_string(NEXT_TRIPS_KEY), Some("new".to_string()));
    }

    #[test]
    fn in_memory_store_returns_inserted_values() {
        let store = InMemoryStore::new().with_value(NEXT_TRIPS_KEY, "[]");

        assert_eq!(store.read_string(NEXT_TRIPS_KEY), Some("[]".to_string()));
        assert_eq!(store.read_string("missing"), None);
    }
}
