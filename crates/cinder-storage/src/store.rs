//! Flat-file JSON document store.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::Result;

/// A directory of named JSON documents.
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Load the document `name`. A document that was never saved is
    /// `None`; one that exists but cannot be read or parsed is an error.
    pub fn load<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>> {
        let path = self.path(name);
        if !path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(&path)?;
        let value = serde_json::from_str(&text)?;
        Ok(Some(value))
    }

    /// Save `value` as the document `name`, replacing any previous
    /// version.
    pub fn save<T: Serialize>(&self, name: &str, value: &T) -> Result<()> {
        let text = serde_json::to_string_pretty(value)?;
        fs::write(self.path(name), text)?;
        tracing::debug!(document = name, "saved");
        Ok(())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StorageError;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Doc {
        items: Vec<String>,
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();

        let doc = Doc {
            items: vec!["a".to_string(), "b".to_string()],
        };
        store.save("doc", &doc).unwrap();

        let loaded: Option<Doc> = store.load("doc").unwrap();
        assert_eq!(loaded, Some(doc));
    }

    #[test]
    fn missing_document_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();

        let loaded: Option<Doc> = store.load("nothing").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn corrupt_document_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();
        std::fs::write(dir.path().join("doc.json"), "{not json").unwrap();

        let loaded: Result<Option<Doc>> = store.load("doc");
        assert!(matches!(loaded, Err(StorageError::Json(_))));
    }

    #[test]
    fn open_creates_the_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("deeper").join("still");

        let store = Store::open(&nested).unwrap();
        assert!(nested.is_dir());
        assert_eq!(store.dir(), nested.as_path());
    }

    #[test]
    fn save_replaces_the_previous_version() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();

        store
            .save("doc", &Doc { items: vec!["old".to_string()] })
            .unwrap();
        store
            .save("doc", &Doc { items: vec!["new".to_string()] })
            .unwrap();

        let loaded: Option<Doc> = store.load("doc").unwrap();
        assert_eq!(loaded.unwrap().items, vec!["new".to_string()]);
    }
}
