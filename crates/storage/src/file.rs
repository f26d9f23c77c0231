use std::{
    fs,
    io::ErrorKind,
    path::PathBuf,
};

use eyre::{Context as _, Result};
use log::debug;

use crate::kv::KeyValueStore;

const EXTENSION: &str = "json";

/// One file per key under a data directory.
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore { dir: dir.into() }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", key, EXTENSION))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path(key);
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err).with_context(|| format!("Failed to read {}", path.display())),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create {}", self.dir.display()))?;
        let path = self.path(key);
        // replaced atomically via rename
        let tmp = self.dir.join(format!(".{}.{}.tmp", key, EXTENSION));
        fs::write(&tmp, value).with_context(|| format!("Failed to write {}", tmp.display()))?;
        fs::rename(&tmp, &path)
            .with_context(|| format!("Failed to replace {}", path.display()))?;
        debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err).with_context(|| format!("Failed to remove {}", path.display())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert_eq!(store.get("nothing").unwrap(), None);
        store.remove("nothing").unwrap();
    }

    #[test]
    fn test_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested"));
        store.set("treningownik-days", "[1]").unwrap();
        store.set("treningownik-days", "[2]").unwrap();
        assert_eq!(store.get("treningownik-days").unwrap().as_deref(), Some("[2]"));
        assert!(dir.path().join("nested/treningownik-days.json").exists());
        assert!(!dir.path().join("nested/.treningownik-days.json.tmp").exists());
    }

    #[test]
    fn test_keys_are_independent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        store.remove("a").unwrap();
        assert_eq!(store.get("a").unwrap(), None);
        assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));
    }
}
