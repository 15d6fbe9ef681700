//! Durable storage for the latest snapshot.
//!
//! A store keeps a single JSON string under a fixed key, the way browser
//! local storage would. Writes are best-effort: the history logs failures and
//! carries on, since losing durability is less severe than losing the undo stack.
use crate::error::{GuiError, GuiResult};
use std::cell::RefCell;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Key the latest snapshot is stored under.
pub const STORAGE_KEY: &str = "sketch-history";

/// Stored text this short or shorter (an empty JSON object) counts as nothing stored.
pub const MIN_STORED_LEN: usize = 2;

pub trait SnapshotStore {
    fn load(&self) -> GuiResult<Option<String>>;
    fn store(&mut self, json: &str) -> GuiResult<()>;
}

/// In-memory store. Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(json: impl Into<String>) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(json.into()))),
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> GuiResult<Option<String>> {
        Ok(self.contents())
    }

    fn store(&mut self, json: &str) -> GuiResult<()> {
        *self.slot.borrow_mut() = Some(json.to_string());
        Ok(())
    }
}

/// A store backed by one file, `<dir>/<key>.json`.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self::with_key(dir, STORAGE_KEY)
    }

    pub fn with_key(dir: impl AsRef<Path>, key: &str) -> Self {
        Self {
            path: dir.as_ref().join(format!("{}.json", key)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for FileStore {
    fn load(&self) -> GuiResult<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn store(&mut self, json: &str) -> GuiResult<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(&self.path, json)
            .map_err(|e| GuiError::storage(format!("{}: {}", self.path.display(), e)))
    }
}

/// Whether stored text carries anything worth restoring.
pub(crate) fn is_meaningful(stored: &str) -> bool {
    stored.trim().len() > MIN_STORED_LEN
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn memory_store_clones_share_contents() {
        let store = MemoryStore::new();
        let mut writer = store.clone();
        assert_eq!(None, store.load().unwrap());
        writer.store("{\"g\":{}}").unwrap();
        assert_eq!(Some("{\"g\":{}}".to_string()), store.contents());
    }

    #[test]
    fn file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested"));
        assert_eq!(None, store.load().unwrap());

        store.store("{\"g\":{}}").unwrap();
        assert_eq!(Some("{\"g\":{}}".to_string()), store.load().unwrap());
        assert!(store.path().ends_with("sketch-history.json"));
    }

    #[test]
    fn trivial_contents_are_ignored() {
        assert!(!is_meaningful(""));
        assert!(!is_meaningful(" {} "));
        assert!(is_meaningful("{\"g\":{}}"));
    }
}
