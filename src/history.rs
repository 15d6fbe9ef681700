use crate::error::GuiResult;
use crate::storage::SnapshotStore;
use std::collections::VecDeque;

/// Linear undo-redo history of serialized whole-GUI snapshots.
///
/// The history is a sequence of snapshot strings plus a cursor pointing at
/// the current one. A cursor of [None] means nothing has been saved yet.
/// ```txt
/// entries:  s0 -- s1 -- s2 -- s3
///                       ^
///                     cursor     (undo -> s1, redo -> s3)
/// ```
/// Saving while the cursor is not at the end discards everything after it,
/// so there is never more than one line of history.
///
/// Consecutive entries are never identical: saving the snapshot that is
/// already current does nothing.
pub struct ChangeSet<'a> {
    entries: VecDeque<String>,
    cursor: Option<usize>,
    capacity: Option<usize>,
    store: Option<Box<dyn SnapshotStore + 'a>>,
    mirror: bool,
}

impl<'a> ChangeSet<'a> {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
            cursor: None,
            capacity: None,
            store: None,
            mirror: true,
        }
    }

    /// Set the maximum number of entries kept in the history.
    ///
    /// When more entries are saved than the capacity, the oldest one is removed.
    /// `capacity=0` means no limit.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = (0 < capacity).then_some(capacity);
        self
    }

    /// Attaches durable storage. By default the current entry is mirrored to it
    /// after every change of the cursor.
    pub fn store<S: SnapshotStore + 'a>(self, store: S) -> Self {
        self.boxed_store(Box::new(store))
    }

    pub fn boxed_store(mut self, store: Box<dyn SnapshotStore + 'a>) -> Self {
        self.store = Some(store);
        self
    }

    /// Set `false` to only read from the store, never write to it.
    pub fn mirror(mut self, mirror: bool) -> Self {
        self.mirror = mirror;
        self
    }

    pub fn max_len(&self) -> Option<usize> {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// The entry at the cursor.
    pub fn head(&self) -> Option<&str> {
        self.cursor.and_then(|i| self.get(i))
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// Returns the number of entries older than the current one.
    pub fn undoable_count(&self) -> usize {
        self.cursor.unwrap_or(0)
    }

    /// Returns the number of entries newer than the current one.
    pub fn redoable_count(&self) -> usize {
        match self.cursor {
            Some(i) => self.entries.len() - 1 - i,
            None => 0,
        }
    }

    /// Appends `json` as the new current entry.
    ///
    /// # Return
    /// `false` if `json` equals the current entry; nothing changes in that case.
    pub fn save(&mut self, json: String) -> bool {
        if self.head() == Some(json.as_str()) {
            return false;
        }

        let keep = self.cursor.map_or(0, |i| i + 1);
        self.entries.truncate(keep);
        self.entries.push_back(json);
        let mut cursor = self.entries.len() - 1;

        if let Some(capacity) = self.capacity {
            while capacity < self.entries.len() {
                self.entries.pop_front();
                cursor -= 1;
            }
        }

        self.cursor = Some(cursor);
        tracing::debug!(cursor, len = self.entries.len(), "history saved");
        self.write_through();
        true
    }

    /// Replaces the whole history with a single entry.
    pub fn reset(&mut self, json: String) {
        self.entries.clear();
        self.entries.push_back(json);
        self.cursor = Some(0);
        self.write_through();
    }

    /// Moves to the previous entry.
    /// Same as `self.undo_multi(1)`.
    ///
    /// # Return
    /// [None] if there is no older entry, otherwise the entry to restore.
    pub fn undo(&mut self) -> Option<&str> {
        self.undo_multi(1)
    }

    /// Undo multiple steps.
    ///
    /// # Return
    /// [None] if the target is out of the history, otherwise the entry to restore.
    /// If `count=0`, this method does nothing and returns the current entry.
    pub fn undo_multi(&mut self, count: usize) -> Option<&str> {
        if 0 == count {
            return self.head();
        }
        if self.undoable_count() < count {
            return None;
        }
        self.move_to(self.undoable_count() - count)
    }

    /// Moves to the next entry.
    /// Same as `self.redo_multi(1)`.
    pub fn redo(&mut self) -> Option<&str> {
        self.redo_multi(1)
    }

    /// Redo multiple steps.
    ///
    /// # Return
    /// [None] if the target is out of the history, otherwise the entry to restore.
    /// If `count=0`, this method does nothing and returns the current entry.
    pub fn redo_multi(&mut self, count: usize) -> Option<&str> {
        if 0 == count {
            return self.head();
        }
        if self.redoable_count() < count {
            return None;
        }
        self.move_to(self.undoable_count() + count)
    }

    /// Undo-redo bidirectionally.
    ///
    /// - `count < 0` => `self.undo_multi(-count)`.
    /// - `0 <= count` => `self.redo_multi(count)`.
    pub fn jump(&mut self, count: isize) -> Option<&str> {
        if count < 0 {
            self.undo_multi(count.unsigned_abs())
        } else {
            self.redo_multi(count.unsigned_abs())
        }
    }

    /// Reads whatever the store currently holds.
    pub fn stored(&self) -> GuiResult<Option<String>> {
        match self.store.as_ref() {
            Some(store) => store.load(),
            None => Ok(None),
        }
    }

    pub fn has_store(&self) -> bool {
        self.store.is_some()
    }

    fn move_to(&mut self, target: usize) -> Option<&str> {
        debug_assert!(target < self.entries.len());
        self.cursor = Some(target);
        tracing::debug!(cursor = target, len = self.entries.len(), "history moved");
        self.write_through();
        self.head()
    }

    fn write_through(&mut self) {
        let (true, Some(i)) = (self.mirror, self.cursor) else {
            return;
        };
        let (Some(store), Some(json)) = (self.store.as_mut(), self.entries.get(i)) else {
            return;
        };
        if let Err(e) = store.store(json) {
            tracing::warn!(error = %e, "failed to mirror snapshot to storage");
        }
    }
}

impl<'a> Default for ChangeSet<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> std::fmt::Debug for ChangeSet<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeSet")
            .field("len", &self.entries.len())
            .field("cursor", &self.cursor)
            .field("capacity", &self.capacity)
            .field("store", &self.store.is_some())
            .field("mirror", &self.mirror)
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::GuiError;
    use crate::storage::MemoryStore;

    fn filled(n: usize) -> ChangeSet<'static> {
        let mut h = ChangeSet::new();
        for i in 0..n {
            assert!(h.save(format!("s{}", i)));
        }
        h
    }

    #[test]
    fn starts_empty() {
        let mut h = ChangeSet::new();
        assert_eq!(None, h.cursor());
        assert_eq!(0, h.len());
        assert!(h.undo().is_none());
        assert!(h.redo().is_none());
        assert!(h.head().is_none());
    }

    #[test]
    fn duplicate_save_is_noop() {
        let mut h = filled(2);
        assert!(!h.save("s1".to_string()));
        assert_eq!(2, h.len());
        assert_eq!(Some(1), h.cursor());
    }

    #[test]
    fn undo() {
        let mut h = filled(4);
        assert_eq!(Some("s2"), h.undo());
        assert_eq!(Some("s1"), h.undo());
        assert_eq!(Some("s0"), h.undo());
        assert!(h.undo().is_none());
        assert_eq!(Some(0), h.cursor());
    }

    #[test]
    fn redo() {
        let mut h = filled(4);
        assert!(h.redo().is_none());
        h.undo_multi(3).unwrap();
        assert_eq!(Some("s1"), h.redo());
        assert_eq!(Some("s2"), h.redo());
        assert_eq!(Some("s3"), h.redo());
        assert!(h.redo().is_none());
    }

    #[test]
    fn save_after_undo_drops_redo_tail() {
        let mut h = filled(3);
        h.undo().unwrap();
        assert!(h.save("t2".to_string()));
        assert_eq!(3, h.len());
        assert_eq!(Some("t2"), h.head());
        assert!(h.redo().is_none());
        assert_eq!(Some("s1"), h.undo());
    }

    #[test]
    fn save_equal_to_undone_head_is_noop() {
        let mut h = filled(3);
        h.undo().unwrap();
        assert!(!h.save("s1".to_string()));
        // The redo tail survives a no-op save.
        assert_eq!(Some("s2"), h.redo());
    }

    #[test]
    fn jump_and_multi() {
        let mut h = filled(6);
        assert_eq!(Some("s4"), h.jump(-1));
        assert_eq!(Some("s2"), h.jump(-2));
        assert!(h.jump(-3).is_none());
        assert_eq!(Some("s0"), h.undo_multi(2));
        assert_eq!(Some("s3"), h.redo_multi(3));
        assert!(h.redo_multi(3).is_none());
        assert_eq!(Some("s5"), h.jump(2));
        assert_eq!(Some("s5"), h.jump(0));
        assert_eq!(5, h.undoable_count());
        assert_eq!(0, h.redoable_count());
    }

    #[test]
    fn capacity_evicts_oldest() {
        let mut h = ChangeSet::new().capacity(3);
        for i in 0..5 {
            h.save(format!("s{}", i));
        }
        assert_eq!(3, h.len());
        assert_eq!(Some(2), h.cursor());
        assert_eq!(Some("s2"), h.get(0));
        assert_eq!(Some("s3"), h.undo());
        assert_eq!(Some("s2"), h.undo());
        assert!(h.undo().is_none());
    }

    #[test]
    fn zero_capacity_is_unlimited() {
        let h = ChangeSet::new().capacity(0);
        assert_eq!(None, h.max_len());
    }

    #[test]
    fn mirrors_current_entry() {
        let store = MemoryStore::new();
        let mut h = ChangeSet::new().store(store.clone());
        h.save("s0".to_string());
        h.save("s1".to_string());
        assert_eq!(Some("s1".to_string()), store.contents());
        h.undo().unwrap();
        assert_eq!(Some("s0".to_string()), store.contents());
        assert_eq!(Some("s0".to_string()), h.stored().unwrap());
    }

    struct FullStore;

    impl SnapshotStore for FullStore {
        fn load(&self) -> GuiResult<Option<String>> {
            Ok(None)
        }
        fn store(&mut self, _json: &str) -> GuiResult<()> {
            Err(GuiError::storage("quota exceeded"))
        }
    }

    #[test]
    fn read_only_store_is_not_written() {
        let store = MemoryStore::with_contents("old");
        let mut h = ChangeSet::new().store(store.clone()).mirror(false);
        h.save("s0".to_string());
        assert_eq!(Some("old".to_string()), store.contents());
        assert_eq!(Some("old".to_string()), h.stored().unwrap());
    }

    #[test]
    fn storage_failure_keeps_history() {
        let mut h = ChangeSet::new().store(FullStore);
        assert!(h.save("s0".to_string()));
        assert!(h.save("s1".to_string()));
        assert_eq!(2, h.len());
        assert_eq!(Some("s0"), h.undo());
    }

    #[test]
    fn reset_keeps_single_entry() {
        let mut h = filled(3);
        h.reset("stored".to_string());
        assert_eq!(1, h.len());
        assert_eq!(Some(0), h.cursor());
        assert_eq!(Some("stored"), h.head());
    }

    #[test]
    fn reset_is_mirrored() {
        let store = MemoryStore::with_contents("stale");
        let mut h = ChangeSet::new().store(store.clone());
        h.reset("canonical".to_string());
        assert_eq!(Some("canonical".to_string()), store.contents());

        let store = MemoryStore::with_contents("stale");
        let mut h = ChangeSet::new().store(store.clone()).mirror(false);
        h.reset("canonical".to_string());
        assert_eq!(Some("stale".to_string()), store.contents());
    }
}
