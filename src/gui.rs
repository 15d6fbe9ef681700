use crate::config::GuiConfig;
use crate::controller::{Controller, Recording};
use crate::error::GuiResult;
use crate::history::ChangeSet;
use crate::registry::{Registry, RestoreReport};
use crate::shortcut::{HistoryCommand, KeyChord};
use crate::snapshot::Snapshot;
use crate::storage::{self, SnapshotStore};
use crate::suspend::Suspended;
use crate::value::{ColorContext, Value};
use std::path::Path;

/// A builder to create a [Gui].
pub struct GuiBuilder<'a> {
    config: GuiConfig,
    store: Option<Box<dyn SnapshotStore + 'a>>,
}

impl<'a> GuiBuilder<'a> {
    /// Create a new builder instance for the registry stored under `registry_key`.
    pub fn new(registry_key: impl Into<String>) -> Self {
        Self::from_config(GuiConfig {
            registry_key: registry_key.into(),
            ..GuiConfig::default()
        })
    }

    pub fn from_config(config: GuiConfig) -> Self {
        Self {
            config,
            store: None,
        }
    }

    /// Set the maximum number of history entries.
    ///
    /// # Remarks
    /// `capacity=0` means no limit.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.config.capacity = capacity;
        self
    }

    /// Durable storage used for mirroring and for seeding at startup.
    pub fn store<S: SnapshotStore + 'a>(mut self, store: S) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    pub fn persist(mut self, persist: bool) -> Self {
        self.config.persist = persist;
        self
    }

    pub fn init_from_storage(mut self, init: bool) -> Self {
        self.config.init_from_storage = init;
        self
    }

    /// Create a new [Gui] with no controllers and an empty history.
    ///
    /// Register the controllers with [Gui::add], then call
    /// [Gui::restore_from_storage] to seed the history.
    pub fn build(self) -> Gui<'a> {
        let mut history = ChangeSet::new()
            .capacity(self.config.capacity)
            .mirror(self.config.persist);
        if let Some(store) = self.store {
            history = history.boxed_store(store);
        }
        Gui {
            key: self.config.registry_key,
            registry: Registry::new(),
            history,
            colors: ColorContext::default(),
            init_from_storage: self.config.init_from_storage,
            suspend_depth: 0,
        }
    }
}

/// A group of controllers together with its undo-redo history.
///
/// Every recorded controller change takes a snapshot of the whole group and
/// saves it to the history. Undo and redo restore whole snapshots without
/// recording anything.
pub struct Gui<'a> {
    key: String,
    registry: Registry<'a>,
    history: ChangeSet<'a>,
    colors: ColorContext,
    init_from_storage: bool,
    pub(crate) suspend_depth: usize,
}

impl<'a> Gui<'a> {
    pub fn registry_key(&self) -> &str {
        &self.key
    }

    pub fn registry(&self) -> &Registry<'a> {
        &self.registry
    }

    pub fn history(&self) -> &ChangeSet<'a> {
        &self.history
    }

    /// The ambient colour context, shared with whatever draws the sketch.
    pub fn colors(&self) -> &ColorContext {
        &self.colors
    }

    pub fn colors_mut(&mut self) -> &mut ColorContext {
        &mut self.colors
    }

    pub fn controller(&self, name: &str) -> Option<&Controller<'a>> {
        self.registry.get(name)
    }

    pub fn value(&self, name: &str) -> Option<&Value> {
        self.registry.get(name).and_then(Controller::value)
    }

    pub fn add(&mut self, controller: Controller<'a>) -> GuiResult<()> {
        self.registry.register(controller)
    }

    pub fn is_suspended(&self) -> bool {
        0 < self.suspend_depth
    }

    /// Stops recording until the returned guard is dropped.
    pub fn suspend(&mut self) -> Suspended<'_, 'a> {
        Suspended::new(self)
    }

    /// Sets a controller's value and records the change.
    ///
    /// # Return
    /// Whether a new history entry was created.
    pub fn set_value(&mut self, name: &str, value: impl Into<Value>) -> GuiResult<bool> {
        let recording = self.registry.expect_mut(name)?.set_value(value)?;
        self.record(recording)
    }

    /// Runs the primary action of a button.
    pub fn press(&mut self, name: &str) -> GuiResult<bool> {
        let recording = self.registry.expect_mut(name)?.press()?;
        self.record(recording)
    }

    /// Switches a controller's randomizer indicator.
    pub fn set_die_active(&mut self, name: &str, active: bool) -> GuiResult<bool> {
        let c = self.registry.expect_mut(name)?;
        if c.die_active() == Some(active) || !c.set_die_active(active) {
            return Ok(false);
        }
        let recording = if c.updates_history() {
            Recording::Save
        } else {
            Recording::Skip
        };
        self.record(recording)
    }

    pub fn set_visible(&mut self, name: &str, visible: bool) -> GuiResult<()> {
        self.registry.expect_mut(name)?.set_visible(visible);
        Ok(())
    }

    pub(crate) fn record(&mut self, recording: Recording) -> GuiResult<bool> {
        if recording == Recording::Skip || self.is_suspended() {
            return Ok(false);
        }
        self.save()
    }

    /// Saves a snapshot of the registry unless it equals the current entry.
    pub fn save(&mut self) -> GuiResult<bool> {
        let json = self.registry.snapshot().to_envelope(&self.key)?;
        Ok(self.history.save(json))
    }

    /// # Return
    /// `false` if there is nothing to undo.
    pub fn undo(&mut self) -> GuiResult<bool> {
        self.jump(-1)
    }

    /// # Return
    /// `false` if there is nothing to redo.
    pub fn redo(&mut self) -> GuiResult<bool> {
        self.jump(1)
    }

    /// Moves `count` entries through the history (negative is undo) and
    /// restores the entry reached.
    pub fn jump(&mut self, count: isize) -> GuiResult<bool> {
        if count == 0 {
            return Ok(false);
        }
        let Some(json) = self.history.jump(count).map(str::to_owned) else {
            return Ok(false);
        };
        self.restore_json(&json)?;
        Ok(true)
    }

    /// Applies a snapshot to the controllers with recording suspended.
    pub fn restore_snapshot(&mut self, snapshot: &Snapshot) -> GuiResult<RestoreReport> {
        let mut gui = self.suspend();
        let Gui {
            registry, colors, ..
        } = &mut *gui;
        registry.restore(snapshot, colors)
    }

    fn restore_json(&mut self, json: &str) -> GuiResult<RestoreReport> {
        let snapshot = Snapshot::from_envelope(&self.key, json)?;
        self.restore_snapshot(&snapshot)
    }

    /// Loads externally supplied settings as a new edit.
    ///
    /// The settings are parsed and checked against the controllers before
    /// anything is touched, so a bad file leaves both the controllers and
    /// the history as they were.
    pub fn load_from_json(&mut self, json: &str) -> GuiResult<RestoreReport> {
        let snapshot = Snapshot::from_envelope(&self.key, json)?;
        self.registry.check(&snapshot, &mut self.colors)?;
        let report = self.restore_snapshot(&snapshot)?;
        self.save()?;
        Ok(report)
    }

    /// Seeds the history at startup.
    ///
    /// A meaningful stored snapshot becomes the only history entry and is
    /// restored. Otherwise the current controller values become entry 0.
    /// If the stored snapshot cannot be used the error is returned, after
    /// entry 0 has been saved from the current values.
    ///
    /// # Return
    /// `true` if the stored snapshot was restored.
    pub fn restore_from_storage(&mut self) -> GuiResult<bool> {
        if self.init_from_storage {
            match self.adopt_stored() {
                Ok(true) => return Ok(true),
                Ok(false) => {}
                Err(e) => {
                    tracing::error!(error = %e, "stored snapshot could not be restored");
                    self.save()?;
                    return Err(e);
                }
            }
        }
        self.save()?;
        Ok(false)
    }

    fn adopt_stored(&mut self) -> GuiResult<bool> {
        let stored = match self.history.stored()? {
            Some(s) if storage::is_meaningful(&s) => s,
            _ => return Ok(false),
        };
        let snapshot = Snapshot::from_envelope(&self.key, &stored)?;
        self.registry.check(&snapshot, &mut self.colors)?;
        self.restore_snapshot(&snapshot)?;
        let json = self.registry.snapshot().to_envelope(&self.key)?;
        self.history.reset(json);
        tracing::debug!("history seeded from storage");
        Ok(true)
    }

    /// The current history entry as pretty JSON, ready to be written to a file.
    pub fn export_settings(&self) -> GuiResult<String> {
        let snapshot = match self.history.head() {
            Some(json) => Snapshot::from_envelope(&self.key, json)?,
            None => self.registry.snapshot(),
        };
        snapshot.to_envelope_pretty(&self.key)
    }

    pub fn save_settings(&self, path: impl AsRef<Path>) -> GuiResult<()> {
        std::fs::write(path, self.export_settings()?)?;
        Ok(())
    }

    pub fn load_settings(&mut self, path: impl AsRef<Path>) -> GuiResult<RestoreReport> {
        let json = std::fs::read_to_string(path)?;
        self.load_from_json(&json)
    }

    /// Runs the history command bound to `chord`, if any.
    pub fn handle_shortcut(&mut self, chord: &KeyChord) -> GuiResult<bool> {
        match chord.command() {
            Some(HistoryCommand::Undo) => self.undo(),
            Some(HistoryCommand::Redo) => self.redo(),
            None => Ok(false),
        }
    }

    pub(crate) fn registry_mut(&mut self) -> &mut Registry<'a> {
        &mut self.registry
    }
}

impl<'a> std::fmt::Debug for Gui<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gui")
            .field("key", &self.key)
            .field("registry", &self.registry)
            .field("history", &self.history)
            .field("suspend_depth", &self.suspend_depth)
            .finish()
    }
}
