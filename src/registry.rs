use crate::controller::Controller;
use crate::error::{GuiError, GuiResult};
use crate::snapshot::{Snapshot, SnapshotEntry};
use crate::value::ColorContext;
use std::collections::HashMap;

/// What a [Registry::restore] did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RestoreReport {
    /// Controllers whose value changed.
    pub changed: usize,
    /// Snapshot entries naming controllers that no longer exist.
    pub missing: Vec<String>,
}

/// An ordered group of uniquely named controllers that is snapshotted and
/// restored as a unit.
#[derive(Debug, Default)]
pub struct Registry<'a> {
    controllers: Vec<Controller<'a>>,
    index: HashMap<String, usize>,
}

impl<'a> Registry<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, controller: Controller<'a>) -> GuiResult<()> {
        if self.index.contains_key(controller.name()) {
            return Err(GuiError::DuplicateName(controller.name().to_string()));
        }
        self.index
            .insert(controller.name().to_string(), self.controllers.len());
        self.controllers.push(controller);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Controller<'a>> {
        self.index.get(name).map(|&i| &self.controllers[i])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Controller<'a>> {
        self.index.get(name).map(|&i| &mut self.controllers[i])
    }

    pub(crate) fn expect_mut(&mut self, name: &str) -> GuiResult<&mut Controller<'a>> {
        self.get_mut(name)
            .ok_or_else(|| GuiError::UnknownController(name.to_string()))
    }

    /// Controllers in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Controller<'a>> {
        self.controllers.iter()
    }

    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }

    /// Captures every controller that has a value, in registration order.
    pub fn snapshot(&self) -> Snapshot {
        let mut snapshot = Snapshot::new();
        for c in &self.controllers {
            if let Some(value) = c.serialized_value() {
                snapshot.insert(
                    c.name(),
                    SnapshotEntry {
                        value,
                        is_die_active: c.die_active(),
                    },
                );
            }
        }
        snapshot
    }

    /// Checks that every entry naming a present controller would be accepted.
    /// Nothing is modified.
    pub fn check(&self, snapshot: &Snapshot, colors: &mut ColorContext) -> GuiResult<()> {
        for (name, entry) in snapshot.iter() {
            if let Some(c) = self.get(name) {
                c.check_serialized(&entry.value, colors)?;
            }
        }
        Ok(())
    }

    /// Applies a snapshot to the controllers, by name.
    ///
    /// Entries for unknown controllers are skipped so that snapshots taken
    /// with an older or newer set of controllers still restore.
    /// Restoring never asks for a history save.
    pub fn restore(
        &mut self,
        snapshot: &Snapshot,
        colors: &mut ColorContext,
    ) -> GuiResult<RestoreReport> {
        let mut report = RestoreReport::default();
        for (name, entry) in snapshot.iter() {
            let Some(c) = self.get_mut(name) else {
                tracing::warn!(controller = name, "snapshot names an unknown controller");
                report.missing.push(name.to_string());
                continue;
            };
            if c.restore_serialized(&entry.value, colors)? {
                report.changed += 1;
            }
            if let Some(active) = entry.is_die_active {
                c.set_die_active(active);
            }
        }
        Ok(report)
    }
}
