//! Named, user-editable values.
//!
//! Every mutation of a controller's value goes through [Controller::set_value],
//! which validates against the widget's domain, stores the value, notifies the
//! value callback and finally reports whether the change should be recorded.
//! Restoring from a snapshot goes through [Controller::restore_serialized]
//! instead, which has no way to ask for a history save.
use crate::codec::{self, SerializedValue};
use crate::error::{GuiError, GuiResult};
use crate::value::{ColorContext, Value, ValueKind};
use crate::widgets::{Randomized, Widget};
use rand::RngCore;

/// Called with the controller name and its new value after every change.
pub type ValueCallback<'a> = Box<dyn FnMut(&str, &Value) + 'a>;

/// Whether a change asks the history for a save.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Recording {
    Save,
    Skip,
}

/// A builder to create a [Controller].
pub struct ControllerBuilder<'a> {
    name: String,
    widget: Box<dyn Widget + 'a>,
    default_value: Option<Value>,
    updates_history: bool,
    randomizable: bool,
    die_active: bool,
    on_change: Option<ValueCallback<'a>>,
}

impl<'a> ControllerBuilder<'a> {
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Set `false` for transient actions (e.g. copy to clipboard) that
    /// must never produce a history entry.
    pub fn updates_history(mut self, updates_history: bool) -> Self {
        self.updates_history = updates_history;
        self
    }

    /// Makes the controller eligible for randomization, with its indicator
    /// initially active.
    pub fn randomizable(mut self, randomizable: bool) -> Self {
        self.randomizable = randomizable;
        self
    }

    pub fn die_active(mut self, active: bool) -> Self {
        self.die_active = active;
        self
    }

    pub fn on_change<F>(mut self, f: F) -> Self
    where
        F: FnMut(&str, &Value) + 'a,
    {
        self.on_change = Some(Box::new(f));
        self
    }

    /// Creates the controller. The default value is checked against the widget.
    pub fn build(self) -> GuiResult<Controller<'a>> {
        let value = match self.default_value {
            Some(v) => Some(
                self.widget
                    .accept(v)
                    .map_err(|r| GuiError::invalid_option(&self.name, r.0))?,
            ),
            None => None,
        };
        Ok(Controller {
            name: self.name,
            value,
            updates_history: self.updates_history,
            die: self.randomizable.then_some(self.die_active),
            visible: true,
            widget: self.widget,
            on_change: self.on_change,
        })
    }
}

pub struct Controller<'a> {
    name: String,
    value: Option<Value>,
    updates_history: bool,
    // Some(active) when eligible for randomization.
    die: Option<bool>,
    visible: bool,
    widget: Box<dyn Widget + 'a>,
    on_change: Option<ValueCallback<'a>>,
}

impl<'a> Controller<'a> {
    pub fn builder<W: Widget + 'a>(name: impl Into<String>, widget: W) -> ControllerBuilder<'a> {
        ControllerBuilder {
            name: name.into(),
            widget: Box::new(widget),
            default_value: None,
            updates_history: true,
            randomizable: false,
            die_active: true,
            on_change: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The current value; [None] until the controller is first given one.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    pub fn kind(&self) -> Option<ValueKind> {
        self.widget.kind()
    }

    pub fn updates_history(&self) -> bool {
        self.updates_history
    }

    pub fn is_randomizable(&self) -> bool {
        self.die.is_some()
    }

    /// The randomizer indicator state, [None] for controllers that are not randomizable.
    pub fn die_active(&self) -> Option<bool> {
        self.die
    }

    /// Returns `false` when the controller is not randomizable.
    pub fn set_die_active(&mut self, active: bool) -> bool {
        match self.die.as_mut() {
            Some(d) => {
                *d = active;
                true
            }
            None => false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Validates, stores and announces a new value.
    ///
    /// A rejected value leaves the controller untouched and asks for nothing.
    /// The value callback always runs before the caller gets to save.
    pub fn set_value(&mut self, value: impl Into<Value>) -> GuiResult<Recording> {
        let value = self
            .widget
            .accept(value.into())
            .map_err(|r| GuiError::invalid_option(&self.name, r.0))?;
        self.store(value);
        Ok(self.recording())
    }

    /// Runs the primary action of a value-less controller such as a button.
    pub fn press(&mut self) -> GuiResult<Recording> {
        if self.widget.kind().is_some() {
            return Err(GuiError::invalid_option(
                &self.name,
                "only value-less controllers can be pressed",
            ));
        }
        if let Some(f) = self.on_change.as_mut() {
            f(&self.name, &Value::Bool(true));
        }
        Ok(self.recording())
    }

    /// Picks a value from the widget's own domain and sets it.
    ///
    /// Returns [None] when the widget has nothing to randomize.
    pub fn randomize(&mut self, rng: &mut dyn RngCore) -> GuiResult<Option<Recording>> {
        match self.widget.randomize(self.value.as_ref(), rng) {
            Randomized::Value(v) => self.set_value(v).map(Some),
            Randomized::Press => self.press().map(Some),
            Randomized::Unsupported => Ok(None),
        }
    }

    pub fn serialized_value(&self) -> Option<SerializedValue> {
        self.value.as_ref().map(codec::serialize)
    }

    /// Applies a serialized value without producing a history request.
    ///
    /// Returns `false` when the value equals the current one; the callback
    /// is not invoked in that case.
    pub fn restore_serialized(
        &mut self,
        serialized: &SerializedValue,
        colors: &mut ColorContext,
    ) -> GuiResult<bool> {
        let value = self.check_serialized(serialized, colors)?;
        if self.value.as_ref() == Some(&value) {
            return Ok(false);
        }
        self.store(value);
        Ok(true)
    }

    /// Checks that a serialized value would be accepted, without applying it.
    pub fn check_serialized(
        &self,
        serialized: &SerializedValue,
        colors: &mut ColorContext,
    ) -> GuiResult<Value> {
        let value = codec::deserialize(serialized, colors);
        self.widget
            .accept(value)
            .map_err(|r| GuiError::invalid_option(&self.name, r.0))
    }

    fn store(&mut self, value: Value) {
        let value = self.value.insert(value);
        if let Some(f) = self.on_change.as_mut() {
            f(&self.name, value);
        }
    }

    fn recording(&self) -> Recording {
        if self.updates_history {
            Recording::Save
        } else {
            Recording::Skip
        }
    }
}

impl<'a> std::fmt::Debug for Controller<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Controller")
            .field("name", &self.name)
            .field("value", &self.value)
            .field("updates_history", &self.updates_history)
            .field("die", &self.die)
            .field("visible", &self.visible)
            .field("widget", &self.widget)
            .finish()
    }
}
