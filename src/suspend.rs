//! Scoped suspension of history recording.
//!
//! While a [Suspended] guard is alive, controller changes made through the
//! GUI do not produce history entries. Dropping the guard resumes recording
//! on every exit path, including `?` returns and unwinding, so recording can
//! never stay switched off by accident. Guards nest.
use crate::gui::Gui;
use std::ops::{Deref, DerefMut};

pub struct Suspended<'g, 'a> {
    gui: &'g mut Gui<'a>,
}

impl<'g, 'a> Suspended<'g, 'a> {
    pub(crate) fn new(gui: &'g mut Gui<'a>) -> Self {
        gui.suspend_depth += 1;
        Self { gui }
    }
}

impl<'g, 'a> Deref for Suspended<'g, 'a> {
    type Target = Gui<'a>;
    fn deref(&self) -> &Self::Target {
        self.gui
    }
}

impl<'g, 'a> DerefMut for Suspended<'g, 'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.gui
    }
}

impl<'g, 'a> Drop for Suspended<'g, 'a> {
    fn drop(&mut self) {
        self.gui.suspend_depth -= 1;
    }
}
