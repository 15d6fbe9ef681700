//! Keyboard shortcuts for the history.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryCommand {
    Undo,
    Redo,
}

/// A key press with its modifier state, as reported by the input layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyChord {
    pub key: char,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

impl KeyChord {
    pub fn new(key: char) -> Self {
        Self {
            key,
            ctrl: false,
            meta: false,
            shift: false,
        }
    }

    pub fn ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn shift(mut self) -> Self {
        self.shift = true;
        self
    }

    /// Ctrl/Cmd+Z is undo, Ctrl/Cmd+Shift+Z is redo.
    pub fn command(&self) -> Option<HistoryCommand> {
        if !(self.ctrl || self.meta) || !self.key.eq_ignore_ascii_case(&'z') {
            return None;
        }
        Some(if self.shift {
            HistoryCommand::Redo
        } else {
            HistoryCommand::Undo
        })
    }
}
