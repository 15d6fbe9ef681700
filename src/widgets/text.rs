use super::{Randomized, Rejected, Widget};
use crate::value::{Value, ValueKind};
use rand::RngCore;

/// A free-form text box, optionally limited in length.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct TextBox {
    max_len: Option<usize>,
}

impl TextBox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }
}

impl Widget for TextBox {
    fn kind(&self) -> Option<ValueKind> {
        Some(ValueKind::Text)
    }

    fn accept(&self, value: Value) -> Result<Value, Rejected> {
        let s = value
            .as_text()
            .ok_or_else(|| Rejected::kind(ValueKind::Text, &value))?;
        match self.max_len {
            Some(max) if s.chars().count() > max => Err(Rejected::new(format!(
                "text is longer than {} characters",
                max
            ))),
            _ => Ok(value),
        }
    }

    fn randomize(&self, _current: Option<&Value>, _rng: &mut dyn RngCore) -> Randomized {
        Randomized::Unsupported
    }
}
