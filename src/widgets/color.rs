use super::{Randomized, Rejected, Widget};
use crate::value::{Color, Value, ValueKind};
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

/// A colour picker, optionally restricted to a palette when randomized.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ColorPicker {
    palette: Vec<Color>,
}

impl ColorPicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_palette(palette: Vec<Color>) -> Self {
        Self { palette }
    }
}

impl Widget for ColorPicker {
    fn kind(&self) -> Option<ValueKind> {
        Some(ValueKind::Color)
    }

    fn accept(&self, value: Value) -> Result<Value, Rejected> {
        match value {
            Value::Color(_) => Ok(value),
            other => Err(Rejected::kind(ValueKind::Color, &other)),
        }
    }

    fn randomize(&self, _current: Option<&Value>, rng: &mut dyn RngCore) -> Randomized {
        let c = match self.palette.choose(rng) {
            Some(c) => *c,
            None => Color::rgb(rng.gen(), rng.gen(), rng.gen()),
        };
        Randomized::Value(Value::Color(c))
    }
}
