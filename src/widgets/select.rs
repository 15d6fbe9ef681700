use super::{Randomized, Rejected, Widget};
use crate::value::{Value, ValueKind};
use rand::seq::SliceRandom;
use rand::RngCore;

/// A drop-down list of text options.
#[derive(Clone, Debug, PartialEq)]
pub struct Select {
    options: Vec<String>,
}

impl Select {
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }
}

impl Widget for Select {
    fn kind(&self) -> Option<ValueKind> {
        Some(ValueKind::Text)
    }

    fn accept(&self, value: Value) -> Result<Value, Rejected> {
        let s = value
            .as_text()
            .ok_or_else(|| Rejected::kind(ValueKind::Text, &value))?;
        if !self.options.iter().any(|o| o == s) {
            return Err(Rejected::new(format!("'{}' is not one of {:?}", s, self.options)));
        }
        Ok(value)
    }

    fn randomize(&self, _current: Option<&Value>, rng: &mut dyn RngCore) -> Randomized {
        match self.options.choose(rng) {
            Some(o) => Randomized::Value(Value::Text(o.clone())),
            None => Randomized::Unsupported,
        }
    }
}
