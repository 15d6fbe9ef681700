use super::{Randomized, Rejected, Widget};
use crate::value::{Value, ValueKind};
use rand::RngCore;

/// A push button. It holds no value, so it never appears in snapshots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Button;

impl Widget for Button {
    fn kind(&self) -> Option<ValueKind> {
        None
    }

    fn accept(&self, _value: Value) -> Result<Value, Rejected> {
        Err(Rejected::new("a button holds no value"))
    }

    fn randomize(&self, _current: Option<&Value>, _rng: &mut dyn RngCore) -> Randomized {
        Randomized::Press
    }
}
