use super::{Randomized, Rejected, Widget};
use crate::value::{Value, ValueKind};
use rand::{Rng, RngCore};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Toggle;

impl Widget for Toggle {
    fn kind(&self) -> Option<ValueKind> {
        Some(ValueKind::Bool)
    }

    fn accept(&self, value: Value) -> Result<Value, Rejected> {
        match value {
            Value::Bool(_) => Ok(value),
            other => Err(Rejected::kind(ValueKind::Bool, &other)),
        }
    }

    fn randomize(&self, _current: Option<&Value>, rng: &mut dyn RngCore) -> Randomized {
        Randomized::Value(Value::Bool(rng.gen_bool(0.5)))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn bools_only() {
        assert!(Toggle.accept(Value::Bool(false)).is_ok());
        assert!(Toggle.accept(Value::Number(0.0)).is_err());
    }
}
