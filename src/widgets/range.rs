use super::{ordered, sample, snap, Randomized, Rejected, Widget};
use crate::value::{Value, ValueKind, Vector};
use rand::RngCore;

/// A dual-handle slider. The value is a 2D vector with `x` as the low handle
/// and `y` as the high handle.
#[derive(Clone, Debug, PartialEq)]
pub struct Range {
    min: f64,
    max: f64,
    step: f64,
}

impl Range {
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        let (min, max) = ordered(min, max);
        Self {
            min,
            max,
            step: step.max(0.0),
        }
    }

    fn snap(&self, v: f64) -> f64 {
        snap(v, self.min, self.max, self.step)
    }
}

impl Widget for Range {
    fn kind(&self) -> Option<ValueKind> {
        Some(ValueKind::Vector)
    }

    fn accept(&self, value: Value) -> Result<Value, Rejected> {
        let v = value
            .as_vector()
            .ok_or_else(|| Rejected::kind(ValueKind::Vector, &value))?;
        if v.z.is_some() {
            return Err(Rejected::new("a range holds a 2D vector"));
        }
        let bounds = self.min..=self.max;
        if !bounds.contains(&v.x) || !bounds.contains(&v.y) {
            return Err(Rejected::new(format!(
                "[{}, {}] is outside [{}, {}]",
                v.x, v.y, self.min, self.max
            )));
        }
        if v.x > v.y {
            return Err(Rejected::new(format!("low {} is above high {}", v.x, v.y)));
        }
        Ok(Value::Vector(Vector::new2(self.snap(v.x), self.snap(v.y))))
    }

    // Pick a pivot, then one handle on each side of it.
    fn randomize(&self, _current: Option<&Value>, rng: &mut dyn RngCore) -> Randomized {
        let Some(pivot) = sample(rng, self.min, self.max) else {
            return Randomized::Unsupported;
        };
        let (Some(low), Some(high)) = (
            sample(rng, self.min, pivot),
            sample(rng, pivot, self.max),
        ) else {
            return Randomized::Unsupported;
        };
        Randomized::Value(Value::Vector(Vector::new2(self.snap(low), self.snap(high))))
    }
}
