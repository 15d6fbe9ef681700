use super::{ordered, sample, snap, Randomized, Rejected, Widget};
use crate::value::{Value, ValueKind};
use rand::RngCore;

/// A single-handle numeric slider over `[min, max]`, quantised to `step`.
#[derive(Clone, Debug, PartialEq)]
pub struct Slider {
    min: f64,
    max: f64,
    step: f64,
}

impl Slider {
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        let (min, max) = ordered(min, max);
        Self {
            min,
            max,
            step: step.max(0.0),
        }
    }

    pub fn min(&self) -> f64 {
        self.min
    }
    pub fn max(&self) -> f64 {
        self.max
    }
    pub fn step(&self) -> f64 {
        self.step
    }
}

impl Widget for Slider {
    fn kind(&self) -> Option<ValueKind> {
        Some(ValueKind::Number)
    }

    fn accept(&self, value: Value) -> Result<Value, Rejected> {
        let n = value
            .as_number()
            .ok_or_else(|| Rejected::kind(ValueKind::Number, &value))?;
        if !(self.min..=self.max).contains(&n) {
            return Err(Rejected::new(format!(
                "{} is outside [{}, {}]",
                n, self.min, self.max
            )));
        }
        Ok(Value::Number(snap(n, self.min, self.max, self.step)))
    }

    fn randomize(&self, _current: Option<&Value>, rng: &mut dyn RngCore) -> Randomized {
        match sample(rng, self.min, self.max) {
            Some(n) => Randomized::Value(Value::Number(snap(n, self.min, self.max, self.step))),
            None => Randomized::Unsupported,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn accepts_and_snaps() {
        let s = Slider::new(0.0, 10.0, 1.0);
        assert_eq!(Ok(Value::Number(7.0)), s.accept(Value::Number(7.0)));
        assert_eq!(Ok(Value::Number(7.0)), s.accept(Value::Number(6.8)));
    }

    #[test]
    fn rejects_out_of_domain() {
        let s = Slider::new(0.0, 10.0, 1.0);
        assert!(s.accept(Value::Number(10.5)).is_err());
        assert!(s.accept(Value::Number(f64::NAN)).is_err());
        assert!(s.accept(Value::from("7")).is_err());
    }

    #[test]
    fn swapped_bounds_are_ordered() {
        let s = Slider::new(10.0, 0.0, 1.0);
        assert_eq!(0.0, s.min());
        assert_eq!(10.0, s.max());
    }

    #[test]
    fn randomize_stays_on_grid() {
        let s = Slider::new(-5.0, 5.0, 0.5);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let Randomized::Value(v) = s.randomize(None, &mut rng) else {
                panic!("slider must randomize to a value");
            };
            let n = v.as_number().unwrap();
            assert!((-5.0..=5.0).contains(&n));
            assert_eq!(0.0, (n * 2.0).fract());
        }
    }

    #[test]
    fn unbounded_slider_cannot_randomize() {
        let mut rng = StdRng::seed_from_u64(7);
        let wide = Slider::new(-f64::MAX, f64::MAX, 0.0);
        assert_eq!(Randomized::Unsupported, wide.randomize(None, &mut rng));
        let open = Slider::new(0.0, f64::INFINITY, 1.0);
        assert_eq!(Randomized::Unsupported, open.randomize(None, &mut rng));
    }
}
