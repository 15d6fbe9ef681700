use super::{ordered, sample, Randomized, Rejected, Widget};
use crate::value::{Value, ValueKind, Vector};
use rand::RngCore;

/// A 2D or 3D position pad with per-axis bounds.
///
/// The pad is 3D when both bounds carry a `z` component.
#[derive(Clone, Debug, PartialEq)]
pub struct VectorPad {
    min: Vector,
    max: Vector,
}

impl VectorPad {
    pub fn new(min: Vector, max: Vector) -> Self {
        let (x0, x1) = ordered(min.x, max.x);
        let (y0, y1) = ordered(min.y, max.y);
        let (z0, z1) = match (min.z, max.z) {
            (Some(a), Some(b)) => {
                let (a, b) = ordered(a, b);
                (Some(a), Some(b))
            }
            _ => (None, None),
        };
        Self {
            min: Vector { x: x0, y: y0, z: z0 },
            max: Vector { x: x1, y: y1, z: z1 },
        }
    }

    pub fn is_3d(&self) -> bool {
        self.min.z.is_some()
    }
}

impl Widget for VectorPad {
    fn kind(&self) -> Option<ValueKind> {
        Some(ValueKind::Vector)
    }

    fn accept(&self, value: Value) -> Result<Value, Rejected> {
        let v = value
            .as_vector()
            .ok_or_else(|| Rejected::kind(ValueKind::Vector, &value))?;
        if v.z.is_some() != self.is_3d() {
            return Err(Rejected::new(if self.is_3d() {
                "expected a 3D vector"
            } else {
                "expected a 2D vector"
            }));
        }
        let inside = |a: f64, lo: f64, hi: f64| (lo..=hi).contains(&a);
        let z_inside = match (v.z, self.min.z, self.max.z) {
            (Some(z), Some(lo), Some(hi)) => inside(z, lo, hi),
            _ => true,
        };
        if !inside(v.x, self.min.x, self.max.x) || !inside(v.y, self.min.y, self.max.y) || !z_inside
        {
            return Err(Rejected::new(format!("{:?} is outside the pad", v)));
        }
        Ok(value)
    }

    fn randomize(&self, _current: Option<&Value>, rng: &mut dyn RngCore) -> Randomized {
        let (Some(x), Some(y)) = (
            sample(rng, self.min.x, self.max.x),
            sample(rng, self.min.y, self.max.y),
        ) else {
            return Randomized::Unsupported;
        };
        let z = match (self.min.z, self.max.z) {
            (Some(lo), Some(hi)) => match sample(rng, lo, hi) {
                Some(z) => Some(z),
                None => return Randomized::Unsupported,
            },
            _ => None,
        };
        Randomized::Value(Value::Vector(Vector { x, y, z }))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn dimension_must_match() {
        let pad = VectorPad::new(Vector::new2(-1.0, -1.0), Vector::new2(1.0, 1.0));
        assert!(pad.accept(Value::Vector(Vector::new2(0.5, -0.5))).is_ok());
        assert!(pad.accept(Value::Vector(Vector::new3(0.5, -0.5, 0.0))).is_err());
        assert!(pad.accept(Value::Vector(Vector::new2(1.5, 0.0))).is_err());
    }

    #[test]
    fn randomize_3d_within_bounds() {
        let pad = VectorPad::new(Vector::new3(0.0, 0.0, -2.0), Vector::new3(1.0, 1.0, 2.0));
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..50 {
            let Randomized::Value(v) = pad.randomize(None, &mut rng) else {
                panic!("pad must randomize to a value");
            };
            assert!(pad.accept(v).is_ok());
        }
    }

    #[test]
    fn unbounded_axis_cannot_randomize() {
        let pad = VectorPad::new(
            Vector::new3(0.0, 0.0, f64::NEG_INFINITY),
            Vector::new3(1.0, 1.0, 0.0),
        );
        let mut rng = StdRng::seed_from_u64(9);
        assert_eq!(Randomized::Unsupported, pad.randomize(None, &mut rng));
    }
}
