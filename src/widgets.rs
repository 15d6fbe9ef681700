//! Value domains of the controller types.
//!
//! A [Widget] decides which values a controller accepts and how it picks a random one.
//! Drawing the widget is left to the presentation layer; it only ever reaches the value
//! through [Controller::set_value](crate::controller::Controller::set_value).
use crate::value::{Value, ValueKind};
use rand::{Rng, RngCore};

mod button;
mod color;
mod range;
mod select;
mod slider;
mod text;
mod toggle;
mod vector;

pub use button::Button;
pub use color::ColorPicker;
pub use range::Range;
pub use select::Select;
pub use slider::Slider;
pub use text::TextBox;
pub use toggle::Toggle;
pub use vector::VectorPad;

/// Why a widget refused a value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rejected(pub String);

impl Rejected {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }

    pub(crate) fn kind(expected: ValueKind, found: &Value) -> Self {
        Self(format!("expected a {} value, got a {}", expected, found.kind()))
    }
}

impl std::fmt::Display for Rejected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of asking a widget for a random value.
#[derive(Clone, Debug, PartialEq)]
pub enum Randomized {
    Value(Value),
    /// The widget has no value domain; randomizing it means pressing it.
    Press,
    Unsupported,
}

pub trait Widget: std::fmt::Debug {
    /// The kind of value this widget holds, or [None] for value-less widgets.
    fn kind(&self) -> Option<ValueKind>;

    /// Validates `value` and returns it normalised to the widget's domain
    /// (e.g. snapped to a slider step).
    fn accept(&self, value: Value) -> Result<Value, Rejected>;

    fn randomize(&self, current: Option<&Value>, rng: &mut dyn RngCore) -> Randomized;
}

fn snap(v: f64, min: f64, max: f64, step: f64) -> f64 {
    if step <= 0.0 {
        return v;
    }
    let steps = ((v - min) / step).round();
    (min + steps * step).clamp(min, max)
}

/// Uniform sample from `[lo, hi]`, or [None] when the interval has no finite width.
fn sample(rng: &mut dyn RngCore, lo: f64, hi: f64) -> Option<f64> {
    if !(lo.is_finite() && hi.is_finite() && (hi - lo).is_finite()) {
        return None;
    }
    Some(rng.gen_range(lo..=hi))
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
