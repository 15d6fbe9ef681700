//! Lossless mapping between live [Value]s and JSON-safe tagged records.
//!
//! The wire shape is `{ "type": "Scalar" | "Vector" | "Color", "value": <payload> }`.
use crate::error::{GuiError, GuiResult};
use crate::value::{Color, ColorContext, Value, Vector};
use serde::{Deserialize, Serialize};

/// Payload of a `Scalar` record; the raw JSON number, string or boolean.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(f64),
    Text(String),
    Bool(bool),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SerializedKind {
    Scalar,
    Vector,
    Color,
}

/// A serialized controller value.
///
/// Records with an unrecognized `type` never deserialize; they surface as
/// [GuiError::MalformedSnapshot] through [SerializedValue::from_json].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum SerializedValue {
    Scalar(Scalar),
    Vector(Vector),
    Color(Color),
}

impl SerializedValue {
    pub fn kind(&self) -> SerializedKind {
        match self {
            Self::Scalar(_) => SerializedKind::Scalar,
            Self::Vector(_) => SerializedKind::Vector,
            Self::Color(_) => SerializedKind::Color,
        }
    }

    pub fn from_json(json: serde_json::Value) -> GuiResult<Self> {
        serde_json::from_value(json).map_err(|e| GuiError::malformed(e.to_string()))
    }

    pub fn from_json_str(json: &str) -> GuiResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

pub fn serialize(value: &Value) -> SerializedValue {
    match value {
        Value::Number(n) => SerializedValue::Scalar(Scalar::Number(*n)),
        Value::Text(s) => SerializedValue::Scalar(Scalar::Text(s.clone())),
        Value::Bool(b) => SerializedValue::Scalar(Scalar::Bool(*b)),
        Value::Vector(v) => SerializedValue::Vector(*v),
        Value::Color(c) => SerializedValue::Color(*c),
    }
}

/// Rebuilds a live value.
///
/// Colours are rebuilt under a forced RGB context so that whatever mode is
/// active in `colors` cannot reinterpret the stored channels; the ambient
/// mode is left as it was when this returns.
pub fn deserialize(serialized: &SerializedValue, colors: &mut ColorContext) -> Value {
    match serialized {
        SerializedValue::Scalar(Scalar::Number(n)) => Value::Number(*n),
        SerializedValue::Scalar(Scalar::Text(s)) => Value::Text(s.clone()),
        SerializedValue::Scalar(Scalar::Bool(b)) => Value::Bool(*b),
        SerializedValue::Vector(v) => Value::Vector(*v),
        SerializedValue::Color(c) => {
            let rgb = colors.scoped_rgb();
            Value::Color(rgb.color(c.r as f64, c.g as f64, c.b as f64, c.a as f64))
        }
    }
}
