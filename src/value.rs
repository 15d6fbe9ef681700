//! Typed controller values and the ambient colour context.
//!
//! Every controller holds one [Value].
//! The variant is the value's type identity, so the codec dispatches with a static match
//! instead of inspecting the shape of the payload.
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// A 2D or 3D vector. `z` is [None] for 2D values.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
}

impl Vector {
    pub const fn new2(x: f64, y: f64) -> Self {
        Self { x, y, z: None }
    }
    pub const fn new3(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z: Some(z) }
    }
}

/// An RGBA colour with 0–255 channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    pub fn red(&self) -> u8 {
        self.r
    }
    pub fn green(&self) -> u8 {
        self.g
    }
    pub fn blue(&self) -> u8 {
        self.b
    }
    pub fn alpha(&self) -> u8 {
        self.a
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    Number,
    Text,
    Bool,
    Vector,
    Color,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Number => "number",
            Self::Text => "text",
            Self::Bool => "bool",
            Self::Vector => "vector",
            Self::Color => "color",
        };
        f.write_str(s)
    }
}

/// The current value of a controller.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
    Bool(bool),
    Vector(Vector),
    Color(Color),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Number(_) => ValueKind::Number,
            Self::Text(_) => ValueKind::Text,
            Self::Bool(_) => ValueKind::Bool,
            Self::Vector(_) => ValueKind::Vector,
            Self::Color(_) => ValueKind::Color,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
    pub fn as_vector(&self) -> Option<Vector> {
        match self {
            Self::Vector(v) => Some(*v),
            _ => None,
        }
    }
    pub fn as_color(&self) -> Option<Color> {
        match self {
            Self::Color(c) => Some(*c),
            _ => None,
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}
impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}
impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}
impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}
impl From<Vector> for Value {
    fn from(v: Vector) -> Self {
        Self::Vector(v)
    }
}
impl From<Color> for Value {
    fn from(c: Color) -> Self {
        Self::Color(c)
    }
}

/// How raw channel numbers are interpreted when a colour is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    Rgb,
    Hsb,
    Hsl,
}

/// The ambient colour interpretation shared by everything that builds colours.
///
/// `max` holds the range of each of the four channels in the current mode,
/// e.g. `[360.0, 100.0, 100.0, 1.0]` for a typical HSB setup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorContext {
    mode: ColorMode,
    max: [f64; 4],
}

impl Default for ColorContext {
    fn default() -> Self {
        Self {
            mode: ColorMode::Rgb,
            max: [255.0; 4],
        }
    }
}

impl ColorContext {
    pub fn mode(&self) -> ColorMode {
        self.mode
    }
    pub fn max(&self) -> [f64; 4] {
        self.max
    }

    pub fn set_mode(&mut self, mode: ColorMode, max: [f64; 4]) {
        self.mode = mode;
        self.max = max;
    }

    /// Builds a colour from channel numbers read in the current mode.
    pub fn color(&self, c1: f64, c2: f64, c3: f64, alpha: f64) -> Color {
        let n = |v: f64, i: usize| (v / self.max[i]).clamp(0.0, 1.0);
        let (r, g, b) = match self.mode {
            ColorMode::Rgb => (n(c1, 0), n(c2, 1), n(c3, 2)),
            ColorMode::Hsb => hsb_to_rgb(n(c1, 0) * 360.0, n(c2, 1), n(c3, 2)),
            ColorMode::Hsl => hsl_to_rgb(n(c1, 0) * 360.0, n(c2, 1), n(c3, 2)),
        };
        Color::rgba(to_byte(r), to_byte(g), to_byte(b), to_byte(n(alpha, 3)))
    }

    /// Forces RGB with 0–255 ranges until the returned guard is dropped.
    ///
    /// The previous mode and ranges are put back on every exit path,
    /// including early returns and unwinding.
    pub fn scoped_rgb(&mut self) -> ScopedRgb<'_> {
        let saved = *self;
        *self = Self::default();
        ScopedRgb { ctx: self, saved }
    }
}

pub struct ScopedRgb<'c> {
    ctx: &'c mut ColorContext,
    saved: ColorContext,
}

impl<'c> Deref for ScopedRgb<'c> {
    type Target = ColorContext;
    fn deref(&self) -> &Self::Target {
        self.ctx
    }
}

impl<'c> Drop for ScopedRgb<'c> {
    fn drop(&mut self) {
        *self.ctx = self.saved;
    }
}

fn to_byte(unit: f64) -> u8 {
    (unit * 255.0).round().clamp(0.0, 255.0) as u8
}

fn hsb_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let (r, g, b) = hue_sector(h, c, x);
    let m = v - c;
    (r + m, g + m, b + m)
}

fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let (r, g, b) = hue_sector(h, c, x);
    let m = l - c / 2.0;
    (r + m, g + m, b + m)
}

fn hue_sector(h: f64, c: f64, x: f64) -> (f64, f64, f64) {
    match (h % 360.0) as u32 / 60 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    }
}
