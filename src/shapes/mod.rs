//! Shape primitives - points, colors and the two shape generators
//!
//! - polygon: regular n-gon vertices and the polygon renderer
//! - lotus: radially symmetric Bezier petals around a center
//!
//! Every shape draws itself onto an explicit [`Surface`]; nothing here
//! touches a global drawing context.

pub mod lotus;
pub mod polygon;

pub use lotus::*;
pub use polygon::*;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::canvas::{Path, Surface};

/// A point in canvas coordinates (origin top-left, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Center of a square canvas with the given side length
    pub fn canvas_center(size: u32) -> Self {
        let half = f64::from(size) / 2.0;
        Self::new(half, half)
    }
}

#[cfg(test)]
impl Point {
    pub(crate) fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Direction of `other` as seen from `self`, in degrees
    pub(crate) fn angle_to(self, other: Point) -> f64 {
        (other.y - self.y).atan2(other.x - self.x).to_degrees()
    }
}

/// RGBA color with fractional channels
///
/// Configured as `[r, g, b]` or `[r, g, b, a]`; alpha defaults to opaque.
/// Channels may leave [0, 1] while a ramp is being computed, they are
/// clamped when handed to the rasterizer (see [`Color::clamped`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color with only `channel` set to `value`
    pub fn single(channel: ColorChannel, value: f64) -> Self {
        Self::BLACK.with_channel(channel, value)
    }

    pub fn channel(&self, channel: ColorChannel) -> f64 {
        [self.r, self.g, self.b][channel.index()]
    }

    pub fn with_channel(mut self, channel: ColorChannel, value: f64) -> Self {
        match channel {
            ColorChannel::Red => self.r = value,
            ColorChannel::Green => self.g = value,
            ColorChannel::Blue => self.b = value,
        }
        self
    }

    /// Every channel clamped into [0, 1]; NaN becomes 0
    pub fn clamped(self) -> Self {
        let clamp = |v: f64| if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) };
        Self::rgba(clamp(self.r), clamp(self.g), clamp(self.b), clamp(self.a))
    }

    /// Clamped channels as 8-bit values `[r, g, b, a]`
    pub fn to_rgba8(self) -> [u8; 4] {
        let c = self.clamped();
        let byte = |v: f64| (v * 255.0).round() as u8;
        [byte(c.r), byte(c.g), byte(c.b), byte(c.a)]
    }
}

impl TryFrom<Vec<f64>> for Color {
    type Error = String;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        match values.as_slice() {
            [r, g, b] => Ok(Color::rgb(*r, *g, *b)),
            [r, g, b, a] => Ok(Color::rgba(*r, *g, *b, *a)),
            other => Err(format!(
                "color needs 3 or 4 components, got {}",
                other.len()
            )),
        }
    }
}

impl From<Color> for Vec<f64> {
    fn from(c: Color) -> Self {
        if c.a == 1.0 {
            vec![c.r, c.g, c.b]
        } else {
            vec![c.r, c.g, c.b, c.a]
        }
    }
}

/// Which color channel a ramp or a fixed-channel color drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ColorChannel {
    Red,
    Green,
    Blue,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown color channel '{0}' (expected red, green or blue)")]
pub struct ParseChannelError(pub String);

impl ColorChannel {
    pub const ALL: [ColorChannel; 3] = [ColorChannel::Red, ColorChannel::Green, ColorChannel::Blue];

    pub const fn index(self) -> usize {
        match self {
            ColorChannel::Red => 0,
            ColorChannel::Green => 1,
            ColorChannel::Blue => 2,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ColorChannel::Red => "red",
            ColorChannel::Green => "green",
            ColorChannel::Blue => "blue",
        }
    }
}

impl FromStr for ColorChannel {
    type Err = ParseChannelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "r" | "red" => Ok(ColorChannel::Red),
            "g" | "green" => Ok(ColorChannel::Green),
            "b" | "blue" => Ok(ColorChannel::Blue),
            _ => Err(ParseChannelError(s.to_string())),
        }
    }
}

impl TryFrom<String> for ColorChannel {
    type Error = ParseChannelError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ColorChannel> for String {
    fn from(channel: ColorChannel) -> Self {
        channel.name().to_string()
    }
}

impl fmt::Display for ColorChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Anything that renders as one solid-colored path
///
/// Drawing follows one rule for every shape: when filled, the path is
/// closed and filled, then the outline is always stroked in the same color.
pub trait Shape {
    fn path(&self) -> Path;
    fn color(&self) -> Color;
    fn is_filled(&self) -> bool;

    fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        let mut path = self.path();
        let color = self.color();
        if self.is_filled() {
            path.close();
            surface.fill(&path, color);
        }
        surface.stroke(&path, color);
    }
}

/// Draw shapes in order; later shapes occlude earlier ones
pub fn draw_all<S: Surface + ?Sized, T: Shape>(surface: &mut S, shapes: &[T]) {
    for shape in shapes {
        shape.draw(surface);
    }
}

#[cfg(test)]
pub(crate) const EPSILON: f64 = 1e-9;

#[cfg(test)]
pub(crate) fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6 * (1.0 + a.abs().max(b.abs()))
}
