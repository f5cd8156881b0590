//! Lotus compositions - sketched, blooming and spiral lotus
//!
//! Each composition is a list of lotus shapes in draw order; later shapes
//! are drawn over earlier ones.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::shapes::{Color, ColorChannel, Lotus, Point};

/// Same lotus redrawn with ever narrower petals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchLotusParams {
    pub passes: usize,
    pub leaves: usize,
    pub center: Option<Point>,
    /// Petal length, defaults to half the canvas
    pub length: Option<f64>,
    pub rotation: f64,
    pub color: Color,
}

impl Default for SketchLotusParams {
    fn default() -> Self {
        Self {
            passes: 5,
            leaves: 12,
            center: None,
            length: None,
            rotation: 0.0,
            color: Color::rgb(0.5, 0.0, 0.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BloomingLotusParams {
    pub leaves: usize,
    pub layers: usize,
    pub center: Option<Point>,
    /// Outermost petal length, defaults to half the canvas
    pub radius: Option<f64>,
    /// Outline every layer in black
    pub trace: bool,
    pub channel: ColorChannel,
}

impl Default for BloomingLotusParams {
    fn default() -> Self {
        Self {
            leaves: 12,
            layers: 10,
            center: None,
            radius: None,
            trace: true,
            channel: ColorChannel::Red,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpiralLotusParams {
    pub leaves: usize,
    pub layers: usize,
    pub center: Option<Point>,
    /// Outermost petal length, defaults to half the canvas
    pub radius: Option<f64>,
    /// Rotation added per layer, in degrees
    pub angle_step: f64,
    pub channel: ColorChannel,
}

impl Default for SpiralLotusParams {
    fn default() -> Self {
        Self {
            leaves: 8,
            layers: 20,
            center: None,
            radius: None,
            angle_step: 10.0,
            channel: ColorChannel::Red,
        }
    }
}

/// Concentric filled lotus layers on a dark-to-light ramp of one channel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bloom {
    pub center: Point,
    pub leaves: usize,
    pub layers: usize,
    pub radius: f64,
    pub trace: bool,
    pub channel: ColorChannel,
}

impl Bloom {
    pub const RAMP_START: f64 = 0.2;
    pub const RAMP_SPAN: f64 = 0.8;

    /// Channel increase per layer
    pub fn ramp_step(&self) -> f64 {
        Self::RAMP_SPAN / self.layers as f64
    }

    /// Radius decrease per layer, truncated to whole units
    pub fn radius_step(&self) -> f64 {
        (self.radius / self.layers as f64).floor()
    }

    /// Ramp color after `layer` steps
    ///
    /// Reaches `RAMP_START + RAMP_SPAN` (1.0) after `layers` steps, so every
    /// drawn layer (0..layers) stays below 1.0.
    pub fn color_at(&self, layer: usize) -> Color {
        Color::single(self.channel, Self::RAMP_START + layer as f64 * self.ramp_step())
    }

    pub fn shapes(&self) -> Vec<Lotus> {
        let step = self.radius_step();
        let mut shapes = Vec::with_capacity(self.layers * 2);

        for i in 0..self.layers {
            let lotus = Lotus::new(
                self.center,
                self.leaves,
                self.radius - i as f64 * step,
                self.color_at(i),
            )
            .filled();
            trace!(layer = i, length = lotus.length, "Bloom layer");

            shapes.push(lotus);
            if self.trace {
                shapes.push(lotus.outline(Color::BLACK));
            }
        }
        shapes
    }
}

/// Filled lotus layers shrinking inward while rotating, each outlined in black
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpiralLotus {
    pub center: Point,
    pub leaves: usize,
    pub layers: usize,
    pub radius: f64,
    pub angle_step: f64,
    pub channel: ColorChannel,
}

impl SpiralLotus {
    pub const SCALE: f64 = 10.0;
    /// Petal length the spiral shrinks toward, capped at the outer radius
    pub const INNER_RADIUS: f64 = 10.0;
    pub const LEVEL: f64 = 0.5;

    pub fn shapes(&self) -> Vec<Lotus> {
        let inner = Self::INNER_RADIUS.min(self.radius);
        let step = (self.radius - inner) / self.layers as f64;
        let color = Color::single(self.channel, Self::LEVEL);

        let mut shapes = Vec::with_capacity(self.layers * 2);
        for i in 0..self.layers {
            let i = i as f64;
            let lotus = Lotus::new(self.center, self.leaves, self.radius - i * step, color)
                .scaled(Self::SCALE)
                .rotated(i * self.angle_step)
                .filled();
            shapes.push(lotus);
            shapes.push(lotus.outline(Color::BLACK));
        }
        shapes
    }
}

/// Outline-only passes with the width divisor growing from 2 by one per pass
pub fn sketch_lotus(params: &SketchLotusParams, canvas_size: u32) -> Vec<Lotus> {
    let center = params.center.unwrap_or_else(|| Point::canvas_center(canvas_size));
    let length = params.length.unwrap_or(f64::from(canvas_size) / 2.0);

    (0..params.passes)
        .map(|i| {
            Lotus::new(center, params.leaves, length, params.color)
                .scaled(Lotus::DEFAULT_SCALE + i as f64)
                .rotated(params.rotation)
        })
        .collect()
}

pub fn blooming_lotus(params: &BloomingLotusParams, canvas_size: u32) -> Vec<Lotus> {
    Bloom {
        center: params.center.unwrap_or_else(|| Point::canvas_center(canvas_size)),
        leaves: params.leaves,
        layers: params.layers,
        radius: params.radius.unwrap_or(f64::from(canvas_size) / 2.0),
        trace: params.trace,
        channel: params.channel,
    }
    .shapes()
}

pub fn spiral_lotus(params: &SpiralLotusParams, canvas_size: u32) -> Vec<Lotus> {
    SpiralLotus {
        center: params.center.unwrap_or_else(|| Point::canvas_center(canvas_size)),
        leaves: params.leaves,
        layers: params.layers,
        radius: params.radius.unwrap_or(f64::from(canvas_size) / 2.0),
        angle_step: params.angle_step,
        channel: params.channel,
    }
    .shapes()
}
