//! Polygon compositions - telescoping offset squares and spiraling polygons

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::shapes::{Color, Point, RegularPolygon};

/// Telescoping squares, each paired with a copy rotated 45°
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OffBoxParams {
    pub iterations: usize,
    /// Defaults to the canvas center
    pub center: Option<Point>,
    /// Outermost radius, defaults to half the canvas
    pub radius: Option<f64>,
    pub radius_step: f64,
    pub color_step: f64,
    /// Fill each square instead of outlining it
    pub fill: bool,
}

impl Default for OffBoxParams {
    fn default() -> Self {
        Self {
            iterations: 12,
            center: None,
            radius: None,
            radius_step: 20.0,
            color_step: 0.05,
            fill: false,
        }
    }
}

/// Outward spiral of rotated polygons
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpiralPolyParams {
    pub sides: usize,
    pub layers: usize,
    pub center: Option<Point>,
    pub start_radius: f64,
    /// Total radius growth over all layers, defaults to 80% of the canvas
    pub radius_span: Option<f64>,
    /// Rotation added per layer, in degrees
    pub angle_step: f64,
    pub color: Color,
}

impl Default for SpiralPolyParams {
    fn default() -> Self {
        Self {
            sides: 6,
            layers: 20,
            center: None,
            start_radius: 10.0,
            radius_span: None,
            angle_step: 2.0,
            color: Color::rgb(0.0, 0.5, 0.0),
        }
    }
}

/// Nested squares in two interleaved ramps: axis-aligned ones in green,
/// 45° ones in red, both brightening as the radius shrinks.
///
/// Stops early once the radius would reach zero.
pub fn off_box(params: &OffBoxParams, canvas_size: u32) -> Vec<RegularPolygon> {
    let center = params.center.unwrap_or_else(|| Point::canvas_center(canvas_size));
    let start = params.radius.unwrap_or(f64::from(canvas_size) / 2.0);

    let mut shapes = Vec::with_capacity(params.iterations * 2);
    for i in 0..params.iterations {
        let radius = start - i as f64 * params.radius_step;
        if radius <= 0.0 {
            debug!(iteration = i, "Off box radius exhausted");
            break;
        }
        let level = i as f64 * params.color_step;
        let mut square = RegularPolygon::new(4, center, radius, Color::rgb(0.0, level, 0.0));
        if params.fill {
            square = square.filled();
        }
        shapes.push(square);
        shapes.push(RegularPolygon {
            color: Color::rgb(level, 0.0, 0.0),
            ..square.rotated(45.0)
        });
    }
    shapes
}

/// Polygons at growing radius and growing rotation
pub fn spiral_poly(params: &SpiralPolyParams, canvas_size: u32) -> Vec<RegularPolygon> {
    let center = params.center.unwrap_or_else(|| Point::canvas_center(canvas_size));
    let span = params.radius_span.unwrap_or(0.8 * f64::from(canvas_size));
    let radius_step = span / params.layers as f64;

    (0..params.layers)
        .map(|i| {
            let i = i as f64;
            RegularPolygon::new(
                params.sides,
                center,
                params.start_radius + i * radius_step,
                params.color,
            )
            .rotated(i * params.angle_step)
        })
        .collect()
}
