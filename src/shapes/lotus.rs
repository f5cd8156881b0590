//! Lotus petals - symmetric Bezier leaves radiating from a center
//!
//! Each petal is two cubic curves sharing the center as start and end:
//! center -> anchor bending through one control point, anchor -> center
//! bending through its mirror image across the center-anchor axis.

use serde::Serialize;
use std::f64::consts::TAU;

use super::{polygon, Color, Point, Shape};
use crate::canvas::Path;

/// One petal of a lotus
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Petal {
    pub center: Point,
    /// Tip of the petal, a vertex of the regular polygon at petal length
    pub anchor: Point,
    /// Control point of the center -> anchor curve
    pub outbound: Point,
    /// Control point of the anchor -> center curve
    pub inbound: Point,
}

/// Compute the petals of a lotus
///
/// # Arguments
/// * `center` - Shared start/end point of every petal
/// * `leaves` - Number of petals
/// * `length` - Distance from center to each petal tip
/// * `scale` - Width divisor, petal width is `length / scale`
/// * `rotation` - Rotational offset in degrees
pub fn petals(center: Point, leaves: usize, length: f64, scale: f64, rotation: f64) -> Vec<Petal> {
    let anchors = polygon::regular_polygon(leaves, center, length, rotation);
    if anchors.is_empty() {
        return Vec::new();
    }

    let step = TAU / leaves as f64;
    let start = polygon::start_angle(leaves, rotation).to_radians();
    let width = length / scale;
    let half = length / 2.0;

    anchors
        .into_iter()
        .enumerate()
        .map(|(i, anchor)| {
            let (sin, cos) = (start + i as f64 * step).sin_cos();
            Petal {
                center,
                anchor,
                outbound: Point::new(
                    center.x + width * cos + half * sin,
                    center.y + width * sin - half * cos,
                ),
                inbound: Point::new(
                    center.x + width * cos - half * sin,
                    center.y + width * sin + half * cos,
                ),
            }
        })
        .collect()
}

/// A lotus flower with its drawing style
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lotus {
    pub center: Point,
    pub leaves: usize,
    pub length: f64,
    pub color: Color,
    pub scale: f64,
    pub rotation: f64,
    pub fill: bool,
}

impl Lotus {
    pub const DEFAULT_SCALE: f64 = 2.0;

    pub fn new(center: Point, leaves: usize, length: f64, color: Color) -> Self {
        Self {
            center,
            leaves,
            length,
            color,
            scale: Self::DEFAULT_SCALE,
            rotation: 0.0,
            fill: false,
        }
    }

    pub fn scaled(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn rotated(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn filled(mut self) -> Self {
        self.fill = true;
        self
    }

    /// Same geometry, outline only, in another color
    pub fn outline(mut self, color: Color) -> Self {
        self.fill = false;
        self.color = color;
        self
    }

    pub fn petals(&self) -> Vec<Petal> {
        petals(self.center, self.leaves, self.length, self.scale, self.rotation)
    }
}

impl Shape for Lotus {
    fn path(&self) -> Path {
        let mut path = Path::new();
        let petals = self.petals();
        if petals.is_empty() {
            return path;
        }

        path.move_to(self.center);
        for petal in &petals {
            path.cubic_to(petal.center, petal.outbound, petal.anchor);
            path.cubic_to(petal.anchor, petal.inbound, petal.center);
        }
        path
    }

    fn color(&self) -> Color {
        self.color
    }

    fn is_filled(&self) -> bool {
        self.fill
    }
}
