//! Random scatters of blooms and spiral lotuses
//!
//! Centers are drawn from whole-unit coordinates at least a tenth of the
//! canvas away from every edge. Each composition's radius is the distance
//! to the nearest edge, so nothing it draws leaves the canvas.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::blooms::{Bloom, SpiralLotus};
use crate::shapes::{ColorChannel, Lotus, Point};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LotusScatterParams {
    pub count: usize,
    pub leaves: usize,
    pub trace: bool,
}

impl Default for LotusScatterParams {
    fn default() -> Self {
        Self {
            count: 10,
            leaves: 12,
            trace: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpiralScatterParams {
    pub count: usize,
    pub min_leaves: usize,
    pub max_leaves: usize,
    pub angle_step: f64,
}

impl Default for SpiralScatterParams {
    fn default() -> Self {
        Self {
            count: 10,
            min_leaves: 3,
            max_leaves: 10,
            angle_step: 10.0,
        }
    }
}

/// Where one scattered composition goes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub center: Point,
    pub radius: f64,
    pub channel: ColorChannel,
}

impl Placement {
    /// Petal length covered by one layer
    const LAYER_DEPTH: f64 = 10.0;

    pub fn random<R: Rng + ?Sized>(rng: &mut R, canvas_size: u32) -> Self {
        let margin = canvas_size / 10;
        let x = rng.gen_range(margin..=canvas_size - margin);
        let y = rng.gen_range(margin..=canvas_size - margin);
        let channel = ColorChannel::ALL[rng.gen_range(0..ColorChannel::ALL.len())];

        let nearest_edge = x.min(y).min(canvas_size - x).min(canvas_size - y);
        let radius = f64::from(nearest_edge).clamp(0.0, f64::from(canvas_size) / 2.0);

        Self {
            center: Point::new(f64::from(x), f64::from(y)),
            radius,
            channel,
        }
    }

    /// One layer per ten units of radius, at least one
    pub fn layers(&self) -> usize {
        ((self.radius / Self::LAYER_DEPTH) as usize).max(1)
    }
}

pub fn lotus_scatter<R: Rng + ?Sized>(
    params: &LotusScatterParams,
    canvas_size: u32,
    rng: &mut R,
) -> Vec<Lotus> {
    let mut shapes = Vec::new();
    for i in 0..params.count {
        let placement = Placement::random(rng, canvas_size);
        debug!(
            index = i,
            x = placement.center.x,
            y = placement.center.y,
            radius = placement.radius,
            channel = %placement.channel,
            "Placing bloom"
        );

        let bloom = Bloom {
            center: placement.center,
            leaves: params.leaves,
            layers: placement.layers(),
            radius: placement.radius,
            trace: params.trace,
            channel: placement.channel,
        };
        shapes.extend(bloom.shapes());
    }
    shapes
}

pub fn spiral_scatter<R: Rng + ?Sized>(
    params: &SpiralScatterParams,
    canvas_size: u32,
    rng: &mut R,
) -> Vec<Lotus> {
    let mut shapes = Vec::new();
    for i in 0..params.count {
        let placement = Placement::random(rng, canvas_size);
        let leaves = rng.gen_range(params.min_leaves..=params.max_leaves);
        debug!(
            index = i,
            x = placement.center.x,
            y = placement.center.y,
            radius = placement.radius,
            leaves,
            channel = %placement.channel,
            "Placing spiral lotus"
        );

        let spiral = SpiralLotus {
            center: placement.center,
            leaves,
            layers: placement.layers(),
            radius: placement.radius,
            angle_step: params.angle_step,
            channel: placement.channel,
        };
        shapes.extend(spiral.shapes());
    }
    shapes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::Shape;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const SLACK: f64 = 1e-9;

    fn assert_on_canvas(shapes: &[Lotus], size: u32) {
        let max = f64::from(size);
        for lotus in shapes {
            for p in lotus.path().points() {
                assert!(
                    p.x >= -SLACK && p.x <= max + SLACK && p.y >= -SLACK && p.y <= max + SLACK,
                    "{:?} leaves the {}px canvas (lotus at {:?})",
                    p,
                    size,
                    lotus.center
                );
            }
        }
    }

    #[test]
    fn test_placements_stay_in_bounds() {
        for size in [50, 101, 500, 1024] {
            let max = f64::from(size);
            for seed in 0..200 {
                let mut rng = StdRng::seed_from_u64(seed);
                let p = Placement::random(&mut rng, size);
                assert!(p.center.x - p.radius >= 0.0 && p.center.x + p.radius <= max);
                assert!(p.center.y - p.radius >= 0.0 && p.center.y + p.radius <= max);
                assert!(p.radius >= f64::from(size / 10));
                assert!(p.layers() >= 1);
            }
        }
    }

    #[test]
    fn test_lotus_scatter_shapes_stay_in_bounds() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let shapes = lotus_scatter(&LotusScatterParams::default(), 500, &mut rng);
            assert_on_canvas(&shapes, 500);
        }
    }

    #[test]
    fn test_spiral_scatter_shapes_stay_in_bounds() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let shapes = spiral_scatter(&SpiralScatterParams::default(), 500, &mut rng);
            assert_on_canvas(&shapes, 500);
            assert!(shapes.iter().all(|l| (3..=10).contains(&l.leaves)));
        }
    }

    #[test]
    fn test_same_seed_same_scatter() {
        let params = SpiralScatterParams::default();
        let a = spiral_scatter(&params, 500, &mut StdRng::seed_from_u64(7));
        let b = spiral_scatter(&params, 500, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_bloom_layers_follow_radius() {
        let mut rng = StdRng::seed_from_u64(3);
        let params = LotusScatterParams {
            count: 1,
            trace: false,
            ..Default::default()
        };
        let placement = Placement::random(&mut StdRng::seed_from_u64(3), 500);
        let shapes = lotus_scatter(&params, 500, &mut rng);

        assert_eq!(shapes.len(), placement.layers());
        assert_eq!(shapes[0].center, placement.center);
        assert_eq!(shapes[0].length, placement.radius);
    }
}
