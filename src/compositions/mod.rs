//! Composition strategies - parameter progressions over the shape renderers
//!
//! Each strategy turns its parameters into a list of shapes, then draws
//! them in order:
//! - polygons: telescoping offset squares, spiraling polygon
//! - blooms: sketched lotus, blooming lotus, spiral lotus
//! - scatter: random placements of blooms and spiral lotuses

pub mod blooms;
pub mod polygons;
pub mod scatter;

use clap::ValueEnum;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

use crate::canvas::{Canvas, CanvasError, Surface};
use crate::config::Config;
use crate::shapes::draw_all;

/// All available compositions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    #[value(name = "off_box")]
    OffBox,
    #[value(name = "spiral_poly")]
    SpiralPoly,
    #[value(name = "sketch_lotus")]
    SketchLotus,
    #[value(name = "blooming_lotus")]
    BloomingLotus,
    #[value(name = "lotus_scatter")]
    LotusScatter,
    #[value(name = "spiral_lotus")]
    SpiralLotus,
    #[value(name = "spiral_scatter")]
    SpiralScatter,
}

impl Strategy {
    pub const ALL: [Strategy; 7] = [
        Strategy::OffBox,
        Strategy::SpiralPoly,
        Strategy::SketchLotus,
        Strategy::BloomingLotus,
        Strategy::LotusScatter,
        Strategy::SpiralLotus,
        Strategy::SpiralScatter,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Strategy::OffBox => "off_box",
            Strategy::SpiralPoly => "spiral_poly",
            Strategy::SketchLotus => "sketch_lotus",
            Strategy::BloomingLotus => "blooming_lotus",
            Strategy::LotusScatter => "lotus_scatter",
            Strategy::SpiralLotus => "spiral_lotus",
            Strategy::SpiralScatter => "spiral_scatter",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Strategy::OffBox => "Telescoping squares paired with 45° copies, green and red ramps",
            Strategy::SpiralPoly => "Polygons spiraling outward with growing radius and rotation",
            Strategy::SketchLotus => "One lotus redrawn with narrowing petals, a sketched look",
            Strategy::BloomingLotus => "Concentric filled lotus layers on a single-channel ramp",
            Strategy::LotusScatter => "Blooming lotuses scattered at random, sized to fit",
            Strategy::SpiralLotus => "Filled lotus layers shrinking inward while rotating",
            Strategy::SpiralScatter => "Spiral lotuses scattered at random with random leaf counts",
        }
    }

    /// Default output file name
    pub fn file_name(self) -> String {
        format!("{}.png", self.name())
    }

    /// Whether the strategy consumes the random source
    pub const fn is_random(self) -> bool {
        matches!(self, Strategy::LotusScatter | Strategy::SpiralScatter)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Run one composition onto `surface`
pub fn compose<S, R>(strategy: Strategy, config: &Config, surface: &mut S, rng: &mut R)
where
    S: Surface + ?Sized,
    R: Rng + ?Sized,
{
    let size = config.canvas_size;
    match strategy {
        Strategy::OffBox => draw_all(surface, &polygons::off_box(&config.off_box, size)),
        Strategy::SpiralPoly => draw_all(surface, &polygons::spiral_poly(&config.spiral_poly, size)),
        Strategy::SketchLotus => draw_all(surface, &blooms::sketch_lotus(&config.sketch_lotus, size)),
        Strategy::BloomingLotus => {
            draw_all(surface, &blooms::blooming_lotus(&config.blooming_lotus, size))
        }
        Strategy::SpiralLotus => draw_all(surface, &blooms::spiral_lotus(&config.spiral_lotus, size)),
        Strategy::LotusScatter => {
            draw_all(surface, &scatter::lotus_scatter(&config.lotus_scatter, size, rng))
        }
        Strategy::SpiralScatter => {
            draw_all(surface, &scatter::spiral_scatter(&config.spiral_scatter, size, rng))
        }
    }
}

/// Render one composition onto a fresh canvas
pub fn paint(strategy: Strategy, config: &Config, seed: u64) -> Result<Canvas, CanvasError> {
    let mut canvas = Canvas::new(config.canvas_size)?.with_stroke_width(config.stroke_width);
    if let Some(background) = config.background {
        canvas.clear(background);
    }

    if strategy.is_random() {
        info!(%strategy, seed, "Rendering");
    } else {
        info!(%strategy, "Rendering");
    }

    let mut rng = StdRng::seed_from_u64(seed);
    compose(strategy, config, &mut canvas, &mut rng);
    debug!(%strategy, "Composition finished");

    Ok(canvas)
}
