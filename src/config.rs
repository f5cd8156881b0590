//! Configuration loader - YAML file with one table per composition

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::compositions::blooms::{BloomingLotusParams, SketchLotusParams, SpiralLotusParams};
use crate::compositions::polygons::{OffBoxParams, SpiralPolyParams};
use crate::compositions::scatter::{LotusScatterParams, SpiralScatterParams};
use crate::compositions::Strategy;
use crate::shapes::Color;

/// Main configuration loaded from mandala.yaml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Composition rendered when none is given on the command line
    pub strategy: Strategy,
    /// Side length of the square canvas in pixels
    pub canvas_size: u32,
    /// Seed for scatter strategies; drawn from entropy when unset
    pub seed: Option<u64>,
    pub output_dir: PathBuf,
    pub stroke_width: f64,
    /// Transparent when unset
    pub background: Option<Color>,

    pub off_box: OffBoxParams,
    pub spiral_poly: SpiralPolyParams,
    pub sketch_lotus: SketchLotusParams,
    pub blooming_lotus: BloomingLotusParams,
    pub lotus_scatter: LotusScatterParams,
    pub spiral_lotus: SpiralLotusParams,
    pub spiral_scatter: SpiralScatterParams,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategy: Strategy::SpiralPoly,
            canvas_size: 500,
            seed: None,
            output_dir: PathBuf::from("."),
            stroke_width: 2.0,
            background: None,
            off_box: OffBoxParams::default(),
            spiral_poly: SpiralPolyParams::default(),
            sketch_lotus: SketchLotusParams::default(),
            blooming_lotus: BloomingLotusParams::default(),
            lotus_scatter: LotusScatterParams::default(),
            spiral_lotus: SpiralLotusParams::default(),
            spiral_scatter: SpiralScatterParams::default(),
        }
    }
}

impl Config {
    /// Load configuration from YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Write configuration as YAML
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    /// Reject values no composition can render
    pub fn validate(&self) -> Result<()> {
        ensure!(self.canvas_size > 0, "canvas_size must be positive");
        ensure!(
            self.stroke_width.is_finite() && self.stroke_width > 0.0,
            "stroke_width must be positive, got {}",
            self.stroke_width
        );
        ensure!(self.spiral_poly.layers > 0, "spiral_poly.layers must be positive");
        ensure!(self.sketch_lotus.passes > 0, "sketch_lotus.passes must be positive");
        ensure!(self.blooming_lotus.layers > 0, "blooming_lotus.layers must be positive");
        ensure!(self.spiral_lotus.layers > 0, "spiral_lotus.layers must be positive");
        ensure!(
            self.spiral_scatter.min_leaves <= self.spiral_scatter.max_leaves,
            "spiral_scatter.min_leaves ({}) exceeds max_leaves ({})",
            self.spiral_scatter.min_leaves,
            self.spiral_scatter.max_leaves
        );
        Ok(())
    }

    /// Default output path for a strategy
    pub fn output_path(&self, strategy: Strategy) -> PathBuf {
        self.output_dir.join(strategy.file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{ColorChannel, Point};

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.canvas_size, 500);
        assert_eq!(config.output_path(Strategy::OffBox), PathBuf::from("./off_box.png"));
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = r#"
strategy: blooming_lotus
canvas_size: 800
seed: 42
background: [1.0, 1.0, 1.0]
blooming_lotus:
  layers: 25
  channel: green
  center: { x: 100.0, y: 120.0 }
spiral_poly:
  color: [0.1, 0.2, 0.3, 0.5]
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.strategy, Strategy::BloomingLotus);
        assert_eq!(config.canvas_size, 800);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.background, Some(Color::rgb(1.0, 1.0, 1.0)));
        assert_eq!(config.blooming_lotus.layers, 25);
        assert_eq!(config.blooming_lotus.channel, ColorChannel::Green);
        assert_eq!(config.blooming_lotus.center, Some(Point::new(100.0, 120.0)));
        assert!(config.blooming_lotus.trace);
        assert_eq!(config.spiral_poly.color, Color::rgba(0.1, 0.2, 0.3, 0.5));
        assert_eq!(config.spiral_poly.sides, 6);
        assert_eq!(config.off_box, OffBoxParams::default());
    }

    #[test]
    fn test_unknown_channel_is_an_error() {
        let yaml = "blooming_lotus:\n  channel: purple\n";
        let err = serde_yaml::from_str::<Config>(yaml).unwrap_err();
        assert!(err.to_string().contains("purple"), "{}", err);
    }

    #[test]
    fn test_short_channel_names_accepted() {
        let config: Config = serde_yaml::from_str("spiral_lotus:\n  channel: b\n").unwrap();
        assert_eq!(config.spiral_lotus.channel, ColorChannel::Blue);
    }

    #[test]
    fn test_bad_color_length_is_an_error() {
        assert!(serde_yaml::from_str::<Config>("background: [1.0, 0.0]\n").is_err());
    }

    #[test]
    fn test_validation_rejects_degenerate_values() {
        let mut config = Config::default();
        config.canvas_size = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.blooming_lotus.layers = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.stroke_width = -1.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.spiral_scatter.min_leaves = 12;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_yaml_roundtrip_of_defaults() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let back: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, config);
    }
}
