//! Mandala - procedural mandala art
//!
//! CLI commands:
//! - render: Render one composition to an image
//! - render-all: Render every composition under its default file name
//! - list: List available compositions
//! - inspect: Print polygon or lotus geometry as JSON
//! - init: Write a config file with every default spelled out

mod canvas;
mod compositions;
mod config;
mod logging;
mod shapes;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use compositions::Strategy;
use config::Config;
use shapes::Point;

#[derive(Parser)]
#[command(name = "mandala")]
#[command(about = "Procedural mandala art: polygons, lotus petals, spirals and scatters")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to mandala.yaml config
    #[arg(short, long, default_value = "mandala.yaml")]
    config: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one composition to an image
    Render {
        /// Composition to render (defaults to the config's strategy)
        #[arg(short, long, value_enum)]
        strategy: Option<Strategy>,

        /// Output image path (defaults to <output_dir>/<strategy>.png)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Canvas side length in pixels
        #[arg(long)]
        size: Option<u32>,

        /// Seed for scatter compositions
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Render every composition under its default file name
    RenderAll {
        /// Output directory
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Canvas side length in pixels
        #[arg(long)]
        size: Option<u32>,

        /// Seed for scatter compositions
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List available compositions
    List,

    /// Print shape geometry as JSON, centered on the canvas
    Inspect {
        #[arg(value_enum)]
        shape: ShapeKind,

        /// Number of sides or leaves
        #[arg(short = 'n', long, default_value = "6")]
        count: usize,

        /// Radius or petal length (defaults to half the canvas)
        #[arg(short, long)]
        radius: Option<f64>,

        /// Rotation in degrees
        #[arg(long, default_value = "0")]
        rotation: f64,

        /// Petal width divisor
        #[arg(long, default_value = "2")]
        scale: f64,
    },

    /// Write a config file with every default spelled out
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ShapeKind {
    Polygon,
    Lotus,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging first
    logging::init_logging("logs")?;
    tracing::info!("Mandala starting up");

    let cli = Cli::parse();
    tracing::debug!("CLI args parsed: config={:?}", cli.config);

    match cli.command {
        Commands::Render { strategy, output, size, seed } => {
            let mut config = load_config(&cli.config)?;
            apply_overrides(&mut config, size, seed);
            config.validate()?;
            let strategy = strategy.unwrap_or(config.strategy);
            let output = output.unwrap_or_else(|| config.output_path(strategy));
            let seed = resolve_seed(config.seed);
            render(&config, strategy, &output, seed)?;
        }

        Commands::RenderAll { output_dir, size, seed } => {
            let mut config = load_config(&cli.config)?;
            apply_overrides(&mut config, size, seed);
            if let Some(dir) = output_dir {
                config.output_dir = dir;
            }
            config.validate()?;
            render_all(&config)?;
        }

        Commands::List => list_strategies(),

        Commands::Inspect { shape, count, radius, rotation, scale } => {
            let config = load_config(&cli.config)?;
            config.validate()?;
            inspect(&config, shape, count, radius, rotation, scale)?;
        }

        Commands::Init { force } => init_config(&cli.config, force)?,
    }

    Ok(())
}

/// Load the config file, falling back to defaults when it is missing
fn load_config(path: &Path) -> anyhow::Result<Config> {
    if path.exists() {
        tracing::info!("Loading config from {:?}", path);
        Config::load(path)
    } else {
        tracing::warn!("Config file not found: {:?}, using defaults", path);
        Ok(Config::default())
    }
}

fn apply_overrides(config: &mut Config, size: Option<u32>, seed: Option<u64>) {
    if let Some(size) = size {
        config.canvas_size = size;
    }
    if seed.is_some() {
        config.seed = seed;
    }
}

/// Configured seed, or a fresh one logged so the run can be repeated
fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| {
        let seed = rand::random();
        tracing::info!("No seed configured, using {}", seed);
        seed
    })
}

/// Render one composition and write it to `output`
fn render(config: &Config, strategy: Strategy, output: &Path, seed: u64) -> anyhow::Result<()> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let canvas = compositions::paint(strategy, config, seed)?;
    canvas.save(output)?;

    println!("  {} -> {}", strategy, output.display());
    Ok(())
}

/// Render every composition, each on a fresh canvas
fn render_all(config: &Config) -> anyhow::Result<()> {
    let seed = resolve_seed(config.seed);
    std::fs::create_dir_all(&config.output_dir)?;

    println!("Rendering {} compositions...", Strategy::ALL.len());
    for strategy in Strategy::ALL {
        render(config, strategy, &config.output_path(strategy), seed)?;
    }

    println!("Done!");
    Ok(())
}

/// List available compositions
fn list_strategies() {
    println!("Available compositions ({}):", Strategy::ALL.len());
    println!();
    for strategy in Strategy::ALL {
        let kind = if strategy.is_random() { "seeded" } else { "fixed" };
        println!("  - {} [{}] ({})", strategy, kind, strategy.file_name());
        println!("      {}", strategy.description());
    }
}

/// Print polygon vertices or lotus petals as JSON
fn inspect(
    config: &Config,
    shape: ShapeKind,
    count: usize,
    radius: Option<f64>,
    rotation: f64,
    scale: f64,
) -> anyhow::Result<()> {
    let center = Point::canvas_center(config.canvas_size);
    let radius = radius.unwrap_or(f64::from(config.canvas_size) / 2.0);

    let data = match shape {
        ShapeKind::Polygon => serde_json::json!({
            "shape": "polygon",
            "sides": count,
            "center": center,
            "radius": radius,
            "rotation": rotation,
            "vertices": shapes::regular_polygon(count, center, radius, rotation),
        }),
        ShapeKind::Lotus => serde_json::json!({
            "shape": "lotus",
            "leaves": count,
            "center": center,
            "length": radius,
            "scale": scale,
            "rotation": rotation,
            "petals": shapes::petals(center, count, radius, scale, rotation),
        }),
    };

    println!("{}", serde_json::to_string_pretty(&data)?);
    Ok(())
}

/// Write the default config to `path`
fn init_config(path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
    }
    Config::default().save(path)?;
    tracing::info!("Wrote default config to {:?}", path);
    println!("Wrote {}", path.display());
    Ok(())
}
