//! d-poly: draw a distance boundary around a point.
//!
//! ```text
//! d-poly <lon> <lat> <distance_m> [step_deg] [--shape circle|rectangle]
//!        [--format geojson|csv] [--output data/polygon.geojson]
//! ```
//!
//! The boundary is written as a GeoJSON `FeatureCollection` holding a single
//! `LineString` (or as `lon,lat` CSV rows).  Set `RUST_LOG=debug` to see the
//! scan extent and sample counts.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use dp_boundary::Shape;
use dp_core::{BoundaryConfig, GeoPoint, Polygon};
use dp_output::{BoundaryWriter, CsvWriter, GeoJsonWriter};

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum ShapeArg {
    Circle,
    #[value(alias = "rect")]
    Rectangle,
}

impl From<ShapeArg> for Shape {
    fn from(s: ShapeArg) -> Self {
        match s {
            ShapeArg::Circle    => Shape::Circle,
            ShapeArg::Rectangle => Shape::Rectangle,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Geojson,
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "d-poly")]
#[command(version, about = "Write a circle or rectangle boundary around a point")]
#[command(allow_negative_numbers = true)]
struct Args {
    /// Center longitude in decimal degrees
    lon: f64,

    /// Center latitude in decimal degrees
    lat: f64,

    /// Target distance in metres (circle radius or rectangle half-width)
    distance: f64,

    /// Resolution in degrees: longitude step and bisection tolerance
    #[arg(default_value_t = BoundaryConfig::DEFAULT_STEP_DEG)]
    step: f64,

    /// Boundary shape
    #[arg(short, long, value_enum, default_value = "circle")]
    shape: ShapeArg,

    /// Output format
    #[arg(short, long, value_enum, default_value = "geojson")]
    format: Format,

    /// Output file path
    #[arg(short, long, default_value = "data/polygon.geojson")]
    output: PathBuf,

    /// Maximum halvings per latitude bisection
    #[arg(long, default_value_t = BoundaryConfig::DEFAULT_MAX_BISECT_ITERS)]
    max_bisect_iters: u32,
}

impl Args {
    fn config(&self) -> BoundaryConfig {
        BoundaryConfig::new(self.step).with_max_bisect_iters(self.max_bisect_iters)
    }
}

// ── Output ────────────────────────────────────────────────────────────────────

fn write_with<W: BoundaryWriter>(mut writer: W, polygon: &Polygon) -> Result<()> {
    writer.write_polygon(polygon)?;
    writer.finish()?;
    Ok(())
}

fn write_polygon(format: Format, path: &Path, polygon: &Polygon) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating output directory {}", dir.display()))?;
    }
    match format {
        Format::Geojson => write_with(GeoJsonWriter::new(path), polygon),
        Format::Csv     => write_with(CsvWriter::new(path)?, polygon),
    }
    .with_context(|| format!("writing {}", path.display()))
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let center = GeoPoint::new(args.lon, args.lat);
    let shape: Shape = args.shape.into();
    let config = args.config();

    log::info!("{shape} around {center}, {} m, step {}°", args.distance, config.step_deg);

    let t0 = Instant::now();
    let polygon = shape.generate(center, args.distance, &config)?;
    log::info!(
        "Total length: {} points in {:.3} s",
        polygon.len(),
        t0.elapsed().as_secs_f64()
    );
    if polygon.is_degenerate() {
        log::warn!("boundary is degenerate; try a finer step");
    }

    write_polygon(args.format, &args.output, &polygon)?;
    log::info!("Wrote {}", args.output.display());

    Ok(())
}
