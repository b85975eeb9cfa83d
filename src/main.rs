#![warn(clippy::all)]

use anyhow::{anyhow, Context, Result};
use cgol::{App, Config, Grid};
use clap::Parser;
use eframe::egui::ViewportBuilder;
use tracing_subscriber::EnvFilter;

/// Conway's Game of Life on a toroidal grid
#[derive(Parser)]
#[command(name = "cgol", version)]
struct Args {
    /// Grid width in cells (positive multiple of 8)
    width: usize,

    /// Grid height in cells (positive multiple of 8)
    height: usize,

    /// Initial density of live cells, within [0, 1]
    #[arg(allow_negative_numbers = true)]
    density: f64,

    /// Side of a cell in pixels
    #[arg(long, default_value_t = 5)]
    cell_size: u32,

    /// Target frame rate, one generation per frame
    #[arg(long, default_value_t = 18.2)]
    fps: f64,

    /// Seed of the initial generation (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .context("invalid log filter")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config {
        cell_size: args.cell_size as f32,
        max_fps: args.fps,
        ..Default::default()
    };
    config.validate().context("invalid display settings")?;

    let grid = Grid::random(args.width, args.height, args.density, args.seed)
        .context("cannot create the grid")?;

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(config.window_size(grid.width(), grid.height()))
            .with_resizable(false),
        ..Default::default()
    };
    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |cc| Ok(Box::new(App::new(&cc.egui_ctx, grid, config)))),
    )
    .map_err(|err| anyhow!("viewer failed: {err}"))
}
