//! Conway's Game of Life on a toroidal, bit-packed grid.
//!
//! [`Grid`] stores one bit per cell and counts neighbors with wraparound,
//! [`Simulator`] advances it one generation at a time, and [`App`] is an
//! `eframe` viewer driving both.

mod grid;
mod gui;
mod simulator;
mod utils;

pub use grid::{Grid, GridError};
pub use gui::{App, Config, ConfigError};
pub use simulator::Simulator;
pub use utils::{FpsLimiter, NiceInt};
