use eframe::egui::{vec2, Color32, Vec2};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("cell size must be at least 1 pixel, got {0}")]
    InvalidCellSize(f32),

    #[error("frame rate {0} is outside of the supported 18..=240 range")]
    FpsOutOfRange(f64),
}

/// Appearance and pacing of the viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub live_color: Color32,
    pub dead_color: Color32,
    pub text_color: Color32,
    /// Side of a cell in pixels.
    pub cell_size: f32,
    /// Height of the strip below the field holding the generation counter.
    pub bottom_margin: f32,
    pub text_size: f32,
    pub max_fps: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            live_color: Color32::from_rgb(255, 250, 250),
            dead_color: Color32::BLACK,
            text_color: Color32::from_rgb(255, 250, 250),
            cell_size: 5.,
            bottom_margin: 20.,
            text_size: 15.,
            max_fps: 18.2,
        }
    }
}

impl Config {
    pub const MIN_FPS: f64 = 18.;
    pub const MAX_FPS: f64 = 240.;

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size.is_nan() || self.cell_size < 1. {
            return Err(ConfigError::InvalidCellSize(self.cell_size));
        }
        if !(Self::MIN_FPS..=Self::MAX_FPS).contains(&self.max_fps) {
            return Err(ConfigError::FpsOutOfRange(self.max_fps));
        }
        Ok(())
    }

    /// Inner window size needed to show a field of `width x height` cells.
    pub fn window_size(&self, width: usize, height: usize) -> Vec2 {
        vec2(
            width as f32 * self.cell_size,
            height as f32 * self.cell_size + self.bottom_margin,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(Config::default().validate(), Ok(()));
    }

    #[test]
    fn test_validate() {
        let slow = Config {
            max_fps: 10.,
            ..Default::default()
        };
        assert_eq!(slow.validate(), Err(ConfigError::FpsOutOfRange(10.)));

        let tiny = Config {
            cell_size: 0.,
            ..Default::default()
        };
        assert_eq!(tiny.validate(), Err(ConfigError::InvalidCellSize(0.)));
    }

    #[test]
    fn test_window_size() {
        let config = Config::default();
        assert_eq!(config.window_size(64, 32), vec2(320., 180.));
    }
}
