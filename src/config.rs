//! Mount-time configuration.
//!
//! Read from an optional TOML file; every key is optional and falls back to
//! the defaults below. Command-line flags are layered on top in `cli`.
//!
//! ```toml
//! text = "Randy's."
//! colors = ["#3b82f6", "#9333ea", "#40ffaa", "#4079ff", "#3b82f6"]
//! animation_speed = 6.0
//! width = true
//! weight = true
//! italic = false
//! min_font_size = 120.0
//! ```

use crate::error::Error;
use crate::falloff::AxisToggles;
use crate::gradient::{Gradient, Rgb};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Largest accepted `min_font_size`, in pixels.
pub const MAX_FONT_SIZE: f32 = 4096.0;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnimationConfig {
    /// Glyph sequence rendered and animated.
    pub text: String,
    /// Color stops of the looping fill gradient.
    pub colors: Vec<String>,
    /// Seconds per gradient loop.
    pub animation_speed: f64,
    /// Width axis follows the pointer.
    pub width: bool,
    /// Weight axis follows the pointer.
    pub weight: bool,
    /// Italic axis follows the pointer.
    pub italic: bool,
    /// Baseline display size in pixels, reapplied on every resize.
    pub min_font_size: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            text: "Randy's.".to_string(),
            colors: ["#3b82f6", "#9333ea", "#40ffaa", "#4079ff", "#3b82f6"]
                .into_iter()
                .map(String::from)
                .collect(),
            animation_speed: 6.0,
            width: true,
            weight: true,
            italic: false,
            min_font_size: 120.0,
        }
    }
}

impl AnimationConfig {
    /// Load and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let raw = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&raw)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(raw: &str) -> Result<Self, Error> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.text.is_empty() {
            return Err(Error::InvalidConfig("text must not be empty".into()));
        }
        if self.colors.is_empty() {
            return Err(Error::InvalidConfig("at least one color is required".into()));
        }
        if !(self.animation_speed.is_finite() && self.animation_speed > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "animation_speed must be a positive number of seconds, got {}",
                self.animation_speed
            )));
        }
        self.period()?;
        if !(self.min_font_size.is_finite() && self.min_font_size > 0.0 && self.min_font_size <= MAX_FONT_SIZE) {
            return Err(Error::InvalidConfig(format!(
                "min_font_size must be in (0, {MAX_FONT_SIZE}], got {}",
                self.min_font_size
            )));
        }
        self.color_stops().map(|_| ())
    }

    pub fn toggles(&self) -> AxisToggles {
        AxisToggles { width: self.width, weight: self.weight, italic: self.italic }
    }

    pub fn color_stops(&self) -> Result<Vec<Rgb>, Error> {
        self.colors.iter().map(|c| Rgb::parse(c)).collect()
    }

    /// Gradient loop period. Fails on values `Duration` cannot hold.
    pub fn period(&self) -> Result<Duration, Error> {
        Duration::try_from_secs_f64(self.animation_speed).map_err(|e| {
            Error::InvalidConfig(format!("animation_speed {} out of range: {e}", self.animation_speed))
        })
    }

    pub fn gradient(&self) -> Result<Gradient, Error> {
        Ok(Gradient::new(self.color_stops()?, self.period()?))
    }
}
