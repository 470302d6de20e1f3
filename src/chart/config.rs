use anyhow::{Context, Result};
use serde::Deserialize;

/// Main configuration struct for the prediction chart
///
/// All fields carry serde defaults so partial TOML files deserialize cleanly;
/// missing fields fall back to the desktop preset values.
#[derive(Debug, Deserialize, Clone)]
pub struct ChartConfig {
    /// Chart width in pixels
    #[serde(default = "default_width")]
    pub width: f64,

    /// Chart height in pixels
    #[serde(default = "default_height")]
    pub height: f64,

    /// Fraction of the width occupied by price history; everything to the
    /// right of `width * future_boundary` is the drawable future region
    #[serde(default = "default_future_boundary")]
    pub future_boundary: f64,

    /// Days of future time spanned by the drawable region
    #[serde(default = "default_horizon_days")]
    pub horizon_days: f64,

    /// Fractional price band around spot covered by the vertical axis
    /// (0.15 means the axis runs from spot*0.85 to spot*1.15)
    #[serde(default = "default_price_span")]
    pub price_span: f64,

    /// Minimum pointer travel in either axis before a new sample is recorded
    #[serde(default = "default_min_sample_px")]
    pub min_sample_px: f64,

    /// Opacity subtracted from every grid cell on each animation tick
    #[serde(default = "default_fade_decrement")]
    pub fade_decrement: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            future_boundary: default_future_boundary(),
            horizon_days: default_horizon_days(),
            price_span: default_price_span(),
            min_sample_px: default_min_sample_px(),
            fade_decrement: default_fade_decrement(),
        }
    }
}

impl ChartConfig {
    /// Default desktop-sized chart with mouse-grade sampling
    pub fn desktop() -> Self {
        Self::default()
    }

    /// Touch-input settings: coarser sampling threshold (finger travel is
    /// noisier than a mouse) and a faster fade so trails do not pile up
    pub fn touch() -> Self {
        Self {
            min_sample_px: 10.0,
            fade_decrement: 0.04,
            ..Self::default()
        }
    }

    /// Small embedded chart, e.g. a card inside a dashboard grid
    pub fn compact() -> Self {
        Self {
            width: 480.0,
            height: 240.0,
            ..Self::default()
        }
    }

    /// Tiny chart for quick validation and unit tests
    pub fn minimal() -> Self {
        Self {
            width: 100.0,
            height: 100.0,
            min_sample_px: 5.0,
            fade_decrement: 0.25,
            ..Self::default()
        }
    }

    /// Parse a configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("Failed to parse chart config TOML")
    }

    /// Load a configuration from a TOML file on disk.
    pub fn load_toml(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read chart config file: {}", path))?;
        Self::from_toml_str(&contents)
    }
}

fn default_width() -> f64 {
    800.0
}

fn default_height() -> f64 {
    400.0
}

fn default_future_boundary() -> f64 {
    0.40
}

fn default_horizon_days() -> f64 {
    30.0
}

fn default_price_span() -> f64 {
    0.15
}

fn default_min_sample_px() -> f64 {
    5.0
}

fn default_fade_decrement() -> f64 {
    0.02
}
