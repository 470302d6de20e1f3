use anyhow::{anyhow, Result};

use super::config::ChartConfig;

/// Screen-space to market-space mapping for the prediction chart.
///
/// The horizontal axis is time: history occupies the left of the
/// future-boundary line (drawn at the current price), and the region to its
/// right spans `[0, horizon_days]` days ahead linearly. The vertical axis is
/// price, spanning `spot * (1 - price_span)` at the bottom edge to
/// `spot * (1 + price_span)` at the top edge.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChartGeometry {
    /// Chart width in pixels
    pub width: f64,
    /// Chart height in pixels
    pub height: f64,
    /// x coordinate of the current-price vertical line
    pub boundary_x: f64,
    /// Lowest price on the vertical axis (bottom edge)
    pub min_price: f64,
    /// Highest price on the vertical axis (top edge)
    pub max_price: f64,
    /// Days of future time spanned by the drawable region
    pub horizon_days: f64,
}

impl ChartGeometry {
    /// Build the geometry for a chart centered on the given spot price.
    ///
    /// # Errors
    ///
    /// * `anyhow::Error` if dimensions, spot, span or horizon are non-positive
    /// * `anyhow::Error` if `future_boundary` is outside [0, 1)
    pub fn from_config(config: &ChartConfig, spot: f64) -> Result<Self> {
        if config.width <= 0.0 || config.height <= 0.0 {
            return Err(anyhow!(
                "Chart dimensions must be positive: {}x{}",
                config.width,
                config.height
            ));
        }
        if spot <= 0.0 {
            return Err(anyhow!("Spot price must be positive, got: {}", spot));
        }
        if !(0.0..1.0).contains(&config.future_boundary) {
            return Err(anyhow!(
                "Future boundary fraction must be in [0, 1), got: {}",
                config.future_boundary
            ));
        }
        if config.price_span <= 0.0 || config.horizon_days <= 0.0 {
            return Err(anyhow!(
                "Price span and horizon must be positive: span={}, horizon={}",
                config.price_span,
                config.horizon_days
            ));
        }

        if config.future_boundary > 0.9 {
            eprintln!(
                "Warning: future region is under 10% of chart width; drawing will be cramped."
            );
        }

        Ok(Self {
            width: config.width,
            height: config.height,
            boundary_x: config.width * config.future_boundary,
            min_price: spot * (1.0 - config.price_span),
            max_price: spot * (1.0 + config.price_span),
            horizon_days: config.horizon_days,
        })
    }

    /// Whether a screen position lies inside the chart box.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= 0.0 && x <= self.width && y >= 0.0 && y <= self.height
    }

    /// Whether an x coordinate lies in the drawable future region.
    pub fn in_future_region(&self, x: f64) -> bool {
        x >= self.boundary_x && x <= self.width
    }

    /// Underlying price implied by a y coordinate (top edge = max price).
    pub fn price_at_y(&self, y: f64) -> f64 {
        self.max_price - (y / self.height) * (self.max_price - self.min_price)
    }

    /// y coordinate for an underlying price.
    pub fn y_for_price(&self, price: f64) -> f64 {
        (self.max_price - price) / (self.max_price - self.min_price) * self.height
    }

    /// Days ahead of today implied by an x coordinate. Clamped at zero for
    /// positions left of the boundary line.
    pub fn day_at_x(&self, x: f64) -> f64 {
        let future_width = self.width - self.boundary_x;
        ((x - self.boundary_x) / future_width * self.horizon_days).max(0.0)
    }

    /// x coordinate for a day offset into the future.
    pub fn x_for_day(&self, day: f64) -> f64 {
        let future_width = self.width - self.boundary_x;
        self.boundary_x + day / self.horizon_days * future_width
    }
}
