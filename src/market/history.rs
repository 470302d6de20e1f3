//! Synthetic price-history generation
//!
//! Seeded geometric Brownian motion daily closes for chart backfill when no
//! feed is connected. The series is rescaled so its final close lands
//! exactly on the supplied spot price.

use anyhow::{anyhow, Result};
use rand::distributions::Distribution;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use statrs::distribution::Normal;

/// Configuration for synthetic history generation
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryConfig {
    /// Number of daily closes to generate
    #[serde(default = "default_days")]
    pub days: usize,

    /// Annualized volatility of the simulated walk
    #[serde(default = "default_annual_vol")]
    pub annual_vol: f64,

    /// Annualized drift of the simulated walk
    #[serde(default = "default_drift")]
    pub drift: f64,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            days: default_days(),
            annual_vol: default_annual_vol(),
            drift: default_drift(),
        }
    }
}

fn default_days() -> usize {
    60
}

fn default_annual_vol() -> f64 {
    0.25
}

fn default_drift() -> f64 {
    0.05
}

/// Generate daily closes ending exactly at `spot`, oldest first.
///
/// # Errors
///
/// * `anyhow::Error` if `spot` is not positive or fewer than 2 days are
///   requested
pub fn generate_history(spot: f64, config: &HistoryConfig, rng: &mut StdRng) -> Result<Vec<f64>> {
    if spot <= 0.0 {
        return Err(anyhow!("Spot price must be positive, got: {}", spot));
    }
    if config.days < 2 {
        return Err(anyhow!(
            "History needs at least 2 days, got: {}",
            config.days
        ));
    }

    let normal = Normal::new(0.0, 1.0).unwrap();
    let dt: f64 = 1.0 / 365.0;
    let vol_step = config.annual_vol * dt.sqrt();
    let drift_step = (config.drift - 0.5 * config.annual_vol * config.annual_vol) * dt;

    let mut prices = Vec::with_capacity(config.days);
    let mut price = spot;
    prices.push(price);
    for _ in 1..config.days {
        let z: f64 = normal.sample(rng);
        price *= (drift_step + vol_step * z).exp();
        prices.push(price);
    }

    // Pin the most recent close to spot so the chart seam is exact.
    let last = *prices.last().unwrap();
    let scale = spot / last;
    for p in &mut prices {
        *p *= scale;
    }

    Ok(prices)
}

/// Seeded convenience wrapper around [`generate_history`].
pub fn generate_history_seeded(spot: f64, config: &HistoryConfig, seed: u64) -> Result<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_history(spot, config, &mut rng)
}
