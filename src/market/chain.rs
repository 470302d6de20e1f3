//! Synthetic option-chain generation
//!
//! Populates the selectable contract matrix with plausible contracts around
//! the current spot price. Premiums come from a simplified time-value
//! heuristic with bounded noise, not from the valuation engine; the display
//! IV attached to each contract is backed out from that premium afterwards.
//! Generation is deterministic for a fixed seed.

use anyhow::{anyhow, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

use crate::engine::bs::implied_vol;
use crate::engine::utils::log_moneyness;

/// A selectable option contract. Immutable once generated; a chain is
/// rebuilt from scratch when a new underlying is selected.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionContract {
    /// Display symbol, e.g. "AAPL-10D-200-C"
    pub symbol: String,
    /// Contract type: "call" or "put"
    pub option_type: String,
    /// Strike price
    pub strike: f64,
    /// Expiry label shown in the matrix header, e.g. "10D"
    pub expiry_label: String,
    /// Calendar days until expiration
    pub days_to_expiry: i32,
    /// Quoted bid
    pub bid: f64,
    /// Quoted ask
    pub ask: f64,
    /// Premium paid to open the position (per share)
    pub premium: f64,
    /// Open interest
    pub open_interest: u32,
    /// Display implied volatility backed out from the premium, when the
    /// premium admits one
    pub implied_vol: Option<f64>,
}

/// Configuration for synthetic chain generation
#[derive(Debug, Clone, Deserialize)]
pub struct ChainConfig {
    /// Expiry offsets from today, in calendar days
    #[serde(default = "default_expiry_days")]
    pub expiry_days: Vec<i32>,

    /// Strikes generated on each side of the money
    #[serde(default = "default_strikes_per_side")]
    pub strikes_per_side: usize,

    /// Spacing between strikes; None derives a step from the spot price
    #[serde(default)]
    pub strike_step: Option<f64>,

    /// Whether to generate put rows alongside calls
    #[serde(default = "default_include_puts")]
    pub include_puts: bool,

    /// Reference vol level driving the time-value heuristic
    #[serde(default = "default_base_vol")]
    pub base_vol: f64,

    /// Risk-free rate used when backing out display IVs
    #[serde(default = "default_rate")]
    pub rate: f64,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            expiry_days: default_expiry_days(),
            strikes_per_side: default_strikes_per_side(),
            strike_step: None,
            include_puts: default_include_puts(),
            base_vol: default_base_vol(),
            rate: default_rate(),
        }
    }
}

impl ChainConfig {
    /// Create a config with a custom expiry ladder and default strikes
    pub fn from_days(days: Vec<i32>) -> Self {
        Self {
            expiry_days: days,
            ..Default::default()
        }
    }
}

fn default_expiry_days() -> Vec<i32> {
    vec![3, 10, 17, 30]
}

fn default_strikes_per_side() -> usize {
    4
}

fn default_include_puts() -> bool {
    true
}

fn default_base_vol() -> f64 {
    0.25
}

fn default_rate() -> f64 {
    0.05
}

/// Strike spacing by price tier, matching how listed chains step strikes.
fn derive_strike_step(spot: f64) -> f64 {
    if spot < 25.0 {
        0.5
    } else if spot < 100.0 {
        1.0
    } else if spot < 250.0 {
        2.5
    } else {
        5.0
    }
}

/// Generate a synthetic option chain around the current spot price.
///
/// Contracts are ordered by expiry, then strike, with the call preceding the
/// put at each strike.
///
/// # Errors
///
/// * `anyhow::Error` if `spot` is not positive
/// * `anyhow::Error` if the expiry ladder is empty
pub fn build_chain(
    ticker: &str,
    spot: f64,
    config: &ChainConfig,
    rng: &mut StdRng,
) -> Result<Vec<OptionContract>> {
    if spot <= 0.0 {
        return Err(anyhow!("Spot price must be positive, got: {}", spot));
    }
    if config.expiry_days.is_empty() {
        return Err(anyhow!("Chain config has an empty expiry ladder"));
    }

    let step = config.strike_step.unwrap_or_else(|| derive_strike_step(spot));
    let center = (spot / step).round() * step;
    let n = config.strikes_per_side as i32;

    let mut contracts = Vec::new();

    for &days in &config.expiry_days {
        let expiry_label = format!("{}D", days);
        let years = days as f64 / 365.0;

        for i in -n..=n {
            let strike = center + i as f64 * step;
            if strike <= 0.0 {
                continue;
            }

            contracts.push(make_contract(
                ticker,
                "call",
                spot,
                strike,
                days,
                years,
                &expiry_label,
                config,
                rng,
            ));

            if config.include_puts {
                contracts.push(make_contract(
                    ticker,
                    "put",
                    spot,
                    strike,
                    days,
                    years,
                    &expiry_label,
                    config,
                    rng,
                ));
            }
        }
    }

    Ok(contracts)
}

/// Seeded convenience wrapper around [`build_chain`].
pub fn build_chain_seeded(
    ticker: &str,
    spot: f64,
    config: &ChainConfig,
    seed: u64,
) -> Result<Vec<OptionContract>> {
    let mut rng = StdRng::seed_from_u64(seed);
    build_chain(ticker, spot, config, &mut rng)
}

#[allow(clippy::too_many_arguments)]
fn make_contract(
    ticker: &str,
    option_type: &str,
    spot: f64,
    strike: f64,
    days: i32,
    years: f64,
    expiry_label: &str,
    config: &ChainConfig,
    rng: &mut StdRng,
) -> OptionContract {
    let is_put = option_type == "put";
    let intrinsic = if is_put {
        (strike - spot).max(0.0)
    } else {
        (spot - strike).max(0.0)
    };

    // Time value peaks at the money and decays with squared log-moneyness,
    // scaled to the reference vol and sqrt-time like an ATM straddle leg.
    let k = log_moneyness(strike, spot);
    let atm_time_value = 0.4 * spot * config.base_vol * years.sqrt();
    let falloff = (-k * k / (2.0 * config.base_vol * config.base_vol * years)).exp();
    let noise = rng.gen_range(0.85..1.15);

    let premium = round_cents(intrinsic + atm_time_value * falloff * noise);
    let half_spread = (premium * 0.04).max(0.01);
    let bid = round_cents((premium - half_spread).max(0.0));
    let ask = round_cents(premium + half_spread);

    let open_interest = (1500.0 * falloff * rng.gen_range(0.5..1.5)) as u32;

    let implied_vol = implied_vol(
        option_type,
        premium,
        spot,
        strike,
        config.rate,
        0.0,
        years,
        1e-6,
    )
    .ok();

    OptionContract {
        symbol: format!(
            "{}-{}-{}-{}",
            ticker,
            expiry_label,
            strike,
            if is_put { "P" } else { "C" }
        ),
        option_type: option_type.to_string(),
        strike,
        expiry_label: expiry_label.to_string(),
        days_to_expiry: days,
        bid,
        ask,
        premium,
        open_interest,
        implied_vol,
    }
}

fn round_cents(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
