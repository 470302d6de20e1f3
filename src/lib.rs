//! # Payoff-Lib: Interactive Option P&L Simulation
//!
//! `payoff-lib` is a Rust library for trading-dashboard prediction charts:
//! it values user-drawn future price paths against a selected option
//! contract and maintains the fading overlay grid that visualizes the
//! result. The numeric core is a closed-form Black-Scholes valuation; the
//! interactive core is an explicit, framework-independent state machine.
//!
//! ## Core Features
//!
//! - **Black-Scholes Engine**: call/put pricing on an Abramowitz-Stegun
//!   normal-CDF approximation, with Brent implied-vol inversion
//! - **Path-to-P&L Mapping**: pure `(price, day) -> (value, pnl)` valuation
//!   for any point on a drawn path
//! - **Path Recorder**: pointer-driven Idle/Drawing state machine with
//!   sample throttling and a decaying overlay trail
//! - **Seeded Synthetic Data**: deterministic option chains and GBM price
//!   history for feeds-free development and tests
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use payoff_lib::{build_option_chain, default_configs, ChainConfig, PathRecorder};
//!
//! // Generate a contract matrix around the current spot price
//! let spot = 187.32;
//! let chain = build_option_chain("AAPL", spot, &ChainConfig::default(), 42)?;
//!
//! // Wire up a recorder for the prediction chart and select a contract
//! let config = default_configs::desktop();
//! let mut recorder = PathRecorder::new(&config, spot)?;
//! recorder.select_contract(chain.first().cloned());
//!
//! // Pointer events stream in from the UI shell...
//! recorder.begin(420.0, 180.0);
//! recorder.extend(440.0, 160.0);
//! let path = recorder.end();
//!
//! // ...and the frame clock drives the overlay decay
//! recorder.tick();
//! println!("recorded {} points, {} live cells", path.len(), recorder.cells().len());
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Configuration Presets
//!
//! The library provides several chart configuration presets:
//! - `desktop()`: full-width chart with mouse-grade 5px sampling
//! - `touch()`: coarser sampling and faster fade for touch input
//! - `compact()`: small dashboard-card chart
//! - `minimal()`: tiny chart for quick validation

// ================================================================================================
// MODULES
// ================================================================================================

pub mod chart;
pub mod engine;
pub mod market;

// ================================================================================================
// IMPORTS
// ================================================================================================

use anyhow::Result;

use market::chain::{build_chain_seeded, ChainConfig as InternalChainConfig};

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Chart state types
pub use chart::{
    ChartConfig, ChartGeometry, DecayTrail, GridCell, PathRecorder, PricePoint, RecorderMode,
};

// Valuation engine
pub use engine::bs::{bs_call_price, bs_put_price, implied_vol, norm_cdf};
pub use engine::pnl::{
    value_path, value_point, PointValuation, ValuationParams, CONTRACT_MULTIPLIER, DAYS_PER_YEAR,
};

// Market boundary types and generators
pub use market::chain::{build_chain, ChainConfig, OptionContract};
pub use market::history::{generate_history, generate_history_seeded, HistoryConfig};
pub use market::{load_quotes_csv, Quote};

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured chart settings for common surfaces.
///
/// # Available Configurations
///
/// - [`desktop()`]: Standard desktop chart
/// - [`touch()`]: Touch-input tuning
/// - [`compact()`]: Dashboard-card sizing
/// - [`minimal()`]: Test-sized chart
pub mod default_configs {
    use crate::chart::ChartConfig;

    /// Standard desktop chart: 800x400, 40% history region, 5px sampling.
    ///
    /// # Example
    ///
    /// ```rust
    /// use payoff_lib::default_configs;
    ///
    /// let config = default_configs::desktop();
    /// assert_eq!(config.min_sample_px, 5.0);
    /// ```
    pub fn desktop() -> ChartConfig {
        ChartConfig::desktop()
    }

    /// Touch-input settings: 10px sampling threshold and a faster fade.
    ///
    /// Finger travel is noisier than a mouse, so the throttle is coarser to
    /// keep sample density bounded on swipes.
    pub fn touch() -> ChartConfig {
        ChartConfig::touch()
    }

    /// Small chart for dashboard cards (480x240).
    pub fn compact() -> ChartConfig {
        ChartConfig::compact()
    }

    /// Tiny chart for quick validation and unit tests (100x100, fast fade).
    pub fn minimal() -> ChartConfig {
        ChartConfig::minimal()
    }
}

// ================================================================================================
// TOP-LEVEL API
// ================================================================================================

/// Generate the selectable contract matrix for an underlying.
///
/// This is the seeded entry point for populating an options-chain view:
/// contracts span the configured expiry ladder (3/10/17/30 days by default)
/// and strike offsets around spot, with premiums from a simplified
/// time-value heuristic plus bounded noise. The same seed always yields the
/// same chain, so snapshots are reproducible in tests and demos.
///
/// The generated premiums are display data; they do not feed back into path
/// valuation, which prices from its own [`ValuationParams`].
///
/// # Arguments
///
/// * `ticker` - Underlying symbol used in contract display symbols
/// * `spot` - Current underlying price; must be positive
/// * `config` - Expiry ladder, strike layout and heuristic parameters
/// * `seed` - RNG seed for the premium/open-interest noise
///
/// # Errors
///
/// * `anyhow::Error` if `spot` is non-positive or the expiry ladder is empty
///
/// # Example
///
/// ```rust
/// use payoff_lib::{build_option_chain, ChainConfig};
///
/// let chain = build_option_chain("SPY", 445.10, &ChainConfig::default(), 7)?;
/// assert!(!chain.is_empty());
/// let again = build_option_chain("SPY", 445.10, &ChainConfig::default(), 7)?;
/// assert_eq!(chain, again);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn build_option_chain(
    ticker: &str,
    spot: f64,
    config: &InternalChainConfig,
    seed: u64,
) -> Result<Vec<OptionContract>> {
    build_chain_seeded(ticker, spot, config, seed)
}
