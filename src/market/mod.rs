//! Market data boundary
//!
//! Types and ingestion for the external market-data provider, plus the
//! synthetic generators that populate the dashboard when no feed is wired
//! up. The valuation engine itself consumes only `last_price` from a quote;
//! everything else exists for display.

pub mod chain;
pub mod history;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Per-symbol snapshot from the market data provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    /// Ticker symbol
    pub symbol: String,
    /// Last trade price; seeds spot for contract generation and chart scaling
    pub last_price: f64,
    /// Best bid
    pub bid: f64,
    /// Size at the best bid
    pub bid_size: f64,
    /// Best ask
    pub ask: f64,
    /// Size at the best ask
    pub ask_size: f64,
    /// Change versus previous close
    pub change: f64,
    /// Percent change versus previous close
    pub percent_change: f64,
    /// Snapshot timestamp (Unix seconds)
    pub timestamp: i64,
}

impl Quote {
    /// Midpoint of the quoted spread.
    pub fn mid(&self) -> f64 {
        (self.bid + self.ask) / 2.0
    }
}

/// Load quote snapshots from a CSV file.
///
/// Rows with a non-positive last price are skipped with a warning rather
/// than failing the whole load; a dead symbol should not take the dashboard
/// down with it.
pub fn load_quotes_csv(path: &str) -> Result<Vec<Quote>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open quote snapshot: {}", path))?;

    let mut quotes = Vec::new();
    for result in reader.deserialize() {
        let quote: Quote = result.context("Malformed quote row")?;
        if quote.last_price <= 0.0 {
            eprintln!(
                "Warning: skipping {} with non-positive last price {}",
                quote.symbol, quote.last_price
            );
            continue;
        }
        quotes.push(quote);
    }

    Ok(quotes)
}
