//! Path-to-P&L mapping
//!
//! Maps `(price, day)` samples from a drawn future path to hypothetical
//! contract value and profit/loss for the selected option contract. The
//! mapping holds the implied volatility and risk-free rate fixed across the
//! whole path (no volatility surface or term structure), which keeps it an
//! illustrative long-position P&L rather than a full Greeks model.

use crate::engine::bs::{bs_call_price, bs_put_price};
use crate::market::chain::OptionContract;

/// Shares per standard equity option contract.
pub const CONTRACT_MULTIPLIER: f64 = 100.0;

/// Day-count convention used to convert day offsets to year fractions.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Valuation inputs that are held constant across a drawn path.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValuationParams {
    /// Annualized volatility used for every sample on the path.
    pub sigma: f64,
    /// Annualized risk-free rate.
    pub r: f64,
}

impl Default for ValuationParams {
    fn default() -> Self {
        Self { sigma: 0.20, r: 0.05 }
    }
}

/// Contract value and profit/loss at a single `(price, day)` sample.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointValuation {
    /// Hypothetical value of one contract (unit price x multiplier).
    pub value: f64,
    /// Value minus the premium paid for one contract.
    pub pnl: f64,
}

impl PointValuation {
    pub const ZERO: PointValuation = PointValuation { value: 0.0, pnl: 0.0 };
}

/// Value a single hypothetical `(price, day)` point against a contract.
///
/// `days_from_now` is the sample's implied date expressed as days ahead of
/// today. Time remaining on the contract is floored at zero, so samples past
/// expiry price at intrinsic value. With no contract selected the result is
/// zero value and zero P&L; nothing here errors.
pub fn value_point(
    contract: Option<&OptionContract>,
    price: f64,
    days_from_now: f64,
    params: &ValuationParams,
) -> PointValuation {
    let contract = match contract {
        Some(c) => c,
        None => return PointValuation::ZERO,
    };

    let days_left = (contract.days_to_expiry as f64 - days_from_now).max(0.0);
    let t = days_left / DAYS_PER_YEAR;

    let unit = if contract.option_type.eq_ignore_ascii_case("put") {
        bs_put_price(price, contract.strike, params.r, 0.0, t, params.sigma)
    } else {
        bs_call_price(price, contract.strike, params.r, 0.0, t, params.sigma)
    };

    let value = unit * CONTRACT_MULTIPLIER;
    let pnl = value - contract.premium * CONTRACT_MULTIPLIER;

    PointValuation { value, pnl }
}

/// Value an ordered sequence of `(price, days_from_now)` samples.
///
/// Sample order is preserved; one valuation per sample, no reordering.
pub fn value_path(
    contract: &OptionContract,
    samples: &[(f64, f64)],
    params: &ValuationParams,
) -> Vec<PointValuation> {
    samples
        .iter()
        .map(|&(price, day)| value_point(Some(contract), price, day, params))
        .collect()
}
