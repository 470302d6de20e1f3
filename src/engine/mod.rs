pub mod bs;
pub mod pnl;

/// Utility functions shared by the valuation engine
pub mod utils {
    /// Calculate log-moneyness: ln(K/S)
    pub fn log_moneyness(strike: f64, spot: f64) -> f64 {
        (strike / spot).ln()
    }

    /// Classify a call strike relative to spot for display purposes.
    /// The band around spot within `atm_band` (fractional) counts as ATM.
    pub fn moneyness_label(strike: f64, spot: f64, atm_band: f64) -> &'static str {
        let rel = (spot - strike) / spot;
        if rel.abs() <= atm_band {
            "ATM"
        } else if rel > 0.0 {
            "ITM"
        } else {
            "OTM"
        }
    }
}
