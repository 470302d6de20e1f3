// Black-Scholes pricing helpers for the path valuation engine.  Greeks beyond
// what the chain display needs are intentionally omitted to keep the
// lightweight focus of payoff-lib.

use anyhow::{anyhow, Result};
use roots::find_root_brent;

/// Standard normal cumulative distribution function.
///
/// Uses the Abramowitz-Stegun 7.1.26 rational approximation of erf with
/// five coefficients, reflected for negative inputs. Absolute error is
/// bounded by ~1.5e-7, which is below anything visible on a P&L overlay.
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf(x / 2.0_f64.sqrt()))
}

/// Error function approximation (Abramowitz-Stegun 7.1.26).
fn erf(x: f64) -> f64 {
    let a1 = 0.254829592;
    let a2 = -0.284496736;
    let a3 = 1.421413741;
    let a4 = -1.453152027;
    let a5 = 1.061405429;
    let p = 0.3275911;

    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + p * x);
    let y = 1.0 - (((((a5 * t + a4) * t) + a3) * t + a2) * t + a1) * t * (-x * x).exp();

    sign * y
}

// High-precision CDF for the implied-vol solver. The A&S approximation has
// an error floor near 1e-7; Brent converges below that, so the solver prices
// against the libm erf instead.
fn norm_cdf_precise(x: f64) -> f64 {
    0.5 * (1.0 + libm::erf(x / 2.0_f64.sqrt()))
}

/// Price of a European call option under Black-Scholes assumptions.
///
/// An expired contract (`T <= 0`) is worth exactly its intrinsic value
/// `max(0, S - K)`, independent of `sigma`, `r` and `q`. Callers must supply
/// `S > 0` and `K > 0`; this is a documented precondition, not checked here.
#[allow(non_snake_case)]
pub fn bs_call_price(S: f64, K: f64, r: f64, q: f64, T: f64, sigma: f64) -> f64 {
    if T <= 0.0 {
        return (S - K).max(0.0);
    }
    if sigma <= 0.0 {
        return (S * (-q * T).exp() - K * (-r * T).exp()).max(0.0);
    }
    let d1 = ((S / K).ln() + (r - q + 0.5 * sigma.powi(2)) * T) / (sigma * T.sqrt());
    let d2 = d1 - sigma * T.sqrt();
    (S * (-q * T).exp() * norm_cdf(d1) - K * (-r * T).exp() * norm_cdf(d2)).max(0.0)
}

/// Price of a European put option under Black-Scholes assumptions.
#[allow(non_snake_case)]
pub fn bs_put_price(S: f64, K: f64, r: f64, q: f64, T: f64, sigma: f64) -> f64 {
    if T <= 0.0 {
        return (K - S).max(0.0);
    }
    if sigma <= 0.0 {
        return (K * (-r * T).exp() - S * (-q * T).exp()).max(0.0);
    }
    let d1 = ((S / K).ln() + (r - q + 0.5 * sigma.powi(2)) * T) / (sigma * T.sqrt());
    let d2 = d1 - sigma * T.sqrt();
    let nd1m = 1.0 - norm_cdf(d1);
    let nd2m = 1.0 - norm_cdf(d2);
    (K * (-r * T).exp() * nd2m - S * (-q * T).exp() * nd1m).max(0.0)
}

#[allow(non_snake_case)]
fn bs_call_price_precise(S: f64, K: f64, r: f64, q: f64, T: f64, sigma: f64) -> f64 {
    if T <= 0.0 || sigma <= 0.0 {
        return (S * (-q * T).exp() - K * (-r * T).exp()).max(0.0);
    }
    let d1 = ((S / K).ln() + (r - q + 0.5 * sigma.powi(2)) * T) / (sigma * T.sqrt());
    let d2 = d1 - sigma * T.sqrt();
    S * (-q * T).exp() * norm_cdf_precise(d1) - K * (-r * T).exp() * norm_cdf_precise(d2)
}

#[allow(non_snake_case)]
fn bs_put_price_precise(S: f64, K: f64, r: f64, q: f64, T: f64, sigma: f64) -> f64 {
    if T <= 0.0 || sigma <= 0.0 {
        return (K * (-r * T).exp() - S * (-q * T).exp()).max(0.0);
    }
    let d1 = ((S / K).ln() + (r - q + 0.5 * sigma.powi(2)) * T) / (sigma * T.sqrt());
    let d2 = d1 - sigma * T.sqrt();
    K * (-r * T).exp() * (1.0 - norm_cdf_precise(d2)) - S * (-q * T).exp() * (1.0 - norm_cdf_precise(d1))
}

/// Volatility search bracket for implied-vol solving (annualized).
const IV_SIGMA_MIN: f64 = 1e-4;
const IV_SIGMA_MAX: f64 = 5.0;

/// Back out the Black-Scholes implied volatility for an observed option price.
///
/// Uses Brent's method on the pricing formula over sigma in
/// `[IV_SIGMA_MIN, IV_SIGMA_MAX]`.
///
/// # Errors
///
/// * `anyhow::Error` if `price`, `S`, `K` or `T` are non-positive
/// * `anyhow::Error` if the price lies outside the attainable range for the
///   bracket (e.g. below intrinsic value), so no root exists
/// * `anyhow::Error` if root finding fails to converge
#[allow(non_snake_case)]
pub fn implied_vol(
    option_type: &str,
    price: f64,
    S: f64,
    K: f64,
    r: f64,
    q: f64,
    T: f64,
    tol: f64,
) -> Result<f64> {
    if price <= 0.0 || S <= 0.0 || K <= 0.0 || T <= 0.0 {
        return Err(anyhow!(
            "Invalid implied vol inputs: price={}, S={}, K={}, T={}",
            price,
            S,
            K,
            T
        ));
    }

    let is_put = option_type.eq_ignore_ascii_case("put");
    let objective = |sigma: f64| -> f64 {
        let model = if is_put {
            bs_put_price_precise(S, K, r, q, T, sigma)
        } else {
            bs_call_price_precise(S, K, r, q, T, sigma)
        };
        model - price
    };

    // Brent needs a sign change across the bracket; a premium at or below
    // intrinsic value has no positive-vol solution.
    if objective(IV_SIGMA_MIN) > 0.0 || objective(IV_SIGMA_MAX) < 0.0 {
        return Err(anyhow!(
            "Price {} is outside the attainable range for K={} at S={}",
            price,
            K,
            S
        ));
    }

    match find_root_brent(IV_SIGMA_MIN, IV_SIGMA_MAX, &objective, &mut tol.clone()) {
        Ok(sigma) => Ok(sigma),
        Err(_) => Err(anyhow!(
            "Implied vol root finding failed for price={}, K={}",
            price,
            K
        )),
    }
}
