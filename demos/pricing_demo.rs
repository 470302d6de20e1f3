// demos/pricing_demo.rs

//! Demonstration of chain generation and path valuation
//!
//! This example shows how to:
//! 1. Generate a synthetic option chain around a spot price
//! 2. Select a contract from the matrix
//! 3. Value a hypothetical future price path against it
//! 4. Compare P&L across the path samples

use anyhow::Result;
use payoff_lib::{
    build_option_chain, engine::utils::moneyness_label, value_path, ChainConfig, ValuationParams,
};

fn main() -> Result<()> {
    println!("Option Chain and Path Valuation Demo");
    println!("====================================");

    let ticker = "AAPL";
    let spot = 187.32;
    let chain = build_option_chain(ticker, spot, &ChainConfig::default(), 42)?;

    println!("Generated {} contracts for {} at ${:.2}", chain.len(), ticker, spot);

    println!("\nStep 1: 30-day call matrix");
    println!("Symbol | Strike | Moneyness | Bid | Ask | Premium | OI | IV%");
    for contract in chain
        .iter()
        .filter(|c| c.days_to_expiry == 30 && c.option_type == "call")
    {
        let iv = contract
            .implied_vol
            .map(|v| format!("{:.1}", v * 100.0))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{} | {:.1} | {} | {:.2} | {:.2} | {:.2} | {} | {}",
            contract.symbol,
            contract.strike,
            moneyness_label(contract.strike, spot, 0.01),
            contract.bid,
            contract.ask,
            contract.premium,
            contract.open_interest,
            iv
        );
    }

    // Pick the ATM 30-day call
    let selected = chain
        .iter()
        .filter(|c| c.days_to_expiry == 30 && c.option_type == "call")
        .min_by(|a, b| {
            (a.strike - spot)
                .abs()
                .partial_cmp(&(b.strike - spot).abs())
                .unwrap()
        })
        .expect("Chain should not be empty")
        .clone();

    println!("\nStep 2: selected {}", selected.symbol);
    println!("  Premium: ${:.2} (${:.2} per contract)", selected.premium, selected.premium * 100.0);

    // A hypothetical rally: +1% at 5 days, +3% at 12 days, +5% at 25 days
    let samples = [
        (spot * 1.01, 5.0),
        (spot * 1.03, 12.0),
        (spot * 1.05, 25.0),
    ];

    println!("\nStep 3: valuing the drawn path...");
    let valuations = value_path(&selected, &samples, &ValuationParams::default());

    println!("Price | Days Ahead | Contract Value | P&L");
    for ((price, day), v) in samples.iter().zip(valuations.iter()) {
        println!(
            "${:.2} | {:>4.0} | ${:>8.2} | {:>+9.2}",
            price, day, v.value, v.pnl
        );
    }

    Ok(())
}
