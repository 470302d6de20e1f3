// Example: plot_pnl_grid.rs
// Renders the P&L landscape for an at-the-money call as an SVG heatmap,
// with a simulated drawn path overlaid the way the dashboard draws it.
//
// Usage:
//     cargo run --example plot_pnl_grid
//
// The output image is written to pnl_grid.svg in the working directory.

use std::error::Error;

use plotters::prelude::*;

use payoff_lib::{
    build_option_chain, default_configs, value_point, ChainConfig, PathRecorder, ValuationParams,
};

fn main() -> Result<(), Box<dyn Error>> {
    let spot = 187.32;
    let chain = build_option_chain("AAPL", spot, &ChainConfig::default(), 42)?;
    let contract = chain
        .iter()
        .filter(|c| c.days_to_expiry == 30 && c.option_type == "call")
        .min_by(|a, b| {
            (a.strike - spot)
                .abs()
                .partial_cmp(&(b.strike - spot).abs())
                .unwrap()
        })
        .expect("Chain should contain 30D calls")
        .clone();

    println!(
        "Plotting P&L grid for {} (strike {}, premium ${:.2})",
        contract.symbol, contract.strike, contract.premium
    );

    let params = ValuationParams::default();
    let price_lo = spot * 0.85;
    let price_hi = spot * 1.15;
    let horizon = 30.0;

    // Sample the P&L surface over (day, price)
    let day_steps = 60;
    let price_steps = 60;
    let mut max_abs_pnl: f64 = 1.0;
    let mut cells = Vec::with_capacity(day_steps * price_steps);
    for i in 0..day_steps {
        let day = horizon * i as f64 / day_steps as f64;
        for j in 0..price_steps {
            let price = price_lo + (price_hi - price_lo) * j as f64 / price_steps as f64;
            let v = value_point(Some(&contract), price, day, &params);
            max_abs_pnl = max_abs_pnl.max(v.pnl.abs());
            cells.push((day, price, v.pnl));
        }
    }

    // Simulate a drawn path on a recorder with the same horizon
    let mut recorder = PathRecorder::new(&default_configs::desktop(), spot)?;
    recorder.select_contract(Some(contract.clone()));
    recorder.begin(330.0, 210.0);
    let mut x = 330.0;
    let mut y = 210.0;
    while x < 790.0 {
        x += 10.0;
        y -= 3.0;
        recorder.extend(x, y);
    }
    let path = recorder.end();

    let root = SVGBackend::new("pnl_grid.svg", (1280, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(
            format!(
                "Long {} P&L vs price and date | premium ${:.2}",
                contract.symbol, contract.premium
            ),
            ("sans-serif", 30),
        )
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..horizon, price_lo..price_hi)?;

    chart
        .configure_mesh()
        .x_desc("Days ahead")
        .y_desc("Underlying price ($)")
        .draw()?;

    // Heatmap: green profit, red loss, intensity by magnitude
    let day_w = horizon / day_steps as f64;
    let price_h = (price_hi - price_lo) / price_steps as f64;
    chart.draw_series(cells.iter().map(|&(day, price, pnl)| {
        let intensity = (pnl.abs() / max_abs_pnl).sqrt();
        let shade = (200.0 * intensity) as u8;
        let color = if pnl >= 0.0 {
            RGBColor(255 - shade, 255, 255 - shade)
        } else {
            RGBColor(255, 255 - shade, 255 - shade)
        };
        Rectangle::new([(day, price), (day + day_w, price + price_h)], color.filled())
    }))?;

    // Breakeven line: where P&L crosses zero at expiry
    let breakeven = contract.strike + contract.premium;
    chart.draw_series(std::iter::once(PathElement::new(
        vec![(0.0, breakeven), (horizon, breakeven)],
        BLACK.stroke_width(1),
    )))?;

    // Drawn path overlay in market coordinates
    let overlay: Vec<(f64, f64)> = path.iter().map(|p| (p.day_offset, p.price)).collect();
    chart.draw_series(std::iter::once(PathElement::new(overlay, BLUE.stroke_width(3))))?;
    chart.draw_series(
        path.iter()
            .map(|p| Circle::new((p.day_offset, p.price), 2, BLUE.filled())),
    )?;

    root.present()?;
    println!("Wrote pnl_grid.svg ({} path points)", path.len());

    Ok(())
}
