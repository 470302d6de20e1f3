// demos/draw_path_demo.rs

//! Simulates the full interactive loop without a UI: pointer events stream
//! into the path recorder while frame ticks decay the overlay trail, then
//! the finished path is reported the way a chart component would consume it.

use anyhow::Result;
use payoff_lib::{build_option_chain, default_configs, ChainConfig, PathRecorder, RecorderMode};

fn main() -> Result<()> {
    println!("Interactive Path Recorder Demo");
    println!("==============================");

    let spot = 242.60;
    let chain = build_option_chain("TSLA", spot, &ChainConfig::default(), 7)?;
    let contract = chain
        .iter()
        .find(|c| c.days_to_expiry == 17 && c.option_type == "call")
        .expect("Chain should contain 17D calls")
        .clone();

    let mut recorder = PathRecorder::new(&default_configs::desktop(), spot)?;
    println!("Selected {} (premium ${:.2})", contract.symbol, contract.premium);
    recorder.select_contract(Some(contract));

    // A pointer-down left of the future boundary is ignored.
    assert!(!recorder.begin(200.0, 180.0));
    println!("\nPointer-down in the history region: ignored (mode {:?})", recorder.mode());

    // Drag an upward-sloping prediction across the future region, with a
    // frame tick interleaved every few moves like a real render loop.
    recorder.begin(330.0, 220.0);
    let mut moves = 0;
    let mut x = 330.0;
    let mut y = 220.0;
    while x < 780.0 {
        x += 15.0;
        y -= 4.0;
        if recorder.extend(x, y) {
            moves += 1;
        }
        if moves % 3 == 0 {
            recorder.tick();
        }
    }

    assert_eq!(recorder.mode(), RecorderMode::Drawing);
    println!("\nRecorded {} samples, {} live cells", recorder.path().len(), recorder.cells().len());

    let path = recorder.end();
    println!("\nFinished path ({} points):", path.len());
    println!("Day | Price | Value | P&L");
    for point in path.iter().step_by(5) {
        let v = recorder.value_at(point.price, point.day_offset);
        println!(
            "{:>4.1} | ${:>7.2} | ${:>8.2} | {:>+9.2}",
            point.day_offset, point.price, v.value, v.pnl
        );
    }

    // Run the trail down to nothing, as happens once the pointer lifts.
    let mut ticks = 0;
    while !recorder.cells().is_empty() {
        recorder.tick();
        ticks += 1;
    }
    println!("\nTrail fully decayed after {} more ticks", ticks);

    recorder.clear();
    println!("Cleared; path length is now {}", recorder.path().len());

    Ok(())
}
