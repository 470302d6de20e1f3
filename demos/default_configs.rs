use payoff_lib::{default_configs, PathRecorder};

fn main() {
    println!("Payoff-lib Default Configuration Examples\n");

    // 1. Desktop configuration
    println!("1. Desktop Configuration (standard chart):");
    let desktop = default_configs::desktop();
    println!("   Size: {}x{}", desktop.width, desktop.height);
    println!("   Future boundary: {:.0}% of width", desktop.future_boundary * 100.0);
    println!("   Horizon: {} days", desktop.horizon_days);
    println!("   Sampling threshold: {}px", desktop.min_sample_px);
    println!("   Fade decrement: {}", desktop.fade_decrement);
    println!("   Use case: Full-width dashboard chart with mouse input\n");

    // 2. Touch configuration
    println!("2. Touch Configuration (tablet/phone):");
    let touch = default_configs::touch();
    println!("   Sampling threshold: {}px", touch.min_sample_px);
    println!("   Fade decrement: {}", touch.fade_decrement);
    println!("   Use case: Finger drawing; coarser throttle, faster fade\n");

    // 3. Compact configuration
    println!("3. Compact Configuration (dashboard card):");
    let compact = default_configs::compact();
    println!("   Size: {}x{}", compact.width, compact.height);
    println!("   Use case: Small embedded chart in a card grid\n");

    // 4. Minimal configuration
    println!("4. Minimal Configuration (tests):");
    let minimal = default_configs::minimal();
    println!("   Size: {}x{}", minimal.width, minimal.height);
    println!("   Fade decrement: {}", minimal.fade_decrement);
    println!("   Use case: Unit tests and quick validation\n");

    // Every preset should yield a working recorder out of the box.
    for (name, config) in [
        ("desktop", desktop),
        ("touch", touch),
        ("compact", compact),
        ("minimal", minimal),
    ] {
        match PathRecorder::new(&config, 100.0) {
            Ok(_) => println!("{}: recorder constructed OK", name),
            Err(e) => println!("{}: FAILED ({})", name, e),
        }
    }
}
