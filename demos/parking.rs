//! Parking-lot path planning demo.
//!
//! Run: cargo run --bin parking [scenario.toml]
//!
//! Without an argument the built-in 10x10 parking lot is used. Set
//! `GRIDPATH_LOG` to `debug` or `trace` for search statistics.

use std::io;

use gridpath::find_path;
use gridpath_demos::{Scenario, render, summary};
use log::LevelFilter;

fn log_level() -> LevelFilter {
    std::env::var("GRIDPATH_LOG")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(LevelFilter::Info)
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    fast_log::init(fast_log::config::Config::new().console().level(log_level()))?;

    let scenario = match std::env::args().nth(1) {
        Some(path) => Scenario::from_file(path)?,
        None => Scenario::parking_lot(10, 10),
    };
    let query = scenario.build()?;

    let path = find_path(query.start, query.goal, &query.grid)?;
    match &path {
        Some(path) => {
            println!("{}", summary(path));
            for c in path.iter() {
                println!("  {c}");
            }
        }
        None => {
            log::warn!("{} is unreachable from {}", query.goal, query.start);
            println!("No valid path found. Please reconfigure the scenario.");
        }
    }
    println!();

    let stdout = io::stdout();
    render(&mut stdout.lock(), &query.grid, path.as_ref(), query.start, query.goal)?;

    log::logger().flush();
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        log::logger().flush();
        std::process::exit(1);
    }
}
