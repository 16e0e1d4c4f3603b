//! Trace a route through a track and print it.
//!
//! Usage: `trace_track [TRACK_FILE] [PADDING]`
//!
//! Without a file the built-in circuit is used. Set `RUST_LOG=debug` to
//! see every leg.

use std::error::Error;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use trackline::prelude::*;
use trackline::render::render_route;
use trackline_test_utils::tracks;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let (text, source) = match args.next() {
        Some(path) => (std::fs::read_to_string(&path)?, path),
        None => (tracks::CIRCUIT.to_string(), "built-in circuit".to_string()),
    };
    let min_padding = match args.next() {
        Some(arg) => arg.parse::<u32>()?,
        None => RouteConfig::default().min_padding,
    };

    let grid = Grid::parse(&text)?;
    println!(
        "=== {source}: {}x{}, padding {min_padding} ===\n",
        grid.width(),
        grid.height()
    );

    let route = compute_route(min_padding, &grid)?;
    for (index, leg) in route.legs().iter().enumerate() {
        println!(
            "  leg {index:>2}: {:<5} {:>3} steps, stop at {}",
            leg.heading().name(),
            leg.steps().len(),
            leg.end()
        );
    }
    match route.status() {
        RouteStatus::Complete => println!("\nreached the finish at {}\n", route.end().coordinate),
        RouteStatus::Stalled(reason) => println!("\nstalled at {}: {reason}\n", route.end()),
    }
    print!("{}", render_route(&grid, &route));
    Ok(())
}
