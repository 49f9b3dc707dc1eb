//! Encode a handful of cells, then decode the text back.
//!
//! Run with: cargo run --example simple

use matrix_indicator::{encode, parse};
use std::collections::HashSet;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let cells = vec![(2, 1), (2, 3), (2, 4), (2, 6), (4, 1), (5, 1), (6, 1), (1, 5)];

    // Encode to indicator text
    let indicator = encode(&cells, |c| c.0, |c| c.1)?;
    println!("Indicator: {}\n", indicator);

    // Parse it back and decode
    let decoded: HashSet<(i32, i32)> = parse(indicator.as_str())
        .cells()
        .collect::<Result<_, _>>()?;
    assert_eq!(decoded, cells.into_iter().collect());
    println!("✓ Round-trip successful ({} cells)", decoded.len());

    Ok(())
}
