//! Select cells of a grid with a predicate and print the indicator.
//!
//! Run with: cargo run --example grid

use matrix_indicator::{encode_grid, encode_grid_with_options, Axis, IndicatorOptions};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let grid = vec![
        vec![0, 0, 0, 0, 0, 0, 0],
        vec![0, 0, 1, 0, 1, 1, 1],
        vec![0, 0, 0, 0, 0, 0, 0],
        vec![0, 0, 1, 0, 0, 0, 0],
        vec![0, 0, 1, 0, 0, 0, 0],
        vec![0, 1, 0, 0, 0, 0, 0],
        vec![0, 0, 1, 0, 0, 0, 0],
    ];

    for row in &grid {
        let line: Vec<&str> = row.iter().map(|&v| if v == 1 { "■" } else { "·" }).collect();
        println!("{}", line.join(" "));
    }
    println!();

    let rows_first = encode_grid(&grid, |_, _, &v| v == 1)?;
    println!("Ties favor rows:    {}", rows_first);

    let options = IndicatorOptions::new().with_tie_break(Axis::Column);
    let columns_first = encode_grid_with_options(&grid, |_, _, &v| v == 1, &options)?;
    println!("Ties favor columns: {}", columns_first);

    // Paint the decoded cells back onto an empty grid
    let mut painted = vec![vec![0; 7]; 7];
    for cell in rows_first.cells() {
        let (row, col) = cell?;
        painted[row as usize][col as usize] = 1;
    }
    assert_eq!(painted, grid);
    println!("\n✓ Decoded cells match the grid");

    Ok(())
}
