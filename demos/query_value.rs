//! Take an indicator straight out of a request payload with serde.
//!
//! Run with: cargo run --example query_value

use matrix_indicator::{Indicator, IndicatorOptions};
use serde::Deserialize;
use std::error::Error;

#[derive(Debug, Deserialize)]
struct CellRequest {
    sheet: String,
    cells: Indicator,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .init();

    // Untrusted input: cap how much a single value may expand to
    let options = IndicatorOptions::new().with_cell_limit(10_000);

    for body in [
        r#"{"sheet":"Sales","cells":"2,[1,3-4,6];[4-6],1;1,5"}"#,
        r#"{"sheet":"Sales","cells":"[0-99999],[0-99999]"}"#,
        r#"{"sheet":"Sales","cells":"1,[2,3"}"#,
    ] {
        let request: CellRequest = serde_json::from_str(body)?;
        let labels: Result<Vec<String>, _> = request
            .cells
            .decode_with_options(&options, |i, j| format!("({}, {})", i, j))
            .collect();

        match labels {
            Ok(labels) => println!("{}: {}", request.sheet, labels.join(" ")),
            Err(e) => println!("{}: rejected '{}': {}", request.sheet, request.cells, e),
        }
    }

    Ok(())
}
