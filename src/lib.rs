//! # matrix_indicator
//!
//! A compact text encoding for sparse sets of two-dimensional integer coordinates, such as the
//! non-zero cells of a matrix.
//!
//! ## What is an indicator?
//!
//! Non-zero cells often share a row or a column, or sit in consecutive runs. An indicator
//! exploits that by writing one fixed value on one axis against a list of values on the other,
//! with runs collapsed to `first-last`:
//!
//! ```text
//! 2,[1,3-4,6];[4-6],1;1,5
//! ```
//!
//! reads as three groups: row `2` with columns `1, 3, 4, 6`; rows `4, 5, 6` with column `1`;
//! and the single cell `(1, 5)`. The text only uses digits and `, [ ] - ;`, so it fits in a URL
//! path segment or query value.
//!
//! ## Quick Start
//!
//! ```rust
//! use matrix_indicator::{encode, parse};
//! use std::collections::HashSet;
//!
//! let cells = vec![(2, 1), (2, 3), (2, 4), (2, 6), (4, 1), (5, 1), (6, 1), (1, 5)];
//!
//! // Encode from any collection, choosing how to read the row and column
//! let indicator = encode(&cells, |c| c.0, |c| c.1).unwrap();
//! assert_eq!(indicator.as_str(), "2,[1,3-4,6];[4-6],1;1,5");
//!
//! // Parse is free: it wraps the text and defers all work to decode
//! let back = parse(indicator.as_str());
//! let decoded: HashSet<(i32, i32)> = back.cells().collect::<Result<_, _>>().unwrap();
//! assert_eq!(decoded, cells.into_iter().collect());
//! ```
//!
//! ## Key Features
//!
//! - **Lazy decoding**: [`Decoder`] is an iterator; huge ranges cost nothing until pulled
//! - **Any item type**: [`encode`] takes selector closures, [`Indicator::decode`] takes a converter
//! - **Grid input**: [`encode_grid`] selects cells from rows of values with a predicate
//! - **Serde Compatible**: [`Indicator`] serializes as its text, so it drops into request types
//! - **Strict errors**: Malformed text is rejected with a positioned [`Error`]
//!
//! ## Performance Characteristics
//!
//! - **Decoding**: O(n) in the text length plus O(1) per yielded pair
//! - **Encoding**: O(k log k) for k input pairs
//!
//! ## Format
//!
//! See the [`format`] module for the grammar and the decoding rules.

pub mod de;
pub mod error;
pub mod format;
pub mod indicator;
pub mod options;
pub mod range;
pub mod ser;

pub use de::Decoder;
pub use error::{Error, Result};
pub use indicator::Indicator;
pub use options::{Axis, IndicatorOptions};
pub use range::Range;
pub use ser::Encoder;

/// Wraps indicator text without validating it.
///
/// Never fails. Malformed text is reported when it is decoded.
///
/// # Examples
///
/// ```rust
/// use matrix_indicator::{parse, to_text};
///
/// let indicator = parse("1,[2-4]");
/// assert_eq!(to_text(&indicator), "1,[2-4]");
/// ```
#[must_use]
pub fn parse(text: &str) -> Indicator {
    Indicator::parse(text)
}

/// Returns the text an indicator wraps, unchanged.
#[must_use]
pub fn to_text(indicator: &Indicator) -> &str {
    indicator.as_str()
}

/// Decodes indicator text straight from a borrowed string.
///
/// # Examples
///
/// ```rust
/// use matrix_indicator::decode;
///
/// let total: i32 = decode("[1-3],0", |i, _| i).map(Result::unwrap).sum();
/// assert_eq!(total, 6);
/// ```
pub fn decode<T, F>(text: &str, converter: F) -> Decoder<'_, F>
where
    F: FnMut(i32, i32) -> T,
{
    Decoder::new(text, converter)
}

/// Encodes a collection of items, reading each item's row and column through selectors.
///
/// Returns [`Indicator::Empty`] for an empty collection.
///
/// # Examples
///
/// ```rust
/// use matrix_indicator::encode;
///
/// struct Seat { row: i32, number: i32 }
///
/// let booked = vec![Seat { row: 3, number: 1 }, Seat { row: 3, number: 2 }];
/// let indicator = encode(&booked, |s| s.row, |s| s.number).unwrap();
/// assert_eq!(indicator.as_str(), "3,[1-2]");
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if a selector yields a negative coordinate.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode<I, R, C>(items: I, row_of: R, col_of: C) -> Result<Indicator>
where
    I: IntoIterator,
    R: FnMut(&I::Item) -> i32,
    C: FnMut(&I::Item) -> i32,
{
    encode_with_options(items, row_of, col_of, &IndicatorOptions::default())
}

/// Encodes a collection of items with custom options.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if a selector yields a negative coordinate.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode_with_options<I, R, C>(
    items: I,
    mut row_of: R,
    mut col_of: C,
    options: &IndicatorOptions,
) -> Result<Indicator>
where
    I: IntoIterator,
    R: FnMut(&I::Item) -> i32,
    C: FnMut(&I::Item) -> i32,
{
    let mut encoder = Encoder::new(options.clone());
    for item in items {
        encoder.push(row_of(&item), col_of(&item))?;
    }
    Ok(encoder.finish())
}

/// Encodes the cells of a grid for which `predicate(row, col, &cell)` holds.
///
/// Rows may have different lengths. Selected cells are emitted as `(row, col)` pairs.
///
/// # Examples
///
/// ```rust
/// use matrix_indicator::encode_grid;
///
/// let grid = vec![
///     vec![0, 1, 1],
///     vec![0, 0, 0],
///     vec![0, 1, 0],
/// ];
/// let indicator = encode_grid(&grid, |_, _, &v| v == 1).unwrap();
/// assert_eq!(indicator.as_str(), "0,[1-2];2,1");
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if the grid is larger than `i32::MAX` in either dimension.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode_grid<T, Row, P>(grid: &[Row], predicate: P) -> Result<Indicator>
where
    Row: AsRef<[T]>,
    P: FnMut(i32, i32, &T) -> bool,
{
    encode_grid_with_options(grid, predicate, &IndicatorOptions::default())
}

/// Encodes the selected cells of a grid with custom options.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if the grid is larger than `i32::MAX` in either dimension.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode_grid_with_options<T, Row, P>(
    grid: &[Row],
    mut predicate: P,
    options: &IndicatorOptions,
) -> Result<Indicator>
where
    Row: AsRef<[T]>,
    P: FnMut(i32, i32, &T) -> bool,
{
    let mut encoder = Encoder::new(options.clone());
    for (row, cells) in grid.iter().enumerate() {
        let row = grid_index(row)?;
        for (col, cell) in cells.as_ref().iter().enumerate() {
            let col = grid_index(col)?;
            if predicate(row, col, cell) {
                encoder.push(row, col)?;
            }
        }
    }
    Ok(encoder.finish())
}

fn grid_index(index: usize) -> Result<i32> {
    i32::try_from(index)
        .map_err(|_| Error::invalid_argument(format!("grid index {} exceeds i32::MAX", index)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    struct Cell {
        x: i32,
        y: i32,
    }

    #[test]
    fn test_encode_decode_struct_items() {
        let items = vec![Cell { x: 0, y: 0 }, Cell { x: 0, y: 1 }, Cell { x: 4, y: 1 }];
        let indicator = encode(&items, |c| c.x, |c| c.y).unwrap();

        let back: HashSet<Cell> = indicator
            .decode(|x, y| Cell { x, y })
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(back, items.into_iter().collect());
    }

    #[test]
    fn test_encode_empty() {
        let items: Vec<(i32, i32)> = Vec::new();
        assert_eq!(encode(items, |c| c.0, |c| c.1).unwrap(), Indicator::Empty);
    }

    #[test]
    fn test_encode_owned_items() {
        let indicator = encode(vec![(1, 1), (1, 2)], |c| c.0, |c| c.1).unwrap();
        assert_eq!(indicator.as_str(), "1,[1-2]");
    }

    #[test]
    fn test_encode_negative_fails() {
        let result = encode(vec![(1, -1)], |c| c.0, |c| c.1);
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_parse_to_text_identity() {
        for text in ["", "1,5", "[1-2],3;4,[5,7]", "garbage"] {
            assert_eq!(to_text(&parse(text)), text);
        }
    }

    #[test]
    fn test_encode_grid_ragged_rows() {
        let grid: Vec<Vec<bool>> = vec![vec![true], vec![], vec![false, true, true]];
        let indicator = encode_grid(&grid, |_, _, &on| on).unwrap();
        let cells: HashSet<(i32, i32)> = indicator.cells().collect::<Result<_>>().unwrap();
        assert_eq!(cells, [(0, 0), (2, 1), (2, 2)].into_iter().collect());
    }

    #[test]
    fn test_encode_grid_arrays() {
        let grid = [[1u8, 0], [1, 0]];
        let indicator = encode_grid(&grid, |_, _, &v| v != 0).unwrap();
        assert_eq!(indicator.as_str(), "[0-1],0");
    }
}
