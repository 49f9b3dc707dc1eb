//! Indicator encoding.
//!
//! This module provides the [`Encoder`], which groups a collection of coordinates by shared row
//! or column and writes the compact indicator text.
//!
//! ## Overview
//!
//! - **Grouping**: Every row maps to the sorted set of its columns, every column to the sorted
//!   set of its rows
//! - **Greedy selection**: Walking the items in order, each uncovered pair is emitted as a row
//!   group or a column group, whichever covers more pairs (ties go to
//!   [`IndicatorOptions::tie_break`])
//! - **Run compaction**: Consecutive values inside a list collapse to `first-last`
//!
//! The output always decodes back to the input set, but it is not guaranteed to be the
//! shortest possible text.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use matrix_indicator::encode;
//!
//! let cells = vec![(2, 1), (2, 3), (2, 4), (5, 1)];
//! let indicator = encode(&cells, |c| c.0, |c| c.1).unwrap();
//! assert_eq!(indicator.as_str(), "2,[1,3-4];5,1");
//! ```
//!
//! ## Direct Encoder Usage
//!
//! ```rust
//! use matrix_indicator::{Axis, Encoder, IndicatorOptions};
//!
//! let options = IndicatorOptions::new().with_tie_break(Axis::Column);
//! let mut encoder = Encoder::new(options);
//! encoder.push(4, 0).unwrap();
//! encoder.push(5, 0).unwrap();
//!
//! assert_eq!(encoder.finish().as_str(), "[4-5],0");
//! ```

use crate::{Axis, Error, Indicator, IndicatorOptions, Range, Result};
use indexmap::IndexMap;
use std::collections::BTreeSet;
use tracing::debug;

/// The indicator encoder.
///
/// Collects coordinate pairs with [`Encoder::push`], then writes the grouped text with
/// [`Encoder::finish`].
pub struct Encoder {
    options: IndicatorOptions,
    cells: Vec<(i32, i32)>,
    by_row: IndexMap<i32, BTreeSet<i32>>,
    by_col: IndexMap<i32, BTreeSet<i32>>,
    output: String,
}

impl Encoder {
    pub fn new(options: IndicatorOptions) -> Self {
        Encoder {
            options,
            cells: Vec::new(),
            by_row: IndexMap::new(),
            by_col: IndexMap::new(),
            output: String::with_capacity(64),
        }
    }

    /// Adds one `(row, col)` pair.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for negative coordinates, which the text format has
    /// no way to express.
    pub fn push(&mut self, row: i32, col: i32) -> Result<()> {
        if row < 0 || col < 0 {
            return Err(Error::invalid_argument(format!(
                "coordinates must be non-negative, got ({}, {})",
                row, col
            )));
        }
        self.cells.push((row, col));
        self.by_row.entry(row).or_default().insert(col);
        self.by_col.entry(col).or_default().insert(row);
        Ok(())
    }

    /// Writes every pushed pair as `;`-separated groups.
    ///
    /// Returns [`Indicator::Empty`] if nothing was pushed.
    pub fn finish(mut self) -> Indicator {
        let cells = std::mem::take(&mut self.cells);
        let mut groups = 0usize;

        for &(row, col) in &cells {
            // Covered by an earlier group in either direction.
            let covered = !self
                .by_row
                .get(&row)
                .is_some_and(|cols| cols.contains(&col));
            if covered {
                continue;
            }

            let row_count = self.by_row.get(&row).map_or(0, BTreeSet::len);
            let col_count = self.by_col.get(&col).map_or(0, BTreeSet::len);
            let axis = match row_count.cmp(&col_count) {
                std::cmp::Ordering::Greater => Axis::Row,
                std::cmp::Ordering::Less => Axis::Column,
                std::cmp::Ordering::Equal => self.options.tie_break,
            };

            if groups > 0 {
                self.output.push(';');
            }
            match axis {
                Axis::Row => self.write_row_group(row),
                Axis::Column => self.write_column_group(col),
            }
            groups += 1;
        }

        debug!(
            cells = cells.len(),
            groups,
            len = self.output.len(),
            "encoded indicator"
        );
        Indicator::parse(self.output)
    }

    /// Writes `row,<columns>` and marks every pair in that row as covered.
    fn write_row_group(&mut self, row: i32) {
        let Some(cols) = self.by_row.swap_remove(&row) else {
            return;
        };
        self.output.push_str(&row.to_string());
        self.output.push(',');
        self.write_values(&cols);
        for col in &cols {
            remove_pair(&mut self.by_col, *col, row);
        }
    }

    /// Writes `<rows>,col` and marks every pair in that column as covered.
    fn write_column_group(&mut self, col: i32) {
        let Some(rows) = self.by_col.swap_remove(&col) else {
            return;
        };
        self.write_values(&rows);
        self.output.push(',');
        self.output.push_str(&col.to_string());
        for row in &rows {
            remove_pair(&mut self.by_row, *row, col);
        }
    }

    /// A single value is written bare; several are bracketed, with consecutive runs
    /// collapsed to `first-last`.
    fn write_values(&mut self, values: &BTreeSet<i32>) {
        let runs = runs(values);
        if let [run] = runs.as_slice() {
            if run.len() == 1 {
                self.write_run(run);
                return;
            }
        }

        self.output.push('[');
        for (index, run) in runs.iter().enumerate() {
            if index > 0 {
                self.output.push(',');
            }
            self.write_run(run);
        }
        self.output.push(']');
    }

    fn write_run(&mut self, run: &Range) {
        match run.bounds() {
            Some((min, max)) if min == max => self.output.push_str(&min.to_string()),
            Some((min, max)) => {
                self.output.push_str(&min.to_string());
                self.output.push('-');
                self.output.push_str(&max.to_string());
            }
            None => {}
        }
    }
}

fn remove_pair(map: &mut IndexMap<i32, BTreeSet<i32>>, key: i32, value: i32) {
    if let Some(set) = map.get_mut(&key) {
        set.remove(&value);
        if set.is_empty() {
            map.swap_remove(&key);
        }
    }
}

/// Splits an ascending set into maximal runs of consecutive integers.
fn runs(values: &BTreeSet<i32>) -> Vec<Range> {
    let mut runs = Vec::new();
    let mut iter = values.iter().copied();
    let Some(first) = iter.next() else {
        return runs;
    };

    let (mut start, mut end) = (first, first);
    for value in iter {
        if end.checked_add(1) == Some(value) {
            end = value;
        } else {
            runs.push(Range::new(start, end));
            start = value;
            end = value;
        }
    }
    runs.push(Range::new(start, end));
    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn encode_pairs(pairs: &[(i32, i32)], options: IndicatorOptions) -> Indicator {
        let mut encoder = Encoder::new(options);
        for &(row, col) in pairs {
            encoder.push(row, col).unwrap();
        }
        encoder.finish()
    }

    fn set(indicator: &Indicator) -> HashSet<(i32, i32)> {
        indicator
            .cells()
            .collect::<Result<HashSet<_>>>()
            .unwrap()
    }

    #[test]
    fn test_runs() {
        let values: BTreeSet<i32> = [1, 3, 4, 6, 7, 8].into_iter().collect();
        assert_eq!(
            runs(&values),
            vec![Range::point(1), Range::new(3, 4), Range::new(6, 8)]
        );
        assert!(runs(&BTreeSet::new()).is_empty());

        let edge: BTreeSet<i32> = [i32::MAX - 1, i32::MAX].into_iter().collect();
        assert_eq!(runs(&edge), vec![Range::new(i32::MAX - 1, i32::MAX)]);
    }

    #[test]
    fn test_merge_rule() {
        let indicator = encode_pairs(&[(0, 1), (0, 3), (0, 4), (0, 6)], IndicatorOptions::new());
        assert_eq!(indicator.as_str(), "0,[1,3-4,6]");

        let indicator = encode_pairs(&[(0, 3), (0, 4)], IndicatorOptions::new());
        assert_eq!(indicator.as_str(), "0,[3-4]");

        let indicator = encode_pairs(&[(9, 9)], IndicatorOptions::new());
        assert_eq!(indicator.as_str(), "9,9");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(encode_pairs(&[], IndicatorOptions::new()), Indicator::Empty);
    }

    #[test]
    fn test_larger_side_wins() {
        let pairs = [(1, 7), (2, 7), (3, 7), (1, 8)];
        let indicator = encode_pairs(&pairs, IndicatorOptions::new());
        assert_eq!(indicator.as_str(), "[1-3],7;1,8");
        assert_eq!(set(&indicator), pairs.into_iter().collect());
    }

    #[test]
    fn test_tie_break() {
        let pairs = [(1, 5), (1, 6), (2, 5)];

        let rows = encode_pairs(&pairs, IndicatorOptions::new());
        assert_eq!(rows.as_str(), "1,[5-6];2,5");

        let columns = encode_pairs(&pairs, IndicatorOptions::new().with_tie_break(Axis::Column));
        assert_eq!(columns.as_str(), "[1-2],5;1,6");

        assert_eq!(set(&rows), set(&columns));
    }

    #[test]
    fn test_duplicate_pairs_encoded_once() {
        let indicator = encode_pairs(&[(3, 3), (3, 3), (3, 3)], IndicatorOptions::new());
        assert_eq!(indicator.as_str(), "3,3");
    }

    #[test]
    fn test_negative_rejected() {
        let mut encoder = Encoder::new(IndicatorOptions::new());
        assert!(matches!(
            encoder.push(-1, 0),
            Err(Error::InvalidArgument(_))
        ));
        assert!(encoder.push(0, -4).is_err());
    }

    #[test]
    fn test_scenario_text() {
        // Cells of a 7x7 grid as (column, row), walked row by row.
        let pairs = [
            (2, 1),
            (4, 1),
            (5, 1),
            (6, 1),
            (2, 3),
            (2, 4),
            (1, 5),
            (2, 6),
        ];
        let indicator = encode_pairs(&pairs, IndicatorOptions::new());
        assert_eq!(indicator.as_str(), "2,[1,3-4,6];[4-6],1;1,5");
        assert_eq!(set(&indicator), pairs.into_iter().collect());
    }
}
