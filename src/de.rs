//! Indicator decoding.
//!
//! This module provides the [`Decoder`], a lazy iterator that scans indicator text once, left
//! to right, and yields one converted value per coordinate pair.
//!
//! ## Overview
//!
//! - **Single-pass scanning**: Every character is visited once, no backtracking
//! - **Lazy output**: Pairs are produced one group at a time as the caller pulls them
//! - **Asymmetric buffering**: Row ranges are buffered until the group's column is known, while
//!   each column value is crossed with the buffered rows as soon as it completes. This lets
//!   either side of a group be the bracketed list with one scan loop.
//! - **Strict structure**: Malformed text is rejected with a positioned [`Error`]. Once a group's
//!   column is complete only `;` or the end of input may follow, so stray items never pick up
//!   the buffered rows. See [`format`](crate::format) for the full list.
//!
//! ## Usage
//!
//! ```rust
//! use matrix_indicator::decode;
//!
//! let cells: Vec<(i32, i32)> = decode("2,[1,3-4];[4-5],1", |i, j| (i, j))
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(cells, vec![(2, 1), (2, 3), (2, 4), (4, 1), (5, 1)]);
//! ```
//!
//! Each call scans afresh. The decoder holds no state shared with the [`Indicator`](crate::Indicator)
//! it came from, so decoding the same text twice always yields the same sequence.

use crate::range::{self, Range};
use crate::{Axis, Error, IndicatorOptions, Result};
use std::iter::FusedIterator;
use tracing::{trace, warn};

/// Lazy iterator over the coordinate pairs of an indicator.
///
/// Yields `Ok(converter(row, col))` for every pair, group by group, in text order. Duplicate
/// pairs across groups are yielded as often as they appear. The first malformed token yields
/// `Err` and ends the iteration.
///
/// Created via [`Indicator::decode`](crate::Indicator::decode) or [`decode`](crate::decode).
pub struct Decoder<'a, F> {
    input: &'a str,
    position: usize,
    pending: Option<usize>, // Start offset of the number being scanned
    axis: Axis,
    in_list: bool,
    in_range: bool,
    rows_closed: bool, // Row list closed by `]`; only `,` may follow
    group_done: bool,  // Column list closed by `]`; only `;` or the end may follow
    row_lower: Option<i32>, // Lower bound of an `N-M` item on the row side
    col_lower: Option<i32>, // Lower bound of an `N-M` item on the column side
    rows: Vec<Range>,
    product: Option<Product>,
    end_of_group: bool,
    converter: F,
    cell_limit: Option<usize>,
    emitted: usize,
    finished: bool,
}

impl<'a, F> Decoder<'a, F> {
    /// Scans one character, or the end of input.
    fn step(&mut self) -> Result<()> {
        let at = self.position;
        let Some(&byte) = self.input.as_bytes().get(at) else {
            return self.finish();
        };

        if self.group_done && byte != b';' {
            return Err(Error::syntax(at, "expected ';' after a complete group"));
        }
        if self.rows_closed && byte != b',' {
            return Err(Error::syntax(at, "expected ',' after the row list"));
        }

        match byte {
            b'0'..=b'9' => {
                if self.pending.is_none() {
                    self.pending = Some(at);
                }
            }
            b',' => self.on_comma(at)?,
            b'[' => self.on_open(at)?,
            b']' => self.on_close(at)?,
            b'-' => self.on_dash(at)?,
            b';' => self.on_semicolon(at)?,
            _ => {
                // Everything before `at` was ASCII, so `at` is a char boundary.
                let ch = self.input[at..].chars().next().unwrap_or('\u{FFFD}');
                return Err(Error::syntax(at, &format!("unexpected character '{}'", ch)));
            }
        }

        self.position += 1;
        Ok(())
    }

    fn on_comma(&mut self, at: usize) -> Result<()> {
        // A comma right after a row list separates the two sides and completes nothing.
        if self.rows_closed {
            self.rows_closed = false;
            return Ok(());
        }
        let Some(range) = self.complete(at)? else {
            return Err(Error::syntax(at, "expected a number before ','"));
        };
        if self.axis == Axis::Column && !self.in_list {
            return Err(Error::syntax(at, "expected ';' after the column"));
        }

        match self.axis {
            Axis::Row => {
                self.rows.push(range);
                self.col_lower = None;
                if !self.in_list {
                    self.axis = Axis::Column;
                }
            }
            Axis::Column => {
                self.emit(range);
                self.row_lower = None;
            }
        }
        Ok(())
    }

    fn on_open(&mut self, at: usize) -> Result<()> {
        if self.in_list {
            return Err(Error::syntax(at, "nested '[' is not allowed"));
        }
        if self.pending.is_some() || self.in_range {
            return Err(Error::syntax(at, "'[' must start a side, not follow a number"));
        }
        self.in_list = true;
        Ok(())
    }

    fn on_close(&mut self, at: usize) -> Result<()> {
        if !self.in_list {
            return Err(Error::syntax(at, "unbalanced ']'"));
        }
        let Some(range) = self.complete(at)? else {
            return Err(Error::syntax(at, "expected a number before ']'"));
        };

        match self.axis {
            Axis::Row => {
                self.rows.push(range);
                self.col_lower = None;
                self.rows_closed = true;
            }
            Axis::Column => {
                self.emit(range);
                self.row_lower = None;
                self.group_done = true;
            }
        }
        self.in_list = false;
        self.axis = self.axis.flip();
        Ok(())
    }

    fn on_dash(&mut self, at: usize) -> Result<()> {
        if self.in_range {
            return Err(Error::syntax(at, "a range takes exactly one '-'"));
        }
        let Some(start) = self.pending.take() else {
            return Err(Error::syntax(at, "expected a number before '-'"));
        };

        let lower = self.number(start, at)?;
        match self.axis {
            Axis::Row => self.row_lower = Some(lower),
            Axis::Column => self.col_lower = Some(lower),
        }
        self.in_range = true;
        Ok(())
    }

    fn on_semicolon(&mut self, at: usize) -> Result<()> {
        if self.in_list {
            return Err(Error::syntax(at, "';' inside a bracketed list"));
        }
        self.close_group(at)
    }

    fn finish(&mut self) -> Result<()> {
        self.finished = true;
        let end = self.input.len();
        if self.in_list {
            return Err(Error::unexpected_eof(end, "']'"));
        }
        if self.in_range && self.pending.is_none() {
            return Err(Error::unexpected_eof(end, "the upper bound of a range"));
        }
        self.close_group(end)
    }

    /// Completes a trailing column number, if any, and resets for the next group.
    ///
    /// A group with nothing in it is allowed, so `1,2;` and `;` decode cleanly.
    fn close_group(&mut self, at: usize) -> Result<()> {
        match self.axis {
            Axis::Column => match self.complete(at)? {
                Some(range) => self.emit(range),
                None => return Err(Error::syntax(at, "expected a column")),
            },
            Axis::Row if self.group_done => {}
            Axis::Row => {
                if self.rows_closed || self.pending.is_some() || self.in_range {
                    return Err(Error::syntax(at, "group has rows but no column"));
                }
            }
        }
        self.end_of_group = true;
        self.group_done = false;
        self.rows_closed = false;
        self.axis = Axis::Row;
        self.row_lower = None;
        self.col_lower = None;
        if self.product.is_none() {
            self.reset_group();
        }
        Ok(())
    }

    fn reset_group(&mut self) {
        trace!(rows = self.rows.len(), "group closed");
        self.rows.clear();
        self.end_of_group = false;
    }

    /// Turns the pending number into a range for the current side.
    ///
    /// Returns `None` when no number is pending.
    fn complete(&mut self, end: usize) -> Result<Option<Range>> {
        let Some(start) = self.pending.take() else {
            if self.in_range {
                return Err(Error::syntax(end, "range is missing its upper bound"));
            }
            return Ok(None);
        };

        let value = self.number(start, end)?;
        let lower = match self.axis {
            Axis::Row => self.row_lower.take(),
            Axis::Column => self.col_lower.take(),
        };
        let range = match (std::mem::take(&mut self.in_range), lower) {
            (true, Some(lower)) => Range::new(lower, value),
            _ => Range::point(value),
        };
        Ok(Some(range))
    }

    fn number(&self, start: usize, end: usize) -> Result<i32> {
        let token = &self.input[start..end];
        token
            .parse::<i32>()
            .map_err(|e| Error::invalid_number(start, token, &e))
    }

    /// Starts crossing the buffered rows with a completed column range.
    fn emit(&mut self, column: Range) {
        trace!(rows = self.rows.len(), column = %column, "emitting group");
        self.product = Some(Product::new(column));
    }
}

impl<'a, F, T> Iterator for Decoder<'a, F>
where
    F: FnMut(i32, i32) -> T,
{
    type Item = Result<T>;

    fn next(&mut self) -> Option<Result<T>> {
        loop {
            if let Some(product) = self.product.as_mut() {
                if let Some((row, col)) = product.next_pair(&self.rows) {
                    if let Some(limit) = self.cell_limit {
                        if self.emitted >= limit {
                            return self.fail(Error::limit_exceeded(limit));
                        }
                    }
                    self.emitted += 1;
                    return Some(Ok((self.converter)(row, col)));
                }
                self.product = None;
                if self.end_of_group {
                    self.reset_group();
                }
            }

            if self.finished {
                return None;
            }
            if let Err(err) = self.step() {
                return self.fail(err);
            }
        }
    }
}

impl<'a, F, T> Decoder<'a, F>
where
    F: FnMut(i32, i32) -> T,
{
    /// Creates a decoder over `input` with default options.
    pub fn new(input: &'a str, converter: F) -> Self {
        Self::with_options(input, &IndicatorOptions::default(), converter)
    }

    /// Creates a decoder that honors the cell limit in `options`.
    pub fn with_options(input: &'a str, options: &IndicatorOptions, converter: F) -> Self {
        Decoder {
            input,
            position: 0,
            pending: None,
            axis: Axis::Row,
            in_list: false,
            in_range: false,
            rows_closed: false,
            group_done: false,
            row_lower: None,
            col_lower: None,
            rows: Vec::with_capacity(8),
            product: None,
            end_of_group: false,
            converter,
            cell_limit: options.cell_limit,
            emitted: 0,
            finished: input.is_empty(),
        }
    }

    fn fail(&mut self, err: Error) -> Option<Result<T>> {
        warn!(error = %err, "indicator decode aborted");
        self.finished = true;
        self.product = None;
        Some(Err(err))
    }
}

impl<'a, F, T> FusedIterator for Decoder<'a, F> where F: FnMut(i32, i32) -> T {}

/// Cartesian product of the buffered row ranges with one column range, in row-major order.
struct Product {
    next_range: usize,
    rows: range::Iter,
    row: Option<i32>,
    column: Range,
    columns: range::Iter,
}

impl Product {
    fn new(column: Range) -> Self {
        Product {
            next_range: 0,
            rows: Range::EMPTY.iter(),
            row: None,
            column,
            columns: Range::EMPTY.iter(),
        }
    }

    fn next_pair(&mut self, ranges: &[Range]) -> Option<(i32, i32)> {
        loop {
            if let Some(row) = self.row {
                if let Some(col) = self.columns.next() {
                    return Some((row, col));
                }
            }
            match self.rows.next() {
                Some(row) => {
                    self.row = Some(row);
                    self.columns = self.column.iter();
                }
                None => {
                    let range = ranges.get(self.next_range)?;
                    self.next_range += 1;
                    self.rows = range.iter();
                    self.row = None;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn cells(input: &str) -> Result<Vec<(i32, i32)>> {
        Decoder::new(input, |i, j| (i, j)).collect()
    }

    fn cell_set(input: &str) -> HashSet<(i32, i32)> {
        cells(input).unwrap().into_iter().collect()
    }

    #[test]
    fn test_single_coordinate() {
        assert_eq!(cells("1,5").unwrap(), vec![(1, 5)]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(cells("").unwrap(), vec![]);
    }

    #[test]
    fn test_fixed_row_column_list() {
        assert_eq!(
            cells("2,[1,3-4,6]").unwrap(),
            vec![(2, 1), (2, 3), (2, 4), (2, 6)]
        );
    }

    #[test]
    fn test_row_list_fixed_column() {
        assert_eq!(
            cells("[2,4-6],1").unwrap(),
            vec![(2, 1), (4, 1), (5, 1), (6, 1)]
        );
    }

    #[test]
    fn test_groups_emit_in_text_order() {
        assert_eq!(
            cells("2,[1,3];[4-5],1;1,5").unwrap(),
            vec![(2, 1), (2, 3), (4, 1), (5, 1), (1, 5)]
        );
    }

    #[test]
    fn test_scenario_sets_match() {
        let expected: HashSet<_> = [
            (2, 1),
            (2, 3),
            (2, 4),
            (2, 6),
            (4, 1),
            (5, 1),
            (6, 1),
            (1, 5),
        ]
        .into_iter()
        .collect();

        assert_eq!(cell_set("2,[1,3-4,6];[4-6],1;1,5"), expected);
        assert_eq!(cell_set("2,[3-4,6];[2,4-6],1;1,5"), expected);
        assert_eq!(cell_set("2,[3,4,6];[2,4,5,6],1;1,5"), expected);
    }

    #[test]
    fn test_duplicates_are_kept() {
        assert_eq!(cells("1,2;1,2").unwrap(), vec![(1, 2), (1, 2)]);
    }

    #[test]
    fn test_trailing_group_after_list_is_not_repeated() {
        assert_eq!(cells("3,[1-2]").unwrap(), vec![(3, 1), (3, 2)]);
        assert_eq!(cells("3,[1-2];").unwrap(), vec![(3, 1), (3, 2)]);
    }

    #[test]
    fn test_range_on_both_sides() {
        assert_eq!(
            cells("1-2,3-4").unwrap(),
            vec![(1, 3), (1, 4), (2, 3), (2, 4)]
        );
    }

    #[test]
    fn test_reversed_range_is_normalized() {
        assert_eq!(cells("[3-1],0").unwrap(), vec![(1, 0), (2, 0), (3, 0)]);
    }

    #[test]
    fn test_restart_yields_same_sequence() {
        let input = "[0-2],7;4,[1,9]";
        assert_eq!(cells(input).unwrap(), cells(input).unwrap());
    }

    #[test]
    fn test_overflow_is_invalid_number() {
        let err = cells("1,99999999999").unwrap_err();
        assert!(matches!(err, Error::InvalidNumber { position: 2, .. }));
    }

    #[test]
    fn test_foreign_character_is_rejected() {
        let err = cells("1,a").unwrap_err();
        assert_eq!(err, Error::syntax(2, "unexpected character 'a'"));

        let err = cells("1, 2").unwrap_err();
        assert_eq!(err.position(), Some(2));

        let err = cells("1,é").unwrap_err();
        assert_eq!(err, Error::syntax(2, "unexpected character 'é'"));
    }

    #[test]
    fn test_unbalanced_brackets_are_rejected() {
        assert!(matches!(cells("1,[2,3"), Err(Error::UnexpectedEof { .. })));
        assert!(matches!(cells("1,2]"), Err(Error::Syntax { position: 3, .. })));
        assert!(matches!(cells("[[1],2"), Err(Error::Syntax { position: 1, .. })));
        assert!(matches!(cells("1,[]"), Err(Error::Syntax { position: 3, .. })));
        assert!(matches!(cells("[1;2],3"), Err(Error::Syntax { position: 2, .. })));
    }

    #[test]
    fn test_dangling_dash_is_rejected() {
        assert!(matches!(cells("-1,2"), Err(Error::Syntax { position: 0, .. })));
        assert!(matches!(cells("1-,2"), Err(Error::Syntax { position: 2, .. })));
        assert!(matches!(cells("1-2-3,4"), Err(Error::Syntax { position: 3, .. })));
        assert!(matches!(cells("1,2-"), Err(Error::UnexpectedEof { .. })));
    }

    #[test]
    fn test_extra_items_after_column_are_rejected() {
        assert_eq!(
            cells("1,2,3,4").unwrap_err(),
            Error::syntax(3, "expected ';' after the column")
        );
        assert_eq!(
            cells("1,[2]3").unwrap_err(),
            Error::syntax(5, "expected ';' after a complete group")
        );
        assert_eq!(
            cells("[1,2]3").unwrap_err(),
            Error::syntax(5, "expected ',' after the row list")
        );
        assert!(matches!(cells("1,[2],[3]"), Err(Error::Syntax { position: 5, .. })));
    }

    #[test]
    fn test_empty_items_are_rejected() {
        assert_eq!(
            cells("1,,2").unwrap_err(),
            Error::syntax(2, "expected a number before ','")
        );
        assert!(matches!(cells("1,[2,,3]"), Err(Error::Syntax { position: 5, .. })));
        assert!(matches!(cells("[,1],2"), Err(Error::Syntax { position: 1, .. })));
        assert!(matches!(cells(",1,2"), Err(Error::Syntax { position: 0, .. })));
    }

    #[test]
    fn test_group_without_column_is_rejected() {
        assert_eq!(
            cells("7").unwrap_err(),
            Error::syntax(1, "group has rows but no column")
        );
        assert!(matches!(cells("7;1,2"), Err(Error::Syntax { position: 1, .. })));
        assert!(matches!(cells("[1-3]"), Err(Error::Syntax { position: 5, .. })));
        assert_eq!(cells("1,").unwrap_err(), Error::syntax(2, "expected a column"));
        assert!(matches!(cells("1,;"), Err(Error::Syntax { position: 2, .. })));
    }

    #[test]
    fn test_empty_groups_are_allowed() {
        assert_eq!(cells(";").unwrap(), vec![]);
        assert_eq!(cells("1,2;;3,4").unwrap(), vec![(1, 2), (3, 4)]);
    }

    #[test]
    fn test_pairs_before_error_are_yielded() {
        let mut decoder = Decoder::new("1,2;3,x", |i, j| (i, j));
        assert_eq!(decoder.next(), Some(Ok((1, 2))));
        assert!(matches!(decoder.next(), Some(Err(Error::Syntax { .. }))));
        assert_eq!(decoder.next(), None);
        assert_eq!(decoder.next(), None);
    }

    #[test]
    fn test_cell_limit() {
        let options = IndicatorOptions::new().with_cell_limit(3);
        let mut decoder = Decoder::with_options("[0-9],0", &options, |i, j| (i, j));
        assert_eq!(decoder.next(), Some(Ok((0, 0))));
        assert_eq!(decoder.next(), Some(Ok((1, 0))));
        assert_eq!(decoder.next(), Some(Ok((2, 0))));
        assert_eq!(decoder.next(), Some(Err(Error::limit_exceeded(3))));
        assert_eq!(decoder.next(), None);
    }

    #[test]
    fn test_cell_limit_not_hit() {
        let options = IndicatorOptions::new().with_cell_limit(3);
        let result: Result<Vec<_>> =
            Decoder::with_options("1,[1-3]", &options, |i, j| (i, j)).collect();
        assert_eq!(result.unwrap().len(), 3);
    }

    #[test]
    fn test_large_range_is_lazy() {
        let mut decoder = Decoder::new("[0-2000000000],[0-2000000000]", |i, j| (i, j));
        assert_eq!(decoder.next(), Some(Ok((0, 0))));
        assert_eq!(decoder.next(), Some(Ok((0, 1))));
    }
}
