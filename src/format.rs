//! Indicator Text Format
//!
//! This module documents the indicator text format as implemented by this library.
//!
//! # Overview
//!
//! An indicator describes a set of `(row, column)` pairs of non-negative integers. It is built
//! from **groups** separated by `;`. Each group fixes one value on one axis and lists one or
//! more values on the other. The set described by an indicator is the union of its groups.
//!
//! # Grammar
//!
//! ```text
//! indicator   := group (";" group)*
//! group       := N "," N                  // single coordinate
//!              | N "," "[" jlist "]"       // fixed row, list of columns
//!              | "[" ilist "]" "," N       // list of rows, fixed column
//! ilist/jlist := item ("," item)*
//! item        := N | N "-" N               // N-M is inclusive
//! N           := [0-9]+                    // must fit in an i32
//! ```
//!
//! No whitespace is allowed anywhere. The characters used are all URL-safe, so an indicator can
//! be used as a path segment without escaping.
//!
//! # Examples
//!
//! | Text | Pairs |
//! |------|-------|
//! | `1,5` | `(1,5)` |
//! | `2,[1,3-4,6]` | `(2,1) (2,3) (2,4) (2,6)` |
//! | `[4-6],1` | `(4,1) (5,1) (6,1)` |
//! | `2,[1,3-4,6];[4-6],1;1,5` | all of the above |
//!
//! The same set can usually be written several ways. `2,[3-4,6];[2,4-6],1;1,5` and
//! `2,[3,4,6];[2,4,5,6],1;1,5` describe the same eight pairs as the last row of the table.
//!
//! # Decoding Rules
//!
//! The decoder scans once, left to right:
//!
//! - Row-side numbers are buffered as a list until the group's column is known.
//! - Each column value is crossed with the buffered rows as soon as it completes, so a column
//!   list yields its pairs item by item.
//! - `-` marks the number before it as the lower bound of a range; the next completed number is
//!   the upper bound. Reversed bounds (`6-4`) are normalized.
//! - `;` and the end of input complete a trailing column number and start a new group. A
//!   number still pending on the row side at that point has no column and is an error.
//! - Pairs are yielded group by group in text order. A pair that appears in two groups is
//!   yielded twice.
//!
//! Within a group, each column item is crossed with every buffered row before the next column
//! item is read. A single column range comes out row-major (`[1,3],[0-1]` gives `(1,0) (1,1)
//! (3,0) (3,1)`), while a column list comes out one column at a time (`[1,3],[0,1]` gives
//! `(1,0) (3,0) (1,1) (3,1)`).
//!
//! # Rejected Input
//!
//! Structurally malformed text fails with a positioned [`Error`](crate::Error) instead of being
//! partially decoded:
//!
//! - any character other than `0-9 , [ ] - ;`
//! - nested `[`, a `]` without `[`, or input ending inside `[...]`
//! - `[` directly after digits (`1[2],3`)
//! - `,`, `]` or `-` without a number before it, or a second `-` in one item (`1,,2`, `1,[]`)
//! - a range with no upper bound (`1-,2`, `1,2-`)
//! - `;` inside a bracketed list
//! - anything but `,` after a closed row list (`[1,2]3`)
//! - anything but `;` or the end after a group's column (`1,2,3,4`, `1,[2]3`)
//! - a group with rows but no column (`7`, `[1-3]`, `1,`)
//! - a number too large for an `i32`
//!
//! An empty group is accepted, so a trailing `;` (`1,2;`) or a doubled one (`1,2;;3,4`) is fine.
//!
//! Pairs from groups before the error have already been yielded by then.
//!
//! # Encoding
//!
//! The encoder groups the input by row and by column, then walks the input in order. For each
//! pair not yet covered it writes the row group or the column group that contains the pair,
//! whichever covers more pairs. Inside a list, values are sorted ascending and runs of
//! consecutive values are written as `first-last`; a lone value is written without brackets.
//!
//! ```text
//! cells: (2,1) (4,1) (5,1) (6,1) (2,3) (2,4) (1,5) (2,6)
//! text:  2,[1,3-4,6];[4-6],1;1,5
//! ```
//!
//! This is a greedy choice and does not always give the shortest text. It always decodes back
//! to the same set of pairs.
//!
//! # Limitations
//!
//! - **Negative values**: Not representable (`-` is the range separator)
//! - **Versioning**: The text carries no version or schema marker
//! - **Order**: Decoding preserves set membership, not the order pairs were encoded in

// This module contains only documentation; no implementation code
