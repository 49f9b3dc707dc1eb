//! Configuration options for encoding and decoding.
//!
//! - [`IndicatorOptions`]: Main configuration struct
//! - [`Axis`]: Row or column side of a group
//!
//! ## Examples
//!
//! ```rust
//! use matrix_indicator::{encode_with_options, Axis, IndicatorOptions};
//!
//! let cells = vec![(1, 5), (1, 6), (2, 5)];
//!
//! // Ties favor row groups by default
//! let indicator = encode_with_options(&cells, |c| c.0, |c| c.1, &IndicatorOptions::new()).unwrap();
//! assert_eq!(indicator.as_str(), "1,[5-6];2,5");
//!
//! // Prefer column groups on ties
//! let options = IndicatorOptions::new().with_tie_break(Axis::Column);
//! let indicator = encode_with_options(&cells, |c| c.0, |c| c.1, &options).unwrap();
//! assert_eq!(indicator.as_str(), "[1-2],5;1,6");
//!
//! // Cap how many cells a single decode may produce
//! let options = IndicatorOptions::new().with_cell_limit(1_000);
//! ```

/// One side of a coordinate group.
///
/// A group fixes a single value on one axis and lists values on the other. The encoder uses
/// `Axis` to break ties between a row group and a column group, and the decoder uses it to
/// track which side of the current group it is scanning.
///
/// # Examples
///
/// ```rust
/// use matrix_indicator::Axis;
///
/// assert_eq!(Axis::Row.flip(), Axis::Column);
/// assert_eq!(Axis::default(), Axis::Row);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    /// The first coordinate of a pair.
    #[default]
    Row,
    /// The second coordinate of a pair.
    Column,
}

impl Axis {
    /// Returns the other axis.
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Axis::Row => Axis::Column,
            Axis::Column => Axis::Row,
        }
    }
}

/// Configuration options for encoding and decoding indicators.
///
/// # Examples
///
/// ```rust
/// use matrix_indicator::{Axis, IndicatorOptions};
///
/// let options = IndicatorOptions::new();
/// assert_eq!(options.tie_break, Axis::Row);
/// assert_eq!(options.cell_limit, None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IndicatorOptions {
    /// Group kind the encoder emits when the row and column sets are the same size.
    pub tie_break: Axis,
    /// Maximum number of cells a single decode may yield.
    pub cell_limit: Option<usize>,
}

impl IndicatorOptions {
    /// Creates default options (ties favor row groups, no cell limit).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets which group kind wins a tie in the encoder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use matrix_indicator::{Axis, IndicatorOptions};
    ///
    /// let options = IndicatorOptions::new().with_tie_break(Axis::Column);
    /// assert_eq!(options.tie_break, Axis::Column);
    /// ```
    #[must_use]
    pub fn with_tie_break(mut self, axis: Axis) -> Self {
        self.tie_break = axis;
        self
    }

    /// Sets the maximum number of cells a single decode may yield.
    ///
    /// Decoding text from untrusted sources (a URL, a form field) can describe billions of
    /// cells in a handful of characters. Once the limit is hit the decoder yields
    /// [`Error::LimitExceeded`](crate::Error::LimitExceeded) and stops.
    #[must_use]
    pub fn with_cell_limit(mut self, limit: usize) -> Self {
        self.cell_limit = Some(limit);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chain() {
        let options = IndicatorOptions::new()
            .with_tie_break(Axis::Column)
            .with_cell_limit(64);
        assert_eq!(options.tie_break, Axis::Column);
        assert_eq!(options.cell_limit, Some(64));
    }

    #[test]
    fn test_flip_round_trips() {
        assert_eq!(Axis::Row.flip().flip(), Axis::Row);
        assert_eq!(Axis::Column.flip(), Axis::Row);
    }
}
