//! Inclusive integer intervals.
//!
//! [`Range`] is the building block for runs: the decoder turns every `N` or `N-M` item into a
//! range, and the encoder collapses sorted sets into maximal consecutive ranges before writing
//! them out. It is also a standalone value type with containment, intersection and split.
//!
//! ## Examples
//!
//! ```rust
//! use matrix_indicator::Range;
//!
//! let a = Range::new(1, 4);
//! let b = Range::new(3, 6);
//!
//! assert!(a.intersects(&b));
//! assert_eq!(a.intersect(&b), Range::new(3, 4));
//! assert_eq!(
//!     a.split(&b),
//!     vec![Range::new(1, 3), Range::new(3, 4), Range::new(4, 6)]
//! );
//! assert_eq!(a.iter().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::ops::RangeInclusive;

// Variant order matters: the derived `Ord` sorts `Empty` before every bounded range and
// compares bounded ranges by `(min, max)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Bounds {
    #[default]
    Empty,
    Bounded { min: i32, max: i32 },
}

/// An inclusive range of integers `[min, max]`, or the distinguished empty range.
///
/// The empty range is not the same thing as a single-point range: `Range::point(3)` holds one
/// member while `Range::EMPTY` holds none and is only equal to itself.
///
/// Ranges order by `(min, max)` with the empty range first, so they can live in sorted
/// containers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Range(Bounds);

impl Range {
    /// The empty range.
    pub const EMPTY: Range = Range(Bounds::Empty);

    /// Creates a range from two bounds, swapping them if given in reverse order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use matrix_indicator::Range;
    ///
    /// assert_eq!(Range::new(4, 3), Range::new(3, 4));
    /// assert_eq!(Range::new(4, 3).start(), Some(3));
    /// assert_eq!(Range::new(4, 3).end(), Some(4));
    /// ```
    #[must_use]
    pub const fn new(a: i32, b: i32) -> Self {
        if a <= b {
            Range(Bounds::Bounded { min: a, max: b })
        } else {
            Range(Bounds::Bounded { min: b, max: a })
        }
    }

    /// Creates the single-member range `[value, value]`.
    #[must_use]
    pub const fn point(value: i32) -> Self {
        Range(Bounds::Bounded {
            min: value,
            max: value,
        })
    }

    /// Returns the empty range.
    #[must_use]
    pub const fn empty() -> Self {
        Self::EMPTY
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self.0, Bounds::Empty)
    }

    /// Lower bound, or `None` for the empty range.
    #[must_use]
    pub const fn start(&self) -> Option<i32> {
        match self.0 {
            Bounds::Empty => None,
            Bounds::Bounded { min, .. } => Some(min),
        }
    }

    /// Upper bound, or `None` for the empty range.
    #[must_use]
    pub const fn end(&self) -> Option<i32> {
        match self.0 {
            Bounds::Empty => None,
            Bounds::Bounded { max, .. } => Some(max),
        }
    }

    /// Both bounds at once, or `None` for the empty range.
    #[must_use]
    pub const fn bounds(&self) -> Option<(i32, i32)> {
        match self.0 {
            Bounds::Empty => None,
            Bounds::Bounded { min, max } => Some((min, max)),
        }
    }

    /// Number of members.
    ///
    /// A range can span the full `i32` domain, so the count is a `u64`.
    #[must_use]
    pub fn len(&self) -> u64 {
        match self.0 {
            Bounds::Empty => 0,
            Bounds::Bounded { min, max } => (i64::from(max) - i64::from(min) + 1) as u64,
        }
    }

    /// Returns `true` if `value` lies within the range.
    #[must_use]
    pub const fn contains(&self, value: i32) -> bool {
        match self.0 {
            Bounds::Empty => false,
            Bounds::Bounded { min, max } => min <= value && value <= max,
        }
    }

    /// Returns `true` if `other` lies entirely within this range.
    ///
    /// Always `false` when either side is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use matrix_indicator::Range;
    ///
    /// assert!(Range::new(1, 6).contains_range(&Range::new(4, 3)));
    /// assert!(!Range::new(4, 3).contains_range(&Range::new(1, 6)));
    /// assert!(!Range::new(1, 6).contains_range(&Range::EMPTY));
    /// ```
    #[must_use]
    pub fn contains_range(&self, other: &Range) -> bool {
        match (self.bounds(), other.bounds()) {
            (Some((min, max)), Some((other_min, other_max))) => min <= other_min && max >= other_max,
            _ => false,
        }
    }

    /// Returns `true` if the two ranges share at least one member.
    #[must_use]
    pub fn intersects(&self, other: &Range) -> bool {
        match (self.bounds(), other.bounds()) {
            (Some((min, max)), Some((other_min, other_max))) => {
                !(max < other_min || other_max < min)
            }
            _ => false,
        }
    }

    /// The overlapping sub-range, or [`Range::EMPTY`] if the ranges do not intersect.
    ///
    /// Intersection is symmetric: `a.intersect(&b) == b.intersect(&a)`.
    #[must_use]
    pub fn intersect(&self, other: &Range) -> Range {
        match (self.bounds(), other.bounds()) {
            (Some((min, max)), Some((other_min, other_max))) if self.intersects(other) => {
                Range::new(min.max(other_min), max.min(other_max))
            }
            _ => Range::EMPTY,
        }
    }

    /// Decomposes two ranges into the pieces between their sorted boundary values.
    ///
    /// Pieces are returned left to right. Neighbouring pieces share their boundary value, in
    /// keeping with inclusive bounds. The result is empty when the ranges do not intersect.
    ///
    /// - If one range contains the other: `[outer.min, inner.min]`, the inner range,
    ///   `[inner.max, outer.max]`.
    /// - If they overlap partially: `[lower.min, higher.min]`, `[higher.min, lower.max]`,
    ///   `[lower.max, higher.max]`, where `lower` is the range with the smaller `max`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use matrix_indicator::Range;
    ///
    /// let pieces = Range::new(1, 6).split(&Range::new(3, 4));
    /// assert_eq!(pieces, vec![Range::new(1, 3), Range::new(3, 4), Range::new(4, 6)]);
    ///
    /// assert!(Range::new(1, 3).split(&Range::new(4, 6)).is_empty());
    /// ```
    #[must_use]
    pub fn split(&self, other: &Range) -> Vec<Range> {
        let (Some((min, max)), Some((other_min, other_max))) = (self.bounds(), other.bounds())
        else {
            return Vec::new();
        };

        if self.contains_range(other) {
            return vec![Range::new(min, other_min), *other, Range::new(other_max, max)];
        }
        if other.contains_range(self) {
            return vec![Range::new(other_min, min), *self, Range::new(max, other_max)];
        }
        if !self.intersects(other) {
            return Vec::new();
        }

        let ((lower_min, lower_max), (higher_min, higher_max)) = if max <= other_max {
            ((min, max), (other_min, other_max))
        } else {
            ((other_min, other_max), (min, max))
        };
        vec![
            Range::new(lower_min, higher_min),
            Range::new(higher_min, lower_max),
            Range::new(lower_max, higher_max),
        ]
    }

    /// Iterates the members in ascending order.
    #[must_use]
    pub fn iter(&self) -> Iter {
        Iter {
            inner: self.bounds().map(|(min, max)| min..=max),
        }
    }
}

impl From<i32> for Range {
    fn from(value: i32) -> Self {
        Range::point(value)
    }
}

impl From<RangeInclusive<i32>> for Range {
    /// Converts a std range; an inverted std range (`5..=1`) holds no members and becomes
    /// [`Range::EMPTY`] rather than being swapped.
    fn from(range: RangeInclusive<i32>) -> Self {
        let (start, end) = range.into_inner();
        if start <= end {
            Range::new(start, end)
        } else {
            Range::EMPTY
        }
    }
}

impl fmt::Display for Range {
    /// Empty renders as nothing, a point as the bare number, a two-member range as `"a,b"` and
    /// anything wider as `"min-max"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Bounds::Empty => Ok(()),
            Bounds::Bounded { min, max } if min == max => write!(f, "{}", min),
            Bounds::Bounded { min, max } if i64::from(max) - i64::from(min) > 1 => {
                write!(f, "{}-{}", min, max)
            }
            Bounds::Bounded { min, max } => write!(f, "{},{}", min, max),
        }
    }
}

/// Ascending iterator over the members of a [`Range`].
#[derive(Clone, Debug)]
pub struct Iter {
    inner: Option<RangeInclusive<i32>>,
}

impl Iterator for Iter {
    type Item = i32;

    #[inline]
    fn next(&mut self) -> Option<i32> {
        self.inner.as_mut()?.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            Some(inner) => inner.size_hint(),
            None => (0, Some(0)),
        }
    }
}

impl DoubleEndedIterator for Iter {
    fn next_back(&mut self) -> Option<i32> {
        self.inner.as_mut()?.next_back()
    }
}

impl FusedIterator for Iter {}

impl IntoIterator for Range {
    type Item = i32;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

impl IntoIterator for &Range {
    type Item = i32;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}
