//! The [`Indicator`] value type.
//!
//! An indicator wraps the compact text verbatim. Parsing never validates; all the work is
//! deferred to [`Indicator::decode`], which scans the text each time it is called. Decoded
//! coordinates are never cached.
//!
//! ## Examples
//!
//! ```rust
//! use matrix_indicator::Indicator;
//!
//! let indicator = Indicator::parse("2,[1,3-4,6];[4-6],1;1,5");
//! assert_eq!(indicator.to_string(), "2,[1,3-4,6];[4-6],1;1,5");
//!
//! let cells: Vec<(i32, i32)> = indicator.cells().collect::<Result<_, _>>().unwrap();
//! assert_eq!(cells.len(), 8);
//! ```
//!
//! ## Serde
//!
//! `Indicator` serializes as its text and deserializes from any string, so it can sit directly
//! in a query-string or JSON request type:
//!
//! ```rust
//! use matrix_indicator::Indicator;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Selection {
//!     cells: Indicator,
//! }
//!
//! let selection: Selection = serde_json::from_str(r#"{"cells":"1,[2-3]"}"#).unwrap();
//! assert_eq!(selection.cells.as_str(), "1,[2-3]");
//! ```

use crate::de::Decoder;
use crate::IndicatorOptions;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// The compact text encoding of a sparse set of `(row, column)` pairs.
///
/// The empty indicator is its own variant rather than empty text, so [`Indicator::Text`]
/// always carries at least one character when built through [`Indicator::parse`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Indicator {
    /// No coordinates.
    #[default]
    Empty,
    /// Raw indicator text, kept exactly as given.
    Text(String),
}

impl Indicator {
    /// The empty indicator.
    pub const EMPTY: Indicator = Indicator::Empty;

    /// Wraps `text` without validating it. Empty text becomes [`Indicator::Empty`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use matrix_indicator::Indicator;
    ///
    /// // Malformed text is accepted here; errors surface on decode.
    /// let indicator = Indicator::parse("1,[2");
    /// assert_eq!(indicator.as_str(), "1,[2");
    ///
    /// assert!(Indicator::parse("").is_empty());
    /// ```
    #[must_use]
    pub fn parse(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            Indicator::Empty
        } else {
            Indicator::Text(text)
        }
    }

    /// Returns the wrapped text; empty for [`Indicator::Empty`].
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Indicator::Empty => "",
            Indicator::Text(text) => text,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }

    /// Consumes the indicator, returning its text.
    #[must_use]
    pub fn into_string(self) -> String {
        match self {
            Indicator::Empty => String::new(),
            Indicator::Text(text) => text,
        }
    }

    /// Decodes lazily, mapping every `(row, col)` pair through `converter`.
    ///
    /// Yields nothing for the empty indicator. See [`Decoder`] for the error behavior.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use matrix_indicator::Indicator;
    ///
    /// let labels: Vec<String> = Indicator::parse("[1-2],0")
    ///     .decode(|i, j| format!("({}, {})", i, j))
    ///     .collect::<Result<_, _>>()
    ///     .unwrap();
    /// assert_eq!(labels, vec!["(1, 0)", "(2, 0)"]);
    /// ```
    pub fn decode<T, F>(&self, converter: F) -> Decoder<'_, F>
    where
        F: FnMut(i32, i32) -> T,
    {
        Decoder::new(self.as_str(), converter)
    }

    /// Like [`Indicator::decode`], honoring the cell limit in `options`.
    pub fn decode_with_options<T, F>(
        &self,
        options: &IndicatorOptions,
        converter: F,
    ) -> Decoder<'_, F>
    where
        F: FnMut(i32, i32) -> T,
    {
        Decoder::with_options(self.as_str(), options, converter)
    }

    /// Decodes into plain `(row, col)` tuples.
    pub fn cells(&self) -> Decoder<'_, fn(i32, i32) -> (i32, i32)> {
        fn pair(row: i32, col: i32) -> (i32, i32) {
            (row, col)
        }
        Decoder::new(self.as_str(), pair as fn(i32, i32) -> (i32, i32))
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Indicator {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Indicator::parse(s))
    }
}

impl From<&str> for Indicator {
    fn from(text: &str) -> Self {
        Indicator::parse(text)
    }
}

impl From<String> for Indicator {
    fn from(text: String) -> Self {
        Indicator::parse(text)
    }
}

impl From<Indicator> for String {
    fn from(indicator: Indicator) -> Self {
        indicator.into_string()
    }
}

impl AsRef<str> for Indicator {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Serialize for Indicator {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Indicator {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Visitor;

        struct IndicatorVisitor;

        impl<'de> Visitor<'de> for IndicatorVisitor {
            type Value = Indicator;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a matrix indicator string")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Indicator::parse(value))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Indicator::parse(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Indicator::Empty)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(Indicator::Empty)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }
        }

        deserializer.deserialize_any(IndicatorVisitor)
    }
}
