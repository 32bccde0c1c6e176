//! Length measurement.
//!
//! A truncator measures the input, the ellipsis mark, and every segment with
//! one [`LengthMetric`]. Column widths follow terminal rendering rules:
//! East Asian wide characters and emoji sequences take two cells, combining
//! marks and ANSI escapes take none.

mod ansi;
mod width;

use serde::Deserialize;

pub use ansi::strip_ansi;
pub use width::{char_width, grapheme_width, string_width};

pub(crate) use ansi::{ESC, escape_end};
pub(crate) use width::is_emoji;

/// Unit in which lengths and budgets are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthMetric {
    /// Unicode scalar values.
    #[default]
    Chars,
    /// UTF-8 encoded bytes.
    Bytes,
    /// Terminal display cells.
    Columns,
}

impl LengthMetric {
    /// Length of `s` in this unit.
    #[inline]
    pub fn measure(self, s: &str) -> usize {
        match self {
            Self::Chars => s.chars().count(),
            Self::Bytes => s.len(),
            Self::Columns => string_width(s),
        }
    }
}
