//! Segmentation: splitting text into atomic units the truncator keeps or
//! drops whole.
//!
//! The truncator only depends on the [`Segmenter`] capability. Two engines
//! ship with the crate:
//!
//! - [`Dissector`]: ANSI escapes, emoji sequences, grapheme clusters, and
//!   (optionally) whole words, using UAX #29 boundaries from
//!   `unicode-segmentation`
//! - [`CharSegmenter`]: one segment per `char`

mod dissect;

use serde::Deserialize;

pub use dissect::{Dissect, Dissector};

/// Classification attached to a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// A complete ANSI escape sequence.
    Ansi,
    /// An emoji, including ZWJ, skin-tone, keycap and flag sequences.
    Emoji,
    /// A run of word characters kept together.
    Word,
    /// Any other single grapheme cluster or whitespace/punctuation run.
    Character,
}

/// One atomic unit of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub value: &'a str,
    pub kind: SegmentKind,
}

impl<'a> Segment<'a> {
    /// Pair a slice of the input with its classification.
    #[inline]
    pub fn new(value: &'a str, kind: SegmentKind) -> Self {
        Self { value, kind }
    }
}

/// Produces the ordered segments of a string.
///
/// Implementations yield borrowed slices of `text` in order, lazily. Unless an
/// option explicitly drops segments, concatenating every `value` must
/// reproduce `text` exactly.
pub trait Segmenter {
    fn segment<'a>(&self, text: &'a str) -> impl Iterator<Item = Segment<'a>>;
}

/// Options forwarded to the default [`Dissector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SegmentOptions {
    /// Emit ANSI escape segments. When `false` they are dropped.
    pub output_ansi: bool,
    /// Keep words whole instead of splitting at every grapheme cluster.
    pub safe_words: bool,
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            output_ansi: true,
            safe_words: true,
        }
    }
}

/// Naive splitter: every `char` is its own segment.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharSegmenter;

impl Segmenter for CharSegmenter {
    fn segment<'a>(&self, text: &'a str) -> impl Iterator<Item = Segment<'a>> {
        text.char_indices()
            .map(move |(i, c)| Segment::new(&text[i..i + c.len_utf8()], SegmentKind::Character))
    }
}
