//! Segment-aware string truncation.
//!
//! Shortens text to a maximum length and inserts an ellipsis mark at the
//! start, middle, or end, without ever cutting through a grapheme cluster,
//! emoji sequence, ANSI escape, or (optionally) a word.
//!
//! # Capabilities
//!
//! - **Atomic segments**: content is kept or dropped one [`Segment`] at a time
//! - **Ellipsis placement**: start, middle, or end via [`EllipsisPosition`]
//! - **Length metrics**: chars, UTF-8 bytes, or terminal columns
//! - **Pluggable segmentation**: any [`Segmenter`]; [`Dissector`] by default
//!
//! ```
//! use spark_truncate::{TruncateOptions, truncate_string};
//!
//! let short = truncate_string("The quick brown 🦊 jumps", 18, TruncateOptions::default())?;
//! assert_eq!(short, "The quick brown...");
//! # Ok::<(), spark_truncate::TruncateError>(())
//! ```

mod budget;
mod error;
mod measure;
mod options;
mod segment;
mod truncator;

use std::borrow::Cow;

pub use budget::{LengthBudget, MAX_SAFE_LENGTH};
pub use error::{Result, TruncateError};
pub use measure::{LengthMetric, char_width, grapheme_width, string_width, strip_ansi};
pub use options::{EllipsisPosition, TruncateOptions};
pub use segment::{CharSegmenter, Dissect, Dissector, Segment, SegmentKind, SegmentOptions, Segmenter};
pub use truncator::Truncator;

/// Truncate `text` once. Equivalent to building a [`Truncator`] and calling
/// [`Truncator::truncate`].
pub fn truncate_string<'a>(
    text: &'a str,
    maximum_length: i64,
    options: TruncateOptions,
) -> Result<Cow<'a, str>> {
    Ok(Truncator::new(maximum_length, options)?.truncate(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_string_matches_truncator() {
        let options = TruncateOptions::default().ellipsis_position(EllipsisPosition::Start);
        let once = truncate_string("one two three four", 12, options.clone()).unwrap();
        let truncator = Truncator::new(12, options).unwrap();
        assert_eq!(once, truncator.truncate("one two three four"));
    }

    #[test]
    fn truncate_string_propagates_errors() {
        assert!(truncate_string("text", -5, TruncateOptions::default()).is_err());
    }
}
