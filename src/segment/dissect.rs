//! The default segmentation engine.

use unicode_segmentation::UnicodeSegmentation;

use super::{Segment, SegmentKind, SegmentOptions, Segmenter};
use crate::measure::{ESC, escape_end, is_emoji};

/// Splits text into ANSI escapes, emoji, words, and grapheme clusters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dissector {
    options: SegmentOptions,
}

impl Dissector {
    /// Build a dissector bound to `options`.
    pub fn new(options: SegmentOptions) -> Self {
        Self { options }
    }

    /// Options this dissector was built with.
    pub fn options(&self) -> SegmentOptions {
        self.options
    }

    /// Lazily segment `text`.
    pub fn dissect<'a>(&self, text: &'a str) -> Dissect<'a> {
        Dissect {
            text,
            pos: 0,
            options: self.options,
        }
    }
}

impl Segmenter for Dissector {
    fn segment<'a>(&self, text: &'a str) -> impl Iterator<Item = Segment<'a>> {
        self.dissect(text)
    }
}

/// Iterator returned by [`Dissector::dissect`].
#[derive(Debug, Clone)]
pub struct Dissect<'a> {
    text: &'a str,
    pos: usize,
    options: SegmentOptions,
}

impl<'a> Iterator for Dissect<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        loop {
            let rest = &self.text[self.pos..];
            let first = *rest.as_bytes().first()?;

            if first == ESC {
                let end = escape_end(rest.as_bytes(), 0);
                self.pos += end;
                if self.options.output_ansi {
                    return Some(Segment::new(&rest[..end], SegmentKind::Ansi));
                }
                continue;
            }

            // Boundaries are found within the plain run up to the next escape
            // so that no word or grapheme swallows an ESC.
            let run = match rest.as_bytes().iter().position(|&b| b == ESC) {
                Some(end) => &rest[..end],
                None => rest,
            };
            let piece = if self.options.safe_words {
                run.split_word_bounds().next()
            } else {
                run.graphemes(true).next()
            }?;

            self.pos += piece.len();
            return Some(Segment::new(piece, classify(piece)));
        }
    }
}

fn classify(piece: &str) -> SegmentKind {
    if is_emoji(piece) {
        return SegmentKind::Emoji;
    }
    let multi_grapheme = piece.graphemes(true).nth(1).is_some();
    if multi_grapheme && piece.chars().any(char::is_alphanumeric) {
        SegmentKind::Word
    } else {
        SegmentKind::Character
    }
}
