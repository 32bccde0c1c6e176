//! Terminal cell width of characters, grapheme clusters, and strings.
//!
//! Uses Unicode East Asian Width for single characters and recognizes emoji
//! sequences (ZWJ, VS16, skin tones, keycaps, flags) as two cells.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

use super::ansi::{ESC, strip_ansi};

/// Display width of a single codepoint.
///
/// - `0` for control characters, combining marks, zero-width characters
/// - `1` for normal-width characters
/// - `2` for wide characters and emoji pictographs
#[inline]
pub fn char_width(c: char) -> usize {
    if is_pictograph(c) {
        return 2;
    }
    c.width().unwrap_or(0)
}

/// Display width of a grapheme cluster.
///
/// - `é` (e + combining acute) → 1
/// - `👨‍👩‍👧‍👦` (ZWJ family) → 2
/// - `🇺🇸` (regional indicator pair) → 2
/// - `1️⃣` (keycap) → 2
pub fn grapheme_width(grapheme: &str) -> usize {
    let mut chars = grapheme.chars();
    let Some(first) = chars.next() else {
        return 0;
    };

    if chars.as_str().is_empty() {
        return char_width(first);
    }

    if is_emoji_sequence(grapheme) {
        return 2;
    }

    // Base + combining marks.
    first.width().unwrap_or(0)
}

/// Display width of a string. ANSI escapes count as zero.
pub fn string_width(s: &str) -> usize {
    if s.is_empty() {
        return 0;
    }

    if s.is_ascii() && !s.as_bytes().contains(&ESC) {
        return s.bytes().filter(|&b| (0x20..0x7F).contains(&b)).count();
    }

    strip_ansi(s).graphemes(true).map(grapheme_width).sum()
}

/// Whether a grapheme cluster renders as an emoji.
pub(crate) fn is_emoji(grapheme: &str) -> bool {
    let mut chars = grapheme.chars();
    match chars.next() {
        Some(first) if chars.as_str().is_empty() => is_pictograph(first),
        Some(_) => is_emoji_sequence(grapheme),
        None => false,
    }
}

fn is_pictograph(c: char) -> bool {
    matches!(
        c as u32,
        0x2600..=0x27BF       // Misc symbols, dingbats
            | 0x1F300..=0x1F5FF // Symbols and pictographs
            | 0x1F600..=0x1F64F // Emoticons
            | 0x1F680..=0x1F6FF // Transport and map
            | 0x1F900..=0x1F9FF // Supplemental symbols and pictographs
            | 0x1FA70..=0x1FAFF // Symbols and pictographs extended-A
    )
}

/// Multi-codepoint cluster built from emoji machinery.
fn is_emoji_sequence(grapheme: &str) -> bool {
    let mut chars = grapheme.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    // Flags
    if (0x1F1E6..=0x1F1FF).contains(&(first as u32)) {
        return true;
    }

    chars.any(|c| {
        matches!(
            c as u32,
            0x200D                // ZWJ
                | 0xFE0F          // VS16
                | 0x1F3FB..=0x1F3FF // skin tone
                | 0x20E3          // keycap
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_width_basic() {
        assert_eq!(char_width('a'), 1);
        assert_eq!(char_width('\t'), 0);
        assert_eq!(char_width('\u{0301}'), 0);
        assert_eq!(char_width('你'), 2);
        assert_eq!(char_width('🚀'), 2);
    }

    #[test]
    fn grapheme_width_sequences() {
        assert_eq!(grapheme_width("e\u{0301}"), 1);
        assert_eq!(grapheme_width("👨\u{200D}👩\u{200D}👧\u{200D}👦"), 2);
        assert_eq!(grapheme_width("👍\u{1F3FD}"), 2);
        assert_eq!(grapheme_width("🇺🇸"), 2);
        assert_eq!(grapheme_width("1\u{FE0F}\u{20E3}"), 2);
        assert_eq!(grapheme_width(""), 0);
    }

    #[test]
    fn string_width_mixed() {
        assert_eq!(string_width("hello"), 5);
        assert_eq!(string_width("a\tb"), 2);
        assert_eq!(string_width("hi你好😀"), 8);
        assert_eq!(string_width("\x1b[31m你好\x1b[0m"), 4);
    }

    #[test]
    fn emoji_detection() {
        assert!(is_emoji("😀"));
        assert!(is_emoji("🇧🇷"));
        assert!(is_emoji("👨\u{200D}💻"));
        assert!(!is_emoji("a"));
        assert!(!is_emoji("e\u{0301}"));
        assert!(!is_emoji("你"));
    }
}
