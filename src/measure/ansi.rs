//! ANSI escape sequence recognition.
//!
//! Escapes are treated as atomic units by the segmenter and as zero-width by
//! the column metric. Recognized forms:
//! - CSI: `ESC [` ... final byte (0x40-0x7E)
//! - OSC: `ESC ]` ... BEL (0x07) or ST (`ESC \`)
//! - DCS/PM/APC: `ESC P`/`ESC ^`/`ESC _` ... ST
//! - Two-byte: `ESC` + any single byte

use std::borrow::Cow;

pub(crate) const ESC: u8 = 0x1B;

/// Remove every ANSI escape sequence from `s`.
///
/// Borrows when there is nothing to remove.
pub fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.as_bytes().contains(&ESC) {
        return Cow::Borrowed(s);
    }

    let bytes = s.as_bytes();
    let mut result = String::with_capacity(s.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == ESC {
            i = escape_end(bytes, i);
        } else {
            // ESC is ASCII, so slicing at it never splits a UTF-8 sequence.
            let start = i;
            while i < bytes.len() && bytes[i] != ESC {
                i += 1;
            }
            result.push_str(&s[start..i]);
        }
    }

    Cow::Owned(result)
}

/// Byte index just past the escape sequence whose ESC sits at `pos`.
///
/// Unterminated sequences run to the end of input. The returned index is
/// always a char boundary when `bytes` is valid UTF-8.
pub(crate) fn escape_end(bytes: &[u8], pos: usize) -> usize {
    let next = pos + 1;
    let Some(&kind) = bytes.get(next) else {
        return bytes.len();
    };

    match kind {
        b'[' => csi_end(bytes, next + 1),
        b']' | b'P' | b'^' | b'_' => string_terminated_end(bytes, next + 1),
        // A non-ASCII lead byte is not part of the escape.
        b if b >= 0x80 => next,
        _ => next + 1,
    }
}

/// CSI: parameter bytes (0x30-0x3F), intermediates (0x20-0x2F), final (0x40-0x7E).
fn csi_end(bytes: &[u8], pos: usize) -> usize {
    let mut i = pos;

    while i < bytes.len() {
        let b = bytes[i];
        if (0x40..=0x7E).contains(&b) {
            return i + 1;
        }
        if !(0x20..=0x7E).contains(&b) {
            return i;
        }
        i += 1;
    }

    bytes.len()
}

/// OSC, DCS, PM, APC: terminated by BEL or ST.
fn string_terminated_end(bytes: &[u8], pos: usize) -> usize {
    let mut i = pos;

    while i < bytes.len() {
        match bytes[i] {
            0x07 => return i + 1,
            ESC if bytes.get(i + 1) == Some(&b'\\') => return i + 2,
            _ => i += 1,
        }
    }

    bytes.len()
}
