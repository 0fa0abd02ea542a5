//! Decoding of captured ffprobe output.
//!
//! ffprobe prints tag values as they are stored in the container, so the
//! output is usually UTF-8 but not always. Anything that is not valid UTF-8
//! is decoded as ISO-8859-15 (Latin-9), which maps every byte to a character.

use std::borrow::Cow;

/// Decodes raw output bytes, preferring UTF-8 and falling back to Latin-9.
pub fn decode_output(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(err) => {
            log::debug!("Output is not valid UTF-8 ({err}), decoding as ISO-8859-15");
            Cow::Owned(bytes.iter().map(|&b| latin9_char(b)).collect())
        }
    }
}

/// ISO-8859-15 is Latin-1 with eight code points replaced.
fn latin9_char(byte: u8) -> char {
    match byte {
        0xA4 => '\u{20AC}',
        0xA6 => '\u{0160}',
        0xA8 => '\u{0161}',
        0xB4 => '\u{017D}',
        0xB8 => '\u{017E}',
        0xBC => '\u{0152}',
        0xBD => '\u{0153}',
        0xBE => '\u{0178}',
        other => char::from(other),
    }
}

/// Splits decoded output into lines on `\n`, dropping a trailing `\r` from
/// each line. A final empty segment after the last newline is not returned.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_utf8_is_borrowed() {
        let decoded = decode_output("format.title=\"Kesä\"".as_bytes());
        assert!(matches!(decoded, Cow::Borrowed(_)));
        assert_eq!(decoded, "format.title=\"Kesä\"");
    }

    #[test]
    fn test_decode_latin9_fallback() {
        // "Kesä €" in ISO-8859-15
        let bytes = [b'K', b'e', b's', 0xE4, b' ', 0xA4];
        assert_eq!(decode_output(&bytes), "Kesä €");
    }

    #[test]
    fn test_decode_latin9_replaced_code_points() {
        let bytes = [0xA6, 0xA8, 0xB4, 0xB8, 0xBC, 0xBD, 0xBE];
        assert_eq!(decode_output(&bytes), "ŠšŽžŒœŸ");
    }

    #[test]
    fn test_split_lines() {
        assert_eq!(split_lines("a=1\nb=2\n"), vec!["a=1", "b=2"]);
        assert_eq!(split_lines("a=1\r\nb=2"), vec!["a=1", "b=2"]);
        assert!(split_lines("").is_empty());
    }
}
