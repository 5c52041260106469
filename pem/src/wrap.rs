use base64::{Engine, engine::general_purpose::STANDARD};

/// RFC 7468: base64 text is wrapped at 64 characters.
const LINE_WIDTH: usize = 64;

/// Base64-encode `raw` (standard alphabet, padded) and break it into
/// 64-character lines.
///
/// A `\n` follows every full line, including a final line of exactly 64
/// characters. A shorter final line is left unterminated, so an empty input
/// gives an empty string.
///
/// ```
/// let wrapped = pem::wrap_base64(&[0u8; 48]);
/// assert_eq!(65, wrapped.len());
/// assert!(wrapped.ends_with('\n'));
/// ```
pub fn wrap_base64(raw: &[u8]) -> String {
    wrap_lines(&STANDARD.encode(raw))
}

pub(crate) fn wrap_lines(encoded: &str) -> String {
    let mut wrapped = String::with_capacity(encoded.len() + encoded.len() / LINE_WIDTH);
    for (i, c) in encoded.chars().enumerate() {
        wrapped.push(c);
        if (i + 1) % LINE_WIDTH == 0 {
            wrapped.push('\n');
        }
    }
    wrapped
}

#[cfg(test)]
mod tests {
    use base64::{Engine, engine::general_purpose::STANDARD};
    use rstest::rstest;

    use super::{LINE_WIDTH, wrap_base64};

    #[rstest(
        raw,
        expected,
        case(b"", ""),
        case(b"hello world", "aGVsbG8gd29ybGQ="),
        case(&[0u8; 48], "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA\n"),
        case(&[0u8; 49], "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA\nAA==")
    )]
    fn test_wrap_base64(raw: &[u8], expected: &str) {
        assert_eq!(expected, wrap_base64(raw));
    }

    #[rstest(len, lines, trailing_newline, case(96, 2, true), case(100, 3, false), case(256, 6, false))]
    fn test_wrap_base64_line_count(len: usize, lines: usize, trailing_newline: bool) {
        let wrapped = wrap_base64(&vec![0xa5; len]);
        assert_eq!(lines, wrapped.lines().count());
        assert_eq!(trailing_newline, wrapped.ends_with('\n'));
    }

    #[test]
    fn test_wrap_base64_line_positions() {
        let wrapped = wrap_base64(&(0..=255u8).collect::<Vec<_>>());
        for (i, c) in wrapped.char_indices() {
            if c == '\n' {
                assert_eq!(LINE_WIDTH, i % (LINE_WIDTH + 1));
            }
        }
        for line in wrapped.lines() {
            assert!(line.len() <= LINE_WIDTH);
        }
    }

    #[test]
    fn test_wrap_base64_unwraps_to_input() {
        for len in 0..=512usize {
            let raw = (0..len).map(|i| (i * 7 + 3) as u8).collect::<Vec<_>>();
            let joined = wrap_base64(&raw).replace('\n', "");
            assert_eq!(raw, STANDARD.decode(joined).unwrap(), "length {len}");
        }
    }
}
