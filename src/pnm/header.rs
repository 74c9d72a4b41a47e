//! Line-oriented PGM/PBM header parser.
//!
//! Each header field occupies exactly one line. Comment lines are not
//! skipped, so a `#` line where a field is expected is a malformed header.

use crate::error::NetpbmError;
use crate::format::{ImageKind, MagicNumber};
use alloc::format;

/// Parsed header (internal).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct PnmHeader {
    pub magic: MagicNumber,
    pub width: u32,
    pub height: u32,
    /// Present for graymaps only.
    pub max_value: Option<u8>,
    /// Offset of the first pixel byte.
    pub data_offset: usize,
}

/// Cursor handing out `\n`-terminated lines of a byte slice.
struct Lines<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Lines<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Next line without its terminator, or `None` at end of input.
    fn next_line(&mut self) -> Option<&'a [u8]> {
        let rest = self.data.get(self.pos..).filter(|r| !r.is_empty())?;
        match rest.iter().position(|&b| b == b'\n') {
            Some(n) => {
                self.pos += n + 1;
                Some(&rest[..n])
            }
            None => {
                self.pos = self.data.len();
                Some(rest)
            }
        }
    }

    fn next_str(&mut self, field: &str) -> Result<&'a str, NetpbmError> {
        let line = self
            .next_line()
            .ok_or_else(|| NetpbmError::MalformedHeader(format!("missing {field} line")))?;
        core::str::from_utf8(line)
            .map(str::trim)
            .map_err(|_| NetpbmError::MalformedHeader(format!("{field} line is not text")))
    }
}

/// Parse the header at the start of `data`.
///
/// `kind` restricts the accepted magic numbers; `None` accepts all four.
pub(crate) fn parse_header(
    data: &[u8],
    kind: Option<ImageKind>,
) -> Result<PnmHeader, NetpbmError> {
    let mut lines = Lines::new(data);

    let magic_line = lines
        .next_line()
        .ok_or_else(|| NetpbmError::UnsupportedFormat("empty input".into()))?;
    let magic: MagicNumber = core::str::from_utf8(magic_line)
        .map_err(|_| NetpbmError::UnsupportedFormat("magic number is not text".into()))?
        .trim()
        .parse()?;
    if let Some(kind) = kind {
        magic.expect_kind(kind)?;
    }

    let (width, height) = parse_dimensions(lines.next_str("dimensions")?)?;

    let max_value = match magic.kind() {
        ImageKind::Graymap => Some(parse_max_value(lines.next_str("max value")?)?),
        ImageKind::Bitmap => None,
    };

    let header = PnmHeader {
        magic,
        width,
        height,
        max_value,
        data_offset: lines.pos,
    };
    log::debug!(
        "parsed {} header: {}x{} max_value={:?} data_offset={}",
        header.magic,
        header.width,
        header.height,
        header.max_value,
        header.data_offset
    );
    Ok(header)
}

fn parse_dimensions(line: &str) -> Result<(u32, u32), NetpbmError> {
    let mut tokens = line.split_whitespace();
    let (Some(w), Some(h), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(NetpbmError::MalformedHeader(format!(
            "expected \"<width> <height>\", got {line:?}"
        )));
    };
    Ok((parse_positive(w, "width")?, parse_positive(h, "height")?))
}

fn parse_positive(token: &str, field: &str) -> Result<u32, NetpbmError> {
    match token.parse::<u32>() {
        Ok(0) => Err(NetpbmError::MalformedHeader(format!("{field} is zero"))),
        Ok(v) => Ok(v),
        Err(_) => Err(NetpbmError::MalformedHeader(format!(
            "{field} {token:?} is not a positive integer"
        ))),
    }
}

fn parse_max_value(line: &str) -> Result<u8, NetpbmError> {
    let value: u32 = line
        .parse()
        .map_err(|_| NetpbmError::MalformedHeader(format!("max value {line:?} is not an integer")))?;
    match u8::try_from(value) {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(NetpbmError::MalformedHeader(format!(
            "max value {value} outside 1..=255"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_split_on_newline_and_keep_remainder() {
        let mut lines = Lines::new(b"P5\n2 1\n255\n\x00\xff");
        assert_eq!(lines.next_line(), Some(&b"P5"[..]));
        assert_eq!(lines.next_line(), Some(&b"2 1"[..]));
        assert_eq!(lines.next_line(), Some(&b"255"[..]));
        assert_eq!(lines.pos, 11);
        assert_eq!(lines.next_line(), Some(&b"\x00\xff"[..]));
        assert_eq!(lines.next_line(), None);
    }

    #[test]
    fn graymap_header_with_crlf() {
        let h = parse_header(b"P2\r\n3 1\r\n255\r\n10 20 30\r\n", None).unwrap();
        assert_eq!(h.magic, MagicNumber::P2);
        assert_eq!((h.width, h.height), (3, 1));
        assert_eq!(h.max_value, Some(255));
        assert_eq!(h.data_offset, 14);
    }

    #[test]
    fn bitmap_header_has_no_max_value() {
        let h = parse_header(b"P4\n8 1\n\xb0", Some(ImageKind::Bitmap)).unwrap();
        assert_eq!(h.magic, MagicNumber::P4);
        assert_eq!(h.max_value, None);
        assert_eq!(h.data_offset, 7);
    }

    #[test]
    fn kind_mismatch_is_unsupported() {
        let err = parse_header(b"P2\n1 1\n255\n0\n", Some(ImageKind::Bitmap)).unwrap_err();
        assert!(matches!(err, NetpbmError::UnsupportedFormat(_)));
    }

    #[test]
    fn color_magic_is_unsupported() {
        let err = parse_header(b"P6\n1 1\n255\n\0\0\0", None).unwrap_err();
        assert!(matches!(err, NetpbmError::UnsupportedFormat(_)));
    }

    #[test]
    fn dimension_line_needs_exactly_two_tokens() {
        for data in [&b"P1\n2\n1 0\n"[..], b"P1\n2 2 2\n1 0\n", b"P1\nx 2\n1 0\n", b"P1\n0 2\n"] {
            let err = parse_header(data, None).unwrap_err();
            assert!(matches!(err, NetpbmError::MalformedHeader(_)), "{err:?}");
        }
    }

    #[test]
    fn max_value_out_of_range() {
        for data in [&b"P2\n1 1\n0\n0\n"[..], b"P2\n1 1\n256\n0\n", b"P2\n1 1\nabc\n0\n"] {
            let err = parse_header(data, None).unwrap_err();
            assert!(matches!(err, NetpbmError::MalformedHeader(_)), "{err:?}");
        }
    }

    #[test]
    fn comment_line_is_not_skipped() {
        let err = parse_header(b"P1\n# made by hand\n1 1\n1\n", None).unwrap_err();
        assert!(matches!(err, NetpbmError::MalformedHeader(_)));
    }

    #[test]
    fn missing_lines() {
        assert!(matches!(
            parse_header(b"", None).unwrap_err(),
            NetpbmError::UnsupportedFormat(_)
        ));
        assert!(matches!(
            parse_header(b"P5\n", None).unwrap_err(),
            NetpbmError::MalformedHeader(_)
        ));
        assert!(matches!(
            parse_header(b"P5\n1 1\n", None).unwrap_err(),
            NetpbmError::MalformedHeader(_)
        ));
    }
}
