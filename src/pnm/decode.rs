//! Pixel decoders for P1, P2, P4, P5.

use super::header::PnmHeader;
use crate::error::NetpbmError;
use crate::format::Encoding;
use crate::grid::{Grid, pixel_count};
use alloc::format;
use alloc::vec;
use alloc::vec::Vec;

/// Decode graymap samples (P2/P5) from the bytes following the header.
pub(crate) fn decode_gray(body: &[u8], header: &PnmHeader) -> Result<Grid<u8>, NetpbmError> {
    let count = pixel_count(header.width, header.height)?;
    let max_value = header.max_value.ok_or_else(|| {
        NetpbmError::MalformedHeader(format!("{} header without max value", header.magic))
    })?;

    let pixels = match header.magic.encoding() {
        Encoding::Ascii => decode_ascii_gray(body, count, max_value)?,
        Encoding::Binary => decode_binary_gray(body, count, max_value)?,
    };
    Grid::from_vec(header.width, header.height, pixels)
}

/// Decode bitmap pixels (P1/P4) from the bytes following the header.
pub(crate) fn decode_bits(body: &[u8], header: &PnmHeader) -> Result<Grid<bool>, NetpbmError> {
    let count = pixel_count(header.width, header.height)?;
    let pixels = match header.magic.encoding() {
        Encoding::Ascii => decode_ascii_bits(body, count)?,
        Encoding::Binary => decode_packed_bits(body, header.width, header.height)?,
    };
    Grid::from_vec(header.width, header.height, pixels)
}

/// Whitespace-delimited tokens.
fn ascii_tokens(body: &[u8]) -> impl Iterator<Item = &[u8]> {
    body.split(u8::is_ascii_whitespace)
        .filter(|token| !token.is_empty())
}

fn decode_ascii_gray(body: &[u8], count: usize, max_value: u8) -> Result<Vec<u8>, NetpbmError> {
    let mut out = Vec::with_capacity(count.min(body.len()));
    for token in ascii_tokens(body).take(count) {
        out.push(parse_sample(token, max_value)?);
    }
    if out.len() < count {
        return Err(NetpbmError::TruncatedData {
            expected: count,
            found: out.len(),
        });
    }
    Ok(out)
}

fn parse_sample(token: &[u8], max_value: u8) -> Result<u8, NetpbmError> {
    let value = core::str::from_utf8(token)
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .ok_or_else(|| {
            NetpbmError::InvalidData(format!(
                "pixel token {:?} is not an unsigned integer",
                alloc::string::String::from_utf8_lossy(token)
            ))
        })?;
    match u8::try_from(value) {
        Ok(v) if v <= max_value => Ok(v),
        _ => Err(NetpbmError::InvalidData(format!(
            "sample {value} exceeds max value {max_value}"
        ))),
    }
}

fn decode_binary_gray(body: &[u8], count: usize, max_value: u8) -> Result<Vec<u8>, NetpbmError> {
    let samples = body.get(..count).ok_or(NetpbmError::TruncatedData {
        expected: count,
        found: body.len(),
    })?;
    if let Some(&bad) = samples.iter().find(|&&p| p > max_value) {
        return Err(NetpbmError::InvalidData(format!(
            "sample {bad} exceeds max value {max_value}"
        )));
    }
    Ok(samples.to_vec())
}

/// `"1"` is black; any other token is white.
fn decode_ascii_bits(body: &[u8], count: usize) -> Result<Vec<bool>, NetpbmError> {
    let mut out = Vec::with_capacity(count.min(body.len()));
    out.extend(ascii_tokens(body).take(count).map(|token| token == b"1"));
    if out.len() < count {
        return Err(NetpbmError::TruncatedData {
            expected: count,
            found: out.len(),
        });
    }
    Ok(out)
}

/// Bytes per packed P4 row.
#[inline]
pub(crate) fn packed_row_bytes(width: u32) -> usize {
    (width as usize).div_ceil(8)
}

/// Unpack P4 rows: `ceil(width / 8)` bytes each, most significant bit first.
/// Padding bits at the end of a row are ignored.
fn decode_packed_bits(body: &[u8], width: u32, height: u32) -> Result<Vec<bool>, NetpbmError> {
    let row_bytes = packed_row_bytes(width);
    let needed = row_bytes
        .checked_mul(height as usize)
        .ok_or(NetpbmError::DimensionsTooLarge { width, height })?;
    let packed = body.get(..needed).ok_or(NetpbmError::TruncatedData {
        expected: needed,
        found: body.len(),
    })?;

    let w = width as usize;
    let mut out = vec![false; w * height as usize];
    for (out_row, in_row) in out.chunks_exact_mut(w).zip(packed.chunks_exact(row_bytes)) {
        unpack_row(in_row, out_row);
    }
    Ok(out)
}

fn unpack_row(input: &[u8], out: &mut [bool]) {
    for (out_bits, &byte) in out.chunks_mut(8).zip(input) {
        for (pos, bit) in out_bits.iter_mut().enumerate() {
            *bit = (byte >> (7 - pos)) & 0x01 == 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpack_partial_byte_ignores_padding() {
        let mut row = [false; 3];
        unpack_row(&[0b1011_1111], &mut row);
        assert_eq!(row, [true, false, true]);
    }

    #[test]
    fn unpack_spans_bytes() {
        let mut row = [false; 10];
        unpack_row(&[0b0000_0001, 0b1100_0000], &mut row);
        assert_eq!(
            row,
            [false, false, false, false, false, false, false, true, true, true]
        );
    }

    #[test]
    fn row_bytes_round_up() {
        assert_eq!(packed_row_bytes(1), 1);
        assert_eq!(packed_row_bytes(8), 1);
        assert_eq!(packed_row_bytes(9), 2);
        assert_eq!(packed_row_bytes(16), 2);
    }

    #[test]
    fn sample_above_max_is_rejected() {
        assert!(matches!(
            parse_sample(b"16", 15),
            Err(NetpbmError::InvalidData(_))
        ));
        assert!(matches!(
            parse_sample(b"999999999999", 255),
            Err(NetpbmError::InvalidData(_))
        ));
        assert_eq!(parse_sample(b"15", 15).unwrap(), 15);
    }
}
