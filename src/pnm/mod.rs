//! PGM and PBM codec: header parsing, pixel decoding, and encoding.
//!
//! | Magic | Kind    | Pixel data                                            |
//! |-------|---------|-------------------------------------------------------|
//! | P1    | bitmap  | `1`/`0` tokens, whitespace separated                  |
//! | P2    | graymap | decimal tokens, whitespace separated                  |
//! | P4    | bitmap  | rows of `ceil(width / 8)` bytes, MSB first            |
//! | P5    | graymap | one byte per pixel                                    |

mod decode;
mod encode;
mod header;

pub(crate) use header::PnmHeader;

use crate::error::NetpbmError;
use crate::format::ImageKind;
use crate::image::{AnyImage, BitImage, GrayImage};
use crate::info::ImageInfo;
use crate::limits::Limits;
use alloc::vec::Vec;

/// Parse and validate the header, then apply limits.
fn read_header(
    data: &[u8],
    kind: Option<ImageKind>,
    limits: Option<&Limits>,
) -> Result<PnmHeader, NetpbmError> {
    let header = header::parse_header(data, kind)?;
    if let Some(limits) = limits {
        limits.check(header.width, header.height)?;
    }
    Ok(header)
}

/// Probe header for ImageInfo without decoding.
pub(crate) fn probe_header(data: &[u8]) -> Result<ImageInfo, NetpbmError> {
    let header = header::parse_header(data, None)?;
    Ok(ImageInfo {
        magic: header.magic,
        width: header.width,
        height: header.height,
        max_value: header.max_value,
    })
}

pub(crate) fn decode_gray(data: &[u8], limits: Option<&Limits>) -> Result<GrayImage, NetpbmError> {
    let header = read_header(data, Some(ImageKind::Graymap), limits)?;
    gray_from_header(data, &header)
}

pub(crate) fn decode_bitmap(
    data: &[u8],
    limits: Option<&Limits>,
) -> Result<BitImage, NetpbmError> {
    let header = read_header(data, Some(ImageKind::Bitmap), limits)?;
    bitmap_from_header(data, &header)
}

pub(crate) fn decode_any(data: &[u8], limits: Option<&Limits>) -> Result<AnyImage, NetpbmError> {
    let header = read_header(data, None, limits)?;
    match header.magic.kind() {
        ImageKind::Graymap => gray_from_header(data, &header).map(AnyImage::Gray),
        ImageKind::Bitmap => bitmap_from_header(data, &header).map(AnyImage::Bit),
    }
}

fn gray_from_header(data: &[u8], header: &PnmHeader) -> Result<GrayImage, NetpbmError> {
    let body = data.get(header.data_offset..).unwrap_or_default();
    let grid = decode::decode_gray(body, header)?;
    let max_value = header.max_value.unwrap_or(u8::MAX);
    log::debug!(
        "decoded {} graymap {}x{}",
        header.magic,
        header.width,
        header.height
    );
    Ok(GrayImage::from_parts(grid, max_value, header.magic))
}

fn bitmap_from_header(data: &[u8], header: &PnmHeader) -> Result<BitImage, NetpbmError> {
    let body = data.get(header.data_offset..).unwrap_or_default();
    let grid = decode::decode_bits(body, header)?;
    log::debug!(
        "decoded {} bitmap {}x{}",
        header.magic,
        header.width,
        header.height
    );
    Ok(BitImage::from_parts(grid, header.magic))
}

pub(crate) fn encode_gray(img: &GrayImage) -> Vec<u8> {
    let out = encode::encode_gray(img.grid(), img.max_value(), img.magic_number());
    log::debug!(
        "encoded {} graymap {}x{} into {} bytes",
        img.magic_number(),
        img.width(),
        img.height(),
        out.len()
    );
    out
}

pub(crate) fn encode_bitmap(img: &BitImage) -> Vec<u8> {
    let out = encode::encode_bits(img.grid(), img.magic_number());
    log::debug!(
        "encoded {} bitmap {}x{} into {} bytes",
        img.magic_number(),
        img.width(),
        img.height(),
        out.len()
    );
    out
}
