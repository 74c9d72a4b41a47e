//! PGM/PBM encoder: P1, P2, P4, P5.

use super::decode::packed_row_bytes;
use crate::format::MagicNumber;
use crate::grid::Grid;
use alloc::format;
use alloc::vec::Vec;

/// Encode a graymap. `magic` must be P2 or P5.
pub(crate) fn encode_gray(grid: &Grid<u8>, max_value: u8, magic: MagicNumber) -> Vec<u8> {
    let header = format!(
        "{magic}\n{} {}\n{max_value}\n",
        grid.width(),
        grid.height()
    );
    let samples = grid.as_slice();

    match magic {
        MagicNumber::P5 => {
            let mut out = Vec::with_capacity(header.len() + samples.len());
            out.extend_from_slice(header.as_bytes());
            out.extend_from_slice(samples);
            out
        }
        _ => {
            // Up to three digits plus a newline per sample.
            let mut out = Vec::with_capacity(header.len() + samples.len() * 4);
            out.extend_from_slice(header.as_bytes());
            for &p in samples {
                push_decimal(&mut out, p);
                out.push(b'\n');
            }
            out
        }
    }
}

/// Encode a bitmap. `magic` must be P1 or P4.
pub(crate) fn encode_bits(grid: &Grid<bool>, magic: MagicNumber) -> Vec<u8> {
    let header = format!("{magic}\n{} {}\n", grid.width(), grid.height());
    let w = grid.width() as usize;
    let h = grid.height() as usize;

    match magic {
        MagicNumber::P4 => {
            let row_bytes = packed_row_bytes(grid.width());
            let mut out = Vec::with_capacity(header.len() + row_bytes * h);
            out.extend_from_slice(header.as_bytes());
            for row in grid.rows() {
                pack_row(row, &mut out);
            }
            out
        }
        _ => {
            // "1 0 1\n": two bytes per pixel including the separator or newline.
            let mut out = Vec::with_capacity(header.len() + w * h * 2);
            out.extend_from_slice(header.as_bytes());
            for row in grid.rows() {
                for (x, &black) in row.iter().enumerate() {
                    if x > 0 {
                        out.push(b' ');
                    }
                    out.push(if black { b'1' } else { b'0' });
                }
                out.push(b'\n');
            }
            out
        }
    }
}

/// Pack one row MSB first, zero-filling the padding bits of the last byte.
fn pack_row(row: &[bool], out: &mut Vec<u8>) {
    out.extend(row.chunks(8).map(|bits| {
        bits.iter()
            .enumerate()
            .fold(0u8, |acc, (pos, &black)| acc | (u8::from(black) << (7 - pos)))
    }));
}

fn push_decimal(out: &mut Vec<u8>, value: u8) {
    if value >= 100 {
        out.push(b'0' + value / 100);
    }
    if value >= 10 {
        out.push(b'0' + (value / 10) % 10);
    }
    out.push(b'0' + value % 10);
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn pack_row_pads_with_zero_bits() {
        let mut out = Vec::new();
        pack_row(&[true, false, true, true, false, false, false, false, true], &mut out);
        assert_eq!(out, vec![0b1011_0000, 0b1000_0000]);
    }

    #[test]
    fn decimal_formatting() {
        let mut out = Vec::new();
        for v in [0u8, 7, 10, 99, 100, 205, 255] {
            push_decimal(&mut out, v);
            out.push(b' ');
        }
        assert_eq!(out, b"0 7 10 99 100 205 255 ");
    }
}
