//! Hand-written files covering the byte layout of each sub-format and the
//! error paths of the parser and decoders.

use zenpbm::*;

fn rows<T: Copy>(pixels: &[T], width: usize) -> Vec<Vec<T>> {
    pixels.chunks(width).map(<[T]>::to_vec).collect()
}

// ── Decoding known files ─────────────────────────────────────────────

#[test]
fn p1_two_by_two() {
    let img = decode_pbm(b"P1\n2 2\n1 0\n0 1\n").unwrap();
    assert_eq!(img.magic_number(), MagicNumber::P1);
    assert_eq!(
        rows(img.pixels(), 2),
        vec![vec![true, false], vec![false, true]]
    );
}

#[test]
fn p1_tokens_other_than_one_are_white() {
    let img = decode_pbm(b"P1\n4 1\n1 0 x 11\n").unwrap();
    assert_eq!(img.pixels(), &[true, false, false, false]);
}

#[test]
fn p1_tokens_may_span_lines() {
    let img = decode_pbm(b"P1\n3 2\n1\n0 1 0\n\n1 0").unwrap();
    assert_eq!(img.pixels(), &[true, false, true, false, true, false]);
}

#[test]
fn p2_three_by_one() {
    let img = decode_pgm(b"P2\n3 1\n255\n10 20 30\n").unwrap();
    assert_eq!(img.max_value(), 255);
    assert_eq!(img.pixels(), &[10, 20, 30]);
}

#[test]
fn p2_one_sample_per_line() {
    let img = decode_pgm(b"P2\n2 2\n9\n0\n3\n6\n9\n").unwrap();
    assert_eq!(img.pixels(), &[0, 3, 6, 9]);
}

#[test]
fn p4_single_packed_byte() {
    let img = decode_pbm(b"P4\n8 1\n\xb0").unwrap();
    assert_eq!(
        img.pixels(),
        &[true, false, true, true, false, false, false, false]
    );
}

#[test]
fn p4_padding_bits_are_ignored() {
    // 3 wide, 2 tall: one byte per row, low five bits are padding.
    let img = decode_pbm(b"P4\n3 2\n\xbf\x5f").unwrap();
    assert_eq!(img.pixels(), &[true, false, true, false, true, false]);
}

#[test]
fn p5_raw_bytes_follow_header() {
    // The first sample is 0x0a, a newline byte: it must not be eaten as whitespace.
    let img = decode_pgm(b"P5\n2 2\n255\n\x0a\x20\xff\x00").unwrap();
    assert_eq!(img.pixels(), &[10, 32, 255, 0]);
}

#[test]
fn trailing_bytes_are_ignored() {
    let img = decode_pgm(b"P5\n1 1\n255\n\x07extra").unwrap();
    assert_eq!(img.pixels(), &[7]);
}

// ── Exact pixel counts ───────────────────────────────────────────────

#[test]
fn exact_token_count_succeeds_one_fewer_truncates() {
    assert!(decode_pgm(b"P2\n2 2\n255\n1 2 3 4").is_ok());
    let err = decode_pgm(b"P2\n2 2\n255\n1 2 3").unwrap_err();
    assert!(matches!(
        err,
        NetpbmError::TruncatedData {
            expected: 4,
            found: 3
        }
    ));

    assert!(decode_pbm(b"P1\n3 1\n1 1 1").is_ok());
    let err = decode_pbm(b"P1\n3 1\n1 1").unwrap_err();
    assert!(matches!(
        err,
        NetpbmError::TruncatedData {
            expected: 3,
            found: 2
        }
    ));
}

#[test]
fn exact_byte_count_succeeds_one_fewer_truncates() {
    assert!(decode_pgm(b"P5\n3 1\n255\n\x01\x02\x03").is_ok());
    let err = decode_pgm(b"P5\n3 1\n255\n\x01\x02").unwrap_err();
    assert!(matches!(
        err,
        NetpbmError::TruncatedData {
            expected: 3,
            found: 2
        }
    ));

    // 9 wide needs two bytes per row.
    assert!(decode_pbm(b"P4\n9 2\n\xff\x80\x00\x00").is_ok());
    let err = decode_pbm(b"P4\n9 2\n\xff\x80\x00").unwrap_err();
    assert!(matches!(
        err,
        NetpbmError::TruncatedData {
            expected: 4,
            found: 3
        }
    ));
}

#[test]
fn header_only_is_truncated() {
    let err = decode_pbm(b"P1\n2 2\n").unwrap_err();
    assert!(matches!(err, NetpbmError::TruncatedData { found: 0, .. }));
}

// ── Header errors ────────────────────────────────────────────────────

#[test]
fn color_formats_are_unsupported() {
    for data in [&b"P3\n1 1\n255\n0 0 0\n"[..], b"P6\n1 1\n255\n\0\0\0"] {
        let err = decode(data).unwrap_err();
        assert!(matches!(err, NetpbmError::UnsupportedFormat(_)), "{err:?}");
    }
}

#[test]
fn kind_specific_decoders_reject_the_other_kind() {
    let err = decode_pbm(b"P2\n1 1\n255\n0\n").unwrap_err();
    assert!(matches!(err, NetpbmError::UnsupportedFormat(_)));
    let err = decode_pgm(b"P4\n8 1\n\x00").unwrap_err();
    assert!(matches!(err, NetpbmError::UnsupportedFormat(_)));
}

#[test]
fn malformed_dimensions() {
    for data in [
        &b"P1\n2\n1 0\n"[..],
        b"P1\n2 2 2\n1 0 1 0\n",
        b"P1\nwide 2\n1 0\n",
        b"P1\n-2 2\n1 0\n",
        b"P1\n2 0\n",
    ] {
        let err = decode_pbm(data).unwrap_err();
        assert!(matches!(err, NetpbmError::MalformedHeader(_)), "{err:?}");
    }
}

#[test]
fn malformed_max_value() {
    for data in [&b"P2\n1 1\nbright\n0\n"[..], b"P2\n1 1\n65535\n0\n", b"P2\n1 1\n"] {
        let err = decode_pgm(data).unwrap_err();
        assert!(matches!(err, NetpbmError::MalformedHeader(_)), "{err:?}");
    }
}

#[test]
fn header_comments_are_not_supported() {
    let err = decode_pgm(b"P2\n# comment\n1 1\n255\n0\n").unwrap_err();
    assert!(matches!(err, NetpbmError::MalformedHeader(_)));
}

// ── Pixel data errors ────────────────────────────────────────────────

#[test]
fn non_numeric_gray_token_is_invalid() {
    let err = decode_pgm(b"P2\n2 1\n255\n12 abc\n").unwrap_err();
    assert!(matches!(err, NetpbmError::InvalidData(_)));
}

#[test]
fn samples_above_max_value_are_invalid() {
    let err = decode_pgm(b"P2\n2 1\n15\n12 16\n").unwrap_err();
    assert!(matches!(err, NetpbmError::InvalidData(_)));
    let err = decode_pgm(b"P5\n2 1\n15\n\x0c\x10").unwrap_err();
    assert!(matches!(err, NetpbmError::InvalidData(_)));
}

// ── Encoder byte layout ──────────────────────────────────────────────

#[test]
fn p1_encoding_layout() {
    let img = BitImage::from_pixels(3, 2, vec![true, false, true, false, false, true]).unwrap();
    assert_eq!(img.encode(), b"P1\n3 2\n1 0 1\n0 0 1\n");
}

#[test]
fn p2_encoding_one_value_per_line() {
    let img = GrayImage::from_pixels(2, 2, 200, vec![0, 5, 50, 200]).unwrap();
    assert_eq!(img.encode(), b"P2\n2 2\n200\n0\n5\n50\n200\n");
}

#[test]
fn p4_encoding_is_bit_packed() {
    let mut img = BitImage::from_pixels(
        10,
        1,
        vec![true, false, true, true, false, false, false, false, true, true],
    )
    .unwrap();
    img.set_encoding(Encoding::Binary);
    assert_eq!(img.encode(), b"P4\n10 1\n\xb0\xc0");
}

#[test]
fn p5_encoding_is_raw() {
    let mut img = GrayImage::from_pixels(3, 1, 255, vec![0, 10, 255]).unwrap();
    img.set_magic_number(MagicNumber::P5).unwrap();
    assert_eq!(img.encode(), b"P5\n3 1\n255\n\x00\x0a\xff");
}

#[test]
fn single_pixel_images() {
    let gray = decode_pgm(b"P5\n1 1\n1\n\x01").unwrap();
    assert_eq!(decode_pgm(&gray.encode()).unwrap(), gray);
    let bits = decode_pbm(b"P4\n1 1\n\x80").unwrap();
    assert!(bits.get(0, 0));
    assert_eq!(bits.encode(), b"P4\n1 1\n\x80");
}

#[test]
fn wide_and_tall_binary_bitmaps() {
    let wide: Vec<bool> = (0..257).map(|i| i % 5 == 0).collect();
    let mut img = BitImage::from_pixels(257, 1, wide).unwrap();
    img.set_encoding(Encoding::Binary);
    assert_eq!(decode_pbm(&img.encode()).unwrap(), img);

    let tall: Vec<bool> = (0..300).map(|i| i % 2 == 0).collect();
    let mut img = BitImage::from_pixels(1, 300, tall).unwrap();
    img.set_encoding(Encoding::Binary);
    let encoded = img.encode();
    assert_eq!(encoded.len(), b"P4\n1 300\n".len() + 300);
    assert_eq!(decode_pbm(&encoded).unwrap(), img);
}
