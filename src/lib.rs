//! # zenpbm
//!
//! PGM (grayscale) and PBM (bitmap) decoder, encoder, and in-place transforms.
//!
//! ## Supported Formats
//!
//! - **P1** (PBM ASCII): `1`/`0` tokens
//! - **P2** (PGM ASCII): decimal samples, 8-bit (max value 1..=255)
//! - **P4** (PBM binary): rows packed MSB first, padded to a whole byte
//! - **P5** (PGM binary): one byte per pixel
//!
//! ## Transforms
//!
//! [`GrayImage`] and [`BitImage`] support `invert`, `flip` (horizontal
//! mirror), `flop` (vertical mirror), and `rotate_90_cw`, all in place.
//! [`GrayImage::to_bitmap`] thresholds at half the max value.
//!
//! ## Non-Goals
//!
//! - Color formats (P3, P6) and PAM (P7)
//! - Header comment lines (`#`); each header field must be on its own line
//! - Sample depths above 8 bits
//! - Streaming decode
//!
//! ## Usage
//!
//! ```
//! use zenpbm::{Encoding, decode_pgm};
//!
//! let mut img = decode_pgm(b"P2\n3 1\n255\n10 20 30\n")?;
//! img.invert();
//! assert_eq!(img.pixels(), &[245, 235, 225]);
//!
//! let mut bits = img.to_bitmap();
//! bits.set_encoding(Encoding::Binary);
//! assert_eq!(bits.encode(), b"P4\n3 1\n\xe0");
//! # Ok::<(), zenpbm::NetpbmError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod convert;
mod decode;
mod error;
mod format;
mod grid;
mod image;
mod info;
mod limits;

mod pnm;

#[cfg(feature = "std")]
pub mod fs;

#[cfg(feature = "imgref")]
mod interop;

// Re-exports
pub use decode::DecodeRequest;
pub use error::{NetpbmError, Result};
pub use format::{Encoding, ImageKind, MagicNumber};
pub use image::{AnyImage, BitImage, GrayImage, NetpbmImage};
pub use info::ImageInfo;
pub use limits::Limits;

#[cfg(feature = "std")]
pub use fs::{load, load_pbm, load_pgm};

/// Decode a PGM or PBM, chosen by the magic number.
pub fn decode(data: &[u8]) -> Result<AnyImage> {
    DecodeRequest::new(data).decode()
}

/// Decode a P2/P5 graymap.
pub fn decode_pgm(data: &[u8]) -> Result<GrayImage> {
    DecodeRequest::new(data).decode_gray()
}

/// Decode a P1/P4 bitmap.
pub fn decode_pbm(data: &[u8]) -> Result<BitImage> {
    DecodeRequest::new(data).decode_bitmap()
}
