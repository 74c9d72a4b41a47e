//! File and writer helpers (`std` only).
//!
//! Files are read whole and written through a [`BufWriter`]; handles are
//! closed before each function returns, on success and on error. A failed
//! write leaves the destination file partially written.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::decode::DecodeRequest;
use crate::error::NetpbmError;
use crate::image::{AnyImage, BitImage, GrayImage, NetpbmImage};
use crate::limits::Limits;

fn read_file(path: &Path) -> Result<Vec<u8>, NetpbmError> {
    log::trace!("reading {}", path.display());
    Ok(std::fs::read(path)?)
}

/// Load a PGM or PBM file, whichever the magic number says.
pub fn load(path: impl AsRef<Path>) -> Result<AnyImage, NetpbmError> {
    DecodeRequest::new(&read_file(path.as_ref())?).decode()
}

/// Load a file with decode limits applied before pixel allocation.
pub fn load_with_limits(path: impl AsRef<Path>, limits: &Limits) -> Result<AnyImage, NetpbmError> {
    DecodeRequest::new(&read_file(path.as_ref())?)
        .with_limits(limits)
        .decode()
}

/// Load a P2/P5 file.
pub fn load_pgm(path: impl AsRef<Path>) -> Result<GrayImage, NetpbmError> {
    DecodeRequest::new(&read_file(path.as_ref())?).decode_gray()
}

/// Load a P1/P4 file.
pub fn load_pbm(path: impl AsRef<Path>) -> Result<BitImage, NetpbmError> {
    DecodeRequest::new(&read_file(path.as_ref())?).decode_bitmap()
}

/// Write `img` to `writer` in its declared encoding.
pub fn write_image<W: Write>(img: &impl NetpbmImage, mut writer: W) -> Result<(), NetpbmError> {
    writer.write_all(&img.encode())?;
    writer.flush()?;
    Ok(())
}

/// Create (or truncate) `path` and write `img` to it.
pub fn save_image(img: &impl NetpbmImage, path: impl AsRef<Path>) -> Result<(), NetpbmError> {
    let path = path.as_ref();
    log::trace!("writing {} to {}", img.magic_number(), path.display());
    let file = File::create(path)?;
    write_image(img, BufWriter::new(file))
}

impl GrayImage {
    /// Save in the declared encoding (P2 or P5).
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), NetpbmError> {
        save_image(self, path)
    }

    pub fn write_to<W: Write>(&self, writer: W) -> Result<(), NetpbmError> {
        write_image(self, writer)
    }
}

impl BitImage {
    /// Save in the declared encoding (P1 or P4).
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), NetpbmError> {
        save_image(self, path)
    }

    pub fn write_to<W: Write>(&self, writer: W) -> Result<(), NetpbmError> {
        write_image(self, writer)
    }
}

impl AnyImage {
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), NetpbmError> {
        save_image(self, path)
    }

    pub fn write_to<W: Write>(&self, writer: W) -> Result<(), NetpbmError> {
        write_image(self, writer)
    }
}
