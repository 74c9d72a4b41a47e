use crate::error::NetpbmError;
use crate::format::{Encoding, ImageKind, MagicNumber};

/// Header fields of a PGM/PBM file, read without decoding pixel data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub magic: MagicNumber,
    pub width: u32,
    pub height: u32,
    /// `Some` for graymaps, `None` for bitmaps.
    pub max_value: Option<u8>,
}

impl ImageInfo {
    /// Parse only the header.
    pub fn from_bytes(data: &[u8]) -> Result<Self, NetpbmError> {
        crate::pnm::probe_header(data)
    }

    pub fn kind(&self) -> ImageKind {
        self.magic.kind()
    }

    pub fn encoding(&self) -> Encoding {
        self.magic.encoding()
    }
}
