use core::fmt;
use core::str::FromStr;

use crate::error::NetpbmError;

/// Which family of image a magic number describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageKind {
    /// PGM: 8-bit grayscale.
    Graymap,
    /// PBM: 1-bit black and white.
    Bitmap,
}

/// How the pixel data following the header is laid out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Whitespace-separated decimal tokens.
    Ascii,
    /// Raw bytes (PGM) or packed bits (PBM).
    Binary,
}

/// Netpbm magic number for the supported sub-formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MagicNumber {
    /// P1: ASCII bitmap.
    P1,
    /// P2: ASCII graymap.
    P2,
    /// P4: binary bitmap, rows packed MSB first.
    P4,
    /// P5: binary graymap, one byte per pixel.
    P5,
}

impl MagicNumber {
    pub fn new(kind: ImageKind, encoding: Encoding) -> Self {
        match (kind, encoding) {
            (ImageKind::Bitmap, Encoding::Ascii) => Self::P1,
            (ImageKind::Graymap, Encoding::Ascii) => Self::P2,
            (ImageKind::Bitmap, Encoding::Binary) => Self::P4,
            (ImageKind::Graymap, Encoding::Binary) => Self::P5,
        }
    }

    pub fn kind(self) -> ImageKind {
        match self {
            Self::P1 | Self::P4 => ImageKind::Bitmap,
            Self::P2 | Self::P5 => ImageKind::Graymap,
        }
    }

    pub fn encoding(self) -> Encoding {
        match self {
            Self::P1 | Self::P2 => Encoding::Ascii,
            Self::P4 | Self::P5 => Encoding::Binary,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::P1 => "P1",
            Self::P2 => "P2",
            Self::P4 => "P4",
            Self::P5 => "P5",
        }
    }

    /// Fails with [`NetpbmError::UnsupportedFormat`] unless `self` belongs to `kind`.
    pub(crate) fn expect_kind(self, kind: ImageKind) -> Result<Self, NetpbmError> {
        if self.kind() == kind {
            Ok(self)
        } else {
            Err(NetpbmError::UnsupportedFormat(alloc::format!(
                "{self} is not a {kind:?} magic number"
            )))
        }
    }
}

impl fmt::Display for MagicNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MagicNumber {
    type Err = NetpbmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "P1" => Ok(Self::P1),
            "P2" => Ok(Self::P2),
            "P4" => Ok(Self::P4),
            "P5" => Ok(Self::P5),
            other => Err(NetpbmError::UnsupportedFormat(alloc::format!(
                "unrecognized magic number {other:?}"
            ))),
        }
    }
}
