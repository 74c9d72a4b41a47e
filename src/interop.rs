//! [`imgref`] interop (`imgref` feature).
//!
//! Views borrow the image's row-major buffer directly; no copy is made.

use alloc::vec::Vec;

use imgref::{ImgRef, ImgVec};

use crate::error::NetpbmError;
use crate::image::{BitImage, GrayImage};

impl GrayImage {
    /// Zero-copy view of the samples.
    pub fn as_imgref(&self) -> ImgRef<'_, u8> {
        ImgRef::new(self.pixels(), self.width() as usize, self.height() as usize)
    }

    pub fn to_imgvec(&self) -> ImgVec<u8> {
        ImgVec::new(
            self.pixels().to_vec(),
            self.width() as usize,
            self.height() as usize,
        )
    }

    /// Build a `P2` image from any (possibly strided) 2D buffer.
    pub fn from_imgref(img: ImgRef<'_, u8>, max_value: u8) -> Result<Self, NetpbmError> {
        let (width, height) = dims(img.width(), img.height())?;
        let pixels: Vec<u8> = img.rows().flatten().copied().collect();
        Self::from_pixels(width, height, max_value, pixels)
    }
}

impl BitImage {
    /// Zero-copy view of the pixels (`true` is black).
    pub fn as_imgref(&self) -> ImgRef<'_, bool> {
        ImgRef::new(self.pixels(), self.width() as usize, self.height() as usize)
    }

    pub fn to_imgvec(&self) -> ImgVec<bool> {
        ImgVec::new(
            self.pixels().to_vec(),
            self.width() as usize,
            self.height() as usize,
        )
    }

    /// Build a `P1` image from any (possibly strided) 2D buffer.
    pub fn from_imgref(img: ImgRef<'_, bool>) -> Result<Self, NetpbmError> {
        let (width, height) = dims(img.width(), img.height())?;
        let pixels: Vec<bool> = img.rows().flatten().copied().collect();
        Self::from_pixels(width, height, pixels)
    }
}

fn dims(width: usize, height: usize) -> Result<(u32, u32), NetpbmError> {
    match (u32::try_from(width), u32::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(NetpbmError::DimensionsTooLarge {
            width: u32::try_from(width).unwrap_or(u32::MAX),
            height: u32::try_from(height).unwrap_or(u32::MAX),
        }),
    }
}
