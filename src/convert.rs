//! Conversions between graymaps and bitmaps.

use crate::format::MagicNumber;
use crate::image::{BitImage, GrayImage};

impl GrayImage {
    /// Threshold at half the max value: a pixel is black iff
    /// `value > max_value / 2` (integer division).
    ///
    /// The result is always declared `P1`, whatever this image's encoding.
    pub fn to_bitmap(&self) -> BitImage {
        self.to_bitmap_with_threshold(self.max_value() / 2)
    }

    /// A pixel is black iff `value > threshold`. The result is declared `P1`.
    pub fn to_bitmap_with_threshold(&self, threshold: u8) -> BitImage {
        BitImage::from_parts(self.grid().map(|p| p > threshold), MagicNumber::P1)
    }
}

impl From<&GrayImage> for BitImage {
    fn from(img: &GrayImage) -> Self {
        img.to_bitmap()
    }
}

impl BitImage {
    /// Expand to a `P2` graymap with max value 255: white is 255, black is 0.
    pub fn to_gray(&self) -> GrayImage {
        let grid = self.grid().map(|black| if black { 0 } else { u8::MAX });
        GrayImage::from_parts(grid, u8::MAX, MagicNumber::P2)
    }
}

impl From<&BitImage> for GrayImage {
    fn from(img: &BitImage) -> Self {
        img.to_gray()
    }
}
