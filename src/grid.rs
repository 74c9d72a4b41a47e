//! Row-major pixel storage shared by graymaps and bitmaps.

use alloc::vec;
use alloc::vec::Vec;

use crate::error::NetpbmError;

/// A `width × height` grid of samples stored row-major.
///
/// `pixels.len() == width * height` holds at all times.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct Grid<T> {
    width: u32,
    height: u32,
    pixels: Vec<T>,
}

impl<T: Copy> Grid<T> {
    pub fn filled(width: u32, height: u32, value: T) -> Result<Self, NetpbmError> {
        let len = pixel_count(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![value; len],
        })
    }

    pub fn from_vec(width: u32, height: u32, pixels: Vec<T>) -> Result<Self, NetpbmError> {
        let expected = pixel_count(width, height)?;
        if pixels.len() != expected {
            return Err(NetpbmError::DimensionMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.pixels
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.pixels
    }

    pub fn into_vec(self) -> Vec<T> {
        self.pixels
    }

    pub fn rows(&self) -> core::slice::ChunksExact<'_, T> {
        self.pixels.chunks_exact(self.width as usize)
    }

    #[inline]
    #[track_caller]
    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{} image",
            self.width,
            self.height
        );
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    #[track_caller]
    pub fn get(&self, x: u32, y: u32) -> T {
        self.pixels[self.index(x, y)]
    }

    #[inline]
    #[track_caller]
    pub fn set(&mut self, x: u32, y: u32, value: T) {
        let i = self.index(x, y);
        self.pixels[i] = value;
    }

    pub fn map_in_place(&mut self, mut f: impl FnMut(T) -> T) {
        for p in &mut self.pixels {
            *p = f(*p);
        }
    }

    pub fn map<U: Copy>(&self, f: impl FnMut(T) -> U) -> Grid<U> {
        Grid {
            width: self.width,
            height: self.height,
            pixels: self.pixels.iter().copied().map(f).collect(),
        }
    }

    /// Horizontal mirror: reverses each row. An odd-width centre column stays put.
    pub fn flip(&mut self) {
        let w = self.width as usize;
        for row in self.pixels.chunks_exact_mut(w) {
            row.reverse();
        }
    }

    /// Vertical mirror: reverses row order. An odd-height centre row stays put.
    pub fn flop(&mut self) {
        let w = self.width as usize;
        let h = self.height as usize;
        for y in 0..h / 2 {
            let (top, bottom) = self.pixels.split_at_mut((h - 1 - y) * w);
            top[y * w..(y + 1) * w].swap_with_slice(&mut bottom[..w]);
        }
    }

    /// Rotate 90° clockwise; the output is `height` wide and `width` tall.
    ///
    /// Output row `i`, column `j` takes input row `height - j - 1`, column `i`.
    pub fn rotate_90_cw(&mut self) {
        let w = self.width as usize;
        let h = self.height as usize;
        let mut out = Vec::with_capacity(self.pixels.len());
        for i in 0..w {
            for j in 0..h {
                out.push(self.pixels[(h - j - 1) * w + i]);
            }
        }
        self.pixels = out;
        core::mem::swap(&mut self.width, &mut self.height);
    }

    /// Rotate 90° counter-clockwise.
    pub fn rotate_90_ccw(&mut self) {
        let w = self.width as usize;
        let h = self.height as usize;
        let mut out = Vec::with_capacity(self.pixels.len());
        for i in 0..w {
            for j in 0..h {
                out.push(self.pixels[j * w + (w - i - 1)]);
            }
        }
        self.pixels = out;
        core::mem::swap(&mut self.width, &mut self.height);
    }

    pub fn rotate_180(&mut self) {
        self.pixels.reverse();
    }
}

/// `width * height`, failing on zero dimensions or `usize` overflow.
pub(crate) fn pixel_count(width: u32, height: u32) -> Result<usize, NetpbmError> {
    if width == 0 || height == 0 {
        return Err(NetpbmError::MalformedHeader(alloc::format!(
            "dimensions must be positive, got {width}x{height}"
        )));
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(NetpbmError::DimensionsTooLarge { width, height })
}
