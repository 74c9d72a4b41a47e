//! Decoded image models.

use alloc::vec::Vec;

use crate::error::NetpbmError;
use crate::format::{Encoding, ImageKind, MagicNumber};
use crate::grid::Grid;
use crate::pnm;

/// Capability shared by [`GrayImage`] and [`BitImage`].
pub trait NetpbmImage {
    fn magic_number(&self) -> MagicNumber;
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// `(width, height)`.
    fn size(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    /// Serialize header and pixels according to [`Self::magic_number`].
    fn encode(&self) -> Vec<u8>;

    fn invert(&mut self);
    fn flip(&mut self);
    fn flop(&mut self);
    fn rotate_90_cw(&mut self);
}

/// 8-bit grayscale image (PGM, `P2`/`P5`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GrayImage {
    grid: Grid<u8>,
    max_value: u8,
    magic: MagicNumber,
}

impl GrayImage {
    /// A `width × height` image with every pixel set to `value`, encoded as `P2`.
    pub fn new(width: u32, height: u32, max_value: u8, value: u8) -> Result<Self, NetpbmError> {
        check_max_value(max_value)?;
        check_sample(value, max_value)?;
        Ok(Self {
            grid: Grid::filled(width, height, value)?,
            max_value,
            magic: MagicNumber::P2,
        })
    }

    /// Build from row-major samples. Every sample must be `<= max_value`.
    pub fn from_pixels(
        width: u32,
        height: u32,
        max_value: u8,
        pixels: Vec<u8>,
    ) -> Result<Self, NetpbmError> {
        check_max_value(max_value)?;
        if let Some(&bad) = pixels.iter().find(|&&p| p > max_value) {
            check_sample(bad, max_value)?;
        }
        Ok(Self {
            grid: Grid::from_vec(width, height, pixels)?,
            max_value,
            magic: MagicNumber::P2,
        })
    }

    pub(crate) fn from_parts(grid: Grid<u8>, max_value: u8, magic: MagicNumber) -> Self {
        debug_assert_eq!(magic.kind(), ImageKind::Graymap);
        Self {
            grid,
            max_value,
            magic,
        }
    }

    pub(crate) fn grid(&self) -> &Grid<u8> {
        &self.grid
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    #[inline]
    pub fn max_value(&self) -> u8 {
        self.max_value
    }

    #[inline]
    pub fn magic_number(&self) -> MagicNumber {
        self.magic
    }

    /// Pixel at column `x`, row `y`.
    ///
    /// # Panics
    /// If `x >= width` or `y >= height`.
    #[inline]
    #[track_caller]
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.grid.get(x, y)
    }

    /// Overwrite the pixel at column `x`, row `y`. No clamping to `max_value`.
    ///
    /// # Panics
    /// If `x >= width` or `y >= height`.
    #[inline]
    #[track_caller]
    pub fn set(&mut self, x: u32, y: u32, value: u8) {
        self.grid.set(x, y, value);
    }

    /// Row-major samples.
    pub fn pixels(&self) -> &[u8] {
        self.grid.as_slice()
    }

    pub fn pixels_mut(&mut self) -> &mut [u8] {
        self.grid.as_mut_slice()
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.grid.into_vec()
    }

    /// Iterator over rows, each `width` samples long.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[u8]> + '_ {
        self.grid.rows()
    }

    pub fn fill(&mut self, value: u8) {
        self.grid.map_in_place(|_| value);
    }

    /// Change the declared encoding. Only `P2` and `P5` are accepted.
    pub fn set_magic_number(&mut self, magic: MagicNumber) -> Result<(), NetpbmError> {
        self.magic = magic.expect_kind(ImageKind::Graymap)?;
        Ok(())
    }

    pub fn set_encoding(&mut self, encoding: Encoding) {
        self.magic = MagicNumber::new(ImageKind::Graymap, encoding);
    }

    /// Change the white point without touching pixel data.
    ///
    /// Pixels above the new value are left as they are; callers must not
    /// lower the max value below existing samples.
    pub fn set_max_value(&mut self, max_value: u8) -> Result<(), NetpbmError> {
        check_max_value(max_value)?;
        self.max_value = max_value;
        Ok(())
    }

    /// Replace every sample `p` with `max_value - p`.
    pub fn invert(&mut self) {
        let max = self.max_value;
        self.grid.map_in_place(|p| max.saturating_sub(p));
    }

    pub fn flip(&mut self) {
        self.grid.flip();
    }

    pub fn flop(&mut self) {
        self.grid.flop();
    }

    pub fn rotate_90_cw(&mut self) {
        self.grid.rotate_90_cw();
    }

    pub fn rotate_90_ccw(&mut self) {
        self.grid.rotate_90_ccw();
    }

    pub fn rotate_180(&mut self) {
        self.grid.rotate_180();
    }

    pub fn encode(&self) -> Vec<u8> {
        pnm::encode_gray(self)
    }
}

/// 1-bit black and white image (PBM, `P1`/`P4`). `true` is black.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BitImage {
    grid: Grid<bool>,
    magic: MagicNumber,
}

impl BitImage {
    /// A `width × height` image with every pixel set to `value`, encoded as `P1`.
    pub fn new(width: u32, height: u32, value: bool) -> Result<Self, NetpbmError> {
        Ok(Self {
            grid: Grid::filled(width, height, value)?,
            magic: MagicNumber::P1,
        })
    }

    pub fn from_pixels(width: u32, height: u32, pixels: Vec<bool>) -> Result<Self, NetpbmError> {
        Ok(Self {
            grid: Grid::from_vec(width, height, pixels)?,
            magic: MagicNumber::P1,
        })
    }

    pub(crate) fn from_parts(grid: Grid<bool>, magic: MagicNumber) -> Self {
        debug_assert_eq!(magic.kind(), ImageKind::Bitmap);
        Self { grid, magic }
    }

    pub(crate) fn grid(&self) -> &Grid<bool> {
        &self.grid
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    #[inline]
    pub fn magic_number(&self) -> MagicNumber {
        self.magic
    }

    /// # Panics
    /// If `x >= width` or `y >= height`.
    #[inline]
    #[track_caller]
    pub fn get(&self, x: u32, y: u32) -> bool {
        self.grid.get(x, y)
    }

    /// # Panics
    /// If `x >= width` or `y >= height`.
    #[inline]
    #[track_caller]
    pub fn set(&mut self, x: u32, y: u32, value: bool) {
        self.grid.set(x, y, value);
    }

    pub fn pixels(&self) -> &[bool] {
        self.grid.as_slice()
    }

    pub fn pixels_mut(&mut self) -> &mut [bool] {
        self.grid.as_mut_slice()
    }

    pub fn into_pixels(self) -> Vec<bool> {
        self.grid.into_vec()
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[bool]> + '_ {
        self.grid.rows()
    }

    pub fn fill(&mut self, value: bool) {
        self.grid.map_in_place(|_| value);
    }

    /// Number of black pixels.
    pub fn count_set(&self) -> usize {
        self.pixels().iter().filter(|&&p| p).count()
    }

    /// Change the declared encoding. Only `P1` and `P4` are accepted.
    pub fn set_magic_number(&mut self, magic: MagicNumber) -> Result<(), NetpbmError> {
        self.magic = magic.expect_kind(ImageKind::Bitmap)?;
        Ok(())
    }

    pub fn set_encoding(&mut self, encoding: Encoding) {
        self.magic = MagicNumber::new(ImageKind::Bitmap, encoding);
    }

    pub fn invert(&mut self) {
        self.grid.map_in_place(|p| !p);
    }

    pub fn flip(&mut self) {
        self.grid.flip();
    }

    pub fn flop(&mut self) {
        self.grid.flop();
    }

    pub fn rotate_90_cw(&mut self) {
        self.grid.rotate_90_cw();
    }

    pub fn rotate_90_ccw(&mut self) {
        self.grid.rotate_90_ccw();
    }

    pub fn rotate_180(&mut self) {
        self.grid.rotate_180();
    }

    pub fn encode(&self) -> Vec<u8> {
        pnm::encode_bitmap(self)
    }
}

macro_rules! impl_netpbm_image {
    ($ty:ty) => {
        impl NetpbmImage for $ty {
            fn magic_number(&self) -> MagicNumber {
                <$ty>::magic_number(self)
            }
            fn width(&self) -> u32 {
                <$ty>::width(self)
            }
            fn height(&self) -> u32 {
                <$ty>::height(self)
            }
            fn encode(&self) -> Vec<u8> {
                <$ty>::encode(self)
            }
            fn invert(&mut self) {
                <$ty>::invert(self)
            }
            fn flip(&mut self) {
                <$ty>::flip(self)
            }
            fn flop(&mut self) {
                <$ty>::flop(self)
            }
            fn rotate_90_cw(&mut self) {
                <$ty>::rotate_90_cw(self)
            }
        }
    };
}

impl_netpbm_image!(GrayImage);
impl_netpbm_image!(BitImage);

/// Either kind of image, as produced by auto-detecting decode.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AnyImage {
    Gray(GrayImage),
    Bit(BitImage),
}

impl AnyImage {
    pub fn kind(&self) -> ImageKind {
        match self {
            Self::Gray(_) => ImageKind::Graymap,
            Self::Bit(_) => ImageKind::Bitmap,
        }
    }

    pub fn as_gray(&self) -> Option<&GrayImage> {
        match self {
            Self::Gray(img) => Some(img),
            Self::Bit(_) => None,
        }
    }

    pub fn as_bitmap(&self) -> Option<&BitImage> {
        match self {
            Self::Bit(img) => Some(img),
            Self::Gray(_) => None,
        }
    }

    pub fn into_gray(self) -> Option<GrayImage> {
        match self {
            Self::Gray(img) => Some(img),
            Self::Bit(_) => None,
        }
    }

    pub fn into_bitmap(self) -> Option<BitImage> {
        match self {
            Self::Bit(img) => Some(img),
            Self::Gray(_) => None,
        }
    }

    fn inner(&self) -> &dyn NetpbmImage {
        match self {
            Self::Gray(img) => img,
            Self::Bit(img) => img,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn NetpbmImage {
        match self {
            Self::Gray(img) => img,
            Self::Bit(img) => img,
        }
    }
}

impl NetpbmImage for AnyImage {
    fn magic_number(&self) -> MagicNumber {
        self.inner().magic_number()
    }
    fn width(&self) -> u32 {
        self.inner().width()
    }
    fn height(&self) -> u32 {
        self.inner().height()
    }
    fn encode(&self) -> Vec<u8> {
        self.inner().encode()
    }
    fn invert(&mut self) {
        self.inner_mut().invert()
    }
    fn flip(&mut self) {
        self.inner_mut().flip()
    }
    fn flop(&mut self) {
        self.inner_mut().flop()
    }
    fn rotate_90_cw(&mut self) {
        self.inner_mut().rotate_90_cw()
    }
}

impl From<GrayImage> for AnyImage {
    fn from(img: GrayImage) -> Self {
        Self::Gray(img)
    }
}

impl From<BitImage> for AnyImage {
    fn from(img: BitImage) -> Self {
        Self::Bit(img)
    }
}

fn check_max_value(max_value: u8) -> Result<(), NetpbmError> {
    if max_value == 0 {
        return Err(NetpbmError::MalformedHeader("max value must be at least 1".into()));
    }
    Ok(())
}

fn check_sample(value: u8, max_value: u8) -> Result<(), NetpbmError> {
    if value > max_value {
        return Err(NetpbmError::InvalidData(alloc::format!(
            "sample {value} exceeds max value {max_value}"
        )));
    }
    Ok(())
}
