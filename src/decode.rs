use crate::error::NetpbmError;
use crate::image::{AnyImage, BitImage, GrayImage};
use crate::limits::Limits;
use crate::pnm;

/// Decode request carrying the input bytes and optional [`Limits`].
///
/// ```
/// use zenpbm::{DecodeRequest, Limits};
///
/// let limits = Limits::default().with_max_width(64);
/// let img = DecodeRequest::new(b"P2\n3 1\n255\n10 20 30\n")
///     .with_limits(&limits)
///     .decode_gray()?;
/// assert_eq!(img.pixels(), &[10, 20, 30]);
/// # Ok::<(), zenpbm::NetpbmError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Decode either kind, chosen by the magic number.
    pub fn decode(self) -> Result<AnyImage, NetpbmError> {
        pnm::decode_any(self.data, self.limits)
    }

    /// Decode a graymap. Anything but P2/P5 is [`NetpbmError::UnsupportedFormat`].
    pub fn decode_gray(self) -> Result<GrayImage, NetpbmError> {
        pnm::decode_gray(self.data, self.limits)
    }

    /// Decode a bitmap. Anything but P1/P4 is [`NetpbmError::UnsupportedFormat`].
    pub fn decode_bitmap(self) -> Result<BitImage, NetpbmError> {
        pnm::decode_bitmap(self.data, self.limits)
    }
}
