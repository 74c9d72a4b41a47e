use crate::error::NetpbmError;

/// Resource limits applied while decoding.
///
/// All fields default to `None` (no limit). Limits are checked right after
/// the header is parsed, before any pixel buffer is allocated.
///
/// ```
/// use zenpbm::{DecodeRequest, Limits};
///
/// let limits = Limits::default().with_max_pixels(4);
/// let result = DecodeRequest::new(b"P1\n3 2\n1 0 1\n0 1 0\n")
///     .with_limits(&limits)
///     .decode_bitmap();
/// assert!(result.is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum bytes for the decoded pixel buffer (one byte per pixel for
    /// both graymaps and bitmaps).
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    pub fn with_max_width(mut self, width: u64) -> Self {
        self.max_width = Some(width);
        self
    }

    pub fn with_max_height(mut self, height: u64) -> Self {
        self.max_height = Some(height);
        self
    }

    pub fn with_max_pixels(mut self, pixels: u64) -> Self {
        self.max_pixels = Some(pixels);
        self
    }

    pub fn with_max_memory_bytes(mut self, bytes: u64) -> Self {
        self.max_memory_bytes = Some(bytes);
        self
    }

    /// Check header dimensions against every configured bound.
    pub(crate) fn check(&self, width: u32, height: u32) -> Result<(), NetpbmError> {
        if let Some(max_w) = self.max_width {
            if u64::from(width) > max_w {
                return Err(NetpbmError::LimitExceeded(alloc::format!(
                    "width {width} exceeds limit {max_w}"
                )));
            }
        }
        if let Some(max_h) = self.max_height {
            if u64::from(height) > max_h {
                return Err(NetpbmError::LimitExceeded(alloc::format!(
                    "height {height} exceeds limit {max_h}"
                )));
            }
        }
        let pixels = u64::from(width) * u64::from(height);
        if let Some(max_px) = self.max_pixels {
            if pixels > max_px {
                return Err(NetpbmError::LimitExceeded(alloc::format!(
                    "pixel count {pixels} exceeds limit {max_px}"
                )));
            }
        }
        if let Some(max_mem) = self.max_memory_bytes {
            if pixels > max_mem {
                return Err(NetpbmError::LimitExceeded(alloc::format!(
                    "pixel buffer of {pixels} bytes exceeds memory limit {max_mem}"
                )));
            }
        }
        Ok(())
    }
}
