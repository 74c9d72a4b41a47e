use alloc::string::String;

/// Errors from PGM/PBM decoding, encoding, and file I/O.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum NetpbmError {
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("malformed header: {0}")]
    MalformedHeader(String),

    #[error("truncated pixel data: expected {expected} tokens or bytes, found {found}")]
    TruncatedData { expected: usize, found: usize },

    #[error("invalid pixel data: {0}")]
    InvalidData(String),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("pixel buffer length mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[cfg(feature = "std")]
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, NetpbmError>;
