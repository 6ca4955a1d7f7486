use alloc::string::String;

#[cfg(feature = "std")]
use std::path::PathBuf;

/// Errors from P3 decoding, encoding, and pixel access.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PpmError {
    #[cfg(feature = "std")]
    #[error("cannot open {} for reading", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "std")]
    #[error("cannot create {} for writing", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "std")]
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid format: {0}")]
    Format(#[from] FormatError),

    #[error("pixel ({x}, {y}) out of range for {width}x{height} image")]
    OutOfRange {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("pixel count mismatch: expected {expected}, got {actual}")]
    PixelCountMismatch { expected: usize, actual: usize },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: usize, height: usize },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),
}

/// Why a P3 source was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum FormatError {
    #[error("unsupported magic {0:?}, expected \"P3\"")]
    UnsupportedMagic(String),

    #[error("invalid dimensions")]
    InvalidDimensions,

    #[error("unsupported bit depth, only maxval 255 is accepted")]
    UnsupportedBitDepth,

    #[error("failed to read pixel {index}")]
    PixelRead { index: usize },
}

/// Coarse classification of a [`PpmError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// A file could not be opened/created, or a stream failed.
    Io,
    /// The source is not a well-formed P3 image.
    Format,
    /// Pixel coordinates outside the image.
    OutOfRange,
    /// Caller-supplied data or limits rejected the operation.
    Invalid,
}

impl PpmError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            #[cfg(feature = "std")]
            Self::Open { .. } | Self::Create { .. } | Self::Io(_) => ErrorKind::Io,
            Self::Format(_) => ErrorKind::Format,
            Self::OutOfRange { .. } => ErrorKind::OutOfRange,
            Self::PixelCountMismatch { .. }
            | Self::DimensionsTooLarge { .. }
            | Self::LimitExceeded(_) => ErrorKind::Invalid,
        }
    }
}
