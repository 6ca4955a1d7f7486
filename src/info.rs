use crate::error::PpmError;

/// Header-level information about a P3 image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: usize,
    pub height: usize,
}

impl ImageInfo {
    /// Parse only the header (magic, comments, dimensions, maxval).
    ///
    /// Pixel data is neither read nor validated.
    pub fn from_bytes(data: &[u8]) -> Result<Self, PpmError> {
        crate::ppm::probe_header(data)
    }
}
