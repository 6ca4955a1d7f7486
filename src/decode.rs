use crate::error::PpmError;
use crate::image::Image;
use crate::limits::Limits;

/// Decode builder for in-memory P3 data.
///
/// ```
/// use zenppm::{DecodeRequest, Limits};
///
/// let limits = Limits {
///     max_pixels: Some(1 << 20),
///     ..Default::default()
/// };
/// let image = DecodeRequest::new(b"P3\n1 1\n255\n1 2 3\n")
///     .with_limits(&limits)
///     .decode()?;
/// assert_eq!(image.width(), 1);
/// # Ok::<(), zenppm::PpmError>(())
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

    pub fn decode(self) -> Result<Image, PpmError> {
        crate::ppm::decode(self.data, self.limits)
    }
}
