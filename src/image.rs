use alloc::vec;
use alloc::vec::Vec;
use core::ops::Add;

use crate::error::PpmError;
use crate::pixel::Pixel;

/// An RGB image with a row-major pixel buffer.
///
/// `pixels().len() == width() * height()` holds for every value a caller can
/// observe. Pixel values may be changed in place, the shape cannot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Image {
    width: usize,
    height: usize,
    pixels: Vec<Pixel>,
}

pub(crate) fn pixel_count(width: usize, height: usize) -> Result<usize, PpmError> {
    width
        .checked_mul(height)
        .ok_or(PpmError::DimensionsTooLarge { width, height })
}

impl Image {
    /// Create a `width` x `height` image filled with black.
    pub fn new(width: usize, height: usize) -> Result<Self, PpmError> {
        let count = pixel_count(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![Pixel::BLACK; count],
        })
    }

    /// Wrap an existing row-major pixel vector.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Pixel>) -> Result<Self, PpmError> {
        let expected = pixel_count(width, height)?;
        if pixels.len() != expected {
            return Err(PpmError::PixelCountMismatch {
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

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Mutable access to pixel values. The slice cannot grow or shrink.
    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    pub fn into_pixels(self) -> Vec<Pixel> {
        self.pixels
    }

    /// Iterate rows top to bottom. Yields nothing for a zero-width image.
    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> + '_ {
        self.pixels.chunks_exact(self.width.max(1))
    }

    fn index(&self, x: usize, y: usize) -> Result<usize, PpmError> {
        if x >= self.width || y >= self.height {
            return Err(PpmError::OutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y * self.width + x)
    }

    pub fn get_pixel(&self, x: usize, y: usize) -> Result<Pixel, PpmError> {
        let i = self.index(x, y)?;
        Ok(self.pixels[i])
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, pixel: Pixel) -> Result<(), PpmError> {
        let i = self.index(x, y)?;
        self.pixels[i] = pixel;
        Ok(())
    }

    /// Overlay two images with per-channel saturating addition.
    ///
    /// The result covers only the overlapping top-left region:
    /// `min(self.width, other.width)` x `min(self.height, other.height)`.
    /// Neither operand is modified.
    pub fn combine(&self, other: &Image) -> Image {
        let width = self.width.min(other.width);
        let height = self.height.min(other.height);
        let mut pixels = Vec::with_capacity(width * height);
        if width > 0 {
            for (a, b) in self.rows().zip(other.rows()).take(height) {
                pixels.extend(
                    a[..width]
                        .iter()
                        .zip(&b[..width])
                        .map(|(&pa, &pb)| pa.saturating_add(pb)),
                );
            }
        }
        Image {
            width,
            height,
            pixels,
        }
    }

    /// Copy into an [`imgref::ImgVec`] of [`rgb::RGB8`].
    #[cfg(feature = "imgref")]
    pub fn to_imgvec(&self) -> imgref::ImgVec<rgb::RGB8> {
        let buf = self.pixels.iter().map(|&p| rgb::RGB8::from(p)).collect();
        imgref::ImgVec::new(buf, self.width, self.height)
    }

    /// Copy out of an [`imgref::ImgRef`], dropping any stride padding.
    #[cfg(feature = "imgref")]
    pub fn from_imgref(img: imgref::ImgRef<'_, rgb::RGB8>) -> Self {
        let pixels = img.pixels().map(Pixel::from).collect();
        Self {
            width: img.width(),
            height: img.height(),
            pixels,
        }
    }
}

impl Add for &Image {
    type Output = Image;

    fn add(self, other: &Image) -> Image {
        self.combine(other)
    }
}
