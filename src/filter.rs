//! Per-pixel filters.

use core::fmt;

use crate::image::Image;
use crate::pixel::Pixel;

/// The kind a filter declares for itself.
///
/// The pipeline labels each step from this tag, never from the concrete type.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FilterKind {
    Grayscale,
    Invert,
    /// A filter that declares no known kind.
    Unknown,
}

impl FilterKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Grayscale => "Grayscale",
            Self::Invert => "Invert",
            Self::Unknown => "unknown filter",
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A stateless transformation applied to every pixel of an image.
///
/// Implementors provide [`Filter::map_pixel`]; [`Filter::process`] walks the
/// buffer in place and never changes the image's shape.
pub trait Filter {
    /// Stable human-readable name.
    fn describe(&self) -> &str;

    fn kind(&self) -> FilterKind {
        FilterKind::Unknown
    }

    fn map_pixel(&self, pixel: Pixel) -> Pixel;

    fn process(&self, image: &mut Image) {
        for p in image.pixels_mut() {
            *p = self.map_pixel(*p);
        }
    }
}

impl fmt::Display for dyn Filter + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Filter: {}", self.describe())
    }
}

impl fmt::Debug for dyn Filter + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter")
            .field("name", &self.describe())
            .field("kind", &self.kind())
            .finish()
    }
}

/// Replace every channel with the pixel's truncated luma.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Grayscale;

impl Filter for Grayscale {
    fn describe(&self) -> &str {
        "Grayscale Filter"
    }

    fn kind(&self) -> FilterKind {
        FilterKind::Grayscale
    }

    fn map_pixel(&self, pixel: Pixel) -> Pixel {
        Pixel::gray(pixel.luma())
    }
}

/// Replace every channel `c` with `255 - c`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Invert;

impl Filter for Invert {
    fn describe(&self) -> &str {
        "Invert Filter"
    }

    fn kind(&self) -> FilterKind {
        FilterKind::Invert
    }

    fn map_pixel(&self, pixel: Pixel) -> Pixel {
        pixel.inverted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec::Vec;

    fn colored() -> Image {
        let pixels = (0..12u8)
            .map(|i| Pixel::new(i * 20, 255 - i * 7, i * i))
            .collect();
        Image::from_pixels(4, 3, pixels).unwrap()
    }

    #[test]
    fn grayscale_equalizes_channels() {
        let mut img = colored();
        Grayscale.process(&mut img);
        assert_eq!((img.width(), img.height()), (4, 3));
        assert!(img.pixels().iter().all(|p| p.is_gray()));
    }

    #[test]
    fn grayscale_uses_truncated_luma() {
        let mut img = Image::from_pixels(1, 1, alloc::vec![Pixel::new(0, 255, 0)]).unwrap();
        Grayscale.process(&mut img);
        assert_eq!(img.pixels()[0], Pixel::gray(149));
    }

    #[test]
    fn invert_is_an_involution() {
        let original = colored();
        let mut img = original.clone();
        Invert.process(&mut img);
        assert_ne!(img, original);
        Invert.process(&mut img);
        assert_eq!(img, original);
    }

    #[test]
    fn filters_are_reusable() {
        let filter = Invert;
        let mut a = colored();
        let mut b = Image::new(2, 2).unwrap();
        filter.process(&mut a);
        filter.process(&mut b);
        assert!(b.pixels().iter().all(|&p| p == Pixel::WHITE));
    }

    #[test]
    fn describe_and_display() {
        let filters: [&dyn Filter; 2] = [&Grayscale, &Invert];
        let names: Vec<_> = filters.iter().map(|f| f.to_string()).collect();
        assert_eq!(names, ["Filter: Grayscale Filter", "Filter: Invert Filter"]);
        assert_eq!(Grayscale.kind().to_string(), "Grayscale");
    }

    struct Sepia;

    impl Filter for Sepia {
        fn describe(&self) -> &str {
            "Sepia"
        }

        fn map_pixel(&self, pixel: Pixel) -> Pixel {
            pixel
        }
    }

    #[test]
    fn undeclared_kind_is_unknown() {
        assert_eq!(Sepia.kind(), FilterKind::Unknown);
        assert_eq!(Sepia.kind().label(), "unknown filter");
    }
}
