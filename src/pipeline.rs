//! Ordered application of filters to one image.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::filter::{Filter, FilterKind};
use crate::image::Image;

/// Apply `filters` to `image` in order, logging each filter's kind at info
/// level before it runs.
pub fn apply_filters(filters: &[Box<dyn Filter>], image: &mut Image) {
    apply_filters_with(filters, image, |kind, _| log::info!("{kind}"));
}

/// Apply `filters` to `image` in order, calling `on_filter` before each one.
///
/// No filter is skipped or reordered. The list itself is never modified.
pub fn apply_filters_with<F>(filters: &[Box<dyn Filter>], image: &mut Image, mut on_filter: F)
where
    F: FnMut(FilterKind, &dyn Filter),
{
    for filter in filters {
        on_filter(filter.kind(), &**filter);
        filter.process(image);
    }
}

/// A caller-owned, ordered list of filters.
///
/// ```
/// use zenppm::{Grayscale, Image, Invert, Pipeline, Pixel};
///
/// let pipeline = Pipeline::new().with(Grayscale).with(Invert);
/// let mut image = Image::from_pixels(1, 1, vec![Pixel::new(255, 0, 0)])?;
/// pipeline.run(&mut image);
/// assert_eq!(image.get_pixel(0, 0)?, Pixel::gray(255 - 76));
/// # Ok::<(), zenppm::PpmError>(())
/// ```
#[derive(Default)]
pub struct Pipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, filter: impl Filter + 'static) -> Self {
        self.push(filter);
        self
    }

    pub fn push(&mut self, filter: impl Filter + 'static) {
        self.filters.push(Box::new(filter));
    }

    pub fn filters(&self) -> &[Box<dyn Filter>] {
        &self.filters
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// See [`apply_filters`].
    pub fn run(&self, image: &mut Image) {
        apply_filters(&self.filters, image);
    }

    /// See [`apply_filters_with`].
    pub fn run_with<F>(&self, image: &mut Image, on_filter: F)
    where
        F: FnMut(FilterKind, &dyn Filter),
    {
        apply_filters_with(&self.filters, image, on_filter);
    }
}

impl From<Vec<Box<dyn Filter>>> for Pipeline {
    fn from(filters: Vec<Box<dyn Filter>>) -> Self {
        Self { filters }
    }
}

impl FromIterator<Box<dyn Filter>> for Pipeline {
    fn from_iter<I: IntoIterator<Item = Box<dyn Filter>>>(iter: I) -> Self {
        Self {
            filters: iter.into_iter().collect(),
        }
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.filters.iter().map(|filter| filter.describe()))
            .finish()
    }
}
