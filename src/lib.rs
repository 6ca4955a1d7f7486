//! # zenppm
//!
//! Plain PPM (P3) image codec with a per-pixel filter pipeline.
//!
//! ## Features
//!
//! - Decode and encode ASCII PPM (`P3`, maxval 255), from memory, streams,
//!   or files
//! - Bounds-checked pixel access on a row-major RGB buffer
//! - Stateless per-pixel filters ([`Grayscale`], [`Invert`], or your own
//!   [`Filter`]) composed into an ordered [`Pipeline`]
//! - Saturating overlay of two images ([`Image::combine`], or `&a + &b`)
//!
//! ## Non-Goals
//!
//! - Binary PNM (P6 and friends)
//! - Comments anywhere but between the magic and the dimensions
//! - Streaming decode: the whole source is held in memory
//!
//! ## Usage
//!
//! ```no_run
//! use zenppm::{Grayscale, Image, Invert, Pipeline};
//!
//! let mut image = Image::load("test.ppm")?;
//! let pipeline = Pipeline::new().with(Grayscale).with(Invert);
//! pipeline.run(&mut image);
//! image.save("result.ppm")?;
//!
//! let original = Image::load("test.ppm")?;
//! (&image + &original).save("combined.ppm")?;
//! # Ok::<(), zenppm::PpmError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod error;
mod filter;
mod image;
mod info;
mod limits;
mod pixel;

pub mod pipeline;
pub mod ppm;

mod decode;

// Re-exports
pub use decode::DecodeRequest;
pub use error::{ErrorKind, FormatError, PpmError};
pub use filter::{Filter, FilterKind, Grayscale, Invert};
pub use image::Image;
pub use info::ImageInfo;
pub use limits::Limits;
pub use pipeline::{Pipeline, apply_filters, apply_filters_with};
pub use pixel::Pixel;
