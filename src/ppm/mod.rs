//! Plain PPM (P3): ASCII magic, dimensions, maxval 255, decimal RGB triples.
//!
//! Only the header may carry `#` comments, and only between the magic token
//! and the dimensions. Channel values outside 0..=255 are narrowed to 8 bits
//! by truncation rather than rejected.

mod decode;
mod encode;

use alloc::vec::Vec;

use crate::error::PpmError;
use crate::image::Image;
use crate::info::ImageInfo;
use crate::limits::Limits;

#[cfg(feature = "std")]
use std::{
    fs::File,
    io::{BufWriter, Read, Write},
    path::Path,
};

/// Probe header for ImageInfo without decoding.
pub(crate) fn probe_header(data: &[u8]) -> Result<ImageInfo, PpmError> {
    let header = decode::parse_header(&mut decode::Tokens::new(data))?;
    Ok(ImageInfo {
        width: header.width,
        height: header.height,
    })
}

/// Decode P3 data (called from DecodeRequest).
pub(crate) fn decode(data: &[u8], limits: Option<&Limits>) -> Result<Image, PpmError> {
    decode::decode_p3(data, limits)
}

/// Encode to P3 text.
pub fn encode(image: &Image) -> Vec<u8> {
    encode::encode_p3(image)
}

/// Read a whole stream into memory and decode it.
#[cfg(feature = "std")]
pub(crate) fn read(mut reader: impl Read, limits: Option<&Limits>) -> Result<Image, PpmError> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    decode(&data, limits)
}

/// Write P3 text row by row.
#[cfg(feature = "std")]
pub(crate) fn write(image: &Image, mut writer: impl Write) -> Result<(), PpmError> {
    writer.write_all(&encode::header(image))?;
    let mut line = Vec::with_capacity(image.width() * 12 + 1);
    for row in image.rows() {
        line.clear();
        encode::push_row(&mut line, row);
        writer.write_all(&line)?;
    }
    if image.width() == 0 {
        for _ in 0..image.height() {
            writer.write_all(b"\n")?;
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
pub(crate) fn load(path: &Path, limits: Option<&Limits>) -> Result<Image, PpmError> {
    let file = File::open(path).map_err(|source| PpmError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read(file, limits)
}

#[cfg(feature = "std")]
pub(crate) fn save(image: &Image, path: &Path) -> Result<(), PpmError> {
    let file = File::create(path).map_err(|source| PpmError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    write(image, &mut writer)?;
    writer.flush()?;
    Ok(())
}

impl Image {
    /// Decode a P3 image held in memory.
    pub fn decode(data: &[u8]) -> Result<Image, PpmError> {
        decode(data, None)
    }

    /// Encode as P3 text.
    pub fn encode(&self) -> Vec<u8> {
        encode(self)
    }

    /// Read a P3 image from a stream. The whole stream is buffered first.
    #[cfg(feature = "std")]
    pub fn read_from(reader: impl Read) -> Result<Image, PpmError> {
        read(reader, None)
    }

    /// Write P3 text to a stream.
    #[cfg(feature = "std")]
    pub fn write_to(&self, writer: impl Write) -> Result<(), PpmError> {
        write(self, writer)
    }

    /// Load a P3 file.
    #[cfg(feature = "std")]
    pub fn load(path: impl AsRef<Path>) -> Result<Image, PpmError> {
        load(path.as_ref(), None)
    }

    /// Load a P3 file, rejecting it if the header exceeds `limits`.
    #[cfg(feature = "std")]
    pub fn load_with_limits(path: impl AsRef<Path>, limits: &Limits) -> Result<Image, PpmError> {
        load(path.as_ref(), Some(limits))
    }

    /// Save as a P3 file, replacing any existing file.
    ///
    /// A failure partway through may leave a truncated file behind.
    #[cfg(feature = "std")]
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PpmError> {
        save(self, path.as_ref())
    }
}
