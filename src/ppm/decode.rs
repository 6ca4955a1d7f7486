//! P3 decoder: whitespace-delimited ASCII tokens.

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::{FormatError, PpmError};
use crate::image::{Image, pixel_count};
use crate::limits::Limits;
use crate::pixel::Pixel;

/// Smallest encoding of one pixel plus separators: `"0 0 0 "`.
const MIN_BYTES_PER_PIXEL: usize = 6;

/// Parsed P3 header (internal).
#[derive(Clone, Copy, Debug)]
pub(crate) struct P3Header {
    pub width: usize,
    pub height: usize,
}

/// Byte cursor over a P3 source.
pub(crate) struct Tokens<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Tokens<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(is_space) {
            self.pos += 1;
        }
    }

    /// Skip whitespace and any `#` lines that follow it.
    fn skip_comments(&mut self) {
        loop {
            self.skip_whitespace();
            if self.peek() != Some(b'#') {
                return;
            }
            while let Some(c) = self.peek() {
                self.pos += 1;
                if c == b'\n' {
                    break;
                }
            }
        }
    }

    fn next_token(&mut self) -> Option<&'a [u8]> {
        self.skip_whitespace();
        let start = self.pos;
        while self.peek().is_some_and(|c| !is_space(c)) {
            self.pos += 1;
        }
        if self.pos == start {
            return None;
        }
        let data: &'a [u8] = self.data;
        Some(&data[start..self.pos])
    }

    fn next_number<T: core::str::FromStr>(&mut self) -> Option<T> {
        let token = self.next_token()?;
        core::str::from_utf8(token).ok()?.parse().ok()
    }

    /// One channel value, narrowed to 8 bits by truncation.
    fn next_channel(&mut self) -> Option<u8> {
        self.next_number::<i32>().map(|v| v as u8)
    }
}

/// Space, tab, LF, VT, FF, CR.
fn is_space(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

/// Parse the header, leaving `tokens` positioned at the first pixel.
pub(crate) fn parse_header(tokens: &mut Tokens<'_>) -> Result<P3Header, PpmError> {
    let magic = tokens.next_token().unwrap_or_default();
    if magic != b"P3" {
        return Err(FormatError::UnsupportedMagic(String::from_utf8_lossy(magic).into_owned()).into());
    }

    tokens.skip_comments();

    let width: usize = tokens.next_number().unwrap_or(0);
    let height: usize = tokens.next_number().unwrap_or(0);
    if width == 0 || height == 0 {
        return Err(FormatError::InvalidDimensions.into());
    }

    if tokens.next_number::<u32>() != Some(255) {
        return Err(FormatError::UnsupportedBitDepth.into());
    }

    Ok(P3Header { width, height })
}

/// Decode a complete P3 image from memory.
pub(crate) fn decode_p3(data: &[u8], limits: Option<&Limits>) -> Result<Image, PpmError> {
    let mut tokens = Tokens::new(data);
    let header = parse_header(&mut tokens)?;
    let count = pixel_count(header.width, header.height)?;

    if let Some(limits) = limits {
        limits.check(header.width, header.height)?;
        let bytes = count
            .checked_mul(core::mem::size_of::<Pixel>())
            .ok_or(PpmError::DimensionsTooLarge {
                width: header.width,
                height: header.height,
            })?;
        limits.check_memory(bytes)?;
    }

    // A lying header must not force a huge allocation up front.
    let capacity = count.min(tokens.remaining() / MIN_BYTES_PER_PIXEL + 1);
    let mut pixels = Vec::with_capacity(capacity);
    for index in 0..count {
        let pixel = read_pixel(&mut tokens).ok_or(FormatError::PixelRead { index })?;
        pixels.push(pixel);
    }

    Image::from_pixels(header.width, header.height, pixels)
}

fn read_pixel(tokens: &mut Tokens<'_>) -> Option<Pixel> {
    let r = tokens.next_channel()?;
    let g = tokens.next_channel()?;
    let b = tokens.next_channel()?;
    Some(Pixel::new(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format_error(data: &[u8]) -> FormatError {
        match decode_p3(data, None) {
            Err(PpmError::Format(e)) => e,
            other => panic!("expected format error, got {other:?}"),
        }
    }

    #[test]
    fn decodes_minimal() {
        let img = decode_p3(b"P3\n2 1\n255\n1 2 3 4 5 6\n", None).unwrap();
        assert_eq!((img.width(), img.height()), (2, 1));
        assert_eq!(img.pixels(), &[Pixel::new(1, 2, 3), Pixel::new(4, 5, 6)]);
    }

    #[test]
    fn whitespace_is_insignificant() {
        let img = decode_p3(b"  P3 \t1\r\n1 255 7\n\n8\t9", None).unwrap();
        assert_eq!(img.pixels(), &[Pixel::new(7, 8, 9)]);
    }

    #[test]
    fn skips_comments_before_dimensions() {
        let data = b"P3\n# made by hand\n  # another one\n1 1\n255\n10 20 30\n";
        let img = decode_p3(data, None).unwrap();
        assert_eq!(img.pixels(), &[Pixel::new(10, 20, 30)]);
    }

    #[test]
    fn comment_at_end_of_input() {
        assert_eq!(format_error(b"P3\n# nothing else"), FormatError::InvalidDimensions);
    }

    #[test]
    fn rejects_other_magic() {
        assert_eq!(
            format_error(b"P6\n1 1\n255\n\x00\x00\x00"),
            FormatError::UnsupportedMagic("P6".into())
        );
        assert_eq!(format_error(b""), FormatError::UnsupportedMagic(String::new()));
    }

    #[test]
    fn rejects_zero_dimension() {
        assert_eq!(format_error(b"P3\n0 5\n255\n"), FormatError::InvalidDimensions);
        assert_eq!(format_error(b"P3\n5 0\n255\n"), FormatError::InvalidDimensions);
        assert_eq!(format_error(b"P3\nwide 5\n255\n"), FormatError::InvalidDimensions);
        assert_eq!(format_error(b"P3\n-1 5\n255\n"), FormatError::InvalidDimensions);
    }

    #[test]
    fn rejects_other_maxval() {
        assert_eq!(format_error(b"P3\n1 1\n65535\n0 0 0"), FormatError::UnsupportedBitDepth);
        assert_eq!(format_error(b"P3\n1 1\n15\n0 0 0"), FormatError::UnsupportedBitDepth);
        assert_eq!(format_error(b"P3\n1 1\n"), FormatError::UnsupportedBitDepth);
    }

    #[test]
    fn truncated_pixels_fail() {
        assert_eq!(
            format_error(b"P3\n2 1\n255\n1 2 3 4 5"),
            FormatError::PixelRead { index: 1 }
        );
    }

    #[test]
    fn malformed_pixel_token_fails() {
        assert_eq!(
            format_error(b"P3\n1 1\n255\n1 x 3"),
            FormatError::PixelRead { index: 0 }
        );
    }

    #[test]
    fn out_of_range_channels_truncate() {
        let img = decode_p3(b"P3\n1 1\n255\n256 -1 300\n", None).unwrap();
        assert_eq!(img.pixels(), &[Pixel::new(0, 255, 44)]);
    }

    #[test]
    fn trailing_data_ignored() {
        let img = decode_p3(b"P3\n1 1\n255\n1 2 3 garbage", None).unwrap();
        assert_eq!(img.pixels(), &[Pixel::new(1, 2, 3)]);
    }

    #[test]
    fn huge_header_without_data_fails_cleanly() {
        assert_eq!(
            format_error(b"P3\n100000 100000\n255\n"),
            FormatError::PixelRead { index: 0 }
        );
    }

    #[test]
    fn limits_checked_before_pixels() {
        let limits = Limits {
            max_pixels: Some(1),
            ..Default::default()
        };
        let err = decode_p3(b"P3\n2 1\n255\n", Some(&limits)).unwrap_err();
        assert!(matches!(err, PpmError::LimitExceeded(_)));
    }
}
