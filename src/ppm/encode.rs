//! P3 encoder.

use alloc::format;
use alloc::vec::Vec;

use crate::image::Image;
use crate::pixel::Pixel;

pub(crate) fn header(image: &Image) -> Vec<u8> {
    format!("P3\n{} {}\n255\n", image.width(), image.height()).into_bytes()
}

/// Append one row as `"r g b "` per pixel followed by a newline.
pub(crate) fn push_row(out: &mut Vec<u8>, row: &[Pixel]) {
    for p in row {
        for c in [p.r, p.g, p.b] {
            push_decimal(out, c);
            out.push(b' ');
        }
    }
    out.push(b'\n');
}

fn push_decimal(out: &mut Vec<u8>, v: u8) {
    if v >= 100 {
        out.push(b'0' + v / 100);
    }
    if v >= 10 {
        out.push(b'0' + v / 10 % 10);
    }
    out.push(b'0' + v % 10);
}

/// Encode an image to P3 text.
pub(crate) fn encode_p3(image: &Image) -> Vec<u8> {
    let mut out = header(image);
    // Worst case "255 255 255 " per pixel plus one newline per row.
    out.reserve(image.pixels().len() * 12 + image.height());
    if image.width() == 0 {
        // Rows of a zero-width image are still written, empty.
        out.extend(core::iter::repeat_n(b'\n', image.height()));
        return out;
    }
    for row in image.rows() {
        push_row(&mut out, row);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn layout_matches_reference() {
        let img = Image::from_pixels(
            2,
            2,
            vec![
                Pixel::new(255, 0, 7),
                Pixel::new(10, 99, 100),
                Pixel::BLACK,
                Pixel::WHITE,
            ],
        )
        .unwrap();
        let text = encode_p3(&img);
        assert_eq!(
            core::str::from_utf8(&text).unwrap(),
            "P3\n2 2\n255\n255 0 7 10 99 100 \n0 0 0 255 255 255 \n"
        );
    }

    #[test]
    fn empty_image_is_header_only() {
        let text = encode_p3(&Image::default());
        assert_eq!(text, b"P3\n0 0\n255\n");
    }

    #[test]
    fn decimal_digits() {
        let mut out = Vec::new();
        for v in [0, 9, 10, 99, 100, 255] {
            push_decimal(&mut out, v);
            out.push(b',');
        }
        assert_eq!(out, b"0,9,10,99,100,255,");
    }
}
