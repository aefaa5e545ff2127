use std::fmt;

use super::decoder::DecodeError;
use crate::constants::{
    DEFAULT_TRANSPARENT_INDEX, EXTENDED_PALETTE_SIZE, EXTENDED_TRANSPARENT_INDEX,
};

/// A decoded palette image: one palette index per pixel, row-major.
#[derive(Debug, Clone)]
pub struct IndexedImage {
    pub width: u32,
    pub height: u32,
    pub palette: Vec<[u8; 4]>,
    pub pixels: Vec<u8>,
}

impl IndexedImage {
    pub const MAX_PALETTE_SIZE: usize = 256;

    pub fn new(
        width: u32,
        height: u32,
        palette: Vec<[u8; 4]>,
        pixels: Vec<u8>,
    ) -> Result<Self, DecodeError> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(DecodeError::PixelCountMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        if palette.len() > Self::MAX_PALETTE_SIZE {
            return Err(DecodeError::PaletteTooLarge(palette.len()));
        }

        Ok(Self {
            width,
            height,
            palette,
            pixels,
        })
    }

    /// Index treated as "no color". A 17 entry palette carries its
    /// transparent slot at the end instead of at 0.
    pub fn transparent_index(&self) -> u8 {
        if self.palette.len() == EXTENDED_PALETTE_SIZE {
            EXTENDED_TRANSPARENT_INDEX
        } else {
            DEFAULT_TRANSPARENT_INDEX
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> u8 {
        self.pixels[y * self.width as usize + x]
    }

    /// `len` indices starting at (x, y), clipped to the row.
    pub fn row_slice(&self, x: usize, y: usize, len: usize) -> &[u8] {
        let start = y * self.width as usize + x;
        let end = start + len.min(self.width as usize - x);
        &self.pixels[start..end]
    }

    pub fn palette_report(&self) -> PaletteReport<'_> {
        PaletteReport(&self.palette)
    }
}

/// One line per palette entry: `index: R: rrr, G: ggg, B: bbb, A: aaa`.
pub struct PaletteReport<'a>(&'a [[u8; 4]]);

impl fmt::Display for PaletteReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, [r, g, b, a]) in self.0.iter().enumerate() {
            writeln!(f, "{}: R: {:03}, G: {:03}, B: {:03}, A: {:03}", i, r, g, b, a)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette(size: usize) -> Vec<[u8; 4]> {
        (0..size).map(|i| [i as u8, 0, 0, 255]).collect()
    }

    #[test]
    fn test_pixel_count_mismatch() {
        let result = IndexedImage::new(16, 16, palette(16), vec![0; 10]);
        assert!(matches!(
            result,
            Err(DecodeError::PixelCountMismatch {
                expected: 256,
                actual: 10
            })
        ));
    }

    #[test]
    fn test_transparent_index() {
        let image = IndexedImage::new(1, 1, palette(16), vec![0]).unwrap();
        assert_eq!(image.transparent_index(), 0);

        let image = IndexedImage::new(1, 1, palette(17), vec![0]).unwrap();
        assert_eq!(image.transparent_index(), 16);

        let image = IndexedImage::new(1, 1, palette(256), vec![0]).unwrap();
        assert_eq!(image.transparent_index(), 0);
    }

    #[test]
    fn test_row_slice() {
        let pixels: Vec<u8> = (0..32).collect();
        let image = IndexedImage::new(16, 2, palette(32), pixels).unwrap();
        assert_eq!(image.row_slice(0, 1, 16), &(16..32).collect::<Vec<u8>>()[..]);
        assert_eq!(image.row_slice(12, 0, 16), &[12, 13, 14, 15]);
        assert_eq!(image.pixel(3, 1), 19);
    }

    #[test]
    fn test_palette_report() {
        let image = IndexedImage::new(1, 1, vec![[0, 0, 0, 0], [255, 128, 7, 255]], vec![0])
            .unwrap();
        assert_eq!(
            image.palette_report().to_string(),
            "0: R: 000, G: 000, B: 000, A: 000\n1: R: 255, G: 128, B: 007, A: 255\n"
        );
    }
}
