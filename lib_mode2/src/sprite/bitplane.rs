use super::resolve::ColorTriple;
use crate::constants::CELL_SIZE;

/// Pixel membership of one 16 pixel row for both sprites.
///
/// The leftmost pixel is the most significant bit, so `to_be_bytes` yields
/// the left and right pattern bytes in the order the display reads them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowMasks {
    pub a: u16,
    pub b: u16,
}

impl RowMasks {
    pub fn pixel_bit(x: usize) -> u16 {
        0x8000 >> x
    }

    pub fn a_bytes(&self) -> [u8; 2] {
        self.a.to_be_bytes()
    }

    pub fn b_bytes(&self) -> [u8; 2] {
        self.b.to_be_bytes()
    }
}

/// Builds the sprite A and sprite B masks for `row`. Pixels in the merged
/// color belong to both sprites.
pub fn encode_row(row: &[u8], colors: &ColorTriple) -> RowMasks {
    let mut masks = RowMasks::default();

    for (x, &pixel) in row.iter().take(CELL_SIZE).enumerate() {
        let merged = colors.merged == Some(pixel);
        let bit = RowMasks::pixel_bit(x);

        if pixel == colors.a || merged {
            masks.a |= bit;
        }
        if colors.b == Some(pixel) || merged {
            masks.b |= bit;
        }
    }

    masks
}

/// Opaque pixels of `row` as a mask, same bit order as [`RowMasks`].
pub fn opacity_mask(row: &[u8], transparent: u8) -> u16 {
    row.iter()
        .take(CELL_SIZE)
        .enumerate()
        .filter(|&(_, &p)| p != transparent)
        .fold(0, |mask, (x, _)| mask | RowMasks::pixel_bit(x))
}
