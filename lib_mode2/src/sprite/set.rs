use super::color::DEFAULT_COLOR_BYTE;
use crate::constants::{CELL_SIZE, COLOR_BYTES, MAX_SPRITES, PATTERN_BYTES};

/// One hardware sprite: a 16x16 pattern and a color byte per scanline.
///
/// The pattern holds the left 8 pixel column for scanlines 0..16 followed by
/// the right column for the same scanlines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteUnit {
    pub pattern: [u8; PATTERN_BYTES],
    pub colors: [u8; COLOR_BYTES],
}

impl Default for SpriteUnit {
    fn default() -> Self {
        Self {
            pattern: [0; PATTERN_BYTES],
            colors: [DEFAULT_COLOR_BYTE; COLOR_BYTES],
        }
    }
}

impl SpriteUnit {
    pub fn set_row(&mut self, line: usize, mask: [u8; 2], color: u8) {
        self.pattern[line] = mask[0];
        self.pattern[line + CELL_SIZE] = mask[1];
        self.colors[line] = color;
    }

    pub fn row_mask(&self, line: usize) -> u16 {
        u16::from_be_bytes([self.pattern[line], self.pattern[line + CELL_SIZE]])
    }
}

/// Borrowed view of one committed sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitView<'a> {
    pub pattern: &'a [u8],
    pub colors: &'a [u8],
}

/// Fixed capacity store of encoded sprites, laid out exactly as the pattern
/// and color tables are loaded into video memory.
pub struct SpriteSet {
    patterns: Box<[u8]>,
    colors: Box<[u8]>,
    len: usize,
}

impl SpriteSet {
    pub fn new() -> Self {
        Self {
            patterns: vec![0; MAX_SPRITES * PATTERN_BYTES].into_boxed_slice(),
            colors: vec![DEFAULT_COLOR_BYTE; MAX_SPRITES * COLOR_BYTES].into_boxed_slice(),
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        MAX_SPRITES
    }

    pub fn remaining(&self) -> usize {
        MAX_SPRITES - self.len
    }

    /// Copies `unit` into the next free slot and returns its index, or
    /// `None` when the set is full.
    pub fn push(&mut self, unit: &SpriteUnit) -> Option<usize> {
        if self.len == MAX_SPRITES {
            return None;
        }
        let index = self.len;
        self.patterns[index * PATTERN_BYTES..(index + 1) * PATTERN_BYTES]
            .copy_from_slice(&unit.pattern);
        self.colors[index * COLOR_BYTES..(index + 1) * COLOR_BYTES].copy_from_slice(&unit.colors);
        self.len += 1;
        Some(index)
    }

    /// Pattern table: 32 bytes per sprite, in sprite order.
    pub fn patterns(&self) -> &[u8] {
        &self.patterns[..self.len * PATTERN_BYTES]
    }

    /// Color table: 16 bytes per sprite, in sprite order.
    pub fn colors(&self) -> &[u8] {
        &self.colors[..self.len * COLOR_BYTES]
    }

    pub fn unit(&self, index: usize) -> Option<UnitView<'_>> {
        if index >= self.len {
            return None;
        }
        Some(UnitView {
            pattern: &self.patterns[index * PATTERN_BYTES..(index + 1) * PATTERN_BYTES],
            colors: &self.colors[index * COLOR_BYTES..(index + 1) * COLOR_BYTES],
        })
    }

    pub fn units(&self) -> impl Iterator<Item = UnitView<'_>> + '_ {
        (0..self.len).filter_map(move |i| self.unit(i))
    }
}

impl Default for SpriteSet {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SpriteSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpriteSet").field("len", &self.len).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set() {
        let set = SpriteSet::new();
        assert!(set.is_empty());
        assert!(set.patterns().is_empty());
        assert!(set.colors().is_empty());
        assert_eq!(set.remaining(), 1024);
        assert!(set.unit(0).is_none());
    }

    #[test]
    fn test_unit_rows() {
        let mut unit = SpriteUnit::default();
        unit.set_row(3, [0xF0, 0x0F], 0x47);
        assert_eq!(unit.pattern[3], 0xF0);
        assert_eq!(unit.pattern[19], 0x0F);
        assert_eq!(unit.colors[3], 0x47);
        assert_eq!(unit.row_mask(3), 0xF00F);
        assert_eq!(unit.row_mask(4), 0);
    }

    #[test]
    fn test_push_layout() {
        let mut set = SpriteSet::new();
        let mut first = SpriteUnit::default();
        first.set_row(0, [0xAA, 0x55], 1);
        let mut second = SpriteUnit::default();
        second.set_row(15, [0x01, 0x80], 0x42);

        assert_eq!(set.push(&first), Some(0));
        assert_eq!(set.push(&second), Some(1));

        assert_eq!(set.patterns().len(), 64);
        assert_eq!(set.colors().len(), 32);
        assert_eq!(set.patterns()[0], 0xAA);
        assert_eq!(set.patterns()[16], 0x55);
        assert_eq!(set.patterns()[32 + 15], 0x01);
        assert_eq!(set.patterns()[32 + 31], 0x80);
        assert_eq!(set.colors()[0], 1);
        assert_eq!(set.colors()[16 + 15], 0x42);

        let view = set.unit(1).unwrap();
        assert_eq!(view.pattern, &second.pattern[..]);
        assert_eq!(view.colors, &second.colors[..]);
        assert_eq!(set.units().count(), 2);
    }

    #[test]
    fn test_push_full() {
        let mut set = SpriteSet::new();
        let unit = SpriteUnit::default();
        for i in 0..MAX_SPRITES {
            assert_eq!(set.push(&unit), Some(i));
        }
        assert_eq!(set.remaining(), 0);
        assert_eq!(set.push(&unit), None);
        assert_eq!(set.len(), MAX_SPRITES);
    }
}
