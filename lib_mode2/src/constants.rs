/// Width and height of one hardware sprite cell, in pixels.
pub const CELL_SIZE: usize = 16;

pub const PATTERN_BYTES: usize = 32;
pub const COLOR_BYTES: usize = 16;

/// Sprite slots available in one sprite set.
pub const MAX_SPRITES: usize = 1024;

/// Color byte bit telling the display to OR this sprite with the one below it.
pub const SECOND_SPRITE_FLAG: u8 = 0x40;
pub const COLOR_INDEX_MASK: u8 = 0x0F;

/// Palette size that moves the transparent index from 0 to 16.
pub const EXTENDED_PALETTE_SIZE: usize = 17;
pub const EXTENDED_TRANSPARENT_INDEX: u8 = 16;
pub const DEFAULT_TRANSPARENT_INDEX: u8 = 0;
