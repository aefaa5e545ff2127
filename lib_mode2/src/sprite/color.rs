use super::resolve::ColorTriple;
use crate::constants::{COLOR_INDEX_MASK, SECOND_SPRITE_FLAG};

/// Color byte of a scanline no sprite draws on.
pub const DEFAULT_COLOR_BYTE: u8 = 0x00;

pub fn color_byte(color: u8, second_sprite: bool) -> u8 {
    let flag = if second_sprite { SECOND_SPRITE_FLAG } else { 0 };
    flag | (color & COLOR_INDEX_MASK)
}

/// Color bytes of the first and (when present) second sprite for one row.
/// The second sprite always carries the flag so the display ORs it onto the
/// first.
pub fn row_color_bytes(colors: &ColorTriple) -> (u8, Option<u8>) {
    (
        color_byte(colors.a, false),
        colors.b.map(|b| color_byte(b, true)),
    )
}
