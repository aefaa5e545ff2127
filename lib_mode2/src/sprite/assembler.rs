use log::{debug, error};

use super::bitplane::encode_row;
use super::color::row_color_bytes;
use super::frame::{CellPosition, ObjectGrid};
use super::options::Bpp;
use super::resolve::resolve;
use super::scanline::classify;
use super::set::{SpriteSet, SpriteUnit};
use super::validate::check_bpp;
use super::EncodeError;
use crate::constants::CELL_SIZE;
use crate::image::format::IndexedImage;

/// The one or two sprites built for a single cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellSprites {
    pub first: SpriteUnit,
    pub second: SpriteUnit,
    pub uses_first: bool,
    pub uses_second: bool,
    pub bpp: u8,
}

impl CellSprites {
    pub fn units(&self) -> impl Iterator<Item = &SpriteUnit> {
        [
            (self.uses_first, &self.first),
            (self.uses_second, &self.second),
        ]
        .into_iter()
        .filter_map(|(used, unit)| used.then_some(unit))
    }

    pub fn unit_count(&self) -> usize {
        self.uses_first as usize + self.uses_second as usize
    }
}

/// Encodes the 16 scanlines of the cell at `position`.
pub fn assemble_cell(
    image: &IndexedImage,
    position: CellPosition,
) -> Result<CellSprites, EncodeError> {
    let transparent = image.transparent_index();
    let mut cell = CellSprites::default();

    for line in 0..CELL_SIZE {
        let row = image.row_slice(position.pixel_x, position.pixel_y + line, CELL_SIZE);

        let colors = classify(row, transparent).map_err(|source| {
            error!("Too many colors on {} line {}: {}", position, line, source);
            EncodeError::TooManyColors {
                position,
                line,
                source,
            }
        })?;
        let Some(triple) = resolve(&colors).map_err(|source| {
            error!("Invalid color combination on {} line {}", position, line);
            EncodeError::InvalidColorCombination {
                position,
                line,
                source,
            }
        })?
        else {
            continue;
        };
        cell.bpp = cell.bpp.max(colors.bpp());

        let masks = encode_row(row, &triple);
        let (first_color, second_color) = row_color_bytes(&triple);

        cell.first.set_row(line, masks.a_bytes(), first_color);
        cell.uses_first = true;
        if let Some(color) = second_color {
            cell.second.set_row(line, masks.b_bytes(), color);
            cell.uses_second = true;
        }
    }

    Ok(cell)
}

/// Appends the used sprites of `cell` to `set`. Either all of them fit or
/// nothing is written.
pub fn commit_cell(
    set: &mut SpriteSet,
    cell: &CellSprites,
    position: CellPosition,
) -> Result<(), EncodeError> {
    let needed = cell.unit_count();
    if needed > set.remaining() {
        error!(
            "{} needs {} sprites but only {} of {} are left",
            position,
            needed,
            set.remaining(),
            set.capacity()
        );
        return Err(EncodeError::CapacityExceeded {
            position,
            capacity: set.capacity(),
        });
    }

    for unit in cell.units() {
        let index = set.push(unit).ok_or(EncodeError::CapacityExceeded {
            position,
            capacity: set.capacity(),
        })?;
        debug!("{} -> sprite {}", position, index);
    }
    Ok(())
}

/// Encodes every cell of one object into `set`, checking each cell against
/// the declared bpp, and returns the highest bpp among the cells.
pub fn assemble_object(
    image: &IndexedImage,
    grid: &ObjectGrid,
    object_x: usize,
    object_y: usize,
    declared: Bpp,
    set: &mut SpriteSet,
) -> Result<u8, EncodeError> {
    let mut bpp = 0;
    for position in grid.cells(object_x, object_y) {
        let cell = assemble_cell(image, position)?;
        check_bpp(declared, cell.bpp, position)?;
        commit_cell(set, &cell, position)?;
        bpp = bpp.max(cell.bpp);
    }
    Ok(bpp)
}
