pub mod assembler;
pub mod bitplane;
pub mod color;
pub mod frame;
pub mod options;
pub mod resolve;
pub mod scanline;
pub mod set;
pub mod validate;

use log::{debug, error, info};
use thiserror::Error;

use crate::image::format::IndexedImage;
use frame::{CellPosition, ObjectGrid};
use resolve::ResolveError;
use scanline::ScanlineError;

pub use options::{Bpp, EncodeOptions, SubGrid};
pub use set::{SpriteSet, SpriteUnit, UnitView};

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("Mode 2 sprites support only 1 or 2 columns and lines, got {columns}x{lines}")]
    InvalidSubGrid { columns: u8, lines: u8 },
    #[error("Mode 2 sprites support only 1 or 2 bpp (0 for auto), got {0}")]
    InvalidBpp(u8),
    #[error("Image dimensions {width}x{height} are not multiples of 16")]
    DimensionNotMultipleOf16 { width: usize, height: usize },
    #[error("{cells_x}x{cells_y} cells are not compatible with {sub_grid} sprites")]
    GridMismatch {
        cells_x: usize,
        cells_y: usize,
        sub_grid: SubGrid,
    },
    #[error("Too many colors on {position}, line {line}")]
    TooManyColors {
        position: CellPosition,
        line: usize,
        source: ScanlineError,
    },
    #[error("Invalid color combination on {position}, line {line}")]
    InvalidColorCombination {
        position: CellPosition,
        line: usize,
        source: ResolveError,
    },
    #[error("Expected the sprite at {position} to have {expected}bpp (actually has {actual})")]
    UnexpectedBpp {
        position: CellPosition,
        expected: u8,
        actual: u8,
    },
    #[error("Sprite capacity of {capacity} exceeded at {position}")]
    CapacityExceeded {
        position: CellPosition,
        capacity: usize,
    },
    #[error("Image has no sprites")]
    EmptyResult,
}

/// Converts `image` into Mode 2 sprite patterns and colors.
///
/// Objects are read left to right, top to bottom, and each cell adds one
/// sprite, or two when any of its lines needs a second color.
pub fn encode(image: &IndexedImage, options: &EncodeOptions) -> Result<SpriteSet, EncodeError> {
    info!(
        "Encoding {}x{} image as {} objects, bpp {:?}",
        image.width, image.height, options.sub_grid, options.bpp
    );

    let grid = ObjectGrid::new(image.width, image.height, options.sub_grid)?;
    debug!(
        "Treating image as a spritesheet with {}x{} objects ({} total), transparent index {}",
        grid.columns,
        grid.rows,
        grid.object_count(),
        image.transparent_index()
    );

    let mut set = SpriteSet::new();
    for (object_x, object_y) in grid.objects() {
        let first = set.len();
        let bpp =
            assembler::assemble_object(image, &grid, object_x, object_y, options.bpp, &mut set)?;
        debug!(
            "Object ({}, {}): {} sprites, {}bpp",
            object_x,
            object_y,
            set.len() - first,
            bpp
        );
    }

    if set.is_empty() {
        error!("Image has no sprites");
        return Err(EncodeError::EmptyResult);
    }

    info!("Found {} sprites", set.len());
    Ok(set)
}
