use std::fmt;

use log::{debug, error};

use super::options::SubGrid;
use super::EncodeError;
use crate::constants::CELL_SIZE;

/// Where a 16x16 cell sits, both in the object grid and in the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPosition {
    pub object_x: usize,
    pub object_y: usize,
    pub cell_x: usize,
    pub cell_y: usize,
    /// Top left pixel of the cell.
    pub pixel_x: usize,
    pub pixel_y: usize,
}

impl fmt::Display for CellPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "object ({}, {}) cell ({}, {}) at pixel ({}, {})",
            self.object_x, self.object_y, self.cell_x, self.cell_y, self.pixel_x, self.pixel_y
        )
    }
}

/// The image seen as a grid of objects, each made of `sub_grid` cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectGrid {
    pub columns: usize,
    pub rows: usize,
    sub_grid: SubGrid,
}

impl ObjectGrid {
    pub fn new(width: u32, height: u32, sub_grid: SubGrid) -> Result<Self, EncodeError> {
        let (width, height) = (width as usize, height as usize);
        if width % CELL_SIZE != 0 || height % CELL_SIZE != 0 {
            error!("Image dimensions {}x{} are not multiples of 16", width, height);
            return Err(EncodeError::DimensionNotMultipleOf16 { width, height });
        }

        let cells_x = width / CELL_SIZE;
        let cells_y = height / CELL_SIZE;
        if cells_x % sub_grid.columns() != 0 || cells_y % sub_grid.lines() != 0 {
            error!(
                "{}x{} cells can't be split into {} objects",
                cells_x, cells_y, sub_grid
            );
            return Err(EncodeError::GridMismatch {
                cells_x,
                cells_y,
                sub_grid,
            });
        }

        let grid = Self {
            columns: cells_x / sub_grid.columns(),
            rows: cells_y / sub_grid.lines(),
            sub_grid,
        };
        debug!(
            "Object grid: {}x{} objects of {} cells",
            grid.columns, grid.rows, sub_grid
        );
        Ok(grid)
    }

    pub fn object_count(&self) -> usize {
        self.columns * self.rows
    }

    /// Objects left to right, top to bottom.
    pub fn objects(&self) -> impl Iterator<Item = (usize, usize)> {
        let columns = self.columns;
        (0..self.rows).flat_map(move |y| (0..columns).map(move |x| (x, y)))
    }

    /// Cells of one object, line by line.
    pub fn cells(&self, object_x: usize, object_y: usize) -> impl Iterator<Item = CellPosition> {
        let columns = self.sub_grid.columns();
        let lines = self.sub_grid.lines();
        (0..lines).flat_map(move |cell_y| {
            (0..columns).map(move |cell_x| CellPosition {
                object_x,
                object_y,
                cell_x,
                cell_y,
                pixel_x: (object_x * columns + cell_x) * CELL_SIZE,
                pixel_y: (object_y * lines + cell_y) * CELL_SIZE,
            })
        })
    }
}
