use std::fmt;

use super::EncodeError;

/// How many adjacent cells make up one animation object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubGrid {
    columns: usize,
    lines: usize,
}

impl SubGrid {
    pub const SINGLE: SubGrid = SubGrid {
        columns: 1,
        lines: 1,
    };

    pub fn new(columns: u8, lines: u8) -> Result<Self, EncodeError> {
        if !matches!(columns, 1 | 2) || !matches!(lines, 1 | 2) {
            return Err(EncodeError::InvalidSubGrid { columns, lines });
        }
        Ok(Self {
            columns: columns as usize,
            lines: lines as usize,
        })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn lines(&self) -> usize {
        self.lines
    }
}

impl Default for SubGrid {
    fn default() -> Self {
        Self::SINGLE
    }
}

impl fmt::Display for SubGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.columns, self.lines)
    }
}

/// Bits per pixel every object is expected to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Bpp {
    /// Accept whatever each object needs.
    #[default]
    Auto,
    One,
    Two,
}

impl Bpp {
    pub fn expected(self) -> Option<u8> {
        match self {
            Bpp::Auto => None,
            Bpp::One => Some(1),
            Bpp::Two => Some(2),
        }
    }
}

impl TryFrom<u8> for Bpp {
    type Error = EncodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Bpp::Auto),
            1 => Ok(Bpp::One),
            2 => Ok(Bpp::Two),
            other => Err(EncodeError::InvalidBpp(other)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EncodeOptions {
    pub sub_grid: SubGrid,
    pub bpp: Bpp,
}

impl EncodeOptions {
    pub fn new(columns: u8, lines: u8, bpp: u8) -> Result<Self, EncodeError> {
        Ok(Self {
            sub_grid: SubGrid::new(columns, lines)?,
            bpp: Bpp::try_from(bpp)?,
        })
    }
}
