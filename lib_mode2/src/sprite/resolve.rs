use thiserror::Error;

use super::scanline::ScanlineColors;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveError {
    #[error("invalid color combination {0:?}: no two colors OR into the third")]
    InvalidColorCombination([u8; 3]),
}

/// Colors assigned to the two sprites of a row.
///
/// `a` is drawn by the first sprite and `b` by the second. `merged` is the
/// color the display produces where both sprites overlap, `a | b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTriple {
    pub a: u8,
    pub b: Option<u8>,
    pub merged: Option<u8>,
}

impl ColorTriple {
    pub fn single(a: u8) -> Self {
        Self {
            a,
            b: None,
            merged: None,
        }
    }

    pub fn pair(a: u8, b: u8) -> Self {
        Self {
            a,
            b: Some(b),
            merged: None,
        }
    }

    pub fn overlapped(a: u8, b: u8) -> Self {
        Self {
            a,
            b: Some(b),
            merged: Some(a | b),
        }
    }

    pub fn uses_second(&self) -> bool {
        self.b.is_some()
    }
}

fn merges_into(low1: u8, low2: u8, high: u8) -> bool {
    low1 | low2 == high && low1 < high && low2 < high
}

/// Splits a row's colors between the two sprites. `None` means the row is
/// fully transparent.
pub fn resolve(colors: &ScanlineColors) -> Result<Option<ColorTriple>, ResolveError> {
    if colors.is_empty() {
        return Ok(None);
    }
    let triple = match *colors.as_slice() {
        [c0] => ColorTriple::single(c0),
        [c0, c1] => ColorTriple::pair(c0, c1),
        [c0, c1, c2] => {
            if merges_into(c0, c1, c2) {
                ColorTriple::overlapped(c0, c1)
            } else if merges_into(c0, c2, c1) {
                ColorTriple::overlapped(c0, c2)
            } else if merges_into(c1, c2, c0) {
                ColorTriple::overlapped(c1, c2)
            } else {
                return Err(ResolveError::InvalidColorCombination([c0, c1, c2]));
            }
        }
        _ => unreachable!("non-empty scanline colors hold at most three entries"),
    };
    Ok(Some(triple))
}
