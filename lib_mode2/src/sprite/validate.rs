use log::error;

use super::frame::CellPosition;
use super::options::Bpp;
use super::EncodeError;

/// Checks a cell's bpp against the declared one. A fully transparent cell
/// has 0bpp and fails any declared value.
pub fn check_bpp(declared: Bpp, actual: u8, position: CellPosition) -> Result<(), EncodeError> {
    let Some(expected) = declared.expected() else {
        return Ok(());
    };
    if actual == expected {
        return Ok(());
    }

    error!(
        "Expected the sprite at {} to have {}bpp (actually has {})",
        position, expected, actual
    );
    Err(EncodeError::UnexpectedBpp {
        position,
        expected,
        actual,
    })
}
