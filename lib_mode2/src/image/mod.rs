pub mod decoder;
pub mod format;

pub use decoder::{decode, open, DecodeError};
