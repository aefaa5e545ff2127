pub mod constants;
pub mod image;
pub mod sprite;

use log::*;
use std::io::Write;

pub use crate::image::format::IndexedImage;
pub use crate::image::{decode, open};
pub use crate::sprite::{encode, Bpp, EncodeError, EncodeOptions, SpriteSet, SubGrid};

/// Routes log records from this library and the given `targets` to stderr.
pub fn init_logging(level: LevelFilter, targets: &[&str]) {
    logging_builder(level, targets).init();
}

fn logging_builder(level: LevelFilter, targets: &[&str]) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder
        .target(env_logger::Target::Stderr)
        .filter(Some(env!("CARGO_CRATE_NAME")), level);
    for target in targets {
        builder.filter(Some(target), level);
    }
    builder.format(|buf, record| {
        writeln!(
            buf,
            "[{} {}:{}] {}",
            record.level(),
            record.file().unwrap_or("unknown"),
            record.line().unwrap_or(0),
            record.args()
        )
    });
    builder
}
