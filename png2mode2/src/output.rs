use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use lib_mode2::SpriteSet;
use log::{debug, error};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Can't open {} for writing", path.display())]
    Create { path: PathBuf, source: io::Error },

    #[error("Can't write {} bytes to {}", len, path.display())]
    Write {
        path: PathBuf,
        len: usize,
        source: io::Error,
    },
}

fn write_table(path: &Path, data: &[u8]) -> Result<(), OutputError> {
    let mut file = File::create(path).map_err(|source| {
        error!("Can't open {}: {}", path.display(), source);
        OutputError::Create {
            path: path.to_path_buf(),
            source,
        }
    })?;

    file.write_all(data)
        .and_then(|_| file.flush())
        .map_err(|source| {
            error!("Can't write {}: {}", path.display(), source);
            OutputError::Write {
                path: path.to_path_buf(),
                len: data.len(),
                source,
            }
        })?;

    debug!("Wrote {} bytes to {}", data.len(), path.display());
    Ok(())
}

/// Writes the raw pattern and color tables of `set`.
pub fn write_sprites(set: &SpriteSet, patterns: &Path, colors: &Path) -> Result<(), OutputError> {
    write_table(patterns, set.patterns())?;
    write_table(colors, set.colors())
}
