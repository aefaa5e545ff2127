use std::error::Error as StdError;
use std::path::PathBuf;

use lib_mode2::image::DecodeError;
use lib_mode2::{encode, EncodeError, EncodeOptions};
use log::info;
use thiserror::Error;

use crate::output::{write_sprites, OutputError};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Usage: png2mode2 <pngfilename> <raw sprite patterns> <raw sprite colors> -l [lines] -c [columns] -b [BPP]\nTo only validate a PNG: png2mode2 <pngfilename>")]
    Usage,

    #[error("Can't load {}", path.display())]
    Decode { path: PathBuf, source: DecodeError },

    #[error("Can't convert {}", path.display())]
    Encode { path: PathBuf, source: EncodeError },

    #[error("Invalid options")]
    Options(#[source] EncodeError),

    #[error("Output failed")]
    Output(#[from] OutputError),
}

/// Output files for a conversion; absent when only validating.
#[derive(Debug, PartialEq, Eq)]
pub struct Targets {
    pub patterns: PathBuf,
    pub colors: PathBuf,
}

#[derive(Debug)]
pub struct Job {
    pub input: PathBuf,
    pub targets: Option<Targets>,
    pub options: EncodeOptions,
    pub print_palette: bool,
}

impl Job {
    pub fn new(
        files: Vec<PathBuf>,
        columns: u8,
        lines: u8,
        bpp: u8,
        print_palette: bool,
    ) -> Result<Self, AppError> {
        let mut files = files.into_iter();
        let (input, targets) = match (files.next(), files.next(), files.next(), files.next()) {
            (Some(input), None, None, None) => (input, None),
            (Some(input), Some(patterns), Some(colors), None) => {
                (input, Some(Targets { patterns, colors }))
            }
            _ => return Err(AppError::Usage),
        };

        let options = EncodeOptions::new(columns, lines, bpp).map_err(AppError::Options)?;

        Ok(Self {
            input,
            targets,
            options,
            print_palette,
        })
    }

    pub fn run(self) -> Result<(), AppError> {
        info!(
            "Picture: {}, lines: {}, columns: {}, bpp: {:?}",
            self.input.display(),
            self.options.sub_grid.lines(),
            self.options.sub_grid.columns(),
            self.options.bpp
        );

        let image = lib_mode2::open(&self.input).map_err(|source| AppError::Decode {
            path: self.input.clone(),
            source,
        })?;

        if self.print_palette {
            print!("{}", image.palette_report());
            if self.targets.is_none() {
                return Ok(());
            }
        }
        info!(
            "File {} - Width: {}, Height: {}, {} colors",
            self.input.display(),
            image.width,
            image.height,
            image.palette.len()
        );

        let set = encode(&image, &self.options).map_err(|source| AppError::Encode {
            path: self.input.clone(),
            source,
        })?;
        println!("Found {} sprites in {}.", set.len(), self.input.display());

        if let Some(targets) = &self.targets {
            write_sprites(&set, &targets.patterns, &targets.colors)?;
            println!(
                "Wrote patterns at {} and colors at {}.",
                targets.patterns.display(),
                targets.colors.display()
            );
        }

        Ok(())
    }
}

/// The error and all of its causes on one line.
pub fn report(error: &dyn StdError) -> String {
    let mut message = error.to_string();
    let mut cause = error.source();
    while let Some(inner) = cause {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        cause = inner.source();
    }
    message
}
