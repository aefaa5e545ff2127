mod app;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use argh::FromArgs;
use log::LevelFilter;

use app::Job;

#[derive(FromArgs)]
/// Converts an indexed PNG spritesheet into Mode 2 sprite patterns and colors.
/// With only the PNG given, the image is validated and nothing is written.
struct Args {
    /// sprite columns per object (1 or 2)
    #[argh(option, short = 'c', default = "1")]
    columns: u8,

    /// sprite lines per object (1 or 2)
    #[argh(option, short = 'l', default = "1")]
    lines: u8,

    /// expected bits per pixel of every object (1 or 2, 0 for auto)
    #[argh(option, short = 'b', default = "0")]
    bpp: u8,

    /// print the palette entries of the image
    #[argh(switch, short = 'p')]
    palette: bool,

    /// log every encoding step
    #[argh(switch, short = 'v')]
    verbose: bool,

    /// input PNG, optionally followed by the raw pattern and color output files
    #[argh(positional)]
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    let args: Args = argh::from_env();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    lib_mode2::init_logging(level, &[env!("CARGO_CRATE_NAME")]);

    let result = Job::new(args.files, args.columns, args.lines, args.bpp, args.palette)
        .and_then(|job| job.run());

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR! {}", app::report(&e));
            ExitCode::FAILURE
        }
    }
}
