use std::path::PathBuf;

use clap::Parser;
use lib_pxh::{convert_directory, Config, ConvertError, HeaderFormat};

/// Converts a folder of PNG images into one C header of RGB565 arrays.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory holding the source .png files
    #[arg(long, default_value = "pics")]
    input: PathBuf,

    /// Generated header file
    #[arg(long, default_value = "pics.h")]
    output: PathBuf,

    /// Emit bare arrays, without the Arduino include and PROGMEM qualifier
    #[arg(long)]
    bare: bool,
}

fn main() -> Result<(), ConvertError> {
    lib_pxh::init_logging();

    let args = Args::parse();
    let config = Config {
        input_dir: args.input,
        output_path: args.output,
        format: if args.bare {
            HeaderFormat::Bare
        } else {
            HeaderFormat::Arduino
        },
        ..Config::default()
    };

    let processed = convert_directory(&config)?;
    println!(
        "All {} image(s) processed, merged header written to {}",
        processed.len(),
        config.output_path.display()
    );

    Ok(())
}
