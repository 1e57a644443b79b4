use std::fs::File;
use std::io::{self, BufWriter};

use log::{debug, info};
use thiserror::Error;

use crate::color::rgb888_to_rgb565;
use crate::config::Config;
use crate::header::HeaderWriter;
use crate::load::{load_rgb, LoadError};
use crate::name::{array_name, NameError};
use crate::scan::{scan_png_files, ScanError};

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Failed to scan the input directory")]
    Scan(#[from] ScanError),
    #[error("Failed to load a source image")]
    Load(#[from] LoadError),
    #[error("Failed to derive an array name")]
    Name(#[from] NameError),
    #[error("Failed to write the output header")]
    Io(#[from] io::Error),
}

/// Converts every `.png` of the configured input directory into one
/// generated header of RGB565 arrays.
///
/// Images are processed strictly one at a time, in sorted filename order;
/// pixels are emitted row-major (y outer, x inner). The output file is
/// created fresh at the start and owned by this function for the whole
/// run. Any failure aborts the run, possibly leaving the file truncated.
///
/// # Returns
/// The processed source filenames, in emission order.
pub fn convert_directory(config: &Config) -> Result<Vec<String>, ConvertError> {
    info!(
        "starting conversion: {:?} -> {:?}",
        config.input_dir, config.output_path
    );

    let files = scan_png_files(&config.input_dir)?;
    let pixel_count = (config.width * config.height) as usize;

    let output = File::create(&config.output_path)?;
    let mut writer = HeaderWriter::new(BufWriter::new(output));
    writer.preamble(config.format)?;

    let mut processed = Vec::with_capacity(files.len());
    for path in &files {
        // The scanner only passes through UTF-8 names
        let filename = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();

        let name = array_name(filename)?;
        let raster = load_rgb(path, config.width, config.height)?;
        debug!("converting {} as array {}", filename, name);

        writer.begin_image(filename, &name, pixel_count, config.format)?;
        for pixel in raster.pixels() {
            let [r, g, b] = pixel.0;
            writer.pixel(rgb888_to_rgb565(r, g, b))?;
        }
        writer.end_image()?;

        println!("{} added to {}", filename, config.output_path.display());
        processed.push(filename.to_owned());
    }

    info!("conversion finished: {} image(s)", processed.len());
    Ok(processed)
}
