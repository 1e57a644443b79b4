use std::path::PathBuf;

use crate::header::HeaderFormat;

/// Resolution every source image is resampled to.
pub const TARGET_WIDTH: u32 = 80;
pub const TARGET_HEIGHT: u32 = 60;

/// Everything one conversion run needs, gathered in a single value
/// instead of scattered globals.
#[derive(Debug, Clone)]
pub struct Config {
    pub input_dir: PathBuf,
    pub output_path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub format: HeaderFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("pics"),
            output_path: PathBuf::from("pics.h"),
            width: TARGET_WIDTH,
            height: TARGET_HEIGHT,
            format: HeaderFormat::Arduino,
        }
    }
}
