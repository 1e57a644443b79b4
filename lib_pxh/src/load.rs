use std::path::{Path, PathBuf};

use image::{imageops, imageops::FilterType, DynamicImage, ImageError, RgbImage};
use log::{debug, error};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to decode {path:?} as an image")]
    Decode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },
    #[error("image {0:?} cannot be normalized to 8-bit RGB")]
    UnsupportedMode(PathBuf),
}

/// Decodes an image file and resamples it to `width`×`height` RGB.
///
/// Any alpha channel is dropped, never blended; grayscale and paletted
/// sources are expanded to RGB. Resampling is nearest-neighbor so hard
/// pixel edges survive.
pub fn load_rgb(path: &Path, width: u32, height: u32) -> Result<RgbImage, LoadError> {
    let decoded = image::open(path).map_err(|e| {
        error!("decoding {:?} failed: {}", path, e);
        LoadError::Decode {
            path: path.to_path_buf(),
            source: e,
        }
    })?;
    debug!(
        "decoded {:?}: {}x{} ({:?})",
        path,
        decoded.width(),
        decoded.height(),
        decoded.color()
    );

    // Float rasters come from HDR formats, not PNG
    let rgb = match decoded {
        DynamicImage::ImageRgb32F(_) | DynamicImage::ImageRgba32F(_) => {
            error!("{:?} has a floating-point color mode", path);
            return Err(LoadError::UnsupportedMode(path.to_path_buf()));
        }
        other => other.into_rgb8(),
    };

    let resized = imageops::resize(&rgb, width, height, FilterType::Nearest);
    debug!("resampled {:?} to {}x{}", path, width, height);

    Ok(resized)
}
