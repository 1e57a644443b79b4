#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};

use image::{GrayImage, Luma, Rgb, RgbImage, Rgba, RgbaImage};

static NEXT_ID: AtomicU32 = AtomicU32::new(0);

/// Creates a fresh scratch directory under the system temp dir.
pub fn scratch_dir(tag: &str) -> PathBuf {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    let dir = std::env::temp_dir().join(format!("pxh_{}_{}_{}", tag, std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

pub fn write_solid_png(dir: &Path, name: &str, color: [u8; 3], width: u32, height: u32) {
    let img = RgbImage::from_pixel(width, height, Rgb(color));
    img.save(dir.join(name)).unwrap();
}

pub fn write_rgba_png(dir: &Path, name: &str, color: [u8; 4], width: u32, height: u32) {
    let img = RgbaImage::from_pixel(width, height, Rgba(color));
    img.save(dir.join(name)).unwrap();
}

pub fn write_gray_png(dir: &Path, name: &str, value: u8, width: u32, height: u32) {
    let img = GrayImage::from_pixel(width, height, Luma([value]));
    img.save(dir.join(name)).unwrap();
}
