pub mod color;
pub mod config;
pub mod convert;
pub mod header;
pub mod load;
pub mod name;
pub mod scan;

use log::*;
use std::io::Write;

pub use crate::config::Config;
pub use crate::convert::{convert_directory, ConvertError};
pub use crate::header::HeaderFormat;

pub fn init_logging() {
    env_logger::Builder::new()
        .filter(Some("lib_pxh"), LevelFilter::Debug)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}
