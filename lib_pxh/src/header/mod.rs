pub mod format;
pub mod writer;

pub use format::HeaderFormat;
pub use writer::HeaderWriter;
