//! winimg-export library
//!
//! File-level BMP and ICO export, used by the `winimg-export` binary and by
//! manifest builds.

pub mod bitmap;
pub mod icon;
pub mod inspect;
pub mod manifest;

// Re-export the codec types callers need alongside the file helpers
pub use winimg_formats::{BmpImageSpec, FormatError, PngHeader, Rgb};

pub use bitmap::create_bmp;
pub use icon::create_ico;
pub use inspect::{describe_file, ImageSummary};
