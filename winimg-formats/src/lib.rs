//! winimg-formats: byte-exact Windows image container writers
//!
//! Two single-pass encoders, both built on an endianness-explicit
//! [`ByteWriter`]:
//!
//! - **BMP**: a solid-color, uncompressed 24-bit bitmap
//!   (BITMAPFILEHEADER + BITMAPINFOHEADER + padded BGR rows).
//! - **ICO**: a single-image icon whose image data is an existing PNG,
//!   embedded verbatim (ICONDIR + one ICONDIRENTRY + PNG bytes).
//!
//! **This is a pure codec** - no files are opened here. Callers hand in a
//! writer or take the encoded `Vec<u8>` (see `winimg-export`).
//!
//! # BMP Layout
//!
//! ```text
//! 0x00: "BM"                 file header (14 bytes)
//! 0x0E: BITMAPINFOHEADER     info header (40 bytes)
//! 0x36: rows                 height × stride bytes, stride = (width*3 + 3) & !3
//! ```
//!
//! # ICO Layout
//!
//! ```text
//! 0x00: ICONDIR              reserved=0, type=1, count=1 (6 bytes)
//! 0x06: ICONDIRENTRY         width, height, ..., size, offset=22 (16 bytes)
//! 0x16: PNG stream           copied unchanged
//! ```
//!
//! # Usage
//!
//! ```
//! use winimg_formats::{encode_bmp, BmpImageSpec, Rgb};
//!
//! let spec = BmpImageSpec::new(164, 314, Rgb::new(40, 40, 40));
//! let bytes = encode_bmp(&spec).unwrap();
//! assert_eq!(bytes.len(), 154_542);
//! ```

mod bmp;
mod color;
mod error;
mod ico;
mod png;
mod writer;

pub use bmp::{encode_bmp, write_bmp, BmpFileHeader, BmpImageSpec, BmpInfoHeader};
pub use color::{ParseRgbError, Rgb};
pub use error::FormatError;
pub use ico::{wrap_png, write_ico, IcoImageEntry, IconDir, IconDirEntry};
pub use png::{read_png_header, PngHeader};
pub use writer::{read_u16_le, read_u32_be, read_u32_le, ByteWriter};

// =============================================================================
// Constants
// =============================================================================

/// BMP file magic
pub const BMP_MAGIC: [u8; 2] = *b"BM";

/// Offset of pixel data in a headers-only (no palette) BMP: 14 + 40
pub const BMP_PIXEL_OFFSET: u32 = (BmpFileHeader::SIZE + BmpInfoHeader::SIZE) as u32;

/// 2835 pixels per meter (~72 DPI)
pub const BMP_DEFAULT_RESOLUTION: u32 = 2835;

/// PNG file signature
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Offset of the image data in a single-image ICO: 6 + 16
pub const ICO_IMAGE_OFFSET: u32 = (IconDir::SIZE + IconDirEntry::SIZE) as u32;
