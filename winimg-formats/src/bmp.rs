//! Solid-color 24-bit BMP encoder
//!
//! # Layout
//! ```text
//! BITMAPFILEHEADER (14 bytes)
//! 0x00: magic "BM"
//! 0x02: file_size u32
//! 0x06: reserved1 u16 (0)
//! 0x08: reserved2 u16 (0)
//! 0x0A: pixel_offset u32 (54)
//!
//! BITMAPINFOHEADER (40 bytes)
//! 0x0E: header_size u32 (40)
//! 0x12: width i32
//! 0x16: height i32 (positive)
//! 0x1A: planes u16 (1)
//! 0x1C: bits_per_pixel u16 (24)
//! 0x1E: compression u32 (0 = BI_RGB)
//! 0x22: image_size u32
//! 0x26: x_pixels_per_meter u32 (2835)
//! 0x2A: y_pixels_per_meter u32 (2835)
//! 0x2E: colors_used u32 (0)
//! 0x32: colors_important u32 (0)
//!
//! 0x36: height rows of width × [b, g, r], zero-padded to a 4-byte stride
//! ```
//!
//! Rows are written in emission order with a positive height. The fill is
//! uniform, so the bottom-up convention does not change what is displayed.

use std::io::Write;

use crate::writer::{read_u16_le, read_u32_le, ByteWriter};
use crate::{FormatError, Rgb, BMP_DEFAULT_RESOLUTION, BMP_MAGIC, BMP_PIXEL_OFFSET};

/// Dimensions and fill color of a solid bitmap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BmpImageSpec {
    pub width: u32,
    pub height: u32,
    pub color: Rgb,
}

impl BmpImageSpec {
    pub fn new(width: u32, height: u32, color: Rgb) -> Self {
        Self {
            width,
            height,
            color,
        }
    }

    /// Bytes per row on disk: width × 3 rounded up to a multiple of 4
    pub fn row_stride(&self) -> u64 {
        (self.width as u64 * 3 + 3) & !3
    }

    /// Zero bytes appended to each row
    pub fn row_padding(&self) -> u64 {
        self.row_stride() - self.width as u64 * 3
    }

    pub fn image_size(&self) -> u64 {
        self.row_stride() * self.height as u64
    }

    pub fn file_size(&self) -> u64 {
        BMP_PIXEL_OFFSET as u64 + self.image_size()
    }

    /// Reject layouts the 32-bit header fields cannot describe
    pub fn validate(&self) -> Result<(), FormatError> {
        if self.width == 0 || self.height == 0 {
            return Err(FormatError::ZeroDimension {
                width: self.width,
                height: self.height,
            });
        }
        if self.file_size() > u32::MAX as u64 {
            return Err(FormatError::BitmapTooLarge {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Build both headers (validates first)
    pub fn headers(&self) -> Result<(BmpFileHeader, BmpInfoHeader), FormatError> {
        self.validate()?;
        // validate() bounds file_size to u32, which bounds width and height below i32::MAX
        let image_size = self.image_size() as u32;
        Ok((
            BmpFileHeader::new(self.file_size() as u32),
            BmpInfoHeader::new(self.width as i32, self.height as i32, image_size),
        ))
    }

    /// One padded pixel row
    fn row(&self) -> Vec<u8> {
        let mut row = ByteWriter::with_capacity(self.row_stride() as usize);
        let pixel = self.color.to_bgr();
        for _ in 0..self.width {
            row.put_bytes(&pixel);
        }
        row.put_zeros(self.row_padding() as usize);
        row.into_inner()
    }
}

/// BITMAPFILEHEADER (14 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BmpFileHeader {
    pub file_size: u32,
    pub reserved1: u16,
    pub reserved2: u16,
    pub pixel_offset: u32,
}

impl BmpFileHeader {
    pub const SIZE: usize = 14;

    pub fn new(file_size: u32) -> Self {
        Self {
            file_size,
            reserved1: 0,
            reserved2: 0,
            pixel_offset: BMP_PIXEL_OFFSET,
        }
    }

    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut w = ByteWriter::with_capacity(Self::SIZE);
        w.put_bytes(&BMP_MAGIC)
            .put_u32_le(self.file_size)
            .put_u16_le(self.reserved1)
            .put_u16_le(self.reserved2)
            .put_u32_le(self.pixel_offset);

        let mut bytes = [0u8; Self::SIZE];
        bytes.copy_from_slice(w.as_slice());
        bytes
    }

    /// Read header from bytes (`None` if too short or magic is not "BM")
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < Self::SIZE || bytes[0..2] != BMP_MAGIC {
            return None;
        }
        Some(Self {
            file_size: read_u32_le(bytes, 2)?,
            reserved1: read_u16_le(bytes, 6)?,
            reserved2: read_u16_le(bytes, 8)?,
            pixel_offset: read_u32_le(bytes, 10)?,
        })
    }
}

/// BITMAPINFOHEADER (40 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BmpInfoHeader {
    pub header_size: u32,
    pub width: i32,
    pub height: i32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
    pub image_size: u32,
    pub x_pixels_per_meter: u32,
    pub y_pixels_per_meter: u32,
    pub colors_used: u32,
    pub colors_important: u32,
}

impl BmpInfoHeader {
    pub const SIZE: usize = 40;

    /// Uncompressed 24-bit header at 72 DPI
    pub fn new(width: i32, height: i32, image_size: u32) -> Self {
        Self {
            header_size: Self::SIZE as u32,
            width,
            height,
            planes: 1,
            bits_per_pixel: 24,
            compression: 0,
            image_size,
            x_pixels_per_meter: BMP_DEFAULT_RESOLUTION,
            y_pixels_per_meter: BMP_DEFAULT_RESOLUTION,
            colors_used: 0,
            colors_important: 0,
        }
    }

    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut w = ByteWriter::with_capacity(Self::SIZE);
        w.put_u32_le(self.header_size)
            .put_u32_le(self.width as u32)
            .put_u32_le(self.height as u32)
            .put_u16_le(self.planes)
            .put_u16_le(self.bits_per_pixel)
            .put_u32_le(self.compression)
            .put_u32_le(self.image_size)
            .put_u32_le(self.x_pixels_per_meter)
            .put_u32_le(self.y_pixels_per_meter)
            .put_u32_le(self.colors_used)
            .put_u32_le(self.colors_important);

        let mut bytes = [0u8; Self::SIZE];
        bytes.copy_from_slice(w.as_slice());
        bytes
    }

    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < Self::SIZE {
            return None;
        }
        Some(Self {
            header_size: read_u32_le(bytes, 0)?,
            width: read_u32_le(bytes, 4)? as i32,
            height: read_u32_le(bytes, 8)? as i32,
            planes: read_u16_le(bytes, 12)?,
            bits_per_pixel: read_u16_le(bytes, 14)?,
            compression: read_u32_le(bytes, 16)?,
            image_size: read_u32_le(bytes, 20)?,
            x_pixels_per_meter: read_u32_le(bytes, 24)?,
            y_pixels_per_meter: read_u32_le(bytes, 28)?,
            colors_used: read_u32_le(bytes, 32)?,
            colors_important: read_u32_le(bytes, 36)?,
        })
    }
}

/// Encode a complete BMP file into memory
pub fn encode_bmp(spec: &BmpImageSpec) -> Result<Vec<u8>, FormatError> {
    let (file_header, info_header) = spec.headers()?;

    let mut w = ByteWriter::with_capacity(file_header.file_size as usize);
    w.put_bytes(&file_header.to_bytes());
    w.put_bytes(&info_header.to_bytes());

    let row = spec.row();
    for _ in 0..spec.height {
        w.put_bytes(&row);
    }

    Ok(w.into_inner())
}

/// Stream a complete BMP file to `w`, one row at a time
///
/// Nothing is written if the spec is rejected. An I/O error part-way
/// through leaves whatever was already written.
pub fn write_bmp<W: Write>(w: &mut W, spec: &BmpImageSpec) -> Result<(), FormatError> {
    let (file_header, info_header) = spec.headers()?;
    w.write_all(&file_header.to_bytes())?;
    w.write_all(&info_header.to_bytes())?;

    let row = spec.row();
    for _ in 0..spec.height {
        w.write_all(&row)?;
    }

    Ok(())
}
