//! Single-image ICO container with a PNG payload
//!
//! # Layout
//! ```text
//! ICONDIR (6 bytes)
//! 0x00: reserved u16 (0)
//! 0x02: image_type u16 (1 = icon)
//! 0x04: count u16 (1)
//!
//! ICONDIRENTRY (16 bytes)
//! 0x06: width u8 (0 = 256 or more)
//! 0x07: height u8 (0 = 256 or more)
//! 0x08: color_count u8 (0)
//! 0x09: reserved u8 (0)
//! 0x0A: planes u16 (1)
//! 0x0C: bits_per_pixel u16 (32)
//! 0x0E: bytes_in_res u32 (PNG length)
//! 0x12: image_offset u32 (22)
//!
//! 0x16: PNG stream, unchanged
//! ```
//!
//! Whether the icon displays depends on the consumer accepting PNG frames
//! (Windows Vista and later do).

use std::io::Write;

use crate::png::{read_png_header, PngHeader};
use crate::writer::{read_u16_le, read_u32_le, ByteWriter};
use crate::{FormatError, ICO_IMAGE_OFFSET};

/// ICONDIR (6 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconDir {
    pub reserved: u16,
    pub image_type: u16,
    pub count: u16,
}

impl IconDir {
    pub const SIZE: usize = 6;

    /// Icon resource type
    pub const TYPE_ICON: u16 = 1;

    pub fn single_icon() -> Self {
        Self {
            reserved: 0,
            image_type: Self::TYPE_ICON,
            count: 1,
        }
    }

    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut w = ByteWriter::with_capacity(Self::SIZE);
        w.put_u16_le(self.reserved)
            .put_u16_le(self.image_type)
            .put_u16_le(self.count);

        let mut bytes = [0u8; Self::SIZE];
        bytes.copy_from_slice(w.as_slice());
        bytes
    }

    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        Some(Self {
            reserved: read_u16_le(bytes, 0)?,
            image_type: read_u16_le(bytes, 2)?,
            count: read_u16_le(bytes, 4)?,
        })
    }
}

/// ICONDIRENTRY (16 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconDirEntry {
    pub width: u8,
    pub height: u8,
    pub color_count: u8,
    pub reserved: u8,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub bytes_in_res: u32,
    pub image_offset: u32,
}

impl IconDirEntry {
    pub const SIZE: usize = 16;

    /// Entry for a 32bpp PNG frame placed right after a one-entry directory
    pub fn for_png(header: PngHeader, png_len: u32) -> Self {
        Self {
            width: dimension_byte(header.width),
            height: dimension_byte(header.height),
            color_count: 0,
            reserved: 0,
            planes: 1,
            bits_per_pixel: 32,
            bytes_in_res: png_len,
            image_offset: ICO_IMAGE_OFFSET,
        }
    }

    /// Width in pixels, with 0 read as 256
    pub fn real_width(&self) -> u32 {
        real_dimension(self.width)
    }

    /// Height in pixels, with 0 read as 256
    pub fn real_height(&self) -> u32 {
        real_dimension(self.height)
    }

    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut w = ByteWriter::with_capacity(Self::SIZE);
        w.put_u8(self.width)
            .put_u8(self.height)
            .put_u8(self.color_count)
            .put_u8(self.reserved)
            .put_u16_le(self.planes)
            .put_u16_le(self.bits_per_pixel)
            .put_u32_le(self.bytes_in_res)
            .put_u32_le(self.image_offset);

        let mut bytes = [0u8; Self::SIZE];
        bytes.copy_from_slice(w.as_slice());
        bytes
    }

    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < Self::SIZE {
            return None;
        }
        Some(Self {
            width: bytes[0],
            height: bytes[1],
            color_count: bytes[2],
            reserved: bytes[3],
            planes: read_u16_le(bytes, 4)?,
            bits_per_pixel: read_u16_le(bytes, 6)?,
            bytes_in_res: read_u32_le(bytes, 8)?,
            image_offset: read_u32_le(bytes, 12)?,
        })
    }
}

/// ICO stores 256+ as 0
fn dimension_byte(value: u32) -> u8 {
    if value < 256 {
        value as u8
    } else {
        0
    }
}

fn real_dimension(byte: u8) -> u32 {
    if byte == 0 {
        256
    } else {
        byte as u32
    }
}

/// A PNG payload plus the directory entry that describes it
#[derive(Debug, Clone, Copy)]
pub struct IcoImageEntry<'a> {
    pub png: &'a [u8],
    pub header: PngHeader,
    pub entry: IconDirEntry,
}

impl<'a> IcoImageEntry<'a> {
    /// Probe the PNG and derive its directory entry
    pub fn from_png(png: &'a [u8]) -> Result<Self, FormatError> {
        let header = read_png_header(png)?;
        let len = u32::try_from(png.len())
            .map_err(|_| FormatError::PayloadTooLarge { len: png.len() })?;
        Ok(Self {
            png,
            header,
            entry: IconDirEntry::for_png(header, len),
        })
    }

    /// Read the first image of an ICO file back out
    ///
    /// Returns `None` unless the directory is an icon with at least one
    /// entry whose data range lies inside `ico` and holds a PNG.
    pub fn parse(ico: &'a [u8]) -> Option<Self> {
        let dir = IconDir::from_bytes(ico)?;
        if dir.reserved != 0 || dir.image_type != IconDir::TYPE_ICON || dir.count == 0 {
            return None;
        }
        let entry = IconDirEntry::from_bytes(ico.get(IconDir::SIZE..)?)?;

        let start = entry.image_offset as usize;
        let end = start.checked_add(entry.bytes_in_res as usize)?;
        let png = ico.get(start..end)?;
        let header = read_png_header(png).ok()?;

        Some(Self { png, header, entry })
    }

    /// Total encoded ICO size
    pub fn encoded_len(&self) -> usize {
        ICO_IMAGE_OFFSET as usize + self.png.len()
    }

    fn write_to<W: Write>(&self, w: &mut W) -> std::io::Result<()> {
        w.write_all(&IconDir::single_icon().to_bytes())?;
        w.write_all(&self.entry.to_bytes())?;
        w.write_all(self.png)
    }
}

/// Wrap a PNG stream into a complete single-image ICO file in memory
pub fn wrap_png(png: &[u8]) -> Result<Vec<u8>, FormatError> {
    let image = IcoImageEntry::from_png(png)?;
    let mut out = Vec::with_capacity(image.encoded_len());
    image.write_to(&mut out)?;
    Ok(out)
}

/// Write a single-image ICO to `w`
///
/// The PNG is validated before the first byte is written, so a rejected
/// input leaves `w` untouched.
pub fn write_ico<W: Write>(w: &mut W, png: &[u8]) -> Result<PngHeader, FormatError> {
    let image = IcoImageEntry::from_png(png)?;
    image.write_to(w)?;
    Ok(image.header)
}
