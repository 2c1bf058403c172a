//! Header inspection for exported files

use anyhow::{bail, Context, Result};
use std::fmt;
use std::path::Path;

use winimg_formats::{
    BmpFileHeader, BmpInfoHeader, IcoImageEntry, IconDir, IconDirEntry, PngHeader, BMP_MAGIC,
};

/// Parsed headers of a BMP or ICO file
#[derive(Debug, Clone)]
pub enum ImageSummary {
    Bitmap {
        file_len: usize,
        file_header: BmpFileHeader,
        info_header: BmpInfoHeader,
    },
    Icon {
        file_len: usize,
        dir: IconDir,
        entry: IconDirEntry,
        png: PngHeader,
    },
}

impl fmt::Display for ImageSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSummary::Bitmap {
                file_len,
                file_header,
                info_header,
            } => {
                writeln!(f, "BMP, {} bytes on disk", file_len)?;
                writeln!(f, "  declared file size: {}", file_header.file_size)?;
                writeln!(f, "  pixel offset:       {}", file_header.pixel_offset)?;
                writeln!(
                    f,
                    "  dimensions:         {}x{}",
                    info_header.width, info_header.height
                )?;
                writeln!(f, "  bits per pixel:     {}", info_header.bits_per_pixel)?;
                writeln!(f, "  compression:        {}", info_header.compression)?;
                write!(f, "  image size:         {}", info_header.image_size)
            }
            ImageSummary::Icon {
                file_len,
                dir,
                entry,
                png,
            } => {
                writeln!(f, "ICO, {} bytes on disk, {} image(s)", file_len, dir.count)?;
                writeln!(
                    f,
                    "  entry size:     {}x{} (bytes {}, {})",
                    entry.real_width(),
                    entry.real_height(),
                    entry.width,
                    entry.height
                )?;
                writeln!(f, "  PNG size:       {}x{}", png.width, png.height)?;
                writeln!(f, "  bits per pixel: {}", entry.bits_per_pixel)?;
                write!(
                    f,
                    "  data:           {} bytes at offset {}",
                    entry.bytes_in_res, entry.image_offset
                )
            }
        }
    }
}

/// Read back the headers of a BMP or single-PNG ICO file
pub fn describe_file(path: &Path) -> Result<ImageSummary> {
    let data = std::fs::read(path).with_context(|| format!("Failed to read {:?}", path))?;
    describe_bytes(&data).with_context(|| format!("Cannot describe {:?}", path))
}

fn describe_bytes(data: &[u8]) -> Result<ImageSummary> {
    if data.starts_with(&BMP_MAGIC) {
        let file_header = BmpFileHeader::from_bytes(data).context("BMP file header truncated")?;
        let info_header = data
            .get(BmpFileHeader::SIZE..)
            .and_then(BmpInfoHeader::from_bytes)
            .context("BMP info header truncated")?;
        return Ok(ImageSummary::Bitmap {
            file_len: data.len(),
            file_header,
            info_header,
        });
    }

    if let Some(image) = IcoImageEntry::parse(data) {
        let dir = IconDir::from_bytes(data).context("ICO directory truncated")?;
        return Ok(ImageSummary::Icon {
            file_len: data.len(),
            dir,
            entry: image.entry,
            png: image.header,
        });
    }

    bail!("Not a BMP or PNG-backed ICO file")
}
