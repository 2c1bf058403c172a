//! PNG IHDR probe
//!
//! Only the signature and the first chunk header are inspected; the
//! stream itself is never decoded.
//!
//! ```text
//! 0x00: signature 89 50 4E 47 0D 0A 1A 0A
//! 0x08: chunk length u32 BE
//! 0x0C: chunk type "IHDR"
//! 0x10: width u32 BE
//! 0x14: height u32 BE
//! ```

use crate::writer::read_u32_be;
use crate::{FormatError, PNG_SIGNATURE};

const IHDR_TYPE_OFFSET: usize = 12;
const IHDR_WIDTH_OFFSET: usize = 16;
const IHDR_HEIGHT_OFFSET: usize = 20;

/// Dimensions declared by a PNG's IHDR chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PngHeader {
    pub width: u32,
    pub height: u32,
}

/// Check the PNG signature and read width/height from IHDR
///
/// Signature is checked first, so a short non-PNG buffer reports
/// `InvalidPngSignature` rather than `MissingIhdr`.
pub fn read_png_header(png: &[u8]) -> Result<PngHeader, FormatError> {
    if !png.starts_with(&PNG_SIGNATURE) {
        return Err(FormatError::InvalidPngSignature);
    }

    let chunk_type = png.get(IHDR_TYPE_OFFSET..IHDR_TYPE_OFFSET + 4);
    if chunk_type != Some(b"IHDR".as_slice()) {
        return Err(FormatError::MissingIhdr {
            found: chunk_type.and_then(|t| t.try_into().ok()),
        });
    }

    let width = read_u32_be(png, IHDR_WIDTH_OFFSET);
    let height = read_u32_be(png, IHDR_HEIGHT_OFFSET);
    match (width, height) {
        (Some(width), Some(height)) => Ok(PngHeader { width, height }),
        _ => Err(FormatError::TruncatedIhdr { len: png.len() }),
    }
}
