//! Error type shared by the BMP and ICO writers.

/// Failure while encoding or probing an image container.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("Not a PNG file (signature mismatch)")]
    InvalidPngSignature,

    #[error("First PNG chunk is not IHDR (found {})", describe_chunk(.found))]
    MissingIhdr { found: Option<[u8; 4]> },

    #[error("PNG IHDR chunk is truncated ({len} bytes total, need 24)")]
    TruncatedIhdr { len: usize },

    #[error("Bitmap dimensions must be nonzero (got {width}x{height})")]
    ZeroDimension { width: u32, height: u32 },

    #[error("Bitmap {width}x{height} does not fit in a 32-bit file size")]
    BitmapTooLarge { width: u32, height: u32 },

    #[error("PNG payload of {len} bytes does not fit in an icon entry")]
    PayloadTooLarge { len: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn describe_chunk(found: &Option<[u8; 4]>) -> String {
    match found {
        Some(tag) => format!("{:?}", String::from_utf8_lossy(tag)),
        None => "nothing".to_string(),
    }
}
