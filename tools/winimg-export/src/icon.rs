//! Icon export (PNG -> .ico)

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use winimg_formats::{write_ico, PngHeader};

/// Wrap the PNG at `input` into a single-image ICO at `output`
///
/// The PNG is read and checked before `output` is touched, so a rejected
/// input never creates or truncates the output. The underlying
/// [`winimg_formats::FormatError`] stays reachable through
/// `anyhow::Error::downcast_ref`.
pub fn create_ico(input: &Path, output: &Path) -> Result<PngHeader> {
    let png_data =
        std::fs::read(input).with_context(|| format!("Failed to read PNG: {:?}", input))?;

    let mut ico = Vec::new();
    let header =
        write_ico(&mut ico, &png_data).with_context(|| format!("Cannot wrap {:?}", input))?;
    tracing::info!("PNG size: {}x{}", header.width, header.height);

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {:?}", parent))?;
    }

    let file =
        File::create(output).with_context(|| format!("Failed to create output: {:?}", output))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(&ico)
        .and_then(|_| writer.flush())
        .with_context(|| format!("Failed to write ICO: {:?}", output))?;

    tracing::info!("Created {:?} ({} bytes)", output, ico.len());

    Ok(header)
}
