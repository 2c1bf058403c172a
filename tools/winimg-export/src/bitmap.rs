//! Solid-color bitmap export (-> .bmp)

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use winimg_formats::{write_bmp, BmpImageSpec, Rgb};

/// Installer branding bitmap width
pub const DEFAULT_WIDTH: u32 = 164;

/// Installer branding bitmap height
pub const DEFAULT_HEIGHT: u32 = 314;

/// Dark grey fill used by the installer sidebar
pub const DEFAULT_COLOR: Rgb = Rgb::new(40, 40, 40);

/// Where the branding bitmap is written when no output is given
pub fn default_output() -> PathBuf {
    PathBuf::from("extras/package/win32/NSIS/vlc_branding.bmp")
}

/// Write a solid-color BMP to `output`, replacing any existing file
///
/// The spec is validated before the file is opened. Parent directories
/// are created as needed.
pub fn create_bmp(output: &Path, spec: &BmpImageSpec) -> Result<()> {
    spec.validate()
        .with_context(|| format!("Invalid bitmap for {:?}", output))?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {:?}", parent))?;
    }

    let file =
        File::create(output).with_context(|| format!("Failed to create output: {:?}", output))?;
    let mut writer = BufWriter::new(file);

    write_bmp(&mut writer, spec).with_context(|| format!("Failed to write BMP: {:?}", output))?;
    writer
        .flush()
        .with_context(|| format!("Failed to write BMP: {:?}", output))?;

    tracing::debug!(
        "BMP layout: stride {} bytes, {} padding per row",
        spec.row_stride(),
        spec.row_padding()
    );
    tracing::info!(
        "Created {:?}: {}x{} RGB({}), {} bytes",
        output,
        spec.width,
        spec.height,
        spec.color,
        spec.file_size()
    );

    Ok(())
}
