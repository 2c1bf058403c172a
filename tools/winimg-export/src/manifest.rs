//! Manifest parsing and build orchestration
//!
//! Parses winimg.toml and runs every bitmap and icon export it lists.

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use winimg_formats::{BmpImageSpec, Rgb};

use crate::bitmap::{DEFAULT_COLOR, DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Root manifest structure
#[derive(Debug, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub bitmaps: BTreeMap<String, BitmapEntry>,
    #[serde(default)]
    pub icons: BTreeMap<String, IconEntry>,
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("assets/")
}

/// A solid bitmap; every field falls back to the branding defaults
#[derive(Debug, Deserialize)]
pub struct BitmapEntry {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_color", deserialize_with = "deserialize_color")]
    pub color: Rgb,
    /// Explicit output path (otherwise `<dir>/<name>.bmp`)
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_width() -> u32 {
    DEFAULT_WIDTH
}

fn default_height() -> u32 {
    DEFAULT_HEIGHT
}

fn default_color() -> Rgb {
    DEFAULT_COLOR
}

impl BitmapEntry {
    pub fn spec(&self) -> BmpImageSpec {
        BmpImageSpec::new(self.width, self.height, self.color)
    }
}

/// `"40,40,40"`, `"#282828"` or `[40, 40, 40]`
#[derive(Deserialize)]
#[serde(untagged)]
enum ColorValue {
    Text(String),
    Channels([u8; 3]),
}

fn deserialize_color<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Rgb, D::Error> {
    match ColorValue::deserialize(deserializer)? {
        ColorValue::Text(s) => s.parse().map_err(serde::de::Error::custom),
        ColorValue::Channels([r, g, b]) => Ok(Rgb::new(r, g, b)),
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum IconEntry {
    Simple(PathBuf),
    Detailed {
        path: PathBuf,
        #[serde(default)]
        output: Option<PathBuf>,
    },
}

impl IconEntry {
    pub fn path(&self) -> &Path {
        match self {
            IconEntry::Simple(p) => p,
            IconEntry::Detailed { path, .. } => path,
        }
    }

    pub fn output(&self) -> Option<&Path> {
        match self {
            IconEntry::Simple(_) => None,
            IconEntry::Detailed { output, .. } => output.as_deref(),
        }
    }
}

/// Parse manifest text
pub fn parse_manifest(content: &str) -> Result<Manifest> {
    let manifest: Manifest = toml::from_str(content)?;
    Ok(manifest)
}

/// Load and parse a manifest file
pub fn load_manifest(path: &Path) -> Result<Manifest> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest: {:?}", path))?;
    parse_manifest(&content).with_context(|| format!("Failed to parse manifest: {:?}", path))
}

/// Validate a manifest without building
pub fn validate(manifest: &Manifest) -> Result<()> {
    for (name, entry) in &manifest.bitmaps {
        entry
            .spec()
            .validate()
            .with_context(|| format!("Bitmap '{}' is invalid", name))?;
    }
    for (name, entry) in &manifest.icons {
        if !entry.path().exists() {
            anyhow::bail!("Icon '{}' source not found: {:?}", name, entry.path());
        }
    }
    Ok(())
}

/// Build all bitmaps then all icons, returning the files written
pub fn build_all(manifest: &Manifest, output_override: Option<&Path>) -> Result<Vec<PathBuf>> {
    let output_dir = output_override.unwrap_or(&manifest.output.dir);
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory: {:?}", output_dir))?;

    let mut written = Vec::with_capacity(manifest.bitmaps.len() + manifest.icons.len());

    for (name, entry) in &manifest.bitmaps {
        let output = entry
            .path
            .clone()
            .unwrap_or_else(|| output_dir.join(format!("{}.bmp", name)));
        tracing::info!("Building bitmap: {} -> {:?}", name, output);
        crate::bitmap::create_bmp(&output, &entry.spec())?;
        written.push(output);
    }

    for (name, entry) in &manifest.icons {
        let output = entry
            .output()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| output_dir.join(format!("{}.ico", name)));
        tracing::info!("Building icon: {} -> {:?}", name, output);
        crate::icon::create_ico(entry.path(), &output)?;
        written.push(output);
    }

    Ok(written)
}
