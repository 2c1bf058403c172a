//! winimg-export - Windows image export tool
//!
//! Writes solid-color BMP files (installer branding) and wraps PNG files
//! into single-image ICO containers.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use winimg_export::{bitmap, icon, inspect, manifest, BmpImageSpec, Rgb};

#[derive(Parser)]
#[command(name = "winimg-export")]
#[command(about = "Windows BMP/ICO export tool")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a solid-color 24-bit BMP
    Bmp {
        /// Output .bmp file (default: extras/package/win32/NSIS/vlc_branding.bmp)
        output: Option<PathBuf>,

        /// Width in pixels
        #[arg(long, default_value_t = bitmap::DEFAULT_WIDTH)]
        width: u32,

        /// Height in pixels
        #[arg(long, default_value_t = bitmap::DEFAULT_HEIGHT)]
        height: u32,

        /// Fill color as "r,g,b" or "#rrggbb"
        #[arg(short, long, default_value_t = bitmap::DEFAULT_COLOR)]
        color: Rgb,
    },

    /// Wrap a PNG file into a single-image ICO
    Ico {
        /// Input PNG file
        input: PathBuf,

        /// Output .ico file
        output: PathBuf,
    },

    /// Build bitmaps and icons from a manifest file
    Build {
        /// Path to winimg.toml manifest
        #[arg(default_value = "winimg.toml")]
        manifest: PathBuf,

        /// Output directory (overrides manifest)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate manifest without building
    Check {
        /// Path to winimg.toml manifest
        #[arg(default_value = "winimg.toml")]
        manifest: PathBuf,
    },

    /// Print the headers of a BMP or ICO file
    Info {
        /// File to inspect
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Bmp {
            output,
            width,
            height,
            color,
        } => {
            let output = output.unwrap_or_else(bitmap::default_output);
            bitmap::create_bmp(&output, &BmpImageSpec::new(width, height, color))?;
        }

        Commands::Ico { input, output } => {
            tracing::info!("Converting {:?} -> {:?}", input, output);
            icon::create_ico(&input, &output)?;
        }

        Commands::Build { manifest, output } => {
            tracing::info!("Building images from {:?}", manifest);
            let config = manifest::load_manifest(&manifest)?;
            manifest::validate(&config)?;
            let written = manifest::build_all(&config, output.as_deref())?;
            tracing::info!("Build complete! {} file(s) written", written.len());
        }

        Commands::Check { manifest } => {
            tracing::info!("Checking manifest {:?}", manifest);
            let config = manifest::load_manifest(&manifest)?;
            manifest::validate(&config)?;
            tracing::info!(
                "Manifest is valid! {} bitmap(s), {} icon(s)",
                config.bitmaps.len(),
                config.icons.len()
            );
        }

        Commands::Info { file } => {
            let summary = inspect::describe_file(&file)?;
            println!("{}", summary);
        }
    }

    Ok(())
}
