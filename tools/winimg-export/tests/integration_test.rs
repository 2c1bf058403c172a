//! Integration tests for winimg-export
//!
//! Tests the full pipeline: generate inputs -> run the CLI -> verify output bytes

mod generate_test_assets;

use std::path::Path;
use std::process::Output;
use tempfile::tempdir;

/// Default `bmp` run reproduces the installer branding bitmap
#[test]
fn test_bmp_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let bmp_path = dir.path().join("vlc_branding.bmp");

    let out = run(&["bmp", path_str(&bmp_path)]);
    assert!(out.status.success(), "bmp command failed: {:?}", out);

    let data = std::fs::read(&bmp_path).expect("Failed to read BMP");
    assert_eq!(data.len(), 154_542);
    verify_bmp(&data, 164, 314, [40, 40, 40]);
}

/// Unaligned width exercises row padding
#[test]
fn test_bmp_padded_rows() {
    let dir = tempdir().expect("Failed to create temp dir");
    let bmp_path = dir.path().join("padded.bmp");

    let out = run(&[
        "bmp",
        path_str(&bmp_path),
        "--width",
        "5",
        "--height",
        "7",
        "--color",
        "#102030",
    ]);
    assert!(out.status.success(), "bmp command failed: {:?}", out);

    let data = std::fs::read(&bmp_path).expect("Failed to read BMP");
    assert_eq!(data.len(), 54 + 16 * 7);
    for row in data[54..].chunks(16) {
        assert_eq!(&row[..15], [0x30, 0x20, 0x10].repeat(5).as_slice());
        assert_eq!(&row[15..], &[0]);
    }
    verify_bmp(&data, 5, 7, [0x10, 0x20, 0x30]);
}

#[test]
fn test_bmp_rejects_bad_color() {
    let dir = tempdir().expect("Failed to create temp dir");
    let bmp_path = dir.path().join("bad.bmp");

    let out = run(&["bmp", path_str(&bmp_path), "--color", "256,0,0"]);
    assert!(!out.status.success());
    assert!(!bmp_path.exists());
}

/// 32×32 PNG -> ICO, byte layout and decodability
#[test]
fn test_png_to_ico() {
    let dir = tempdir().expect("Failed to create temp dir");
    let png_path = dir.path().join("icon.png");
    let ico_path = dir.path().join("icon.ico");

    let png = generate_test_assets::generate_gradient_png(&png_path, 32, 32)
        .expect("Failed to generate PNG");

    let out = run(&["ico", path_str(&png_path), path_str(&ico_path)]);
    assert!(out.status.success(), "ico command failed: {:?}", out);

    let ico = std::fs::read(&ico_path).expect("Failed to read ICO");
    assert_eq!(&ico[0..6], &[0x00, 0x00, 0x01, 0x00, 0x01, 0x00]);
    assert_eq!(ico[6], 32);
    assert_eq!(ico[7], 32);
    assert_eq!(&ico[12..14], &32u16.to_le_bytes());
    assert_eq!(&ico[14..18], &(png.len() as u32).to_le_bytes());
    assert_eq!(&ico[18..22], &22u32.to_le_bytes());

    // Embedded payload is untouched
    assert_eq!(&ico[22..], png.as_slice());

    let decoded = image::load_from_memory_with_format(&ico, image::ImageFormat::Ico)
        .expect("ICO should decode");
    let original = image::load_from_memory_with_format(&png, image::ImageFormat::Png)
        .expect("PNG should decode");
    assert_eq!(decoded.width(), 32);
    assert_eq!(decoded.height(), 32);
    assert_eq!(decoded.to_rgba8(), original.to_rgba8());
}

/// 256 and above are written as 0
#[test]
fn test_large_png_entry_dimensions() {
    let dir = tempdir().expect("Failed to create temp dir");
    let png_path = dir.path().join("big.png");
    let ico_path = dir.path().join("big.ico");

    generate_test_assets::generate_gradient_png(&png_path, 300, 256)
        .expect("Failed to generate PNG");

    let out = run(&["ico", path_str(&png_path), path_str(&ico_path)]);
    assert!(out.status.success(), "ico command failed: {:?}", out);

    let ico = std::fs::read(&ico_path).expect("Failed to read ICO");
    assert_eq!(ico[6], 0);
    assert_eq!(ico[7], 0);
}

/// Signature mismatch aborts before the output is created
#[test]
fn test_ico_rejects_non_png() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("photo.png");
    let ico_path = dir.path().join("photo.ico");
    std::fs::write(&input, b"\xFF\xD8\xFF\xE0 jpeg bytes").unwrap();

    let out = run(&["ico", path_str(&input), path_str(&ico_path)]);
    assert!(!out.status.success());
    assert!(!ico_path.exists(), "Output must not be created");

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Not a PNG file"), "stderr: {}", stderr);
    assert!(!stderr.contains("IHDR"), "stderr: {}", stderr);
}

/// Misplaced IHDR is reported differently from a bad signature
#[test]
fn test_ico_rejects_missing_ihdr() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("odd.png");
    let ico_path = dir.path().join("odd.ico");
    std::fs::write(&ico_path, b"keep me").unwrap();

    let mut png = generate_test_assets::encode_gradient_png(4, 4).unwrap();
    png[12..16].copy_from_slice(b"gAMA");
    std::fs::write(&input, &png).unwrap();

    let out = run(&["ico", path_str(&input), path_str(&ico_path)]);
    assert!(!out.status.success());
    assert_eq!(std::fs::read(&ico_path).unwrap(), b"keep me");

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("not IHDR"), "stderr: {}", stderr);
    assert!(!stderr.contains("Not a PNG file"), "stderr: {}", stderr);
}

/// Missing positional arguments print usage and do nothing
#[test]
fn test_ico_requires_two_arguments() {
    let dir = tempdir().expect("Failed to create temp dir");
    let png_path = dir.path().join("only.png");
    generate_test_assets::generate_gradient_png(&png_path, 8, 8).unwrap();

    let out = run(&["ico", path_str(&png_path)]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Usage"), "stderr: {}", stderr);

    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

/// Manifest build writes every listed file, then `info` reads them back
#[test]
fn test_manifest_build_and_info() {
    let dir = tempdir().expect("Failed to create temp dir");
    let png_path = dir.path().join("app.png");
    let out_dir = dir.path().join("out");
    let custom_bmp = dir.path().join("custom/side.bmp");
    generate_test_assets::generate_gradient_png(&png_path, 48, 48).unwrap();

    let manifest_path = dir.path().join("winimg.toml");
    std::fs::write(
        &manifest_path,
        format!(
            r#"
[bitmaps.branding]

[bitmaps.side]
width = 10
height = 2
color = [1, 2, 3]
path = '{}'

[icons]
app = '{}'
"#,
            custom_bmp.display(),
            png_path.display()
        ),
    )
    .unwrap();

    let out = run(&["check", path_str(&manifest_path)]);
    assert!(out.status.success(), "check failed: {:?}", out);

    let out = run(&[
        "build",
        path_str(&manifest_path),
        "-o",
        path_str(&out_dir),
    ]);
    assert!(out.status.success(), "build failed: {:?}", out);

    let branding = std::fs::read(out_dir.join("branding.bmp")).unwrap();
    assert_eq!(branding.len(), 154_542);

    let side = std::fs::read(&custom_bmp).unwrap();
    verify_bmp(&side, 10, 2, [1, 2, 3]);

    let ico_path = out_dir.join("app.ico");
    let ico = std::fs::read(&ico_path).unwrap();
    assert_eq!(ico[6], 48);

    let out = run(&["info", path_str(&ico_path)]);
    assert!(out.status.success(), "info failed: {:?}", out);
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("PNG size:       48x48"), "stdout: {}", stdout);

    let out = run(&["info", path_str(&custom_bmp)]);
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("dimensions:         10x2"), "stdout: {}", stdout);
}

#[test]
fn test_check_flags_missing_source() {
    let dir = tempdir().expect("Failed to create temp dir");
    let manifest_path = dir.path().join("winimg.toml");
    std::fs::write(&manifest_path, "[icons]\nlost = 'no/such/file.png'\n").unwrap();

    let out = run(&["check", path_str(&manifest_path)]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Icon 'lost' source not found"), "stderr: {}", stderr);
}

// Run the winimg-export binary
fn run(args: &[&str]) -> Output {
    std::process::Command::new(env!("CARGO_BIN_EXE_winimg-export"))
        .args(args)
        .output()
        .expect("Failed to run winimg-export")
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("Temp path should be UTF-8")
}

// Verify BMP headers and decode it back
fn verify_bmp(data: &[u8], width: u32, height: u32, rgb: [u8; 3]) {
    use winimg_formats::{BmpFileHeader, BmpInfoHeader};

    let file_header = BmpFileHeader::from_bytes(data).expect("Failed to parse file header");
    let info_header =
        BmpInfoHeader::from_bytes(&data[BmpFileHeader::SIZE..]).expect("Failed to parse info");

    assert_eq!(file_header.file_size as usize, data.len());
    assert_eq!(file_header.pixel_offset, 54);
    assert_eq!(info_header.width, width as i32);
    assert_eq!(info_header.height, height as i32);
    assert_eq!(info_header.bits_per_pixel, 24);

    let img = image::load_from_memory_with_format(data, image::ImageFormat::Bmp)
        .expect("BMP should decode")
        .to_rgb8();
    assert_eq!(img.dimensions(), (width, height));
    assert!(img.pixels().all(|p| p.0 == rgb));
}
