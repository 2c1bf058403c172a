//! Test fixture generators

use std::path::Path;

/// RGBA8 gradient PNG encoded with the `png` crate
pub fn encode_gradient_png(width: u32, height: u32) -> Result<Vec<u8>, png::EncodingError> {
    let mut pixels = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            pixels.push((x * 255 / width.max(1)) as u8);
            pixels.push((y * 255 / height.max(1)) as u8);
            pixels.push(128);
            pixels.push(255);
        }
    }

    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&pixels)?;
        writer.finish()?;
    }
    Ok(out)
}

/// Write a gradient PNG to `path`, returning its bytes
pub fn generate_gradient_png(path: &Path, width: u32, height: u32) -> std::io::Result<Vec<u8>> {
    let data = encode_gradient_png(width, height).map_err(std::io::Error::other)?;
    std::fs::write(path, &data)?;
    Ok(data)
}
