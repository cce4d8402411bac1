use std::path::{Path, PathBuf};

use egui::ColorImage;

use crate::error::ExportError;

/// Encodes the canvas snapshot as a PNG and writes it next to `path`.
///
/// `.png` is appended to the chosen path unconditionally, so `"art"` becomes
/// `"art.png"` and `"art.png"` becomes `"art.png.png"`. Returns the path
/// actually written.
pub fn export_png(snapshot: &ColorImage, path: &Path) -> Result<PathBuf, ExportError> {
    let [width, height] = snapshot.size;
    if width == 0 || height == 0 {
        return Err(ExportError::EmptyCanvas);
    }

    let mut target = path.as_os_str().to_os_string();
    target.push(".png");
    let target = PathBuf::from(target);

    let mut rgba = Vec::with_capacity(width * height * 4);
    for pixel in &snapshot.pixels {
        rgba.extend_from_slice(&pixel.to_array());
    }
    image::save_buffer(
        &target,
        &rgba,
        width as u32,
        height as u32,
        image::ExtendedColorType::Rgba8,
    )?;

    log::info!("saved {}x{} canvas to {}", width, height, target.display());
    Ok(target)
}
