//! Rasterizes a [`Scene`] into a supersampled PNG

use crate::rendering::paint::Scene;
use crate::{Error, Result};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{self, fontdb};
use std::sync::Arc;

/// Encoded PNG plus the pixel size it was rasterized at.
#[derive(Debug, Clone)]
pub struct Raster {
    pub pixel_width: u32,
    pub pixel_height: u32,
    pub png_data: Vec<u8>,
}

/// Paint `scene` at `scale` device pixels per logical pixel.
///
/// Text uses `fonts`; an empty database renders every shape and skips glyphs.
pub fn rasterize(
    scene: &Scene,
    scale: f32,
    fonts: Arc<fontdb::Database>,
    default_family: &str,
) -> Result<Raster> {
    if !(scale.is_finite() && scale > 0.0) {
        return Err(Error::RenderError(format!("invalid supersampling scale {}", scale)));
    }

    let svg = scene.to_svg();
    let mut options = usvg::Options::default();
    options.fontdb = fonts;
    options.font_family = default_family.to_string();

    let tree = usvg::Tree::from_str(&svg, &options)
        .map_err(|e| Error::RenderError(format!("Failed to build scene: {}", e)))?;

    let pixel_width = (scene.width.ceil() * scale).round().max(1.0) as u32;
    let pixel_height = (scene.height.ceil() * scale).round().max(1.0) as u32;
    let mut pixmap = Pixmap::new(pixel_width, pixel_height).ok_or_else(|| {
        Error::RenderError(format!(
            "Failed to allocate {}x{} pixmap",
            pixel_width, pixel_height
        ))
    })?;

    resvg::render(&tree, Transform::from_scale(scale, scale), &mut pixmap.as_mut());

    let png_data = pixmap
        .encode_png()
        .map_err(|e| Error::EncodeError(e.to_string()))?;

    Ok(Raster {
        pixel_width,
        pixel_height,
        png_data,
    })
}
