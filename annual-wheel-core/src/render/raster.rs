use std::io::Cursor;
use std::sync::Arc;

use anyhow::Context;

use crate::foundation::error::{WheelError, WheelResult};

// Avoid pathological allocations for huge scale factors.
const MAX_DIM: u32 = 16_384;

/// Rasterize an SVG document to PNG bytes, scaling its intrinsic size by `scale`.
#[tracing::instrument(skip(svg), fields(svg_bytes = svg.len()))]
pub fn rasterize_png(svg: &str, scale: f32) -> WheelResult<Vec<u8>> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(WheelError::render(format!(
            "scale must be finite and > 0, got {scale}"
        )));
    }

    let opts = usvg::Options {
        fontdb: Arc::new(system_fontdb()),
        ..Default::default()
    };
    let tree = usvg::Tree::from_str(svg, &opts)
        .map_err(|e| WheelError::render(format!("parse svg: {e}")))?;

    let size = tree.size();
    let width = to_px(size.width() * scale)?;
    let height = to_px(size.height() * scale)?;
    if width > MAX_DIM || height > MAX_DIM {
        return Err(WheelError::render(format!(
            "raster size too large: {width}x{height} (max {MAX_DIM}x{MAX_DIM})"
        )));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| WheelError::render("failed to allocate pixmap"))?;
    let xform = resvg::tiny_skia::Transform::from_scale(scale, scale);
    resvg::render(&tree, xform, &mut pixmap.as_mut());

    let mut rgba = pixmap.take();
    unpremultiply_rgba8_in_place(&mut rgba);
    let img = image::RgbaImage::from_raw(width, height, rgba)
        .ok_or_else(|| WheelError::render("pixmap size mismatch"))?;

    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .context("encode png")?;
    tracing::debug!(width, height, bytes = buf.len(), "png rasterized");
    Ok(buf)
}

fn system_fontdb() -> usvg::fontdb::Database {
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();
    db
}

fn to_px(v: f32) -> WheelResult<u32> {
    if !v.is_finite() || v <= 0.0 {
        return Err(WheelError::render("svg has invalid width/height"));
    }
    Ok((v.ceil() as u32).max(1))
}

/// Convert premultiplied RGBA8 (the pixmap layout) to the straight alpha PNG expects.
pub(crate) fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 || a == 255 {
            continue;
        }
        px[0] = ((px[0] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[1] = ((px[1] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[2] = ((px[2] as u16 * 255 + a / 2) / a).min(255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
