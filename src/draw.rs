use anyhow::{Context, Result};
use image::{Rgba, RgbaImage};
use std::fs::File;
use std::path::Path;

/// Source-over blend of `color` into the pixel at (x, y), scaled by
/// `coverage` in [0, 1]. Coordinates outside the canvas are ignored.
pub fn blend_pixel(img: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>, coverage: f32) {
    if x < 0 || y < 0 || x >= img.width() as i64 || y >= img.height() as i64 {
        return;
    }

    let src_a = (color[3] as f32 / 255.0) * coverage.clamp(0.0, 1.0);
    if src_a <= 0.0 {
        return;
    }

    let dst = img.get_pixel_mut(x as u32, y as u32);
    let dst_a = dst[3] as f32 / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);

    for c in 0..3 {
        let blended = (color[c] as f32 * src_a + dst[c] as f32 * dst_a * (1.0 - src_a)) / out_a;
        dst[c] = blended.round() as u8;
    }
    dst[3] = (out_a * 255.0).round() as u8;
}

/// Channel-wise linear interpolation between two colors, truncated to
/// integers.
pub fn lerp_color(a: Rgba<u8>, b: Rgba<u8>, t: f32) -> Rgba<u8> {
    let mut out = [0u8; 4];
    for c in 0..4 {
        out[c] = (a[c] as f32 + (b[c] as f32 - a[c] as f32) * t) as u8;
    }
    Rgba(out)
}

/// Fill the whole canvas with a vertical gradient. Every pixel of row y gets
/// the color at t = y / height, so rows are uniform and the ramp never quite
/// reaches `bottom`.
pub fn vertical_gradient(img: &mut RgbaImage, top: Rgba<u8>, bottom: Rgba<u8>) {
    let height = img.height();
    for y in 0..height {
        let row_color = lerp_color(top, bottom, y as f32 / height as f32);
        for x in 0..img.width() {
            img.put_pixel(x, y, row_color);
        }
    }
}

pub fn fill_rect(img: &mut RgbaImage, x: i64, y: i64, width: u32, height: u32, color: Rgba<u8>) {
    for dy in 0..height as i64 {
        for dx in 0..width as i64 {
            blend_pixel(img, x + dx, y + dy, color, 1.0);
        }
    }
}

/// Filled circle with a one-pixel antialiased rim.
pub fn fill_circle(img: &mut RgbaImage, cx: f32, cy: f32, radius: f32, color: Rgba<u8>) {
    let x0 = (cx - radius).floor() as i64;
    let x1 = (cx + radius).ceil() as i64;
    let y0 = (cy - radius).floor() as i64;
    let y1 = (cy + radius).ceil() as i64;

    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;
            let coverage = radius - (dx * dx + dy * dy).sqrt();
            if coverage > 0.0 {
                blend_pixel(img, x, y, color, coverage.min(1.0));
            }
        }
    }
}

/// Circle outline of the given stroke width, antialiased on both edges.
pub fn stroke_circle(
    img: &mut RgbaImage,
    cx: f32,
    cy: f32,
    radius: f32,
    width: f32,
    color: Rgba<u8>,
) {
    let half = width / 2.0;
    let outer = radius + half;
    let x0 = (cx - outer).floor() as i64;
    let x1 = (cx + outer).ceil() as i64;
    let y0 = (cy - outer).floor() as i64;
    let y1 = (cy + outer).ceil() as i64;

    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;
            let dist = (dx * dx + dy * dy).sqrt();
            let coverage = half - (dist - radius).abs();
            if coverage > 0.0 {
                blend_pixel(img, x, y, color, coverage.min(1.0));
            }
        }
    }
}

/// Thick line segment with round caps.
pub fn thick_line(
    img: &mut RgbaImage,
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    width: f32,
    color: Rgba<u8>,
) {
    let half = width / 2.0;
    let pad = half.ceil() as i64 + 1;
    let bx0 = x0.min(x1) as i64 - pad;
    let bx1 = x0.max(x1) as i64 + pad;
    let by0 = y0.min(y1) as i64 - pad;
    let by1 = y0.max(y1) as i64 + pad;

    let vx = x1 - x0;
    let vy = y1 - y0;
    let len2 = vx * vx + vy * vy;

    for y in by0..=by1 {
        for x in bx0..=bx1 {
            let px = x as f32;
            let py = y as f32;
            let t = if len2 == 0.0 {
                0.0
            } else {
                ((px - x0) * vx + (py - y0) * vy) / len2
            }
            .clamp(0.0, 1.0);
            let dx = px - (x0 + t * vx);
            let dy = py - (y0 + t * vy);
            let coverage = half - (dx * dx + dy * dy).sqrt();
            if coverage > 0.0 {
                blend_pixel(img, x, y, color, coverage.min(1.0));
            }
        }
    }
}

pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    image
        .write_to(&mut file, image::ImageOutputFormat::Png)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
