//! FlowSense app icon: a radial gradient disc carrying three dashed "flow"
//! rings and a stylized F, exported at the standard marketing sizes.

use crate::draw;
use crate::manifest::AssetManifest;
use anyhow::Result;
use image::{imageops::FilterType, DynamicImage, Rgba, RgbaImage};
use std::path::Path;

pub const MASTER_SIZE: u32 = 1024;
const EXPORT_SIZES: [u32; 5] = [512, 256, 128, 64, 32];

const MASTER_FILE: &str = "flowsense_icon_1024.png";
const CURRENT_FILE: &str = "flowsense_current.png";
const MANIFEST_FILE: &str = "flowsense_icon_manifest.json";

const CENTER_COLOR: Rgba<u8> = Rgba([103, 58, 183, 255]);
const RIM_COLOR: Rgba<u8> = Rgba([240, 98, 146, 255]);
const LIGHT_PINK: Rgba<u8> = Rgba([255, 183, 197, 255]);
const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

const NUM_RINGS: u32 = 3;

/// Render the icon at the given edge length on a transparent background.
pub fn render_icon(size: u32) -> RgbaImage {
    let mut img = RgbaImage::new(size, size);
    let center = size as f32 / 2.0;

    paint_gradient_disc(&mut img, center);
    paint_flow_rings(&mut img, size, center);
    paint_symbol(&mut img, size);

    img
}

fn paint_gradient_disc(img: &mut RgbaImage, center: f32) {
    let radius = center;
    for y in 0..img.height() {
        for x in 0..img.width() {
            let dx = x as f32 - center;
            let dy = y as f32 - center;
            let dist = (dx * dx + dy * dy).sqrt();
            let coverage = radius - dist;
            if coverage <= 0.0 {
                continue;
            }
            let color = draw::lerp_color(CENTER_COLOR, RIM_COLOR, (dist / radius).min(1.0));
            draw::blend_pixel(img, x as i64, y as i64, color, coverage.min(1.0));
        }
    }
}

/// Concentric dashed rings. Dashes are 14 degrees wide, centered on every
/// multiple of 15 degrees except the last third of each 45 degree cycle.
fn paint_flow_rings(img: &mut RgbaImage, size: u32, center: f32) {
    for ring in 0..NUM_RINGS {
        let ring_radius = center * 0.3 + ring as f32 * (center * 0.15);
        let half_thickness = size as f32 / 40.0 / 2.0;
        let ratio = ring as f32 / (NUM_RINGS - 1) as f32;
        let mut color = draw::lerp_color(WHITE, LIGHT_PINK, ratio);
        color[3] = (200 - ring * 50) as u8;

        let outer = ring_radius + half_thickness;
        let x0 = (center - outer).floor() as i64;
        let x1 = (center + outer).ceil() as i64;
        let y0 = (center - outer).floor() as i64;
        let y1 = (center + outer).ceil() as i64;

        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f32 - center;
                let dy = y as f32 - center;
                let dist = (dx * dx + dy * dy).sqrt();
                let coverage = half_thickness - (dist - ring_radius).abs();
                if coverage <= 0.0 {
                    continue;
                }
                let angle = dy.atan2(dx).to_degrees().rem_euclid(360.0);
                let sector = (angle / 15.0).round() * 15.0;
                if (angle - sector).abs() > 7.0 || sector.rem_euclid(45.0) >= 30.0 {
                    continue;
                }
                draw::blend_pixel(img, x, y, color, coverage.min(1.0));
            }
        }
    }
}

fn paint_symbol(img: &mut RgbaImage, size: u32) {
    let center = (size / 2) as i64;
    let symbol_size = (size / 6) as i64;
    let thickness = (size / 40) as i64;
    let x = center - symbol_size / 3;
    let y = center - symbol_size / 2;

    // F: vertical bar, full-width top bar, short middle bar
    draw::fill_rect(img, x, y, thickness as u32, symbol_size as u32, WHITE);
    draw::fill_rect(img, x, y, (symbol_size / 2) as u32, thickness as u32, WHITE);
    let middle_y = y + symbol_size / 3;
    draw::fill_rect(img, x, middle_y, (symbol_size / 3) as u32, thickness as u32, WHITE);

    // Soft glow around the vertical bar.
    for layer in 0..5i64 {
        let alpha = (30 - layer * 5) as u8;
        let expand = layer * 2;
        draw::fill_rect(
            img,
            x - expand,
            y - expand,
            (thickness + 2 * expand) as u32,
            (symbol_size + 2 * expand) as u32,
            Rgba([255, 255, 255, alpha]),
        );
    }
}

/// Render the master icon and write the whole export set plus its manifest
/// into `out_dir`.
pub fn generate_icon_set(out_dir: &Path) -> Result<()> {
    println!("Creating FlowSense app icon...");
    let master = render_icon(MASTER_SIZE);
    let mut manifest = AssetManifest::new("flow-asset-gen");

    draw::save_png(&master, &out_dir.join(MASTER_FILE))?;
    manifest.add_image(MASTER_FILE, MASTER_SIZE, MASTER_SIZE);
    println!("✓ Created {MASTER_FILE}");

    let source = DynamicImage::ImageRgba8(master.clone());
    for size in EXPORT_SIZES {
        let filename = format!("flowsense_icon_{size}.png");
        let resized = source.resize_exact(size, size, FilterType::Lanczos3);
        draw::save_png(&resized.to_rgba8(), &out_dir.join(&filename))?;
        manifest.add_image(&filename, size, size);
        println!("✓ Created {filename}");
    }

    draw::save_png(&master, &out_dir.join(CURRENT_FILE))?;
    manifest.add_image(CURRENT_FILE, MASTER_SIZE, MASTER_SIZE);
    println!("✓ Updated {CURRENT_FILE}");

    manifest.write(&out_dir.join(MANIFEST_FILE))?;
    println!("✓ Wrote {MANIFEST_FILE}");

    Ok(())
}
