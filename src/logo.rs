//! CycleAI brand logo: a banded gradient disc with an infinity motif, a
//! central node and neural-style connection spokes.

use crate::draw;
use anyhow::Result;
use image::{Rgba, RgbaImage};
use std::path::Path;

pub const SIZE: u32 = 1024;
const OUTPUT_FILE: &str = "cycleai_icon.png";

const OUTER_RADIUS: f32 = 460.0;
const BAND_STEP: f32 = 15.0;
const BAND_COUNT: i32 = 20;

const RING_COLOR: Rgba<u8> = Rgba([255, 255, 255, 230]);
const NODE_COLOR: Rgba<u8> = Rgba([193, 71, 233, 255]);
const LINK_COLOR: Rgba<u8> = Rgba([255, 255, 255, 180]);
const PULSE_COLOR: Rgba<u8> = Rgba([0, 255, 255, 150]);

const LINK_WIDTH: f32 = 6.0;
const DOT_RADIUS: f32 = 15.0;

pub fn render_logo() -> RgbaImage {
    let mut img = RgbaImage::new(SIZE, SIZE);
    let c = (SIZE / 2) as f32;

    paint_banded_disc(&mut img, c, c);

    // Infinity motif: two stroked circles meeting at the center.
    draw::stroke_circle(&mut img, c - 100.0, c, 100.0, 25.0, RING_COLOR);
    draw::stroke_circle(&mut img, c + 100.0, c, 100.0, 25.0, RING_COLOR);

    // Central node.
    draw::fill_circle(&mut img, c, c, 40.0, RING_COLOR);
    draw::fill_circle(&mut img, c, c, 30.0, NODE_COLOR);

    paint_links(&mut img, c);
    paint_pulses(&mut img, c);

    img
}

/// Pink-to-blue gradient disc built from 20 concentric bands, fading toward
/// the center. Pixels inside the innermost band keep the final band color.
fn paint_banded_disc(img: &mut RgbaImage, cx: f32, cy: f32) {
    for y in 0..img.height() {
        for x in 0..img.width() {
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;
            let dist = (dx * dx + dy * dy).sqrt();
            let coverage = OUTER_RADIUS - dist;
            if coverage <= 0.0 {
                continue;
            }
            let band = (((OUTER_RADIUS - dist) / BAND_STEP) as i32).min(BAND_COUNT - 1);
            draw::blend_pixel(img, x as i64, y as i64, band_color(band), coverage.min(1.0));
        }
    }
}

fn band_color(band: i32) -> Rgba<u8> {
    let alpha = (255 - band * 8) as u8;
    let (r, g, b) = if band < 7 {
        (255, 107 + band * 10, 157 + band * 5)
    } else if band < 14 {
        (193 - (band - 7) * 15, 71 + (band - 7) * 10, 233)
    } else {
        (79, 70, 229)
    };
    Rgba([r as u8, g as u8, b as u8, alpha])
}

/// Connection spokes in all four directions: a stem to a relay dot, and for
/// the vertical spokes two branches with their own end dots.
fn paint_links(img: &mut RgbaImage, c: f32) {
    for dir in [-1.0f32, 1.0] {
        // vertical stem and branches
        draw::thick_line(img, c, c + dir * 30.0, c, c + dir * 120.0, LINK_WIDTH, LINK_COLOR);
        draw::fill_circle(img, c, c + dir * 120.0, DOT_RADIUS, LINK_COLOR);
        draw::thick_line(
            img,
            c,
            c + dir * 120.0,
            c - 60.0,
            c + dir * 180.0,
            LINK_WIDTH,
            LINK_COLOR,
        );
        draw::thick_line(
            img,
            c,
            c + dir * 120.0,
            c + 60.0,
            c + dir * 180.0,
            LINK_WIDTH,
            LINK_COLOR,
        );
        draw::fill_circle(img, c - 60.0, c + dir * 180.0, DOT_RADIUS, LINK_COLOR);
        draw::fill_circle(img, c + 60.0, c + dir * 180.0, DOT_RADIUS, LINK_COLOR);

        // horizontal arm
        draw::thick_line(img, c + dir * 30.0, c, c + dir * 120.0, c, LINK_WIDTH, LINK_COLOR);
        draw::fill_circle(img, c + dir * 120.0, c, DOT_RADIUS, LINK_COLOR);
    }
}

fn paint_pulses(img: &mut RgbaImage, c: f32) {
    for (dx, dy) in [(1.0f32, 0.0), (0.0, 1.0), (-1.0, 0.0), (0.0, -1.0)] {
        draw::fill_circle(img, c + 350.0 * dx, c + 350.0 * dy, 8.0, PULSE_COLOR);
    }
}

pub fn generate(out_dir: &Path) -> Result<()> {
    let logo = render_logo();
    draw::save_png(&logo, &out_dir.join(OUTPUT_FILE))?;
    println!("CycleAI logo created successfully as {OUTPUT_FILE}");
    Ok(())
}
