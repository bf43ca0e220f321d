//! Font loading and text drawing for the generators.
//!
//! One platform font is loaded at most once per run; when it is unavailable
//! every text block falls back to a compiled-in 8x8 bitmap face.

use crate::draw;
use font8x8::legacy::BASIC_LEGACY;
use image::{Rgba, RgbaImage};
use rusttype::{point, Font, Scale};
use std::fs;

#[cfg(target_os = "macos")]
const SYSTEM_FONT_PATH: &str = "/System/Library/Fonts/Helvetica.ttc";
#[cfg(target_os = "windows")]
const SYSTEM_FONT_PATH: &str = "C:\\Windows\\Fonts\\arialbd.ttf";
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const SYSTEM_FONT_PATH: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf";

// The fallback face renders each font bit as a DOT x DOT square and ignores
// the requested point size.
const DOT: u32 = 2;
const CELL: i64 = (8 * DOT) as i64;
const LEADING: i64 = 2;

/// A face to draw with: the platform font when it could be loaded, otherwise
/// the built-in bitmap face.
pub enum FontFace {
    Truetype(Font<'static>),
    Bitmap,
}

/// Load the platform font. Any failure selects the fallback face; there is
/// no retry and no second candidate.
pub fn load_font() -> FontFace {
    match load_system_font() {
        Some(font) => FontFace::Truetype(font),
        None => FontFace::Bitmap,
    }
}

fn load_system_font() -> Option<Font<'static>> {
    let data = fs::read(SYSTEM_FONT_PATH).ok()?;
    // Index 0 also covers .ttc collections such as Helvetica on macOS.
    Font::try_from_vec_and_index(data, 0)
}

/// Draw `text` with the top-left corner of its first line at (x, y). Lines
/// are separated by '\n'.
pub fn draw_text(
    img: &mut RgbaImage,
    text: &str,
    x: f32,
    y: f32,
    size: f32,
    color: Rgba<u8>,
    face: &FontFace,
) {
    match face {
        FontFace::Truetype(font) => draw_truetype(img, text, x, y, size, color, font),
        FontFace::Bitmap => draw_bitmap(img, text, x, y, color),
    }
}

fn draw_truetype(
    img: &mut RgbaImage,
    text: &str,
    x: f32,
    y: f32,
    size: f32,
    color: Rgba<u8>,
    font: &Font<'_>,
) {
    let scale = Scale::uniform(size);
    let v_metrics = font.v_metrics(scale);
    let line_height = v_metrics.ascent - v_metrics.descent + v_metrics.line_gap;

    for (line_no, line) in text.lines().enumerate() {
        let baseline = y + v_metrics.ascent + line_height * line_no as f32;
        for glyph in font.layout(line, scale, point(x, baseline)) {
            if let Some(bb) = glyph.pixel_bounding_box() {
                glyph.draw(|gx, gy, coverage| {
                    draw::blend_pixel(
                        img,
                        bb.min.x as i64 + gx as i64,
                        bb.min.y as i64 + gy as i64,
                        color,
                        coverage,
                    );
                });
            }
        }
    }
}

fn draw_bitmap(img: &mut RgbaImage, text: &str, x: f32, y: f32, color: Rgba<u8>) {
    for (line_no, line) in text.lines().enumerate() {
        let top = y as i64 + line_no as i64 * (CELL + LEADING);
        let mut pen_x = x as i64;
        for ch in line.chars() {
            // Glyphs outside the basic range advance without ink.
            if let Some(glyph) = BASIC_LEGACY.get(ch as usize) {
                for (gy, bits) in glyph.iter().enumerate() {
                    for gx in 0..8u32 {
                        if *bits & (1 << gx) == 0 {
                            continue;
                        }
                        for sy in 0..DOT {
                            for sx in 0..DOT {
                                draw::blend_pixel(
                                    img,
                                    pen_x + (gx * DOT + sx) as i64,
                                    top + (gy as u32 * DOT + sy) as i64,
                                    color,
                                    1.0,
                                );
                            }
                        }
                    }
                }
            }
            pen_x += CELL;
        }
    }
}
