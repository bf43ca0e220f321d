//! The 1024x500 Play Store feature graphic: gradient background, app icon
//! on the left, static text on the right.

use crate::draw;
use crate::text;
use anyhow::Result;
use image::{imageops, imageops::FilterType, Rgba, RgbaImage};
use std::path::Path;

pub const WIDTH: u32 = 1024;
pub const HEIGHT: u32 = 500;

pub const ICON_FILE: &str = "flow_ai_icon_512.png";
pub const OUTPUT_FILE: &str = "flow_ai_feature_graphic.png";

const GRADIENT_TOP: Rgba<u8> = Rgba([20, 50, 100, 255]);
const GRADIENT_BOTTOM: Rgba<u8> = Rgba([60, 130, 200, 255]);

const ICON_SIZE: u32 = 300;
const ICON_X: i64 = 80;
const ICON_Y: i64 = ((HEIGHT - ICON_SIZE) / 2) as i64;

const TEXT_X: f32 = 420.0;
const TITLE_Y: f32 = 120.0;
const SUBTITLE_Y: f32 = 200.0;
const DESCRIPTION_Y: f32 = 280.0;

const TITLE: &str = "Flow AI";
const SUBTITLE: &str = "AI-Powered Health Insights";
const DESCRIPTION: &str = "Personalized wellness tracking\nwith intelligent recommendations";

const TITLE_SIZE: f32 = 60.0;
const BODY_SIZE: f32 = 32.0;

const TITLE_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);
const SUBTITLE_COLOR: Rgba<u8> = Rgba([200, 220, 255, 255]);
const DESCRIPTION_COLOR: Rgba<u8> = Rgba([180, 200, 255, 255]);

/// Background color of row y, identical across the row.
pub fn gradient_row_color(y: u32) -> Rgba<u8> {
    draw::lerp_color(GRADIENT_TOP, GRADIENT_BOTTOM, y as f32 / HEIGHT as f32)
}

/// Compose the full canvas: gradient, icon, text. A missing or unreadable
/// icon is reported on stdout and the graphic is produced without it.
pub fn render(icon_path: &Path) -> RgbaImage {
    let mut canvas = RgbaImage::new(WIDTH, HEIGHT);
    draw::vertical_gradient(&mut canvas, GRADIENT_TOP, GRADIENT_BOTTOM);

    match image::open(icon_path) {
        Ok(icon) => {
            let icon = icon.resize_exact(ICON_SIZE, ICON_SIZE, FilterType::Lanczos3);
            imageops::overlay(&mut canvas, &icon.to_rgba8(), ICON_X, ICON_Y);
        }
        Err(err) => println!("Could not load icon: {err}"),
    }

    let face = text::load_font();
    text::draw_text(&mut canvas, TITLE, TEXT_X, TITLE_Y, TITLE_SIZE, TITLE_COLOR, &face);
    text::draw_text(&mut canvas, SUBTITLE, TEXT_X, SUBTITLE_Y, BODY_SIZE, SUBTITLE_COLOR, &face);
    text::draw_text(
        &mut canvas,
        DESCRIPTION,
        TEXT_X,
        DESCRIPTION_Y,
        BODY_SIZE,
        DESCRIPTION_COLOR,
        &face,
    );

    canvas
}

/// Generate the feature graphic in `dir`, reading the icon from the same
/// directory.
pub fn generate(dir: &Path) -> Result<()> {
    let canvas = render(&dir.join(ICON_FILE));
    draw::save_png(&canvas, &dir.join(OUTPUT_FILE))?;

    println!("Feature graphic created: {OUTPUT_FILE}");
    println!("Size: {WIDTH}x{HEIGHT} pixels");
    Ok(())
}
