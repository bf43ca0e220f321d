use image::{Rgba, RgbaImage};
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const BIN: &str = env!("CARGO_BIN_EXE_flow-asset-gen");

/// End-to-end run with the icon present: the binary must succeed, report the
/// output file, and composite the icon over the gradient.
#[test]
fn test_feature_graphic_with_icon() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let temp_path = temp_dir.path();
    create_test_icon(&temp_path.join("flow_ai_icon_512.png"));

    let output = run_generator(temp_path);
    assert_success(&output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Feature graphic created: flow_ai_feature_graphic.png"));
    assert!(stdout.contains("Size: 1024x500 pixels"));

    let graphic = load_graphic(temp_path);
    assert_eq!(graphic.width(), 1024);
    assert_eq!(graphic.height(), 500);

    // The test icon is a solid red disc: the middle of the 300x300 paste
    // region at (80, 100) must not be the plain gradient.
    let center = graphic.get_pixel(230, 250);
    assert_ne!(*center, gradient_color(250));
    assert!(center[0] > 150, "icon red should dominate, got {center:?}");

    // Transparent icon corners leave the gradient untouched.
    assert_eq!(*graphic.get_pixel(82, 102), gradient_color(102));
}

/// A missing icon is diagnosed on stdout but still produces a complete,
/// valid graphic with the pure gradient in the icon's region.
#[test]
fn test_feature_graphic_without_icon() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let temp_path = temp_dir.path();

    let output = run_generator(temp_path);
    assert_success(&output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Could not load icon"),
        "missing diagnostic in stdout: {stdout}"
    );
    assert!(stdout.contains("Feature graphic created: flow_ai_feature_graphic.png"));

    let graphic = load_graphic(temp_path);
    assert_eq!(graphic.width(), 1024);
    assert_eq!(graphic.height(), 500);

    for y in [100u32, 250, 399] {
        for x in [80u32, 230, 379] {
            assert_eq!(
                *graphic.get_pixel(x, y),
                gradient_color(y),
                "icon region should be pure gradient at ({x}, {y})"
            );
        }
    }
}

/// No randomness, no timestamps: two runs emit byte-identical files.
#[test]
fn test_reruns_are_byte_identical() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let temp_path = temp_dir.path();
    create_test_icon(&temp_path.join("flow_ai_icon_512.png"));

    assert_success(&run_generator(temp_path));
    let first = std::fs::read(temp_path.join("flow_ai_feature_graphic.png"))
        .expect("Failed to read first output");

    assert_success(&run_generator(temp_path));
    let second = std::fs::read(temp_path.join("flow_ai_feature_graphic.png"))
        .expect("Failed to read second output");

    assert_eq!(first, second);
}

fn run_generator(dir: &Path) -> Output {
    Command::new(BIN)
        .current_dir(dir)
        .output()
        .expect("Failed to run flow-asset-gen")
}

fn assert_success(output: &Output) {
    if !output.status.success() {
        eprintln!("stdout: {}", String::from_utf8_lossy(&output.stdout));
        eprintln!("stderr: {}", String::from_utf8_lossy(&output.stderr));
        panic!("flow-asset-gen failed with status: {}", output.status);
    }
}

fn load_graphic(dir: &Path) -> RgbaImage {
    image::open(dir.join("flow_ai_feature_graphic.png"))
        .expect("Failed to load generated graphic")
        .to_rgba8()
}

/// A 512x512 icon with a solid red disc on a transparent background, so both
/// the opaque and the masked paths of the composite are observable.
fn create_test_icon(path: &Path) {
    let mut icon = RgbaImage::new(512, 512);
    for (x, y, pixel) in icon.enumerate_pixels_mut() {
        let dx = x as f32 - 256.0;
        let dy = y as f32 - 256.0;
        if (dx * dx + dy * dy).sqrt() < 200.0 {
            *pixel = Rgba([220, 40, 60, 255]);
        }
    }
    icon.save(path).expect("Failed to save test icon");
}

/// The gradient reference: each channel ramps linearly down the canvas and
/// truncates to an integer.
fn gradient_color(y: u32) -> Rgba<u8> {
    let t = y as f32 / 500.0;
    Rgba([
        (20.0 + t * 40.0) as u8,
        (50.0 + t * 80.0) as u8,
        (100.0 + t * 100.0) as u8,
        255,
    ])
}
