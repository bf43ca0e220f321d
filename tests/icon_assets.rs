use flow_asset_gen::{flow_icon, logo};
use image::Rgba;
use tempfile::TempDir;

#[test]
fn flow_icon_master_layout() {
    let icon = flow_icon::render_icon(1024);
    assert_eq!(icon.width(), 1024);
    assert_eq!(icon.height(), 1024);

    // Transparent outside the disc, opaque inside.
    assert_eq!(icon.get_pixel(2, 2)[3], 0);
    assert_eq!(icon.get_pixel(1021, 2)[3], 0);
    assert_eq!(icon.get_pixel(512, 512)[3], 255);

    // The vertical bar of the F is solid white.
    assert_eq!(*icon.get_pixel(460, 450), Rgba([255, 255, 255, 255]));

    // Innermost flow ring: a dash sits on the 0-degree axis, a gap near 80
    // degrees. The ring radius at 1024 is ~154.
    let dash = icon.get_pixel(512 + 154, 512);
    assert!(dash[0] > 200, "dash should be white-tinted, got {dash:?}");
    let gap = icon.get_pixel(512 + 27, 512 + 152);
    assert!(gap[0] < 180, "gap should stay gradient, got {gap:?}");
}

#[test]
fn icon_set_writes_all_files_and_manifest() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let out = temp_dir.path();

    flow_icon::generate_icon_set(out).expect("icon set generation failed");

    for name in [
        "flowsense_icon_1024.png",
        "flowsense_icon_512.png",
        "flowsense_icon_256.png",
        "flowsense_icon_128.png",
        "flowsense_icon_64.png",
        "flowsense_icon_32.png",
        "flowsense_current.png",
    ] {
        assert!(out.join(name).exists(), "{name} missing");
    }

    let manifest: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(out.join("flowsense_icon_manifest.json"))
            .expect("Failed to read manifest"),
    )
    .expect("manifest should be valid JSON");

    assert_eq!(manifest["generator"], "flow-asset-gen");
    assert_eq!(manifest["version"], 1);

    let images = manifest["images"].as_array().expect("images array");
    assert_eq!(images.len(), 7);
    for entry in images {
        let filename = entry["filename"].as_str().expect("filename");
        let img = image::open(out.join(filename))
            .unwrap_or_else(|e| panic!("Failed to open {filename}: {e}"));
        assert_eq!(u64::from(img.width()), entry["width"].as_u64().unwrap());
        assert_eq!(u64::from(img.height()), entry["height"].as_u64().unwrap());
    }
}

#[test]
fn logo_canvas_layout() {
    let img = logo::render_logo();
    assert_eq!(img.width(), 1024);
    assert_eq!(img.height(), 1024);

    // Corners are outside the disc.
    assert_eq!(img.get_pixel(2, 2)[3], 0);
    assert_eq!(img.get_pixel(1021, 1021)[3], 0);

    // Central node is the opaque purple disc.
    assert_eq!(*img.get_pixel(512, 512), Rgba([193, 71, 233, 255]));

    // Left infinity ring passes through (312, 512).
    let ring = img.get_pixel(312, 512);
    assert!(ring[0] > 200, "ring should be white-tinted, got {ring:?}");

    // Cyan pulse on the 0-degree axis.
    let pulse = img.get_pixel(512 + 350, 512);
    assert!(
        pulse[1] > 150 && pulse[2] > 150,
        "pulse should be cyan-tinted, got {pulse:?}"
    );
}

#[test]
fn logo_generate_writes_png() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    logo::generate(temp_dir.path()).expect("logo generation failed");

    let img = image::open(temp_dir.path().join("cycleai_icon.png"))
        .expect("Failed to load generated logo");
    assert_eq!(img.width(), 1024);
    assert_eq!(img.height(), 1024);
}
