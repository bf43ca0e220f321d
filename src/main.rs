use anyhow::Result;
use flow_asset_gen::feature_graphic;
use std::path::Path;

fn main() -> Result<()> {
    feature_graphic::generate(Path::new("."))
}
