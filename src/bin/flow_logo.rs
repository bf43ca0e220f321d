use anyhow::Result;
use flow_asset_gen::logo;
use std::path::Path;

fn main() -> Result<()> {
    logo::generate(Path::new("."))
}
