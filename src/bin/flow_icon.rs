use anyhow::Result;
use flow_asset_gen::flow_icon;
use std::path::Path;

fn main() -> Result<()> {
    flow_icon::generate_icon_set(Path::new("."))
}
