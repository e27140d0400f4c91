use std::path::Path;

use anyhow::Context;
use facet_core::Dimensions;
use serde::Deserialize;

/// Project configuration, usually `facet.toml` at the project root:
///
/// ```toml
/// dimensions = [["dev", "prod", "test"], ["android", "ios"]]
/// filter_dir = true
/// ```
#[derive(Debug, Deserialize)]
pub struct Config {
    pub dimensions: Dimensions,
    #[serde(default)]
    pub filter_dir: bool,
}

pub fn load(path: &Path) -> anyhow::Result<Config> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read config {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("invalid config {}", path.display()))
}
