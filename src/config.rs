//! JSON configuration for the demo binary.

use crate::params::VpParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct DemoConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub params: VpParams,
    pub output: DemoOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct DemoOutputConfig {
    #[serde(default)]
    pub overlay_image: Option<PathBuf>,
    pub result_json: PathBuf,
}

pub fn load_config(path: &Path) -> Result<DemoConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
