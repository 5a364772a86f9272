//! Job configurations for the data-preparation runs.
//!
//! Paths are explicit per-job values injected by the caller (CLI flags or a
//! JSON config file), never hard-coded constants.

use serde::{Deserialize, Serialize};
use std::fs;

/// Configuration for the wafer-map aggregation job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaferMapConfig {
    /// Path to the raw whitespace-delimited wafer bin file.
    pub input_path: String,

    /// Destination path for the grouped JSON (created/overwritten).
    pub output_path: String,
}

/// Configuration for the model chunk-splitting job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkConfig {
    /// Path to the binary model file to split.
    pub input_path: String,

    /// Part files are written as `<chunk_path>.part0`, `.part1`, ...
    pub chunk_path: String,

    /// Size of each part in bytes.
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
}

fn default_chunk_size() -> usize {
    crate::chunk::DEFAULT_CHUNK_SIZE
}

impl WaferMapConfig {
    /// Load a wafer-map job config from a JSON file.
    pub fn from_json_file(path: &str) -> Result<Self, String> {
        read_config_json(path)
    }
}

impl ChunkConfig {
    /// Load a chunk job config from a JSON file.
    pub fn from_json_file(path: &str) -> Result<Self, String> {
        read_config_json(path)
    }
}

fn read_config_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, String> {
    let text =
        fs::read_to_string(path).map_err(|e| format!("Failed to read config '{}': {}", path, e))?;
    serde_json::from_str(&text).map_err(|e| format!("Invalid config '{}': {}", path, e))
}
