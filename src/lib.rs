pub mod chunk;
pub mod config;
pub mod file;
pub mod parser;
pub mod wafer;

use tracing::info;

use chunk::ChunkReport;
use config::{ChunkConfig, WaferMapConfig};

/// Run the wafer-map aggregation job: parse the raw bin file, group die
/// records by wafer, and write the grouped JSON to the configured output path.
///
/// # Errors
///
/// Returns a `String` error if the input cannot be read, a numeric field in a
/// data line fails to parse, or the output file cannot be written.
pub fn run_wafer_map(config: &WaferMapConfig) -> Result<(), String> {
    let report = parser::parse_wafer_bin(&config.input_path)?;
    let dies: usize = report.wafers.iter().map(|w| w.dies.len()).sum();
    info!(
        input = %config.input_path,
        wafers = report.wafers.len(),
        dies,
        "parsed wafer bin file"
    );

    // the configured path is used verbatim, whatever its extension
    let json = report.to_json()?;
    file::ensure_parent_dir(&config.output_path)
        .map_err(|e| format!("Failed to create directory for '{}': {}", config.output_path, e))?;
    std::fs::write(&config.output_path, json)
        .map_err(|e| format!("Failed to write '{}': {}", config.output_path, e))?;
    info!(output = %config.output_path, "wrote wafer map JSON");

    Ok(())
}

/// Run the chunk-splitting job: split the configured binary file into
/// numbered fixed-size part files.
///
/// # Errors
///
/// Returns a `String` error for a zero chunk size, a missing input file, or
/// any I/O failure while writing parts.
pub fn run_chunk(config: &ChunkConfig) -> Result<ChunkReport, String> {
    let report = chunk::split_file(&config.input_path, &config.chunk_path, config.chunk_size)
        .map_err(|e| format!("Failed to chunk '{}': {}", config.input_path, e))?;
    info!(
        input = %config.input_path,
        parts = report.parts.len(),
        total_bytes = report.total_bytes,
        "wrote chunked model parts"
    );
    Ok(report)
}
