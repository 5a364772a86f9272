
use crate::file::read_txt_lossy;
use crate::wafer::ds::WaferBinReport;

/// Parse a raw wafer bin file into grouped wafer summaries.
///
/// The file is read with permissive decoding, then parsed line by line and
/// grouped by wafer id in first-occurrence order.
pub fn parse_wafer_bin(path: &str) -> Result<WaferBinReport, String> {
    let lines =
        read_txt_lossy(path).map_err(|e| format!("Failed to read bin file '{}': {}", path, e))?;
    WaferBinReport::from_lines(&lines)
        .map_err(|e| format!("Failed to parse bin file '{}': {}", path, e))
}
