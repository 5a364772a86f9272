use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Literal prefixes that mark header/comment/noise lines in a raw bin file.
/// Checked in order; any match skips the line.
const SKIP_PREFIXES: [&str; 4] = ["Lot#", "c0=", "~", "c0 "];

// =============================================================================

/// One tested die position, parsed from a single line of the raw bin file.
/// STAGE: CP bin dump
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DieRecord {
    pub lot: String,
    pub wafer: i32,
    pub row: i32,
    pub col: i32,
    pub wafsize: i32,
    pub process: String,
    pub fail_bin: String,
    pub error_bin: String,
    pub group: String,
}

impl DieRecord {
    /// Parse one raw line into a die record.
    ///
    /// Returns `Ok(None)` for lines that are intentionally skipped: blank
    /// lines, recognized header/comment lines, and lines with fewer than 9
    /// whitespace-separated tokens. Tokens beyond the 9th are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if a line has 9 or more tokens but a numeric field
    /// (`wafer`, `row`, `col`, `wafsize`) fails to parse as a base-10 integer.
    pub fn from_line(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        if SKIP_PREFIXES.iter().any(|p| line.starts_with(p)) {
            return Ok(None);
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 9 {
            return Ok(None);
        }

        fn parse_int(field: &str, tok: &str) -> Result<i32, String> {
            tok.parse::<i32>()
                .map_err(|e| format!("Invalid {} '{}': {}", field, tok, e))
        }

        Ok(Some(DieRecord {
            lot: parts[0].to_string(),
            wafer: parse_int("wafer", parts[1])?,
            row: parse_int("row", parts[2])?,
            col: parse_int("col", parts[3])?,
            wafsize: parse_int("wafsize", parts[4])?,
            process: parts[5].to_string(),
            fail_bin: parts[6].to_string(),
            error_bin: parts[7].to_string(),
            group: parts[8].to_string(),
        }))
    }
}

// =============================================================================

/// All die records sharing one wafer id, with the row/col bounding extents
/// computed across the group. `lot` and `wafsize` are copied from the first
/// record seen for the wafer (records in a group are assumed to share them;
/// not validated).
#[derive(Debug, Serialize, Deserialize)]
pub struct WaferSummary {
    pub wafer: i32,
    pub lot: String,
    pub wafsize: i32,
    pub row_min: i32,
    pub row_max: i32,
    pub col_min: i32,
    pub col_max: i32,
    pub dies: Vec<DieRecord>,
}

impl WaferSummary {
    /// Finalize one wafer group: compute extents over `dies` and copy the
    /// lot / wafer size from the first record.
    ///
    /// # Errors
    ///
    /// Returns an error if `dies` is empty (the grouper never produces an
    /// empty group; this guards direct callers).
    pub fn from_dies(wafer: i32, dies: Vec<DieRecord>) -> Result<Self, String> {
        let (lot, wafsize) = match dies.first() {
            Some(first) => (first.lot.clone(), first.wafsize),
            None => return Err(format!("Wafer {} has no die records", wafer)),
        };

        let mut row_min = i32::MAX;
        let mut row_max = i32::MIN;
        let mut col_min = i32::MAX;
        let mut col_max = i32::MIN;
        for die in &dies {
            row_min = row_min.min(die.row);
            row_max = row_max.max(die.row);
            col_min = col_min.min(die.col);
            col_max = col_max.max(die.col);
        }

        Ok(WaferSummary {
            wafer,
            lot,
            wafsize,
            row_min,
            row_max,
            col_min,
            col_max,
            dies,
        })
    }
}

// =============================================================================

/// Ordered wafer summaries for one raw bin file. Serializes as a top-level
/// JSON array; group order follows first occurrence in the input.
#[derive(Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WaferBinReport {
    pub wafers: Vec<WaferSummary>,
}

impl WaferBinReport {
    /// Parse and group the raw bin lines.
    ///
    /// Skipped lines (blank, recognized prefixes, fewer than 9 tokens)
    /// contribute no record. Within a group, die order is input order and
    /// duplicate coordinates are kept.
    ///
    /// # Errors
    ///
    /// Propagates the first numeric-field parse error; the whole run aborts.
    pub fn from_lines(lines: &[String]) -> Result<Self, String> {
        let mut order: Vec<i32> = Vec::new();
        let mut by_wafer: HashMap<i32, Vec<DieRecord>> = HashMap::new();

        for line in lines {
            if let Some(record) = DieRecord::from_line(line)? {
                if !by_wafer.contains_key(&record.wafer) {
                    order.push(record.wafer);
                }
                by_wafer.entry(record.wafer).or_default().push(record);
            }
        }

        let mut wafers = Vec::with_capacity(order.len());
        for wafer_id in order {
            if let Some(dies) = by_wafer.remove(&wafer_id) {
                wafers.push(WaferSummary::from_dies(wafer_id, dies)?);
            }
        }

        Ok(WaferBinReport { wafers })
    }

    /// Serialize to pretty-printed JSON (2-space indent), field names verbatim.
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize wafer report: {}", e))
    }
}
