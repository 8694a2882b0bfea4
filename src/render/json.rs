//! JSON rendering for analysis reports.

use crate::analysis::AnalysisReport;
use crate::error::{Error, Result};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a report to JSON.
pub fn to_json(report: &AnalysisReport, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(report),
        JsonFormat::Compact => serde_json::to_string(report),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

/// Parse a report previously rendered with [`to_json`].
pub fn from_json(json: &str) -> Result<AnalysisReport> {
    serde_json::from_str(json).map_err(|e| Error::Render(format!("invalid report JSON: {}", e)))
}
