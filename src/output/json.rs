//! JSON output formatting for result records.

use serde::Serialize;

/// Render any result record as pretty-printed JSON.
pub fn to_json<T: Serialize>(report: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
