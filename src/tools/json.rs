//! JSON validation and pretty-printing.

use serde::Deserialize;
use serde_json::Value;

use crate::error::ToolError;

use super::outcome::FormatOutcome;

/// Parse `raw` as JSON and re-serialize it with two-space indentation.
///
/// Object keys keep their input order and numbers keep their source text
/// (`-0`, `1e400` and integers wider than 64 bits are not rewritten). The
/// output is a fixed point: formatting already-formatted text returns it
/// unchanged.
pub fn format(raw: &str) -> FormatOutcome {
    try_format(raw).into()
}

fn try_format(raw: &str) -> Result<String, ToolError> {
    let mut de = serde_json::Deserializer::from_str(raw);
    // Nesting depth is bounded by the heap, not by serde_json's default of 128.
    de.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(serde_json::to_string_pretty(&value)?)
}
