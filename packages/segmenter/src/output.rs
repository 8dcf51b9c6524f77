//! JSON output generation for the two record streams.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::types::{ClauseRecord, Module, ParsedContract};

/// Serialize clause hierarchy records as a pretty-printed JSON array.
pub fn clauses_to_json(records: &[ClauseRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Serialize modules as a pretty-printed JSON array of `{type, text}`.
pub fn modules_to_json(modules: &[Module]) -> Result<String> {
    Ok(serde_json::to_string_pretty(modules)?)
}

/// Serialize the combined parse result.
pub fn contract_to_json(parsed: &ParsedContract) -> Result<String> {
    Ok(serde_json::to_string_pretty(parsed)?)
}

/// Write a JSON document to a file, appending a trailing newline.
pub fn save_json(path: &Path, json: &str) -> Result<()> {
    fs::write(path, format!("{json}\n"))?;
    Ok(())
}
