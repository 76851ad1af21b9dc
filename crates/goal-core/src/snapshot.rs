//! Snapshot Encoding
//!
//! The persisted and exported form of a list is a JSON array of strings.
//! Storage gets the compact form; exported files are pretty-printed.

use serde_json::Value;

use crate::config::BoardConfig;
use crate::domain::{Goal, GoalError, GoalList, GoalResult};

/// A file ready to be handed to the user as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub mime_type: String,
    pub contents: String,
}

/// Compact JSON array, as written to the storage slot.
pub fn encode(list: &GoalList) -> GoalResult<String> {
    Ok(serde_json::to_string(list.as_slice())?)
}

/// Pretty-printed JSON array (2-space indent), as written to export files.
pub fn encode_pretty(list: &GoalList) -> GoalResult<String> {
    Ok(serde_json::to_string_pretty(list.as_slice())?)
}

/// Build the export file for `list`.
pub fn export_file(list: &GoalList, config: &BoardConfig) -> GoalResult<ExportFile> {
    Ok(ExportFile {
        file_name: config.export_file_name.clone(),
        mime_type: config.export_mime_type.clone(),
        contents: encode_pretty(list)?,
    })
}

/// Parse snapshot text into goals.
///
/// Malformed JSON is `GoalError::Parse`; JSON that is not an array of
/// strings is `GoalError::InvalidFormat`. Text is kept as stored; blank
/// entries are dropped.
pub fn decode(contents: &str) -> GoalResult<Vec<Goal>> {
    let value: Value = serde_json::from_str(contents).map_err(GoalError::Parse)?;
    let entries = match value {
        Value::Array(entries) => entries,
        other => {
            return Err(GoalError::InvalidFormat {
                found: json_kind(&other).to_string(),
            })
        }
    };

    let mut goals = Vec::with_capacity(entries.len());
    for entry in entries {
        match entry {
            Value::String(text) => match Goal::from_snapshot(text) {
                Some(goal) => goals.push(goal),
                None => log::warn!("Skipping blank goal in snapshot"),
            },
            other => {
                return Err(GoalError::InvalidFormat {
                    found: format!("array containing {}", json_kind(&other)),
                })
            }
        }
    }
    Ok(goals)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
