//! Config file checks: detect keys missing from an older `itlogbook.conf`
//! and fill them in with their defaults.

use super::{default_notes_width, default_short_date_format};
use crate::errors::{AppError, AppResult};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Every key a current config file is expected to carry.
pub const EXPECTED_KEYS: &[&str] = &["database", "short_date_format", "export_dir", "notes_width"];

fn default_for(key: &str) -> Value {
    match key {
        "short_date_format" => Value::String(default_short_date_format()),
        "notes_width" => Value::Number(default_notes_width().into()),
        "database" => Value::String(super::Config::database_file().to_string_lossy().to_string()),
        _ => Value::String(String::new()),
    }
}

fn read_mapping(path: &Path) -> AppResult<Value> {
    let content = fs::read_to_string(path).map_err(|e| AppError::ConfigLoad(e.to_string()))?;
    let yaml: Value =
        serde_yaml::from_str(&content).map_err(|e| AppError::ConfigLoad(e.to_string()))?;

    if !yaml.is_mapping() {
        return Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        )));
    }
    Ok(yaml)
}

/// Keys from [`EXPECTED_KEYS`] that the file at `path` does not define.
pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
    let yaml = read_mapping(path)?;

    Ok(EXPECTED_KEYS
        .iter()
        .copied()
        .filter(|k| yaml.get(*k).is_none())
        .collect())
}

/// Add every missing key with its default value and rewrite the file.
/// Returns the keys that were added.
pub fn fill_missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
    let mut yaml = read_mapping(path)?;
    let mut added = Vec::new();

    if let Some(map) = yaml.as_mapping_mut() {
        for key in EXPECTED_KEYS {
            let k = Value::String((*key).to_string());
            if !map.contains_key(&k) {
                map.insert(k, default_for(key));
                added.push(*key);
            }
        }
    }

    if !added.is_empty() {
        let serialized =
            serde_yaml::to_string(&yaml).map_err(|e| AppError::ConfigSave(e.to_string()))?;
        fs::write(path, serialized).map_err(|e| AppError::ConfigSave(e.to_string()))?;
    }

    Ok(added)
}
