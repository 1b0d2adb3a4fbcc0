use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys every up-to-date configuration file carries.
pub const KNOWN_KEYS: &[&str] = &[
    "database",
    "projects",
    "users",
    "max_hours_per_entry",
    "hours_step",
    "separator_char",
];

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
    match serde_yaml::from_str::<Value>(&content)? {
        Value::Mapping(m) => Ok(m),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        ))),
    }
}

/// Keys missing from the file at `path` (defaults are used for them at load time).
pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
    let map = read_mapping(path)?;
    Ok(KNOWN_KEYS
        .iter()
        .copied()
        .filter(|k| !map.contains_key(Value::String(k.to_string())))
        .collect())
}

/// Keys present in the file but unknown to this version.
pub fn unknown_keys(path: &Path) -> AppResult<Vec<String>> {
    let map = read_mapping(path)?;
    Ok(map
        .keys()
        .filter_map(|k| k.as_str())
        .filter(|k| !KNOWN_KEYS.contains(k))
        .map(str::to_string)
        .collect())
}

/// Rewrite the file with every missing key set to its default, keeping the
/// values already present.
///
/// Ok(true)  → file updated
/// Ok(false) → nothing to do
pub fn migrate_file(path: &Path) -> AppResult<bool> {
    let missing = missing_keys(path)?;
    if missing.is_empty() {
        info("Configuration is up to date.");
        return Ok(false);
    }

    // Serde fills the missing keys with defaults; existing ones survive as-is.
    let cfg = Config::load_from(path)?;
    cfg.save_to(path)?;

    success(format!(
        "Configuration migrated, added: {}",
        missing.join(", ")
    ));
    Ok(true)
}
