use crate::config::{CONFIG_KEYS, Config};
use crate::db::migrate::mark_applied;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::Connection;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    if !path.exists() {
        return Err(AppError::Config(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let content = fs::read_to_string(path)?;
    match serde_yaml::from_str::<Value>(&content)? {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "Configuration file is not a YAML mapping: {}",
            path.display()
        ))),
    }
}

/// Keys known to the current version but absent from the file.
pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
    let map = read_mapping(path)?;
    Ok(CONFIG_KEYS
        .iter()
        .copied()
        .filter(|k| !map.contains_key(Value::String((*k).to_string())))
        .collect())
}

/// Add missing keys with their default value and record one
/// `migration_applied` row per key.
pub fn run_config_migration(conn: &Connection, path: &Path) -> AppResult<Vec<&'static str>> {
    let mut map = read_mapping(path)?;

    let defaults = match serde_yaml::to_value(Config::default())? {
        Value::Mapping(m) => m,
        _ => return Err(AppError::Config("default configuration is not a mapping".into())),
    };

    let mut added = Vec::new();
    for key in CONFIG_KEYS {
        let k = Value::String((*key).to_string());
        if map.contains_key(&k) {
            continue;
        }
        if let Some(v) = defaults.get(&k) {
            map.insert(k, v.clone());
            added.push(*key);
        }
    }

    if added.is_empty() {
        return Ok(added);
    }

    fs::write(path, serde_yaml::to_string(&Value::Mapping(map))?)?;

    for key in &added {
        let version = format!("config_add_{key}");
        mark_applied(conn, &version, &format!("Added '{key}' to configuration"))?;
    }

    success(format!(
        "Configuration migrated, added: {}",
        added.join(", ")
    ));

    Ok(added)
}
