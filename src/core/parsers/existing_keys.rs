//! Loading a previously extracted key list.
//!
//! Two layouts are understood:
//! - a JSON array of strings: `["home.title", "Save changes"]`
//! - a catalog object, nested objects joined with `.`:
//!   `{ "home": { "title": "Home" } }` yields `home.title`

use std::{collections::HashSet, fs, path::Path};

use anyhow::{Context, Result, bail};
use serde_json::Value;

pub fn load_existing_keys(path: &Path) -> Result<HashSet<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read existing keys file: {}", path.display()))?;

    let json: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse existing keys file: {}", path.display()))?;

    parse_existing_keys(&json)
        .with_context(|| format!("Unsupported existing keys file: {}", path.display()))
}

pub fn parse_existing_keys(json: &Value) -> Result<HashSet<String>> {
    let mut keys = HashSet::new();
    match json {
        Value::Array(items) => {
            for item in items {
                match item {
                    Value::String(key) => {
                        keys.insert(key.clone());
                    }
                    other => bail!("Expected an array of strings, found {}", other),
                }
            }
        }
        Value::Object(_) => flatten_keys(json, String::new(), &mut keys),
        _ => bail!("Root must be an array of keys or an object"),
    }
    Ok(keys)
}

/// Every non-object value ends a key path; its value is ignored.
fn flatten_keys(value: &Value, prefix: String, keys: &mut HashSet<String>) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                let new_prefix = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_keys(val, new_prefix, keys);
            }
        }
        _ => {
            if !prefix.is_empty() {
                keys.insert(prefix);
            }
        }
    }
}
