//! Language-keyed translation trees.
//!
//! The combined translation file nests sections and keys down to leaf
//! objects that hold one string per language:
//!
//! ```text
//! { "assessment": { "header": { "EN": "DRD Assessment", "PL": "Ocena DRD", ... } } }
//! ```
//!
//! Splitting produces one plain tree per language; merging injects new keys
//! into the combined file.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::config::{
    locale_dir_name, validate_language, LEAF_PROBE_LANGUAGES, LOCALE_FILE_NAME,
    SUPPORTED_LANGUAGES,
};
use crate::error::{HarvesterError, Result};

/// Whether an object is a per-language leaf.
fn is_language_leaf(object: &Map<String, Value>) -> bool {
    LEAF_PROBE_LANGUAGES.iter().all(|lang| object.contains_key(*lang))
}

/// Project a translation tree onto one language.
///
/// Leaf objects become their string for `lang` (empty when the language is
/// missing from that leaf); other objects are projected recursively; any
/// other value is kept as-is.
pub fn split_language(tree: &Value, lang: &str) -> Result<Value> {
    let lang = validate_language(lang)?;
    Ok(project(tree, lang))
}

fn project(value: &Value, lang: &str) -> Value {
    match value {
        Value::Object(object) if is_language_leaf(object) => object
            .get(lang)
            .cloned()
            .unwrap_or_else(|| Value::String(String::new())),
        Value::Object(object) => Value::Object(
            object
                .iter()
                .map(|(key, child)| (key.clone(), project(child, lang)))
                .collect(),
        ),
        other => other.clone(),
    }
}

/// Write `{out_dir}/{lc}/translation.json` for every supported language.
///
/// Returns the written paths in language order.
pub fn split_all(tree: &Value, out_dir: &Path) -> Result<Vec<PathBuf>> {
    ensure_object(tree)?;

    SUPPORTED_LANGUAGES
        .iter()
        .map(|lang| -> Result<PathBuf> {
            let dir = out_dir.join(locale_dir_name(lang));
            fs::create_dir_all(&dir)?;
            let path = dir.join(LOCALE_FILE_NAME);
            let projected = split_language(tree, lang)?;
            fs::write(&path, serde_json::to_string_pretty(&projected)?)?;
            tracing::debug!(lang = %lang, path = %path.display(), "Wrote locale file");
            Ok(path)
        })
        .collect()
}

/// Merge `overrides` into `target`.
///
/// Non-empty objects merge key by key, replacing a non-object target entry;
/// every other override value (including an empty object) overwrites.
pub fn deep_merge(target: &mut Value, overrides: &Value) -> Result<()> {
    let overrides = ensure_object(overrides)?;
    if !target.is_object() {
        *target = Value::Object(Map::new());
    }
    merge_object(target, overrides);
    Ok(())
}

fn merge_object(target: &mut Value, overrides: &Map<String, Value>) {
    let Value::Object(target) = target else {
        return;
    };

    for (key, value) in overrides {
        match value {
            Value::Object(nested) if !nested.is_empty() => {
                let entry = target
                    .entry(key.clone())
                    .or_insert_with(|| Value::Object(Map::new()));
                if !entry.is_object() {
                    *entry = Value::Object(Map::new());
                }
                merge_object(entry, nested);
            }
            _ => {
                target.insert(key.clone(), value.clone());
            }
        }
    }
}

fn ensure_object(value: &Value) -> Result<&Map<String, Value>> {
    value.as_object().ok_or_else(|| {
        HarvesterError::InvalidTranslationTree("root must be a JSON object".to_string())
    })
}

/// Load a translation tree from a JSON file.
pub fn load_tree(path: &Path) -> Result<Value> {
    let json = fs::read_to_string(path)?;
    let tree: Value = serde_json::from_str(&json)?;
    ensure_object(&tree)?;
    Ok(tree)
}

/// Save a translation tree as pretty JSON.
pub fn save_tree(tree: &Value, path: &Path) -> Result<()> {
    fs::write(path, serde_json::to_string_pretty(tree)?)?;
    Ok(())
}
