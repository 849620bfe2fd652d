use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const PREFERENCES_FILE_NAME: &str = "overlay_prefs.json";
const APP_DIR_NAME: &str = "touch_overlay";

/// A single stored preference value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrefValue {
    Bool(bool),
    Int(i64),
    Float(f64),
}

/// Opaque key-value backend behind the layout store.
///
/// `put_*` only stage values in memory; nothing is durable until `flush`
/// returns `Ok`.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<PrefValue>;
    fn put(&mut self, key: &str, value: PrefValue);
    fn flush(&mut self) -> Result<()>;

    fn get_bool(&self, key: &str) -> Option<bool> {
        match self.get(key)? {
            PrefValue::Bool(value) => Some(value),
            _ => None,
        }
    }

    fn get_int(&self, key: &str) -> Option<i64> {
        match self.get(key)? {
            PrefValue::Int(value) => Some(value),
            _ => None,
        }
    }

    fn get_float(&self, key: &str) -> Option<f64> {
        match self.get(key)? {
            PrefValue::Float(value) => Some(value),
            PrefValue::Int(value) => Some(value as f64),
            PrefValue::Bool(_) => None,
        }
    }

    fn put_bool(&mut self, key: &str, value: bool) {
        self.put(key, PrefValue::Bool(value));
    }

    fn put_int(&mut self, key: &str, value: i64) {
        self.put(key, PrefValue::Int(value));
    }

    fn put_float(&mut self, key: &str, value: f64) {
        self.put(key, PrefValue::Float(value));
    }
}

impl<P: PreferenceStore + ?Sized> PreferenceStore for Box<P> {
    fn get(&self, key: &str) -> Option<PrefValue> {
        (**self).get(key)
    }

    fn put(&mut self, key: &str, value: PrefValue) {
        (**self).put(key, value)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }
}

/// In-memory preferences. Flushes succeed unless the store was told to
/// reject them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryPreferences {
    values: BTreeMap<String, PrefValue>,
    fail_flush: bool,
    flush_count: usize,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent `flush` fail, simulating an unwritable store.
    pub fn set_fail_flush(&mut self, fail: bool) {
        self.fail_flush = fail;
    }

    pub fn flush_count(&self) -> usize {
        self.flush_count
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<PrefValue> {
        self.values.get(key).copied()
    }

    fn put(&mut self, key: &str, value: PrefValue) {
        self.values.insert(key.to_string(), value);
    }

    fn flush(&mut self) -> Result<()> {
        if self.fail_flush {
            return Err(anyhow!("in-memory preferences rejected flush"));
        }
        self.flush_count += 1;
        Ok(())
    }
}

/// Preferences persisted as one JSON object on disk.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonPreferences {
    path: PathBuf,
    values: BTreeMap<String, PrefValue>,
}

impl JsonPreferences {
    /// Opens the store at `path`. A missing or blank file yields an empty
    /// store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = load_values(&path)?;
        Ok(Self { path, values })
    }

    /// Opens the store at its default location in the user config folder.
    pub fn open_default() -> Result<Self> {
        Self::open(default_preferences_path()?)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for JsonPreferences {
    fn get(&self, key: &str) -> Option<PrefValue> {
        self.values.get(key).copied()
    }

    fn put(&mut self, key: &str, value: PrefValue) {
        self.values.insert(key.to_string(), value);
    }

    fn flush(&mut self) -> Result<()> {
        save_values(&self.path, &self.values)
    }
}

pub fn default_preferences_path() -> Result<PathBuf> {
    let config_dir =
        dirs_next::config_dir().ok_or_else(|| anyhow!("no user config directory available"))?;
    Ok(config_dir.join(APP_DIR_NAME).join(PREFERENCES_FILE_NAME))
}

fn load_values(path: &Path) -> Result<BTreeMap<String, PrefValue>> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("read overlay preferences {}", path.display()))?;

    if content.trim().is_empty() {
        return Ok(BTreeMap::new());
    }

    serde_json::from_str(&content)
        .with_context(|| format!("deserialize overlay preferences {}", path.display()))
}

fn save_values(path: &Path, values: &BTreeMap<String, PrefValue>) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create preferences parent folder {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(values).context("serialize overlay preferences")?;
    std::fs::write(path, json)
        .with_context(|| format!("write overlay preferences {}", path.display()))
}
