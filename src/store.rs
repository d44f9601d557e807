use indexmap::IndexMap;
use tracing::warn;

use crate::errors::ParamsResult;
use crate::parser_config::ParamsConfig;
use crate::utils::{clamp_to_i32, format_general, parse_float_prefix, parse_long_prefix};
use crate::validation::EntryValidator;

/// Camera settings exchanged with a device-capability provider
///
/// An ordered string-to-string map. Entries keep the position of their first
/// insertion, so flattening is deterministic; overwriting a key updates it in
/// place. Nothing here ever fails loudly: invalid writes are dropped and missing
/// reads come back as `None` or -1.
#[derive(Debug, Clone, Default)]
pub struct CameraParameters {
    entries: IndexMap<String, String>,
    config: ParamsConfig,
}

impl PartialEq for CameraParameters {
    fn eq(&self, other: &Self) -> bool {
        // order is part of the wire form, IndexMap equality ignores it
        self.entries.len() == other.entries.len() && self.entries.iter().eq(other.entries.iter())
    }
}

impl CameraParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ParamsConfig) -> Self {
        Self {
            entries: IndexMap::new(),
            config,
        }
    }

    pub fn config(&self) -> &ParamsConfig {
        &self.config
    }

    /// Store `value` under `key`, silently ignoring keys or values that contain
    /// `=` or `;`
    pub fn set(&mut self, key: &str, value: &str) {
        if let Err(e) = self.try_set(key, value) {
            warn!("{}", e);
        }
    }

    /// Like [`set`](Self::set), but either argument may be absent, which makes
    /// the call a no-op
    pub fn set_opt(&mut self, key: Option<&str>, value: Option<&str>) {
        if let (Some(key), Some(value)) = (key, value) {
            self.set(key, value);
        }
    }

    /// Store `value` under `key`, reporting why the entry was rejected
    pub fn try_set(&mut self, key: &str, value: &str) -> ParamsResult<()> {
        EntryValidator::validate_entry(key, value)?;

        for (default_key, default_value) in &self.config.implicit_defaults {
            let present = self
                .entries
                .get(default_key)
                .is_some_and(|v| !v.is_empty());
            if present {
                continue;
            }
            // implicit_defaults is public and may bypass with_implicit_default
            if let Err(e) = EntryValidator::validate_entry(default_key, default_value) {
                warn!("skipping implicit default: {}", e);
                continue;
            }
            self.entries
                .insert(default_key.clone(), default_value.clone());
        }

        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    /// Store a base-10 integer
    pub fn set_int(&mut self, key: &str, value: i32) {
        self.set(key, &value.to_string());
    }

    /// Store a float using `%g` style formatting at the configured precision
    pub fn set_float(&mut self, key: &str, value: f32) {
        let formatted = format_general(f64::from(value), self.config.float_precision);
        self.set(key, &formatted);
    }

    /// Value for `key`, or `None` when the key is missing *or* its value is empty
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Integer value for `key` (`0x` hex and leading-zero octal accepted), or -1
    /// when missing. A stored -1 reads back the same as a missing key, and
    /// out-of-range values clamp to the `i32` range.
    pub fn get_int(&self, key: &str) -> i32 {
        match self.get(key) {
            Some(v) => clamp_to_i32(parse_long_prefix(v, 0).0),
            None => -1,
        }
    }

    /// Float value for `key`, or -1.0 when missing
    pub fn get_float(&self, key: &str) -> f32 {
        match self.get(key) {
            Some(v) => parse_float_prefix(v).0,
            None => -1.0,
        }
    }

    /// 64-bit reads are not supported by any provider; always -1
    pub fn get_int64(&self, _key: &str) -> i64 {
        -1
    }

    /// Delete `key` if present, keeping the order of the remaining entries
    pub fn remove(&mut self, key: &str) {
        self.entries.shift_remove(key);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether an entry exists for `key`, even one with an empty value
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Entries in store order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Insert without validation; the decoder trusts what the provider sent
    pub(crate) fn insert_unchecked(&mut self, key: String, value: String) {
        self.entries.insert(key, value);
    }
}
