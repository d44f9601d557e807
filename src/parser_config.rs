use tracing::warn;

use crate::validation::EntryValidator;

/// Configuration for how a parameter store formats and seeds entries
///
/// Kept separate from the store contents: two stores with different configs but
/// the same entries flatten identically and compare equal.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamsConfig {
    /// Significant digits used by `set_float` (6 matches C's `%g`)
    pub float_precision: usize,

    /// Entries inserted on every accepted `set` when their key is still missing
    ///
    /// Lets a vendor profile seed values the provider expects without the store
    /// knowing anything about that vendor.
    pub implicit_defaults: Vec<(String, String)>,
}

impl Default for ParamsConfig {
    fn default() -> Self {
        Self {
            float_precision: 6,
            implicit_defaults: Vec::new(),
        }
    }
}

impl ParamsConfig {
    /// Profile for Qualcomm providers, which deliver an extra zero-exposure HDR
    /// frame unless `hdr-need-1x` is explicitly false
    pub fn qcom() -> Self {
        Self {
            implicit_defaults: vec![("hdr-need-1x".to_string(), "false".to_string())],
            ..Self::default()
        }
    }

    /// Use a different float precision
    pub fn with_float_precision(mut self, precision: usize) -> Self {
        self.float_precision = precision.max(1);
        self
    }

    /// Add an implicit default entry; entries containing `=` or `;` are dropped
    pub fn with_implicit_default(mut self, key: &str, value: &str) -> Self {
        match EntryValidator::validate_entry(key, value) {
            Ok(()) => self
                .implicit_defaults
                .push((key.to_string(), value.to_string())),
            Err(e) => warn!("ignoring implicit default: {}", e),
        }
        self
    }
}
