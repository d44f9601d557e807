//! Diagnostic listings of a parameter store
//!
//! None of this is part of the wire contract. Every listing walks entries in
//! store order.

use std::io::Write;

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::debug;

use crate::errors::ParamsResult;
use crate::store::CameraParameters;

impl CameraParameters {
    /// Log every entry at debug level
    pub fn dump(&self) {
        debug!("dump: mMap.size = {}", self.len());
        for (key, value) in self.iter() {
            debug!("{}: {}", key, value);
        }
    }

    /// Write a header line and one tab-indented `key: value` line per entry
    pub fn dump_to<W: Write>(&self, out: &mut W) -> ParamsResult<()> {
        let mut result = format!("CameraParameters::dump: mMap.size = {}\n", self.len());
        for (key, value) in self.iter() {
            result.push_str(&format!("\t{}: {}\n", key, value));
        }
        out.write_all(result.as_bytes())?;
        Ok(())
    }

    /// JSON object of all entries, in store order
    pub fn to_json(&self) -> ParamsResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Serialize for CameraParameters {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
