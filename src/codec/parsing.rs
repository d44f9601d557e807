//! Wire string to store

use bytes::Bytes;

use crate::errors::ParamsResult;
use crate::store::CameraParameters;
use crate::traits::ParamsParser;
use crate::validation::{ENTRY_DELIMITER, KEY_VALUE_DELIMITER};

/// Replace the contents of `params` with the entries encoded in `flattened`
///
/// Each key runs up to the next `=`, its value up to the next `;`. A value with
/// no `;` after it takes the rest of the input and ends the scan. Once no `=`
/// remains, whatever is left is ignored.
pub fn unflatten(params: &mut CameraParameters, flattened: &str) {
    params.clear();

    let mut rest = flattened;
    while let Some(key_end) = rest.find(KEY_VALUE_DELIMITER) {
        let key = &rest[..key_end];
        rest = &rest[key_end + 1..];

        match rest.find(ENTRY_DELIMITER) {
            Some(value_end) => {
                params.insert_unchecked(key.to_string(), rest[..value_end].to_string());
                rest = &rest[value_end + 1..];
            },
            None => {
                // last item
                params.insert_unchecked(key.to_string(), rest.to_string());
                break;
            },
        }
    }
}

impl CameraParameters {
    pub fn unflatten(&mut self, flattened: &str) {
        unflatten(self, flattened);
    }

    /// Decode a flattened string into a new store with the default config
    pub fn from_flattened(flattened: &str) -> Self {
        let mut params = Self::new();
        params.unflatten(flattened);
        params
    }
}

impl ParamsParser for CameraParameters {
    /// Consume the whole buffer as one flattened parameter string
    fn from_bytes(data: &mut Bytes) -> ParamsResult<Self> {
        let raw = data.split_to(data.len());
        let flattened = String::from_utf8(raw.to_vec())?;
        Ok(Self::from_flattened(&flattened))
    }
}
