//! Store to wire string

use bytes::{BufMut, BytesMut};

use crate::errors::ParamsResult;
use crate::store::CameraParameters;
use crate::traits::ParamsWriter;
use crate::validation::{ENTRY_DELIMITER, KEY_VALUE_DELIMITER};

/// Join entries in store order as `key=value`, separated by `;` with no
/// trailing delimiter. An empty store flattens to "".
pub fn flatten(params: &CameraParameters) -> String {
    let mut flattened = String::new();
    for (i, (key, value)) in params.iter().enumerate() {
        if i > 0 {
            flattened.push(ENTRY_DELIMITER);
        }
        flattened.push_str(key);
        flattened.push(KEY_VALUE_DELIMITER);
        flattened.push_str(value);
    }
    flattened
}

impl CameraParameters {
    pub fn flatten(&self) -> String {
        flatten(self)
    }
}

impl ParamsWriter for CameraParameters {
    fn to_bytes(&self, buffer: &mut BytesMut) -> ParamsResult<()> {
        buffer.put_slice(flatten(self).as_bytes());
        Ok(())
    }
}
