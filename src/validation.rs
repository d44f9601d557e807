use crate::errors::{ParamsError, ParamsResult};

/// Separates a key from its value on the wire
pub const KEY_VALUE_DELIMITER: char = '=';

/// Separates entries on the wire
pub const ENTRY_DELIMITER: char = ';';

/// Characters neither keys nor values may contain; the wire format has no escaping
pub const RESERVED_DELIMITERS: [char; 2] = [KEY_VALUE_DELIMITER, ENTRY_DELIMITER];

/// Checks keys and values before they enter a store
pub struct EntryValidator;

impl EntryValidator {
    /// Reject a key containing a reserved delimiter
    pub fn validate_key(key: &str) -> ParamsResult<()> {
        Self::check_field("Key", key)
    }

    /// Reject a value containing a reserved delimiter
    pub fn validate_value(value: &str) -> ParamsResult<()> {
        Self::check_field("Value", value)
    }

    /// Validate both halves of an entry, key first
    pub fn validate_entry(key: &str, value: &str) -> ParamsResult<()> {
        Self::validate_key(key)?;
        Self::validate_value(value)
    }

    fn check_field(field: &str, text: &str) -> ParamsResult<()> {
        match text.chars().find(|c| RESERVED_DELIMITERS.contains(c)) {
            Some(delimiter) => Err(ParamsError::ReservedDelimiter {
                field: field.to_string(),
                text: text.to_string(),
                delimiter,
            }),
            None => Ok(()),
        }
    }
}
