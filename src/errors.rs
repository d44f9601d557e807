use std::fmt;
use thiserror::Error;

/// Error type for the strict seams of the parameter store
///
/// The tolerant public API (`set`, `get_int`, `preview_size`, ...) never returns
/// these. They surface from the pair-parsing primitive, `try_set`, byte-buffer
/// decoding and writer-based dumps, where a caller asked to know what went wrong.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParamsError {
    // ========== VALIDATION ERRORS (1000-1099) ==========
    /// Key or value contains `=` or `;`
    #[error("{field} \"{text}\" contains invalid character ({delimiter})")]
    ReservedDelimiter {
        field: String,
        text: String,
        delimiter: char,
    },

    // ========== COMPOSITE PARSING ERRORS (2000-2099) ==========
    /// The delimiter did not immediately follow the first integer
    #[error("Cannot find delimiter ({delimiter}) in str={input}")]
    MissingDelimiter { delimiter: char, input: String },

    // ========== WIRE DECODING ERRORS (3000-3099) ==========
    /// Flattened buffer is not valid UTF-8
    #[error("Flattened parameters are not valid UTF-8: {details}")]
    InvalidUtf8 { details: String },

    // ========== I/O ERRORS (4000-4099) ==========
    /// Writing to a dump sink failed
    #[error("Failed to write parameters: {reason}")]
    Io { reason: String },

    // ========== SERIALIZATION ERRORS (5000-5099) ==========
    /// JSON snapshot could not be produced
    #[error("Failed to serialize parameters: {reason}")]
    Serialization { reason: String },
}

impl ParamsError {
    /// Get the error code for machine-readable processing
    pub fn code(&self) -> u16 {
        match self {
            Self::ReservedDelimiter { .. } => 1001,
            Self::MissingDelimiter { .. } => 2001,
            Self::InvalidUtf8 { .. } => 3001,
            Self::Io { .. } => 4001,
            Self::Serialization { .. } => 5001,
        }
    }

    /// Get the error category for grouping related errors
    pub fn category(&self) -> ErrorCategory {
        match self.code() {
            1000..=1099 => ErrorCategory::Validation,
            2000..=2099 => ErrorCategory::CompositeParsing,
            3000..=3099 => ErrorCategory::WireDecoding,
            4000..=4099 => ErrorCategory::IO,
            5000..=5099 => ErrorCategory::Serialization,
            _ => ErrorCategory::Unknown,
        }
    }

    /// Get suggested action for handling this error
    pub fn suggested_action(&self) -> &'static str {
        match self {
            Self::ReservedDelimiter { .. } => {
                "Remove '=' and ';' from the key and value, the wire format cannot escape them"
            },
            Self::MissingDelimiter { .. } => "Check the value is a pair like \"640x480\" or \"15000,30000\"",
            Self::InvalidUtf8 { .. } => "Check the provider sent ASCII parameter text",
            Self::Io { .. } => "Check the dump destination is writable",
            Self::Serialization { .. } => "Check the entries are valid UTF-8 text",
        }
    }
}

/// Error categories for grouping related error types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Validation,
    CompositeParsing,
    WireDecoding,
    IO,
    Serialization,
    Unknown,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Validation => write!(f, "Validation"),
            Self::CompositeParsing => write!(f, "Composite Parsing"),
            Self::WireDecoding => write!(f, "Wire Decoding"),
            Self::IO => write!(f, "I/O"),
            Self::Serialization => write!(f, "Serialization"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Result type alias for parameter operations
pub type ParamsResult<T> = Result<T, ParamsError>;

impl From<std::io::Error> for ParamsError {
    fn from(error: std::io::Error) -> Self {
        ParamsError::Io {
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for ParamsError {
    fn from(error: serde_json::Error) -> Self {
        ParamsError::Serialization {
            reason: error.to_string(),
        }
    }
}

impl From<std::string::FromUtf8Error> for ParamsError {
    fn from(error: std::string::FromUtf8Error) -> Self {
        ParamsError::InvalidUtf8 {
            details: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_and_categories() {
        let reserved = ParamsError::ReservedDelimiter {
            field: "key".to_string(),
            text: "a=b".to_string(),
            delimiter: '=',
        };
        assert_eq!(reserved.code(), 1001);
        assert_eq!(reserved.category(), ErrorCategory::Validation);

        let missing = ParamsError::MissingDelimiter {
            delimiter: 'x',
            input: "640".to_string(),
        };
        assert_eq!(missing.code(), 2001);
        assert_eq!(missing.category(), ErrorCategory::CompositeParsing);

        let utf8 = ParamsError::InvalidUtf8 {
            details: "bad".to_string(),
        };
        assert_eq!(utf8.category(), ErrorCategory::WireDecoding);

        let io = ParamsError::Io {
            reason: "closed".to_string(),
        };
        assert_eq!(io.category(), ErrorCategory::IO);

        let json = ParamsError::Serialization {
            reason: "bad".to_string(),
        };
        assert_eq!(json.code(), 5001);
        assert_eq!(json.category(), ErrorCategory::Serialization);
    }

    #[test]
    fn test_error_display() {
        let missing = ParamsError::MissingDelimiter {
            delimiter: ',',
            input: "15000".to_string(),
        };
        let display_text = format!("{}", missing);
        assert!(display_text.contains("(,)"));
        assert!(display_text.contains("15000"));

        let reserved = ParamsError::ReservedDelimiter {
            field: "value".to_string(),
            text: "x;y".to_string(),
            delimiter: ';',
        };
        assert_eq!(
            format!("{}", reserved),
            "value \"x;y\" contains invalid character (;)"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        match ParamsError::from(io_error) {
            ParamsError::Io { reason } => assert!(reason.contains("pipe closed")),
            other => panic!("Expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_utf8_error() {
        let utf8_error = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let error = ParamsError::from(utf8_error);
        assert_eq!(error.code(), 3001);
    }

    #[test]
    fn test_error_category_display() {
        assert_eq!(format!("{}", ErrorCategory::IO), "I/O");
        assert_eq!(format!("{}", ErrorCategory::CompositeParsing), "Composite Parsing");
        assert_eq!(format!("{}", ErrorCategory::Validation), "Validation");
    }

    #[test]
    fn test_suggested_actions() {
        let reserved = ParamsError::ReservedDelimiter {
            field: "key".to_string(),
            text: "a;b".to_string(),
            delimiter: ';',
        };
        assert!(reserved.suggested_action().contains("escape"));
    }
}
