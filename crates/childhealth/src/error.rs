//! Error types for childhealth.
//!
//! Domain outcomes such as a duplicate username or a wrong password are not
//! errors; they come back as `bool` from the stores. This enum covers what is
//! left: malformed input, I/O on the console streams, and configuration.

use thiserror::Error;

/// The main error type for childhealth operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Input Errors ===
    /// A numeric field (menu choice or child ID) was not a whole number.
    #[error("invalid {field}: expected a whole number, got {input:?}")]
    InvalidNumber {
        /// Which field was being read.
        field: &'static str,
        /// The offending token.
        input: String,
    },

    /// An appointment date did not match `yyyy-MM-dd`.
    #[error("invalid date {input:?}: expected yyyy-MM-dd")]
    InvalidDate {
        /// The rejected text.
        input: String,
    },

    /// Input ended while the shell was waiting for a line.
    #[error("unexpected end of input")]
    EndOfInput,

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// Reading from or writing to the console failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for childhealth operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create an invalid number error for the named field.
    #[must_use]
    pub fn invalid_number(field: &'static str, input: impl Into<String>) -> Self {
        Self::InvalidNumber {
            field,
            input: input.into(),
        }
    }

    /// Create an invalid date error.
    #[must_use]
    pub fn invalid_date(input: impl Into<String>) -> Self {
        Self::InvalidDate {
            input: input.into(),
        }
    }

    /// Create a configuration validation error.
    #[must_use]
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// Check if this error ends the interactive session.
    ///
    /// Only a malformed date is recovered inside the shell; every other
    /// input error unwinds out of the menu loops.
    #[must_use]
    pub fn is_fatal_input(&self) -> bool {
        matches!(self, Self::InvalidNumber { .. } | Self::EndOfInput)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_number_display() {
        let err = Error::invalid_number("menu choice", "abc");
        assert_eq!(
            err.to_string(),
            "invalid menu choice: expected a whole number, got \"abc\""
        );
    }

    #[test]
    fn test_invalid_date_display() {
        let err = Error::invalid_date("15-2024-01");
        assert_eq!(
            err.to_string(),
            "invalid date \"15-2024-01\": expected yyyy-MM-dd"
        );
    }

    #[test]
    fn test_end_of_input_display() {
        assert_eq!(Error::EndOfInput.to_string(), "unexpected end of input");
    }

    #[test]
    fn test_is_fatal_input() {
        assert!(Error::EndOfInput.is_fatal_input());
        assert!(Error::invalid_number("child ID", "x").is_fatal_input());
        assert!(!Error::invalid_date("x").is_fatal_input());
        assert!(!Error::config_validation("bad").is_fatal_input());
    }

    #[test]
    fn test_config_validation_error_display() {
        let err = Error::config_validation("demo_username must not be empty");
        assert!(err.to_string().contains("demo_username"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("pipe closed"));
    }

    #[test]
    fn test_from_json_error() {
        let json_result: std::result::Result<i32, serde_json::Error> =
            serde_json::from_str("not valid json");
        if let Err(json_err) = json_result {
            let err: Error = json_err.into();
            assert!(matches!(err, Error::Json(_)));
        }
    }

    #[test]
    fn test_from_figment_error() {
        let err: Error = figment::Error::from("boom".to_string()).into();
        assert!(matches!(err, Error::ConfigLoad(_)));
        assert!(err.to_string().contains("boom"));
    }
}
