//! Error types for hstore encoding and decoding.
//!
//! ## Error Categories
//!
//! - **Malformed input**: a key or value is missing its closing quote, or no
//!   value follows a key before the end of the buffer
//! - **Encoding errors**: byte input that is not valid UTF-8
//! - **Type mismatches**: a key or value is not text when serializing, or text
//!   that cannot be parsed into the requested type when deserializing
//! - **I/O errors**: reader/writer failures
//!
//! Every decoding error carries the byte offset at which it was detected.
//!
//! ## Examples
//!
//! ```rust
//! use serde_hstore::{loads, Error, Pair};
//!
//! let result: Result<Vec<Pair>, Error> = loads(r#""a"=>"#);
//! assert!(matches!(result, Err(Error::Malformed { .. })));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur during hstore encoding/decoding.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// The input is not a well-formed hstore document
    #[error("Malformed hstore at position {position}: {msg}")]
    Malformed { position: usize, msg: String },

    /// Byte input could not be decoded as text
    #[error("Encoding error at position {position}: {msg}")]
    Encoding { position: usize, msg: String },

    /// A key or value has the wrong type
    #[error("Type mismatch{}: expected {expected}, found {found}", key_suffix(.key))]
    TypeMismatch {
        key: Option<String>,
        expected: String,
        found: String,
    },

    /// Unsupported shape for an hstore document
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

fn key_suffix(key: &Option<String>) -> String {
    match key {
        Some(key) => format!(" for key {:?}", key),
        None => String::new(),
    }
}

impl Error {
    /// Creates a malformed-input error at the given byte offset.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_hstore::Error;
    ///
    /// let err = Error::malformed(7, "unterminated value");
    /// assert!(err.to_string().contains("position 7"));
    /// ```
    pub fn malformed(position: usize, msg: &str) -> Self {
        Error::Malformed {
            position,
            msg: msg.to_string(),
        }
    }

    /// Creates an encoding error from a failed UTF-8 conversion.
    pub fn encoding(err: std::str::Utf8Error) -> Self {
        Error::Encoding {
            position: err.valid_up_to(),
            msg: err.to_string(),
        }
    }

    /// Creates a type mismatch error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_hstore::Error;
    ///
    /// let err = Error::type_mismatch(Some("a"), "string", "i64");
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Type mismatch for key \"a\": expected string, found i64"
    /// );
    /// ```
    pub fn type_mismatch(key: Option<&str>, expected: &str, found: &str) -> Self {
        Error::TypeMismatch {
            key: key.map(str::to_string),
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates an unsupported type error for shapes hstore cannot hold.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Attaches a key to a type mismatch raised before the key was known.
    pub(crate) fn with_key(self, key: &str) -> Self {
        match self {
            Error::TypeMismatch {
                key: None,
                expected,
                found,
            } => Error::TypeMismatch {
                key: Some(key.to_string()),
                expected,
                found,
            },
            other => other,
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
