// SPDX-License-Identifier: MPL-2.0
//! Error types for the fallible edges of the crate.
//!
//! Navigation, reconciliation, scrolling and slideshow operations never fail:
//! invalid input degrades to an in-bounds state. Only reading configuration
//! and item files from disk can produce an [`Error`].

use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Items(ItemsError),
}

/// Problems found while loading a caller-supplied item file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemsError {
    /// The file could not be parsed as an item list.
    Malformed(String),

    /// Two items in the same list carry the same caller id.
    DuplicateId(String),
}

impl fmt::Display for ItemsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemsError::Malformed(msg) => write!(f, "Malformed item list: {}", msg),
            ItemsError::DuplicateId(id) => write!(f, "Duplicate item id: {}", id),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Items(e) => write!(f, "Items Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ItemsError> for Error {
    fn from(err: ItemsError) -> Self {
        Error::Items(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn items_error_wraps_duplicate_id() {
        let err: Error = ItemsError::DuplicateId("launch".into()).into();
        assert_eq!(format!("{}", err), "Items Error: Duplicate item id: launch");
    }

    #[test]
    fn toml_parse_error_becomes_config_error() {
        let parse: std::result::Result<toml::Table, _> = toml::from_str("not = valid = toml");
        let err: Error = parse.expect_err("invalid toml").into();
        assert!(matches!(err, Error::Config(_)));
    }
}
