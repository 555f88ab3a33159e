use thiserror::Error;

use crate::more_filter::MoreFilterField;

/// Why the catalog could not be loaded
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded with HTTP {0}")]
    Status(u16),
    #[error("no response within {0} ms")]
    Timeout(u32),
    #[error("malformed catalog payload: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Malformed(err.to_string())
    }
}

/// Selection the more-filter control cannot accept in its current mode
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoreFilterError {
    #[error("unknown filter category `{0}`")]
    UnknownMode(String),
    #[error("`{value}` is not an available {field} value")]
    UnknownValue { field: MoreFilterField, value: String },
}
