//! Error types for record conversions.
//!
//! Record operations themselves do not fail: missing paths read as `None`
//! and non-object merge sources are ignored. Errors only arise at the edges
//! where foreign documents are parsed or values are decoded into typed Rust.

use thiserror::Error;

/// Errors produced when converting into or out of records.
#[derive(Debug, Error)]
pub enum RecordError {
    /// A JSON document could not be parsed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// A TOML document could not be parsed.
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A record can only be built from an object-shaped document.
    #[error("expected an object, got {found}")]
    NotAnObject { found: &'static str },

    /// A value could not be decoded into the requested type.
    #[error("cannot decode value at {path:?}: {reason}")]
    Decode { path: String, reason: String },
}

/// Convenience type alias for record conversions.
pub type Result<T> = std::result::Result<T, RecordError>;
