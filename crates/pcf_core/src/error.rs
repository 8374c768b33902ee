//! Error types for pcf_core

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised at the host boundary (manifests and property bags)
#[derive(Error, Debug)]
pub enum PcfError {
    /// Failed to read a file from disk
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Manifest text is not valid TOML for the manifest schema
    #[error("manifest parse failed: {0}")]
    ManifestParse(#[from] toml::de::Error),

    /// Manifest parsed but is internally inconsistent
    #[error("invalid manifest: {0}")]
    ManifestInvalid(String),

    /// A required property is absent from the bag
    #[error("missing property `{0}`")]
    MissingProperty(String),

    /// A property holds a value of the wrong type
    #[error("property `{name}` expected {expected}, found {found}")]
    PropertyType {
        name: String,
        expected: &'static str,
        found: &'static str,
    },

    /// An enum property holds a value outside its declared members
    #[error("property `{name}` has unknown value `{value}`")]
    UnknownEnumValue { name: String, value: String },

    /// The bag carries a property the manifest does not declare
    #[error("property `{0}` is not declared by the manifest")]
    UnknownProperty(String),
}

/// Result type for pcf_core operations
pub type Result<T> = std::result::Result<T, PcfError>;
