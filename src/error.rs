//! Error types for registry operations

use thiserror::Error;

/// Registry operation result type
pub type Result<T> = std::result::Result<T, ProgfsError>;

/// Registry operation errors
#[derive(Error, Debug)]
pub enum ProgfsError {
    /// Every slot of the registry is already filled
    #[error("Capacity exceeded: registry holds at most {capacity} files")]
    CapacityExceeded { capacity: u8 },

    /// No record matches the requested name or id
    #[error("File not found: {0}")]
    NotFound(String),

    /// Copy start position lies beyond the end of the file
    #[error("Offset {offset} is past the end of a {size}-byte file")]
    OffsetOutOfRange { offset: usize, size: usize },

    /// Destination buffer cannot hold the clamped chunk
    #[error("Destination buffer too small: need {needed} bytes, have {available}")]
    BufferTooSmall { needed: usize, available: usize },

    /// Manifest entry points outside the asset image
    #[error("Entry {name} ({offset}+{size}) lies outside a {image_len}-byte image")]
    OutOfImage {
        name: String,
        offset: usize,
        size: usize,
        image_len: usize,
    },

    #[error("SHA-256 verification failed for {0}")]
    ChecksumMismatch(String),

    #[error("Invalid SHA-256 digest: {0}")]
    InvalidChecksum(String),

    #[error("Manifest validation failed: {0}")]
    ManifestValidation(String),

    #[error("Unsupported manifest format: {0}")]
    UnsupportedManifest(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
