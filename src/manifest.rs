//! Asset image manifest
//!
//! Describes how a packed asset image (one contiguous blob baked into the
//! firmware, e.g. `include_bytes!("assets.bin")`) splits into files, so a
//! registry can be built declaratively instead of one `register` call at a time.
//!
//! ```toml
//! version = "1.0.0"
//! capacity = 8
//!
//! [[files]]
//! name = "index.html"
//! offset = 0
//! size = 512
//!
//! [[files]]
//! name = "logo.png"
//! offset = 512
//! size = 2048
//! sha256 = "…64 hex chars…"
//! ```

use crate::catalog::FileType;
use crate::error::{ProgfsError, Result};
use crate::registry::{FileRegistry, MAX_CAPACITY};
use semver::Version;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::path::Path;

/// Asset image manifest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetManifest {
    /// Semantic version of the asset image
    pub version: Version,

    /// Human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Registry capacity; defaults to the number of entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u8>,

    /// Files in registration order
    #[serde(default)]
    pub files: Vec<AssetEntry>,
}

/// One file inside the asset image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetEntry {
    pub name: String,

    /// Byte offset into the image
    pub offset: usize,

    /// Length in bytes
    pub size: usize,

    /// Content type; inferred from the name's extension when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_type: Option<FileType>,

    #[serde(default)]
    pub compressed: bool,

    /// Lowercase hex SHA-256 of the file's bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha256: Option<String>,
}

impl AssetEntry {
    pub fn new(name: impl Into<String>, offset: usize, size: usize) -> Self {
        AssetEntry {
            name: name.into(),
            offset,
            size,
            file_type: None,
            compressed: false,
            sha256: None,
        }
    }

    /// Set an explicit content type
    pub fn with_file_type(mut self, file_type: FileType) -> Self {
        self.file_type = Some(file_type);
        self
    }

    /// Mark as compressed
    pub fn with_compressed(mut self, compressed: bool) -> Self {
        self.compressed = compressed;
        self
    }

    /// Attach an expected digest
    pub fn with_sha256(mut self, digest: impl Into<String>) -> Self {
        self.sha256 = Some(digest.into());
        self
    }

    /// Declared type, or the one inferred from the name
    pub fn effective_type(&self) -> FileType {
        self.file_type.unwrap_or_else(|| FileType::from_path(&self.name))
    }

    /// Slice of `image` this entry describes
    fn locate<'a>(&self, image: &'a [u8]) -> Result<&'a [u8]> {
        self.offset
            .checked_add(self.size)
            .and_then(|end| image.get(self.offset..end))
            .ok_or_else(|| ProgfsError::OutOfImage {
                name: self.name.clone(),
                offset: self.offset,
                size: self.size,
                image_len: image.len(),
            })
    }

    fn verify(&self, data: &[u8]) -> Result<()> {
        let Some(expected) = &self.sha256 else {
            return Ok(());
        };
        let actual = hex::encode(Sha256::digest(data));
        if actual != expected.to_ascii_lowercase() {
            return Err(ProgfsError::ChecksumMismatch(self.name.clone()));
        }
        Ok(())
    }
}

impl AssetManifest {
    /// Create an empty manifest
    pub fn new(version: Version) -> Self {
        AssetManifest {
            version,
            description: None,
            capacity: None,
            files: Vec::new(),
        }
    }

    /// Set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set an explicit registry capacity
    pub fn with_capacity(mut self, capacity: u8) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Append an entry
    pub fn add_file(mut self, entry: AssetEntry) -> Self {
        self.files.push(entry);
        self
    }

    /// Parse a TOML manifest
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Parse a JSON manifest
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load a manifest from disk; the format follows the file extension
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml_str(&text),
            Some("json") => Self::from_json_str(&text),
            _ => Err(ProgfsError::UnsupportedManifest(path.display().to_string())),
        }
    }

    /// Serialize as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Capacity the built registry will have
    pub fn effective_capacity(&self) -> usize {
        self.capacity.map(usize::from).unwrap_or(self.files.len())
    }

    /// Validate all fields
    ///
    /// Checks:
    /// - Entries fit the capacity, and the capacity fits the id space
    /// - Names are non-empty
    /// - Digests are 64 hex characters
    ///
    /// Duplicate names are allowed (lookups return the first) but logged.
    pub fn validate(&self) -> Result<()> {
        let capacity = self.effective_capacity();
        if capacity > MAX_CAPACITY {
            return Err(ProgfsError::ManifestValidation(format!(
                "{} files exceed the maximum capacity of {}",
                capacity, MAX_CAPACITY
            )));
        }
        if self.files.len() > capacity {
            return Err(ProgfsError::ManifestValidation(format!(
                "{} files listed but capacity is {}",
                self.files.len(),
                capacity
            )));
        }

        let mut seen = HashSet::new();
        for (idx, entry) in self.files.iter().enumerate() {
            if entry.name.is_empty() {
                return Err(ProgfsError::ManifestValidation(format!(
                    "entry {} has an empty name",
                    idx
                )));
            }
            if let Some(digest) = &entry.sha256 {
                if digest.len() != 64 || !digest.chars().all(|c| c.is_ascii_hexdigit()) {
                    return Err(ProgfsError::InvalidChecksum(digest.clone()));
                }
            }
            if !seen.insert(entry.name.as_str()) {
                tracing::warn!(
                    "Duplicate asset name {} at entry {}; lookups by name return the first",
                    entry.name,
                    idx
                );
            }
        }

        Ok(())
    }

    /// Build a registry over `image`
    ///
    /// Entries are registered in manifest order, so each entry's id is its
    /// position in `files`. Every entry is bounds-checked against the image
    /// and digest-verified before anything is registered.
    pub fn build_registry<'a>(&'a self, image: &'a [u8]) -> Result<FileRegistry<'a>> {
        self.validate()?;

        let mut located = Vec::with_capacity(self.files.len());
        for entry in &self.files {
            let data = entry.locate(image)?;
            entry.verify(data)?;
            located.push((entry, data));
        }

        // validate() bounds the capacity by MAX_CAPACITY
        let mut registry = FileRegistry::new(self.effective_capacity() as u8);
        for (entry, data) in located {
            registry.register_with(&entry.name, data, entry.effective_type(), entry.compressed)?;
        }

        tracing::info!(
            "Built registry v{}: {} of {} slots over a {}-byte image",
            self.version,
            registry.len(),
            registry.capacity(),
            image.len()
        );

        Ok(registry)
    }
}
