//! File record structures

use super::FileType;
use sha2::{Digest, Sha256};

/// A stored asset
///
/// Describes one file whose bytes live in read-only backing storage (flash,
/// program memory, or any slice that outlives the registry). The record borrows
/// that storage; it never owns or copies it. Fields are fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileRecord<'a> {
    name: &'a str,
    data: &'a [u8],
    file_type: FileType,
    compressed: bool,
}

impl<'a> FileRecord<'a> {
    /// Create a new file record
    pub fn new(name: &'a str, data: &'a [u8], file_type: FileType, compressed: bool) -> Self {
        FileRecord {
            name,
            data,
            file_type,
            compressed,
        }
    }

    /// File name, matched byte-for-byte by lookups
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// File size in bytes
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Backing bytes
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    pub fn file_type(&self) -> FileType {
        self.file_type
    }

    /// Compression hint; stored, never acted on
    pub fn is_compressed(&self) -> bool {
        self.compressed
    }

    /// View of at most `len` bytes starting at `start`
    ///
    /// The length is clamped to the end of the file. Returns `None` when
    /// `start` is past the end; `start == size` yields an empty slice.
    pub fn chunk(&self, start: usize, len: usize) -> Option<&'a [u8]> {
        let remaining = self.data.len().checked_sub(start)?;
        let end = start + len.min(remaining);
        self.data.get(start..end)
    }

    /// SHA-256 digest of the backing bytes
    pub fn sha256(&self) -> [u8; 32] {
        Sha256::digest(self.data).into()
    }
}
