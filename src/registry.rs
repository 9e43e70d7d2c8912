//! Fixed-capacity file registry
//!
//! Provides registration, lookup and bounded chunk copies over a table of
//! [`FileRecord`]s.
//!
//! **Design**:
//! - Slot table reserved once at construction and never grown past capacity
//! - Id of a record = its insertion index; ids never move or get reused
//! - Name lookup is a linear scan in id order (lowest id wins on duplicates)
//! - Copies are clamped to the end of the file and bounds-checked against the
//!   destination; nothing is written on failure

use crate::catalog::{FileRecord, FileType};
use crate::error::{ProgfsError, Result};
use std::fmt;

/// Stable handle of a registered file
pub type FileId = u8;

/// Largest capacity representable by the id space
pub const MAX_CAPACITY: usize = FileId::MAX as usize;

/// Selects the file a copy or read operates on
#[derive(Debug, Clone, Copy)]
pub enum FileSource<'s, 'a> {
    /// First record with this exact name
    Name(&'s str),
    /// Record registered under this id
    Id(FileId),
    /// A record the caller already holds
    Record(&'s FileRecord<'a>),
}

impl<'s, 'a> From<&'s str> for FileSource<'s, 'a> {
    fn from(name: &'s str) -> Self {
        FileSource::Name(name)
    }
}

impl<'s, 'a> From<FileId> for FileSource<'s, 'a> {
    fn from(id: FileId) -> Self {
        FileSource::Id(id)
    }
}

impl<'s, 'a> From<&'s FileRecord<'a>> for FileSource<'s, 'a> {
    fn from(record: &'s FileRecord<'a>) -> Self {
        FileSource::Record(record)
    }
}

impl fmt::Display for FileSource<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileSource::Name(name) => write!(f, "{name}"),
            FileSource::Id(id) => write!(f, "id {id}"),
            FileSource::Record(record) => write!(f, "{}", record.name()),
        }
    }
}

/// Read-only file registry
///
/// Holds up to `capacity` records borrowed from backing storage with lifetime
/// `'a`. Registration needs `&mut self`, lookups and copies only `&self`, so a
/// registry populated at start-up can be shared freely between readers.
#[derive(Debug)]
pub struct FileRegistry<'a> {
    /// Filled slots in id order; reserved once in `new` and never grown past
    /// `capacity`, so records never move
    slots: Vec<FileRecord<'a>>,

    /// Maximum number of files
    capacity: u8,
}

impl<'a> FileRegistry<'a> {
    /// Create an empty registry with room for `capacity` files
    pub fn new(capacity: u8) -> Self {
        FileRegistry {
            slots: Vec::with_capacity(capacity as usize),
            capacity,
        }
    }

    /// Register a file with type `Unknown`, uncompressed
    pub fn register(&mut self, name: &'a str, data: &'a [u8]) -> Result<FileId> {
        self.register_with(name, data, FileType::Unknown, false)
    }

    /// Register an uncompressed file of the given type
    pub fn register_typed(
        &mut self,
        name: &'a str,
        data: &'a [u8],
        file_type: FileType,
    ) -> Result<FileId> {
        self.register_with(name, data, file_type, false)
    }

    /// Register a file
    ///
    /// Appends a record and returns its id, which equals the number of files
    /// registered before it.
    ///
    /// # Errors
    ///
    /// Returns `CapacityExceeded` when every slot is filled. The registry is
    /// left untouched.
    pub fn register_with(
        &mut self,
        name: &'a str,
        data: &'a [u8],
        file_type: FileType,
        compressed: bool,
    ) -> Result<FileId> {
        if self.is_full() {
            tracing::warn!(
                "Cannot register {}: registry full ({} files)",
                name,
                self.capacity()
            );
            return Err(ProgfsError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        let id = self.slots.len();
        self.slots.push(FileRecord::new(name, data, file_type, compressed));

        tracing::debug!(
            "Registered {} as id {} ({} bytes, {})",
            name,
            id,
            data.len(),
            file_type
        );

        // id < capacity <= u8::MAX
        Ok(id as FileId)
    }

    /// Find the lowest-id record with exactly this name
    pub fn find_by_name(&self, name: &str) -> Option<&FileRecord<'a>> {
        self.id_of(name).and_then(|id| self.find_by_id(id))
    }

    /// Find a record by id
    ///
    /// Ids that were never handed out by a registration, including unfilled
    /// slots below capacity, are not found.
    pub fn find_by_id(&self, id: FileId) -> Option<&FileRecord<'a>> {
        self.slots.get(id as usize)
    }

    /// Id of the lowest-id record with exactly this name
    pub fn id_of(&self, name: &str) -> Option<FileId> {
        self.iter()
            .find(|(_, record)| record.name() == name)
            .map(|(id, _)| id)
    }

    /// Resolve a source selector to a record
    pub fn resolve(&self, source: FileSource<'_, 'a>) -> Result<FileRecord<'a>> {
        let record = match source {
            FileSource::Name(name) => self.find_by_name(name),
            FileSource::Id(id) => self.find_by_id(id),
            FileSource::Record(record) => Some(record),
        };
        record
            .copied()
            .ok_or_else(|| ProgfsError::NotFound(source.to_string()))
    }

    /// Copy part of a file into `dest`
    ///
    /// Copies `chunk_size` bytes starting at `start_pos`, clamped to the end of
    /// the file, into the front of `dest`. Returns the number of bytes copied.
    /// A start position equal to the file size copies nothing and returns 0.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the source does not resolve
    /// - `OffsetOutOfRange` if `start_pos` is past the end of the file
    /// - `BufferTooSmall` if `dest` cannot hold the clamped chunk
    ///
    /// `dest` is not written when an error is returned.
    pub fn copy<'s>(
        &self,
        source: impl Into<FileSource<'s, 'a>>,
        dest: &mut [u8],
        start_pos: usize,
        chunk_size: usize,
    ) -> Result<usize>
    where
        'a: 's,
    {
        let record = self.resolve(source.into())?;
        let chunk =
            record
                .chunk(start_pos, chunk_size)
                .ok_or(ProgfsError::OffsetOutOfRange {
                    offset: start_pos,
                    size: record.size(),
                })?;

        let available = dest.len();
        let target = dest
            .get_mut(..chunk.len())
            .ok_or(ProgfsError::BufferTooSmall {
                needed: chunk.len(),
                available,
            })?;
        target.copy_from_slice(chunk);

        tracing::debug!(
            "Copied {} bytes of {} from offset {}",
            chunk.len(),
            record.name(),
            start_pos
        );

        Ok(chunk.len())
    }

    /// Whole contents of a file, without copying
    pub fn read<'s>(&self, source: impl Into<FileSource<'s, 'a>>) -> Result<&'a [u8]>
    where
        'a: 's,
    {
        Ok(self.resolve(source.into())?.data())
    }

    /// Registered records in id order
    pub fn iter(&self) -> impl Iterator<Item = (FileId, &FileRecord<'a>)> + '_ {
        // At most `capacity` (<= u8::MAX) records, so every index fits a FileId
        self.slots
            .iter()
            .enumerate()
            .map(|(id, record)| (id as FileId, record))
    }

    /// Maximum number of files
    pub fn capacity(&self) -> usize {
        self.capacity as usize
    }

    /// Number of registered files
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.slots.len() == self.capacity()
    }

    /// Free slots left
    pub fn remaining(&self) -> usize {
        self.capacity() - self.slots.len()
    }
}
