//! File catalog types
//!
//! A [`FileRecord`] describes one asset living in borrowed backing storage; a
//! [`FileType`] classifies it for callers that care about content types.

pub mod file_type;
pub mod record;

pub use file_type::FileType;
pub use record::FileRecord;
