//! Program-memory file registry
//!
//! A read-only, fixed-capacity registry that exposes immutable binary assets
//! baked into a firmware image through a filesystem-like lookup-and-read API.
//! Meant for devices where a real filesystem is unavailable or too heavy.
//!
//! ## Features
//!
//! - **Fixed capacity** chosen at construction (at most 255 files)
//! - **Stable ids**: a file's id is its insertion index, forever
//! - **Lookup** by exact name (first match wins) or by id
//! - **Bounded copies** of any byte range into a caller buffer, clamped to the
//!   end of the file and checked against the buffer
//! - **Zero-copy** access: records borrow their bytes, nothing is duplicated
//! - **Manifests** (TOML/JSON) that carve a packed asset image into files,
//!   with optional SHA-256 verification
//!
//! ## Example Usage
//!
//! ```rust
//! use progfs::{FileRegistry, FileType};
//!
//! static INDEX: &[u8] = b"<html><body>hello</body></html>";
//! static STYLE: &[u8] = b"body { margin: 0; }";
//!
//! let mut fs = FileRegistry::new(4);
//! let index = fs.register_typed("index.html", INDEX, FileType::Html).unwrap();
//! fs.register_typed("style.css", STYLE, FileType::Css).unwrap();
//!
//! assert_eq!(index, 0);
//! assert_eq!(fs.find_by_name("style.css").unwrap().size(), STYLE.len());
//!
//! // Stream a file through a small working buffer
//! let mut buf = [0u8; 8];
//! let chunk = buf.len();
//! let mut pos = 0;
//! let mut out = Vec::new();
//! loop {
//!     let n = fs.copy(index, &mut buf, pos, chunk).unwrap();
//!     if n == 0 {
//!         break;
//!     }
//!     out.extend_from_slice(&buf[..n]);
//!     pos += n;
//! }
//! assert_eq!(out, INDEX);
//! ```
//!
//! ## Layout
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │ FileRegistry<'a>  (capacity N)           │
//! ├──────────────────────────────────────────┤
//! │ id 0 │ "index.html" │ html │ ──► &'a [u8]│
//! │ id 1 │ "style.css"  │ css  │ ──► &'a [u8]│
//! │ id 2 │  (empty)     │      │             │
//! │ ...                                      │
//! └──────────────────────────────────────────┘
//!             backing storage (flash) outlives the registry
//! ```

pub mod catalog;
pub mod error;
pub mod manifest;
pub mod registry;

// Re-export commonly used types
pub use catalog::{FileRecord, FileType};
pub use error::{ProgfsError, Result};
pub use manifest::{AssetEntry, AssetManifest};
pub use registry::{FileId, FileRegistry, FileSource, MAX_CAPACITY};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
