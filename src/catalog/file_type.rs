//! Content type tags for stored assets

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// File type
///
/// A closed classification of stored assets. The registry stores it and hands
/// it back; callers such as an HTTP responder branch on it to pick a
/// `Content-Type` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum FileType {
    Html = 0,
    Xml = 1,
    Css = 2,
    Png = 3,
    Gif = 4,
    Xsl = 5,
    Ico = 6,
    Js = 7,
    Json = 8,
    #[default]
    Unknown = 9,
    /// Error page payload (e.g. a canned 404 body)
    Error = 10,
    Txt = 11,
}

impl FileType {
    /// All tags in discriminant order
    pub const ALL: [FileType; 12] = [
        FileType::Html,
        FileType::Xml,
        FileType::Css,
        FileType::Png,
        FileType::Gif,
        FileType::Xsl,
        FileType::Ico,
        FileType::Js,
        FileType::Json,
        FileType::Unknown,
        FileType::Error,
        FileType::Txt,
    ];

    /// Convert from u8
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::ALL.get(value as usize).copied()
    }

    /// MIME content type
    pub fn mime(self) -> &'static str {
        match self {
            FileType::Html | FileType::Error => "text/html",
            FileType::Xml => "application/xml",
            FileType::Css => "text/css",
            FileType::Png => "image/png",
            FileType::Gif => "image/gif",
            FileType::Xsl => "application/xslt+xml",
            FileType::Ico => "image/x-icon",
            FileType::Js => "application/javascript",
            FileType::Json => "application/json",
            FileType::Txt => "text/plain",
            FileType::Unknown => "application/octet-stream",
        }
    }

    /// Classify a bare extension (without the dot), case-insensitively
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "html" | "htm" => FileType::Html,
            "xml" => FileType::Xml,
            "css" => FileType::Css,
            "png" => FileType::Png,
            "gif" => FileType::Gif,
            "xsl" | "xslt" => FileType::Xsl,
            "ico" => FileType::Ico,
            "js" | "mjs" => FileType::Js,
            "json" => FileType::Json,
            "txt" | "text" => FileType::Txt,
            _ => FileType::Unknown,
        }
    }

    /// Classify a file name by its extension
    ///
    /// `Error` is never inferred; it is an explicit tag only.
    pub fn from_path(name: &str) -> Self {
        Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .map(Self::from_extension)
            .unwrap_or_default()
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FileType::Html => "html",
            FileType::Xml => "xml",
            FileType::Css => "css",
            FileType::Png => "png",
            FileType::Gif => "gif",
            FileType::Xsl => "xsl",
            FileType::Ico => "ico",
            FileType::Js => "js",
            FileType::Json => "json",
            FileType::Unknown => "unknown",
            FileType::Error => "error",
            FileType::Txt => "txt",
        };
        f.pad(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discriminant_order() {
        for (idx, ty) in FileType::ALL.iter().enumerate() {
            assert_eq!(*ty as u8, idx as u8);
            assert_eq!(FileType::from_u8(idx as u8), Some(*ty));
        }
        assert_eq!(FileType::from_u8(12), None);
    }

    #[test]
    fn test_default_is_unknown() {
        assert_eq!(FileType::default(), FileType::Unknown);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(FileType::from_path("index.html"), FileType::Html);
        assert_eq!(FileType::from_path("style.CSS"), FileType::Css);
        assert_eq!(FileType::from_path("app.min.js"), FileType::Js);
        assert_eq!(FileType::from_path("favicon.ico"), FileType::Ico);
        assert_eq!(FileType::from_path("README"), FileType::Unknown);
        assert_eq!(FileType::from_path("archive.tar.gz"), FileType::Unknown);
    }

    #[test]
    fn test_mime() {
        assert_eq!(FileType::Html.mime(), "text/html");
        assert_eq!(FileType::Json.mime(), "application/json");
        assert_eq!(FileType::Unknown.mime(), "application/octet-stream");
    }

    #[test]
    fn test_display_honors_width() {
        assert_eq!(format!("[{:<8}]", FileType::Css), "[css     ]");
        assert_eq!(format!("[{:>7}]", FileType::Unknown), "[unknown]");
        assert_eq!(format!("[{:^5}]", FileType::Js), "[ js  ]");
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&FileType::Txt).unwrap();
        assert_eq!(json, "\"txt\"");
        let ty: FileType = serde_json::from_str("\"png\"").unwrap();
        assert_eq!(ty, FileType::Png);
        assert_eq!(FileType::Png.to_string(), "png");
    }
}
