//! Document module - a file selected for extraction

use crate::media;

/// A user-selected file held in memory
///
/// Created when a file is chosen and dropped on reset. Nothing in the
/// workspace writes it to durable storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedDocument {
    /// Display name (the original file name, without directories)
    pub name: String,

    /// Declared media type
    pub media_type: String,

    /// Raw file content
    pub content: Vec<u8>,
}

impl UploadedDocument {
    /// Create a document, deriving the media type from the name
    pub fn new(name: impl Into<String>, content: Vec<u8>) -> Self {
        let name = name.into();
        let media_type = media::media_type_for_name(&name).to_string();
        Self {
            name,
            media_type,
            content,
        }
    }

    /// Create a document with an explicit media type
    pub fn with_media_type(
        name: impl Into<String>,
        media_type: impl Into<String>,
        content: Vec<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            content,
        }
    }

    /// Size in bytes
    pub fn size(&self) -> usize {
        self.content.len()
    }

    /// Size rendered as kilobytes with one decimal, e.g. `"12.5 KB"`
    pub fn display_size(&self) -> String {
        format!("{:.1} KB", self.size() as f64 / 1024.0)
    }

    /// Whether the document previews as an image
    pub fn is_image(&self) -> bool {
        media::is_image(&self.media_type)
    }
}
