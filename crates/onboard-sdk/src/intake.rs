//! Upload intake: file selection and local previews.

use crate::error::SdkError;
use base64::Engine;
use onboard_domain::UploadedDocument;
use std::path::Path;
use tracing::debug;

/// Icon shown for documents that cannot be previewed as images
pub const PLACEHOLDER_ICON: &str = "file-text";

/// Local preview of a selected document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    /// Image content encoded as a `data:` URL
    Image {
        /// `data:<media type>;base64,<content>`
        data_url: String,
    },
    /// Generic icon with the file name as label
    Placeholder {
        /// Icon identifier
        icon: &'static str,
        /// Text shown next to the icon
        label: String,
    },
}

impl Preview {
    /// Whether this preview renders the image itself
    pub fn is_image(&self) -> bool {
        matches!(self, Preview::Image { .. })
    }
}

/// Read a file from disk into an [`UploadedDocument`]
///
/// The display name is the file name without directories; the media type is
/// derived from its extension. Nothing about the content is validated.
pub async fn load_document(path: impl AsRef<Path>) -> Result<UploadedDocument, SdkError> {
    let path = path.as_ref();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or(SdkError::NoDocument)?;

    let content = tokio::fs::read(path).await?;
    debug!("Loaded '{}' ({} bytes)", name, content.len());

    Ok(UploadedDocument::new(name, content))
}

/// Accept at most one selected file
///
/// Returns [`SdkError::NoDocument`] when nothing was selected.
pub async fn select_file(path: Option<&Path>) -> Result<UploadedDocument, SdkError> {
    match path {
        Some(path) => load_document(path).await,
        None => Err(SdkError::NoDocument),
    }
}

/// Build a preview for a document
///
/// Images are base64-encoded on the blocking pool; every other media type
/// gets the placeholder icon.
pub async fn build_preview(document: &UploadedDocument) -> Result<Preview, SdkError> {
    if !document.is_image() {
        return Ok(Preview::Placeholder {
            icon: PLACEHOLDER_ICON,
            label: document.name.clone(),
        });
    }

    let media_type = document.media_type.clone();
    let content = document.content.clone();

    let data_url = tokio::task::spawn_blocking(move || {
        let encoded = base64::engine::general_purpose::STANDARD.encode(&content);
        format!("data:{};base64,{}", media_type, encoded)
    })
    .await
    .map_err(|e| SdkError::Io(std::io::Error::other(e.to_string())))?;

    Ok(Preview::Image { data_url })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_image_preview_is_data_url() {
        let doc = UploadedDocument::new("id.png", vec![0x89, b'P', b'N', b'G']);
        let preview = build_preview(&doc).await.unwrap();
        assert_eq!(
            preview,
            Preview::Image {
                data_url: "data:image/png;base64,iVBORw==".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_pdf_gets_placeholder() {
        let doc = UploadedDocument::new("passport.pdf", b"%PDF-1.7".to_vec());
        let preview = build_preview(&doc).await.unwrap();
        assert!(!preview.is_image());
        assert_eq!(
            preview,
            Preview::Placeholder {
                icon: PLACEHOLDER_ICON,
                label: "passport.pdf".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_no_selection_is_rejected() {
        assert!(matches!(select_file(None).await, Err(SdkError::NoDocument)));
    }

    #[tokio::test]
    async fn test_load_document_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("front.jpg");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(&[0xFF, 0xD8, 0xFF, 0xE0]).unwrap();

        let doc = select_file(Some(&path)).await.unwrap();
        assert_eq!(doc.name, "front.jpg");
        assert_eq!(doc.media_type, "image/jpeg");
        assert_eq!(doc.size(), 4);
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let result = load_document("/definitely/not/here.png").await;
        assert!(matches!(result, Err(SdkError::Io(_))));
    }
}
