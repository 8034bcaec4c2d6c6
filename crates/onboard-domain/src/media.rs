//! Media types for uploaded documents
//!
//! Only the file extension is inspected. Content is never validated here,
//! so a corrupt `.png` still reports `image/png`.

/// Fallback media type when the extension is unknown
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Media type of PDF documents
pub const PDF: &str = "application/pdf";

/// Guess the media type from a file name
pub fn media_type_for_name(name: &str) -> &'static str {
    let ext = match name.rsplit_once('.') {
        Some((_, ext)) => ext.to_lowercase(),
        None => return OCTET_STREAM,
    };

    match ext.as_str() {
        "pdf" => PDF,
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "tif" | "tiff" => "image/tiff",
        "bmp" => "image/bmp",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "txt" => "text/plain",
        _ => OCTET_STREAM,
    }
}

/// Whether a media type renders as an image preview
pub fn is_image(media_type: &str) -> bool {
    media_type.to_lowercase().starts_with("image/")
}
