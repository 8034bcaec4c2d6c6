//! Source formats the recognizer understands

/// How an upload's content is turned into text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Raster image, read with OCR
    Image,
    /// PDF document
    Pdf,
}

impl SourceFormat {
    /// Decide the format from a file name's extension
    ///
    /// Returns `None` for anything that is neither an image
    /// (`.jpg .jpeg .png .bmp .tiff`) nor a `.pdf`.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        if [".jpg", ".jpeg", ".png", ".bmp", ".tiff"]
            .iter()
            .any(|ext| lower.ends_with(ext))
        {
            Some(SourceFormat::Image)
        } else if lower.ends_with(".pdf") {
            Some(SourceFormat::Pdf)
        } else {
            None
        }
    }
}
