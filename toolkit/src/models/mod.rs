//! Domain models shared by the intake surface and the tool pages.
//!
//! - [`AcceptedFile`] - metadata of a file the user dropped or picked
//! - [`AcceptMap`] - accepted MIME types and their extensions

use serde::{Deserialize, Serialize};

// =============================================================================
// Accepted File
// =============================================================================

/// A file admitted by the dropzone.
///
/// Only the declared metadata is kept; the bytes are never read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptedFile {
    /// Display name, including extension.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// Declared MIME type (may be empty when the browser does not know it).
    pub mime: String,
}

impl AcceptedFile {
    pub fn new(name: impl Into<String>, size: u64, mime: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime: mime.into(),
        }
    }

    /// Lower-cased extension with its leading dot, e.g. `.pdf`.
    pub fn extension(&self) -> Option<String> {
        let (stem, ext) = self.name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(format!(".{}", ext.to_ascii_lowercase()))
    }

    /// Everything before the first dot; used to name converted outputs.
    ///
    /// `report.final.docx` gives `report`.
    pub fn stem(&self) -> &str {
        self.name.split('.').next().unwrap_or(&self.name)
    }

    /// Size in kilobytes with two decimals, as listed under each file.
    pub fn size_kb_label(&self) -> String {
        format!("{:.2} KB", self.size as f64 / 1024.0)
    }
}

// =============================================================================
// Accept Map
// =============================================================================

/// Accepted MIME types, each with the extensions that identify it.
///
/// Order is preserved so labels and the `accept` attribute stay stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptMap {
    entries: Vec<(String, Vec<String>)>,
}

impl AcceptMap {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// `application/pdf` → `.pdf`
    pub fn pdf() -> Self {
        Self::new().with("application/pdf", &[".pdf"])
    }

    /// Add a MIME type with its extensions (leading dot optional).
    pub fn with(mut self, mime: &str, extensions: &[&str]) -> Self {
        let extensions = extensions
            .iter()
            .map(|ext| {
                let ext = ext.trim().to_ascii_lowercase();
                if ext.starts_with('.') {
                    ext
                } else {
                    format!(".{}", ext)
                }
            })
            .collect();
        self.entries.push((mime.trim().to_ascii_lowercase(), extensions));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .flat_map(|(_, exts)| exts.iter().map(String::as_str))
    }

    /// Whether a file matches one of the pairs.
    ///
    /// A file matches when its MIME type equals an accepted type (or falls
    /// under a `type/*` wildcard), or when its extension is listed for one.
    /// An empty map accepts everything.
    pub fn matches(&self, file: &AcceptedFile) -> bool {
        if self.entries.is_empty() {
            return true;
        }
        let mime = file.mime.trim().to_ascii_lowercase();
        let extension = file.extension();

        self.entries.iter().any(|(accepted, exts)| {
            mime_matches(accepted, &mime)
                || extension
                    .as_deref()
                    .map(|ext| exts.iter().any(|e| e == ext))
                    .unwrap_or(false)
        })
    }

    /// Value for the `accept` attribute of an `<input type="file">`.
    pub fn accept_attribute(&self) -> String {
        self.entries
            .iter()
            .flat_map(|(mime, exts)| std::iter::once(mime.clone()).chain(exts.iter().cloned()))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Short human description used in hints and error messages.
    pub fn label(&self) -> String {
        if self.is_pdf_only() {
            return "PDF".to_string();
        }
        self.extensions()
            .map(|ext| ext.trim_start_matches('.').to_ascii_uppercase())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Sentence telling the user what to upload instead.
    pub fn rejection_hint(&self) -> String {
        if self.is_pdf_only() {
            "Please upload a PDF file.".to_string()
        } else {
            format!(
                "Accepted formats: {}.",
                self.extensions().collect::<Vec<_>>().join(", ")
            )
        }
    }

    fn is_pdf_only(&self) -> bool {
        self.entries.len() == 1 && self.entries[0].0 == "application/pdf"
    }
}

impl Default for AcceptMap {
    fn default() -> Self {
        Self::pdf()
    }
}

fn mime_matches(accepted: &str, mime: &str) -> bool {
    if mime.is_empty() {
        return false;
    }
    match accepted.strip_suffix("/*") {
        Some(prefix) => mime
            .split_once('/')
            .map(|(major, _)| major == prefix)
            .unwrap_or(false),
        None => accepted == mime,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_and_stem() {
        let file = AcceptedFile::new("Report.Final.PDF", 10, "application/pdf");
        assert_eq!(file.extension().as_deref(), Some(".pdf"));
        assert_eq!(file.stem(), "Report");

        let bare = AcceptedFile::new("README", 10, "text/plain");
        assert_eq!(bare.extension(), None);
        assert_eq!(bare.stem(), "README");

        let hidden = AcceptedFile::new(".pdf", 10, "");
        assert_eq!(hidden.extension(), None);
    }

    #[test]
    fn test_size_label() {
        let file = AcceptedFile::new("a.pdf", 1536, "application/pdf");
        assert_eq!(file.size_kb_label(), "1.50 KB");
    }

    #[test]
    fn test_pdf_map_matches_by_mime_or_extension() {
        let map = AcceptMap::pdf();
        assert!(map.matches(&AcceptedFile::new("a.pdf", 1, "application/pdf")));
        assert!(map.matches(&AcceptedFile::new("scan.PDF", 1, "")));
        assert!(map.matches(&AcceptedFile::new("noext", 1, "application/pdf")));
        assert!(!map.matches(&AcceptedFile::new("a.docx", 1, "application/msword")));
    }

    #[test]
    fn test_wildcard_mime() {
        let map = AcceptMap::new().with("image/*", &[]);
        assert!(map.matches(&AcceptedFile::new("x.heic", 1, "image/heic")));
        assert!(!map.matches(&AcceptedFile::new("x.pdf", 1, "application/pdf")));
    }

    #[test]
    fn test_extensions_are_normalised() {
        let map = AcceptMap::new().with("text/csv", &["CSV"]);
        assert_eq!(map.extensions().collect::<Vec<_>>(), vec![".csv"]);
        assert_eq!(map.accept_attribute(), "text/csv,.csv");
    }

    #[test]
    fn test_labels() {
        assert_eq!(AcceptMap::pdf().label(), "PDF");
        assert_eq!(AcceptMap::pdf().rejection_hint(), "Please upload a PDF file.");

        let images = AcceptMap::new()
            .with("image/jpeg", &[".jpg", ".jpeg"])
            .with("image/png", &[".png"]);
        assert_eq!(images.label(), "JPG, JPEG, PNG");
        assert_eq!(images.rejection_hint(), "Accepted formats: .jpg, .jpeg, .png.");
    }

    #[test]
    fn test_empty_map_accepts_anything() {
        let map = AcceptMap::new();
        assert!(map.matches(&AcceptedFile::new("a.bin", 1, "application/octet-stream")));
    }

    #[test]
    fn test_accepted_file_serialization() {
        let file = AcceptedFile::new("a.pdf", 42, "application/pdf");
        let json = serde_json::to_string(&file).unwrap();
        assert!(json.contains("a.pdf"));
        assert!(json.contains("42"));
    }
}
