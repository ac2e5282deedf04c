//! Tool catalogue, requests and simulated outcomes.
//!
//! Each tool page builds a [`ToolRequest`] from its local view-state and
//! hands it to [`crate::processing::simulate`]. Requests are validated the
//! same way the pages gate their buttons; a valid request always yields a
//! [`ToolOutcome`] naming the file to download.
//!
//! # Tools
//!
//! | Tool          | Files | Output                         |
//! |---------------|-------|--------------------------------|
//! | Merge         | 2..10 | `merged-document.pdf`          |
//! | Split         | 1     | `split-pages.zip`              |
//! | Compress      | 1     | `compressed-<name>`            |
//! | Convert       | 1..5  | `<stem>.pdf` or `converted-files.zip` |
//! | PDF to Office | 1     | `<stem>.docx/.xlsx/.pptx/.txt` |
//! | Edit          | 1     | `edited-<name>`                |
//! | Protect       | 1     | `protected-<name>`             |
//! | Unlock        | 1     | `unlocked-<name>`              |

use serde::{Deserialize, Serialize};

use crate::config::MERGE_MAX_FILES;
use crate::download::DownloadSpec;
use crate::error::{ToolError, ToolResult};
use crate::intake::IntakeConfig;
use crate::models::AcceptedFile;

pub mod compress;
pub mod convert;
pub mod edit;
pub mod merge;
pub mod office;
pub mod protect;
pub mod split;
pub mod unlock;

pub use compress::{format_file_size, CompressRequest, CompressionPreset};
pub use convert::{ConvertCategory, ConvertRequest};
pub use edit::{Anchor, EditMode, EditOptions, EditRequest, PenTool};
pub use merge::MergeRequest;
pub use office::{OfficeFormat, OfficeRequest};
pub use protect::{Permission, Permissions, ProtectRequest};
pub use split::{parse_page_ranges, SplitMethod, SplitRequest};
pub use unlock::UnlockRequest;

// =============================================================================
// Catalogue
// =============================================================================

/// Every tool the site offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolKind {
    Merge,
    Split,
    Compress,
    ConvertToPdf,
    PdfToOffice,
    Edit,
    Protect,
    Unlock,
}

impl ToolKind {
    /// Catalogue order, as listed in the header menu and on the home page.
    pub const ALL: [ToolKind; 8] = [
        ToolKind::Merge,
        ToolKind::Split,
        ToolKind::Compress,
        ToolKind::ConvertToPdf,
        ToolKind::PdfToOffice,
        ToolKind::Edit,
        ToolKind::Protect,
        ToolKind::Unlock,
    ];

    /// Route segment under `/tools/`.
    pub fn slug(&self) -> &'static str {
        match self {
            ToolKind::Merge => "merge",
            ToolKind::Split => "split",
            ToolKind::Compress => "compress",
            ToolKind::ConvertToPdf => "convert-to-pdf",
            ToolKind::PdfToOffice => "pdf-to-office",
            ToolKind::Edit => "edit",
            ToolKind::Protect => "protect",
            ToolKind::Unlock => "unlock",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.slug() == slug)
    }

    pub fn href(&self) -> String {
        format!("/tools/{}", self.slug())
    }

    /// Name used in menus and on the home page cards.
    pub fn nav_name(&self) -> &'static str {
        match self {
            ToolKind::Merge => "Merge PDFs",
            ToolKind::Split => "Split PDFs",
            ToolKind::Compress => "Compress PDFs",
            ToolKind::ConvertToPdf => "Convert to PDF",
            ToolKind::PdfToOffice => "PDF to Office",
            ToolKind::Edit => "Edit PDFs",
            ToolKind::Protect => "Protect PDFs",
            ToolKind::Unlock => "Unlock PDFs",
        }
    }

    /// One-line pitch on the home page card.
    pub fn card_description(&self) -> &'static str {
        match self {
            ToolKind::Merge => "Combine multiple PDF files into one document",
            ToolKind::Split => "Extract pages or split PDF by page ranges",
            ToolKind::Compress => "Reduce file size while maintaining quality",
            ToolKind::ConvertToPdf => "Convert Word, Excel, PowerPoint, images to PDF",
            ToolKind::PdfToOffice => "Convert PDFs back to editable formats",
            ToolKind::Edit => "Add text, images, annotations, or watermarks",
            ToolKind::Protect => "Add passwords or permissions to PDFs",
            ToolKind::Unlock => "Remove passwords from PDFs",
        }
    }

    /// Heading of the tool page.
    pub fn page_title(&self) -> &'static str {
        match self {
            ToolKind::Merge => "Merge PDFs",
            ToolKind::Split => "Split PDF",
            ToolKind::Compress => "Compress PDF",
            ToolKind::ConvertToPdf => "Convert to PDF",
            ToolKind::PdfToOffice => "PDF to Office",
            ToolKind::Edit => "Edit PDF",
            ToolKind::Protect => "Protect PDF",
            ToolKind::Unlock => "Unlock PDF",
        }
    }

    pub fn page_description(&self) -> &'static str {
        match self {
            ToolKind::Merge => "Combine multiple PDF files into a single document. Arrange the files in the order you want them to appear in the final PDF.",
            ToolKind::Split => "Extract pages or split PDF by page ranges. Create multiple PDFs from a single document.",
            ToolKind::Compress => "Reduce the file size of your PDF documents while maintaining quality. Perfect for sharing via email or uploading to websites.",
            ToolKind::ConvertToPdf => "Convert various file formats to PDF. Support for documents, spreadsheets, presentations, and images.",
            ToolKind::PdfToOffice => "Convert PDF files to editable Microsoft Office formats. Extract text and formatting from your PDFs.",
            ToolKind::Edit => "Add text, images, annotations, or watermarks to your PDF documents. Make changes without needing to recreate the entire document.",
            ToolKind::Protect => "Add password protection and set permissions for your PDF documents. Control who can view, edit, print, or copy content from your PDFs.",
            ToolKind::Unlock => "Remove password protection from PDF files. Unlock password-protected PDFs to enable editing, printing, and copying.",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToolKind::Merge => "🔗",
            ToolKind::Split => "✂️",
            ToolKind::Compress => "🗜️",
            ToolKind::ConvertToPdf => "📥",
            ToolKind::PdfToOffice => "📄",
            ToolKind::Edit => "✏️",
            ToolKind::Protect => "🔒",
            ToolKind::Unlock => "🔓",
        }
    }

    /// Label of the process button while idle.
    pub fn action_label(&self) -> &'static str {
        match self {
            ToolKind::Merge => "Merge PDFs",
            ToolKind::Split => "Split PDF",
            ToolKind::Compress => "Compress PDF",
            ToolKind::ConvertToPdf => "Convert to PDF",
            ToolKind::PdfToOffice => "Convert",
            ToolKind::Edit => "Save Changes",
            ToolKind::Protect => "Protect PDF",
            ToolKind::Unlock => "Unlock PDF",
        }
    }

    /// Label of the process button while the simulation runs.
    pub fn busy_label(&self) -> &'static str {
        match self {
            ToolKind::Compress => "Compressing...",
            ToolKind::ConvertToPdf | ToolKind::PdfToOffice => "Converting...",
            ToolKind::Edit => "Saving...",
            ToolKind::Unlock => "Unlocking...",
            _ => "Processing...",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            ToolKind::Merge => "Your PDFs have been successfully merged!",
            ToolKind::Split => "Your PDF has been successfully split!",
            ToolKind::Compress => "Your PDF has been successfully compressed!",
            ToolKind::ConvertToPdf => "Your files have been successfully converted to PDF!",
            ToolKind::PdfToOffice => "Your PDF has been successfully converted!",
            ToolKind::Edit => "Your PDF has been successfully edited!",
            ToolKind::Protect => "Your PDF has been successfully protected with a password!",
            ToolKind::Unlock => "Your PDF has been successfully unlocked!",
        }
    }

    /// Dropzone settings of the tool page.
    ///
    /// The convert page swaps the accept map per category, see
    /// [`ConvertCategory::intake_config`].
    pub fn intake_config(&self) -> IntakeConfig {
        match self {
            ToolKind::Merge => IntakeConfig::pdf(MERGE_MAX_FILES),
            ToolKind::ConvertToPdf => ConvertCategory::default().intake_config(),
            _ => IntakeConfig::pdf(1),
        }
    }
}

impl std::fmt::Display for ToolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.page_title())
    }
}

// =============================================================================
// Requests and Outcomes
// =============================================================================

/// A fully specified processing request from one tool page.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolRequest {
    Merge(MergeRequest),
    Split(SplitRequest),
    Compress(CompressRequest),
    ConvertToPdf(ConvertRequest),
    PdfToOffice(OfficeRequest),
    Edit(EditRequest),
    Protect(ProtectRequest),
    Unlock(UnlockRequest),
}

impl ToolRequest {
    pub fn kind(&self) -> ToolKind {
        match self {
            ToolRequest::Merge(_) => ToolKind::Merge,
            ToolRequest::Split(_) => ToolKind::Split,
            ToolRequest::Compress(_) => ToolKind::Compress,
            ToolRequest::ConvertToPdf(_) => ToolKind::ConvertToPdf,
            ToolRequest::PdfToOffice(_) => ToolKind::PdfToOffice,
            ToolRequest::Edit(_) => ToolKind::Edit,
            ToolRequest::Protect(_) => ToolKind::Protect,
            ToolRequest::Unlock(_) => ToolKind::Unlock,
        }
    }

    /// Produce the simulated result.
    pub fn process(&self) -> ToolResult<ToolOutcome> {
        match self {
            ToolRequest::Merge(req) => req.process(),
            ToolRequest::Split(req) => req.process(),
            ToolRequest::Compress(req) => req.process(),
            ToolRequest::ConvertToPdf(req) => req.process(),
            ToolRequest::PdfToOffice(req) => req.process(),
            ToolRequest::Edit(req) => req.process(),
            ToolRequest::Protect(req) => req.process(),
            ToolRequest::Unlock(req) => req.process(),
        }
    }
}

/// Tool-specific figures reported next to the success message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum OutcomeDetail {
    None,
    Merged { files: usize },
    Split { documents: usize, pages: usize },
    Compressed {
        original: u64,
        compressed: u64,
        reduction_percent: u32,
    },
    Converted { files: usize },
}

/// Result of a simulated processing run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolOutcome {
    pub tool: ToolKind,
    pub message: String,
    pub download: DownloadSpec,
    pub detail: OutcomeDetail,
}

impl ToolOutcome {
    pub fn new(tool: ToolKind, download: DownloadSpec) -> Self {
        Self {
            tool,
            message: tool.success_message().to_string(),
            download,
            detail: OutcomeDetail::None,
        }
    }

    pub fn with_detail(mut self, detail: OutcomeDetail) -> Self {
        self.detail = detail;
        self
    }
}

/// Message shown when a single-file tool is run without a file.
pub const NO_FILE_SELECTED: &str = "Please upload a PDF file first.";

/// The selected file of a single-file tool, or a missing-input error.
pub(crate) fn require_file(file: Option<&AcceptedFile>) -> ToolResult<&AcceptedFile> {
    file.ok_or_else(|| ToolError::MissingRequiredInput(NO_FILE_SELECTED.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_roundtrip() {
        for tool in ToolKind::ALL {
            assert_eq!(ToolKind::from_slug(tool.slug()), Some(tool));
            assert!(tool.href().starts_with("/tools/"));
        }
        assert_eq!(ToolKind::from_slug("rotate"), None);
    }

    #[test]
    fn test_serde_uses_slugs() {
        for tool in ToolKind::ALL {
            let json = serde_json::to_string(&tool).unwrap();
            assert_eq!(json, format!("\"{}\"", tool.slug()));
        }
    }

    #[test]
    fn test_default_intake_configs() {
        assert_eq!(ToolKind::Merge.intake_config().max_files, 10);
        assert_eq!(ToolKind::ConvertToPdf.intake_config().max_files, 5);
        for tool in [ToolKind::Split, ToolKind::Protect, ToolKind::Unlock] {
            let config = tool.intake_config();
            assert_eq!(config.max_files, 1);
            assert_eq!(config.accept.label(), "PDF");
        }
    }

    #[test]
    fn test_request_kind_matches_outcome() {
        let file = AcceptedFile::new("a.pdf", 2048, "application/pdf");
        let request = ToolRequest::Unlock(UnlockRequest {
            file: Some(file),
            password: "secret".into(),
        });
        let outcome = request.process().unwrap();
        assert_eq!(outcome.tool, request.kind());
        assert_eq!(outcome.message, "Your PDF has been successfully unlocked!");
    }

    #[test]
    fn test_outcome_serialization() {
        let outcome = ToolOutcome::new(ToolKind::Merge, DownloadSpec::pdf("merged-document.pdf"))
            .with_detail(OutcomeDetail::Merged { files: 3 });
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["tool"], "merge");
        assert_eq!(json["detail"]["type"], "merged");
        assert_eq!(json["download"]["fileName"], "merged-document.pdf");
    }

    #[test]
    fn test_missing_file() {
        let err = require_file(None).unwrap_err();
        assert_eq!(err, ToolError::MissingRequiredInput(NO_FILE_SELECTED.into()));
    }
}
