//! Convert to PDF: documents, spreadsheets, presentations or images.

use serde::{Deserialize, Serialize};

use super::{OutcomeDetail, ToolKind, ToolOutcome};
use crate::config::CONVERT_MAX_FILES;
use crate::download::DownloadSpec;
use crate::error::{ToolError, ToolResult};
use crate::intake::IntakeConfig;
use crate::models::{AcceptMap, AcceptedFile};

pub const CONVERTED_ARCHIVE_NAME: &str = "converted-files.zip";

/// Source family picked with the tabs of the convert page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConvertCategory {
    #[default]
    Document,
    Spreadsheet,
    Presentation,
    Image,
}

impl ConvertCategory {
    pub const ALL: [ConvertCategory; 4] = [
        ConvertCategory::Document,
        ConvertCategory::Spreadsheet,
        ConvertCategory::Presentation,
        ConvertCategory::Image,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ConvertCategory::Document => "Documents",
            ConvertCategory::Spreadsheet => "Spreadsheets",
            ConvertCategory::Presentation => "Presentations",
            ConvertCategory::Image => "Images",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ConvertCategory::Document => "Convert Word documents, text files, and RTF files to PDF.",
            ConvertCategory::Spreadsheet => "Convert Excel spreadsheets and CSV files to PDF.",
            ConvertCategory::Presentation => "Convert PowerPoint presentations to PDF.",
            ConvertCategory::Image => "Convert images (JPG, PNG, GIF, etc.) to PDF.",
        }
    }

    pub fn accept_map(&self) -> AcceptMap {
        match self {
            ConvertCategory::Document => AcceptMap::new()
                .with("application/msword", &[".doc"])
                .with(
                    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
                    &[".docx"],
                )
                .with("application/vnd.oasis.opendocument.text", &[".odt"])
                .with("text/plain", &[".txt"])
                .with("text/rtf", &[".rtf"]),
            ConvertCategory::Spreadsheet => AcceptMap::new()
                .with("application/vnd.ms-excel", &[".xls"])
                .with(
                    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
                    &[".xlsx"],
                )
                .with("application/vnd.oasis.opendocument.spreadsheet", &[".ods"])
                .with("text/csv", &[".csv"]),
            ConvertCategory::Presentation => AcceptMap::new()
                .with("application/vnd.ms-powerpoint", &[".ppt"])
                .with(
                    "application/vnd.openxmlformats-officedocument.presentationml.presentation",
                    &[".pptx"],
                )
                .with("application/vnd.oasis.opendocument.presentation", &[".odp"]),
            ConvertCategory::Image => AcceptMap::new()
                .with("image/jpeg", &[".jpg", ".jpeg"])
                .with("image/png", &[".png"])
                .with("image/gif", &[".gif"])
                .with("image/bmp", &[".bmp"])
                .with("image/tiff", &[".tif", ".tiff"])
                .with("image/webp", &[".webp"]),
        }
    }

    /// Dropzone settings while this tab is active.
    pub fn intake_config(&self) -> IntakeConfig {
        IntakeConfig::default()
            .with_max_files(CONVERT_MAX_FILES)
            .with_accept(self.accept_map())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConvertRequest {
    pub files: Vec<AcceptedFile>,
    pub category: ConvertCategory,
}

impl ConvertRequest {
    pub fn process(&self) -> ToolResult<ToolOutcome> {
        let download = match self.files.as_slice() {
            [] => {
                return Err(ToolError::MissingRequiredInput(
                    "Please upload at least one file to convert.".to_string(),
                ))
            }
            [single] => DownloadSpec::pdf(format!("{}.pdf", single.stem())),
            _ => DownloadSpec::zip(CONVERTED_ARCHIVE_NAME),
        };

        Ok(ToolOutcome::new(ToolKind::ConvertToPdf, download).with_detail(
            OutcomeDetail::Converted {
                files: self.files.len(),
            },
        ))
    }
}
