//! PDF to Office: export one PDF as Word, Excel, PowerPoint or plain text.

use serde::{Deserialize, Serialize};

use super::{require_file, ToolKind, ToolOutcome};
use crate::download::DownloadSpec;
use crate::error::ToolResult;
use crate::models::AcceptedFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfficeFormat {
    #[default]
    Word,
    Excel,
    PowerPoint,
    Text,
}

impl OfficeFormat {
    pub const ALL: [OfficeFormat; 4] = [
        OfficeFormat::Word,
        OfficeFormat::Excel,
        OfficeFormat::PowerPoint,
        OfficeFormat::Text,
    ];

    pub fn extension(&self) -> &'static str {
        match self {
            OfficeFormat::Word => "docx",
            OfficeFormat::Excel => "xlsx",
            OfficeFormat::PowerPoint => "pptx",
            OfficeFormat::Text => "txt",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OfficeFormat::Word => "Word",
            OfficeFormat::Excel => "Excel",
            OfficeFormat::PowerPoint => "PowerPoint",
            OfficeFormat::Text => "Text",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            OfficeFormat::Word => "Convert PDF to editable Word document (.docx)",
            OfficeFormat::Excel => "Convert PDF tables to Excel spreadsheet (.xlsx)",
            OfficeFormat::PowerPoint => "Convert PDF to PowerPoint presentation (.pptx)",
            OfficeFormat::Text => "Extract plain text from PDF (.txt)",
        }
    }

    /// Idle label of the convert button.
    pub fn action_label(&self) -> String {
        format!("Convert to {}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OfficeRequest {
    pub file: Option<AcceptedFile>,
    pub format: OfficeFormat,
}

impl OfficeRequest {
    pub fn process(&self) -> ToolResult<ToolOutcome> {
        let file = require_file(self.file.as_ref())?;
        let name = format!("{}.{}", file.stem(), self.format.extension());
        Ok(ToolOutcome::new(
            ToolKind::PdfToOffice,
            DownloadSpec::octet_stream(name),
        ))
    }
}
