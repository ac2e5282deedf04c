//! Merge: combine the accepted PDFs, in list order, into one document.

use super::{OutcomeDetail, ToolKind, ToolOutcome};
use crate::config::MERGE_MIN_FILES;
use crate::download::DownloadSpec;
use crate::error::{ToolError, ToolResult};
use crate::models::AcceptedFile;

pub const MERGED_FILE_NAME: &str = "merged-document.pdf";

/// Files to merge, in the order chosen on the page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MergeRequest {
    pub files: Vec<AcceptedFile>,
}

impl MergeRequest {
    pub fn new(files: Vec<AcceptedFile>) -> Self {
        Self { files }
    }

    /// The merge button is enabled from two files on.
    pub fn is_ready(&self) -> bool {
        self.files.len() >= MERGE_MIN_FILES
    }

    pub fn process(&self) -> ToolResult<ToolOutcome> {
        if !self.is_ready() {
            return Err(ToolError::NotEnoughFiles {
                required: MERGE_MIN_FILES,
                actual: self.files.len(),
            });
        }

        Ok(
            ToolOutcome::new(ToolKind::Merge, DownloadSpec::pdf(MERGED_FILE_NAME)).with_detail(
                OutcomeDetail::Merged {
                    files: self.files.len(),
                },
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdfs(count: usize) -> Vec<AcceptedFile> {
        (0..count)
            .map(|i| AcceptedFile::new(format!("part-{}.pdf", i), 100, "application/pdf"))
            .collect()
    }

    #[test]
    fn test_needs_two_files() {
        let err = MergeRequest::new(pdfs(1)).process().unwrap_err();
        assert_eq!(err, ToolError::NotEnoughFiles { required: 2, actual: 1 });
        assert!(!MergeRequest::default().is_ready());
    }

    #[test]
    fn test_merge_outcome() {
        let outcome = MergeRequest::new(pdfs(3)).process().unwrap();
        assert_eq!(outcome.download.file_name, MERGED_FILE_NAME);
        assert_eq!(outcome.download.mime, "application/pdf");
        assert_eq!(outcome.detail, OutcomeDetail::Merged { files: 3 });
    }
}
