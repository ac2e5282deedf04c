//! Unlock: remove the password from one PDF.
//!
//! Any non-empty password is accepted.

use super::{require_file, ToolKind, ToolOutcome};
use crate::download::DownloadSpec;
use crate::error::{ToolError, ToolResult};
use crate::models::AcceptedFile;

pub const PASSWORD_REQUIRED: &str = "Password is required to unlock this PDF.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UnlockRequest {
    pub file: Option<AcceptedFile>,
    pub password: String,
}

impl UnlockRequest {
    pub fn process(&self) -> ToolResult<ToolOutcome> {
        let file = require_file(self.file.as_ref())?;
        if self.password.is_empty() {
            return Err(ToolError::MissingRequiredInput(PASSWORD_REQUIRED.to_string()));
        }

        Ok(ToolOutcome::new(
            ToolKind::Unlock,
            DownloadSpec::prefixed("unlocked", &file.name),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locked() -> Option<AcceptedFile> {
        Some(AcceptedFile::new("statement.pdf", 100, "application/pdf"))
    }

    #[test]
    fn test_empty_password() {
        let request = UnlockRequest {
            file: locked(),
            password: String::new(),
        };
        let err = request.process().unwrap_err();
        assert_eq!(err.to_string(), "Password is required to unlock this PDF.");
    }

    #[test]
    fn test_unlocked_output() {
        let request = UnlockRequest {
            file: locked(),
            password: "x".into(),
        };
        let outcome = request.process().unwrap();
        assert_eq!(outcome.download.file_name, "unlocked-statement.pdf");
        assert_eq!(outcome.download.mime, "application/pdf");
    }
}
