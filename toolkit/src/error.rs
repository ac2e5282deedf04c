//! Error types for the PDF Tools intake and tool pages.
//!
//! Two families, one per concern:
//!
//! - [`IntakeError`] - a submitted batch of files was rejected by the dropzone
//! - [`ToolError`] - a tool request is missing input or has invalid options
//!
//! The `Display` text of every variant is the message shown inline to the
//! user, so keep them short and sentence-cased.

use thiserror::Error;

// =============================================================================
// Intake Errors
// =============================================================================

/// Rejection of a whole batch of candidate files.
///
/// Only the first violated constraint is reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    /// Admitting the batch would exceed the configured file count.
    #[error("You can only upload up to {} file{}.", .max, plural_suffix(.max))]
    TooManyFiles { max: usize },

    /// A file is larger than the configured per-file limit.
    #[error("File is too large. Max size is {}MB.", format_megabytes(.max_bytes))]
    FileTooLarge { name: String, max_bytes: u64 },

    /// A file's declared type matches none of the accepted types.
    #[error("Invalid file type. {expected}")]
    InvalidFileType { name: String, expected: String },
}

impl IntakeError {
    /// Name of the offending file, when the error is about a single file.
    pub fn file_name(&self) -> Option<&str> {
        match self {
            IntakeError::TooManyFiles { .. } => None,
            IntakeError::FileTooLarge { name, .. } | IntakeError::InvalidFileType { name, .. } => {
                Some(name)
            }
        }
    }
}

fn plural_suffix(count: &usize) -> &'static str {
    if *count == 1 {
        ""
    } else {
        "s"
    }
}

fn format_megabytes(bytes: &u64) -> String {
    let mb = *bytes as f64 / (1024.0 * 1024.0);
    if mb.fract() == 0.0 {
        format!("{}", mb as u64)
    } else {
        format!("{:.1}", mb)
    }
}

// =============================================================================
// Tool Errors
// =============================================================================

/// Errors raised when a tool request is validated before processing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    /// A required field was left empty.
    #[error("{0}")]
    MissingRequiredInput(String),

    /// The tool needs more files than were provided.
    #[error("Please upload at least {required} files (got {actual}).")]
    NotEnoughFiles { required: usize, actual: usize },

    /// Password shorter than the minimum length.
    #[error("Password must be at least {min} characters")]
    WeakPassword { min: usize },

    /// Password and confirmation differ.
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// Unparseable or out-of-bounds page range expression.
    #[error("Invalid page range: {0}")]
    InvalidPageRange(String),

    /// An editing or conversion option is out of range.
    #[error("Invalid value for '{field}': {message}")]
    InvalidOption { field: String, message: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for intake operations.
pub type IntakeResult<T> = Result<T, IntakeError>;

/// Result type for tool processing.
pub type ToolResult<T> = Result<T, ToolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_many_files_pluralisation() {
        assert_eq!(
            IntakeError::TooManyFiles { max: 1 }.to_string(),
            "You can only upload up to 1 file."
        );
        assert_eq!(
            IntakeError::TooManyFiles { max: 10 }.to_string(),
            "You can only upload up to 10 files."
        );
    }

    #[test]
    fn test_file_too_large_message() {
        let err = IntakeError::FileTooLarge {
            name: "big.pdf".into(),
            max_bytes: 100 * 1024 * 1024,
        };
        assert_eq!(err.to_string(), "File is too large. Max size is 100MB.");
        assert_eq!(err.file_name(), Some("big.pdf"));
    }

    #[test]
    fn test_fractional_megabytes() {
        let err = IntakeError::FileTooLarge {
            name: "a.pdf".into(),
            max_bytes: 1024 * 1024 + 512 * 1024,
        };
        assert!(err.to_string().contains("1.5MB"));
    }

    #[test]
    fn test_missing_input_is_verbatim() {
        let err = ToolError::MissingRequiredInput("Password is required to unlock this PDF.".into());
        assert_eq!(err.to_string(), "Password is required to unlock this PDF.");
    }

    #[test]
    fn test_invalid_option_format() {
        let err = ToolError::InvalidOption {
            field: "textColor".into(),
            message: "expected #rrggbb".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("textColor"));
        assert!(msg.contains("expected #rrggbb"));
    }
}
