//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **UI State Types** - theme and download button state
//! - **Error Types** - browser API failures

use std::fmt;

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

// =============================================================================
// UI State Types
// =============================================================================

/// Colour scheme toggled from the header. Kept in memory only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Class set on the app root.
    pub fn css_class(&self) -> &'static str {
        match self {
            Theme::Light => "theme-light",
            Theme::Dark => "theme-dark",
        }
    }

    /// Glyph of the toggle button: the theme it switches to.
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }
}

/// Lifecycle of the download button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DownloadState {
    #[default]
    Idle,
    Downloading,
    Downloaded,
}

impl DownloadState {
    pub fn label(&self) -> &'static str {
        match self {
            DownloadState::Idle => "⬇️ Download",
            DownloadState::Downloading => "⏳ Downloading...",
            DownloadState::Downloaded => "✅ Downloaded",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            DownloadState::Idle => "download-button",
            DownloadState::Downloading => "download-button busy",
            DownloadState::Downloaded => "download-button done",
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, DownloadState::Downloading)
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Raised by browser APIs; tool and intake errors come from the toolkit.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// No window, document or body to work with.
    Dom(String),
    /// Building the blob or clicking the link failed.
    Download(String),
    /// Object URL could not be created.
    ObjectUrl(String),
}

impl AppError {
    pub fn download(context: &str, value: JsValue) -> Self {
        AppError::Download(format!("{}: {:?}", context, value))
    }

    pub fn object_url(value: JsValue) -> Self {
        AppError::ObjectUrl(format!("{:?}", value))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Dom(msg) => write!(f, "DOM error: {}", msg),
            AppError::Download(msg) => write!(f, "Download error: {}", msg),
            AppError::ObjectUrl(msg) => write!(f, "Object URL error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::default(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_download_state() {
        assert!(!DownloadState::Idle.is_busy());
        assert!(DownloadState::Downloading.is_busy());
        assert!(DownloadState::Downloaded.label().contains("Downloaded"));
    }

    #[test]
    fn test_state_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        assert_eq!(
            serde_json::to_string(&DownloadState::Downloaded).unwrap(),
            "\"downloaded\""
        );
    }

    #[test]
    fn test_error_display() {
        let err = AppError::Dom("no body".into());
        assert_eq!(err.to_string(), "DOM error: no body");
    }
}
