//! Application configuration.
//!
//! Limits, timings and copy shared with the toolkit are re-exported from
//! [`pdftools::config`]; the rest only matters to the browser.

pub use pdftools::config::{
    APP_NAME, DOWNLOADED_RESET_MS, DOWNLOAD_DELAY_MS, PROCESSING_DELAY_MS, PROGRESS_SETTLE_MS,
    PROGRESS_TICK_MS, RETENTION_NOTICE,
};

/// Glyph next to the brand name.
pub const BRAND_ICON: &str = "📄";

/// Footer policy links as (label, href).
pub const POLICY_LINKS: [(&str, &str); 3] = [
    ("Privacy", "/privacy"),
    ("Terms", "/terms"),
    ("Contact", "/contact"),
];

/// Longer notice at the bottom of every tool page.
pub const TOOL_PRIVACY_NOTICE: &str = "This tool processes your files securely. All uploaded files are automatically deleted after 1 hour to ensure your privacy. We do not store or access the content of your files.";
