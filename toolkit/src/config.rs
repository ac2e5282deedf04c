//! Shared limits and timings.
//!
//! Everything here is a compile-time constant: the demo has no server,
//! no environment and no persisted settings.

/// Product name shown in the header, footer and page titles.
pub const APP_NAME: &str = "PDF Tools";

/// Default maximum size of a single uploaded file (in bytes).
///
/// 100 MB limit, as advertised in the FAQ.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Default maximum number of files a dropzone accepts.
pub const DEFAULT_MAX_FILES: usize = 1;

/// Maximum number of PDFs the merge tool accepts.
pub const MERGE_MAX_FILES: usize = 10;

/// Minimum number of PDFs required to merge.
pub const MERGE_MIN_FILES: usize = 2;

/// Maximum number of files the convert-to-PDF tool accepts.
pub const CONVERT_MAX_FILES: usize = 5;

/// Minimum password length for the protect tool.
pub const MIN_PASSWORD_LEN: usize = 4;

/// Delay of every simulated processing action (milliseconds).
pub const PROCESSING_DELAY_MS: u32 = 2_000;

/// Delay before the synthesized download is saved (milliseconds).
pub const DOWNLOAD_DELAY_MS: u32 = 1_500;

/// How long the "Downloaded" state stays visible (milliseconds).
pub const DOWNLOADED_RESET_MS: u32 = 3_000;

/// Interval between two ticks of the cosmetic upload progress bar (milliseconds).
pub const PROGRESS_TICK_MS: u32 = 200;

/// Percentage points added per progress tick.
pub const PROGRESS_STEP: u8 = 10;

/// Time after which the progress bar is forced to 100% (milliseconds).
pub const PROGRESS_SETTLE_MS: u32 = 2_000;

/// Range of the simulated page count shown by the split tool.
pub const SIMULATED_PAGES_MIN: u32 = 5;
pub const SIMULATED_PAGES_MAX: u32 = 24;

/// Retention notice repeated in the footer and tool pages.
pub const RETENTION_NOTICE: &str = "All files are processed securely and deleted after 1 hour.";
