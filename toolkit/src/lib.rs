//! # PDF Tools - file intake and simulated document tools
//!
//! Browser-independent core of the PDF Tools site: the upload intake surface,
//! the tool catalogue, per-tool requests and the synthesized downloads.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Dropped /  │────▶│   Intake    │────▶│ ToolRequest │────▶│  Download   │
//! │ picked file │     │ (validate)  │     │ (simulate)  │     │ (placeholder│
//! └─────────────┘     └─────────────┘     └─────────────┘     │    PDF)     │
//!                                                             └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use futures::executor::block_on;
//! use futures::future::ready;
//! use pdftools::tools::{MergeRequest, ToolRequest};
//! use pdftools::{simulate, AcceptedFile, IntakeSurface, ToolKind};
//!
//! let mut surface = IntakeSurface::new(ToolKind::Merge.intake_config());
//! surface
//!     .submit(vec![
//!         AcceptedFile::new("a.pdf", 1_024, "application/pdf"),
//!         AcceptedFile::new("b.pdf", 2_048, "application/pdf"),
//!     ])
//!     .unwrap();
//!
//! let request = ToolRequest::Merge(MergeRequest::new(surface.files().to_vec()));
//! let outcome = block_on(simulate(ready(()), request)).unwrap();
//! assert_eq!(outcome.download.file_name, "merged-document.pdf");
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Intake and tool error types
//! - [`config`] - Limits, timings and fixed copy
//! - [`models`] - Accepted files and accept maps
//! - [`intake`] - The upload intake surface
//! - [`progress`] - Simulated upload progress
//! - [`tools`] - Tool catalogue, requests and outcomes
//! - [`processing`] - Delayed, cancellable processing runs
//! - [`download`] - Output names and the placeholder PDF

// Core modules
pub mod config;
pub mod error;
pub mod models;

// Intake
pub mod intake;
pub mod progress;

// Tools
pub mod processing;
pub mod tools;

// Output
pub mod download;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{IntakeError, IntakeResult, ToolError, ToolResult};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{AcceptMap, AcceptedFile};

// =============================================================================
// Re-exports - Intake
// =============================================================================

pub use intake::{IntakeConfig, IntakeSurface};
pub use progress::UploadProgress;

// =============================================================================
// Re-exports - Tools
// =============================================================================

pub use processing::{simulate, ProcessingJob};
pub use tools::{OutcomeDetail, ToolKind, ToolOutcome, ToolRequest};

// =============================================================================
// Re-exports - Download
// =============================================================================

pub use download::{placeholder_pdf, DownloadArtifact, DownloadSpec};
