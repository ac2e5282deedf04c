//! Browser-side services.
//!
//! # Services
//!
//! - [`files`] - `FileList` to toolkit file metadata
//! - [`download`] - Blob download of a synthesized artifact
//! - [`processing`] - Cancellable simulated processing per page

pub mod download;
pub mod files;
pub mod processing;

pub use download::*;
pub use files::*;
pub use processing::*;
