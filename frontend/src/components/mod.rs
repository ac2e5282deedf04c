//! UI Components for the PDF Tools application.
//!
//! # Layout Components
//! - [`SiteHeader`] - Brand, tools menu, about/FAQ links, theme toggle
//! - [`Hero`] - Home page title and calls to action
//! - [`SiteFooter`] - Copyright, policy links, retention notice
//! - [`ToolLayout`] - Breadcrumb, heading and notice around a tool page
//!
//! # Feature Components
//! - [`Dropzone`] - File upload with drag & drop, backed by [`IntakeHandle`]
//! - [`ArrangeList`] - Reorder files before merging
//! - [`ProgressBar`] - Cosmetic upload progress
//! - [`ProcessPanel`] - Process button, errors and result
//! - [`DownloadButton`] - Placeholder download with its timed states

mod alert;
mod download;
mod dropzone;
mod file_list;
mod footer;
mod header;
mod hero;
mod progress;
mod tool_layout;

pub use alert::*;
pub use download::*;
pub use dropzone::*;
pub use file_list::*;
pub use footer::*;
pub use header::*;
pub use hero::*;
pub use progress::*;
pub use tool_layout::*;
