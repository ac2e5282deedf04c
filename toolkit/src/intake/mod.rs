//! Upload intake surface shared by every tool page.
//!
//! The surface owns the list of accepted files for one page instance.
//! Batches are validated all-or-nothing, in this order:
//!
//! 1. file count after admission ≤ `max_files`
//! 2. every file ≤ `max_size`
//! 3. every file matches the [`AcceptMap`]
//!
//! The first violated constraint becomes the single error message; the
//! accepted list is left untouched. Every successful mutation notifies the
//! registered listener with the full list.
//!
//! # Example
//!
//! ```
//! use pdftools::{AcceptedFile, IntakeConfig, IntakeSurface};
//!
//! let mut surface = IntakeSurface::new(IntakeConfig::pdf(10));
//! let batch = vec![
//!     AcceptedFile::new("a.pdf", 1_024, "application/pdf"),
//!     AcceptedFile::new("b.pdf", 2_048, "application/pdf"),
//! ];
//! assert_eq!(surface.submit(batch).unwrap().len(), 2);
//! surface.move_down(0);
//! assert_eq!(surface.files()[0].name, "b.pdf");
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_MAX_FILES, DEFAULT_MAX_FILE_SIZE};
use crate::error::{IntakeError, IntakeResult};
use crate::models::{AcceptMap, AcceptedFile};

// =============================================================================
// Configuration
// =============================================================================

/// Immutable settings of one dropzone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeConfig {
    /// Maximum number of files held at once.
    pub max_files: usize,
    /// Maximum size of a single file in bytes.
    pub max_size: u64,
    /// Accepted MIME type → extensions pairs.
    pub accept: AcceptMap,
}

impl IntakeConfig {
    /// PDF-only dropzone holding up to `max_files` files.
    pub fn pdf(max_files: usize) -> Self {
        Self {
            max_files,
            ..Self::default()
        }
    }

    pub fn with_max_files(mut self, max_files: usize) -> Self {
        self.max_files = max_files;
        self
    }

    pub fn with_max_size(mut self, max_size: u64) -> Self {
        self.max_size = max_size;
        self
    }

    pub fn with_accept(mut self, accept: AcceptMap) -> Self {
        self.accept = accept;
        self
    }

    /// Maximum size in whole megabytes, for hints.
    pub fn max_size_mb(&self) -> u64 {
        self.max_size / (1024 * 1024)
    }

    /// "Upload a PDF file" / "Upload up to 10 PDF files".
    pub fn upload_hint(&self) -> String {
        let label = self.accept.label();
        if self.max_files == 1 {
            format!("Upload a {} file", label)
        } else {
            format!("Upload up to {} {} files", self.max_files, label)
        }
    }
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            max_files: DEFAULT_MAX_FILES,
            max_size: DEFAULT_MAX_FILE_SIZE,
            accept: AcceptMap::pdf(),
        }
    }
}

// =============================================================================
// Surface
// =============================================================================

type Listener = Box<dyn FnMut(&[AcceptedFile])>;

/// Accepted-file list plus its validation state.
pub struct IntakeSurface {
    config: IntakeConfig,
    files: Vec<AcceptedFile>,
    error: Option<IntakeError>,
    listener: Option<Listener>,
}

impl IntakeSurface {
    pub fn new(config: IntakeConfig) -> Self {
        Self {
            config,
            files: Vec::new(),
            error: None,
            listener: None,
        }
    }

    /// Register the callback invoked with the full list after each change.
    pub fn with_listener(mut self, listener: impl FnMut(&[AcceptedFile]) + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    pub fn config(&self) -> &IntakeConfig {
        &self.config
    }

    pub fn files(&self) -> &[AcceptedFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Error left by the last rejected batch, cleared on the next submit.
    pub fn error(&self) -> Option<&IntakeError> {
        self.error.as_ref()
    }

    /// Validate `incoming` and append it on success.
    pub fn submit(&mut self, incoming: Vec<AcceptedFile>) -> IntakeResult<&[AcceptedFile]> {
        self.error = None;

        if let Err(err) = self.check(&incoming) {
            log::debug!("intake rejected batch of {}: {}", incoming.len(), err);
            self.error = Some(err.clone());
            return Err(err);
        }

        log::debug!(
            "intake accepted {} file(s), {} held",
            incoming.len(),
            self.files.len() + incoming.len()
        );
        self.files.extend(incoming);
        self.notify();
        Ok(&self.files)
    }

    /// Remove the file at `index`. Out of range is a no-op.
    pub fn remove(&mut self, index: usize) -> Option<AcceptedFile> {
        if index >= self.files.len() {
            return None;
        }
        let removed = self.files.remove(index);
        self.notify();
        Some(removed)
    }

    /// Swap the file at `index` with the one above it.
    pub fn move_up(&mut self, index: usize) -> bool {
        if index == 0 || index >= self.files.len() {
            return false;
        }
        self.files.swap(index - 1, index);
        self.notify();
        true
    }

    /// Swap the file at `index` with the one below it.
    pub fn move_down(&mut self, index: usize) -> bool {
        if index + 1 >= self.files.len() {
            return false;
        }
        self.files.swap(index, index + 1);
        self.notify();
        true
    }

    /// Move the file at `from` to position `to`, shifting the others.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        let len = self.files.len();
        if from == to || from >= len || to >= len {
            return false;
        }
        let file = self.files.remove(from);
        self.files.insert(to, file);
        self.notify();
        true
    }

    /// Drop every accepted file and the pending error.
    pub fn clear(&mut self) {
        self.files.clear();
        self.error = None;
        self.notify();
    }

    /// Switch to new limits; the list no longer applies and is cleared.
    pub fn reconfigure(&mut self, config: IntakeConfig) {
        self.config = config;
        self.clear();
    }

    fn check(&self, incoming: &[AcceptedFile]) -> IntakeResult<()> {
        if self.files.len() + incoming.len() > self.config.max_files {
            return Err(IntakeError::TooManyFiles {
                max: self.config.max_files,
            });
        }

        if let Some(file) = incoming.iter().find(|f| f.size > self.config.max_size) {
            return Err(IntakeError::FileTooLarge {
                name: file.name.clone(),
                max_bytes: self.config.max_size,
            });
        }

        if let Some(file) = incoming.iter().find(|f| !self.config.accept.matches(f)) {
            return Err(IntakeError::InvalidFileType {
                name: file.name.clone(),
                expected: self.config.accept.rejection_hint(),
            });
        }

        Ok(())
    }

    fn notify(&mut self) {
        if let Some(listener) = self.listener.as_mut() {
            listener(&self.files);
        }
    }
}

impl std::fmt::Debug for IntakeSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntakeSurface")
            .field("config", &self.config)
            .field("files", &self.files)
            .field("error", &self.error)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    const MB: u64 = 1024 * 1024;

    fn pdf(name: &str) -> AcceptedFile {
        AcceptedFile::new(name, 10 * 1024, "application/pdf")
    }

    fn pdfs(count: usize) -> Vec<AcceptedFile> {
        (0..count).map(|i| pdf(&format!("doc-{}.pdf", i))).collect()
    }

    fn names(surface: &IntakeSurface) -> Vec<String> {
        surface.files().iter().map(|f| f.name.clone()).collect()
    }

    #[test]
    fn test_merge_surface_accepts_three() {
        let mut surface = IntakeSurface::new(IntakeConfig::pdf(10));
        let list = surface.submit(pdfs(3)).unwrap();
        assert_eq!(list.len(), 3);
        assert!(surface.error().is_none());
    }

    #[test]
    fn test_submit_appends_to_previous() {
        let mut surface = IntakeSurface::new(IntakeConfig::pdf(10));
        surface.submit(vec![pdf("a.pdf")]).unwrap();
        surface.submit(vec![pdf("b.pdf"), pdf("c.pdf")]).unwrap();
        assert_eq!(names(&surface), vec!["a.pdf", "b.pdf", "c.pdf"]);
    }

    #[test]
    fn test_too_many_rejects_whole_batch() {
        let mut surface = IntakeSurface::new(IntakeConfig::pdf(3));
        surface.submit(pdfs(2)).unwrap();

        let err = surface.submit(vec![pdf("x.pdf"), pdf("y.pdf")]).unwrap_err();
        assert_eq!(err, IntakeError::TooManyFiles { max: 3 });
        assert_eq!(surface.len(), 2);
        assert_eq!(surface.error(), Some(&err));
    }

    #[test]
    fn test_file_too_large_150mb() {
        let mut surface = IntakeSurface::new(IntakeConfig::pdf(1));
        let big = AcceptedFile::new("huge.pdf", 150 * MB, "application/pdf");
        let err = surface.submit(vec![big]).unwrap_err();
        assert!(matches!(err, IntakeError::FileTooLarge { ref name, max_bytes } if name == "huge.pdf" && max_bytes == 100 * MB));
        assert!(surface.is_empty());
    }

    #[test]
    fn test_size_at_limit_is_accepted() {
        let mut surface = IntakeSurface::new(IntakeConfig::pdf(1).with_max_size(5 * MB));
        let exact = AcceptedFile::new("exact.pdf", 5 * MB, "application/pdf");
        assert!(surface.submit(vec![exact]).is_ok());
    }

    #[test]
    fn test_invalid_type() {
        let mut surface = IntakeSurface::new(IntakeConfig::pdf(5));
        let err = surface
            .submit(vec![pdf("ok.pdf"), AcceptedFile::new("photo.png", 10, "image/png")])
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid file type. Please upload a PDF file.");
        assert!(surface.is_empty());
    }

    #[test]
    fn test_count_checked_before_size_and_type() {
        let mut surface = IntakeSurface::new(IntakeConfig::pdf(1));
        let batch = vec![
            AcceptedFile::new("huge.png", 500 * MB, "image/png"),
            AcceptedFile::new("other.png", 500 * MB, "image/png"),
        ];
        assert!(matches!(
            surface.submit(batch).unwrap_err(),
            IntakeError::TooManyFiles { .. }
        ));

        let batch = vec![AcceptedFile::new("huge.png", 500 * MB, "image/png")];
        assert!(matches!(
            surface.submit(batch).unwrap_err(),
            IntakeError::FileTooLarge { .. }
        ));
    }

    #[test]
    fn test_error_cleared_by_next_submit() {
        let mut surface = IntakeSurface::new(IntakeConfig::pdf(1));
        let _ = surface.submit(pdfs(2));
        assert!(surface.error().is_some());
        surface.submit(pdfs(1)).unwrap();
        assert!(surface.error().is_none());
    }

    #[test]
    fn test_listener_receives_full_list() {
        let seen = Rc::new(RefCell::new(Vec::<usize>::new()));
        let sink = seen.clone();
        let mut surface = IntakeSurface::new(IntakeConfig::pdf(10))
            .with_listener(move |files| sink.borrow_mut().push(files.len()));

        surface.submit(pdfs(2)).unwrap();
        let _ = surface.submit(pdfs(20));
        surface.submit(pdfs(1)).unwrap();
        surface.remove(0);
        surface.remove(99);

        assert_eq!(*seen.borrow(), vec![2, 3, 2]);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut surface = IntakeSurface::new(IntakeConfig::pdf(10));
        surface.submit(pdfs(2)).unwrap();
        assert!(surface.remove(2).is_none());
        assert_eq!(surface.len(), 2);
    }

    #[test]
    fn test_move_boundaries() {
        let mut surface = IntakeSurface::new(IntakeConfig::pdf(10));
        surface.submit(pdfs(3)).unwrap();
        assert!(!surface.move_up(0));
        assert!(!surface.move_down(2));
        assert!(!surface.move_down(7));
        assert_eq!(names(&surface), vec!["doc-0.pdf", "doc-1.pdf", "doc-2.pdf"]);
    }

    #[test]
    fn test_reorder() {
        let mut surface = IntakeSurface::new(IntakeConfig::pdf(10));
        surface.submit(pdfs(4)).unwrap();
        assert!(surface.reorder(0, 2));
        assert_eq!(
            names(&surface),
            vec!["doc-1.pdf", "doc-2.pdf", "doc-0.pdf", "doc-3.pdf"]
        );
        assert!(!surface.reorder(1, 1));
        assert!(!surface.reorder(0, 4));
    }

    #[test]
    fn test_clear() {
        let mut surface = IntakeSurface::new(IntakeConfig::pdf(10));
        surface.submit(pdfs(4)).unwrap();
        surface.clear();
        assert!(surface.is_empty());
        assert!(surface.submit(pdfs(10)).is_ok());
    }

    #[test]
    fn test_reconfigure_clears_and_swaps_accept() {
        let seen = Rc::new(RefCell::new(Vec::<usize>::new()));
        let sink = seen.clone();
        let mut surface = IntakeSurface::new(IntakeConfig::pdf(5))
            .with_listener(move |files| sink.borrow_mut().push(files.len()));
        surface.submit(pdfs(2)).unwrap();

        let images = AcceptMap::new().with("image/png", &[".png"]);
        surface.reconfigure(IntakeConfig::pdf(5).with_accept(images));
        assert!(surface.is_empty());
        assert_eq!(*seen.borrow(), vec![2, 0]);

        assert!(surface.submit(pdfs(1)).is_err());
        assert!(surface
            .submit(vec![AcceptedFile::new("a.png", 10, "image/png")])
            .is_ok());
    }

    #[test]
    fn test_upload_hint() {
        assert_eq!(IntakeConfig::pdf(1).upload_hint(), "Upload a PDF file");
        assert_eq!(IntakeConfig::pdf(10).upload_hint(), "Upload up to 10 PDF files");
        assert_eq!(IntakeConfig::default().max_size_mb(), 100);
    }

    proptest! {
        #[test]
        fn prop_one_over_max_is_rejected(max in 1usize..20, held in 0usize..20) {
            let held = held.min(max);
            let mut surface = IntakeSurface::new(IntakeConfig::pdf(max));
            surface.submit(pdfs(held)).unwrap();
            let before = names(&surface);

            let result = surface.submit(pdfs(max - held + 1));
            prop_assert_eq!(result.unwrap_err(), IntakeError::TooManyFiles { max });
            prop_assert_eq!(names(&surface), before);
        }

        #[test]
        fn prop_oversized_never_mutates(excess in 1u64..(50 * MB), held in 0usize..5) {
            let mut surface = IntakeSurface::new(IntakeConfig::pdf(10));
            surface.submit(pdfs(held)).unwrap();
            let before = names(&surface);

            let big = AcceptedFile::new("big.pdf", DEFAULT_MAX_FILE_SIZE + excess, "application/pdf");
            let is_too_large = matches!(surface.submit(vec![pdf("ok.pdf"), big]), Err(IntakeError::FileTooLarge { .. }));
            prop_assert!(is_too_large);
            prop_assert_eq!(names(&surface), before);
        }

        #[test]
        fn prop_remove_keeps_relative_order(len in 1usize..10, pick in 0usize..10) {
            let index = pick % len;
            let mut surface = IntakeSurface::new(IntakeConfig::pdf(10));
            surface.submit(pdfs(len)).unwrap();

            let mut expected = names(&surface);
            expected.remove(index);
            surface.remove(index);
            prop_assert_eq!(names(&surface), expected);
        }

        #[test]
        fn prop_move_swaps_exactly_two(len in 2usize..10, pick in 0usize..10) {
            let index = 1 + pick % (len - 1);
            let mut surface = IntakeSurface::new(IntakeConfig::pdf(10));
            surface.submit(pdfs(len)).unwrap();
            let before = names(&surface);

            prop_assert!(surface.move_up(index));
            let after = names(&surface);
            for i in 0..len {
                if i == index - 1 {
                    prop_assert_eq!(&after[i], &before[index]);
                } else if i == index {
                    prop_assert_eq!(&after[i], &before[index - 1]);
                } else {
                    prop_assert_eq!(&after[i], &before[i]);
                }
            }

            prop_assert!(surface.move_down(index - 1));
            prop_assert_eq!(names(&surface), before);
        }
    }
}
