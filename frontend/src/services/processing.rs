//! Runs simulated tool requests for a page.
//!
//! [`ProcessRunner`] is created once per tool page. It owns the busy flag,
//! the last outcome and the last error, and cancels its job when the page
//! unmounts so nothing is written after disposal.

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use pdftools::{ProcessingJob, ToolOutcome, ToolRequest};

use crate::config::PROCESSING_DELAY_MS;

#[derive(Clone, Copy)]
pub struct ProcessRunner {
    pub busy: RwSignal<bool>,
    pub outcome: RwSignal<Option<ToolOutcome>>,
    pub error: RwSignal<Option<String>>,
    job: StoredValue<Option<ProcessingJob>>,
}

impl ProcessRunner {
    pub fn new() -> Self {
        let runner = Self {
            busy: create_rw_signal(false),
            outcome: create_rw_signal(None),
            error: create_rw_signal(None),
            job: store_value(None),
        };
        on_cleanup(move || runner.cancel());
        runner
    }

    /// Start `request`, replacing any run still in flight.
    pub fn run(&self, request: ToolRequest) {
        self.cancel();
        self.busy.set(true);
        self.error.set(None);
        self.outcome.set(None);

        let runner = *self;
        let tool = request.kind();
        let (job, run) = ProcessingJob::start(TimeoutFuture::new(PROCESSING_DELAY_MS), request);
        self.job.set_value(Some(job));

        spawn_local(async move {
            let Ok(result) = run.await else {
                log::debug!("{}: run cancelled", tool);
                return;
            };
            runner.busy.set(false);
            match result {
                Ok(outcome) => {
                    if let Ok(json) = serde_json::to_string(&outcome) {
                        log::debug!("outcome: {}", json);
                    }
                    runner.outcome.set(Some(outcome));
                }
                Err(e) => runner.error.set(Some(e.to_string())),
            }
        });
    }

    /// Forget the previous result and drop any run still in flight, e.g.
    /// after the file list changed.
    pub fn reset(&self) {
        self.cancel();
        self.outcome.set(None);
        self.error.set(None);
    }

    fn cancel(&self) {
        let Some(Some(job)) = self.job.try_update_value(Option::take) else {
            return;
        };
        job.cancel();
        let _ = self.busy.try_set(false);
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::pending;
    use pdftools::tools::UnlockRequest;
    use pdftools::AcceptedFile;

    fn unlock() -> ToolRequest {
        ToolRequest::Unlock(UnlockRequest {
            file: Some(AcceptedFile::new("bank.pdf", 1_000, "application/pdf")),
            password: "pw".to_string(),
        })
    }

    #[test]
    fn test_reset_cancels_run_in_flight() {
        let runtime = create_runtime();
        let runner = ProcessRunner::new();

        let (job, run) = ProcessingJob::start(pending::<()>(), unlock());
        runner.job.set_value(Some(job));
        runner.busy.set(true);
        runner.error.set(Some("stale".to_string()));

        runner.reset();

        assert!(block_on(run).is_err());
        assert!(!runner.busy.get_untracked());
        assert!(runner.error.get_untracked().is_none());
        assert!(runner.job.with_value(Option::is_none));
        runtime.dispose();
    }

    #[test]
    fn test_reset_without_run_only_clears() {
        let runtime = create_runtime();
        let runner = ProcessRunner::new();
        runner.error.set(Some("Please upload a PDF file first.".to_string()));

        runner.reset();

        assert!(!runner.busy.get_untracked());
        assert!(runner.error.get_untracked().is_none());
        runtime.dispose();
    }
}
