//! Simulated processing.
//!
//! A run waits for a caller-supplied delay (a `gloo-timers` future in the
//! browser, a ready future in tests) and then evaluates the request. The
//! returned [`ProcessingJob`] aborts the run; an aborted run never reports.

use std::future::Future;

use futures::future::{AbortHandle, Abortable, Aborted};

use crate::error::ToolResult;
use crate::tools::{ToolOutcome, ToolRequest};

/// Wait for `delay`, then process `request`.
pub async fn simulate<D>(delay: D, request: ToolRequest) -> ToolResult<ToolOutcome>
where
    D: Future<Output = ()>,
{
    let tool = request.kind();
    log::debug!("{}: processing started", tool);
    delay.await;

    let result = request.process();
    match &result {
        Ok(outcome) => log::debug!("{}: produced {}", tool, outcome.download.file_name),
        Err(e) => log::debug!("{}: rejected: {}", tool, e),
    }
    result
}

/// Handle on a running simulation.
#[derive(Debug, Clone)]
pub struct ProcessingJob {
    handle: AbortHandle,
}

impl ProcessingJob {
    /// Build an abortable run and the handle that cancels it.
    ///
    /// The future resolves to `Err(Aborted)` once [`ProcessingJob::cancel`]
    /// has been called.
    pub fn start<D>(
        delay: D,
        request: ToolRequest,
    ) -> (
        Self,
        impl Future<Output = Result<ToolResult<ToolOutcome>, Aborted>>,
    )
    where
        D: Future<Output = ()>,
    {
        let (handle, registration) = AbortHandle::new_pair();
        let run = Abortable::new(simulate(delay, request), registration);
        (Self { handle }, run)
    }

    pub fn cancel(&self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ToolError;
    use crate::models::AcceptedFile;
    use crate::tools::{MergeRequest, ToolKind, UnlockRequest};
    use futures::executor::block_on;
    use futures::future::{pending, ready};

    fn unlock(password: &str) -> ToolRequest {
        ToolRequest::Unlock(UnlockRequest {
            file: Some(AcceptedFile::new("bank.pdf", 1_000, "application/pdf")),
            password: password.to_string(),
        })
    }

    #[test]
    fn test_simulate_success() {
        let outcome = block_on(simulate(ready(()), unlock("pw"))).unwrap();
        assert_eq!(outcome.tool, ToolKind::Unlock);
        assert_eq!(outcome.download.file_name, "unlocked-bank.pdf");
    }

    #[test]
    fn test_simulate_reports_validation_error() {
        let err = block_on(simulate(ready(()), unlock(""))).unwrap_err();
        assert_eq!(
            err,
            ToolError::MissingRequiredInput("Password is required to unlock this PDF.".into())
        );
    }

    #[test]
    fn test_job_runs_to_completion() {
        let (_job, run) = ProcessingJob::start(ready(()), unlock("pw"));
        let result = block_on(run).unwrap();
        assert!(result.is_ok());
    }

    #[test]
    fn test_cancelled_job_never_reports() {
        let request = ToolRequest::Merge(MergeRequest::default());
        let (job, run) = ProcessingJob::start(pending::<()>(), request);
        job.cancel();
        assert!(block_on(run).is_err());
    }
}
