//! Recording processor for tests and dry runs.
//!
//! Captures every job it receives instead of running anything.

use async_trait::async_trait;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tokio::sync::Notify;

use crate::ports::{PayloadProcessor, ProcessingJob, ProcessingOutput, ProcessorError, ProcessorStdout};

/// Processor that records jobs for later assertions.
#[derive(Debug, Default)]
pub struct RecordingProcessor {
    jobs: Mutex<Vec<ProcessingJob>>,
    notify: Notify,
    fail: bool,
}

impl RecordingProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records jobs but reports every run as a non-zero exit.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// All jobs received so far.
    pub fn jobs(&self) -> Vec<ProcessingJob> {
        self.jobs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn job_count(&self) -> usize {
        self.jobs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Waits until at least `count` jobs arrived or `timeout` passes.
    ///
    /// Returns whether the count was reached.
    pub async fn wait_for_jobs(&self, count: usize, timeout: Duration) -> bool {
        let deadline = tokio::time::Instant::now() + timeout;
        loop {
            let notified = self.notify.notified();
            if self.job_count() >= count {
                return true;
            }
            if tokio::time::timeout_at(deadline, notified).await.is_err() {
                return self.job_count() >= count;
            }
        }
    }
}

#[async_trait]
impl PayloadProcessor for RecordingProcessor {
    async fn process(&self, job: ProcessingJob) -> Result<ProcessingOutput, ProcessorError> {
        self.jobs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(job);
        self.notify.notify_waiters();

        if self.fail {
            return Err(ProcessorError::NonZeroExit {
                code: Some(1),
                stderr: "recording processor configured to fail".to_string(),
            });
        }

        Ok(ProcessingOutput {
            exit_code: Some(0),
            stdout: ProcessorStdout::Empty,
            stderr: String::new(),
        })
    }
}
