//! Fire-and-forget dispatch of processing jobs.
//!
//! The request path hands a job to the dispatcher and returns immediately.
//! The job runs on its own tokio task; its output and errors go to tracing
//! and nowhere else.

use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::ports::{PayloadProcessor, ProcessingJob, ProcessorStdout};

/// Spawns processing jobs onto the runtime.
#[derive(Clone)]
pub struct ProcessingDispatcher {
    processor: Option<Arc<dyn PayloadProcessor>>,
}

impl ProcessingDispatcher {
    pub fn new(processor: Arc<dyn PayloadProcessor>) -> Self {
        Self {
            processor: Some(processor),
        }
    }

    /// Dispatcher that only logs jobs.
    pub fn disabled() -> Self {
        Self { processor: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.processor.is_some()
    }

    /// Starts `job` in the background.
    ///
    /// The handle is returned for tests; request handlers drop it.
    pub fn dispatch(&self, job: ProcessingJob) -> Option<JoinHandle<()>> {
        let Some(processor) = self.processor.clone() else {
            tracing::info!(job = job.label(), bytes = job.input.len(), "Processing disabled, job dropped");
            return None;
        };

        Some(tokio::spawn(async move {
            let label = job.label();
            match processor.process(job).await {
                Ok(output) => {
                    if !output.stderr.is_empty() {
                        tracing::warn!(job = label, stderr = %output.stderr, "Processor wrote to stderr");
                    }
                    match &output.stdout {
                        ProcessorStdout::Json(value) => {
                            tracing::info!(job = label, output = %value, "Processor output");
                        }
                        ProcessorStdout::Text(text) => {
                            tracing::info!(job = label, output = %text, "Processor output (non-JSON)");
                        }
                        ProcessorStdout::Empty => {}
                    }
                    tracing::info!(job = label, exit_code = ?output.exit_code, "Processor finished");
                }
                Err(e) => {
                    tracing::error!(job = label, error = %e, "Processor failed");
                }
            }
        }))
    }
}

impl std::fmt::Debug for ProcessingDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcessingDispatcher")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::processor::RecordingProcessor;

    #[tokio::test]
    async fn dispatch_runs_job_in_background() {
        let processor = Arc::new(RecordingProcessor::new());
        let dispatcher = ProcessingDispatcher::new(processor.clone());

        let handle = dispatcher.dispatch(ProcessingJob::text("secret")).unwrap();
        handle.await.unwrap();

        assert_eq!(processor.jobs(), vec![ProcessingJob::text("secret")]);
    }

    #[tokio::test]
    async fn processor_failure_does_not_panic_task() {
        let processor = Arc::new(RecordingProcessor::failing());
        let dispatcher = ProcessingDispatcher::new(processor.clone());

        let handle = dispatcher.dispatch(ProcessingJob::text("x")).unwrap();
        assert!(handle.await.is_ok());
        assert_eq!(processor.job_count(), 1);
    }

    #[tokio::test]
    async fn disabled_dispatcher_spawns_nothing() {
        let dispatcher = ProcessingDispatcher::disabled();
        assert!(!dispatcher.is_enabled());
        assert!(dispatcher.dispatch(ProcessingJob::text("x")).is_none());
    }
}
