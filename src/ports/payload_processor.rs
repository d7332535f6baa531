//! Payload Processor Port - Interface for the downstream text-processing step.
//!
//! Once a token is consumed, the accepted payload is handed to a processor
//! (in production, an external script). Processing is fire-and-forget from
//! the request's point of view: its outcome is only ever logged.
//!
//! # Contract
//!
//! A job carries two positional arguments:
//!
//! ```text
//! /data        -> (<serialized JSON payload>, <consumed token>)
//! /uploadText  -> (<plaintext>, "text")
//! ```

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::domain::handoff::Token;

/// Literal second argument used for plaintext uploads.
pub const TEXT_MODE_ARG: &str = "text";

/// What produced a job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobKind {
    /// Arbitrary JSON payload accepted by `/data`, keyed by the consumed token.
    Payload { token: Token },
    /// Plaintext accepted by `/uploadText`.
    Text,
}

/// One unit of work for the downstream processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingJob {
    pub input: String,
    pub kind: JobKind,
}

impl ProcessingJob {
    /// Job for a consumed JSON payload.
    pub fn payload(serialized: impl Into<String>, token: Token) -> Self {
        Self {
            input: serialized.into(),
            kind: JobKind::Payload { token },
        }
    }

    /// Job for a consumed plaintext upload.
    pub fn text(plaintext: impl Into<String>) -> Self {
        Self {
            input: plaintext.into(),
            kind: JobKind::Text,
        }
    }

    /// Second positional argument passed to the processor.
    pub fn mode_arg(&self) -> &str {
        match &self.kind {
            JobKind::Payload { token } => token.expose(),
            JobKind::Text => TEXT_MODE_ARG,
        }
    }

    /// Short label for logs; never includes the token.
    pub fn label(&self) -> &'static str {
        match self.kind {
            JobKind::Payload { .. } => "payload",
            JobKind::Text => "text",
        }
    }
}

/// Parsed standard output of a processor run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProcessorStdout {
    Json(serde_json::Value),
    Text(String),
    Empty,
}

impl ProcessorStdout {
    /// JSON when the output parses, raw text otherwise.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return ProcessorStdout::Empty;
        }
        match serde_json::from_str(trimmed) {
            Ok(value) => ProcessorStdout::Json(value),
            Err(_) => ProcessorStdout::Text(trimmed.to_string()),
        }
    }
}

/// Result of a completed processor run.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessingOutput {
    pub exit_code: Option<i32>,
    pub stdout: ProcessorStdout,
    pub stderr: String,
}

/// Errors from the downstream processor. Logged, never surfaced to clients.
#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("failed to start processor: {0}")]
    Spawn(String),

    #[error("processor I/O failed: {0}")]
    Io(String),

    #[error("processor exited with {code:?}: {stderr}")]
    NonZeroExit { code: Option<i32>, stderr: String },
}

/// Port for running accepted payloads through downstream processing.
#[async_trait]
pub trait PayloadProcessor: Send + Sync {
    /// Process a job to completion.
    ///
    /// Callers on the request path never await this directly; they go
    /// through `ProcessingDispatcher`, which spawns it.
    async fn process(&self, job: ProcessingJob) -> Result<ProcessingOutput, ProcessorError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_job_passes_token_as_mode_arg() {
        let token = Token::from_entropy(&[0x11, 0x22, 0x33, 0x44]);
        let job = ProcessingJob::payload("{\"a\":1}", token);
        assert_eq!(job.mode_arg(), "11223344");
        assert_eq!(job.label(), "payload");
    }

    #[test]
    fn text_job_uses_literal_mode() {
        let job = ProcessingJob::text("hello");
        assert_eq!(job.mode_arg(), "text");
        assert_eq!(job.input, "hello");
    }

    #[test]
    fn stdout_parses_json_when_possible() {
        assert_eq!(
            ProcessorStdout::parse("{\"cipher\":\"abc\"}\n"),
            ProcessorStdout::Json(serde_json::json!({"cipher": "abc"}))
        );
        assert_eq!(
            ProcessorStdout::parse("not json"),
            ProcessorStdout::Text("not json".to_string())
        );
        assert_eq!(ProcessorStdout::parse("  \n"), ProcessorStdout::Empty);
    }
}
