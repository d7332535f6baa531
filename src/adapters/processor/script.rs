//! External script processor.
//!
//! Runs `<program> <script> <input> <mode>` as a child process, e.g.
//! `python script.py "<plaintext>" text`. The script is expected to print a
//! JSON document on stdout; anything else is kept as raw text.

use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;

use crate::ports::{PayloadProcessor, ProcessingJob, ProcessingOutput, ProcessorError, ProcessorStdout};

/// Processor that shells out to an interpreter and script.
#[derive(Debug, Clone)]
pub struct ScriptProcessor {
    program: String,
    script: PathBuf,
}

impl ScriptProcessor {
    pub fn new(program: impl Into<String>, script: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            script: script.into(),
        }
    }

    fn command(&self, job: &ProcessingJob) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg(&self.script)
            .arg(&job.input)
            .arg(job.mode_arg())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        cmd
    }
}

#[async_trait]
impl PayloadProcessor for ScriptProcessor {
    async fn process(&self, job: ProcessingJob) -> Result<ProcessingOutput, ProcessorError> {
        tracing::debug!(
            program = %self.program,
            script = %self.script.display(),
            job = job.label(),
            "Starting processor script"
        );

        let child = self
            .command(&job)
            .spawn()
            .map_err(|e| ProcessorError::Spawn(e.to_string()))?;

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| ProcessorError::Io(e.to_string()))?;

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if !output.status.success() {
            return Err(ProcessorError::NonZeroExit {
                code: output.status.code(),
                stderr,
            });
        }

        Ok(ProcessingOutput {
            exit_code: output.status.code(),
            stdout: ProcessorStdout::parse(&String::from_utf8_lossy(&output.stdout)),
            stderr,
        })
    }
}
