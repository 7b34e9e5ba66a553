use std::process::Stdio;

use tokio::process::Command;

use crate::core::domain::{Invocation, ProcessOutput};
use crate::core::traits::executor::{ExecError, Executor};

/// Executor backed by real subprocesses.
///
/// Blocks the caller until the spawned process exits; no timeout is applied,
/// so a hung compiler or a looping snippet hangs the invocation with it.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    async fn capture(invocation: &Invocation) -> Result<ProcessOutput, ExecError> {
        let output = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| ExecError::FailedToLaunch {
                program: invocation.program.display().to_string(),
                msg: e.to_string(),
            })?;

        Ok(ProcessOutput {
            // Killed by signal maps to -1, same as an unknown exit code.
            status: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

#[async_trait::async_trait]
impl Executor for ProcessExecutor {
    #[tracing::instrument]
    async fn build(&self, invocation: &Invocation) -> Result<ProcessOutput, ExecError> {
        Self::capture(invocation).await
    }

    #[tracing::instrument]
    async fn run(&self, invocation: &Invocation) -> Result<ProcessOutput, ExecError> {
        Self::capture(invocation).await
    }
}
