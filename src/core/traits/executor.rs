use crate::core::domain::{Invocation, ProcessOutput};

/// Spawns external toolchain processes and captures their output.
///
/// The build and run steps are separate methods so callers can reason about
/// (and tests can assert) which step was reached.
#[mockall::automock]
#[async_trait::async_trait]
pub trait Executor: std::fmt::Debug + Send + Sync {
    async fn build(&self, invocation: &Invocation) -> Result<ProcessOutput, ExecError>;

    async fn run(&self, invocation: &Invocation) -> Result<ProcessOutput, ExecError>;
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ExecError {
    #[error("failed to launch {program}: {msg}")]
    FailedToLaunch { program: String, msg: String },
}
