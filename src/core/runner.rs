use std::sync::Arc;

use uuid::Uuid;

use crate::core::domain::{PROJECT_DESCRIPTOR, PROJECT_FILE, SOURCE_FILE};
use crate::core::traits::executor::{ExecError, Executor};
use crate::core::traits::locator::ToolchainLocator;

#[derive(Debug, thiserror::Error)]
pub enum SnippetError {
    #[error("No C# compiler found. Please install the .NET SDK or csc.")]
    NoToolchain,
    #[error("Compilation Error:\n{stderr}")]
    CompileFailed { stderr: String },
    #[error("Runtime Error:\n{stderr}")]
    RunFailed { stderr: String },
    #[error("workspace error: {0}")]
    Workspace(#[from] std::io::Error),
    #[error(transparent)]
    Exec(#[from] ExecError),
}

/// Compiles and executes a single C# snippet in an isolated workspace.
///
/// Each invocation selects a toolchain, materializes the snippet in a fresh
/// temporary directory, builds it, runs the produced artifact, and returns
/// the trimmed stdout. The directory is removed on every exit path.
#[derive(Clone, Debug)]
pub struct SnippetRunner {
    locator: Arc<dyn ToolchainLocator>,
    executor: Arc<dyn Executor>,
}

impl SnippetRunner {
    pub fn new(locator: Arc<dyn ToolchainLocator>, executor: Arc<dyn Executor>) -> Self {
        SnippetRunner { locator, executor }
    }

    #[tracing::instrument(skip(self, source), fields(run_id = %Uuid::new_v4()))]
    pub async fn run_snippet(&self, source: &str) -> Result<String, SnippetError> {
        // Probed before any file I/O: a missing toolchain does no work.
        let toolchain = self.locator.locate().ok_or(SnippetError::NoToolchain)?;
        tracing::debug!(
            tool = toolchain.kind.probe_name(),
            path = %toolchain.path.display(),
            "toolchain selected"
        );

        // The workspace lives exactly as long as this call; dropping the
        // TempDir removes it on success and on every failure path.
        let workspace = tempfile::Builder::new()
            .prefix("csharp-trainer-")
            .tempdir()?;
        let dir = workspace.path().to_path_buf();

        tokio::fs::write(dir.join(SOURCE_FILE), source).await?;
        if toolchain.kind.uses_project_descriptor() {
            tokio::fs::write(dir.join(PROJECT_FILE), PROJECT_DESCRIPTOR).await?;
        }

        let built = self.executor.build(&toolchain.build_invocation(&dir)).await?;
        tracing::debug!(
            status = built.status,
            artifact = %toolchain.kind.artifact_path(&dir).display(),
            "build finished"
        );
        if !built.success() {
            return Err(SnippetError::CompileFailed {
                stderr: built.stderr,
            });
        }

        let ran = self.executor.run(&toolchain.run_invocation(&dir)).await?;
        tracing::debug!(status = ran.status, "run finished");
        if !ran.success() {
            return Err(SnippetError::RunFailed { stderr: ran.stderr });
        }

        Ok(ran.stdout.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::core::domain::{Invocation, ProcessOutput, Toolchain, ToolchainKind};
    use crate::core::traits::executor::MockExecutor;
    use crate::core::traits::locator::MockToolchainLocator;

    fn locator_with(toolchain: Option<Toolchain>) -> Arc<MockToolchainLocator> {
        let mut locator = MockToolchainLocator::new();
        locator.expect_locate().return_const(toolchain);
        Arc::new(locator)
    }

    fn dotnet() -> Toolchain {
        Toolchain::new(ToolchainKind::DotnetSdk, "/usr/bin/dotnet")
    }

    fn csc() -> Toolchain {
        Toolchain::new(ToolchainKind::Csc, "/usr/bin/csc")
    }

    fn output(status: i32, stdout: &str, stderr: &str) -> ProcessOutput {
        ProcessOutput {
            status,
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
        }
    }

    /// The build invocation's second argument is a file inside the
    /// workspace for both toolchains, so its parent is the workspace.
    fn workspace_of(invocation: &Invocation) -> PathBuf {
        Path::new(&invocation.args[1])
            .parent()
            .expect("workspace-relative argument")
            .to_path_buf()
    }

    #[tokio::test]
    async fn missing_toolchain_fails_before_any_work() {
        let mut executor = MockExecutor::new();
        executor.expect_build().times(0);
        executor.expect_run().times(0);

        let runner = SnippetRunner::new(locator_with(None), Arc::new(executor));
        let err = runner
            .run_snippet("class Program {}")
            .await
            .expect_err("no toolchain must fail");

        assert!(matches!(err, SnippetError::NoToolchain));
        assert!(err.to_string().contains("No C# compiler found"));
    }

    #[tokio::test]
    async fn build_failure_skips_the_run_step() {
        let captured = Arc::new(Mutex::new(None::<PathBuf>));
        let slot = captured.clone();

        let mut executor = MockExecutor::new();
        executor.expect_build().times(1).returning(move |invocation| {
            *slot.lock().unwrap() = Some(workspace_of(invocation));
            Ok(output(1, "", "Program.cs(1,14): error CS1002: ; expected"))
        });
        executor.expect_run().times(0);

        let runner = SnippetRunner::new(locator_with(Some(csc())), Arc::new(executor));
        let err = runner
            .run_snippet("class Program { static void Main() { } }")
            .await
            .expect_err("broken build must fail");

        match err {
            SnippetError::CompileFailed { stderr } => {
                assert_eq!(stderr, "Program.cs(1,14): error CS1002: ; expected");
            }
            other => panic!("expected CompileFailed, got {other:?}"),
        }

        let workspace = captured.lock().unwrap().clone().expect("build was invoked");
        assert!(!workspace.exists(), "workspace must be removed after failure");
    }

    #[tokio::test]
    async fn crashed_artifact_reports_a_runtime_error() {
        let mut executor = MockExecutor::new();
        executor
            .expect_build()
            .times(1)
            .returning(|_| Ok(output(0, "", "")));
        executor.expect_run().times(1).returning(|_| {
            Ok(output(134, "", "Unhandled exception. System.Exception: boom\n"))
        });

        let runner = SnippetRunner::new(locator_with(Some(dotnet())), Arc::new(executor));
        let err = runner
            .run_snippet("class Program { static void Main() => throw new System.Exception(\"boom\"); }")
            .await
            .expect_err("crashing artifact must fail");

        let message = err.to_string();
        assert!(message.starts_with("Runtime Error:"));
        assert!(message.contains("Unhandled exception. System.Exception: boom"));
    }

    #[tokio::test]
    async fn successful_run_returns_trimmed_stdout() {
        let captured = Arc::new(Mutex::new(None::<PathBuf>));
        let slot = captured.clone();

        let mut executor = MockExecutor::new();
        executor.expect_build().times(1).returning(move |invocation| {
            let workspace = workspace_of(invocation);
            assert!(
                workspace.join(SOURCE_FILE).exists(),
                "snippet must be on disk before the build runs"
            );
            assert!(
                workspace.join(PROJECT_FILE).exists(),
                "the SDK toolchain builds a generated project"
            );
            *slot.lock().unwrap() = Some(workspace);
            Ok(output(0, "", ""))
        });
        executor
            .expect_run()
            .times(1)
            .returning(|_| Ok(output(0, "hello\n  ", "")));

        let runner = SnippetRunner::new(locator_with(Some(dotnet())), Arc::new(executor));
        let body = runner
            .run_snippet("System.Console.WriteLine(\"hello\");")
            .await
            .expect("snippet runs");

        assert_eq!(body, "hello");

        let workspace = captured.lock().unwrap().clone().expect("build was invoked");
        assert!(!workspace.exists(), "workspace must be removed after success");
    }

    #[tokio::test]
    async fn csc_workspace_omits_the_project_descriptor() {
        let mut executor = MockExecutor::new();
        executor.expect_build().times(1).returning(|invocation| {
            let workspace = workspace_of(invocation);
            assert!(workspace.join(SOURCE_FILE).exists());
            assert!(!workspace.join(PROJECT_FILE).exists());
            Ok(output(0, "", ""))
        });
        executor
            .expect_run()
            .times(1)
            .returning(|_| Ok(output(0, "ok", "")));

        let runner = SnippetRunner::new(locator_with(Some(csc())), Arc::new(executor));
        let body = runner.run_snippet("class Program {}").await.expect("runs");
        assert_eq!(body, "ok");
    }
}
