use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Fixed file names inside a snippet workspace.
pub const SOURCE_FILE: &str = "Program.cs";
pub const PROJECT_FILE: &str = "Program.csproj";
pub const DLL_ARTIFACT: &str = "Program.dll";
pub const EXE_ARTIFACT: &str = "Program.exe";

/// Project descriptor written next to the source when building with the
/// .NET SDK. Declares a console executable on a fixed runtime version.
pub const PROJECT_DESCRIPTOR: &str = r#"<Project Sdk="Microsoft.NET.Sdk">
  <PropertyGroup>
    <OutputType>Exe</OutputType>
    <TargetFramework>net6.0</TargetFramework>
    <ImplicitUsings>enable</ImplicitUsings>
    <Nullable>enable</Nullable>
  </PropertyGroup>
</Project>
"#;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToolchainKind {
    /// .NET SDK: builds a generated project, runs the produced dll.
    DotnetSdk,
    /// Standalone Roslyn compiler: compiles straight to an executable.
    Csc,
}

/// Probe order: the project-based SDK wins over the bare compiler.
pub const TOOLCHAIN_CANDIDATES: &[ToolchainKind] =
    &[ToolchainKind::DotnetSdk, ToolchainKind::Csc];

impl ToolchainKind {
    /// Executable name probed on the search path.
    pub fn probe_name(self) -> &'static str {
        match self {
            ToolchainKind::DotnetSdk => "dotnet",
            ToolchainKind::Csc => "csc",
        }
    }

    pub fn uses_project_descriptor(self) -> bool {
        matches!(self, ToolchainKind::DotnetSdk)
    }

    /// Where the build is expected to leave its artifact.
    pub fn artifact_path(self, workspace: &Path) -> PathBuf {
        match self {
            ToolchainKind::DotnetSdk => workspace.join(DLL_ARTIFACT),
            ToolchainKind::Csc => workspace.join(EXE_ARTIFACT),
        }
    }
}

/// A compiler located on the search path, with its invocation conventions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toolchain {
    pub kind: ToolchainKind,
    pub path: PathBuf,
}

impl Toolchain {
    pub fn new(kind: ToolchainKind, path: impl Into<PathBuf>) -> Self {
        Toolchain {
            kind,
            path: path.into(),
        }
    }

    /// Build command for a snippet materialized in `workspace`.
    pub fn build_invocation(&self, workspace: &Path) -> Invocation {
        match self.kind {
            ToolchainKind::DotnetSdk => Invocation {
                program: self.path.clone(),
                args: vec![
                    OsString::from("build"),
                    workspace.join(PROJECT_FILE).into_os_string(),
                    OsString::from("-c"),
                    OsString::from("Release"),
                    OsString::from("-o"),
                    workspace.as_os_str().to_os_string(),
                ],
            },
            ToolchainKind::Csc => {
                let mut out_flag = OsString::from("/out:");
                out_flag.push(workspace.join(EXE_ARTIFACT));
                Invocation {
                    program: self.path.clone(),
                    args: vec![out_flag, workspace.join(SOURCE_FILE).into_os_string()],
                }
            }
        }
    }

    /// Run command for the artifact the build left in `workspace`.
    pub fn run_invocation(&self, workspace: &Path) -> Invocation {
        match self.kind {
            ToolchainKind::DotnetSdk => Invocation {
                program: self.path.clone(),
                args: vec![workspace.join(DLL_ARTIFACT).into_os_string()],
            },
            ToolchainKind::Csc => Invocation {
                program: workspace.join(EXE_ARTIFACT),
                args: vec![],
            },
        }
    }
}

/// A fully resolved external command: program plus arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<OsString>,
}

/// Captured result of one external process.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcessOutput {
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.status == 0
    }
}
