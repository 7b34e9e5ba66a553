use std::ffi::OsStr;
use std::path::PathBuf;

use crate::core::domain::{TOOLCHAIN_CANDIDATES, Toolchain};
use crate::core::traits::locator::ToolchainLocator;

/// Locator that probes the process's executable search path.
#[derive(Clone, Copy, Debug, Default)]
pub struct PathLocator;

impl PathLocator {
    /// Probe against an explicit search path. The candidate order is fixed,
    /// so selection is deterministic when several toolchains are installed.
    pub fn locate_in(&self, search_path: &OsStr) -> Option<Toolchain> {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/"));
        TOOLCHAIN_CANDIDATES.iter().find_map(|&kind| {
            which::which_in(kind.probe_name(), Some(search_path), &cwd)
                .ok()
                .map(|path| Toolchain::new(kind, path))
        })
    }
}

impl ToolchainLocator for PathLocator {
    fn locate(&self) -> Option<Toolchain> {
        self.locate_in(&std::env::var_os("PATH").unwrap_or_default())
    }
}
