//! Helpers for driving the `vd` binary in end-to-end tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary workspace holding a run file and report directories.
pub struct RunWorkspace {
    dir: TempDir,
}

impl RunWorkspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file into the workspace and return its absolute path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("Failed to write workspace file");
        path
    }
}

impl Default for RunWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// A `vd` command rooted in the workspace.
pub fn vd_command(workspace: &RunWorkspace) -> Command {
    let mut cmd = Command::cargo_bin("vd").expect("vd binary should be built");
    cmd.current_dir(workspace.path());
    cmd
}
