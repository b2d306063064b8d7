//! Shared testing harness for `plinth` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::fake_npm;

/// Isolated `$HOME`, working directory and `PATH` for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    bin_dir: PathBuf,
}

impl TestContext {
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        let bin_dir = root.path().join("bin");
        #[cfg(unix)]
        fake_npm::install(&bin_dir);

        Self { root, work_dir, bin_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub(crate) fn home(&self) -> &Path {
        self.root.path()
    }

    /// Directory the CLI runs in.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Root of a project generated in the working directory.
    pub(crate) fn project(&self, dir_name: &str) -> PathBuf {
        self.work_dir.join(dir_name)
    }

    /// Build a command for invoking the compiled `plinth` binary.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("plinth").expect("Failed to locate plinth binary");
        let path = match std::env::var_os("PATH") {
            Some(existing) => {
                let mut paths = vec![self.bin_dir.clone()];
                paths.extend(std::env::split_paths(&existing));
                std::env::join_paths(paths).expect("Failed to build PATH")
            }
            None => self.bin_dir.clone().into_os_string(),
        };
        cmd.current_dir(&self.work_dir)
            .env("HOME", self.home())
            .env("PATH", path)
            .env_remove("PLINTH_LOG")
            .env_remove("FAKE_NPM_FAIL");
        cmd
    }

    /// Write `~/.config/plinth/config.toml`.
    pub(crate) fn write_config(&self, content: &str) {
        let dir = self.home().join(".config/plinth");
        fs::create_dir_all(&dir).expect("Failed to create config directory");
        fs::write(dir.join("config.toml"), content).expect("Failed to write config");
    }

    /// Lines logged by the fake `npm` in `project`.
    pub(crate) fn npm_calls(&self, project: &Path) -> Vec<String> {
        fs::read_to_string(project.join("npm.log"))
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }
}
