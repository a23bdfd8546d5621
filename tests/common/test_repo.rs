//! TestRepo helper for integration tests.
//!
//! Provides a temporary git repository with a local identity configured.

use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// A temporary git repository for testing.
///
/// The repository is automatically cleaned up when the TestRepo is dropped.
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    /// Create a new git repository on branch `main` in a temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let repo = Self { dir };

        repo.git(&["init", "--initial-branch=main"]);
        repo.git(&["config", "user.name", "Test User"]);
        repo.git(&["config", "user.email", "test@example.com"]);
        repo.git(&["config", "commit.gpgsign", "false"]);

        repo
    }

    /// Get the path to the repository root.
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Execute a git command in this repository.
    ///
    /// # Panics
    ///
    /// Panics if the command fails to execute or returns a non-zero exit code.
    pub fn git(&self, args: &[&str]) -> String {
        let output = Command::new("git")
            .args(args)
            .current_dir(self.dir.path())
            .output()
            .expect("Failed to execute git command");

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            panic!(
                "git {:?} failed with exit code {:?}:\n{}",
                args,
                output.status.code(),
                stderr
            );
        }

        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    /// Write a file in the repository.
    pub fn write_file(&self, name: &str, content: &str) {
        let path = self.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
    }

    /// Number of commits reachable from HEAD (0 for an unborn branch).
    pub fn commit_count(&self) -> usize {
        let output = Command::new("git")
            .args(["rev-list", "--count", "HEAD"])
            .current_dir(self.dir.path())
            .output()
            .expect("Failed to execute git rev-list");
        String::from_utf8_lossy(&output.stdout)
            .trim()
            .parse()
            .unwrap_or(0)
    }

    /// `git log` with a format string, newest first.
    pub fn log(&self, format: &str) -> Vec<String> {
        self.git(&["log", &format!("--format={format}")])
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}
