//! Shared testing utilities for assetgen CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI
/// exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the working directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `assetgen` binary inside
    /// the working directory, with API credentials scrubbed.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("assetgen").expect("Failed to locate assetgen binary");
        cmd.current_dir(&self.work_dir).env_remove("OPENAI_API_KEY");
        cmd
    }

    /// Write a file into the working directory and return its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Write a scripted-responses JSON file from raw response strings.
    pub fn write_mock_responses(&self, name: &str, responses: &[&str]) -> PathBuf {
        let json = serde_json::to_string(responses).expect("responses serialize");
        self.write_file(name, &json)
    }

    /// Write a small approved-claims CSV fixture.
    pub fn write_claims_csv(&self, name: &str) -> PathBuf {
        self.write_file(
            name,
            "Claim,Pack Contents,Disclaimer\n\
             Runs 60 minutes,Charger,Results may vary.\n\
             Washable filter,Charger,\n\
             Quiet operation,Manual,\n",
        )
    }
}
