//! Common test utilities for Stocktake CLI tests.
//!
//! Provides `TestEnv` - an isolated temp directory plus helpers to run the
//! stocktake binary against an inventory file inside it.

// Compiled into every test binary; not all of them use every helper.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Result of running a stocktake CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment with a temp working directory.
pub struct TestEnv {
    /// Temporary working directory; the default inventory.json lands here
    pub root: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("create temp dir"),
        }
    }

    /// Path relative to the test root
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Path of the default inventory file
    pub fn inventory_file(&self) -> PathBuf {
        self.path("inventory.json")
    }

    /// Write raw content to the default inventory file
    pub fn write_inventory(&self, content: &str) {
        std::fs::write(self.inventory_file(), content).expect("write inventory file");
    }

    /// Run stocktake in this environment from the test root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from(self.root.path(), args)
    }

    /// Run stocktake from a specific directory
    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        let output = Command::new(env!("CARGO_BIN_EXE_stocktake"))
            .args(args)
            .current_dir(cwd)
            .output()
            .expect("run stocktake binary");

        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}
