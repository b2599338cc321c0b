//! Test environment builder for isolated recipe-explorer runs.
//!
//! Provides `TestEnv` - a temp directory holding fixture documents plus
//! helpers to run the binary with piped stdin.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Result of running the CLI
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

/// Isolated test environment.
///
/// HOME and XDG_CONFIG_HOME point inside the temp directory so a developer's
/// own config file never leaks into a run.
pub struct TestEnv {
    pub root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        std::fs::create_dir_all(root.path().join("home/.config"))
            .expect("Failed to create home dir");
        Self {
            root,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_recipe-explorer")),
        }
    }

    /// Environment with `categories.json` written from [`super::CATALOG_JSON`]
    /// and a `rankings/` directory holding [`super::RANKINGS`].
    pub fn with_fixtures() -> Self {
        let env = Self::new();
        env.write_file("categories.json", super::CATALOG_JSON);
        for (key, body) in super::RANKINGS {
            env.write_file(&format!("rankings/{}.json", key), body);
        }
        env
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// `path` as a string, for passing on the command line
    pub fn arg(&self, relative: &str) -> String {
        self.path(relative).display().to_string()
    }

    pub fn write_file(&self, relative: &str, content: &str) {
        let full = self.path(relative);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full, content).expect("Failed to write fixture");
    }

    /// Run with `input` on stdin
    pub fn run(&self, args: &[&str], input: &str) -> TestResult {
        self.run_with_env(args, input, &[])
    }

    pub fn run_with_env(&self, args: &[&str], input: &str, env_vars: &[(&str, &str)]) -> TestResult {
        let home = self.path("home");
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.root.path())
            .args(args)
            .env("HOME", &home)
            .env("XDG_CONFIG_HOME", home.join(".config"))
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("RECIPE_EXPLORER_CATALOG")
            .env_remove("RECIPE_EXPLORER_RANKINGS")
            .env_remove("RECIPE_EXPLORER_COLUMNS")
            .env_remove("RECIPE_EXPLORER_WIDTH_MODE")
            .env_remove("RECIPE_EXPLORER_VERBOSITY")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let mut child = cmd.spawn().expect("Failed to execute recipe-explorer");
        {
            let mut stdin = child.stdin.take().expect("stdin is piped");
            stdin
                .write_all(input.as_bytes())
                .expect("Failed to write stdin");
        }
        let output = child.wait_with_output().expect("Failed to wait for recipe-explorer");

        Self::output_to_result(output)
    }

    fn output_to_result(output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}
