//! Test utilities for pyprobe unit tests.
//!
//! [`MockExecutor`] stands in for the real process runner so the resolver
//! can be driven with canned interpreter output.
//!
//! # Example
//!
//! ```rust,ignore
//! use pyprobe::test_support::{MockExecutor, MockProcessOutput};
//!
//! let mut exec = MockExecutor::new();
//! exec.expect("python3-config --prefix", MockProcessOutput::success("/usr\n"));
//! ```

use anyhow::{bail, Result};

use crate::util::errors::ProbeError;
use crate::util::process::{ProcessBuilder, QueryRunner};

/// Mock process output for testing command execution.
#[derive(Debug, Clone)]
pub struct MockProcessOutput {
    /// Exit status code (0 = success).
    pub status: i32,
    /// Standard output.
    pub stdout: String,
    /// Standard error.
    pub stderr: String,
}

impl MockProcessOutput {
    /// Create a successful output with the given stdout.
    pub fn success(stdout: impl Into<String>) -> Self {
        MockProcessOutput {
            status: 0,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// Create a failure output with the given stderr and status code.
    pub fn failure(status: i32, stderr: impl Into<String>) -> Self {
        MockProcessOutput {
            status,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    /// Check if the process succeeded.
    pub fn success_status(&self) -> bool {
        self.status == 0
    }
}

/// Pattern for matching commands in MockExecutor.
#[derive(Debug, Clone)]
pub enum CommandPattern {
    /// Exact match on full command string.
    Exact(String),
    /// Match if command starts with prefix.
    StartsWith(String),
}

impl CommandPattern {
    /// Check if this pattern matches the given command.
    pub fn matches(&self, cmd: &str) -> bool {
        match self {
            CommandPattern::Exact(s) => cmd == s,
            CommandPattern::StartsWith(s) => cmd.starts_with(s),
        }
    }
}

/// Mock process executor.
///
/// Records every command it is asked to run and answers from the first
/// matching expectation. Unmatched commands fail as if the program were
/// missing.
#[derive(Debug, Default)]
pub struct MockExecutor {
    expectations: Vec<(CommandPattern, MockProcessOutput)>,
    calls: Vec<String>,
}

impl MockExecutor {
    /// Create a new mock executor.
    pub fn new() -> Self {
        MockExecutor::default()
    }

    /// Add an expectation for an exact command match.
    pub fn expect(&mut self, cmd: &str, output: MockProcessOutput) -> &mut Self {
        self.expectations
            .push((CommandPattern::Exact(cmd.to_string()), output));
        self
    }

    /// Add an expectation for a command starting with a prefix.
    pub fn expect_prefix(&mut self, prefix: &str, output: MockProcessOutput) -> &mut Self {
        self.expectations
            .push((CommandPattern::StartsWith(prefix.to_string()), output));
        self
    }

    /// Get all commands that were called, in order.
    pub fn calls(&self) -> &[String] {
        &self.calls
    }

    /// Verify that every expectation was hit at least once.
    pub fn verify(&self) -> Result<()> {
        for (pattern, _) in &self.expectations {
            let hit = self.calls.iter().any(|c| pattern.matches(c));
            if !hit {
                bail!("expected command was never run: {:?}", pattern);
            }
        }
        Ok(())
    }
}

impl QueryRunner for MockExecutor {
    fn query(&mut self, cmd: &ProcessBuilder) -> Result<String, ProbeError> {
        let full_cmd = cmd.display_command();
        self.calls.push(full_cmd.clone());

        let output = self
            .expectations
            .iter()
            .find(|(pattern, _)| pattern.matches(&full_cmd))
            .map(|(_, output)| output.clone())
            .ok_or_else(|| {
                ProbeError::subprocess(full_cmd.clone(), "command not found")
            })?;

        if !output.success_status() {
            return Err(ProbeError::subprocess(full_cmd, output.stderr));
        }
        Ok(output.stdout.trim().to_string())
    }
}

/// A mock answering the three interpreter queries.
pub fn mock_python(version: &str, prefix: &str, ldflags: &str) -> MockExecutor {
    let mut exec = MockExecutor::new();
    exec.expect_prefix("python3 -c", MockProcessOutput::success(format!("{}\n", version)))
        .expect(
            "python3-config --prefix",
            MockProcessOutput::success(format!("{}\n", prefix)),
        )
        .expect(
            "python3-config --ldflags",
            MockProcessOutput::success(format!("{}\n", ldflags)),
        );
    exec
}
