//! Subprocess execution for interpreter queries.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use crate::util::errors::ProbeError;

/// Builder for a single query command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessBuilder {
    program: PathBuf,
    args: Vec<String>,
}

impl ProcessBuilder {
    /// Create a new process builder for the given program.
    pub fn new(program: impl AsRef<Path>) -> Self {
        ProcessBuilder {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
        }
    }

    /// Add a single argument.
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_string_lossy().into_owned());
        self
    }

    /// Add multiple arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args.extend(
            args.into_iter()
                .map(|s| s.as_ref().to_string_lossy().into_owned()),
        );
        self
    }

    /// Get the program path.
    pub fn get_program(&self) -> &Path {
        &self.program
    }

    /// Execute the command with piped output and wait for it to exit.
    pub fn exec(&self) -> std::io::Result<Output> {
        Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
    }

    /// Display the command for error messages.
    ///
    /// Arguments containing whitespace are double-quoted.
    pub fn display_command(&self) -> String {
        let mut parts = vec![self.program.display().to_string()];
        parts.extend(self.args.iter().map(|arg| {
            if arg.chars().any(char::is_whitespace) {
                format!("\"{}\"", arg)
            } else {
                arg.clone()
            }
        }));
        parts.join(" ")
    }
}

/// Runs a query command and returns its trimmed standard output.
pub trait QueryRunner {
    fn query(&mut self, cmd: &ProcessBuilder) -> Result<String, ProbeError>;
}

/// [`QueryRunner`] that spawns real processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl QueryRunner for SystemRunner {
    fn query(&mut self, cmd: &ProcessBuilder) -> Result<String, ProbeError> {
        let program = cmd.get_program();
        let resolved = which::which(program).map_err(|e| {
            ProbeError::subprocess(
                cmd.display_command(),
                format!("`{}` not found: {}", program.display(), e),
            )
        })?;
        tracing::debug!("running `{}` ({})", cmd.display_command(), resolved.display());

        let output = cmd
            .exec()
            .map_err(|e| ProbeError::subprocess(cmd.display_command(), e.to_string()))?;

        if !output.status.success() {
            let mut stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            if stderr.trim().is_empty() {
                stderr = match output.status.code() {
                    Some(code) => format!("exited with status {}", code),
                    None => "terminated by signal".to_string(),
                };
            }
            return Err(ProbeError::subprocess(cmd.display_command(), stderr));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
