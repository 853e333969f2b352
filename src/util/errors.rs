//! Error types for configuration probing.

use miette::Diagnostic;
use thiserror::Error;

/// A failure while resolving or emitting the build configuration.
#[derive(Debug, Error, Diagnostic)]
pub enum ProbeError {
    /// An external query could not run or exited non-zero.
    #[error("error executing command: {command}\n{stderr}")]
    #[diagnostic(help(
        "check that the interpreter and its config tool are installed, or pass --python/--python-config"
    ))]
    Subprocess { command: String, stderr: String },

    /// The resolved document could not be serialized.
    #[error("an unexpected error occurred: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Anything else.
    #[error("an unexpected error occurred: {0}")]
    Unexpected(String),
}

impl ProbeError {
    /// Build a subprocess failure from a command line and captured stderr.
    pub fn subprocess(command: impl Into<String>, stderr: impl Into<String>) -> Self {
        ProbeError::Subprocess {
            command: command.into(),
            stderr: stderr.into().trim_end().to_string(),
        }
    }

    /// Render for the terminal: `error: <message>`, then a `help:` line when
    /// the diagnostic carries one.
    pub fn render(&self) -> String {
        match self.help() {
            Some(help) => format!("error: {}\nhelp: {}", self, help),
            None => format!("error: {}", self),
        }
    }

    /// Whether this is a subprocess failure.
    pub fn is_subprocess(&self) -> bool {
        matches!(self, ProbeError::Subprocess { .. })
    }
}

impl From<std::io::Error> for ProbeError {
    fn from(err: std::io::Error) -> Self {
        ProbeError::Unexpected(err.to_string())
    }
}
