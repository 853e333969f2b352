//! Resolver settings.
//!
//! Settings come only from the process: command-line flags and their
//! `PYPROBE_*` variables, falling back to the built-in defaults below.

use crate::core::resolved::DEFAULT_LINK_PACKAGE;

/// Default interpreter used for the version query.
pub const DEFAULT_PYTHON: &str = "python3";

/// Default interpreter configuration tool.
pub const DEFAULT_PYTHON_CONFIG: &str = "python3-config";

/// Resolver inputs other than the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeSettings {
    /// Interpreter program (e.g., python3.12)
    pub python: String,

    /// Configuration tool program (e.g., python3.12-config)
    pub python_config: String,

    /// Package identifier for the link config entry
    pub package: String,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        ProbeSettings {
            python: DEFAULT_PYTHON.to_string(),
            python_config: DEFAULT_PYTHON_CONFIG.to_string(),
            package: DEFAULT_LINK_PACKAGE.to_string(),
        }
    }
}

impl ProbeSettings {
    /// Apply optional overrides on top of the defaults.
    ///
    /// Empty strings count as unset.
    pub fn with_overrides(
        python: Option<String>,
        python_config: Option<String>,
        package: Option<String>,
    ) -> Self {
        let defaults = ProbeSettings::default();
        let pick = |value: Option<String>, default: String| {
            value.filter(|v| !v.is_empty()).unwrap_or(default)
        };

        ProbeSettings {
            python: pick(python, defaults.python),
            python_config: pick(python_config, defaults.python_config),
            package: pick(package, defaults.package),
        }
    }
}
