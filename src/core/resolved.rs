//! The resolved build configuration emitted by `pyprobe`.

use serde::{Deserialize, Serialize};

/// Package identifier used for the single link config entry by default.
pub const DEFAULT_LINK_PACKAGE: &str = "Kaida-Amethyst/python/cpython";

/// Named variables for the downstream build.
///
/// The `STUB_*` values are copies of their primary counterparts; both pairs
/// are filled from a single value in [`ResolvedConfig::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedVars {
    #[serde(rename = "PY_VERSION")]
    py_version: String,
    #[serde(rename = "CC")]
    cc: String,
    #[serde(rename = "CC_FLAGS")]
    cc_flags: String,
    #[serde(rename = "STUB_CC_FLAGS")]
    stub_cc_flags: String,
    #[serde(rename = "STUB_CC_LINK_FLAGS")]
    stub_cc_link_flags: String,
    #[serde(rename = "CC_LINK_FLAGS")]
    cc_link_flags: String,
    #[serde(rename = "C_INCLUDE_PATH")]
    c_include_path: String,
}

impl ResolvedVars {
    pub fn py_version(&self) -> &str {
        &self.py_version
    }

    pub fn cc(&self) -> &str {
        &self.cc
    }

    pub fn cc_flags(&self) -> &str {
        &self.cc_flags
    }

    pub fn stub_cc_flags(&self) -> &str {
        &self.stub_cc_flags
    }

    pub fn cc_link_flags(&self) -> &str {
        &self.cc_link_flags
    }

    pub fn stub_cc_link_flags(&self) -> &str {
        &self.stub_cc_link_flags
    }

    pub fn c_include_path(&self) -> &str {
        &self.c_include_path
    }
}

/// Link flags a downstream build should apply to one package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkConfig {
    pub package: String,
    pub link_flags: String,
}

/// Facts gathered by the resolver, before duplication into output channels.
#[derive(Debug, Clone)]
pub struct ResolvedParts {
    pub py_version: String,
    pub cc: String,
    pub cc_flags: String,
    pub link_flags: String,
    pub c_include_path: String,
    pub package: String,
}

/// Complete resolver output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedConfig {
    vars: ResolvedVars,
    link_configs: Vec<LinkConfig>,
}

impl ResolvedConfig {
    /// Assemble the output document.
    pub fn new(parts: ResolvedParts) -> Self {
        let link_configs = vec![LinkConfig {
            package: parts.package,
            link_flags: parts.link_flags.clone(),
        }];

        ResolvedConfig {
            vars: ResolvedVars {
                py_version: parts.py_version,
                cc: parts.cc,
                stub_cc_flags: parts.cc_flags.clone(),
                cc_flags: parts.cc_flags,
                stub_cc_link_flags: parts.link_flags.clone(),
                cc_link_flags: parts.link_flags,
                c_include_path: parts.c_include_path,
            },
            link_configs,
        }
    }

    pub fn vars(&self) -> &ResolvedVars {
        &self.vars
    }

    pub fn link_configs(&self) -> &[LinkConfig] {
        &self.link_configs
    }
}
