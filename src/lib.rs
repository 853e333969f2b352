//! pyprobe - Discover compiler and linker flags for native Python extensions
//!
//! This crate queries an installed Python interpreter and its configuration
//! tool, then describes the flags a downstream build needs to compile and
//! link C code against that interpreter.

pub mod core;
pub mod ops;
pub mod util;

/// Test utilities and mocks for pyprobe unit tests.
///
/// Only compiled for unit tests. Provides a fake process runner so the
/// resolver can be exercised without a Python installation.
#[cfg(test)]
pub mod test_support;

pub use crate::core::{ProbeEnv, ResolvedConfig};
pub use ops::{resolve_config, write_config};
pub use util::errors::ProbeError;
