//! Build configuration resolution.

use crate::core::env::{ProbeEnv, CC_VAR, C_INCLUDE_PATH_VAR};
use crate::core::flags;
use crate::core::resolved::{ResolvedConfig, ResolvedParts};
use crate::util::config::ProbeSettings;
use crate::util::errors::ProbeError;
use crate::util::process::{ProcessBuilder, QueryRunner};

/// Python snippet printing `major.minor`.
const VERSION_SCRIPT: &str =
    "import sys; print(f'{sys.version_info.major}.{sys.version_info.minor}')";

/// Query the interpreter's `major.minor` version.
pub fn query_version(
    runner: &mut dyn QueryRunner,
    settings: &ProbeSettings,
) -> Result<String, ProbeError> {
    runner.query(&ProcessBuilder::new(&settings.python).args(["-c", VERSION_SCRIPT]))
}

/// Query the interpreter's installation prefix.
pub fn query_prefix(
    runner: &mut dyn QueryRunner,
    settings: &ProbeSettings,
) -> Result<String, ProbeError> {
    runner.query(&ProcessBuilder::new(&settings.python_config).arg("--prefix"))
}

/// Query the interpreter's linker flags.
pub fn query_ldflags(
    runner: &mut dyn QueryRunner,
    settings: &ProbeSettings,
) -> Result<String, ProbeError> {
    runner.query(&ProcessBuilder::new(&settings.python_config).arg("--ldflags"))
}

/// Resolve compiler and linker settings for building against the interpreter.
///
/// Queries run strictly in order (version, prefix, ldflags) and the first
/// failure aborts resolution.
pub fn resolve_config(
    runner: &mut dyn QueryRunner,
    env: &ProbeEnv,
    settings: &ProbeSettings,
) -> Result<ResolvedConfig, ProbeError> {
    let py_version = query_version(runner, settings)?;
    tracing::debug!("python version: {}", py_version);

    let cc = flags::compiler_name(env.get_nonempty(CC_VAR));

    let prefix = query_prefix(runner, settings)?;
    let include_dir = flags::include_dir(&prefix, &py_version);
    tracing::debug!("include dir: {}", include_dir.display());

    let cc_flags = flags::compile_flags(&include_dir);

    let raw_ldflags = query_ldflags(runner, settings)?;
    let base_ldflags = flags::strip_python_lib(&raw_ldflags);
    let link_flags = flags::link_flags(&base_ldflags, &py_version);
    tracing::debug!("link flags: {}", link_flags);

    let c_include_path =
        flags::include_path(&include_dir, env.get_nonempty(C_INCLUDE_PATH_VAR));

    Ok(ResolvedConfig::new(ResolvedParts {
        py_version,
        cc,
        cc_flags,
        link_flags,
        c_include_path,
        package: settings.package.clone(),
    }))
}
