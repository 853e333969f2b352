//! Compile and link flag construction.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

/// Disables `assert()` in compiled extension code.
pub const NDEBUG_FLAG: &str = "-DNDEBUG";

/// AddressSanitizer, applied at both compile and link time.
pub const SANITIZER_FLAG: &str = "-fsanitize=address";

/// Debug symbols.
pub const DEBUG_FLAG: &str = "-g";

/// Fallback compiler when `CC` is unset or empty.
pub const DEFAULT_CC: &str = "gcc";

/// Separator for search path lists such as `C_INCLUDE_PATH`.
#[cfg(windows)]
pub const PATH_LIST_DELIMITER: char = ';';
#[cfg(not(windows))]
pub const PATH_LIST_DELIMITER: char = ':';

static PYTHON_LIB_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-lpython[\d.]+\w*").expect("valid -lpython regex"));

/// Header directory for an interpreter: `<prefix>/include/python<version>`.
pub fn include_dir(prefix: &str, version: &str) -> PathBuf {
    Path::new(prefix)
        .join("include")
        .join(format!("python{}", version))
}

/// Base compiler flags for the given header directory.
pub fn compile_flags(include_dir: &Path) -> String {
    format!(
        "-I{} {} {} {}",
        include_dir.display(),
        NDEBUG_FLAG,
        SANITIZER_FLAG,
        DEBUG_FLAG
    )
}

/// Remove every `-lpython<ver>` directive from a linker flag string.
///
/// The remaining tokens are re-joined with single spaces.
pub fn strip_python_lib(ldflags: &str) -> String {
    PYTHON_LIB_RE
        .replace_all(ldflags, "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Final link flags: stripped base flags, then an explicit runtime library
/// directive for `version`, then sanitizer and debug flags.
pub fn link_flags(base: &str, version: &str) -> String {
    let directive = format!("-lpython{}", version);
    let base = base.trim();

    let mut parts = Vec::with_capacity(4);
    if !base.is_empty() {
        parts.push(base);
    }
    parts.extend([directive.as_str(), SANITIZER_FLAG, DEBUG_FLAG]);
    parts.join(" ")
}

/// Value exported as `C_INCLUDE_PATH`: the header directory, prepended to
/// any existing list.
pub fn include_path(include_dir: &Path, existing: Option<&str>) -> String {
    match existing.filter(|s| !s.is_empty()) {
        Some(existing) => format!(
            "{}{}{}",
            include_dir.display(),
            PATH_LIST_DELIMITER,
            existing
        ),
        None => include_dir.display().to_string(),
    }
}

/// Resolve the compiler name from an optional override.
pub fn compiler_name(cc_override: Option<&str>) -> String {
    cc_override
        .filter(|cc| !cc.is_empty())
        .unwrap_or(DEFAULT_CC)
        .to_string()
}
