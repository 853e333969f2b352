//! Serialization of the resolved configuration.

use std::io::Write;

use crate::core::resolved::ResolvedConfig;
use crate::util::errors::ProbeError;

/// Render the configuration as indented JSON.
pub fn render_config(config: &ResolvedConfig) -> Result<String, ProbeError> {
    Ok(serde_json::to_string_pretty(config)?)
}

/// Write the configuration as one JSON document followed by a newline.
///
/// The document is rendered in full before anything is written.
pub fn write_config(config: &ResolvedConfig, mut out: impl Write) -> Result<(), ProbeError> {
    let json = render_config(config)?;
    writeln!(out, "{}", json)?;
    out.flush()?;
    Ok(())
}
