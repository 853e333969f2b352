//! Default command: resolve the build configuration and print it.

use std::io;

use anyhow::Result;

use crate::cli::ProbeArgs;
use pyprobe::core::ProbeEnv;
use pyprobe::ops::{resolve_config, write_config};
use pyprobe::util::config::ProbeSettings;
use pyprobe::util::process::SystemRunner;

pub fn execute(args: ProbeArgs) -> Result<()> {
    let settings = settings(args);
    tracing::debug!(
        "using interpreter `{}` and config tool `{}`",
        settings.python,
        settings.python_config
    );

    let env = ProbeEnv::from_process();
    let resolved = resolve_config(&mut SystemRunner, &env, &settings)?;

    write_config(&resolved, io::stdout().lock())?;
    Ok(())
}

fn settings(args: ProbeArgs) -> ProbeSettings {
    ProbeSettings::with_overrides(args.python, args.python_config, args.package)
}
