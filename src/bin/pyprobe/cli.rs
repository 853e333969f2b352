//! CLI definitions using clap.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// pyprobe - Discover C compiler and linker flags for building against Python
#[derive(Parser)]
#[command(name = "pyprobe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub probe: ProbeArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Default)]
pub struct ProbeArgs {
    /// Python interpreter used for the version query
    #[arg(long, env = "PYPROBE_PYTHON", value_name = "PROGRAM")]
    pub python: Option<String>,

    /// Python configuration tool used for prefix and ldflags
    #[arg(long, env = "PYPROBE_PYTHON_CONFIG", value_name = "PROGRAM")]
    pub python_config: Option<String>,

    /// Package identifier for the emitted link config
    #[arg(long, env = "PYPROBE_PACKAGE", value_name = "ID")]
    pub package: Option<String>,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
