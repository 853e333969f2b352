//! High-level operations.
//!
//! This module contains the implementation of pyprobe commands.

pub mod print;
pub mod resolve;

pub use print::{render_config, write_config};
pub use resolve::resolve_config;
