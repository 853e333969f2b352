//! Core data structures for pyprobe.
//!
//! - The environment snapshot handed to the resolver
//! - Flag and path construction
//! - The resolved configuration document

pub mod env;
pub mod flags;
pub mod resolved;

pub use env::ProbeEnv;
pub use resolved::{LinkConfig, ResolvedConfig, ResolvedVars};
