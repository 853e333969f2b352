//! Shared utilities

pub mod config;
pub mod errors;
pub mod process;

pub use config::ProbeSettings;
pub use errors::ProbeError;
