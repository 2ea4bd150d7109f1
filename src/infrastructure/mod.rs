//! Sandbox filesystem conventions.
//!
//! Zellij mounts the host directory the plugin was started from at `/host`.

pub mod paths;

pub use paths::{data_dir, expand_tilde};
