//! Configuration for Jot
//!
//! Author identity comes from a global TOML config file, overridable per
//! invocation through environment variables, with built-in defaults so a
//! fresh installation can commit immediately.

pub mod global_config;

pub use global_config::{AuthorIdentity, ConfigKey, GlobalConfig};
