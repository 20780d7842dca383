//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `toml/` - `workforce.toml` task and employee storage
//! - `file/` - JSON CV profile directory

pub mod file;
pub mod toml;

pub use file::JsonCvDirectory;
pub use toml::TomlWorkforceStore;
