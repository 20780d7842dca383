//! CLI layer for taskdist
//!
//! This module contains the command-line interface:
//!
//! - [`app`] - CLI definitions and entry point
//! - [`commands`] - Command implementations
//! - [`workspace`] - Config-backed stores shared by commands and the server

pub mod app;
pub mod commands;
pub mod workspace;

// Re-export main entry point
pub use app::run;
pub use workspace::Workspace;
