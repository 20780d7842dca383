//! taskdist - Automatic task distribution for teams
//!
//! Assigns open tasks to the best-fitting employees by specialization,
//! skills and workload, from the command line or over HTTP.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

mod cli;
#[cfg(feature = "server")]
mod server;

use colored::Colorize;

/// Main entry point for the taskdist CLI
fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{} {e:#}", "error:".red().bold());
        std::process::exit(1);
    }
}
