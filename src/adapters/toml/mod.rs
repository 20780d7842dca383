//! TOML-based workforce store
//!
//! Implements the persistence ports using a single `workforce.toml` file.
//!
//! - [`parser`] - Read and deserialize workforce files
//! - [`writer`] - Format and atomically replace workforce files
//! - [`repository`] - Port implementations

pub mod parser;
pub mod repository;
pub mod writer;

pub use parser::{WorkforceFile, load_file};
pub use repository::TomlWorkforceStore;
pub use writer::{format_workforce_file, write_atomic};
