//! File-based CV profile source
//!
//! Implements `CvService` over a directory of JSON profiles, one per
//! employee.

mod store;

pub use store::JsonCvDirectory;
