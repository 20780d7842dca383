//! Core domain logic for taskdist
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Task, Employee, CvProfile, Assignment)
//! - `services/` - Scoring, allocation and reporting
//! - `ports/` - Trait definitions for storage and the CV parser
//! - `error` - Infrastructure error taxonomy

pub mod error;
pub mod models;
pub mod ports;
pub mod services;

pub use error::DistributionError;
