//! Shared library for the clip review tool
//!
//! Holds everything that does not depend on the HTTP layer: the common error
//! type, configuration resolution, the in-memory clip dataset, and the
//! CSV-backed comment store.

pub mod comments;
pub mod config;
pub mod dataset;
pub mod error;

pub use error::{Error, Result};
