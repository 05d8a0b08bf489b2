#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Municipal catalog loading and lookup.
//!
//! The [`Catalog`] maps five-digit municipal codes to names. A default
//! catalog is embedded at compile time; a complete INEGI export in the same
//! `code,name` CSV layout can be supplied at runtime instead.

pub mod catalog;

pub use catalog::Catalog;

use thiserror::Error;

/// Errors that can occur while building a catalog.
#[derive(Debug, Error)]
pub enum GeographyError {
    /// Reading the catalog file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog is not valid CSV or a row does not match the layout.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A row carries something that is not a municipal code.
    #[error("Invalid municipal code '{code}' on line {line}")]
    InvalidCode {
        /// The offending value.
        code: String,
        /// One-based line number in the CSV input.
        line: u64,
    },
}
