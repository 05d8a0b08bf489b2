#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Building blocks of the `covid19mx` binary: configuration loading,
//! argument interpretation and output rendering.

pub mod config;
pub mod filter;
pub mod render;
pub mod since;

use std::path::PathBuf;

/// Errors raised while interpreting the command line or configuration.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// `--since` is not a recognised offset or date.
    #[error(
        "Invalid --since value '{value}' (expected 1d, 2d, N, yesterday, today or YYYY-MM-DD)"
    )]
    InvalidSince {
        /// Value as given.
        value: String,
    },

    /// `--since` resolved to a day before the calendar's range.
    #[error("--since value '{value}' is too far in the past")]
    SinceOutOfRange {
        /// Value as given.
        value: String,
    },

    /// `--municipio` is not a state code or a known keyword.
    #[error(
        "Invalid --municipio value '{value}' (expected a state code 01-32, '*', 'all' or 'states')"
    )]
    InvalidFilter {
        /// Value as given.
        value: String,
    },

    /// The config file could not be read.
    #[error("Failed to read config {}: {source}", path.display())]
    ConfigIo {
        /// Config file path.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`config::Config`].
    #[error("Invalid config {}: {source}", path.display())]
    ConfigParse {
        /// Config file path.
        path: PathBuf,
        /// Underlying error.
        source: toml::de::Error,
    },
}
