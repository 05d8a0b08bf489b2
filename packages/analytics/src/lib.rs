#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Pure computations over decoded case data.
//!
//! * [`dataset`]: state rows with totals computed up front;
//! * [`aggregate`]: municipal per-category merge and state rollup;
//! * [`diff`]: comparison against an earlier snapshot.
//!
//! Nothing here performs I/O or fails.

pub mod aggregate;
pub mod dataset;
pub mod diff;

pub use aggregate::{Aggregator, MunicipalAggregate};
pub use dataset::StateDataset;
