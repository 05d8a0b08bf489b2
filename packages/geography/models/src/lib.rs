#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Mexican geographic reference types.
//!
//! States are identified by a two-digit INEGI code and municipalities by a
//! five-digit code whose first two digits are the owning state's code.

pub mod states;

use serde::{Deserialize, Serialize};

/// A single municipality in the municipal catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Municipio {
    /// Five-digit municipal code (e.g. "09015").
    pub code: String,
    /// Two-digit code of the owning state (e.g. "09").
    pub state_code: String,
    /// Human-readable municipality name.
    pub name: String,
}

impl Municipio {
    /// Builds a catalog entry, deriving the state code from the municipal
    /// code prefix.
    #[must_use]
    pub fn new(code: &str, name: &str) -> Self {
        Self {
            code: code.to_owned(),
            state_code: states::state_prefix(code).to_owned(),
            name: name.to_owned(),
        }
    }

    /// Name of the owning state, if the prefix is a known state code.
    #[must_use]
    pub fn state_name(&self) -> Option<&'static str> {
        states::state_name(&self.state_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_state_code() {
        let m = Municipio::new("14039", "Guadalajara");
        assert_eq!(m.state_code, "14");
        assert_eq!(m.state_name(), Some("Jalisco"));
    }
}
