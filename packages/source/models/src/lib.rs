#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Case count records and the historical snapshot format.
//!
//! Every fetcher produces [`StateRecord`]s or per-category count maps that
//! end up as [`MunicipalRecord`]s. The JSON layout of [`StateRecord`] is the
//! one used by the dated snapshot archive, so a rendered dataset can be read
//! back as a [`Snapshot`].

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString, IntoStaticStr};

/// Name of the virtual national aggregate row in the SINAVE feed.
pub const NATIONAL_ROW: &str = "NACIONAL";

/// Case category reported by the feeds.
///
/// The string form is the value the municipal endpoint expects in its
/// `sPatType` form field.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    IntoStaticStr,
)]
pub enum CaseCategory {
    /// Confirmed (positive) cases.
    Confirmados,
    /// Negative test results.
    Negativos,
    /// Suspected cases awaiting results.
    Sospechosos,
    /// Deaths.
    Defunciones,
}

impl CaseCategory {
    /// All categories, in the order they are fetched.
    pub const ALL: [Self; 4] = [
        Self::Confirmados,
        Self::Negativos,
        Self::Sospechosos,
        Self::Defunciones,
    ];
}

/// The four counters tracked for every geographic unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseCounts {
    /// Confirmed cases.
    #[serde(default)]
    pub positive: u64,
    /// Negative test results.
    #[serde(default)]
    pub negative: u64,
    /// Suspected cases.
    #[serde(default)]
    pub suspect: u64,
    /// Deaths.
    #[serde(default)]
    pub deaths: u64,
}

impl CaseCounts {
    /// Returns the counter for `category`.
    #[must_use]
    pub const fn get(&self, category: CaseCategory) -> u64 {
        match category {
            CaseCategory::Confirmados => self.positive,
            CaseCategory::Negativos => self.negative,
            CaseCategory::Sospechosos => self.suspect,
            CaseCategory::Defunciones => self.deaths,
        }
    }

    /// Overwrites the counter for `category`.
    pub const fn set(&mut self, category: CaseCategory, value: u64) {
        match category {
            CaseCategory::Confirmados => self.positive = value,
            CaseCategory::Negativos => self.negative = value,
            CaseCategory::Sospechosos => self.suspect = value,
            CaseCategory::Defunciones => self.deaths = value,
        }
    }

    /// Adds every counter of `other` into `self`, saturating at `u64::MAX`.
    pub const fn accumulate(&mut self, other: &Self) {
        self.positive = self.positive.saturating_add(other.positive);
        self.negative = self.negative.saturating_add(other.negative);
        self.suspect = self.suspect.saturating_add(other.suspect);
        self.deaths = self.deaths.saturating_add(other.deaths);
    }

    /// Positive cases over tested cases (positive + negative).
    ///
    /// Returns `0.0` when nothing has been tested.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn test_positivity_rate(&self) -> f64 {
        let tested = u128::from(self.positive) + u128::from(self.negative);
        if tested == 0 {
            return 0.0;
        }
        self.positive as f64 / tested as f64
    }
}

/// Case counts for one state, or the national aggregate row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateRecord {
    /// State name as spelled by the feed (or [`NATIONAL_ROW`]).
    pub name: String,
    /// Case counters.
    #[serde(flatten)]
    pub counts: CaseCounts,
    /// Cumulative cases per population unit. Zero when the feed predates
    /// the attack-rate column.
    #[serde(default)]
    pub attack_rate: f64,
}

impl StateRecord {
    /// Whether this is the virtual national aggregate row.
    #[must_use]
    pub fn is_national(&self) -> bool {
        self.name == NATIONAL_ROW
    }
}

/// Case counts for one municipality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MunicipalRecord {
    /// Five-digit municipal code.
    pub code: String,
    /// Municipality name, empty when the code is not in the catalog.
    pub name: String,
    /// Case counters.
    #[serde(flatten)]
    pub counts: CaseCounts,
}

/// A dated snapshot as stored in the historical archive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Per-state records, possibly including the national row.
    pub states: Vec<StateRecord>,
}
