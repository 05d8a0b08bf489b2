#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Result types produced by the analytics crate.
//!
//! These are plain serializable values: dataset totals and the
//! day-over-day comparison of two datasets.

use covid19mx_source_models::CaseCounts;
use serde::{Deserialize, Serialize};

/// Totals of a state dataset, computed once when the dataset is built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    /// Summed counters over every state.
    #[serde(flatten)]
    pub counts: CaseCounts,
    /// `positive / (positive + negative)` over the summed counters.
    pub test_positivity_rate: f64,
    /// Attack rate of the national aggregate row (zero if absent).
    pub attack_rate: f64,
}

/// Signed change of each counter between two observations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseDelta {
    /// Change in confirmed cases.
    pub positive: i64,
    /// Change in negative results.
    pub negative: i64,
    /// Change in suspected cases.
    pub suspect: i64,
    /// Change in deaths.
    pub deaths: i64,
}

impl CaseDelta {
    /// Counter-by-counter `current - previous`.
    #[must_use]
    pub fn between(current: &CaseCounts, previous: &CaseCounts) -> Self {
        Self {
            positive: signed_difference(current.positive, previous.positive),
            negative: signed_difference(current.negative, previous.negative),
            suspect: signed_difference(current.suspect, previous.suspect),
            deaths: signed_difference(current.deaths, previous.deaths),
        }
    }
}

fn signed_difference(current: u64, previous: u64) -> i64 {
    if current >= previous {
        i64::try_from(current - previous).unwrap_or(i64::MAX)
    } else {
        i64::try_from(previous - current).map_or(i64::MIN, |d| -d)
    }
}

/// One state's current counters and their change since the earlier
/// snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDiff {
    /// State name.
    pub name: String,
    /// Counters in the current dataset.
    #[serde(flatten)]
    pub current: CaseCounts,
    /// Change relative to the earlier snapshot.
    pub delta: CaseDelta,
}

/// Change of the dataset totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalDiff {
    /// Totals of the current dataset.
    #[serde(flatten)]
    pub current: CaseCounts,
    /// Change relative to the earlier snapshot's totals.
    pub delta: CaseDelta,
}

/// Comparison of a current dataset against an earlier snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetDiff {
    /// Per-state rows, in the current dataset's order.
    pub states: Vec<StateDiff>,
    /// Totals row.
    pub total: TotalDiff,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_can_be_negative() {
        let current = CaseCounts {
            positive: 10,
            negative: 4,
            suspect: 2,
            deaths: 1,
        };
        let previous = CaseCounts {
            positive: 7,
            negative: 4,
            suspect: 5,
            deaths: 0,
        };
        assert_eq!(
            CaseDelta::between(&current, &previous),
            CaseDelta {
                positive: 3,
                negative: 0,
                suspect: -3,
                deaths: 1,
            }
        );
    }

    #[test]
    fn delta_saturates_at_i64_bounds() {
        assert_eq!(signed_difference(u64::MAX, 0), i64::MAX);
        assert_eq!(signed_difference(0, u64::MAX), i64::MIN);
    }

    #[test]
    fn state_diff_json_shape() {
        let diff = StateDiff {
            name: "Colima".to_owned(),
            current: CaseCounts {
                positive: 5,
                negative: 40,
                suspect: 12,
                deaths: 1,
            },
            delta: CaseDelta {
                positive: 2,
                negative: 6,
                suspect: -1,
                deaths: 0,
            },
        };
        assert_eq!(
            serde_json::to_value(&diff).unwrap(),
            serde_json::json!({
                "name": "Colima",
                "positive": 5,
                "negative": 40,
                "suspect": 12,
                "deaths": 1,
                "delta": {"positive": 2, "negative": 6, "suspect": -1, "deaths": 0},
            })
        );
    }
}
