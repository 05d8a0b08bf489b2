//! State-level dataset with eagerly computed totals.

use covid19mx_analytics_models::Totals;
use covid19mx_source_models::{CaseCounts, Snapshot, StateRecord};

/// Per-state rows of one observation, without the national row.
///
/// Totals are computed when the dataset is built and never change; build a
/// new dataset to get new totals.
#[derive(Debug, Clone, PartialEq)]
pub struct StateDataset {
    states: Vec<StateRecord>,
    totals: Totals,
}

impl StateDataset {
    /// Builds a dataset from state rows that contain no national row.
    #[must_use]
    pub fn new(states: Vec<StateRecord>, national_attack_rate: f64) -> Self {
        let mut counts = CaseCounts::default();
        for state in &states {
            counts.accumulate(&state.counts);
        }
        let totals = Totals {
            counts,
            test_positivity_rate: counts.test_positivity_rate(),
            attack_rate: national_attack_rate,
        };
        Self { states, totals }
    }

    /// Builds a dataset from feed or snapshot rows.
    ///
    /// The `NACIONAL` row is dropped from the state list and its attack
    /// rate kept as the national figure. If it appears more than once, the
    /// last one wins.
    #[must_use]
    pub fn from_records(records: Vec<StateRecord>) -> Self {
        let mut national_attack_rate = 0.0;
        let mut states = Vec::with_capacity(records.len());
        for record in records {
            if record.is_national() {
                national_attack_rate = record.attack_rate;
            } else {
                states.push(record);
            }
        }
        log::debug!("Dataset with {} states", states.len());
        Self::new(states, national_attack_rate)
    }

    /// State rows in feed order.
    #[must_use]
    pub fn states(&self) -> &[StateRecord] {
        &self.states
    }

    /// Looks up a state by name.
    #[must_use]
    pub fn state(&self, name: &str) -> Option<&StateRecord> {
        self.states.iter().find(|s| s.name == name)
    }

    /// Totals over every state.
    #[must_use]
    pub const fn totals(&self) -> &Totals {
        &self.totals
    }

    /// The dataset in the archive's snapshot layout.
    #[must_use]
    pub fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            states: self.states.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use covid19mx_source_models::NATIONAL_ROW;

    use super::*;

    fn record(name: &str, positive: u64, negative: u64, attack_rate: f64) -> StateRecord {
        StateRecord {
            name: name.to_owned(),
            counts: CaseCounts {
                positive,
                negative,
                suspect: 1,
                deaths: 0,
            },
            attack_rate,
        }
    }

    #[test]
    fn national_row_is_split_off() {
        let dataset = StateDataset::from_records(vec![
            record("Aguascalientes", 24, 243, 1.77),
            record(NATIONAL_ROW, 2785, 21000, 2.18),
            record("Baja California", 360, 600, 9.9),
        ]);

        let names: Vec<_> = dataset.states().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Aguascalientes", "Baja California"]);
        assert!((dataset.totals().attack_rate - 2.18).abs() < f64::EPSILON);
        assert!(dataset.state(NATIONAL_ROW).is_none());
    }

    #[test]
    fn totals_are_sums_of_states() {
        let dataset = StateDataset::from_records(vec![
            record("Colima", 1, 3, 0.0),
            record("Durango", 3, 1, 0.0),
        ]);
        let totals = dataset.totals();
        assert_eq!(
            totals.counts,
            CaseCounts {
                positive: 4,
                negative: 4,
                suspect: 2,
                deaths: 0,
            }
        );
        assert!((totals.test_positivity_rate - 0.5).abs() < f64::EPSILON);
        assert!(totals.attack_rate.abs() < f64::EPSILON);
    }

    #[test]
    fn empty_dataset_has_zero_totals() {
        let dataset = StateDataset::from_records(Vec::new());
        assert_eq!(*dataset.totals(), Totals::default());
    }

    #[test]
    fn snapshot_json_round_trip() {
        let dataset = StateDataset::from_records(vec![
            record("Chiapas", 20, 100, 0.35),
            record(NATIONAL_ROW, 20, 100, 0.1),
        ]);
        let json = serde_json::to_string_pretty(&dataset.to_snapshot()).unwrap();
        let snapshot: Snapshot = serde_json::from_str(&json).unwrap();
        let restored = StateDataset::from_records(snapshot.states);

        assert_eq!(restored.states(), dataset.states());
        assert_eq!(restored.totals().counts, dataset.totals().counts);
    }
}
