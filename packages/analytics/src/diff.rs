//! Day-over-day comparison of two state datasets.

use covid19mx_analytics_models::{CaseDelta, DatasetDiff, StateDiff, TotalDiff};
use covid19mx_source_models::CaseCounts;

use crate::StateDataset;

/// Compares `current` against an earlier `previous` dataset.
///
/// Rows follow `current`'s order and are matched to `previous` by state
/// name; a state missing from `previous` is compared against zeros. States
/// only present in `previous` are not listed. The totals row compares the
/// two datasets' totals category by category.
#[must_use]
pub fn compare(current: &StateDataset, previous: &StateDataset) -> DatasetDiff {
    let zero = CaseCounts::default();

    let states = current
        .states()
        .iter()
        .map(|state| {
            let before = previous.state(&state.name).map_or(&zero, |s| &s.counts);
            StateDiff {
                name: state.name.clone(),
                current: state.counts,
                delta: CaseDelta::between(&state.counts, before),
            }
        })
        .collect::<Vec<_>>();

    let missing = states
        .iter()
        .filter(|s| previous.state(&s.name).is_none())
        .count();
    if missing > 0 {
        log::warn!("{missing} states have no earlier snapshot row; compared against zero");
    }

    let current_totals = current.totals().counts;
    DatasetDiff {
        states,
        total: TotalDiff {
            current: current_totals,
            delta: CaseDelta::between(&current_totals, &previous.totals().counts),
        },
    }
}

#[cfg(test)]
mod tests {
    use covid19mx_source_models::StateRecord;

    use super::*;

    fn record(name: &str, positive: u64, negative: u64, suspect: u64, deaths: u64) -> StateRecord {
        StateRecord {
            name: name.to_owned(),
            counts: CaseCounts {
                positive,
                negative,
                suspect,
                deaths,
            },
            attack_rate: 0.0,
        }
    }

    #[test]
    fn pairs_states_by_name() {
        let current = StateDataset::from_records(vec![
            record("Colima", 10, 50, 5, 1),
            record("Durango", 20, 80, 9, 2),
        ]);
        let previous = StateDataset::from_records(vec![
            record("Durango", 15, 70, 12, 2),
            record("Colima", 8, 45, 5, 0),
        ]);

        let diff = compare(&current, &previous);
        assert_eq!(diff.states.len(), 2);
        assert_eq!(diff.states[0].name, "Colima");
        assert_eq!(
            diff.states[0].delta,
            CaseDelta {
                positive: 2,
                negative: 5,
                suspect: 0,
                deaths: 1,
            }
        );
        assert_eq!(diff.states[1].delta.suspect, -3);
        assert_eq!(diff.states[1].current.positive, 20);
    }

    #[test]
    fn missing_previous_state_counts_from_zero() {
        let current = StateDataset::from_records(vec![record("Colima", 10, 50, 5, 1)]);
        let previous = StateDataset::from_records(Vec::new());

        let diff = compare(&current, &previous);
        assert_eq!(
            diff.states[0].delta,
            CaseDelta {
                positive: 10,
                negative: 50,
                suspect: 5,
                deaths: 1,
            }
        );
    }

    #[test]
    fn total_suspect_delta_uses_suspect_totals() {
        let current = StateDataset::from_records(vec![record("Colima", 10, 500, 30, 1)]);
        let previous = StateDataset::from_records(vec![record("Colima", 8, 400, 20, 1)]);

        let total = compare(&current, &previous).total;
        assert_eq!(total.delta.suspect, 10);
        assert_eq!(total.delta.negative, 100);
        assert_eq!(total.current.suspect, 30);
    }

    #[test]
    fn national_row_is_not_compared() {
        let current = StateDataset::from_records(vec![
            record("NACIONAL", 100, 100, 100, 100),
            record("Colima", 1, 1, 1, 1),
        ]);
        let previous = StateDataset::from_records(vec![record("Colima", 1, 1, 1, 1)]);

        let diff = compare(&current, &previous);
        assert_eq!(diff.states.len(), 1);
        assert_eq!(diff.total.delta, CaseDelta::default());
    }
}
