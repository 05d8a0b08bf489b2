//! Municipal aggregation and per-state rollup.
//!
//! The municipal feed delivers one `code → count` map per [`CaseCategory`].
//! [`Aggregator`] merges them into one [`MunicipalRecord`] per code, naming
//! each through the [`Catalog`], then rolls the municipalities up into their
//! states by code prefix.

use std::collections::BTreeMap;

use covid19mx_geography::Catalog;
use covid19mx_geography_models::states;
use covid19mx_source_models::{CaseCategory, CaseCounts, MunicipalRecord, StateRecord};

use crate::StateDataset;

/// Merges per-category municipal counts.
#[derive(Debug)]
pub struct Aggregator<'a> {
    catalog: &'a Catalog,
    municipios: BTreeMap<String, MunicipalRecord>,
}

impl<'a> Aggregator<'a> {
    /// Starts an empty aggregation resolving names through `catalog`.
    #[must_use]
    pub const fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            municipios: BTreeMap::new(),
        }
    }

    /// Assigns the `category` counter of every code in `counts`.
    ///
    /// Each category only ever writes its own field, so the order in which
    /// categories are merged does not matter.
    pub fn merge(&mut self, category: CaseCategory, counts: &BTreeMap<String, u64>) -> &mut Self {
        let catalog = self.catalog;
        for (code, &value) in counts {
            let record = self
                .municipios
                .entry(code.clone())
                .or_insert_with(|| MunicipalRecord {
                    code: code.clone(),
                    name: catalog.name_of(code).to_owned(),
                    counts: CaseCounts::default(),
                });
            record.counts.set(category, value);
        }
        self
    }

    /// Finishes the aggregation and computes the state rollups.
    #[must_use]
    pub fn finish(self) -> MunicipalAggregate {
        let unresolved = self
            .municipios
            .values()
            .filter(|m| m.name.is_empty())
            .count();
        if unresolved > 0 {
            log::warn!(
                "{unresolved} of {} municipal codes are not in the catalog",
                self.municipios.len()
            );
        }

        let states = rollup(&self.municipios);
        log::debug!(
            "Aggregated {} municipios into {} states",
            self.municipios.len(),
            states.len()
        );

        MunicipalAggregate {
            municipios: self.municipios,
            states,
        }
    }
}

/// Merges every category of `categories` in one go.
#[must_use]
pub fn aggregate(
    catalog: &Catalog,
    categories: &BTreeMap<CaseCategory, BTreeMap<String, u64>>,
) -> MunicipalAggregate {
    let mut aggregator = Aggregator::new(catalog);
    for (&category, counts) in categories {
        aggregator.merge(category, counts);
    }
    aggregator.finish()
}

fn rollup(municipios: &BTreeMap<String, MunicipalRecord>) -> BTreeMap<String, StateRecord> {
    let mut rollups: BTreeMap<String, StateRecord> = BTreeMap::new();
    for municipio in municipios.values() {
        let prefix = states::state_prefix(&municipio.code);
        let state = rollups
            .entry(prefix.to_owned())
            .or_insert_with(|| StateRecord {
                name: states::state_name(prefix).unwrap_or_default().to_owned(),
                counts: CaseCounts::default(),
                attack_rate: 0.0,
            });
        state.counts.accumulate(&municipio.counts);
    }
    rollups
}

/// Merged municipal records and their state rollups, both keyed by code.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MunicipalAggregate {
    municipios: BTreeMap<String, MunicipalRecord>,
    states: BTreeMap<String, StateRecord>,
}

impl MunicipalAggregate {
    /// Every municipality, ordered by code.
    pub fn municipios(&self) -> impl Iterator<Item = &MunicipalRecord> {
        self.municipios.values()
    }

    /// Looks up one municipality by five-digit code.
    #[must_use]
    pub fn municipio(&self, code: &str) -> Option<&MunicipalRecord> {
        self.municipios.get(code)
    }

    /// The municipalities of one state, ordered by code.
    pub fn in_state<'a>(
        &'a self,
        state_code: &'a str,
    ) -> impl Iterator<Item = &'a MunicipalRecord> {
        self.municipios
            .values()
            .filter(move |m| states::state_prefix(&m.code) == state_code)
    }

    /// State rollups keyed by two-digit state code.
    #[must_use]
    pub const fn states(&self) -> &BTreeMap<String, StateRecord> {
        &self.states
    }

    /// Looks up one state rollup by two-digit code.
    #[must_use]
    pub fn state(&self, state_code: &str) -> Option<&StateRecord> {
        self.states.get(state_code)
    }

    /// The state rollups as a [`StateDataset`], ordered by state code.
    ///
    /// The municipal feed has no attack rate, so every rate is zero.
    #[must_use]
    pub fn state_dataset(&self) -> StateDataset {
        StateDataset::new(self.states.values().cloned().collect(), 0.0)
    }

    /// Number of municipalities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.municipios.len()
    }

    /// Whether no municipality reported any count.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.municipios.is_empty()
    }
}
