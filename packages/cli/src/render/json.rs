//! Pretty-printed JSON.

use std::io;

use covid19mx_analytics::StateDataset;
use covid19mx_analytics_models::DatasetDiff;
use covid19mx_source_models::MunicipalRecord;
use serde::Serialize;

#[derive(Serialize)]
struct MunicipioListing<'a> {
    municipios: &'a [&'a MunicipalRecord],
}

fn write_pretty(out: &mut impl io::Write, value: &impl Serialize) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

pub fn states(out: &mut impl io::Write, dataset: &StateDataset) -> io::Result<()> {
    write_pretty(out, &dataset.to_snapshot())
}

pub fn municipios(out: &mut impl io::Write, municipios: &[&MunicipalRecord]) -> io::Result<()> {
    write_pretty(out, &MunicipioListing { municipios })
}

pub fn diff(out: &mut impl io::Write, diff: &DatasetDiff) -> io::Result<()> {
    write_pretty(out, diff)
}

#[cfg(test)]
mod tests {
    use covid19mx_source_models::Snapshot;

    use super::*;
    use crate::render::fixtures;

    #[test]
    fn state_json_round_trips_through_snapshot() {
        let dataset = fixtures::dataset();
        let text = fixtures::render(|out| states(out, &dataset));
        assert!(text.starts_with("{\n  \"states\": [\n"));

        let snapshot: Snapshot = serde_json::from_str(&text).unwrap();
        let restored = StateDataset::from_records(snapshot.states);
        assert_eq!(restored.states(), dataset.states());
        assert_eq!(restored.totals().counts, dataset.totals().counts);
    }

    #[test]
    fn municipio_json_listing() {
        let municipios = fixtures::municipios();
        let refs: Vec<&MunicipalRecord> = municipios.iter().collect();
        let text = fixtures::render(|out| super::municipios(out, &refs));

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["municipios"][0]["code"], "09015");
        assert_eq!(value["municipios"][0]["positive"], 120);
        assert_eq!(value["municipios"][1]["name"], "");
    }

    #[test]
    fn diff_json_has_states_and_total() {
        let text = fixtures::render(|out| diff(out, &fixtures::diff()));

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["states"][0]["name"], "Aguascalientes");
        assert_eq!(value["states"][0]["delta"]["suspect"], -6);
        assert_eq!(value["total"]["delta"]["positive"], 24);
        assert_eq!(value["total"]["positive"], 324);
    }
}
