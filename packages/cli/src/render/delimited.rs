//! CSV output. Text fields are quoted, numbers are not.

use std::io;

use covid19mx_analytics::StateDataset;
use covid19mx_analytics_models::DatasetDiff;
use covid19mx_source_models::{CaseCounts, MunicipalRecord};

fn writer<W: io::Write>(out: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::NonNumeric)
        .from_writer(out)
}

fn count_fields(counts: &CaseCounts) -> [String; 4] {
    [
        counts.positive.to_string(),
        counts.negative.to_string(),
        counts.suspect.to_string(),
        counts.deaths.to_string(),
    ]
}

pub fn states(out: &mut impl io::Write, dataset: &StateDataset) -> io::Result<()> {
    let mut csv = writer(out);
    csv.write_record([
        "Estado",
        "Casos Positivos",
        "Casos Negativos",
        "Casos Sospechosos",
        "Decesos",
    ])?;
    for state in dataset.states() {
        let [positive, negative, suspect, deaths] = count_fields(&state.counts);
        csv.write_record([&state.name, &positive, &negative, &suspect, &deaths])?;
    }
    csv.flush()
}

pub fn municipios(out: &mut impl io::Write, municipios: &[&MunicipalRecord]) -> io::Result<()> {
    let mut csv = writer(out);
    csv.write_record([
        "Código",
        "Municipio",
        "Casos Positivos",
        "Casos Negativos",
        "Casos Sospechosos",
        "Decesos",
    ])?;
    for municipio in municipios {
        let [positive, negative, suspect, deaths] = count_fields(&municipio.counts);
        csv.write_record([
            &municipio.code,
            &municipio.name,
            &positive,
            &negative,
            &suspect,
            &deaths,
        ])?;
    }
    csv.flush()
}

pub fn diff(out: &mut impl io::Write, diff: &DatasetDiff) -> io::Result<()> {
    let mut csv = writer(out);
    csv.write_record([
        "Estado",
        "Casos Positivos",
        "Cambio Positivos",
        "Casos Negativos",
        "Cambio Negativos",
        "Casos Sospechosos",
        "Cambio Sospechosos",
        "Decesos",
        "Cambio Decesos",
    ])?;

    let rows = diff
        .states
        .iter()
        .map(|s| (s.name.as_str(), &s.current, &s.delta))
        .chain(std::iter::once((
            "TOTAL",
            &diff.total.current,
            &diff.total.delta,
        )));
    for (name, current, delta) in rows {
        csv.write_record([
            name.to_owned(),
            current.positive.to_string(),
            delta.positive.to_string(),
            current.negative.to_string(),
            delta.negative.to_string(),
            current.suspect.to_string(),
            delta.suspect.to_string(),
            current.deaths.to_string(),
            delta.deaths.to_string(),
        ])?;
    }
    csv.flush()
}
