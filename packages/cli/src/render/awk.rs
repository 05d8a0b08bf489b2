//! Tab-separated rows meant for `awk`, `cut` and friends.
//!
//! Names never contain whitespace, so every row splits into the same
//! number of fields however the consumer tokenizes it.

use std::io;

use covid19mx_analytics::StateDataset;
use covid19mx_analytics_models::DatasetDiff;
use covid19mx_source_models::MunicipalRecord;

/// Placeholder for a municipality missing from the catalog.
const UNKNOWN_NAME: &str = "-";

fn compact_name(name: &str) -> String {
    if name == "Ciudad de México" {
        return "CDMX".to_owned();
    }
    name.split_whitespace().collect()
}

pub fn states(out: &mut impl io::Write, dataset: &StateDataset) -> io::Result<()> {
    for state in dataset.states() {
        let c = &state.counts;
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}",
            compact_name(&state.name),
            c.positive,
            c.negative,
            c.suspect,
            c.deaths
        )?;
    }
    Ok(())
}

pub fn municipios(out: &mut impl io::Write, municipios: &[&MunicipalRecord]) -> io::Result<()> {
    for municipio in municipios {
        let name = compact_name(&municipio.name);
        let c = &municipio.counts;
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}\t{}",
            municipio.code,
            if name.is_empty() { UNKNOWN_NAME } else { name.as_str() },
            c.positive,
            c.negative,
            c.suspect,
            c.deaths
        )?;
    }
    Ok(())
}

pub fn diff(out: &mut impl io::Write, diff: &DatasetDiff) -> io::Result<()> {
    let rows = diff
        .states
        .iter()
        .map(|s| (compact_name(&s.name), &s.current, &s.delta))
        .chain(std::iter::once((
            "TOTAL".to_owned(),
            &diff.total.current,
            &diff.total.delta,
        )));
    for (name, c, d) in rows {
        writeln!(
            out,
            "{name}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            c.positive, d.positive, c.negative, d.negative, c.suspect, d.suspect, c.deaths, d.deaths
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::fixtures;

    #[test]
    fn compacts_names() {
        assert_eq!(compact_name("Ciudad de México"), "CDMX");
        assert_eq!(compact_name("Baja California Sur"), "BajaCaliforniaSur");
        assert_eq!(compact_name("Colima"), "Colima");
    }

    #[test]
    fn state_rows() {
        let text = fixtures::render(|out| states(out, &fixtures::dataset()));
        assert_eq!(text, "Aguascalientes\t24\t243\t74\t0\nCDMX\t300\t900\t200\t20\n");
    }

    #[test]
    fn municipio_rows_never_have_empty_fields() {
        let municipios = fixtures::municipios();
        let refs: Vec<&MunicipalRecord> = municipios.iter().collect();
        let text = fixtures::render(|out| super::municipios(out, &refs));

        assert_eq!(
            text,
            "09015\tCuauhtémoc\t120\t300\t40\t8\n09999\t-\t1\t0\t0\t0\n"
        );
    }

    #[test]
    fn diff_rows_end_with_total() {
        let text = fixtures::render(|out| diff(out, &fixtures::diff()));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[1], "CDMX\t300\t20\t900\t50\t200\t10\t20\t2");
        assert_eq!(lines[2], "TOTAL\t324\t24\t1143\t93\t274\t4\t20\t2");
    }
}
