//! Bordered fixed-width tables.

use std::io;

use covid19mx_analytics::StateDataset;
use covid19mx_analytics_models::{CaseDelta, DatasetDiff};
use covid19mx_source_models::{CaseCounts, MunicipalRecord};

const STATE_HEADER: [&str; 7] = [
    "Estado",
    "Casos Positivos",
    "Casos Negativos",
    "Casos Sospechosos",
    "Decesos",
    "Positividad",
    "Incidencia",
];
const STATE_WIDTHS: [usize; 7] = [20, 15, 15, 17, 7, 11, 10];

const MUNICIPIO_HEADER: [&str; 7] = [
    "Código",
    "Municipio",
    "Casos Positivos",
    "Casos Negativos",
    "Casos Sospechosos",
    "Decesos",
    "Positividad",
];
const MUNICIPIO_WIDTHS: [usize; 7] = [6, 30, 15, 15, 17, 7, 11];
const MUNICIPIO_NAME_COLUMN: usize = 1;

const DIFF_HEADER: [&str; 5] = [
    "Estado",
    "Casos Positivos",
    "Casos Negativos",
    "Casos Sospechosos",
    "Decesos",
];
const DIFF_WIDTHS: [usize; 5] = [20, 15, 15, 17, 11];

fn border(out: &mut impl io::Write, widths: &[usize]) -> io::Result<()> {
    write!(out, "|")?;
    for width in widths {
        write!(out, "{}|", "-".repeat(width + 2))?;
    }
    writeln!(out)
}

fn row<S: AsRef<str>>(out: &mut impl io::Write, widths: &[usize], cells: &[S]) -> io::Result<()> {
    write!(out, "|")?;
    for (cell, &width) in cells.iter().zip(widths) {
        write!(out, " {:<width$} |", cell.as_ref())?;
    }
    writeln!(out)
}

fn count_cells(counts: &CaseCounts) -> [String; 4] {
    [
        counts.positive.to_string(),
        counts.negative.to_string(),
        counts.suspect.to_string(),
        counts.deaths.to_string(),
    ]
}

pub fn states(out: &mut impl io::Write, dataset: &StateDataset) -> io::Result<()> {
    border(out, &STATE_WIDTHS)?;
    row(out, &STATE_WIDTHS, &STATE_HEADER)?;
    border(out, &STATE_WIDTHS)?;

    for state in dataset.states() {
        let [positive, negative, suspect, deaths] = count_cells(&state.counts);
        row(
            out,
            &STATE_WIDTHS,
            &[
                state.name.clone(),
                positive,
                negative,
                suspect,
                deaths,
                format!("{:.4}", state.counts.test_positivity_rate()),
                format!("{:.2}", state.attack_rate),
            ],
        )?;
    }

    let totals = dataset.totals();
    let [positive, negative, suspect, deaths] = count_cells(&totals.counts);
    border(out, &STATE_WIDTHS)?;
    row(
        out,
        &STATE_WIDTHS,
        &[
            "TOTAL".to_owned(),
            positive,
            negative,
            suspect,
            deaths,
            format!("{:.4}", totals.test_positivity_rate),
            format!("{:.2}", totals.attack_rate),
        ],
    )?;
    border(out, &STATE_WIDTHS)
}

/// Column widths for `municipios`, with the name column stretched to fit
/// the longest name.
fn municipio_widths(municipios: &[&MunicipalRecord]) -> [usize; 7] {
    let mut widths = MUNICIPIO_WIDTHS;
    let longest = municipios
        .iter()
        .map(|m| m.name.chars().count())
        .max()
        .unwrap_or(0);
    widths[MUNICIPIO_NAME_COLUMN] = widths[MUNICIPIO_NAME_COLUMN].max(longest);
    widths
}

pub fn municipios(out: &mut impl io::Write, municipios: &[&MunicipalRecord]) -> io::Result<()> {
    let widths = municipio_widths(municipios);
    border(out, &widths)?;
    row(out, &widths, &MUNICIPIO_HEADER)?;
    border(out, &widths)?;

    let mut total = CaseCounts::default();
    for municipio in municipios {
        total.accumulate(&municipio.counts);
        let [positive, negative, suspect, deaths] = count_cells(&municipio.counts);
        row(
            out,
            &widths,
            &[
                municipio.code.clone(),
                municipio.name.clone(),
                positive,
                negative,
                suspect,
                deaths,
                format!("{:.4}", municipio.counts.test_positivity_rate()),
            ],
        )?;
    }

    let [positive, negative, suspect, deaths] = count_cells(&total);
    border(out, &widths)?;
    row(
        out,
        &widths,
        &[
            String::new(),
            "TOTAL".to_owned(),
            positive,
            negative,
            suspect,
            deaths,
            format!("{:.4}", total.test_positivity_rate()),
        ],
    )?;
    border(out, &widths)
}

fn change_cells(current: &CaseCounts, delta: &CaseDelta) -> [String; 4] {
    [
        format!("{:<5} ({})", delta.positive, current.positive),
        format!("{:<5} ({})", delta.negative, current.negative),
        format!("{:<5} ({})", delta.suspect, current.suspect),
        format!("{:<5} ({})", delta.deaths, current.deaths),
    ]
}

pub fn diff(out: &mut impl io::Write, diff: &DatasetDiff) -> io::Result<()> {
    border(out, &DIFF_WIDTHS)?;
    row(out, &DIFF_WIDTHS, &DIFF_HEADER)?;
    border(out, &DIFF_WIDTHS)?;

    for state in &diff.states {
        let [positive, negative, suspect, deaths] = change_cells(&state.current, &state.delta);
        row(
            out,
            &DIFF_WIDTHS,
            &[state.name.clone(), positive, negative, suspect, deaths],
        )?;
    }

    let [positive, negative, suspect, deaths] =
        change_cells(&diff.total.current, &diff.total.delta);
    border(out, &DIFF_WIDTHS)?;
    row(
        out,
        &DIFF_WIDTHS,
        &["TOTAL".to_owned(), positive, negative, suspect, deaths],
    )?;
    border(out, &DIFF_WIDTHS)
}
