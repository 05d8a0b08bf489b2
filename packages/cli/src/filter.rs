//! `--municipio` filter values.

use std::str::FromStr;

use covid19mx_geography::Catalog;
use covid19mx_geography_models::{Municipio, states};

use crate::CliError;

/// What to show in municipal mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MunicipioFilter {
    /// Municipalities of one state, by two-digit state code.
    State(String),
    /// Every municipality (`*` or `all`).
    All,
    /// One rolled-up row per state (`states`).
    States,
}

impl FromStr for MunicipioFilter {
    type Err = CliError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "*" | "all" => Ok(Self::All),
            "states" => Ok(Self::States),
            code if states::is_state_code(code) => Ok(Self::State(code.to_owned())),
            _ => Err(CliError::InvalidFilter {
                value: raw.to_owned(),
            }),
        }
    }
}

impl MunicipioFilter {
    /// Name of the state a [`Self::State`] filter selects, resolved through
    /// the catalog.
    ///
    /// `None` for the other filters, or when `catalog` has no municipio in
    /// that state.
    #[must_use]
    pub fn state_name(&self, catalog: &Catalog) -> Option<&'static str> {
        match self {
            Self::State(code) => catalog
                .in_state(code)
                .next()
                .and_then(Municipio::state_name),
            Self::All | Self::States => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_keywords_and_codes() {
        assert_eq!("*".parse::<MunicipioFilter>().unwrap(), MunicipioFilter::All);
        assert_eq!("all".parse::<MunicipioFilter>().unwrap(), MunicipioFilter::All);
        assert_eq!(
            "states".parse::<MunicipioFilter>().unwrap(),
            MunicipioFilter::States
        );
        assert_eq!(
            "09".parse::<MunicipioFilter>().unwrap(),
            MunicipioFilter::State("09".to_owned())
        );
    }

    #[test]
    fn rejects_other_values() {
        for raw in ["", "9", "00", "33", "09015", "cdmx"] {
            assert!(raw.parse::<MunicipioFilter>().is_err(), "{raw}");
        }
    }

    #[test]
    fn state_name_comes_from_catalog() {
        let catalog = Catalog::embedded().unwrap();
        let filter = MunicipioFilter::State("19".to_owned());
        assert_eq!(filter.state_name(&catalog), Some("Nuevo León"));
        assert_eq!(MunicipioFilter::All.state_name(&catalog), None);
        assert_eq!(MunicipioFilter::States.state_name(&catalog), None);
    }

    #[test]
    fn state_missing_from_catalog_has_no_name() {
        let catalog = Catalog::from_reader("code,name\n09015,Cuauhtémoc\n".as_bytes()).unwrap();
        assert_eq!(
            MunicipioFilter::State("09".to_owned()).state_name(&catalog),
            Some("Ciudad de México")
        );
        assert_eq!(
            MunicipioFilter::State("14".to_owned()).state_name(&catalog),
            None
        );
    }
}
