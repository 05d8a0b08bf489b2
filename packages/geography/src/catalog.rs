//! The municipal code catalog.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use covid19mx_geography_models::Municipio;
use serde::Deserialize;

use crate::GeographyError;

/// INEGI municipal catalog baked into the binary, every state included.
/// [`Catalog::from_path`] loads a replacement.
const EMBEDDED_CATALOG: &str = include_str!("../data/municipios.csv");

/// Width of a municipal code (two state digits + three municipal digits).
const CODE_WIDTH: usize = 5;

#[derive(Debug, Deserialize)]
struct CatalogRow {
    code: String,
    name: String,
}

/// Immutable lookup table from five-digit municipal code to [`Municipio`].
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    municipios: BTreeMap<String, Municipio>,
}

impl Catalog {
    /// Parses the catalog embedded at compile time.
    ///
    /// # Errors
    ///
    /// Returns [`GeographyError`] if the embedded CSV is malformed.
    pub fn embedded() -> Result<Self, GeographyError> {
        Self::from_reader(EMBEDDED_CATALOG.as_bytes())
    }

    /// Loads a catalog from a `code,name` CSV file on disk.
    ///
    /// # Errors
    ///
    /// Returns [`GeographyError`] if the file cannot be read or a row is
    /// invalid.
    pub fn from_path(path: &Path) -> Result<Self, GeographyError> {
        let file = std::fs::File::open(path)?;
        let catalog = Self::from_reader(file)?;
        log::info!(
            "Loaded {} municipios from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Parses a `code,name` CSV with a header row.
    ///
    /// Codes that lost their leading zeros (a common spreadsheet artifact,
    /// e.g. `1001`) are zero-padded back to five digits. When a code appears
    /// more than once the last row wins.
    ///
    /// # Errors
    ///
    /// Returns [`GeographyError`] on CSV errors or if a code is not numeric
    /// or is longer than five digits.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, GeographyError> {
        let mut csv = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut municipios = BTreeMap::new();
        for (idx, row) in csv.deserialize::<CatalogRow>().enumerate() {
            let row = row?;
            let line = idx as u64 + 2;
            let code = normalize_code(&row.code).ok_or_else(|| GeographyError::InvalidCode {
                code: row.code.clone(),
                line,
            })?;
            municipios.insert(code.clone(), Municipio::new(&code, &row.name));
        }

        Ok(Self { municipios })
    }

    /// Looks up a municipality by its five-digit code.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&Municipio> {
        self.municipios.get(code)
    }

    /// Display name for a code, or an empty string if the code is unknown.
    #[must_use]
    pub fn name_of(&self, code: &str) -> &str {
        self.get(code).map_or("", |m| m.name.as_str())
    }

    /// Iterates over the municipalities of one state, ordered by code.
    pub fn in_state<'a>(&'a self, state_code: &'a str) -> impl Iterator<Item = &'a Municipio> {
        self.municipios
            .values()
            .filter(move |m| m.state_code == state_code)
    }

    /// Number of municipalities in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.municipios.len()
    }

    /// Whether the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.municipios.is_empty()
    }
}

fn normalize_code(raw: &str) -> Option<String> {
    if raw.is_empty() || raw.len() > CODE_WIDTH || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(format!("{raw:0>CODE_WIDTH$}"))
}
