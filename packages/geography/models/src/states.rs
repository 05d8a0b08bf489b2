//! Mexican state code utilities.
//!
//! Provides the mapping between two-digit INEGI state codes (the
//! `cve_ent` prefix of every municipal code) and state names as they are
//! spelled by the SINAVE feed.

/// INEGI codes for the 32 federal entities.
pub const STATE_CODES: &[&str] = &[
    "01", "02", "03", "04", "05", "06", "07", "08", "09", "10", "11", "12", "13", "14", "15", "16",
    "17", "18", "19", "20", "21", "22", "23", "24", "25", "26", "27", "28", "29", "30", "31", "32",
];

/// Maps a two-digit state code to the state name.
///
/// Returns `None` for unrecognized codes.
#[must_use]
pub fn state_name(code: &str) -> Option<&'static str> {
    let name = match code {
        "01" => "Aguascalientes",
        "02" => "Baja California",
        "03" => "Baja California Sur",
        "04" => "Campeche",
        "05" => "Coahuila",
        "06" => "Colima",
        "07" => "Chiapas",
        "08" => "Chihuahua",
        "09" => "Ciudad de México",
        "10" => "Durango",
        "11" => "Guanajuato",
        "12" => "Guerrero",
        "13" => "Hidalgo",
        "14" => "Jalisco",
        "15" => "México",
        "16" => "Michoacán",
        "17" => "Morelos",
        "18" => "Nayarit",
        "19" => "Nuevo León",
        "20" => "Oaxaca",
        "21" => "Puebla",
        "22" => "Querétaro",
        "23" => "Quintana Roo",
        "24" => "San Luis Potosí",
        "25" => "Sinaloa",
        "26" => "Sonora",
        "27" => "Tabasco",
        "28" => "Tamaulipas",
        "29" => "Tlaxcala",
        "30" => "Veracruz",
        "31" => "Yucatán",
        "32" => "Zacatecas",
        _ => return None,
    };
    Some(name)
}

/// Returns `true` if `code` is one of the 32 state codes.
#[must_use]
pub fn is_state_code(code: &str) -> bool {
    state_name(code).is_some()
}

/// Extracts the two-digit state prefix from a municipal code.
///
/// Codes shorter than two characters are returned unchanged so they still
/// group together instead of being dropped.
#[must_use]
pub fn state_prefix(municipal_code: &str) -> &str {
    municipal_code.get(..2).unwrap_or(municipal_code)
}
