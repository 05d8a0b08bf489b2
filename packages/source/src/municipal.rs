//! Municipal-level feed.
//!
//! One form `POST` per [`CaseCategory`], each answering with the embedded
//! script read by [`parse_script`].

use std::collections::BTreeMap;

use covid19mx_source_models::CaseCategory;

use crate::http::send_text;
use crate::script::parse_script;
use crate::SourceError;

/// Form field selecting the case category.
const CATEGORY_FIELD: &str = "sPatType";

/// Per-category counts keyed by five-digit municipal code.
pub type CategoryCounts = BTreeMap<CaseCategory, BTreeMap<String, u64>>;

fn category_form(category: CaseCategory) -> [(&'static str, &'static str); 1] {
    [(CATEGORY_FIELD, category.into())]
}

/// Fetches the counts of one category, keyed by municipal code.
///
/// # Errors
///
/// Returns [`SourceError`] if the request fails. Malformed entries inside
/// the script are skipped, not reported.
pub async fn fetch_category(
    client: &reqwest::Client,
    url: &str,
    category: CaseCategory,
) -> Result<BTreeMap<String, u64>, SourceError> {
    log::info!("Fetching municipal {category} from {url}");
    let body = send_text(client.post(url).form(&category_form(category))).await?;

    let counts = parse_script(&body);
    log::debug!("{category}: {} municipios", counts.len());
    Ok(counts)
}

/// Fetches every category, one request after the other.
///
/// # Errors
///
/// Returns the first [`SourceError`] encountered.
pub async fn fetch_all_categories(
    client: &reqwest::Client,
    url: &str,
) -> Result<CategoryCounts, SourceError> {
    let mut all = CategoryCounts::new();
    for category in CaseCategory::ALL {
        let counts = fetch_category(client, url, category).await?;
        all.insert(category, counts);
    }
    Ok(all)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_selects_category_by_name() {
        let expected = ["Confirmados", "Negativos", "Sospechosos", "Defunciones"];
        for (category, value) in CaseCategory::ALL.into_iter().zip(expected) {
            assert_eq!(category_form(category), [("sPatType", value)]);
        }
    }

    #[test]
    fn form_body_is_url_encoded() {
        let request = reqwest::Client::new()
            .post("http://localhost/Mapa.aspx")
            .form(&category_form(CaseCategory::Sospechosos))
            .build()
            .unwrap();
        let body = request.body().and_then(reqwest::Body::as_bytes).unwrap();
        assert_eq!(body, b"sPatType=Sospechosos");
    }
}
