//! Single-shot HTTP helper shared by every fetcher.
//!
//! Requests are sent exactly once. Any transport error or non-200 status
//! is returned to the caller, which aborts the run.

use crate::SourceError;

/// Maximum length of the response body preview included in errors.
const BODY_PREVIEW_LEN: usize = 500;

/// Sends `request` and returns the response body as a `String`.
///
/// # Errors
///
/// Returns [`SourceError::Http`] if the request or body read fails and
/// [`SourceError::Status`] if the server answers with anything but 200.
pub async fn send_text(request: reqwest::RequestBuilder) -> Result<String, SourceError> {
    let response = request.send().await?;

    let url = response.url().to_string();
    let status = response.status();
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    let text = response.text().await?;

    if status != reqwest::StatusCode::OK {
        let preview = body_preview(&text);
        log::error!(
            "Request failed\n  \
             url: {url}\n  \
             status: {status}\n  \
             content-type: {content_type:?}\n  \
             received: {} bytes\n  \
             body preview: {preview}",
            text.len(),
        );
        return Err(SourceError::Status {
            url,
            status: status.as_u16(),
            body: preview,
        });
    }

    log::debug!("{url}: {} bytes ({content_type:?})", text.len());
    Ok(text)
}

/// Truncates `text` to [`BODY_PREVIEW_LEN`] bytes on a char boundary.
fn body_preview(text: &str) -> String {
    if text.len() <= BODY_PREVIEW_LEN {
        return text.to_owned();
    }
    let mut end = BODY_PREVIEW_LEN;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_bodies_are_kept() {
        assert_eq!(body_preview("Error: boom"), "Error: boom");
    }

    #[test]
    fn long_bodies_are_truncated_on_char_boundary() {
        let text = "é".repeat(BODY_PREVIEW_LEN);
        let preview = body_preview(&text);
        assert!(preview.ends_with("..."));
        assert!(preview.len() <= BODY_PREVIEW_LEN + 3);
    }
}
