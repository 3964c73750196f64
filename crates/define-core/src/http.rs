use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;

use crate::source::SourceError;

pub const JSON_MIME_TYPE: &str = "application/json";

/// Upper bound for a single upstream request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!("define/", env!("CARGO_PKG_VERSION"));

/// HTTP client shared by every source
pub fn client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()
}

/// Sanity check an upstream response before parsing its body
///
/// An empty `acceptable_status_codes` means only `200 OK` is accepted.
pub fn validate_http_response(
    response: &reqwest::Response,
    acceptable_mime_types: &[&str],
    acceptable_status_codes: &[StatusCode],
) -> Result<(), SourceError> {
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());

    validate_response_parts(
        response.status(),
        content_type,
        acceptable_mime_types,
        acceptable_status_codes,
    )
}

fn validate_response_parts(
    status: StatusCode,
    content_type: Option<&str>,
    acceptable_mime_types: &[&str],
    acceptable_status_codes: &[StatusCode],
) -> Result<(), SourceError> {
    let status_ok = if acceptable_status_codes.is_empty() {
        status == StatusCode::OK
    } else {
        acceptable_status_codes.contains(&status)
    };

    if !status_ok {
        tracing::debug!("rejecting response with status {}", status);
        return Err(SourceError::UnexpectedStatus(status.as_u16()));
    }

    let content_type = content_type.unwrap_or_default();
    // Drop parameters such as "; charset=utf-8"
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim();

    if !acceptable_mime_types
        .iter()
        .any(|mime| mime.eq_ignore_ascii_case(essence))
    {
        return Err(SourceError::UnexpectedContentType(content_type.to_string()));
    }

    Ok(())
}
