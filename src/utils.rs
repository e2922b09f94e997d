use crate::error::{AuditError, Result};
use url::Url;

/// Validates a user-supplied URL. Only absolute http(s) URLs are accepted.
pub fn parse_target_url(input: &str) -> Result<Url> {
    let input = input.trim();
    if input.is_empty() {
        return Err(AuditError::invalid_input("URL is required"));
    }

    let url = Url::parse(input).map_err(|e| {
        AuditError::invalid_input(format!(
            "Invalid URL '{}': {}. Include http:// or https://",
            input, e
        ))
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(AuditError::invalid_input(format!(
            "Unsupported URL scheme '{}': only http and https are allowed",
            scheme
        ))),
    }
}
