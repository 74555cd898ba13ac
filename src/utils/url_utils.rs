use crate::errors::AcquisitionError;

/// Adds an `https://` scheme to bare hosts and rejects empty input.
pub fn normalize_url(raw: &str) -> Result<String, AcquisitionError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.contains(char::is_whitespace) {
        return Err(AcquisitionError::InvalidUrl(raw.to_string()));
    }

    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_string())
    } else if trimmed.contains("://") {
        Err(AcquisitionError::InvalidUrl(raw.to_string()))
    } else {
        Ok(format!("https://{}", trimmed))
    }
}

/// Host portion of a url, without scheme, port or path.
pub fn host_of(url: &str) -> &str {
    let without_scheme = url.split_once("://").map(|(_, rest)| rest).unwrap_or(url);
    let host_and_port = without_scheme
        .split(|c| c == '/' || c == '?' || c == '#')
        .next()
        .unwrap_or(without_scheme);
    host_and_port.split(':').next().unwrap_or(host_and_port)
}

pub fn is_https(url: &str) -> bool {
    url.trim_start().to_ascii_lowercase().starts_with("https://")
}
