//! Data URL helpers.

/// Split a `data:<mime>;base64,<payload>` string into its MIME type and
/// base64 payload. Returns `None` when the string is not a base64 data URL.
pub fn split_data_url(data_url: &str) -> Option<(&str, &str)> {
    let rest = data_url.strip_prefix("data:")?;
    let (mime, payload) = rest.split_once(";base64,")?;
    Some((mime, payload))
}

/// Approximate decoded size of a base64 data URL payload, in bytes.
///
/// Uses the `(length - comma - 1) * 0.75` estimate so that the size cap
/// matches the historical enforcement exactly, padding included.
pub fn base64_payload_size(data_url: &str) -> u64 {
    match data_url.find(',') {
        Some(comma) => ((data_url.len() - comma - 1) as f64 * 0.75) as u64,
        None => 0,
    }
}
