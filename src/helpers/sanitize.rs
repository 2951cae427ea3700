use url::Url;

/// Query parameters that carry secrets and must never reach the log
const SECRET_PARAMS: &[&str] = &["p", "t", "s"];

/// Safely truncate a UTF-8 string to a maximum number of characters
///
/// This function ensures that the truncation happens at character boundaries,
/// not byte boundaries, preventing panics when dealing with multi-byte UTF-8 characters.
///
/// # Example
/// ```
/// use subsonic_plugin::helpers::sanitize::safe_truncate;
/// let truncated = safe_truncate("Hello, 世界!", 8);
/// assert_eq!(truncated, "Hello, 世");
/// ```
pub fn safe_truncate(input: &str, max_chars: usize) -> &str {
    if input.len() <= max_chars {
        input
    } else {
        match input.char_indices().nth(max_chars) {
            Some((byte_index, _)) => &input[..byte_index],
            None => input,
        }
    }
}

/// Replace credential query parameters of a request URL with `***`
///
/// Used whenever a Subsonic URL is written to the log. Strings that do not
/// parse as URLs are returned unchanged.
pub fn redact_credentials(url: &str) -> String {
    let mut parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(_) => return url.to_string(),
    };

    if parsed.query().is_none() {
        return url.to_string();
    }

    let pairs: Vec<(String, String)> = parsed
        .query_pairs()
        .map(|(k, v)| {
            if SECRET_PARAMS.contains(&k.as_ref()) {
                (k.into_owned(), "***".to_string())
            } else {
                (k.into_owned(), v.into_owned())
            }
        })
        .collect();

    parsed.query_pairs_mut().clear().extend_pairs(pairs);
    parsed.to_string()
}
