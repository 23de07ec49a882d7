//! Image reference resolution.
//!
//! Item images live in an external asset store. The catalog stores only an
//! opaque reference; when it is a relative path and a media base URL is
//! configured, the two are joined for the client.

/// Resolve an item's stored image reference into what the client receives.
///
/// - `None` and blank references (a cleared image field stores `""`) become `None`.
/// - Absolute URLs (`http://`, `https://`) and protocol-relative `//host/...`
///   references pass through unchanged.
/// - Relative references are joined onto `base` with exactly one `/`.
/// - Without a `base`, the reference passes through unchanged.
pub fn resolve_image_url(reference: Option<&str>, base: Option<&str>) -> Option<String> {
    let reference = reference.filter(|r| !r.trim().is_empty())?;

    if is_absolute(reference) {
        return Some(reference.to_string());
    }

    match base {
        Some(base) if !base.is_empty() => Some(format!(
            "{}/{}",
            base.trim_end_matches('/'),
            reference.trim_start_matches('/')
        )),
        _ => Some(reference.to_string()),
    }
}

fn is_absolute(reference: &str) -> bool {
    reference.starts_with("http://")
        || reference.starts_with("https://")
        || reference.starts_with("//")
}
