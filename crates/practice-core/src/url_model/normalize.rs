//! Normalization of instructor-submitted URLs.

use super::entities::decode_html_entities;

/// True if `s` starts with `letters:` (ASCII letters only).
pub(crate) fn has_scheme_prefix(s: &str) -> bool {
    let letters = s.bytes().take_while(|b| b.is_ascii_alphabetic()).count();
    letters > 0 && s.as_bytes().get(letters) == Some(&b':')
}

/// Fixes the common problems in a submitted URL so the instructor sees the
/// corrected value next time they edit the resource.
///
/// - Trims surrounding whitespace
/// - Decodes HTML entities once (the stored value is the raw URI)
/// - Prepends `http://` when there is neither a `scheme:` prefix nor a leading `/`
///
/// Empty input is not rejected here; form validation handles that. No XSS
/// protection is applied.
pub fn normalize_submitted_url(raw: &str) -> String {
    let decoded = decode_html_entities(raw.trim());
    // Entities may decode to surrounding whitespace.
    let decoded = decoded.trim().to_string();

    if !has_scheme_prefix(&decoded) && !decoded.starts_with('/') {
        // Relative links are not allowed; `/path` links are.
        return format!("http://{decoded}");
    }
    decoded
}
