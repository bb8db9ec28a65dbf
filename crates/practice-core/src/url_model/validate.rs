//! Loose URL plausibility check used when an instructor saves a resource.
//!
//! This only looks for severely malformed URLs; it is not RFC 3986 validation.
//! False negatives would block legitimate links, so everything outside the
//! http/https/ftp family gets an even looser shape check.

use regex::Regex;

use super::normalize::has_scheme_prefix;
use std::sync::LazyLock;

static ABSOLUTE_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(/|https?:|ftp:)").unwrap());

static STRICT_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^[a-z]+://([^:@\s]+:[^@\s]+@)?[a-z0-9_.\-]+(:[0-9]+)?(/[^#]*)?(#.*)?$",
    )
    .unwrap()
});

static LOOSE_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-z]+://.+$").unwrap());

/// True if `url` starts with `/`, `http:`, `https:` or `ftp:` (any case).
pub fn has_absolute_prefix(url: &str) -> bool {
    ABSOLUTE_PREFIX_RE.is_match(url)
}

/// Returns false only when `candidate` is definitely not a usable URL.
///
/// Rooted and http/https/ftp URLs must match the absolute-URL shape: scheme,
/// optional `user:pass@`, host of letters/digits/`_.-`, optional port, path and
/// fragment. Any other scheme only needs `scheme://` plus at least one character.
pub fn is_plausible_url(candidate: &str) -> bool {
    if has_absolute_prefix(candidate) {
        STRICT_URL_RE.is_match(candidate)
    } else {
        LOOSE_URL_RE.is_match(candidate)
    }
}

/// Edit-time check of a normalized submitted URL.
///
/// Rooted `/path` links and `letters:` URIs without `//` (`mailto:`,
/// `skype:`) are accepted as entered. Anything with `://` and the
/// http/https/ftp family must pass [`is_plausible_url`].
pub fn is_acceptable_submitted_url(url: &str) -> bool {
    let url = url.trim();
    if url.is_empty() {
        return false;
    }
    if url.starts_with('/') {
        return true;
    }
    if url.contains("://") || has_absolute_prefix(url) {
        return is_plausible_url(url);
    }
    has_scheme_prefix(url)
}
