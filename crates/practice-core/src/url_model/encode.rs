//! Output encoding for stored practice URLs.

use super::validate::has_absolute_prefix;

/// Characters left untouched when encoding an absolute or rooted URL.
fn is_allowed_url_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || ";/?:@=&$_.+!*(),-#%".contains(c)
}

/// RFC 3986 encoding of a single component (unreserved set kept).
pub fn encode_component(s: &str) -> String {
    urlencoding::encode(s).into_owned()
}

/// Encodes a decoded stored URL for output.
///
/// Rooted and http/https/ftp URLs get every character outside
/// `[A-Za-z0-9;/?:@=&$_.+!*(),-#%]` percent-encoded byte by byte; this does
/// not make every URL valid but fixes most UTF-8 problems. Anything else only
/// has `"`, `'`, space, `<` and `>` replaced.
pub fn encode_stored_url(url: &str) -> String {
    if has_absolute_prefix(url) {
        let mut out = String::with_capacity(url.len());
        let mut buf = [0u8; 4];
        for c in url.chars() {
            if is_allowed_url_char(c) {
                out.push(c);
            } else {
                out.push_str(&urlencoding::encode(c.encode_utf8(&mut buf)));
            }
        }
        out
    } else {
        url.replace('"', "%22")
            .replace('\'', "%27")
            .replace(' ', "%20")
            .replace('<', "%3C")
            .replace('>', "%3E")
    }
}

/// Replaces every `&` with `&amp;` for embedding in HTML attributes.
pub fn escape_ampersands(url: &str) -> String {
    url.replace('&', "&amp;")
}

/// Reverses [`escape_ampersands`] for callers that need the raw URI (redirects).
pub fn unescape_ampersands(url: &str) -> String {
    url.replace("&amp;", "&")
}
