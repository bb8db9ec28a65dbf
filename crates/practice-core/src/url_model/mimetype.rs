//! MIME type guessing from URL paths.

use regex::Regex;
use std::sync::LazyLock;

/// MIME type reported for unknown extensions.
pub const UNKNOWN_MIMETYPE: &str = "document/unknown";

const HTML_MIMETYPE: &str = "text/html";

/// `.../pluginfile.php/x/y` style serving scripts hide the real file path.
static FILE_SERVING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*)/[a-z]*file\.php(\?file=)?(/[^&?#]*)").unwrap());

/// MIME type for a lowercase file extension.
pub fn mimetype_for_extension(ext: &str) -> &'static str {
    match ext {
        "gif" => "image/gif",
        "jpg" | "jpeg" | "jpe" => "image/jpeg",
        "png" => "image/png",
        "svg" | "svgz" => "image/svg+xml",
        "bmp" => "image/bmp",
        "tif" | "tiff" => "image/tiff",
        "swf" => "application/x-shockwave-flash",
        "flv" => "video/x-flv",
        "wm" => "video/x-ms-wm",
        "wmv" => "video/x-ms-wmv",
        "asf" => "video/x-ms-asf",
        "mov" | "qt" => "video/quicktime",
        "mpeg" | "mpg" | "mpe" => "video/mpeg",
        "mp4" | "m4v" | "f4v" => "video/mp4",
        "webm" => "video/webm",
        "avi" => "video/x-ms-wm",
        "mp3" => "audio/mp3",
        "ra" | "ram" | "rm" | "rv" => "audio/x-realaudio-plugin",
        "ogg" | "oga" => "audio/ogg",
        "wav" => "audio/wav",
        "zip" => "application/zip",
        "tar" => "application/x-tar",
        "gz" | "gzip" | "tgz" => "application/g-zip",
        "pdf" => "application/pdf",
        "htm" | "html" | "xhtml" | "shtml" => HTML_MIMETYPE,
        "txt" => "text/plain",
        "csv" => "text/csv",
        "xml" => "application/xml",
        "rtf" => "text/rtf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "xls" => "application/vnd.ms-excel",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "ppt" => "application/vnd.ms-powerpoint",
        "pptx" => "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        "odt" => "application/vnd.oasis.opendocument.text",
        _ => UNKNOWN_MIMETYPE,
    }
}

fn extension_of(path: &str) -> Option<String> {
    let name = path.rsplit('/').next().unwrap_or(path);
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Guesses the MIME type of the document a URL points to.
///
/// Scripts, directory indexes and bare host names are reported as
/// `text/html`; otherwise the extension of the query-less path decides.
pub fn guess_url_mimetype(url: &str) -> &'static str {
    let mut full = match FILE_SERVING_RE.captures(url) {
        Some(caps) => format!("{}{}", &caps[1], &caps[3]),
        None => url.to_string(),
    };
    if let Some(pos) = full.rfind('#') {
        full.truncate(pos);
    }

    if full.find(".php").is_some_and(|pos| pos > 0) {
        // No idea what a general script returns.
        return HTML_MIMETYPE;
    }
    if full.ends_with('/') {
        return HTML_MIMETYPE;
    }
    if full.contains("//") && full.matches('/').count() == 2 {
        // Just a host name.
        return HTML_MIMETYPE;
    }

    let path = full.split('?').next().unwrap_or_default();
    match extension_of(path) {
        Some(ext) => mimetype_for_extension(&ext),
        None => UNKNOWN_MIMETYPE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_extension() {
        assert_eq!(guess_url_mimetype("http://example.com/doc.pdf"), "application/pdf");
        assert_eq!(guess_url_mimetype("http://example.com/pic.PNG"), "image/png");
        assert_eq!(
            guess_url_mimetype("http://example.com/a/b/clip.mp4?t=10#start"),
            "video/mp4"
        );
        assert_eq!(guess_url_mimetype("http://example.com/archive.tar"), "application/x-tar");
    }

    #[test]
    fn pages_and_hosts_are_html() {
        assert_eq!(guess_url_mimetype("http://example.com"), "text/html");
        assert_eq!(guess_url_mimetype("http://example.com/samples/"), "text/html");
        assert_eq!(
            guess_url_mimetype("http://example.com/index.php?x=1"),
            "text/html"
        );
    }

    #[test]
    fn file_serving_script_is_skipped() {
        assert_eq!(
            guess_url_mimetype("http://lms.example.com/pluginfile.php/12/mod_resource/notes.pdf"),
            "application/pdf"
        );
        assert_eq!(
            guess_url_mimetype("http://lms.example.com/file.php?file=/3/photo.jpg"),
            "image/jpeg"
        );
    }

    #[test]
    fn unknown_or_missing_extension() {
        assert_eq!(guess_url_mimetype("http://example.com/readme"), UNKNOWN_MIMETYPE);
        assert_eq!(guess_url_mimetype("http://example.com/data.xyz"), UNKNOWN_MIMETYPE);
        assert_eq!(guess_url_mimetype("http://example.com/.hidden"), UNKNOWN_MIMETYPE);
    }
}
