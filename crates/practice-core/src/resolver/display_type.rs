//! Effective display mode for `Auto` definitions.

use crate::display::DisplayMode;
use crate::url_model::guess_url_mimetype;

use super::definition::ResourceDefinition;

/// Types known to misbehave when opened from an external link.
const DOWNLOAD_MIMETYPES: &[&str] = &[
    "application/zip",
    "application/x-tar",
    "application/g-zip",
    "application/pdf",
    "text/html",
];

const EMBED_MIMETYPES: &[&str] = &[
    "image/gif",
    "image/jpeg",
    "image/png",
    "image/svg+xml",
    "application/x-shockwave-flash",
    "video/x-flv",
    "video/x-ms-wm",
    "video/quicktime",
    "video/mpeg",
    "video/mp4",
    "audio/mp3",
    "audio/x-realaudio-plugin",
    "x-realaudio-plugin",
];

/// True for image/audio/video types that can be shown inline.
pub fn is_embeddable_mimetype(mimetype: &str) -> bool {
    EMBED_MIMETYPES.contains(&mimetype)
}

/// True if `url` lives under `site_root`.
///
/// Compares origin and path prefix when both parse, plain string prefix otherwise.
pub fn is_same_site(url: &str, site_root: &str) -> bool {
    let site_root = site_root.trim_end_matches('/');
    if site_root.is_empty() {
        return false;
    }
    match (url::Url::parse(url), url::Url::parse(site_root)) {
        (Ok(target), Ok(root)) => {
            target.origin() == root.origin()
                && target
                    .path()
                    .starts_with(root.path().trim_end_matches('/'))
        }
        _ => url.starts_with(site_root),
    }
}

/// Decides the display mode actually used for `def`.
///
/// Explicit modes are returned unchanged. For `Auto`, local site pages open
/// directly; otherwise the guessed MIME type picks download, embed or open.
pub fn final_display_mode(def: &ResourceDefinition, site_root: &str) -> DisplayMode {
    if def.display != DisplayMode::Auto {
        return def.display;
    }

    let url = def.external_url.as_str();
    if is_same_site(url, site_root) && !url.contains("file.php") && url.contains(".php") {
        // Most probably one of our own pages with navigation.
        return DisplayMode::Open;
    }

    let mimetype = guess_url_mimetype(url);
    if DOWNLOAD_MIMETYPES.contains(&mimetype) {
        return DisplayMode::Download;
    }
    if is_embeddable_mimetype(mimetype) {
        return DisplayMode::Embed;
    }

    // Let the browser deal with it.
    DisplayMode::Open
}
