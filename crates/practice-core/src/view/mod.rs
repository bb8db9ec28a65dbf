//! View planning: what a viewer gets for a practice instance.
//!
//! Resolves the definition and picks one rendering strategy (redirect,
//! embed, frameset, or a click-to-open page). Page chrome is left to the host
//! application; [`markup`] produces the bodies that depend on the resolved URL.

mod escape;
pub mod markup;

pub use escape::{escape_html, escape_js, strip_tags};

use crate::config::PracticeConfig;
use crate::display::DisplayMode;
use crate::resolver::{is_embeddable_mimetype, resolve_url, ResourceDefinition};
use crate::url_model::{guess_url_mimetype, unescape_ampersands};
use crate::variables::VariableContext;

use self::markup::{popup_features, INVALID_STORED_NOTICE};

/// Per-request flags of a view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewRequest {
    /// Course-module id of the instance (used for navigation links).
    pub cmid: i64,
    /// Viewer explicitly asked to be redirected (course page link, popup).
    pub redirect: bool,
    /// Request came straight from saving the edit form.
    pub from_editor: bool,
}

/// How embedded content is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedKind {
    Image,
    /// Audio or video playable by the media player.
    Media,
    /// Anything else, in an enlarged `<object>`.
    General,
}

impl EmbedKind {
    pub fn for_mimetype(mimetype: &str) -> Self {
        match mimetype {
            "image/gif" | "image/jpeg" | "image/png" => EmbedKind::Image,
            m if m.starts_with("audio/") || m.starts_with("video/") => EmbedKind::Media,
            m if is_embeddable_mimetype(m) && m != "image/svg+xml" => EmbedKind::Media,
            _ => EmbedKind::General,
        }
    }
}

/// Window a click-to-open link targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowTarget {
    SameWindow,
    NewWindow,
    Popup { width: u32, height: u32 },
}

/// Rendering decision for one view.
///
/// URLs are HTML-escaped (`&amp;`) except in [`ViewPlan::Redirect`], which
/// carries the raw URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewPlan {
    /// Stored URL is empty or a bare `http://`.
    InvalidStored { notice: &'static str },
    /// Send the viewer straight to the resource.
    Redirect { url: String },
    Embed {
        kind: EmbedKind,
        url: String,
        mimetype: &'static str,
        print_intro: bool,
    },
    /// Navigation frame on top, resource below.
    Frameset {
        nav_url: String,
        content_url: String,
        top_height: u32,
    },
    /// Page with a "click to open" link.
    Workaround { url: String, window: WindowTarget },
}

/// Decides how `def` is shown for this request.
pub fn plan_view(
    def: &ResourceDefinition,
    ctx: &VariableContext,
    config: &PracticeConfig,
    request: ViewRequest,
) -> ViewPlan {
    if !def.has_usable_url() {
        tracing::warn!(practice = def.id, "stored practice url is invalid");
        return ViewPlan::InvalidStored {
            notice: INVALID_STORED_NOTICE,
        };
    }

    let resolved = resolve_url(def, ctx, config.site_root());

    // Open links always redirect, except right after saving the form where
    // leaving the site would be confusing.
    let redirect =
        request.redirect || (resolved.display == DisplayMode::Open && !request.from_editor);
    if redirect {
        return ViewPlan::Redirect {
            url: unescape_ampersands(&resolved.url),
        };
    }

    match resolved.display {
        DisplayMode::Embed => {
            let mimetype = guess_url_mimetype(&def.external_url);
            ViewPlan::Embed {
                kind: EmbedKind::for_mimetype(mimetype),
                url: resolved.url,
                mimetype,
                print_intro: def.display_options.print_intro(),
            }
        }
        DisplayMode::Frame => ViewPlan::Frameset {
            nav_url: frameset_nav_url(config.site_root(), request.cmid),
            content_url: resolved.url,
            top_height: config.frame_size,
        },
        DisplayMode::Popup => {
            let (width, height) = def.display_options.popup_size();
            ViewPlan::Workaround {
                url: resolved.url,
                window: WindowTarget::Popup { width, height },
            }
        }
        DisplayMode::NewWindow => ViewPlan::Workaround {
            url: resolved.url,
            window: WindowTarget::NewWindow,
        },
        _ => ViewPlan::Workaround {
            url: resolved.url,
            window: WindowTarget::SameWindow,
        },
    }
}

/// URL of the navigation (top) frame, HTML-escaped.
pub fn frameset_nav_url(site_root: &str, cmid: i64) -> String {
    format!(
        "{}/mod/practice/view.php?id={cmid}&amp;frameset=top",
        site_root.trim_end_matches('/')
    )
}

/// `onclick` for the course-page link of popup and new-window instances.
///
/// The link goes through the view page with `redirect=1` so views are still
/// tracked. Other display modes use a plain link (`None`).
pub fn course_listing_onclick(
    def: &ResourceDefinition,
    cmid: i64,
    config: &PracticeConfig,
) -> Option<String> {
    let view_url = format!(
        "{}/mod/practice/view.php?id={cmid}&amp;redirect=1",
        config.site_root()
    );
    match crate::resolver::final_display_mode(def, config.site_root()) {
        DisplayMode::Popup => {
            let (width, height) = def.display_options.popup_size();
            Some(format!(
                "window.open('{view_url}', '', '{}'); return false;",
                popup_features(width, height)
            ))
        }
        DisplayMode::NewWindow => Some(format!("window.open('{view_url}'); return false;")),
        _ => None,
    }
}

/// File-type icon for the course page, or `None` for the module icon.
///
/// Site roots, directory indexes, web pages and unknown types use the module
/// icon.
pub fn guess_icon(url: &str) -> Option<&'static str> {
    if url.matches('/').count() < 3 || url.ends_with('/') {
        return None;
    }
    let icon = match guess_url_mimetype(url) {
        m if m.starts_with("image/") => "f/image",
        m if m.starts_with("audio/") => "f/audio",
        m if m.starts_with("video/") => "f/video",
        "application/pdf" => "f/pdf",
        "application/zip" | "application/x-tar" | "application/g-zip" => "f/archive",
        "text/plain" | "text/csv" | "text/rtf" | "application/xml" => "f/text",
        "application/msword"
        | "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        | "application/vnd.oasis.opendocument.text" => "f/document",
        "application/vnd.ms-excel"
        | "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet" => "f/spreadsheet",
        "application/vnd.ms-powerpoint"
        | "application/vnd.openxmlformats-officedocument.presentationml.presentation" => {
            "f/powerpoint"
        }
        "application/x-shockwave-flash" => "f/flash",
        _ => return None,
    };
    Some(icon)
}

/// Whether the description is shown below the content.
///
/// Needs the print-intro option (or `ignore_settings`) and a description with
/// visible text.
pub fn should_print_intro(def: &ResourceDefinition, ignore_settings: bool) -> bool {
    (ignore_settings || def.display_options.print_intro())
        && !strip_tags(&def.intro).trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::DisplayOptions;

    fn config() -> PracticeConfig {
        PracticeConfig {
            site_root: "http://lms.example.edu/".to_string(),
            ..PracticeConfig::default()
        }
    }

    fn ctx() -> VariableContext {
        VariableContext::new().with("courseid", 3).with("lang", "en")
    }

    fn request() -> ViewRequest {
        ViewRequest {
            cmid: 41,
            ..ViewRequest::default()
        }
    }

    #[test]
    fn invalid_stored_urls() {
        for url in ["", "   ", "http://", " http:// "] {
            let def = ResourceDefinition::new(url, DisplayMode::Open);
            assert_eq!(
                plan_view(&def, &ctx(), &config(), request()),
                ViewPlan::InvalidStored {
                    notice: INVALID_STORED_NOTICE
                }
            );
        }
    }

    #[test]
    fn open_redirects_with_raw_url() {
        let def = ResourceDefinition::new("http://example.com/page", DisplayMode::Open)
            .with_parameter("c", "courseid")
            .with_parameter("l", "lang");
        assert_eq!(
            plan_view(&def, &ctx(), &config(), request()),
            ViewPlan::Redirect {
                url: "http://example.com/page?c=3&l=en".to_string()
            }
        );
    }

    #[test]
    fn open_from_editor_shows_workaround() {
        let def = ResourceDefinition::new("http://example.com/page", DisplayMode::Open);
        let req = ViewRequest {
            from_editor: true,
            ..request()
        };
        assert_eq!(
            plan_view(&def, &ctx(), &config(), req),
            ViewPlan::Workaround {
                url: "http://example.com/page".to_string(),
                window: WindowTarget::SameWindow
            }
        );
    }

    #[test]
    fn explicit_redirect_request() {
        let def = ResourceDefinition::new("http://example.com/a.png", DisplayMode::Embed);
        let req = ViewRequest {
            redirect: true,
            ..request()
        };
        assert!(matches!(
            plan_view(&def, &ctx(), &config(), req),
            ViewPlan::Redirect { .. }
        ));
    }

    #[test]
    fn embed_image() {
        let mut def = ResourceDefinition::new("http://example.com/a.png", DisplayMode::Auto);
        def.display_options.print_intro = Some(true);
        match plan_view(&def, &ctx(), &config(), request()) {
            ViewPlan::Embed {
                kind,
                url,
                mimetype,
                print_intro,
            } => {
                assert_eq!(kind, EmbedKind::Image);
                assert_eq!(url, "http://example.com/a.png");
                assert_eq!(mimetype, "image/png");
                assert!(print_intro);
            }
            other => panic!("expected Embed, got {other:?}"),
        }
    }

    #[test]
    fn frameset_uses_config_frame_size() {
        let def = ResourceDefinition::new("http://example.com/", DisplayMode::Frame);
        let cfg = PracticeConfig {
            frame_size: 90,
            ..config()
        };
        assert_eq!(
            plan_view(&def, &ctx(), &cfg, request()),
            ViewPlan::Frameset {
                nav_url: "http://lms.example.edu/mod/practice/view.php?id=41&amp;frameset=top"
                    .to_string(),
                content_url: "http://example.com/".to_string(),
                top_height: 90,
            }
        );
    }

    #[test]
    fn popup_and_new_window() {
        let mut def = ResourceDefinition::new("http://example.com/", DisplayMode::Popup);
        assert_eq!(
            plan_view(&def, &ctx(), &config(), request()),
            ViewPlan::Workaround {
                url: "http://example.com/".to_string(),
                window: WindowTarget::Popup {
                    width: 620,
                    height: 450
                }
            }
        );
        def.display_options = DisplayOptions {
            popup_width: Some(1024),
            popup_height: Some(768),
            print_intro: None,
        };
        assert!(matches!(
            plan_view(&def, &ctx(), &config(), request()),
            ViewPlan::Workaround {
                window: WindowTarget::Popup {
                    width: 1024,
                    height: 768
                },
                ..
            }
        ));

        def.display = DisplayMode::NewWindow;
        assert!(matches!(
            plan_view(&def, &ctx(), &config(), request()),
            ViewPlan::Workaround {
                window: WindowTarget::NewWindow,
                ..
            }
        ));
    }

    #[test]
    fn download_shows_workaround() {
        let def = ResourceDefinition::new("http://example.com/notes.pdf", DisplayMode::Auto);
        assert_eq!(
            plan_view(&def, &ctx(), &config(), request()),
            ViewPlan::Workaround {
                url: "http://example.com/notes.pdf".to_string(),
                window: WindowTarget::SameWindow
            }
        );
    }

    #[test]
    fn embed_kind_for_mimetypes() {
        assert_eq!(EmbedKind::for_mimetype("image/jpeg"), EmbedKind::Image);
        assert_eq!(EmbedKind::for_mimetype("video/mp4"), EmbedKind::Media);
        assert_eq!(EmbedKind::for_mimetype("application/x-shockwave-flash"), EmbedKind::Media);
        assert_eq!(EmbedKind::for_mimetype("image/svg+xml"), EmbedKind::General);
        assert_eq!(EmbedKind::for_mimetype("document/unknown"), EmbedKind::General);
    }

    #[test]
    fn course_listing_links() {
        let cfg = config();
        let popup = ResourceDefinition::new("http://example.com/", DisplayMode::Popup);
        let onclick = course_listing_onclick(&popup, 9, &cfg).unwrap();
        assert!(onclick.starts_with(
            "window.open('http://lms.example.edu/mod/practice/view.php?id=9&amp;redirect=1', '', 'width=620,height=450,"
        ));
        let new = ResourceDefinition::new("http://example.com/", DisplayMode::NewWindow);
        assert_eq!(
            course_listing_onclick(&new, 9, &cfg).as_deref(),
            Some("window.open('http://lms.example.edu/mod/practice/view.php?id=9&amp;redirect=1'); return false;")
        );
        let open = ResourceDefinition::new("http://example.com/", DisplayMode::Open);
        assert!(course_listing_onclick(&open, 9, &cfg).is_none());
    }

    #[test]
    fn intro_printing() {
        let mut def = ResourceDefinition::new("http://example.com/", DisplayMode::Frame);
        def.intro = "<p>Read this first</p>".to_string();
        assert!(!should_print_intro(&def, false));
        assert!(should_print_intro(&def, true));
        def.display_options.print_intro = Some(true);
        assert!(should_print_intro(&def, false));
        def.intro = "<p> </p>".to_string();
        assert!(!should_print_intro(&def, true));
    }

    #[test]
    fn icons_for_file_links() {
        assert_eq!(guess_icon("http://example.com/notes.pdf"), Some("f/pdf"));
        assert_eq!(guess_icon("http://example.com/a/chart.PNG"), Some("f/image"));
        assert_eq!(guess_icon("http://example.com/src.zip#top"), Some("f/archive"));
        assert_eq!(guess_icon("http://example.com"), None);
        assert_eq!(guess_icon("http://example.com/docs/"), None);
        assert_eq!(guess_icon("http://example.com/page.html"), None);
        assert_eq!(guess_icon("http://example.com/view.php?id=3"), None);
        assert_eq!(guess_icon("http://example.com/thing.xyz"), None);
    }
}
