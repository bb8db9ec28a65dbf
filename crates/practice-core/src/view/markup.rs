//! Markup for the display strategies that produce a page body.

use super::escape::{escape_html, escape_js};
use super::{EmbedKind, WindowTarget};

/// Template for the "click to open" message; `{link}` is replaced by the anchor.
pub const CLICK_TO_OPEN: &str = "Click {link} link to open resource.";

/// Notice shown when the stored URL cannot be displayed.
pub const INVALID_STORED_NOTICE: &str = "Cannot display this resource, Practice is invalid.";

/// Window features for popups: fixed size, no toolbar/location/menu bar,
/// scrollable and resizable.
pub fn popup_features(width: u32, height: u32) -> String {
    format!(
        "width={width},height={height},toolbar=no,location=no,menubar=no,copyhistory=no,\
         status=no,directories=no,scrollbars=yes,resizable=yes"
    )
}

/// `onclick` attribute value opening `url` (already HTML-escaped) in `window`.
pub fn window_onclick(url: &str, window: WindowTarget) -> Option<String> {
    match window {
        WindowTarget::SameWindow => None,
        WindowTarget::NewWindow => Some("this.target='_blank';".to_string()),
        WindowTarget::Popup { width, height } => Some(format!(
            "window.open('{}', '', '{}'); return false;",
            escape_js(url),
            popup_features(width, height)
        )),
    }
}

/// Message with a clickable link to `url` (already HTML-escaped).
pub fn click_to_open(url: &str, onclick: Option<&str>) -> String {
    let extra = onclick
        .map(|js| format!(" onclick=\"{}\"", js.replace('"', "&quot;")))
        .unwrap_or_default();
    let link = format!("<a href=\"{url}\"{extra}>{url}</a>");
    CLICK_TO_OPEN.replace("{link}", &link)
}

/// Body of the click-to-open page.
pub fn workaround_markup(url: &str, window: WindowTarget) -> String {
    let onclick = window_onclick(url, window);
    format!(
        "<div class=\"practiceworkaround\">{}</div>",
        click_to_open(url, onclick.as_deref())
    )
}

/// Inline markup embedding `url` (already HTML-escaped).
pub fn embed_markup(kind: EmbedKind, url: &str, title: &str, mimetype: &str) -> String {
    let title = escape_html(title);
    match kind {
        EmbedKind::Image => format!(
            "<div class=\"resourcecontent resourceimg\">\
             <img title=\"{title}\" class=\"resourceimage\" src=\"{url}\" alt=\"\" /></div>"
        ),
        EmbedKind::Media => {
            let tag = if mimetype.starts_with("audio/") {
                "audio"
            } else {
                "video"
            };
            format!(
                "<div class=\"resourcecontent resourcemedia\">\
                 <{tag} controls=\"true\" title=\"{title}\" src=\"{url}\">{}</{tag}></div>",
                click_to_open(url, None)
            )
        }
        EmbedKind::General => format!(
            "<div class=\"resourcecontent resourcegeneral\">\
             <object id=\"resourceobject\" data=\"{url}\" type=\"{mimetype}\" width=\"800\" height=\"600\">\
             <param name=\"src\" value=\"{url}\" />{}</object></div>",
            click_to_open(url, None)
        ),
    }
}

/// Labels used in the frameset document.
#[derive(Debug, Clone)]
pub struct FramesetLabels<'a> {
    /// Document title, e.g. `"PHY101: Pendulum lab"`.
    pub title: &'a str,
    /// Title of the navigation frame (the module name).
    pub nav_title: &'a str,
    /// Title of the content frame (the practice name).
    pub content_title: &'a str,
    /// Text direction, `ltr` or `rtl`.
    pub dir: &'a str,
}

/// XHTML frameset with a navigation frame on top and the resource below.
///
/// `nav_url` and `content_url` must already be HTML-escaped.
pub fn frameset_markup(
    labels: &FramesetLabels<'_>,
    nav_url: &str,
    content_url: &str,
    top_height: u32,
) -> String {
    format!(
        r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Frameset//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-frameset.dtd">
<html dir="{dir}">
  <head>
    <meta http-equiv="content-type" content="text/html; charset=utf-8" />
    <title>{title}</title>
  </head>
  <frameset rows="{top_height},*">
    <frame src="{nav_url}" title="{nav_title}"/>
    <frame src="{content_url}" title="{content_title}"/>
  </frameset>
</html>
"#,
        dir = escape_html(labels.dir),
        title = escape_html(labels.title),
        nav_title = escape_html(labels.nav_title),
        content_title = escape_html(labels.content_title),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popup_feature_string() {
        assert_eq!(
            popup_features(620, 450),
            "width=620,height=450,toolbar=no,location=no,menubar=no,copyhistory=no,\
             status=no,directories=no,scrollbars=yes,resizable=yes"
        );
    }

    #[test]
    fn workaround_popup_link() {
        let html = workaround_markup(
            "http://example.com/?a=1&amp;b=2",
            WindowTarget::Popup {
                width: 700,
                height: 500,
            },
        );
        assert!(html.starts_with("<div class=\"practiceworkaround\">Click <a href="));
        assert!(html.contains("window.open('http://example.com/?a=1&amp;b=2', '', 'width=700,height=500,"));
        assert!(html.ends_with("link to open resource.</div>"));
    }

    #[test]
    fn workaround_new_window_and_same_window() {
        let html = workaround_markup("http://example.com/", WindowTarget::NewWindow);
        assert!(html.contains("onclick=\"this.target='_blank';\""));
        let html = workaround_markup("http://example.com/", WindowTarget::SameWindow);
        assert!(!html.contains("onclick"));
        assert!(html.contains("<a href=\"http://example.com/\">http://example.com/</a>"));
    }

    #[test]
    fn embed_kinds() {
        let img = embed_markup(EmbedKind::Image, "http://x/a.png", "Chart <1>", "image/png");
        assert!(img.contains("<img title=\"Chart &lt;1&gt;\""));
        let audio = embed_markup(EmbedKind::Media, "http://x/a.mp3", "Talk", "audio/mp3");
        assert!(audio.contains("<audio controls=\"true\""));
        let video = embed_markup(EmbedKind::Media, "http://x/a.mp4", "Clip", "video/mp4");
        assert!(video.contains("</video>"));
        let general = embed_markup(EmbedKind::General, "http://x/a.svg", "S", "image/svg+xml");
        assert!(general.contains("type=\"image/svg+xml\""));
    }

    #[test]
    fn frameset_document() {
        let labels = FramesetLabels {
            title: "PHY101: Pendulum",
            nav_title: "Practice",
            content_title: "Pendulum & co",
            dir: "ltr",
        };
        let html = frameset_markup(
            &labels,
            "http://lms/mod/practice/view.php?id=7&amp;frameset=top",
            "http://example.com/",
            130,
        );
        assert!(html.contains("<frameset rows=\"130,*\">"));
        assert!(html.contains("<frame src=\"http://lms/mod/practice/view.php?id=7&amp;frameset=top\" title=\"Practice\"/>"));
        assert!(html.contains("title=\"Pendulum &amp; co\""));
        assert!(html.contains("<title>PHY101: Pendulum</title>"));
    }
}
