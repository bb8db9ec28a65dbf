//! Resource URL resolution.
//!
//! Turns a stored [`ResourceDefinition`] plus an explicit [`VariableContext`]
//! into an HTML-ready URL and the display mode to use. Pure: no state is kept
//! between calls and nothing here can fail. Missing variables drop their
//! parameter, odd schemes fall through to narrow escaping, and unusable stored
//! URLs are left to the view layer.

mod definition;
mod display_type;

pub use definition::{dedupe_parameters, PracticeId, ResourceDefinition, UrlParameter};
pub use display_type::{final_display_mode, is_embeddable_mimetype, is_same_site};

use crate::display::DisplayMode;
use crate::url_model::{
    decode_html_entities, encode_component, encode_stored_url, escape_ampersands,
};
use crate::variables::VariableContext;

/// Result of resolving a definition for one view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedUrl {
    /// Fully substituted URL with every `&` written as `&amp;`.
    pub url: String,
    /// Display mode after resolving `Auto`.
    pub display: DisplayMode,
}

impl ResolvedUrl {
    /// The URL as a raw URI (entity escaping reversed), e.g. for redirects.
    pub fn raw_url(&self) -> String {
        crate::url_model::unescape_ampersands(&self.url)
    }
}

/// Builds the full URL of `def` with all bound parameters appended.
///
/// The result has `&` encoded as `&amp;` and is meant for HTML markup.
/// No XSS protection beyond that is applied.
pub fn full_url(def: &ResourceDefinition, ctx: &VariableContext) -> String {
    // Stored values may still carry entities.
    let decoded = decode_html_entities(&def.external_url);
    let mut url = encode_stored_url(&decoded);

    let pairs: Vec<String> = dedupe_parameters(def.parameters.iter().cloned())
        .iter()
        .filter_map(|param| match ctx.get(&param.variable) {
            Some(value) => Some(format!(
                "{}={}",
                encode_component(&param.name),
                encode_component(value)
            )),
            None => {
                tracing::debug!(
                    parameter = %param.name,
                    variable = %param.variable,
                    "variable not available, parameter dropped"
                );
                None
            }
        })
        .collect();

    if !pairs.is_empty() {
        if starts_with_ignore_case(&url, "teamspeak://") {
            // Historical query syntax for TeamSpeak links.
            url.push('?');
            url.push_str(&pairs.join("?"));
        } else {
            url.push(if url.contains('?') { '&' } else { '?' });
            url.push_str(&pairs.join("&"));
        }
    }

    escape_ampersands(&url)
}

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.len() >= prefix.len()
        && s.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

/// Resolves `def` for display: full URL plus effective display mode.
///
/// `site_root` identifies local pages when the definition uses `Auto`.
pub fn resolve_url(def: &ResourceDefinition, ctx: &VariableContext, site_root: &str) -> ResolvedUrl {
    let mode = final_display_mode(def, site_root);
    let url = full_url(def, ctx);
    tracing::debug!(practice = def.id, display = %mode, "resolved practice url");
    ResolvedUrl { url, display: mode }
}
