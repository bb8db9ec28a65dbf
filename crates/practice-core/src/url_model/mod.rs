//! URL modeling for practice resources.
//!
//! Normalizes instructor-submitted URLs, performs the loose plausibility check
//! used at edit time, percent-encodes stored URLs for output and guesses MIME
//! types from URL paths.

mod encode;
mod entities;
mod mimetype;
mod normalize;
mod validate;

pub use encode::{encode_component, encode_stored_url, escape_ampersands, unescape_ampersands};
pub use entities::decode_html_entities;
pub use mimetype::{guess_url_mimetype, mimetype_for_extension, UNKNOWN_MIMETYPE};
pub use normalize::normalize_submitted_url;
pub use validate::{has_absolute_prefix, is_acceptable_submitted_url, is_plausible_url};
