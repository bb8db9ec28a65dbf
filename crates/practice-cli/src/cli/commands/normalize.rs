//! Normalize command: show how a submitted URL would be stored.

use practice_core::url_model::normalize_submitted_url;

pub fn run_normalize(url: &str) {
    println!("{}", normalize_submitted_url(url));
}
