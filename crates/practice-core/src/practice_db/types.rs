//! Types used by the practice store.

use crate::config::InstanceDefaults;
use crate::display::DisplayMode;
use crate::resolver::{PracticeId, UrlParameter};

/// Form data for creating or updating a practice instance.
#[derive(Debug, Clone)]
pub struct NewPractice {
    pub course: i64,
    pub name: String,
    pub intro: String,
    /// Free-text due date, e.g. `2026-11-02 18:00`.
    pub due_date: String,
    /// URL as submitted; normalized before storing.
    pub external_url: String,
    pub display: DisplayMode,
    pub popup_width: u32,
    pub popup_height: u32,
    pub print_intro: bool,
    /// Bindings as entered; pairs with an empty name or variable are skipped.
    pub parameters: Vec<UrlParameter>,
}

impl NewPractice {
    /// New instance form prefilled from the configured defaults.
    pub fn with_defaults(
        course: i64,
        name: impl Into<String>,
        external_url: impl Into<String>,
        defaults: &InstanceDefaults,
    ) -> Self {
        Self {
            course,
            name: name.into(),
            intro: String::new(),
            due_date: String::new(),
            external_url: external_url.into(),
            display: defaults.display,
            popup_width: defaults.popup_width,
            popup_height: defaults.popup_height,
            print_intro: defaults.print_intro,
            parameters: Vec::new(),
        }
    }
}

/// A student's score for one practice.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    pub username: String,
    /// Display name from the student directory; empty when unknown.
    pub full_name: String,
    pub practice_id: PracticeId,
    pub score: f64,
    pub time_modified: i64,
}

/// `first last`, or just the first name when there is no last name.
pub fn student_display_name(first_name: &str, last_name: &str) -> String {
    if last_name.is_empty() {
        first_name.to_string()
    } else {
        format!("{first_name} {last_name}")
    }
}
