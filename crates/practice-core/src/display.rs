//! Display modes and per-instance display options.
//!
//! Numeric codes match the LMS resource library so rows written by older
//! installs keep their meaning.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default popup window width in pixels.
pub const DEFAULT_POPUP_WIDTH: u32 = 620;
/// Default popup window height in pixels.
pub const DEFAULT_POPUP_HEIGHT: u32 = 450;
/// Default height of the navigation frame in frameset display.
pub const DEFAULT_FRAME_SIZE: u32 = 130;

/// How a resolved practice URL is presented to the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Pick the best mode from the URL's file type.
    #[default]
    Auto,
    Embed,
    Frame,
    #[serde(rename = "new")]
    NewWindow,
    Download,
    Open,
    Popup,
}

impl DisplayMode {
    /// Stored integer code.
    pub fn code(self) -> i64 {
        match self {
            DisplayMode::Auto => 0,
            DisplayMode::Embed => 1,
            DisplayMode::Frame => 2,
            DisplayMode::NewWindow => 3,
            DisplayMode::Download => 4,
            DisplayMode::Open => 5,
            DisplayMode::Popup => 6,
        }
    }

    /// Parse a stored integer code. Unknown codes yield `None`.
    pub fn from_code(code: i64) -> Option<Self> {
        Some(match code {
            0 => DisplayMode::Auto,
            1 => DisplayMode::Embed,
            2 => DisplayMode::Frame,
            3 => DisplayMode::NewWindow,
            4 => DisplayMode::Download,
            5 => DisplayMode::Open,
            6 => DisplayMode::Popup,
            _ => return None,
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DisplayMode::Auto => "auto",
            DisplayMode::Embed => "embed",
            DisplayMode::Frame => "frame",
            DisplayMode::NewWindow => "new",
            DisplayMode::Download => "download",
            DisplayMode::Open => "open",
            DisplayMode::Popup => "popup",
        }
    }

    /// Modes for which the "print intro" option is stored.
    pub fn keeps_print_intro(self) -> bool {
        matches!(
            self,
            DisplayMode::Auto | DisplayMode::Embed | DisplayMode::Frame
        )
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(DisplayMode::Auto),
            "embed" => Ok(DisplayMode::Embed),
            "frame" => Ok(DisplayMode::Frame),
            "new" | "newwindow" | "new-window" => Ok(DisplayMode::NewWindow),
            "download" => Ok(DisplayMode::Download),
            "open" => Ok(DisplayMode::Open),
            "popup" => Ok(DisplayMode::Popup),
            other => Err(format!("unknown display mode: {other}")),
        }
    }
}

/// Per-instance display options (persisted as JSON next to the definition).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popup_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popup_height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub print_intro: Option<bool>,
}

impl DisplayOptions {
    /// Popup size, falling back to 620x450 for missing or zero values.
    pub fn popup_size(&self) -> (u32, u32) {
        let width = self
            .popup_width
            .filter(|w| *w > 0)
            .unwrap_or(DEFAULT_POPUP_WIDTH);
        let height = self
            .popup_height
            .filter(|h| *h > 0)
            .unwrap_or(DEFAULT_POPUP_HEIGHT);
        (width, height)
    }

    pub fn print_intro(&self) -> bool {
        self.print_intro.unwrap_or(false)
    }

    /// Build the options stored for an instance with the given display mode:
    /// popup size only for popups, print-intro only for auto/embed/frame.
    pub fn for_mode(
        mode: DisplayMode,
        popup_width: u32,
        popup_height: u32,
        print_intro: bool,
    ) -> Self {
        let mut opts = DisplayOptions::default();
        if mode == DisplayMode::Popup {
            opts.popup_width = Some(popup_width);
            opts.popup_height = Some(popup_height);
        }
        if mode.keeps_print_intro() {
            opts.print_intro = Some(print_intro);
        }
        opts
    }
}
