use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::display::{
    DisplayMode, DEFAULT_FRAME_SIZE, DEFAULT_POPUP_HEIGHT, DEFAULT_POPUP_WIDTH,
};

/// Defaults offered when a new practice instance is created (`[defaults]` in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstanceDefaults {
    /// Show the practice description below the content.
    pub print_intro: bool,
    /// Display mode preselected for new instances.
    pub display: DisplayMode,
    /// Default popup width in pixels.
    pub popup_width: u32,
    /// Default popup height in pixels.
    pub popup_height: u32,
}

impl Default for InstanceDefaults {
    fn default() -> Self {
        Self {
            print_intro: true,
            display: DisplayMode::Auto,
            popup_width: DEFAULT_POPUP_WIDTH,
            popup_height: DEFAULT_POPUP_HEIGHT,
        }
    }
}

/// Global configuration loaded from `~/.config/practice/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PracticeConfig {
    /// Root URL of the site; links starting with it are treated as local pages.
    pub site_root: String,
    /// Height in pixels of the navigation frame in frameset display.
    pub frame_size: u32,
    /// Secret phrase for the `encryptedcode` variable; empty disables it.
    #[serde(default)]
    pub secret_phrase: String,
    /// Offer localized role names as parameter variables.
    #[serde(default)]
    pub roles_in_params: bool,
    /// Display modes instructors may choose from.
    #[serde(default = "default_display_options")]
    pub display_options: Vec<DisplayMode>,
    #[serde(default)]
    pub defaults: InstanceDefaults,
}

fn default_display_options() -> Vec<DisplayMode> {
    vec![
        DisplayMode::Auto,
        DisplayMode::Embed,
        DisplayMode::Frame,
        DisplayMode::Open,
        DisplayMode::NewWindow,
        DisplayMode::Popup,
    ]
}

impl Default for PracticeConfig {
    fn default() -> Self {
        Self {
            site_root: "http://localhost".to_string(),
            frame_size: DEFAULT_FRAME_SIZE,
            secret_phrase: String::new(),
            roles_in_params: false,
            display_options: default_display_options(),
            defaults: InstanceDefaults::default(),
        }
    }
}

impl PracticeConfig {
    /// True when the display mode is enabled for instructors.
    pub fn allows_display(&self, mode: DisplayMode) -> bool {
        self.display_options.contains(&mode)
    }

    /// Site root without a trailing slash.
    pub fn site_root(&self) -> &str {
        self.site_root.trim_end_matches('/')
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("practice")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PracticeConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] but at an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<PracticeConfig> {
    if !path.exists() {
        let default_cfg = PracticeConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: PracticeConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
