//! Loading the viewer environment used by show/view.

use anyhow::{Context, Result};
use practice_core::config::PracticeConfig;
use practice_core::variables::RenderEnvironment;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// Read the environment from a TOML file, or build a minimal anonymous one.
///
/// Missing site root and time are filled from the config and the clock.
pub(crate) fn load_environment(
    cfg: &PracticeConfig,
    course: i64,
    path: Option<&Path>,
) -> Result<RenderEnvironment> {
    let mut env = match path {
        Some(path) => {
            let data = std::fs::read_to_string(path)
                .with_context(|| format!("read environment file {}", path.display()))?;
            toml::from_str::<RenderEnvironment>(&data)
                .with_context(|| format!("parse environment file {}", path.display()))?
        }
        None => RenderEnvironment::default(),
    };

    if env.course.id == 0 {
        env.course.id = course;
    }
    if env.site.root.is_empty() {
        env.site.root = cfg.site_root().to_string();
    }
    if env.now == 0 {
        env.now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64;
    }
    if env.lang.is_empty() {
        env.lang = "en".to_string();
    }
    Ok(env)
}
