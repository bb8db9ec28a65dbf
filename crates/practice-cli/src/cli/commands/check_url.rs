//! Check-url command: loose plausibility check of a URL.

use anyhow::{bail, Result};
use practice_core::url_model::is_plausible_url;

/// Print whether the URL looks usable; fail for definitely invalid URLs.
pub fn run_check_url(url: &str) -> Result<()> {
    if is_plausible_url(url) {
        println!("ok  {}", url);
        Ok(())
    } else {
        bail!("Entered Practice is invalid: {}", url)
    }
}
