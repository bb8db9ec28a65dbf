//! Add/update commands: validate the form and store the practice.

use anyhow::{bail, Result};
use practice_core::config::PracticeConfig;
use practice_core::practice_db::{NewPractice, PracticeDb};
use practice_core::url_model::{is_acceptable_submitted_url, normalize_submitted_url};

use crate::cli::PracticeArgs;

/// Build the form data, applying config defaults and edit-time validation.
pub(crate) fn practice_form(cfg: &PracticeConfig, args: &PracticeArgs) -> Result<NewPractice> {
    let url = normalize_submitted_url(&args.url);
    if url == "http://" || !is_acceptable_submitted_url(&url) {
        bail!("Entered Practice is invalid: {}", args.url);
    }

    let mut form = NewPractice::with_defaults(args.course, &args.name, url, &cfg.defaults);
    form.intro = args.intro.clone();
    form.due_date = args.due_date.trim().to_string();
    if let Some(display) = args.display {
        if !cfg.allows_display(display) {
            bail!("display mode '{}' is not enabled in config", display);
        }
        form.display = display;
    }
    if let Some(w) = args.popup_width {
        form.popup_width = w;
    }
    if let Some(h) = args.popup_height {
        form.popup_height = h;
    }
    if args.no_intro {
        form.print_intro = false;
    }
    form.parameters = args.params.clone();
    Ok(form)
}

/// Add a practice instance and print its id.
pub async fn run_add(db: &PracticeDb, cfg: &PracticeConfig, args: &PracticeArgs) -> Result<()> {
    let form = practice_form(cfg, args)?;
    let id = db.add_practice(&form).await?;
    println!("Added practice {} ({})", id, form.name);
    Ok(())
}

/// Replace the fields of an existing practice instance.
pub async fn run_update(
    db: &PracticeDb,
    cfg: &PracticeConfig,
    id: i64,
    args: &PracticeArgs,
) -> Result<()> {
    let form = practice_form(cfg, args)?;
    db.update_practice(id, &form).await?;
    println!("Updated practice {}", id);
    Ok(())
}
