//! List command: show stored practice instances as they appear on the course page.

use anyhow::Result;
use practice_core::config::PracticeConfig;
use practice_core::practice_db::PracticeDb;
use practice_core::resolver::{final_display_mode, ResourceDefinition};
use practice_core::view::{course_listing_onclick, guess_icon};

/// Print one line per practice: id, course, effective display, icon, name and URL.
///
/// Popup and new-window practices get a second line with the course-page
/// `onclick`, using the practice id as the module id.
pub async fn run_list(db: &PracticeDb, cfg: &PracticeConfig, course: Option<i64>) -> Result<()> {
    let practices = db.list_practices(course).await?;
    if practices.is_empty() {
        println!("No practices.");
        return Ok(());
    }
    println!(
        "{:<6} {:<8} {:<10} {:<14} {:<24} URL",
        "ID", "COURSE", "DISPLAY", "ICON", "NAME"
    );
    for p in &practices {
        for line in listing_lines(p, cfg) {
            println!("{line}");
        }
    }
    Ok(())
}

pub(crate) fn listing_lines(p: &ResourceDefinition, cfg: &PracticeConfig) -> Vec<String> {
    let display = final_display_mode(p, cfg.site_root());
    let icon = guess_icon(&p.external_url).unwrap_or("practice");
    let mut lines = vec![format!(
        "{:<6} {:<8} {:<10} {:<14} {:<24} {}",
        p.id,
        p.course,
        display.as_str(),
        icon,
        p.name,
        p.external_url
    )];
    if let Some(onclick) = course_listing_onclick(p, p.id, cfg) {
        lines.push(format!("       onclick: {onclick}"));
    }
    lines
}
