//! Report and reset commands for student scores.

use anyhow::{bail, Result};
use practice_core::practice_db::{PracticeDb, StudentRecord};
use practice_core::resolver::ResourceDefinition;
use practice_core::score::{clamp_percent, ScoreBand};
use practice_core::view::strip_tags;

/// Width of the text progress bar.
const BAR_WIDTH: usize = 20;

pub async fn run_report(db: &PracticeDb, practice_id: i64, user: Option<&str>) -> Result<()> {
    let practice = db.require_practice(practice_id).await?;
    for line in report_header(&practice) {
        println!("{line}");
    }

    let records = match user {
        Some(username) => match db.get_score(username, practice_id).await? {
            Some(record) => vec![record],
            None => bail!("no score recorded for {} on practice {}", username, practice_id),
        },
        None => db.list_scores(practice_id).await?,
    };

    if records.is_empty() {
        println!("No scores recorded yet.");
        return Ok(());
    }
    for record in &records {
        println!("{}", report_line(record));
    }
    Ok(())
}

/// Practice title, description and due date.
pub(crate) fn report_header(practice: &ResourceDefinition) -> Vec<String> {
    let mut lines = vec![format!("Results for {}. {}", practice.id, practice.name)];
    let description = strip_tags(&practice.intro);
    let description = description.trim();
    if !description.is_empty() {
        lines.push(format!("  {description}"));
    }
    if !practice.due_date.is_empty() {
        lines.push(format!("  Due date: {}", practice.due_date));
    }
    lines
}

/// `username  Full Name  [#####     ]  72.0%  Average`
pub(crate) fn report_line(record: &StudentRecord) -> String {
    let pct = clamp_percent(record.score);
    let filled = ((pct / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!(
        "{:<16} {:<24} [{}{}] {:>5.1}%  {}",
        record.username,
        record.full_name,
        "#".repeat(filled),
        " ".repeat(BAR_WIDTH - filled),
        pct,
        ScoreBand::from_score(pct)
    )
}

pub async fn run_reset_course(db: &PracticeDb, course: i64) -> Result<()> {
    let removed = db.reset_course_scores(course).await?;
    println!("Removed {} score record(s) in course {}", removed, course);
    Ok(())
}
