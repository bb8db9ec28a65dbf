//! Score command: record a student's result.

use anyhow::Result;
use practice_core::practice_db::PracticeDb;
use practice_core::score::ScoreBand;

pub async fn run_score(
    db: &PracticeDb,
    practice_id: i64,
    username: &str,
    score: f64,
    first_name: Option<&str>,
    last_name: Option<&str>,
) -> Result<()> {
    db.record_score(username, practice_id, score).await?;
    if first_name.is_some() || last_name.is_some() {
        db.upsert_student(username, first_name.unwrap_or(""), last_name.unwrap_or(""))
            .await?;
    }
    println!(
        "Recorded {:.1} ({}) for {} on practice {}",
        score,
        ScoreBand::from_score(score),
        username,
        practice_id
    );
    Ok(())
}
