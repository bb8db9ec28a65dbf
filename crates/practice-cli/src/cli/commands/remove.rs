//! Remove command: delete a practice instance and its scores.

use anyhow::{bail, Result};
use practice_core::practice_db::PracticeDb;

pub async fn run_remove(db: &PracticeDb, id: i64) -> Result<()> {
    if !db.delete_practice(id).await? {
        bail!("practice {} not found", id);
    }
    println!("Removed practice {}", id);
    Ok(())
}
