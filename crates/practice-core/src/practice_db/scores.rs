//! Student score records.

use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::resolver::PracticeId;

use super::db::{unix_timestamp, PracticeDb};
use super::error::{StoreError, StoreResult};
use super::types::{student_display_name, StudentRecord};

const SELECT_RECORDS: &str = "SELECT r.username AS username, r.practiceid AS practiceid, \
                              r.score AS score, r.timemodified AS timemodified, \
                              COALESCE(s.firstname, '') AS firstname, \
                              COALESCE(s.lastname, '') AS lastname \
                              FROM student_record r LEFT JOIN student s ON s.username = r.username";

fn record_from_row(row: &SqliteRow) -> StudentRecord {
    let first_name: String = row.get("firstname");
    let last_name: String = row.get("lastname");
    StudentRecord {
        username: row.get("username"),
        full_name: student_display_name(&first_name, &last_name),
        practice_id: row.get("practiceid"),
        score: row.get("score"),
        time_modified: row.get("timemodified"),
    }
}

impl PracticeDb {
    /// Record (or replace) a student's score for a practice.
    ///
    /// Scores must lie in 0-100 and the practice must exist.
    pub async fn record_score(
        &self,
        username: &str,
        practice_id: PracticeId,
        score: f64,
    ) -> StoreResult<()> {
        if !(0.0..=100.0).contains(&score) {
            return Err(StoreError::InvalidScore(score));
        }
        if self.get_practice(practice_id).await?.is_none() {
            return Err(StoreError::NotFound(practice_id));
        }

        sqlx::query(
            r#"
            INSERT INTO student_record (username, practiceid, score, timemodified)
            VALUES (?1, ?2, ?3, ?4)
            ON CONFLICT (username, practiceid)
            DO UPDATE SET score = excluded.score,
                          timemodified = excluded.timemodified
            "#,
        )
        .bind(username)
        .bind(practice_id)
        .bind(score)
        .bind(unix_timestamp())
        .execute(&self.pool)
        .await?;

        tracing::debug!(practice = practice_id, username, score, "recorded score");
        Ok(())
    }

    /// Store or replace a student's name shown in result reports.
    pub async fn upsert_student(
        &self,
        username: &str,
        first_name: &str,
        last_name: &str,
    ) -> StoreResult<()> {
        sqlx::query(
            r#"
            INSERT INTO student (username, firstname, lastname)
            VALUES (?1, ?2, ?3)
            ON CONFLICT (username)
            DO UPDATE SET firstname = excluded.firstname,
                          lastname = excluded.lastname
            "#,
        )
        .bind(username)
        .bind(first_name)
        .bind(last_name)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// A single student's record for a practice, if any.
    pub async fn get_score(
        &self,
        username: &str,
        practice_id: PracticeId,
    ) -> StoreResult<Option<StudentRecord>> {
        let row = sqlx::query(&format!(
            "{SELECT_RECORDS} WHERE r.username = ?1 AND r.practiceid = ?2 LIMIT 1"
        ))
        .bind(username)
        .bind(practice_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(record_from_row))
    }

    /// All records of a practice, ordered by username.
    pub async fn list_scores(&self, practice_id: PracticeId) -> StoreResult<Vec<StudentRecord>> {
        let rows = sqlx::query(&format!(
            "{SELECT_RECORDS} WHERE r.practiceid = ?1 ORDER BY r.username ASC"
        ))
        .bind(practice_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(record_from_row).collect())
    }

    /// Remove all score records of a course's practices (course reset).
    ///
    /// Returns the number of deleted records.
    pub async fn reset_course_scores(&self, course: i64) -> StoreResult<u64> {
        let deleted = sqlx::query(
            r#"
            DELETE FROM student_record
            WHERE practiceid IN (SELECT id FROM practice WHERE course = ?1)
            "#,
        )
        .bind(course)
        .execute(&self.pool)
        .await?
        .rows_affected();

        tracing::info!(course, deleted, "reset practice scores");
        Ok(deleted)
    }
}
