//! Practice write operations: add, update, delete.

use crate::display::DisplayOptions;
use crate::resolver::{dedupe_parameters, PracticeId};
use crate::url_model::normalize_submitted_url;

use super::super::db::{unix_timestamp, PracticeDb};
use super::super::error::{StoreError, StoreResult};
use super::super::types::NewPractice;

/// Column values derived from the submitted form.
struct PreparedPractice {
    external_url: String,
    display: i64,
    display_options: String,
    parameters: String,
}

fn prepare(data: &NewPractice) -> StoreResult<PreparedPractice> {
    let parameters = dedupe_parameters(
        data.parameters
            .iter()
            .filter(|p| !p.name.trim().is_empty() && !p.variable.trim().is_empty())
            .cloned(),
    );
    let options = DisplayOptions::for_mode(
        data.display,
        data.popup_width,
        data.popup_height,
        data.print_intro,
    );
    Ok(PreparedPractice {
        external_url: normalize_submitted_url(&data.external_url),
        display: data.display.code(),
        display_options: serde_json::to_string(&options)?,
        parameters: serde_json::to_string(&parameters)?,
    })
}

impl PracticeDb {
    /// Insert a new practice instance and return its id.
    ///
    /// The URL is normalized, blank parameter bindings are dropped and only
    /// the display options relevant to the chosen mode are kept.
    pub async fn add_practice(&self, data: &NewPractice) -> StoreResult<PracticeId> {
        let prepared = prepare(data)?;
        let now = unix_timestamp();

        let id = sqlx::query(
            r#"
            INSERT INTO practice (
                course, name, intro, externalurl, display,
                displayoptions, parameters, timemodified, duedate
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
        )
        .bind(data.course)
        .bind(&data.name)
        .bind(&data.intro)
        .bind(&prepared.external_url)
        .bind(prepared.display)
        .bind(&prepared.display_options)
        .bind(&prepared.parameters)
        .bind(now)
        .bind(&data.due_date)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        tracing::info!(practice = id, url = %prepared.external_url, "added practice");
        Ok(id)
    }

    /// Replace the editable fields of an existing practice instance.
    pub async fn update_practice(&self, id: PracticeId, data: &NewPractice) -> StoreResult<()> {
        let prepared = prepare(data)?;
        let now = unix_timestamp();

        let affected = sqlx::query(
            r#"
            UPDATE practice
            SET course = ?1,
                name = ?2,
                intro = ?3,
                externalurl = ?4,
                display = ?5,
                displayoptions = ?6,
                parameters = ?7,
                timemodified = ?8,
                duedate = ?10
            WHERE id = ?9
            "#,
        )
        .bind(data.course)
        .bind(&data.name)
        .bind(&data.intro)
        .bind(&prepared.external_url)
        .bind(prepared.display)
        .bind(&prepared.display_options)
        .bind(&prepared.parameters)
        .bind(now)
        .bind(id)
        .bind(&data.due_date)
        .execute(&self.pool)
        .await?
        .rows_affected();

        if affected == 0 {
            return Err(StoreError::NotFound(id));
        }
        tracing::info!(practice = id, "updated practice");
        Ok(())
    }

    /// Delete a practice instance and its score records.
    ///
    /// Returns false if no such instance exists.
    pub async fn delete_practice(&self, id: PracticeId) -> StoreResult<bool> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("DELETE FROM student_record WHERE practiceid = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        let affected = sqlx::query("DELETE FROM practice WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        tx.commit().await?;

        if affected > 0 {
            tracing::info!(practice = id, "deleted practice");
        }
        Ok(affected > 0)
    }
}
