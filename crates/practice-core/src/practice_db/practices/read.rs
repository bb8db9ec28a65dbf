//! Practice read operations: get and list.

use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::display::{DisplayMode, DisplayOptions};
use crate::resolver::{PracticeId, ResourceDefinition, UrlParameter};

use super::super::db::PracticeDb;
use super::super::error::{StoreError, StoreResult};

const SELECT_COLUMNS: &str = "SELECT id, course, name, intro, duedate, externalurl, display, \
                              displayoptions, parameters, timemodified FROM practice";

fn definition_from_row(row: &SqliteRow) -> StoreResult<ResourceDefinition> {
    let id: i64 = row.get("id");
    let display_code: i64 = row.get("display");
    let display = DisplayMode::from_code(display_code).ok_or_else(|| StoreError::InvalidRecord {
        id,
        field: "display",
        reason: format!("unknown display code {display_code}"),
    })?;

    let options_json: String = row.get("displayoptions");
    let display_options: DisplayOptions = if options_json.trim().is_empty() {
        DisplayOptions::default()
    } else {
        serde_json::from_str(&options_json).map_err(|e| StoreError::InvalidRecord {
            id,
            field: "displayoptions",
            reason: e.to_string(),
        })?
    };

    let params_json: String = row.get("parameters");
    let parameters: Vec<UrlParameter> = if params_json.trim().is_empty() {
        Vec::new()
    } else {
        serde_json::from_str(&params_json).map_err(|e| StoreError::InvalidRecord {
            id,
            field: "parameters",
            reason: e.to_string(),
        })?
    };

    Ok(ResourceDefinition {
        id,
        course: row.get("course"),
        name: row.get("name"),
        intro: row.get("intro"),
        due_date: row.get("duedate"),
        external_url: row.get("externalurl"),
        display,
        display_options,
        parameters,
        time_modified: row.get("timemodified"),
    })
}

impl PracticeDb {
    /// Fetch a practice instance by id.
    pub async fn get_practice(&self, id: PracticeId) -> StoreResult<Option<ResourceDefinition>> {
        let row = sqlx::query(&format!("{SELECT_COLUMNS} WHERE id = ?1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(definition_from_row).transpose()
    }

    /// Like [`get_practice`](Self::get_practice) but a missing row is an error.
    pub async fn require_practice(&self, id: PracticeId) -> StoreResult<ResourceDefinition> {
        self.get_practice(id)
            .await?
            .ok_or(StoreError::NotFound(id))
    }

    /// List practice instances (optionally of one course), oldest first.
    pub async fn list_practices(&self, course: Option<i64>) -> StoreResult<Vec<ResourceDefinition>> {
        let rows = match course {
            Some(course) => {
                sqlx::query(&format!("{SELECT_COLUMNS} WHERE course = ?1 ORDER BY id ASC"))
                    .bind(course)
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                sqlx::query(&format!("{SELECT_COLUMNS} ORDER BY id ASC"))
                    .fetch_all(&self.pool)
                    .await?
            }
        };
        rows.iter().map(definition_from_row).collect()
    }
}
