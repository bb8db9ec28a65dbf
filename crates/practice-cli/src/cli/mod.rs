//! CLI for the practice course-resource module.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use practice_core::config;
use practice_core::display::DisplayMode;
use practice_core::practice_db::PracticeDb;
use practice_core::resolver::UrlParameter;
use std::path::PathBuf;

use commands::{
    run_add, run_check_url, run_list, run_normalize, run_remove, run_report, run_reset_course,
    run_score, run_show, run_update, run_variables, run_view,
};

/// Top-level CLI for the practice module.
#[derive(Debug, Parser)]
#[command(name = "practice")]
#[command(about = "Practice: course resource links with variable parameters", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Editable fields of a practice instance.
#[derive(Debug, Clone, Args)]
pub struct PracticeArgs {
    /// Course the practice belongs to.
    #[arg(long)]
    pub course: i64,

    /// Display name.
    #[arg(long)]
    pub name: String,

    /// External URL (normalized before storing).
    #[arg(long)]
    pub url: String,

    /// Description shown with the resource.
    #[arg(long, default_value = "")]
    pub intro: String,

    /// Due date shown in result reports (free text).
    #[arg(long, default_value = "")]
    pub due_date: String,

    /// Display mode: auto, embed, frame, open, new, popup, download (default from config).
    #[arg(long)]
    pub display: Option<DisplayMode>,

    /// Popup width in pixels (popup display only).
    #[arg(long, value_name = "PX")]
    pub popup_width: Option<u32>,

    /// Popup height in pixels (popup display only).
    #[arg(long, value_name = "PX")]
    pub popup_height: Option<u32>,

    /// Do not print the description below the content.
    #[arg(long)]
    pub no_intro: bool,

    /// URL parameter binding `key=variable`; repeat to add more, order is kept.
    #[arg(long = "param", value_name = "KEY=VARIABLE", value_parser = parse_param)]
    pub params: Vec<UrlParameter>,
}

/// Parse a `key=variable` parameter binding.
fn parse_param(s: &str) -> Result<UrlParameter, String> {
    let (name, variable) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VARIABLE, got '{s}'"))?;
    if name.is_empty() || variable.is_empty() {
        return Err(format!("empty key or variable in '{s}'"));
    }
    Ok(UrlParameter::new(name, variable))
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Add a new practice instance.
    Add {
        #[command(flatten)]
        practice: PracticeArgs,
    },

    /// Replace the fields of an existing practice instance.
    Update {
        /// Practice identifier.
        id: i64,
        #[command(flatten)]
        practice: PracticeArgs,
    },

    /// Remove a practice instance and its score records.
    Remove {
        /// Practice identifier.
        id: i64,
    },

    /// List practice instances.
    List {
        /// Only list practices of this course.
        #[arg(long)]
        course: Option<i64>,
    },

    /// Print the resolved URL and effective display mode of a practice.
    Show {
        /// Practice identifier.
        id: i64,
        /// TOML file describing the viewer environment (course, user, site...).
        #[arg(long, value_name = "FILE")]
        env: Option<PathBuf>,
    },

    /// Print how a practice would be displayed to a viewer.
    View {
        /// Practice identifier.
        id: i64,
        /// TOML file describing the viewer environment (course, user, site...).
        #[arg(long, value_name = "FILE")]
        env: Option<PathBuf>,
        /// Viewer asked to be redirected.
        #[arg(long)]
        redirect: bool,
        /// Request comes straight from the edit form.
        #[arg(long)]
        from_editor: bool,
        /// Print the generated markup instead of a summary.
        #[arg(long)]
        html: bool,
    },

    /// Check whether a URL looks usable (loose validation).
    CheckUrl {
        url: String,
    },

    /// Print a submitted URL after normalization.
    Normalize {
        url: String,
    },

    /// List variables available for URL parameters.
    Variables,

    /// Record a student's score for a practice.
    Score {
        /// Practice identifier.
        practice_id: i64,
        username: String,
        /// Score between 0 and 100.
        score: f64,
        /// Student's first name, shown in reports.
        #[arg(long)]
        first_name: Option<String>,
        /// Student's last name, shown in reports.
        #[arg(long)]
        last_name: Option<String>,
    },

    /// Show practice results (one student with --user, otherwise everyone).
    Report {
        /// Practice identifier.
        practice_id: i64,
        #[arg(long)]
        user: Option<String>,
    },

    /// Delete all score records of a course.
    ResetCourse {
        course: i64,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        // Commands that never touch the store.
        match &cli.command {
            CliCommand::CheckUrl { url } => return run_check_url(url),
            CliCommand::Normalize { url } => {
                run_normalize(url);
                return Ok(());
            }
            CliCommand::Variables => {
                run_variables(&cfg);
                return Ok(());
            }
            _ => {}
        }

        let db = PracticeDb::open_default().await?;

        match cli.command {
            CliCommand::Add { practice } => run_add(&db, &cfg, &practice).await?,
            CliCommand::Update { id, practice } => run_update(&db, &cfg, id, &practice).await?,
            CliCommand::Remove { id } => run_remove(&db, id).await?,
            CliCommand::List { course } => run_list(&db, &cfg, course).await?,
            CliCommand::Show { id, env } => run_show(&db, &cfg, id, env.as_deref()).await?,
            CliCommand::View {
                id,
                env,
                redirect,
                from_editor,
                html,
            } => run_view(&db, &cfg, id, env.as_deref(), redirect, from_editor, html).await?,
            CliCommand::Score {
                practice_id,
                username,
                score,
                first_name,
                last_name,
            } => {
                run_score(
                    &db,
                    practice_id,
                    &username,
                    score,
                    first_name.as_deref(),
                    last_name.as_deref(),
                )
                .await?
            }
            CliCommand::Report { practice_id, user } => {
                run_report(&db, practice_id, user.as_deref()).await?
            }
            CliCommand::ResetCourse { course } => run_reset_course(&db, course).await?,
            CliCommand::CheckUrl { .. } | CliCommand::Normalize { .. } | CliCommand::Variables => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
