//! CLI command handlers. Each command is in its own file.

mod add;
mod check_url;
mod environment;
mod list;
mod normalize;
mod remove;
mod report;
mod score;
mod show;
mod variables;
mod view;

pub use add::{run_add, run_update};
pub use check_url::run_check_url;
pub use list::run_list;
pub use normalize::run_normalize;
pub use remove::run_remove;
pub use report::{run_report, run_reset_course};
pub use score::run_score;
pub use show::run_show;
pub use variables::run_variables;
pub use view::run_view;
