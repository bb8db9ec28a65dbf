pub mod config;
pub mod logging;

pub mod display;
pub mod practice_db;
pub mod resolver;
pub mod score;
pub mod url_model;
pub mod variables;
pub mod view;
