//! Persistent practice store (SQLite via sqlx).
//!
//! Stores practice instances (the resource definitions the resolver reads)
//! and per-student score records.

pub mod db;
pub mod error;
mod practices;
mod scores;
pub mod types;

pub use db::*;
pub use error::StoreError;
pub use types::*;
