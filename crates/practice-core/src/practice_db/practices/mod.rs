//! Practice instance CRUD.

mod read;
mod write;
