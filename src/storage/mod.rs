//! Storage layer for Jot

pub mod database;

pub use database::{Database, ObjectStore};
