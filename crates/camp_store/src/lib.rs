//! # Camp Store
//!
//! This crate owns the SQLite connection pool and the relational schema backing
//! campers, activities and their signups.

/// Connection pool creation and schema bootstrap.
pub mod database;
