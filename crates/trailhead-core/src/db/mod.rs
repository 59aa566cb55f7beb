//! Database operations and SQLite management for courses and students.
//!
//! This module provides low-level, blocking storage access. It owns the
//! SQLite connection, creates the schema on open, and exposes query
//! interfaces for the two collections plus the seed importer.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod course_queries;
pub mod import;
pub mod migrations;
pub mod student_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
