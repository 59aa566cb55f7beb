//! High-level planner API for course planning.
//!
//! This module provides the main [`Planner`] interface. The planner sits
//! between the interfaces (HTTP, CLI) and the database: it runs every storage
//! call on the blocking pool under a timeout, joins records in memory, and
//! feeds them through the pure rules in [`crate::planning`].
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │    Database     │
//! │ (view assembly) │───▶│ (course_ops,    │───▶│   (via db/)     │
//! │                 │    │  student_ops)   │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!   View data             Storage access         Data persistence
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Planner`] instances with configuration
//! - [`handlers`]: View assembly for the plan-ahead and planner pages
//! - [`course_ops`]: Catalog reads and seed import
//! - [`student_ops`]: Student lookups and the taken-course join
//!
//! # Usage Examples
//!
//! ```rust,no_run
//! use trailhead_core::{params::PlanningContext, PlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("/tmp/trailhead.db"))
//!     .build()
//!     .await?;
//!
//! let view = planner.plan_ahead(&PlanningContext::new("102899")).await?;
//! println!("{} has {} credits", view.name, view.credits_completed);
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use tokio::{task::JoinHandle, time::timeout};

use crate::error::{PlannerError, Result};

pub mod builder;
pub mod course_ops;
pub mod handlers;
pub mod student_ops;


pub use builder::PlannerBuilder;

/// Main planner interface for catalog and student records.
pub struct Planner {
    pub(crate) db_path: PathBuf,
    pub(crate) storage_timeout: Duration,
}

impl Planner {
    /// Creates a new planner with the specified database path and storage
    /// timeout.
    pub(crate) fn new(db_path: PathBuf, storage_timeout: Duration) -> Self {
        Self {
            db_path,
            storage_timeout,
        }
    }

    /// Path of the backing database file.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Upper bound applied to every storage call.
    pub fn storage_timeout(&self) -> Duration {
        self.storage_timeout
    }

    /// Await a blocking storage task, giving up after the storage timeout.
    ///
    /// A timed-out task is detached, not cancelled; its result is discarded.
    pub(crate) async fn bounded<T>(
        &self,
        operation: &'static str,
        handle: JoinHandle<Result<T>>,
    ) -> Result<T> {
        match timeout(self.storage_timeout, handle).await {
            Ok(joined) => joined.map_err(|e| PlannerError::Configuration {
                message: format!("Task join error: {e}"),
            })?,
            Err(_) => Err(PlannerError::Timeout {
                operation,
                limit: self.storage_timeout,
            }),
        }
    }
}
