//! Catalog operations for the Planner.

use log::info;
use tokio::task;

use super::Planner;
use crate::{
    db::Database,
    error::{PlannerError, Result},
    models::{Course, ImportSummary},
    params::{CourseFields, ImportSeed, SeedDocument},
};

impl Planner {
    /// Lists the whole catalog in stored order.
    ///
    /// `fields` is a projection hint; `None` loads every attribute.
    pub async fn list_courses(&self, fields: Option<CourseFields>) -> Result<Vec<Course>> {
        let db_path = self.db_path.clone();
        let fields = fields.unwrap_or_default();

        let handle = task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_courses(fields)
        });
        self.bounded("list_courses", handle).await
    }

    /// Replaces the catalog and student collections with a seed document read
    /// from disk.
    pub async fn import_seed(&self, params: &ImportSeed) -> Result<ImportSummary> {
        let db_path = self.db_path.clone();
        let seed_path = params.path.clone();

        let handle = task::spawn_blocking(move || {
            let raw = std::fs::read_to_string(&seed_path).map_err(|e| {
                PlannerError::FileSystem {
                    path: seed_path.clone(),
                    source: e,
                }
            })?;
            let seed: SeedDocument = serde_json::from_str(&raw)?;
            let mut db = Database::new(&db_path)?;
            db.replace_all(&seed)
        });
        let summary = self.bounded("import_seed", handle).await?;

        info!(
            "Imported {} courses and {} students from {}",
            summary.courses,
            summary.students,
            params.path.display()
        );
        Ok(summary)
    }
}
