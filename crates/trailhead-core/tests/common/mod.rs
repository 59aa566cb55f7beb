use std::path::Path;

use serde_json::{json, Value};
use tempfile::TempDir;
use trailhead_core::{params::ImportSeed, PlannerBuilder};

/// Seed document shared by the integration tests
pub fn sample_seed() -> Value {
    json!({
        "classes": [
            {"_id": "CS101", "courseNumber": "CS 101", "creditHours": 3, "nextCourses": ["CS201"]},
            {"_id": "CS201", "courseNumber": "CS 201", "creditHours": 4, "nextCourses": ["CS301", "CS310"]},
            {"_id": "CS301", "creditHours": 3, "nextCourses": []},
            {"_id": "CS310", "creditHours": 3, "nextCourses": ["CS310"]},
            {"_id": "ENG101", "creditHours": 3, "nextCourses": []}
        ],
        "students": [
            {"studentId": "102899", "name": "Ada Lovelace", "coursesTaken": ["CS101", "ENG101"], "currentCourses": ["CS201"]}
        ]
    })
}

/// Write `seed` next to the database and return its path
pub fn write_seed(dir: &Path, seed: &Value) -> std::path::PathBuf {
    let path = dir.join("seed.json");
    std::fs::write(&path, seed.to_string()).expect("Failed to write seed");
    path
}

/// Helper function to create a test planner loaded with [`sample_seed`]
pub async fn create_seeded_planner() -> (TempDir, trailhead_core::Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create planner");

    let path = write_seed(temp_dir.path(), &sample_seed());
    planner
        .import_seed(&ImportSeed { path })
        .await
        .expect("Failed to import seed");
    (temp_dir, planner)
}
