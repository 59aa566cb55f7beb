use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn trailhead_cmd(db_path: &Path) -> Command {
    let mut cmd = Command::cargo_bin("trailhead").expect("Failed to find trailhead binary");
    cmd.env_remove("TRAILHEAD_STUDENT_ID")
        .arg("--no-color")
        .arg("--database-file")
        .arg(db_path);
    cmd
}

/// Write a small seed document and return its path
fn write_seed(dir: &Path) -> PathBuf {
    let seed = json!({
        "classes": [
            {"_id": "CS101", "courseNumber": "CS 101", "creditHours": 3, "nextCourses": ["CS201"]},
            {"_id": "CS201", "courseNumber": "CS 201", "creditHours": 4, "nextCourses": ["CS301"]},
            {"_id": "CS301", "creditHours": 3, "nextCourses": []}
        ],
        "students": [
            {"studentId": "102899", "name": "Ada Lovelace", "coursesTaken": ["CS101"], "currentCourses": ["CS201"]}
        ]
    });
    let path = dir.join("seed.json");
    std::fs::write(&path, seed.to_string()).expect("Failed to write seed");
    path
}

/// Helper function to create a database loaded through the `import` command
fn create_seeded_database(temp_dir: &TempDir) -> PathBuf {
    let db_path = temp_dir.path().join("cli_test.db");
    let seed_path = write_seed(temp_dir.path());

    trailhead_cmd(&db_path)
        .arg("import")
        .arg(&seed_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Courses: 3 courses"))
        .stdout(predicate::str::contains("Students: 1 students"));

    db_path
}

#[test]
fn test_cli_import_and_list_courses() {
    let temp_dir = create_cli_test_environment();
    let db_path = create_seeded_database(&temp_dir);

    trailhead_cmd(&db_path)
        .arg("courses")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Catalog"))
        .stdout(predicate::str::contains("**CS 101** [CS101] (3 credit hours) → CS201"))
        .stdout(predicate::str::contains("Total: 3 courses, 10 credit hours"));
}

#[test]
fn test_cli_list_empty_catalog() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("empty.db");

    trailhead_cmd(&db_path)
        .arg("courses")
        .assert()
        .success()
        .stdout(predicate::str::contains("No courses found."));
}

#[test]
fn test_cli_progress_is_default_command() {
    let temp_dir = create_cli_test_environment();
    let db_path = create_seeded_database(&temp_dir);

    trailhead_cmd(&db_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("# Plan Ahead: Ada Lovelace"))
        .stdout(predicate::str::contains("- Credits completed: 3"));
}

#[test]
fn test_cli_planner() {
    let temp_dir = create_cli_test_environment();
    let db_path = create_seeded_database(&temp_dir);

    trailhead_cmd(&db_path)
        .arg("planner")
        .assert()
        .success()
        .stdout(predicate::str::contains("### After CS 201"))
        .stdout(predicate::str::contains("**CS301** (3 credit hours)"));
}

#[test]
fn test_cli_unknown_student_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = create_seeded_database(&temp_dir);

    trailhead_cmd(&db_path)
        .args(["--student-id", "000000", "progress"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Student with ID 000000 not found"));
}

#[test]
fn test_cli_student_id_from_environment() {
    let temp_dir = create_cli_test_environment();
    let db_path = create_seeded_database(&temp_dir);

    trailhead_cmd(&db_path)
        .env("TRAILHEAD_STUDENT_ID", "000000")
        .arg("progress")
        .assert()
        .failure();
}

#[test]
fn test_cli_import_missing_file() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    trailhead_cmd(&db_path)
        .arg("import")
        .arg(temp_dir.path().join("nope.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to import seed document"));
}

#[test]
fn test_cli_rejects_zero_timeout() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    trailhead_cmd(&db_path)
        .args(["--storage-timeout-secs", "0", "courses"])
        .assert()
        .failure();
}
