//! Core library for the Trailhead course planning application.
//!
//! This crate provides the business logic behind the planner: storage of the
//! course catalog and student records, credit accounting, successor-based
//! recommendations, and plan selection accumulation.
//!
//! # Architecture
//!
//! - **Models** ([`models`]): catalog, student and view-data types
//! - **Planning rules** ([`planning`]): pure functions over loaded records
//! - **Storage** ([`db`]): blocking SQLite access and seed import
//! - **Planner** ([`planner`]): async facade with storage timeouts
//! - **Display** ([`display`]): markdown rendering of every view
//!
//! # Quick Start
//!
//! ```rust
//! use trailhead_core::{
//!     models::{Course, Student},
//!     planning::{compute_completion, join_taken_courses, recommend},
//! };
//!
//! let catalog = vec![
//!     Course {
//!         id: "CS101".to_string(),
//!         course_number: None,
//!         credit_hours: 3,
//!         next_courses: vec!["CS201".to_string()],
//!     },
//!     Course {
//!         id: "CS201".to_string(),
//!         course_number: None,
//!         credit_hours: 4,
//!         next_courses: vec![],
//!     },
//! ];
//! let student = Student {
//!     student_id: "102899".to_string(),
//!     name: "Ada".to_string(),
//!     courses_taken: vec!["CS101".to_string()],
//!     current_courses: vec![],
//! };
//!
//! let joined = join_taken_courses(student, &catalog);
//! let completion = compute_completion(&joined, &catalog);
//! assert_eq!(completion.credits_completed, 3);
//! assert_eq!(completion.courses_not_taken[0].id, "CS201");
//!
//! let recommendations = recommend(&catalog[..1], &catalog);
//! assert_eq!(recommendations[0].recommended_courses[0].id, "CS201");
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod planner;
pub mod planning;

// Re-export commonly used types
pub use db::Database;
pub use display::{Courses, ImportResult};
pub use error::{PlannerError, Result};
pub use models::{
    Completion, Course, ImportSummary, PlanAheadView, PlanSelection, PlannerView,
    Recommendation, SelectionState, SelectionView, Student, StudentWithCourses,
};
pub use params::{CourseFields, ImportSeed, PlannerSubmission, PlanningContext, SeedDocument};
pub use planner::{Planner, PlannerBuilder};
