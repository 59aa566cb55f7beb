//! Data models for courses, students and planning views.
//!
//! The catalog and student records mirror the documents held by the two
//! storage collections. Field names serialize in camelCase so seed files and
//! JSON responses keep the shape of those documents (`creditHours`,
//! `nextCourses`, `coursesTaken`, ...). Display implementations live in
//! [`crate::display`].
//!
//! # Examples
//!
//! ```rust
//! use trailhead_core::models::{Course, PlanSelection, SelectionState};
//!
//! let course: Course = serde_json::from_str(
//!     r#"{"_id": "CS101", "courseNumber": "CS 101", "creditHours": 3, "nextCourses": ["CS201"]}"#,
//! ).unwrap();
//! assert_eq!(course.id, "CS101");
//! assert!(course.leads_to("CS201"));
//!
//! let selection = PlanSelection::new();
//! assert_eq!(selection.state(), SelectionState::Idle);
//! ```

pub mod course;
pub mod selection;
pub mod student;
pub mod views;


pub use course::Course;
pub use selection::{PlanSelection, SelectionState};
pub use student::{Student, StudentWithCourses};
pub use views::{
    Completion, ImportSummary, PlanAheadView, PlannerView, Recommendation, SelectionView,
};
