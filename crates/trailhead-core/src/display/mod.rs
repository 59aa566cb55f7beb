//! Display formatting for courses and planning views.
//!
//! Every view renders as markdown. The same text is served by the HTTP
//! surface and printed by the CLI through its terminal renderer.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   View Data     │    │ Display impls   │    │    Markdown     │
//! │ (PlannerView..) │───▶│ & wrappers      │───▶│ (HTTP/terminal) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (Courses)
//! - [`models`]: Display implementations for single records
//! - [`views`]: Display implementations for whole pages
//! - [`results`]: Operation result types (ImportResult)
//!
//! ## Usage Examples
//!
//! ```rust
//! use trailhead_core::{display::Courses, models::Course};
//!
//! let courses = Courses(vec![Course {
//!     id: "CS101".to_string(),
//!     course_number: Some("CS 101".to_string()),
//!     credit_hours: 3,
//!     next_courses: vec!["CS201".to_string()],
//! }]);
//! let output = format!("{}", courses);
//! assert!(output.contains("**CS 101** [CS101] (3 credit hours) → CS201"));
//! ```

pub mod collections;
pub mod models;
pub mod results;
pub mod views;

pub use collections::Courses;
pub use results::ImportResult;

use std::fmt;

use crate::models::Course;

/// Write a bullet list of courses, or `empty` when there are none.
pub(crate) fn write_course_list(
    f: &mut fmt::Formatter<'_>,
    courses: &[Course],
    empty: &str,
) -> fmt::Result {
    if courses.is_empty() {
        return writeln!(f, "{empty}");
    }
    for course in courses {
        writeln!(f, "- {course}")?;
    }
    Ok(())
}
