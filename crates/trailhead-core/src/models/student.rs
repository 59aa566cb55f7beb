//! Student model definitions.

use serde::{Deserialize, Serialize};

use super::Course;

/// A raw student record with unresolved course identifiers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    /// Unique identifier of the student
    pub student_id: String,

    /// Display name
    pub name: String,

    /// Identifiers of completed courses
    #[serde(default)]
    pub courses_taken: Vec<String>,

    /// Identifiers of courses the student is enrolled in right now
    #[serde(default)]
    pub current_courses: Vec<String>,
}

/// A student whose taken-course identifiers have been joined against the
/// catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StudentWithCourses {
    /// Unique identifier of the student
    pub student_id: String,

    /// Display name
    pub name: String,

    /// Taken courses that resolved to catalog entries, in the student's order
    pub courses_taken: Vec<Course>,

    /// Identifiers of courses the student is enrolled in right now
    pub current_courses: Vec<String>,

    /// Taken identifiers that matched no catalog entry
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unresolved_taken: Vec<String>,
}

impl StudentWithCourses {
    /// Identifiers of the resolved taken courses.
    pub fn taken_ids(&self) -> impl Iterator<Item = &str> {
        self.courses_taken.iter().map(|course| course.id.as_str())
    }
}
