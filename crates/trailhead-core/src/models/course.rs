//! Course model definition and related functionality.

use serde::{Deserialize, Serialize};

/// A catalog entry: one course and the courses it leads into.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Unique identifier of the course
    #[serde(alias = "_id")]
    pub id: String,

    /// Human-facing course number, e.g. "CS 101"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_number: Option<String>,

    /// Credit hours earned by completing the course
    #[serde(default)]
    pub credit_hours: u32,

    /// Identifiers of successor courses, in stored order
    #[serde(default)]
    pub next_courses: Vec<String>,
}

impl Course {
    /// Label used when rendering the course: the course number when present,
    /// otherwise the identifier.
    pub fn label(&self) -> &str {
        self.course_number.as_deref().unwrap_or(&self.id)
    }

    /// Whether `id` is listed as one of this course's successors.
    pub fn leads_to(&self, id: &str) -> bool {
        self.next_courses.iter().any(|next| next == id)
    }
}
