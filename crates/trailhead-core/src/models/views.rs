//! View-data structures assembled for presentation.

use serde::{Deserialize, Serialize};

use super::{Course, PlanSelection};

/// Credit accounting for one student.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Completion {
    /// Sum of credit hours over the resolved taken courses
    pub credits_completed: u64,

    /// Catalog courses the student has not taken, in catalog order
    pub courses_not_taken: Vec<Course>,
}

/// An active course paired with the catalog courses it leads into.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub course: Course,
    pub recommended_courses: Vec<Course>,
}

/// Data behind the plan-ahead page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlanAheadView {
    pub name: String,
    pub credits_completed: u64,
    pub courses_taken: Vec<Course>,
    pub courses_not_taken: Vec<Course>,
}

/// Data behind the planner page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlannerView {
    pub courses_not_taken: Vec<Course>,
    pub active_courses: Vec<Course>,
    pub recommendations: Vec<Recommendation>,
    pub selection: PlanSelection,
}

/// Data returned after a planning submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SelectionView {
    /// Courses picked in this submission, in catalog order
    pub selected_courses: Vec<Course>,

    /// The whole accumulated selection resolved for display, in selection
    /// order
    pub current_courses: Vec<Course>,

    /// Accumulated identifiers to carry into the next submission
    pub selection: PlanSelection,
}

/// Counts reported after a seed import.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImportSummary {
    pub courses: usize,
    pub students: usize,
}
