//! Parameter structures for Trailhead operations
//!
//! This module contains shared parameter structures used across interfaces
//! (HTTP, CLI) without framework-specific derives. Interface layers translate
//! their raw input into these types; validation of planning submissions lives
//! here so every front end rejects the same inputs the same way.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  HTTP bodies    │    │  Core Params    │
//! │  (clap derives) │───▶│ (form / JSON)   │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    error::{PlannerError, Result},
    models::{Course, PlanSelection, Student},
};

/// Form and JSON field carrying the newly selected course identifiers.
pub const SELECTED_COURSES_FIELD: &str = "selectedCourses";

/// Form and JSON field carrying the serialized previous selection.
pub const CURRENT_COURSES_FIELD: &str = "currentCourses";

/// Student whose records every planning operation reads.
///
/// Built per request from configuration; there is no login, so the configured
/// identifier stands in for the signed-in student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanningContext {
    pub student_id: String,
}

impl PlanningContext {
    pub fn new(student_id: impl Into<String>) -> Self {
        Self {
            student_id: student_id.into(),
        }
    }
}

/// Projection hint for catalog reads.
///
/// Identifier, course number and credit hours are always loaded. Skipping
/// successor lists saves one query when the caller only needs accounting
/// data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseFields {
    /// Whether to populate [`Course::next_courses`]
    pub next_courses: bool,
}

impl CourseFields {
    /// Every attribute.
    pub fn all() -> Self {
        Self { next_courses: true }
    }

    /// Identifier, course number and credit hours only.
    pub fn summary() -> Self {
        Self {
            next_courses: false,
        }
    }
}

impl Default for CourseFields {
    fn default() -> Self {
        Self::all()
    }
}

/// Parameters for importing a seed document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportSeed {
    /// Path of the JSON seed document
    pub path: PathBuf,
}

/// Contents of a seed document: the two collections in document form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedDocument {
    #[serde(default)]
    pub classes: Vec<Course>,
    #[serde(default)]
    pub students: Vec<Student>,
}

/// A validated planning submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerSubmission {
    /// Identifiers picked in this submission, in submitted order
    pub selected_courses: Vec<String>,

    /// Selection accumulated by earlier submissions
    pub current_courses: PlanSelection,
}

impl PlannerSubmission {
    /// Validate a urlencoded form given as decoded `(key, value)` pairs.
    ///
    /// `selectedCourses[]=X` (or `selectedCourses[0]=X`) entries, or the plain
    /// key repeated, make a list. A single plain `selectedCourses=X` is a
    /// scalar and is rejected.
    ///
    /// # Errors
    ///
    /// * `PlannerError::InvalidInput` - selectedCourses missing or not a list
    /// * `PlannerError::InvalidInput` - currentCourses is not a JSON array
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trailhead_core::params::PlannerSubmission;
    ///
    /// let pairs = vec![
    ///     ("selectedCourses[]".to_string(), "CS201".to_string()),
    ///     ("currentCourses".to_string(), r#"["CS101"]"#.to_string()),
    /// ];
    /// let submission = PlannerSubmission::from_form_pairs(&pairs).unwrap();
    /// assert_eq!(submission.selected_courses, vec!["CS201"]);
    /// assert_eq!(submission.current_courses.ids(), ["CS101"]);
    ///
    /// let scalar = vec![("selectedCourses".to_string(), "not-an-array".to_string())];
    /// assert!(PlannerSubmission::from_form_pairs(&scalar).is_err());
    /// ```
    pub fn from_form_pairs(pairs: &[(String, String)]) -> Result<Self> {
        let mut selected = Vec::new();
        let mut plain_count = 0usize;
        let mut bracketed = false;
        let mut current = None;

        for (key, value) in pairs {
            if key == SELECTED_COURSES_FIELD {
                plain_count += 1;
                selected.push(value.clone());
            } else if is_list_key(key, SELECTED_COURSES_FIELD) {
                bracketed = true;
                selected.push(value.clone());
            } else if key == CURRENT_COURSES_FIELD {
                current = Some(value.as_str());
            }
        }

        if selected.is_empty() {
            return Err(missing_selection());
        }
        if !bracketed && plain_count == 1 {
            return Err(selection_not_a_list());
        }

        Ok(Self {
            selected_courses: selected,
            current_courses: parse_current_courses(current)?,
        })
    }

    /// Validate a JSON request body.
    ///
    /// `selectedCourses` must be an array of strings. `currentCourses` may be
    /// the serialized string a form would send or an array.
    ///
    /// # Errors
    ///
    /// * `PlannerError::InvalidInput` - selectedCourses missing or not a list
    /// * `PlannerError::InvalidInput` - currentCourses malformed
    pub fn from_json(body: &Value) -> Result<Self> {
        let selected = match body.get(SELECTED_COURSES_FIELD) {
            None | Some(Value::Null) => return Err(missing_selection()),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| item.as_str().map(String::from))
                .collect::<Option<Vec<_>>>()
                .ok_or_else(|| {
                    PlannerError::invalid_input(SELECTED_COURSES_FIELD)
                        .with_reason("Course selections must be course identifiers")
                })?,
            Some(_) => return Err(selection_not_a_list()),
        };

        let current_courses = match body.get(CURRENT_COURSES_FIELD) {
            None | Some(Value::Null) => PlanSelection::new(),
            Some(Value::String(raw)) => parse_current_courses(Some(raw))?,
            Some(value @ Value::Array(_)) => selection_from_value(value)?,
            Some(_) => return Err(malformed_current_courses()),
        };

        Ok(Self {
            selected_courses: selected,
            current_courses,
        })
    }
}

/// Parse the serialized previous selection.
///
/// Missing or blank input is an empty selection. Entries may be identifiers
/// or course documents carrying an `_id`/`id` field.
///
/// # Errors
///
/// Returns `PlannerError::InvalidInput` when the input is not a JSON array of
/// identifiers or course documents.
pub fn parse_current_courses(raw: Option<&str>) -> Result<PlanSelection> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(PlanSelection::new()),
        Some(raw) => raw,
    };
    let value: Value = serde_json::from_str(raw).map_err(|_| malformed_current_courses())?;
    selection_from_value(&value)
}

fn selection_from_value(value: &Value) -> Result<PlanSelection> {
    let items = value.as_array().ok_or_else(malformed_current_courses)?;
    items
        .iter()
        .map(|item| match item {
            Value::String(id) => Some(id.clone()),
            Value::Object(doc) => doc
                .get("_id")
                .or_else(|| doc.get("id"))
                .and_then(Value::as_str)
                .map(String::from),
            _ => None,
        })
        .collect::<Option<Vec<_>>>()
        .map(PlanSelection::from)
        .ok_or_else(malformed_current_courses)
}

/// `field[]` or `field[<index>]`.
fn is_list_key(key: &str, field: &str) -> bool {
    key.strip_prefix(field)
        .and_then(|rest| rest.strip_prefix('['))
        .and_then(|rest| rest.strip_suffix(']'))
        .is_some_and(|index| index.chars().all(|c| c.is_ascii_digit()))
}

fn missing_selection() -> PlannerError {
    PlannerError::invalid_input(SELECTED_COURSES_FIELD).with_reason("Invalid course selections")
}

fn selection_not_a_list() -> PlannerError {
    PlannerError::invalid_input(SELECTED_COURSES_FIELD)
        .with_reason("Invalid course selections: expected a list")
}

fn malformed_current_courses() -> PlannerError {
    PlannerError::invalid_input(CURRENT_COURSES_FIELD)
        .with_reason("Expected a JSON array of course identifiers")
}
