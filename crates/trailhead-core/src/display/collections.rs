//! Collection wrapper types for displaying groups of courses.

use std::fmt;

use crate::models::Course;

/// Newtype wrapper for displaying a catalog listing.
///
/// Unlike the page views, each entry also shows its successor identifiers,
/// and the listing ends with the catalog's credit total.
///
/// # Examples
///
/// ```rust
/// use trailhead_core::{display::Courses, models::Course};
///
/// let courses = Courses(vec![Course {
///     id: "CS201".to_string(),
///     course_number: None,
///     credit_hours: 4,
///     next_courses: vec![],
/// }]);
/// assert_eq!(courses.total_credit_hours(), 4);
/// assert!(format!("{}", courses).contains("Total: 1 courses, 4 credit hours"));
/// ```
pub struct Courses(pub Vec<Course>);

impl Courses {
    /// Sum of credit hours over the collection.
    pub fn total_credit_hours(&self) -> u64 {
        self.0
            .iter()
            .map(|course| u64::from(course.credit_hours))
            .sum()
    }
}

impl fmt::Display for Courses {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No courses found.");
        }
        for course in &self.0 {
            write!(f, "- {course}")?;
            if !course.next_courses.is_empty() {
                write!(f, " → {}", course.next_courses.join(", "))?;
            }
            writeln!(f)?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "Total: {} courses, {} credit hours",
            self.0.len(),
            self.total_credit_hours()
        )
    }
}
