//! Credit accounting.

use std::collections::HashSet;

use crate::models::{Completion, Course, StudentWithCourses};

/// Credits completed and the courses still to take.
///
/// Credits sum as `u64` over the resolved taken courses only; the not-taken
/// list is the catalog minus those courses, in catalog order.
pub fn compute_completion(student: &StudentWithCourses, catalog: &[Course]) -> Completion {
    let credits_completed = student
        .courses_taken
        .iter()
        .map(|course| u64::from(course.credit_hours))
        .sum();

    Completion {
        credits_completed,
        courses_not_taken: courses_not_taken(student.taken_ids(), catalog),
    }
}

/// Catalog courses whose identifier is not in `taken`, in catalog order.
pub fn courses_not_taken<'a, I>(taken: I, catalog: &[Course]) -> Vec<Course>
where
    I: IntoIterator<Item = &'a str>,
{
    let taken: HashSet<&str> = taken.into_iter().collect();
    catalog
        .iter()
        .filter(|course| !taken.contains(course.id.as_str()))
        .cloned()
        .collect()
}
