//! In-memory joins between identifier lists and the catalog.

use std::collections::{HashMap, HashSet};

use crate::models::{Course, Student, StudentWithCourses};

/// Catalog courses whose identifier appears in `ids`, in catalog order.
///
/// Each catalog course appears at most once no matter how often its
/// identifier is repeated in `ids`.
pub fn resolve_in_catalog_order<S: AsRef<str>>(ids: &[S], catalog: &[Course]) -> Vec<Course> {
    let wanted: HashSet<&str> = ids.iter().map(AsRef::as_ref).collect();
    catalog
        .iter()
        .filter(|course| wanted.contains(course.id.as_str()))
        .cloned()
        .collect()
}

/// Resolve `ids` in their own order, keeping repeats and dropping identifiers
/// missing from the catalog.
pub fn resolve_in_given_order<S: AsRef<str>>(ids: &[S], catalog: &[Course]) -> Vec<Course> {
    let index = index_by_id(catalog);
    ids.iter()
        .filter_map(|id| index.get(id.as_ref()).map(|course| (*course).clone()))
        .collect()
}

/// Join a student's taken-course identifiers against the catalog.
///
/// Taken courses are a set: each identifier resolves at most once, at its
/// first position in the student's list. Identifiers with no catalog entry
/// are collected in [`StudentWithCourses::unresolved_taken`].
pub fn join_taken_courses(student: Student, catalog: &[Course]) -> StudentWithCourses {
    let index = index_by_id(catalog);
    let mut seen = HashSet::new();
    let mut courses_taken = Vec::with_capacity(student.courses_taken.len());
    let mut unresolved_taken = Vec::new();

    for id in student.courses_taken {
        if !seen.insert(id.clone()) {
            continue;
        }
        match index.get(id.as_str()) {
            Some(course) => courses_taken.push((*course).clone()),
            None => unresolved_taken.push(id),
        }
    }

    StudentWithCourses {
        student_id: student.student_id,
        name: student.name,
        courses_taken,
        current_courses: student.current_courses,
        unresolved_taken,
    }
}

fn index_by_id(catalog: &[Course]) -> HashMap<&str, &Course> {
    catalog
        .iter()
        .map(|course| (course.id.as_str(), course))
        .collect()
}
