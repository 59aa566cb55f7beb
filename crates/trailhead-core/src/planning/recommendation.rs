//! Successor-based course recommendations.

use crate::{
    models::{Course, Recommendation},
    planning::resolve_in_catalog_order,
};

/// Catalog courses the student is enrolled in, in catalog order.
pub fn active_courses<S: AsRef<str>>(current_courses: &[S], catalog: &[Course]) -> Vec<Course> {
    resolve_in_catalog_order(current_courses, catalog)
}

/// Pair each active course with the catalog courses it leads into.
///
/// A course never recommends itself, recommended courses keep catalog order,
/// and an active course none of whose successors resolve yields no entry.
pub fn recommend(active_courses: &[Course], catalog: &[Course]) -> Vec<Recommendation> {
    active_courses
        .iter()
        .filter_map(|active| {
            let recommended_courses: Vec<Course> = catalog
                .iter()
                .filter(|candidate| candidate.id != active.id && active.leads_to(&candidate.id))
                .cloned()
                .collect();

            (!recommended_courses.is_empty()).then(|| Recommendation {
                course: active.clone(),
                recommended_courses,
            })
        })
        .collect()
}
