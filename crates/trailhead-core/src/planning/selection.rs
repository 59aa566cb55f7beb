//! Plan selection accumulation.

use crate::{
    models::{Course, PlanSelection},
    planning::resolve_in_catalog_order,
};

/// Append newly selected courses to a previous selection.
///
/// New identifiers are resolved against the catalog first, so unknown ones are
/// dropped and the appended part follows catalog order. Nothing is
/// deduplicated: picking a course twice lists it twice.
///
/// Returns the resolved new courses along with the combined selection.
pub fn accumulate<S: AsRef<str>>(
    previous: PlanSelection,
    newly_selected: &[S],
    catalog: &[Course],
) -> (Vec<Course>, PlanSelection) {
    let selected = resolve_in_catalog_order(newly_selected, catalog);
    let mut selection = previous;
    selection.extend(selected.iter().map(|course| course.id.clone()));
    (selected, selection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SelectionState;

    fn catalog() -> Vec<Course> {
        ["A", "B", "C", "D"]
            .iter()
            .map(|id| Course {
                id: id.to_string(),
                course_number: None,
                credit_hours: 3,
                next_courses: vec![],
            })
            .collect()
    }

    fn selection(ids: &[&str]) -> PlanSelection {
        PlanSelection::from(ids.iter().map(|id| id.to_string()).collect::<Vec<_>>())
    }

    #[test]
    fn test_accumulate_appends_in_order() {
        let (selected, combined) = accumulate(selection(&["A", "B"]), &["C"], &catalog());

        assert_eq!(selected.len(), 1);
        assert_eq!(combined.ids(), ["A", "B", "C"]);
    }

    #[test]
    fn test_accumulate_keeps_duplicates() {
        let (_, combined) = accumulate(selection(&["A", "C"]), &["C", "A"], &catalog());
        assert_eq!(combined.ids(), ["A", "C", "A", "C"]);
    }

    #[test]
    fn test_accumulate_drops_unknown_and_uses_catalog_order() {
        let (selected, combined) = accumulate(PlanSelection::new(), &["D", "ZZZ", "B"], &catalog());

        let ids: Vec<&str> = selected.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["B", "D"]);
        assert_eq!(combined.ids(), ["B", "D"]);
    }

    #[test]
    fn test_accumulate_state_transition() {
        let (_, unchanged) = accumulate(PlanSelection::new(), &["ZZZ"], &catalog());
        assert_eq!(unchanged.state(), SelectionState::Idle);

        let (_, started) = accumulate(PlanSelection::new(), &["A"], &catalog());
        assert_eq!(started.state(), SelectionState::Accumulating);
    }
}
