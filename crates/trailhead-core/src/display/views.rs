//! Display implementations for whole pages.

use std::fmt;

use super::write_course_list;
use crate::models::{PlanAheadView, PlannerView, SelectionView};

impl fmt::Display for PlanAheadView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Plan Ahead: {}", self.name)?;
        writeln!(f)?;
        writeln!(f, "- Credits completed: {}", self.credits_completed)?;
        writeln!(f, "- Courses taken: {}", self.courses_taken.len())?;
        writeln!(f, "- Courses remaining: {}", self.courses_not_taken.len())?;

        writeln!(f, "\n## Courses Taken")?;
        writeln!(f)?;
        write_course_list(f, &self.courses_taken, "No courses taken yet.")?;

        writeln!(f, "\n## Courses Not Taken")?;
        writeln!(f)?;
        write_course_list(f, &self.courses_not_taken, "Every catalog course is complete.")
    }
}

impl fmt::Display for PlannerView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Planner")?;

        writeln!(f, "\n## Active Courses")?;
        writeln!(f)?;
        write_course_list(f, &self.active_courses, "Not enrolled in any course.")?;

        writeln!(f, "\n## Recommendations")?;
        writeln!(f)?;
        if self.recommendations.is_empty() {
            writeln!(f, "No recommendations.")?;
        } else {
            for (i, recommendation) in self.recommendations.iter().enumerate() {
                if i > 0 {
                    writeln!(f)?;
                }
                write!(f, "{recommendation}")?;
            }
        }

        writeln!(f, "\n## Courses Not Taken")?;
        writeln!(f)?;
        write_course_list(f, &self.courses_not_taken, "Every catalog course is complete.")?;

        writeln!(f, "\n## Current Selection")?;
        writeln!(f)?;
        writeln!(f, "- State: {}", self.selection.state())?;
        writeln!(f, "- currentCourses: `{}`", self.selection.to_json())
    }
}

impl fmt::Display for SelectionView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Planner")?;

        writeln!(f, "\n## Selected Courses")?;
        writeln!(f)?;
        write_course_list(f, &self.selected_courses, "No known courses in this selection.")?;

        writeln!(f, "\n## Current Courses")?;
        writeln!(f)?;
        write_course_list(f, &self.current_courses, "Nothing planned yet.")?;
        let planned: u64 = self
            .current_courses
            .iter()
            .map(|c| u64::from(c.credit_hours))
            .sum();
        writeln!(f)?;
        writeln!(f, "- Credits planned: {planned}")?;

        writeln!(f, "\n## Current Selection")?;
        writeln!(f)?;
        writeln!(f, "- State: {}", self.selection.state())?;
        writeln!(f, "- currentCourses: `{}`", self.selection.to_json())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Course, PlanSelection, Recommendation};

    fn course(id: &str, credits: u32) -> Course {
        Course {
            id: id.to_string(),
            course_number: None,
            credit_hours: credits,
            next_courses: vec![],
        }
    }

    #[test]
    fn test_plan_ahead_display() {
        let view = PlanAheadView {
            name: "Ada".to_string(),
            credits_completed: 3,
            courses_taken: vec![course("CS101", 3)],
            courses_not_taken: vec![course("CS201", 4)],
        };
        let output = format!("{view}");

        assert!(output.starts_with("# Plan Ahead: Ada"));
        assert!(output.contains("- Credits completed: 3"));
        assert!(output.contains("## Courses Taken\n\n- **CS101** (3 credit hours)"));
        assert!(output.contains("## Courses Not Taken\n\n- **CS201** (4 credit hours)"));
    }

    #[test]
    fn test_plan_ahead_display_empty_history() {
        let view = PlanAheadView {
            name: "New".to_string(),
            credits_completed: 0,
            courses_taken: vec![],
            courses_not_taken: vec![],
        };
        let output = format!("{view}");
        assert!(output.contains("No courses taken yet."));
        assert!(output.contains("Every catalog course is complete."));
    }

    #[test]
    fn test_planner_display() {
        let view = PlannerView {
            courses_not_taken: vec![course("CS201", 4)],
            active_courses: vec![course("CS101", 3)],
            recommendations: vec![Recommendation {
                course: course("CS101", 3),
                recommended_courses: vec![course("CS201", 4)],
            }],
            selection: PlanSelection::new(),
        };
        let output = format!("{view}");

        assert!(output.contains("### After CS101"));
        assert!(output.contains("- State: idle"));
        assert!(output.contains("- currentCourses: `[]`"));
    }

    #[test]
    fn test_selection_display() {
        let view = SelectionView {
            selected_courses: vec![course("CS201", 4)],
            current_courses: vec![course("CS101", 3), course("CS201", 4)],
            selection: PlanSelection::from(vec!["CS101".to_string(), "CS201".to_string()]),
        };
        let output = format!("{view}");

        assert!(output.contains("- Credits planned: 7"));
        assert!(output.contains("- State: accumulating"));
        assert!(output.contains(r#"- currentCourses: `["CS101","CS201"]`"#));
    }

    #[test]
    fn test_selection_display_large_credit_total() {
        let view = SelectionView {
            selected_courses: vec![],
            current_courses: vec![course("BIG", u32::MAX), course("BIG", u32::MAX)],
            selection: PlanSelection::from(vec!["BIG".to_string(), "BIG".to_string()]),
        };
        let output = format!("{view}");

        assert!(output.contains("- Credits planned: 8589934590"));
    }
}
