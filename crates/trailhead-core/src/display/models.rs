//! Display implementations for single records.

use std::fmt;

use super::write_course_list;
use crate::models::{Course, Recommendation, SelectionState};

impl fmt::Display for SelectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = if self.credit_hours == 1 { "credit hour" } else { "credit hours" };
        match &self.course_number {
            Some(number) if number != &self.id => {
                write!(f, "**{number}** [{}] ({} {unit})", self.id, self.credit_hours)
            }
            _ => write!(f, "**{}** ({} {unit})", self.id, self.credit_hours),
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### After {}", self.course.label())?;
        writeln!(f)?;
        write_course_list(f, &self.recommended_courses, "No recommendations.")
    }
}
