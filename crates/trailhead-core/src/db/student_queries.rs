//! Student record queries.

use rusqlite::{params, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result},
    models::Student,
};

const SELECT_STUDENT_SQL: &str = "SELECT id, name FROM students WHERE id = ?1";
const SELECT_STUDENT_COURSES_SQL: &str =
    "SELECT kind, course_id FROM student_courses WHERE student_id = ?1 ORDER BY kind, position";

pub(super) const KIND_TAKEN: &str = "taken";
pub(super) const KIND_CURRENT: &str = "current";

impl super::Database {
    /// Retrieves a raw student record by identifier.
    pub fn get_student(&self, id: &str) -> Result<Option<Student>> {
        let student = self
            .connection
            .query_row(SELECT_STUDENT_SQL, params![id], |row| {
                Ok(Student {
                    student_id: row.get(0)?,
                    name: row.get(1)?,
                    courses_taken: Vec::new(),
                    current_courses: Vec::new(),
                })
            })
            .optional()
            .db_context("Failed to query student")?;

        let Some(mut student) = student else {
            return Ok(None);
        };

        let mut stmt = self
            .connection
            .prepare(SELECT_STUDENT_COURSES_SQL)
            .db_context("Failed to prepare student course query")?;
        let rows = stmt
            .query_map(params![id], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
            })
            .db_context("Failed to query student courses")?;

        for row in rows {
            let (kind, course_id) = row.db_context("Failed to read student course row")?;
            match kind.as_str() {
                KIND_TAKEN => student.courses_taken.push(course_id),
                KIND_CURRENT => student.current_courses.push(course_id),
                _ => {}
            }
        }

        Ok(Some(student))
    }
}
