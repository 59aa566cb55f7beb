//! Catalog queries.

use std::collections::HashMap;

use crate::{
    error::{DatabaseResultExt, Result},
    models::Course,
    params::CourseFields,
};

const SELECT_COURSES_SQL: &str =
    "SELECT id, course_number, credit_hours FROM courses ORDER BY seq";
const SELECT_SUCCESSORS_SQL: &str =
    "SELECT course_id, next_course_id FROM course_successors ORDER BY course_id, position";

impl super::Database {
    /// Lists the whole catalog in import order.
    ///
    /// Successor lists are only loaded when `fields.next_courses` is set;
    /// otherwise they are left empty.
    pub fn list_courses(&self, fields: CourseFields) -> Result<Vec<Course>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_COURSES_SQL)
            .db_context("Failed to prepare course query")?;

        let mut courses = stmt
            .query_map([], |row| {
                Ok(Course {
                    id: row.get(0)?,
                    course_number: row.get(1)?,
                    credit_hours: row.get(2)?,
                    next_courses: Vec::new(),
                })
            })
            .db_context("Failed to query courses")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read course row")?;

        if fields.next_courses {
            let mut successors = self.successor_map()?;
            for course in &mut courses {
                if let Some(next) = successors.remove(&course.id) {
                    course.next_courses = next;
                }
            }
        }

        Ok(courses)
    }

    fn successor_map(&self) -> Result<HashMap<String, Vec<String>>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_SUCCESSORS_SQL)
            .db_context("Failed to prepare successor query")?;

        let rows = stmt
            .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)))
            .db_context("Failed to query successors")?;

        let mut map: HashMap<String, Vec<String>> = HashMap::new();
        for row in rows {
            let (course_id, next_id) = row.db_context("Failed to read successor row")?;
            map.entry(course_id).or_default().push(next_id);
        }
        Ok(map)
    }
}
