//! Seed document import.

use std::collections::HashSet;

use rusqlite::params;

use super::student_queries::{KIND_CURRENT, KIND_TAKEN};
use crate::{
    error::{DatabaseResultExt, PlannerError, Result},
    models::ImportSummary,
    params::SeedDocument,
};

const INSERT_COURSE_SQL: &str =
    "INSERT INTO courses (id, course_number, credit_hours) VALUES (?1, ?2, ?3)";
const INSERT_SUCCESSOR_SQL: &str =
    "INSERT INTO course_successors (course_id, position, next_course_id) VALUES (?1, ?2, ?3)";
const INSERT_STUDENT_SQL: &str = "INSERT INTO students (id, name) VALUES (?1, ?2)";
const INSERT_STUDENT_COURSE_SQL: &str =
    "INSERT INTO student_courses (student_id, kind, position, course_id) VALUES (?1, ?2, ?3, ?4)";

impl super::Database {
    /// Replaces both collections with the contents of `seed`.
    ///
    /// Runs in a single transaction: either the whole document lands or the
    /// previous contents stay untouched.
    pub fn replace_all(&mut self, seed: &SeedDocument) -> Result<ImportSummary> {
        check_unique(seed.classes.iter().map(|c| c.id.as_str()), "classes")?;
        check_unique(seed.students.iter().map(|s| s.student_id.as_str()), "students")?;

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute_batch(
            "DELETE FROM student_courses; DELETE FROM students; \
             DELETE FROM course_successors; DELETE FROM courses;",
        )
        .db_context("Failed to clear collections")?;

        for course in &seed.classes {
            tx.execute(
                INSERT_COURSE_SQL,
                params![course.id, course.course_number, course.credit_hours],
            )
            .db_context("Failed to insert course")?;

            for (position, next) in course.next_courses.iter().enumerate() {
                tx.execute(INSERT_SUCCESSOR_SQL, params![course.id, position as i64, next])
                    .db_context("Failed to insert successor")?;
            }
        }

        for student in &seed.students {
            tx.execute(INSERT_STUDENT_SQL, params![student.student_id, student.name])
                .db_context("Failed to insert student")?;

            let lists = [
                (KIND_TAKEN, &student.courses_taken),
                (KIND_CURRENT, &student.current_courses),
            ];
            for (kind, ids) in lists {
                for (position, course_id) in ids.iter().enumerate() {
                    tx.execute(
                        INSERT_STUDENT_COURSE_SQL,
                        params![student.student_id, kind, position as i64, course_id],
                    )
                    .db_context("Failed to insert student course")?;
                }
            }
        }

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(ImportSummary {
            courses: seed.classes.len(),
            students: seed.students.len(),
        })
    }
}

fn check_unique<'a>(ids: impl Iterator<Item = &'a str>, field: &str) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(PlannerError::invalid_input(field)
                .with_reason(format!("Duplicate identifier '{id}'")));
        }
    }
    Ok(())
}
