//! Student operations for the Planner.

use log::warn;
use tokio::task;

use super::Planner;
use crate::{
    db::Database,
    error::Result,
    models::{Course, Student, StudentWithCourses},
    planning::join_taken_courses,
};

impl Planner {
    /// Retrieves a raw student record by identifier.
    pub async fn find_student(&self, student_id: &str) -> Result<Option<Student>> {
        let db_path = self.db_path.clone();
        let student_id = student_id.to_string();

        let handle = task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_student(&student_id)
        });
        self.bounded("find_student", handle).await
    }

    /// Retrieves a student with taken courses resolved against the catalog.
    ///
    /// The student and the catalog are read separately and joined in memory,
    /// so the two reads may observe different points in time. Taken
    /// identifiers with no catalog entry are logged and left out of
    /// [`StudentWithCourses::courses_taken`].
    pub async fn find_student_with_taken_courses(
        &self,
        student_id: &str,
    ) -> Result<Option<StudentWithCourses>> {
        let Some(student) = self.find_student(student_id).await? else {
            return Ok(None);
        };
        let catalog = self.list_courses(None).await?;
        Ok(Some(join_and_report(student, &catalog)))
    }
}

/// Join taken courses against an already loaded catalog, logging identifiers
/// that do not resolve.
pub(super) fn join_and_report(student: Student, catalog: &[Course]) -> StudentWithCourses {
    let joined = join_taken_courses(student, catalog);
    if !joined.unresolved_taken.is_empty() {
        warn!(
            "Student {} lists taken courses missing from the catalog: {}",
            joined.student_id,
            joined.unresolved_taken.join(", ")
        );
    }
    joined
}
