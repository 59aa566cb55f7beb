//! View assembly for the planning pages.
//!
//! Each handler loads what its page needs, runs it through the planning
//! rules, and returns plain view data. Presentation is left to the caller.

use log::{debug, warn};

use super::{student_ops::join_and_report, Planner};
use crate::{
    error::{PlannerError, Result},
    models::{PlanAheadView, PlanSelection, PlannerView, SelectionView},
    params::{PlannerSubmission, PlanningContext},
    planning::{
        accumulate, active_courses, compute_completion, courses_not_taken, recommend,
        resolve_in_given_order,
    },
};

impl Planner {
    /// Build the plan-ahead page: credits completed, taken courses, and the
    /// courses still to take.
    ///
    /// # Errors
    ///
    /// * `PlannerError::StudentNotFound` - no record for the context's student
    /// * Storage errors from either read
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use trailhead_core::{params::PlanningContext, PlannerBuilder};
    /// # async {
    /// let planner = PlannerBuilder::new().build().await?;
    /// let view = planner.plan_ahead(&PlanningContext::new("102899")).await?;
    /// println!("{} credits", view.credits_completed);
    /// # Result::<(), trailhead_core::PlannerError>::Ok(())
    /// # };
    /// ```
    pub async fn plan_ahead(&self, ctx: &PlanningContext) -> Result<PlanAheadView> {
        let student = self
            .find_student(&ctx.student_id)
            .await?
            .ok_or_else(|| not_found(ctx))?;
        let catalog = self.list_courses(None).await?;
        let student = join_and_report(student, &catalog);

        let completion = compute_completion(&student, &catalog);
        debug!(
            "Student {} has {} credits and {} courses left",
            student.student_id,
            completion.credits_completed,
            completion.courses_not_taken.len()
        );

        Ok(PlanAheadView {
            name: student.name,
            credits_completed: completion.credits_completed,
            courses_taken: student.courses_taken,
            courses_not_taken: completion.courses_not_taken,
        })
    }

    /// Build the planner page: remaining courses, active courses and their
    /// recommended successors, with a fresh selection.
    ///
    /// # Errors
    ///
    /// * `PlannerError::StudentNotFound` - no record for the context's student
    /// * Storage errors from either read
    pub async fn planner_overview(&self, ctx: &PlanningContext) -> Result<PlannerView> {
        let student = self
            .find_student(&ctx.student_id)
            .await?
            .ok_or_else(|| not_found(ctx))?;
        let catalog = self.list_courses(None).await?;

        let active = active_courses(&student.current_courses, &catalog);
        let dangling: Vec<&str> = student
            .current_courses
            .iter()
            .filter(|id| !catalog.iter().any(|course| &course.id == *id))
            .map(String::as_str)
            .collect();
        if !dangling.is_empty() {
            warn!(
                "Student {} is enrolled in courses missing from the catalog: {}",
                student.student_id,
                dangling.join(", ")
            );
        }

        let recommendations = recommend(&active, &catalog);

        Ok(PlannerView {
            courses_not_taken: courses_not_taken(
                student.courses_taken.iter().map(String::as_str),
                &catalog,
            ),
            active_courses: active,
            recommendations,
            selection: PlanSelection::new(),
        })
    }

    /// Apply a planning submission to the selection it carries.
    ///
    /// The submission was validated when it was built, so the only failure
    /// left is reading the catalog.
    pub async fn submit_selection(&self, submission: PlannerSubmission) -> Result<SelectionView> {
        let catalog = self.list_courses(None).await?;

        let (selected_courses, selection) = accumulate(
            submission.current_courses,
            &submission.selected_courses,
            &catalog,
        );
        let current_courses = resolve_in_given_order(selection.ids(), &catalog);
        debug!(
            "Selection now holds {} courses ({})",
            selection.len(),
            selection.state().as_str()
        );

        Ok(SelectionView {
            selected_courses,
            current_courses,
            selection,
        })
    }
}

fn not_found(ctx: &PlanningContext) -> PlannerError {
    PlannerError::StudentNotFound {
        id: ctx.student_id.clone(),
    }
}
