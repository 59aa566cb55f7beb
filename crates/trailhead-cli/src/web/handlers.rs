//! Route handlers for the planning pages.

use std::sync::Arc;

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use log::debug;

use super::{errors::WebError, form::SubmissionBody, AppState};

type AppStateArc = Arc<AppState>;

const INDEX: &str = "# Trailhead\n\n\
- [Plan ahead](/planAhead): credits completed and courses left\n\
- [Planner](/planner): recommendations for your next courses\n";

/// A rendered markdown page.
pub struct Markdown(pub String);

impl IntoResponse for Markdown {
    fn into_response(self) -> Response {
        (
            [(header::CONTENT_TYPE, "text/markdown; charset=utf-8")],
            self.0,
        )
            .into_response()
    }
}

pub async fn index() -> Markdown {
    Markdown(INDEX.to_string())
}

pub async fn plan_ahead(State(state): State<AppStateArc>) -> Result<Markdown, WebError> {
    let ctx = state.context();
    debug!("GET /planAhead for student {}", ctx.student_id);

    let view = state.planner.plan_ahead(&ctx).await?;
    Ok(Markdown(view.to_string()))
}

pub async fn planner_page(State(state): State<AppStateArc>) -> Result<Markdown, WebError> {
    let ctx = state.context();
    debug!("GET /planner for student {}", ctx.student_id);

    let view = state.planner.planner_overview(&ctx).await?;
    Ok(Markdown(view.to_string()))
}

pub async fn submit_planner(
    State(state): State<AppStateArc>,
    SubmissionBody(submission): SubmissionBody,
) -> Result<Markdown, WebError> {
    debug!(
        "POST /planner with {} selected and {} carried over",
        submission.selected_courses.len(),
        submission.current_courses.len()
    );

    let view = state.planner.submit_selection(submission).await?;
    Ok(Markdown(view.to_string()))
}
