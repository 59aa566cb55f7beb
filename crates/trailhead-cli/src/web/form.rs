//! Request body extraction for planning submissions.
//!
//! Accepts urlencoded forms and JSON bodies. Both are validated into a
//! [`PlannerSubmission`] before the handler runs, so a rejected submission
//! never touches storage.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form, Json,
};
use serde_json::Value;
use trailhead_core::{params::PlannerSubmission, PlannerError};

use super::errors::WebError;

/// A validated planning submission extracted from the request body.
#[derive(Debug)]
pub struct SubmissionBody(pub PlannerSubmission);

#[async_trait]
impl<S> FromRequest<S> for SubmissionBody
where
    S: Send + Sync,
{
    type Rejection = WebError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let submission = if is_json(&req) {
            let Json(body) = Json::<Value>::from_request(req, state)
                .await
                .map_err(|e| invalid_body(e.body_text()))?;
            PlannerSubmission::from_json(&body)?
        } else {
            let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                .await
                .map_err(|e| invalid_body(e.body_text()))?;
            PlannerSubmission::from_form_pairs(&pairs)?
        };
        Ok(Self(submission))
    }
}

fn is_json(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"))
}

fn invalid_body(reason: String) -> WebError {
    WebError(PlannerError::invalid_input("body").with_reason(reason))
}
