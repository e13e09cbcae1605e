// File: src/server.rs
// Purpose: Router and request handlers for the contact page

use axum::{
    extract::Form,
    http::HeaderMap,
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router,
};
use tower_http::services::ServeDir;
use tracing::info;

use crate::form::ContactForm;
use crate::form_context::FormContext;
use crate::page::contact_page;
use crate::validation::{validate, ValidationOutcome};

/// Build the application router: the contact page plus its stylesheet
pub fn app() -> Router {
    Router::new()
        .route("/", get(show_form).post(submit_form))
        .nest_service("/static", ServeDir::new("static"))
}

/// GET /: the empty form
async fn show_form() -> Html<String> {
    Html(contact_page(&FormContext::empty()).into_string())
}

/// POST /: validate the submission and re-render the page with the outcome
async fn submit_form(headers: HeaderMap, Form(form): Form<ContactForm>) -> Response {
    let form = form.trimmed();
    let outcome = validate(&form);

    match &outcome {
        ValidationOutcome::Success => info!("submission valid"),
        ValidationOutcome::Failure(err) => info!(
            field = err.field.as_str(),
            message = err.message,
            "submission rejected"
        ),
    }

    // Content negotiation: JSON outcome for API clients
    if accepts_json(&headers) {
        let data = match &outcome {
            ValidationOutcome::Success => serde_json::json!({
                "status": "ok",
                "message": outcome.message(),
            }),
            ValidationOutcome::Failure(err) => serde_json::json!({
                "status": "error",
                "field": err.field.as_str(),
                "message": err.message,
            }),
        };
        return Json(data).into_response();
    }

    let ctx = FormContext::new(form, outcome);
    Html(contact_page(&ctx).into_string()).into_response()
}

fn accepts_json(headers: &HeaderMap) -> bool {
    headers
        .get("accept")
        .and_then(|v| v.to_str().ok())
        .map(|accept| accept.contains("application/json"))
        .unwrap_or(false)
}
