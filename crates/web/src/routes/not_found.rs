//! Fallback handler for unmatched routes.

use askama::Template;
use askama_web::WebTemplate;
use axum::http::{StatusCode, Uri};
use axum::response::IntoResponse;

use crate::filters;

/// Not-found page template.
///
/// Also rendered by the detail view when a question id does not resolve.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate;

/// Render the not-found page for any unmatched path.
pub async fn handler(uri: Uri) -> impl IntoResponse {
    tracing::debug!(%uri, "no route matched");
    (StatusCode::NOT_FOUND, NotFoundTemplate)
}
