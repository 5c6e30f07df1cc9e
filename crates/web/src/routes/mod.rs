//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Redirect to /questions
//! GET  /health                 - Health check (registered in main)
//!
//! # Questions
//! GET  /questions              - Question table (q / sort / dir / page)
//! GET  /questions/new          - Create form
//! POST /questions              - Create question
//! GET  /questions/{id}         - Question detail
//! GET  /questions/{id}/edit    - Edit form
//! POST /questions/{id}         - Update question
//! POST /questions/{id}/delete  - Delete question (idempotent)
//! GET  /questions/events       - SSE stream of full-list snapshots
//!
//! # Fallback
//! *                            - Not-found page (HTTP 404)
//! ```

pub mod not_found;
pub mod questions;

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the question routes router.
pub fn question_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(questions::index).post(questions::create))
        .route("/new", get(questions::new_question))
        .route("/events", get(questions::events))
        .route("/{id}", get(questions::show).post(questions::update))
        .route("/{id}/edit", get(questions::edit))
        .route("/{id}/delete", post(questions::delete))
}

/// Create all routes for the web UI.
pub fn routes() -> Router<AppState> {
    Router::new()
        // The bare root goes straight to the table
        .route("/", get(|| async { Redirect::to("/questions") }))
        .nest("/questions", question_routes())
}
