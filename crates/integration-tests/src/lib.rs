//! Integration tests for Question Desk.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the server (seeds a fresh synthetic dataset)
//! cargo run -p question-desk-web
//!
//! # Run integration tests against it
//! cargo test -p question-desk-integration-tests -- --ignored
//! ```
//!
//! The tests talk to a running server over HTTP; they are `#[ignore]`d so a
//! plain `cargo test` stays self-contained. Point them at a non-default
//! server with `QUESTION_DESK_BASE_URL`.

/// Base URL for the web server (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("QUESTION_DESK_BASE_URL")
        .unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Create an HTTP client for tests.
///
/// # Panics
///
/// Panics if the client cannot be constructed; tests cannot proceed
/// without one.
#[must_use]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .build()
        .expect("Failed to create HTTP client")
}
