//! Question route handlers.
//!
//! The table, detail, create/edit forms and delete action over the question
//! store, plus an SSE endpoint that streams the store's snapshot stream.

use std::convert::Infallible;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{
        IntoResponse, Redirect, Response,
        sse::{Event, KeepAlive, Sse},
    },
};
use serde::Deserialize;
use tracing::instrument;

use question_desk_core::{Broker, BrokerId, Email, QuestionId};
use question_desk_store::{Question, QuestionDraft, QuestionPatch, StoreError};

use crate::error::AppError;
use crate::filters;
use crate::routes::not_found::NotFoundTemplate;
use crate::state::AppState;

/// Rows shown per table page.
const PER_PAGE: usize = 10;

/// Question row for the table template.
#[derive(Debug, Clone)]
pub struct QuestionRow {
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub broker: &'static str,
}

impl From<&Question> for QuestionRow {
    fn from(q: &Question) -> Self {
        Self {
            id: q.id.as_i32(),
            name: q.name.clone(),
            phone: q.phone.clone(),
            email: q.email.clone(),
            broker: Broker::label_for(q.broker),
        }
    }
}

/// Question display data for the detail template.
#[derive(Debug, Clone)]
pub struct QuestionView {
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub broker: &'static str,
    pub message: String,
}

impl From<&Question> for QuestionView {
    fn from(q: &Question) -> Self {
        Self {
            id: q.id.as_i32(),
            name: q.name.clone(),
            phone: q.phone.clone(),
            email: q.email.clone(),
            broker: Broker::label_for(q.broker),
            message: q.message.clone(),
        }
    }
}

/// Broker entry for form select boxes.
#[derive(Debug, Clone)]
pub struct BrokerOption {
    pub value: i32,
    pub label: &'static str,
    pub selected: bool,
}

fn broker_options(selected: Option<BrokerId>) -> Vec<BrokerOption> {
    Broker::all()
        .iter()
        .map(|b| BrokerOption {
            value: b.id.as_i32(),
            label: b.label,
            selected: selected == Some(b.id),
        })
        .collect()
}

/// Sortable table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Id,
    Name,
    Phone,
    Email,
}

impl SortKey {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Email => "email",
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    const fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Table query parameters.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub q: Option<String>,
    pub sort: Option<SortKey>,
    pub dir: Option<SortDir>,
    pub page: Option<usize>,
}

/// A sortable column header with its toggle link.
#[derive(Debug, Clone)]
pub struct ColumnHeader {
    pub label: &'static str,
    pub href: String,
    pub indicator: &'static str,
}

/// Form payload for create and update.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionFormInput {
    pub name: String,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub broker: i32,
    pub message: String,
}

impl From<&Question> for QuestionFormInput {
    fn from(q: &Question) -> Self {
        Self {
            name: q.name.clone(),
            phone: q.phone.clone(),
            email: q.email.clone(),
            broker: q.broker.as_i32(),
            message: q.message.clone(),
        }
    }
}

/// Question table page template.
#[derive(Template, WebTemplate)]
#[template(path = "questions/index.html")]
pub struct QuestionsIndexTemplate {
    pub questions: Vec<QuestionRow>,
    pub columns: Vec<ColumnHeader>,
    pub search_query: String,
    pub sort_param: &'static str,
    pub dir_param: &'static str,
    pub total_count: usize,
    pub current_page: usize,
    pub total_pages: usize,
    pub prev_href: Option<String>,
    pub next_href: Option<String>,
}

/// Question detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "questions/show.html")]
pub struct QuestionShowTemplate {
    pub question: QuestionView,
}

/// Create form template.
#[derive(Template, WebTemplate)]
#[template(path = "questions/new.html")]
pub struct QuestionNewTemplate {
    pub error: Option<String>,
    pub brokers: Vec<BrokerOption>,
    pub form: QuestionFormInput,
}

/// Edit form template.
#[derive(Template, WebTemplate)]
#[template(path = "questions/edit.html")]
pub struct QuestionEditTemplate {
    pub id: i32,
    pub error: Option<String>,
    pub brokers: Vec<BrokerOption>,
    pub form: QuestionFormInput,
}

/// Display the question table.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> impl IntoResponse {
    let needle = query.q.unwrap_or_default();
    let sort = query.sort.unwrap_or(SortKey::Id);
    let dir = query.dir.unwrap_or(SortDir::Asc);

    let mut records = state.store().filter(&needle);
    sort_records(&mut records, sort, dir);

    let total_count = records.len();
    let total_pages = total_count.div_ceil(PER_PAGE).max(1);
    let current_page = query.page.unwrap_or(1).clamp(1, total_pages);

    let questions: Vec<QuestionRow> = records
        .iter()
        .skip((current_page - 1) * PER_PAGE)
        .take(PER_PAGE)
        .map(QuestionRow::from)
        .collect();

    let columns = column_headers(&needle, sort, dir);
    let prev_href = (current_page > 1).then(|| list_href(&needle, sort, dir, current_page - 1));
    let next_href =
        (current_page < total_pages).then(|| list_href(&needle, sort, dir, current_page + 1));

    QuestionsIndexTemplate {
        questions,
        columns,
        search_query: needle,
        sort_param: sort.as_str(),
        dir_param: dir.as_str(),
        total_count,
        current_page,
        total_pages,
        prev_href,
        next_href,
    }
}

/// Display the question detail page.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let Some(id) = parse_id(&id) else {
        return not_found_page();
    };

    match state.store().get(id) {
        Ok(question) => QuestionShowTemplate {
            question: QuestionView::from(&question),
        }
        .into_response(),
        Err(_) => not_found_page(),
    }
}

/// Display the create form.
pub async fn new_question() -> impl IntoResponse {
    QuestionNewTemplate {
        error: None,
        brokers: broker_options(None),
        form: QuestionFormInput::default(),
    }
}

/// Create a question from form input.
#[instrument(skip(state))]
pub async fn create(
    State(state): State<AppState>,
    Form(input): Form<QuestionFormInput>,
) -> Response {
    let draft = match draft_from_form(&input) {
        Ok(draft) => draft,
        Err(message) => return new_form_with_error(input, message),
    };

    match state.store().add(draft) {
        Ok(question) => {
            tracing::info!(id = %question.id, "Question created");
            Redirect::to("/questions").into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to create question");
            new_form_with_error(input, e.to_string())
        }
    }
}

/// Display the edit form.
#[instrument(skip(state))]
pub async fn edit(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let Some(id) = parse_id(&id) else {
        return not_found_page();
    };

    match state.store().get(id) {
        Ok(question) => QuestionEditTemplate {
            id: id.as_i32(),
            error: None,
            brokers: broker_options(Some(question.broker)),
            form: QuestionFormInput::from(&question),
        }
        .into_response(),
        Err(_) => not_found_page(),
    }
}

/// Update a question from form input.
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Form(input): Form<QuestionFormInput>,
) -> Result<Response, AppError> {
    let id = parse_id(&raw_id)
        .ok_or_else(|| AppError::BadRequest(format!("invalid question id: {raw_id}")))?;

    let patch = match patch_from_form(&input) {
        Ok(patch) => patch,
        Err(message) => return Ok(edit_form_with_error(id, input, message)),
    };

    match state.store().update(id, patch) {
        Ok(question) => {
            tracing::info!(id = %question.id, "Question updated");
            Ok(Redirect::to("/questions").into_response())
        }
        Err(StoreError::Validation(e)) => {
            tracing::warn!(%id, error = %e, "Failed to update question");
            Ok(edit_form_with_error(id, input, e.to_string()))
        }
        // The record vanished between opening the form and submitting it
        Err(e @ StoreError::NotFound(_)) => Err(e.into()),
    }
}

/// Delete a question. Deleting an absent record is a no-op.
#[instrument(skip(state))]
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Redirect, AppError> {
    let id = parse_id(&raw_id)
        .ok_or_else(|| AppError::BadRequest(format!("invalid question id: {raw_id}")))?;

    if state.store().remove(id) {
        tracing::info!(%id, "Question deleted");
    }
    Ok(Redirect::to("/questions"))
}

/// Stream the store's snapshot stream as server-sent events.
///
/// Emits the current full record list immediately, then once per mutation.
pub async fn events(
    State(state): State<AppState>,
) -> Sse<impl futures::Stream<Item = Result<Event, Infallible>>> {
    let mut rx = state.store().subscribe();

    let sse_stream = async_stream::stream! {
        loop {
            let snapshot = rx.borrow_and_update().clone();
            let json = serde_json::to_string(&snapshot).unwrap_or_else(|_| "[]".to_string());
            yield Ok(Event::default().event("snapshot").data(json));

            if rx.changed().await.is_err() {
                break;
            }
        }
    };

    Sse::new(sse_stream).keep_alive(KeepAlive::default())
}

// =============================================================================
// Helpers
// =============================================================================

fn parse_id(raw: &str) -> Option<QuestionId> {
    raw.parse::<i32>().ok().map(QuestionId::new)
}

fn not_found_page() -> Response {
    (StatusCode::NOT_FOUND, NotFoundTemplate).into_response()
}

/// Validate form input at the presentation boundary and build a draft.
///
/// Email syntax is enforced here (the store keeps email as a free string);
/// name and broker constraints are the store's job.
fn draft_from_form(input: &QuestionFormInput) -> Result<QuestionDraft, String> {
    let email = Email::parse(input.email.trim()).map_err(|e| e.to_string())?;

    Ok(QuestionDraft {
        name: input.name.trim().to_string(),
        phone: input.phone.trim().to_string(),
        email: email.into_inner(),
        broker: BrokerId::new(input.broker),
        message: input.message.clone(),
    })
}

/// The edit dialog submits every field, so the patch supplies all of them;
/// an emptied message is an explicit clear.
fn patch_from_form(input: &QuestionFormInput) -> Result<QuestionPatch, String> {
    let draft = draft_from_form(input)?;

    Ok(QuestionPatch {
        name: Some(draft.name),
        phone: Some(draft.phone),
        email: Some(draft.email),
        broker: Some(draft.broker),
        message: Some(draft.message),
    })
}

fn new_form_with_error(input: QuestionFormInput, message: String) -> Response {
    let brokers = broker_options(Some(BrokerId::new(input.broker)));
    QuestionNewTemplate {
        error: Some(message),
        brokers,
        form: input,
    }
    .into_response()
}

fn edit_form_with_error(id: QuestionId, input: QuestionFormInput, message: String) -> Response {
    let brokers = broker_options(Some(BrokerId::new(input.broker)));
    QuestionEditTemplate {
        id: id.as_i32(),
        error: Some(message),
        brokers,
        form: input,
    }
    .into_response()
}

fn sort_records(records: &mut [Question], key: SortKey, dir: SortDir) {
    records.sort_by(|a, b| {
        let ordering = match key {
            SortKey::Id => a.id.cmp(&b.id),
            SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortKey::Phone => a.phone.cmp(&b.phone),
            SortKey::Email => a.email.to_lowercase().cmp(&b.email.to_lowercase()),
        };
        match dir {
            SortDir::Asc => ordering,
            SortDir::Desc => ordering.reverse(),
        }
    });
}

/// Column headers in table order; the active column's link toggles the
/// direction, any other column starts ascending. Changing the sort resets
/// to the first page.
fn column_headers(needle: &str, sort: SortKey, dir: SortDir) -> Vec<ColumnHeader> {
    [
        ("Name", SortKey::Name),
        ("Phone", SortKey::Phone),
        ("Email", SortKey::Email),
        ("Id", SortKey::Id),
    ]
    .into_iter()
    .map(|(label, key)| {
        let (link_dir, indicator) = if key == sort {
            (
                dir.toggled(),
                match dir {
                    SortDir::Asc => " \u{2191}",
                    SortDir::Desc => " \u{2193}",
                },
            )
        } else {
            (SortDir::Asc, "")
        };
        ColumnHeader {
            label,
            href: list_href(needle, key, link_dir, 1),
            indicator,
        }
    })
    .collect()
}

fn list_href(needle: &str, sort: SortKey, dir: SortDir, page: usize) -> String {
    let mut href = format!("/questions?sort={}&dir={}", sort.as_str(), dir.as_str());
    if page > 1 {
        href.push_str(&format!("&page={page}"));
    }
    if !needle.is_empty() {
        href.push_str(&format!("&q={}", urlencoding::encode(needle)));
    }
    href
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: i32, name: &str, phone: &str, email: &str) -> Question {
        Question {
            id: QuestionId::new(id),
            name: name.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
            broker: BrokerId::new(1),
            message: String::new(),
        }
    }

    #[test]
    fn test_sort_by_name_is_case_insensitive() {
        let mut records = vec![
            question(1, "zoe", "1", "z@x.com"),
            question(2, "Ana", "2", "a@x.com"),
        ];
        sort_records(&mut records, SortKey::Name, SortDir::Asc);
        let names: Vec<&str> = records.iter().map(|q| q.name.as_str()).collect();
        assert_eq!(names, vec!["Ana", "zoe"]);
    }

    #[test]
    fn test_sort_by_id_desc() {
        let mut records = vec![
            question(1, "a", "1", "a@x.com"),
            question(3, "b", "2", "b@x.com"),
            question(2, "c", "3", "c@x.com"),
        ];
        sort_records(&mut records, SortKey::Id, SortDir::Desc);
        let ids: Vec<i32> = records.iter().map(|q| q.id.as_i32()).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_list_href_encodes_query() {
        let href = list_href("ana garcia", SortKey::Name, SortDir::Desc, 2);
        assert_eq!(href, "/questions?sort=name&dir=desc&page=2&q=ana%20garcia");
    }

    #[test]
    fn test_list_href_omits_empty_parts() {
        let href = list_href("", SortKey::Id, SortDir::Asc, 1);
        assert_eq!(href, "/questions?sort=id&dir=asc");
    }

    #[test]
    fn test_column_headers_toggle_active_column() {
        let headers = column_headers("", SortKey::Name, SortDir::Asc);
        let name = headers.iter().find(|h| h.label == "Name").expect("Name");
        assert!(name.href.contains("sort=name&dir=desc"));
        assert_eq!(name.indicator, " \u{2191}");

        let phone = headers.iter().find(|h| h.label == "Phone").expect("Phone");
        assert!(phone.href.contains("sort=phone&dir=asc"));
        assert_eq!(phone.indicator, "");
    }

    #[test]
    fn test_draft_from_form_rejects_bad_email() {
        let input = QuestionFormInput {
            name: "Ana".to_string(),
            phone: "555".to_string(),
            email: "not-an-email".to_string(),
            broker: 1,
            message: String::new(),
        };
        assert!(draft_from_form(&input).is_err());
    }

    #[test]
    fn test_draft_from_form_trims_fields() {
        let input = QuestionFormInput {
            name: "  Ana  ".to_string(),
            phone: " 555 ".to_string(),
            email: " ana@example.com ".to_string(),
            broker: 1,
            message: "hi".to_string(),
        };
        let draft = draft_from_form(&input).expect("valid form");
        assert_eq!(draft.name, "Ana");
        assert_eq!(draft.phone, "555");
        assert_eq!(draft.email, "ana@example.com");
    }

    #[test]
    fn test_patch_from_form_supplies_every_field() {
        let input = QuestionFormInput {
            name: "Ana".to_string(),
            phone: "555".to_string(),
            email: "ana@example.com".to_string(),
            broker: 2,
            message: String::new(),
        };
        let patch = patch_from_form(&input).expect("valid form");
        assert_eq!(patch.name.as_deref(), Some("Ana"));
        assert_eq!(patch.broker, Some(BrokerId::new(2)));
        // submitting an empty message is an explicit clear, not an omission
        assert_eq!(patch.message.as_deref(), Some(""));
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("7"), Some(QuestionId::new(7)));
        assert_eq!(parse_id("x"), None);
        assert_eq!(parse_id(""), None);
    }
}
