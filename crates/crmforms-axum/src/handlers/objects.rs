//! List page, edit form and submit handlers.

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::http::header::CONTENT_TYPE;
use axum::response::{Html, Redirect};
use crmforms_core::{FormSubmission, ObjectPortError};
use minijinja::context;
use serde::Deserialize;

use crate::error::{HttpError, HttpResult, page_status};
use crate::state::AppState;

/// Query of the edit form route.
#[derive(Debug, Deserialize)]
pub struct EditQuery {
    /// Object to edit; absent or blank opens a create form
    pub id: Option<String>,
}

/// `GET /` - render every object of the collection.
pub async fn list(State(state): State<AppState>) -> HttpResult<Html<String>> {
    let schema = state.objects.schema();
    let objects = state
        .objects
        .list()
        .await
        .map_err(|e| failure_page(&state, &schema.list_title, &e))?;

    let body = state.templates.render(
        "list.html",
        context! {
            title => schema.list_title,
            columns => schema.fields,
            objects => objects,
        },
    )?;
    Ok(Html(body))
}

/// `GET /update-cobj` - render the edit form, pre-filled when `id` is given.
pub async fn edit(
    State(state): State<AppState>,
    Query(query): Query<EditQuery>,
) -> HttpResult<Html<String>> {
    let schema = state.objects.schema();
    let object = state
        .objects
        .edit_form(query.id.as_deref())
        .await
        .map_err(|e| failure_page(&state, &schema.detail_title, &e))?;

    let body = state.templates.render(
        "edit.html",
        context! {
            title => schema.detail_title,
            object => object,
        },
    )?;
    Ok(Html(body))
}

/// `POST /update-cobj` - create or update, then redirect to the list.
///
/// Accepts url-encoded forms and JSON bodies.
pub async fn submit(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> HttpResult<Redirect> {
    let form = decode_form(&headers, &body)?;
    let schema = state.objects.schema();

    match state.objects.submit(&form).await {
        Ok(outcome) => {
            tracing::info!(collection = %schema.collection, ?outcome, "Object saved");
            Ok(Redirect::to("/"))
        }
        Err(e) => {
            tracing::error!(
                collection = %schema.collection,
                id = form.identifier(),
                error = %e,
                "Failed to save object"
            );
            Err(HttpError::SubmitFailed(schema.submit_error_message.clone()))
        }
    }
}

fn decode_form(headers: &HeaderMap, body: &[u8]) -> Result<FormSubmission, HttpError> {
    let is_json = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"));

    if is_json {
        Ok(FormSubmission::from_json(body)?)
    } else {
        Ok(FormSubmission::from_urlencoded(body))
    }
}

/// Log a failed read and render the error page for it.
fn failure_page(state: &AppState, title: &str, err: &ObjectPortError) -> HttpError {
    let status = page_status(err);
    tracing::error!(
        collection = %state.objects.schema().collection,
        status = status.as_u16(),
        error = %err,
        "Remote read failed"
    );

    let rendered = state.templates.render(
        "error.html",
        context! {
            title => title,
            status => status.as_u16(),
            message => err.to_string(),
        },
    );
    match rendered {
        Ok(body) => HttpError::Page { status, body },
        Err(e) => HttpError::Template(e),
    }
}
