//! Handlers for the query pages.
//!
//! `GET /{operation}` runs a parameterless operation or shows the input form
//! of a parameterized one. `POST /{operation}` validates the submitted form
//! and runs the query. Both resolve the identifier through
//! [`Operation::from_str`](std::str::FromStr), so unknown identifiers are 404.

use std::collections::HashMap;
use std::time::Instant;

use axum::extract::rejection::FormRejection;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Response};
use axum::{Form, Json};
use cinequery_core::operation::Operation;
use cinequery_core::params::QueryRequest;

use crate::dispatch::{self, QueryOutcome};
use crate::error::{AppError, AppResult};
use crate::format::ResponseFormat;
use crate::render;
use crate::response::{DataResponse, OperationInfo};
use crate::state::AppState;

/// GET /
///
/// Lists every operation.
pub async fn index(format: ResponseFormat) -> Response {
    match format {
        ResponseFormat::Html => Html(render::index_page()).into_response(),
        ResponseFormat::Json => {
            let data: Vec<OperationInfo> = Operation::ALL.into_iter().map(Into::into).collect();
            Json(DataResponse { data }).into_response()
        }
    }
}

/// GET /{operation}
pub async fn show(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
    format: ResponseFormat,
) -> AppResult<Response> {
    let op: Operation = identifier.parse()?;

    if op.takes_parameters() {
        return Ok(match format {
            ResponseFormat::Html => Html(render::operation_page(op, None, None)).into_response(),
            ResponseFormat::Json => Json(DataResponse {
                data: OperationInfo::from(op),
            })
            .into_response(),
        });
    }

    let request = QueryRequest::parse(op, &HashMap::new())?;
    let outcome = run(&state, &request).await?;
    Ok(respond(op, format, None, &outcome))
}

/// POST /{operation}
pub async fn submit(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
    format: ResponseFormat,
    form: Result<Form<HashMap<String, String>>, FormRejection>,
) -> AppResult<Response> {
    let op: Operation = identifier.parse()?;

    if !op.takes_parameters() {
        return Err(AppError::MethodNotAllowed(format!(
            "{op} takes no parameters; use GET"
        )));
    }

    let Form(raw) = form?;
    let request = QueryRequest::parse(op, &raw)?;
    let outcome = run(&state, &request).await?;
    Ok(respond(op, format, Some(&raw), &outcome))
}

/// Execute on a connection held for this request only.
///
/// The connection returns to the pool when `conn` drops, on every path.
async fn run(state: &AppState, request: &QueryRequest) -> AppResult<QueryOutcome> {
    let start = Instant::now();
    let mut conn = state.pool.acquire().await?;
    let outcome = dispatch::execute(&mut conn, request).await?;

    tracing::debug!(
        operation = %request.operation(),
        rows = outcome.row_count(),
        duration_ms = start.elapsed().as_millis() as u64,
        "Query executed",
    );

    Ok(outcome)
}

fn respond(
    op: Operation,
    format: ResponseFormat,
    submitted: Option<&HashMap<String, String>>,
    outcome: &QueryOutcome,
) -> Response {
    match format {
        ResponseFormat::Html => {
            Html(render::operation_page(op, submitted, Some(outcome))).into_response()
        }
        ResponseFormat::Json => Json(DataResponse { data: outcome }).into_response(),
    }
}
