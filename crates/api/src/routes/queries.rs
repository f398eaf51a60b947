//! Route definitions for the query pages.
//!
//! Mounted at the root of the route tree.

use axum::routing::get;
use axum::Router;

use crate::handlers::queries;
use crate::state::AppState;

/// Query routes.
///
/// ```text
/// GET    /                      -> index
/// GET    /{operation}           -> show (run, or render the input form)
/// POST   /{operation}           -> submit (validate form, run)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(queries::index))
        .route("/{operation}", get(queries::show).post(queries::submit))
}
