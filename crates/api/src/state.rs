/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable. Holds no request-scoped or mutable data.
#[derive(Clone)]
pub struct AppState {
    /// Connection factory; each request acquires and releases one connection.
    pub pool: cinequery_db::DbPool,
}
