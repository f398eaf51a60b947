#![allow(dead_code)]

use axum::body::Body;
use axum::http::header::{ACCEPT, CONTENT_TYPE};
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use cinequery_api::config::{LogFormat, ServerConfig};
use cinequery_api::router::build_app_router;
use cinequery_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// The database URL is never read; tests hand the router a pool directly.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "postgres://unused".to_string(),
        db_max_connections: 5,
        cors_origins: vec!["https://reports.example.com".to_string()],
        run_migrations: false,
        log_format: LogFormat::Text,
    }
}

/// Build the full application router (same middleware stack as `main.rs`)
/// on top of the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState { pool }, &test_config())
}

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

/// GET expecting an HTML page.
pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// GET with `Accept: application/json`.
pub async fn get_json(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(ACCEPT, "application/json")
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// POST a url-encoded form, optionally asking for JSON.
pub async fn post_form(app: Router, uri: &str, body: &str, json: bool) -> Response {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded");
    if json {
        builder = builder.header(ACCEPT, "application/json");
    }
    send(app, builder.body(Body::from(body.to_string())).unwrap()).await
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

/// Insert a motion picture row.
pub async fn seed_picture(pool: &PgPool, id: i64, name: &str, rating: f64, production: &str) {
    sqlx::query(
        "INSERT INTO motion_picture (id, name, rating, production, budget) \
         VALUES ($1, $2, $3, $4, 1000000)",
    )
    .bind(id)
    .bind(name)
    .bind(rating)
    .bind(production)
    .execute(pool)
    .await
    .unwrap();
}

/// Insert a person with an Actor role on `mpid`.
pub async fn seed_actor(pool: &PgPool, id: i64, name: &str, dob: &str, mpid: i64) {
    sqlx::query("INSERT INTO people (id, name, nationality, dob) VALUES ($1, $2, 'USA', $3::date)")
        .bind(id)
        .bind(name)
        .bind(dob)
        .execute(pool)
        .await
        .unwrap();
    sqlx::query("INSERT INTO role (mpid, pid, role_name) VALUES ($1, $2, 'Actor')")
        .bind(mpid)
        .bind(id)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn seed_award(pool: &PgPool, mpid: i64, pid: i64, award_name: &str, year: i32) {
    sqlx::query("INSERT INTO award (mpid, pid, award_name, award_year) VALUES ($1, $2, $3, $4)")
        .bind(mpid)
        .bind(pid)
        .bind(award_name)
        .bind(year)
        .execute(pool)
        .await
        .unwrap();
}
