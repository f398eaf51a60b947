//! Cinequery API server library.
//!
//! Exposes the building blocks (config, state, error handling, dispatch,
//! rendering, routes) so integration tests and the binary entrypoint can
//! both access them.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod format;
pub mod handlers;
pub mod render;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
