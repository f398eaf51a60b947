//! Domain logic for the movie-industry query service.
//!
//! Everything here is pure: the closed set of operations, parameter
//! coercion, and the in-process result shaping. Database access lives in
//! `cinequery-db`, HTTP in `cinequery-api`.

pub mod error;
pub mod operation;
pub mod params;
pub mod search;
pub mod shaping;
