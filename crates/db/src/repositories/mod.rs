//! Repository layer: one zero-sized struct per query family.

pub mod movie_query_repo;

pub use movie_query_repo::MovieQueryRepo;
