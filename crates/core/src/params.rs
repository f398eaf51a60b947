//! Coercion of raw form input into typed per-operation requests.
//!
//! Handlers hand over the decoded form as a string map; [`QueryRequest::parse`]
//! checks every field the operation declares and produces a variant that
//! carries the typed values. Coercion happens before any database access.

use std::collections::HashMap;

use crate::error::CoreError;
use crate::operation::Operation;

/// A fully validated request for one operation.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryRequest {
    ListTables,
    SearchMovie { movie_name: String },
    LikedMovies { user_email: String },
    SearchLocation { country: String },
    DirectorsByZip { zip_code: String },
    AwardWinners { k: i64 },
    YoungestOldestActors,
    SearchProducers { box_office_min: f64, budget_max: f64 },
    SearchMultipleRoles { rating_threshold: f64 },
    TopThrillerMoviesBoston,
    SearchMoviesByLikes { min_likes: i64, max_age: i64 },
    ActorsMarvelWarner,
    MoviesHigherThanComedyAvg,
    Top5MoviesPeopleRoles,
    ActorsWithCommonBirthday,
}

impl QueryRequest {
    /// Coerce the raw form bag into a request for `op`.
    ///
    /// Fails with [`CoreError::Validation`] naming the first offending field.
    /// Fields the operation does not declare are ignored.
    pub fn parse(op: Operation, raw: &HashMap<String, String>) -> Result<Self, CoreError> {
        let form = FormParams(raw);
        let request = match op {
            Operation::ListTables => Self::ListTables,
            Operation::SearchMovie => Self::SearchMovie {
                movie_name: form.text("movie_name")?,
            },
            Operation::LikedMovies => Self::LikedMovies {
                user_email: form.text("user_email")?,
            },
            Operation::SearchLocation => Self::SearchLocation {
                country: form.text("country")?,
            },
            Operation::DirectorsByZip => Self::DirectorsByZip {
                zip_code: form.text("zip_code")?,
            },
            Operation::AwardWinners => Self::AwardWinners {
                k: form.integer("k")?,
            },
            Operation::YoungestOldestActors => Self::YoungestOldestActors,
            Operation::SearchProducers => Self::SearchProducers {
                box_office_min: form.float("box_office_min")?,
                budget_max: form.float("budget_max")?,
            },
            Operation::SearchMultipleRoles => Self::SearchMultipleRoles {
                rating_threshold: form.float("rating_threshold")?,
            },
            Operation::TopThrillerMoviesBoston => Self::TopThrillerMoviesBoston,
            Operation::SearchMoviesByLikes => Self::SearchMoviesByLikes {
                min_likes: form.integer("min_likes")?,
                max_age: form.integer("max_age")?,
            },
            Operation::ActorsMarvelWarner => Self::ActorsMarvelWarner,
            Operation::MoviesHigherThanComedyAvg => Self::MoviesHigherThanComedyAvg,
            Operation::Top5MoviesPeopleRoles => Self::Top5MoviesPeopleRoles,
            Operation::ActorsWithCommonBirthday => Self::ActorsWithCommonBirthday,
        };
        Ok(request)
    }

    /// The operation this request answers.
    pub fn operation(&self) -> Operation {
        match self {
            Self::ListTables => Operation::ListTables,
            Self::SearchMovie { .. } => Operation::SearchMovie,
            Self::LikedMovies { .. } => Operation::LikedMovies,
            Self::SearchLocation { .. } => Operation::SearchLocation,
            Self::DirectorsByZip { .. } => Operation::DirectorsByZip,
            Self::AwardWinners { .. } => Operation::AwardWinners,
            Self::YoungestOldestActors => Operation::YoungestOldestActors,
            Self::SearchProducers { .. } => Operation::SearchProducers,
            Self::SearchMultipleRoles { .. } => Operation::SearchMultipleRoles,
            Self::TopThrillerMoviesBoston => Operation::TopThrillerMoviesBoston,
            Self::SearchMoviesByLikes { .. } => Operation::SearchMoviesByLikes,
            Self::ActorsMarvelWarner => Operation::ActorsMarvelWarner,
            Self::MoviesHigherThanComedyAvg => Operation::MoviesHigherThanComedyAvg,
            Self::Top5MoviesPeopleRoles => Operation::Top5MoviesPeopleRoles,
            Self::ActorsWithCommonBirthday => Operation::ActorsWithCommonBirthday,
        }
    }
}

// ---------------------------------------------------------------------------
// Field accessors
// ---------------------------------------------------------------------------

struct FormParams<'a>(&'a HashMap<String, String>);

impl FormParams<'_> {
    /// Trimmed value of a required field; blank counts as missing.
    fn text(&self, field: &str) -> Result<String, CoreError> {
        match self.0.get(field).map(|v| v.trim()) {
            Some(v) if !v.is_empty() => Ok(v.to_string()),
            _ => Err(CoreError::Validation(format!("{field} is required"))),
        }
    }

    fn integer(&self, field: &str) -> Result<i64, CoreError> {
        self.text(field)?
            .parse()
            .map_err(|_| CoreError::Validation(format!("{field} must be an integer")))
    }

    fn float(&self, field: &str) -> Result<f64, CoreError> {
        let value: f64 = self
            .text(field)?
            .parse()
            .map_err(|_| CoreError::Validation(format!("{field} must be a number")))?;
        if !value.is_finite() {
            return Err(CoreError::Validation(format!("{field} must be a number")));
        }
        Ok(value)
    }
}
