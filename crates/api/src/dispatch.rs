//! Execution of a validated [`QueryRequest`] against the store.
//!
//! Each request variant maps to exactly one repository call. Typed rows are
//! flattened into JSON objects keyed by column so rendering can stay generic
//! over the operation's column list.

use cinequery_core::params::QueryRequest;
use cinequery_core::shaping::{split_by_age_extremes, AgeExtremes};
use cinequery_db::repositories::MovieQueryRepo;
use serde::Serialize;
use serde_json::Value;
use sqlx::PgConnection;

use crate::error::{AppError, AppResult};

/// The final result of an operation, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QueryOutcome {
    /// Rows in query order.
    Rows(Vec<Value>),
    /// Youngest and oldest award-winning actors.
    AgeExtremes(AgeExtremes<Value>),
}

impl QueryOutcome {
    /// Total number of rows across all groups.
    pub fn row_count(&self) -> usize {
        match self {
            Self::Rows(rows) => rows.len(),
            Self::AgeExtremes(groups) => groups.youngest.len() + groups.oldest.len(),
        }
    }
}

/// Run the single statement behind `request` on `conn` and shape its result.
pub async fn execute(conn: &mut PgConnection, request: &QueryRequest) -> AppResult<QueryOutcome> {
    let outcome = match request {
        QueryRequest::ListTables => rows(MovieQueryRepo::list_tables(conn).await?)?,
        QueryRequest::SearchMovie { movie_name } => {
            rows(MovieQueryRepo::search_movie(conn, movie_name).await?)?
        }
        QueryRequest::LikedMovies { user_email } => {
            rows(MovieQueryRepo::liked_movies(conn, user_email).await?)?
        }
        QueryRequest::SearchLocation { country } => {
            rows(MovieQueryRepo::search_location(conn, country).await?)?
        }
        QueryRequest::DirectorsByZip { zip_code } => {
            rows(MovieQueryRepo::directors_by_zip(conn, zip_code).await?)?
        }
        QueryRequest::AwardWinners { k } => {
            rows(MovieQueryRepo::award_winners(conn, *k).await?)?
        }
        QueryRequest::YoungestOldestActors => {
            let ages = MovieQueryRepo::actor_award_ages(conn).await?;
            let groups = split_by_age_extremes(ages, |row| row.age);
            QueryOutcome::AgeExtremes(AgeExtremes {
                youngest: to_values(groups.youngest)?,
                oldest: to_values(groups.oldest)?,
            })
        }
        QueryRequest::SearchProducers {
            box_office_min,
            budget_max,
        } => rows(MovieQueryRepo::search_producers(conn, *box_office_min, *budget_max).await?)?,
        QueryRequest::SearchMultipleRoles { rating_threshold } => {
            rows(MovieQueryRepo::search_multiple_roles(conn, *rating_threshold).await?)?
        }
        QueryRequest::TopThrillerMoviesBoston => {
            rows(MovieQueryRepo::top_thriller_movies_boston(conn).await?)?
        }
        QueryRequest::SearchMoviesByLikes { min_likes, max_age } => {
            rows(MovieQueryRepo::search_movies_by_likes(conn, *min_likes, *max_age).await?)?
        }
        QueryRequest::ActorsMarvelWarner => {
            rows(MovieQueryRepo::actors_marvel_warner(conn).await?)?
        }
        QueryRequest::MoviesHigherThanComedyAvg => {
            rows(MovieQueryRepo::movies_higher_than_comedy_avg(conn).await?)?
        }
        QueryRequest::Top5MoviesPeopleRoles => {
            rows(MovieQueryRepo::top_5_movies_people_roles(conn).await?)?
        }
        QueryRequest::ActorsWithCommonBirthday => {
            rows(MovieQueryRepo::actors_with_common_birthday(conn).await?)?
        }
    };
    Ok(outcome)
}

fn rows<T: Serialize>(rows: Vec<T>) -> AppResult<QueryOutcome> {
    to_values(rows).map(QueryOutcome::Rows)
}

fn to_values<T: Serialize>(rows: Vec<T>) -> AppResult<Vec<Value>> {
    rows.iter()
        .map(|row| {
            serde_json::to_value(row)
                .map_err(|e| AppError::InternalError(format!("Failed to serialize row: {e}")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn rows_become_objects_keyed_by_field() {
        #[derive(Serialize)]
        struct Row {
            name: &'static str,
            rating: Option<f64>,
        }

        let outcome = rows(vec![
            Row {
                name: "Alpha",
                rating: Some(7.5),
            },
            Row {
                name: "Beta",
                rating: None,
            },
        ])
        .unwrap();

        assert_eq!(
            outcome,
            QueryOutcome::Rows(vec![
                json!({"name": "Alpha", "rating": 7.5}),
                json!({"name": "Beta", "rating": null}),
            ])
        );
        assert_eq!(outcome.row_count(), 2);
    }

    #[test]
    fn age_extremes_serialize_as_two_named_groups() {
        let outcome = QueryOutcome::AgeExtremes(AgeExtremes {
            youngest: vec![json!({"name": "Kid", "age": 20})],
            oldest: vec![],
        });

        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({"youngest": [{"name": "Kid", "age": 20}], "oldest": []})
        );
        assert_eq!(outcome.row_count(), 1);
    }

    #[test]
    fn plain_rows_serialize_as_array() {
        let outcome = QueryOutcome::Rows(vec![json!({"table_name": "movie"})]);
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!([{"table_name": "movie"}])
        );
    }
}
