//! Result rows keyed on a person.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DirectorSeries {
    pub director_name: String,
    pub series_name: String,
}

/// Awards one person received for one picture in one year.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PersonAwardCount {
    pub person_name: String,
    pub picture_name: String,
    pub award_year: i32,
    pub award_count: i64,
}

/// An actor's age when receiving an award (`award_year - birth year`).
///
/// `age` is `None` when the date of birth is unknown.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ActorAwardAge {
    pub name: String,
    pub age: Option<i32>,
    pub award_name: String,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProducerMovie {
    pub producer_name: String,
    pub movie_name: String,
    pub boxoffice_collection: Option<f64>,
    pub budget: Option<f64>,
}

/// Number of distinct roles a person holds on one picture.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PersonRoleCount {
    pub person_name: String,
    pub picture_name: String,
    pub role_count: i64,
}

/// An actor with one Marvel and one Warner Bros picture they acted in.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ActorStudioPair {
    pub actor_name: String,
    pub marvel_picture: String,
    pub warner_picture: String,
}

/// Two distinct actors born on the same day.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BirthdayPair {
    pub first_actor: String,
    pub second_actor: String,
    pub birthday: NaiveDate,
}
