//! Result rows keyed on a motion picture.

use serde::Serialize;
use sqlx::FromRow;

/// Summary columns of a `motion_picture` row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PictureSummary {
    pub name: String,
    pub rating: Option<f64>,
    pub production: Option<String>,
    pub budget: Option<f64>,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PictureName {
    pub name: String,
}

/// A picture name with its rating.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RatedPicture {
    pub name: String,
    pub rating: Option<f64>,
}

/// Like count restricted to an age group of users.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PictureLikeCount {
    pub movie_name: String,
    pub like_count: i64,
}

/// Number of distinct people and distinct role names on a picture.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PictureCastSize {
    pub name: String,
    pub people_count: i64,
    pub role_count: i64,
}
