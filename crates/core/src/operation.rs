//! The closed set of query operations and their static metadata.
//!
//! Each [`Operation`] carries the form fields it requires and the ordered
//! columns of the rows it produces. Routing resolves an identifier from the
//! URL into an `Operation` via [`FromStr`]; anything outside the set is a
//! `NotFound`.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Field and column metadata
// ---------------------------------------------------------------------------

/// Semantic type a form field is coerced into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Float,
}

/// A required form field of a parameterized operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Form field name (`application/x-www-form-urlencoded` key).
    pub name: &'static str,
    /// Human-readable label for the input form.
    pub label: &'static str,
    pub kind: FieldKind,
}

/// One projected column of an operation's result rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Key of the value in a serialized row.
    pub key: &'static str,
    /// Table header shown on the rendered page.
    pub header: &'static str,
}

const fn text(name: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        label,
        kind: FieldKind::Text,
    }
}

const fn integer(name: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        label,
        kind: FieldKind::Integer,
    }
}

const fn float(name: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        label,
        kind: FieldKind::Float,
    }
}

const fn col(key: &'static str, header: &'static str) -> Column {
    Column { key, header }
}

const PICTURE_SUMMARY: &[Column] = &[
    col("name", "Name"),
    col("rating", "Rating"),
    col("production", "Production"),
    col("budget", "Budget"),
];

const RATED_PICTURE: &[Column] = &[col("name", "Name"), col("rating", "Rating")];

const TABLE_NAME: &[Column] = &[col("table_name", "Table")];

const PICTURE_NAME: &[Column] = &[col("name", "Name")];

const DIRECTOR_SERIES: &[Column] = &[
    col("director_name", "Director"),
    col("series_name", "Series"),
];

const PERSON_AWARD_COUNT: &[Column] = &[
    col("person_name", "Person"),
    col("picture_name", "Motion picture"),
    col("award_year", "Award year"),
    col("award_count", "Award count"),
];

const ACTOR_AWARD_AGE: &[Column] = &[
    col("name", "Actor"),
    col("age", "Age"),
    col("award_name", "Award"),
];

const PRODUCER_MOVIE: &[Column] = &[
    col("producer_name", "Producer"),
    col("movie_name", "Movie"),
    col("boxoffice_collection", "Box office collection"),
    col("budget", "Budget"),
];

const PERSON_ROLE_COUNT: &[Column] = &[
    col("person_name", "Person"),
    col("picture_name", "Motion picture"),
    col("role_count", "Role count"),
];

const PICTURE_LIKE_COUNT: &[Column] = &[
    col("movie_name", "Movie"),
    col("like_count", "Likes"),
];

const ACTOR_STUDIO_PAIR: &[Column] = &[
    col("actor_name", "Actor"),
    col("marvel_picture", "Marvel picture"),
    col("warner_picture", "Warner Bros picture"),
];

const PICTURE_CAST_SIZE: &[Column] = &[
    col("name", "Motion picture"),
    col("people_count", "People"),
    col("role_count", "Roles"),
];

const BIRTHDAY_PAIR: &[Column] = &[
    col("first_actor", "Actor 1"),
    col("second_actor", "Actor 2"),
    col("birthday", "Birthday"),
];

const MOVIE_NAME_FIELD: &[FieldSpec] = &[text("movie_name", "Motion picture name")];
const USER_EMAIL_FIELD: &[FieldSpec] = &[text("user_email", "User email")];
const COUNTRY_FIELD: &[FieldSpec] = &[text("country", "Country")];
const ZIP_CODE_FIELD: &[FieldSpec] = &[text("zip_code", "Zip code")];
const AWARD_COUNT_FIELD: &[FieldSpec] = &[integer("k", "More than k awards")];
const RATING_FIELD: &[FieldSpec] = &[float("rating_threshold", "Rating above")];

const PRODUCER_FIELDS: &[FieldSpec] = &[
    float("box_office_min", "Minimum box office collection"),
    float("budget_max", "Maximum budget"),
];

const LIKES_FIELDS: &[FieldSpec] = &[
    integer("min_likes", "More than this many likes"),
    integer("max_age", "Users younger than"),
];

// ---------------------------------------------------------------------------
// Operation
// ---------------------------------------------------------------------------

/// Every query the service can answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ListTables,
    SearchMovie,
    LikedMovies,
    SearchLocation,
    DirectorsByZip,
    AwardWinners,
    YoungestOldestActors,
    SearchProducers,
    SearchMultipleRoles,
    TopThrillerMoviesBoston,
    SearchMoviesByLikes,
    ActorsMarvelWarner,
    MoviesHigherThanComedyAvg,
    Top5MoviesPeopleRoles,
    ActorsWithCommonBirthday,
}

impl Operation {
    /// All operations in menu order.
    pub const ALL: [Operation; 15] = [
        Operation::ListTables,
        Operation::SearchMovie,
        Operation::LikedMovies,
        Operation::SearchLocation,
        Operation::DirectorsByZip,
        Operation::AwardWinners,
        Operation::YoungestOldestActors,
        Operation::SearchProducers,
        Operation::SearchMultipleRoles,
        Operation::TopThrillerMoviesBoston,
        Operation::SearchMoviesByLikes,
        Operation::ActorsMarvelWarner,
        Operation::MoviesHigherThanComedyAvg,
        Operation::Top5MoviesPeopleRoles,
        Operation::ActorsWithCommonBirthday,
    ];

    /// Identifier used in the URL path.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ListTables => "list_tables",
            Self::SearchMovie => "search_movie",
            Self::LikedMovies => "liked_movies",
            Self::SearchLocation => "search_location",
            Self::DirectorsByZip => "directors_by_zip",
            Self::AwardWinners => "award_winners",
            Self::YoungestOldestActors => "youngest_oldest_actors",
            Self::SearchProducers => "search_producers",
            Self::SearchMultipleRoles => "search_multiple_roles",
            Self::TopThrillerMoviesBoston => "top_thriller_movies_boston",
            Self::SearchMoviesByLikes => "search_movies_by_likes",
            Self::ActorsMarvelWarner => "actors_marvel_warner",
            Self::MoviesHigherThanComedyAvg => "movies_higher_than_comedy_avg",
            Self::Top5MoviesPeopleRoles => "top_5_movies_people_roles",
            Self::ActorsWithCommonBirthday => "actors_with_common_birthday",
        }
    }

    /// Page title.
    pub fn title(self) -> &'static str {
        match self {
            Self::ListTables => "All tables",
            Self::SearchMovie => "Search motion pictures by name",
            Self::LikedMovies => "Motion pictures liked by a user",
            Self::SearchLocation => "Motion pictures by shooting country",
            Self::DirectorsByZip => "Directors of TV series shot in a zip code",
            Self::AwardWinners => "People with more than k awards for one picture in one year",
            Self::YoungestOldestActors => "Youngest and oldest award-winning actors",
            Self::SearchProducers => "American producers by box office and budget",
            Self::SearchMultipleRoles => "People with multiple roles in a highly rated picture",
            Self::TopThrillerMoviesBoston => "Top 2 thrillers shot exclusively in Boston",
            Self::SearchMoviesByLikes => "Motion pictures liked by young users",
            Self::ActorsMarvelWarner => "Actors in both Marvel and Warner Bros productions",
            Self::MoviesHigherThanComedyAvg => "Motion pictures rated above the comedy average",
            Self::Top5MoviesPeopleRoles => "Top 5 motion pictures by cast size",
            Self::ActorsWithCommonBirthday => "Actors sharing a birthday",
        }
    }

    /// Required form fields, in form order. Empty for parameterless operations.
    pub fn fields(self) -> &'static [FieldSpec] {
        match self {
            Self::SearchMovie => MOVIE_NAME_FIELD,
            Self::LikedMovies => USER_EMAIL_FIELD,
            Self::SearchLocation => COUNTRY_FIELD,
            Self::DirectorsByZip => ZIP_CODE_FIELD,
            Self::AwardWinners => AWARD_COUNT_FIELD,
            Self::SearchProducers => PRODUCER_FIELDS,
            Self::SearchMultipleRoles => RATING_FIELD,
            Self::SearchMoviesByLikes => LIKES_FIELDS,
            Self::ListTables
            | Self::YoungestOldestActors
            | Self::TopThrillerMoviesBoston
            | Self::ActorsMarvelWarner
            | Self::MoviesHigherThanComedyAvg
            | Self::Top5MoviesPeopleRoles
            | Self::ActorsWithCommonBirthday => &[],
        }
    }

    /// Whether the operation takes input (POST) or none (GET).
    pub fn takes_parameters(self) -> bool {
        !self.fields().is_empty()
    }

    /// Ordered result columns. For [`Operation::YoungestOldestActors`] these
    /// describe the rows of each of the two groups.
    pub fn columns(self) -> &'static [Column] {
        match self {
            Self::ListTables => TABLE_NAME,
            Self::SearchMovie | Self::LikedMovies => PICTURE_SUMMARY,
            Self::SearchLocation => PICTURE_NAME,
            Self::DirectorsByZip => DIRECTOR_SERIES,
            Self::AwardWinners => PERSON_AWARD_COUNT,
            Self::YoungestOldestActors => ACTOR_AWARD_AGE,
            Self::SearchProducers => PRODUCER_MOVIE,
            Self::SearchMultipleRoles => PERSON_ROLE_COUNT,
            Self::TopThrillerMoviesBoston | Self::MoviesHigherThanComedyAvg => RATED_PICTURE,
            Self::SearchMoviesByLikes => PICTURE_LIKE_COUNT,
            Self::ActorsMarvelWarner => ACTOR_STUDIO_PAIR,
            Self::Top5MoviesPeopleRoles => PICTURE_CAST_SIZE,
            Self::ActorsWithCommonBirthday => BIRTHDAY_PAIR,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| CoreError::NotFound {
                entity: "Operation",
                key: s.to_string(),
            })
    }
}
