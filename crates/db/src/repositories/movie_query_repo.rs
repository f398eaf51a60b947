//! Read-only analytical queries over the movie-industry schema.
//!
//! Every function runs exactly one statement on the connection it is given.
//! User input is always bound positionally; the SQL text is fixed. Each
//! statement ends in a total `ORDER BY` so repeated calls return identical
//! ordering.

use cinequery_core::search::contains_pattern;
use sqlx::PgConnection;

use crate::models::catalog::TableName;
use crate::models::person::{
    ActorAwardAge, ActorStudioPair, BirthdayPair, DirectorSeries, PersonAwardCount,
    PersonRoleCount, ProducerMovie,
};
use crate::models::picture::{
    PictureCastSize, PictureLikeCount, PictureName, PictureSummary, RatedPicture,
};

const LIST_TABLES: &str = "\
    SELECT table_name::text AS table_name \
    FROM information_schema.tables \
    WHERE table_schema = current_schema() \
      AND table_type = 'BASE TABLE' \
      AND table_name <> '_sqlx_migrations' \
    ORDER BY table_name";

const SEARCH_MOVIE: &str = "\
    SELECT name, rating, production, budget \
    FROM motion_picture \
    WHERE name ILIKE $1 ESCAPE '\\' \
    ORDER BY name, id";

const LIKED_MOVIES: &str = "\
    SELECT mp.name, mp.rating, mp.production, mp.budget \
    FROM motion_picture mp \
    JOIN likes l ON l.mpid = mp.id \
    JOIN users u ON u.email = l.uemail \
    WHERE u.email = $1 \
    ORDER BY mp.name, mp.id";

const SEARCH_LOCATION: &str = "\
    SELECT DISTINCT mp.name \
    FROM motion_picture mp \
    JOIN location l ON l.mpid = mp.id \
    WHERE l.country = $1 \
    ORDER BY mp.name";

const DIRECTORS_BY_ZIP: &str = "\
    SELECT DISTINCT p.name AS director_name, mp.name AS series_name \
    FROM people p \
    JOIN role r ON r.pid = p.id AND r.role_name = 'Director' \
    JOIN series s ON s.mpid = r.mpid \
    JOIN motion_picture mp ON mp.id = s.mpid \
    JOIN location l ON l.mpid = s.mpid \
    WHERE l.zip = $1 \
    ORDER BY director_name, series_name";

const AWARD_WINNERS: &str = "\
    SELECT p.name AS person_name, mp.name AS picture_name, a.award_year, \
           COUNT(*) AS award_count \
    FROM award a \
    JOIN people p ON p.id = a.pid \
    JOIN motion_picture mp ON mp.id = a.mpid \
    GROUP BY p.id, p.name, mp.id, mp.name, a.award_year \
    HAVING COUNT(*) > $1 \
    ORDER BY award_count DESC, person_name, picture_name, a.award_year, p.id, mp.id";

const ACTOR_AWARD_AGES: &str = "\
    SELECT p.name, \
           (a.award_year - EXTRACT(YEAR FROM p.dob))::int AS age, \
           a.award_name \
    FROM people p \
    JOIN award a ON a.pid = p.id \
    WHERE EXISTS ( \
        SELECT 1 FROM role r WHERE r.pid = p.id AND r.role_name = 'Actor' \
    ) \
    ORDER BY age DESC NULLS LAST, p.name, p.id, a.award_name, a.mpid";

const SEARCH_PRODUCERS: &str = "\
    SELECT p.name AS producer_name, mp.name AS movie_name, \
           m.boxoffice_collection, mp.budget \
    FROM people p \
    JOIN role r ON r.pid = p.id AND r.role_name = 'Producer' \
    JOIN movie m ON m.mpid = r.mpid \
    JOIN motion_picture mp ON mp.id = m.mpid \
    WHERE p.nationality = 'USA' \
      AND m.boxoffice_collection >= $1 \
      AND mp.budget <= $2 \
    ORDER BY producer_name, movie_name, p.id, mp.id";

const SEARCH_MULTIPLE_ROLES: &str = "\
    SELECT p.name AS person_name, mp.name AS picture_name, \
           COUNT(DISTINCT r.role_name) AS role_count \
    FROM role r \
    JOIN people p ON p.id = r.pid \
    JOIN motion_picture mp ON mp.id = r.mpid \
    WHERE mp.rating > $1 \
    GROUP BY p.id, p.name, mp.id, mp.name \
    HAVING COUNT(DISTINCT r.role_name) > 1 \
    ORDER BY role_count DESC, person_name, picture_name, p.id, mp.id";

// A picture qualifies only when its set of distinct shooting cities is
// exactly {Boston}; pictures without locations never match the subquery.
const TOP_THRILLER_MOVIES_BOSTON: &str = "\
    SELECT mp.name, mp.rating \
    FROM motion_picture mp \
    JOIN genre g ON g.mpid = mp.id AND g.genre_name = 'Thriller' \
    WHERE mp.id IN ( \
        SELECT l.mpid FROM location l \
        GROUP BY l.mpid \
        HAVING COUNT(DISTINCT l.city) = 1 AND MIN(l.city) = 'Boston' \
    ) \
    ORDER BY mp.rating DESC NULLS LAST, mp.name, mp.id \
    LIMIT 2";

const SEARCH_MOVIES_BY_LIKES: &str = "\
    SELECT mp.name AS movie_name, COUNT(*) AS like_count \
    FROM likes l \
    JOIN users u ON u.email = l.uemail \
    JOIN motion_picture mp ON mp.id = l.mpid \
    WHERE u.age < $2 \
    GROUP BY mp.id, mp.name \
    HAVING COUNT(*) > $1 \
    ORDER BY like_count DESC, movie_name, mp.id";

const ACTORS_MARVEL_WARNER: &str = "\
    SELECT p.name AS actor_name, marvel.name AS marvel_picture, \
           warner.name AS warner_picture \
    FROM people p \
    JOIN role rm ON rm.pid = p.id AND rm.role_name = 'Actor' \
    JOIN motion_picture marvel ON marvel.id = rm.mpid AND marvel.production = 'Marvel' \
    JOIN role rw ON rw.pid = p.id AND rw.role_name = 'Actor' \
    JOIN motion_picture warner ON warner.id = rw.mpid AND warner.production = 'Warner Bros' \
    ORDER BY actor_name, marvel_picture, warner_picture, p.id";

const MOVIES_HIGHER_THAN_COMEDY_AVG: &str = "\
    SELECT mp.name, mp.rating \
    FROM motion_picture mp \
    WHERE mp.rating > ( \
        SELECT AVG(c.rating) \
        FROM motion_picture c \
        JOIN genre g ON g.mpid = c.id \
        WHERE g.genre_name = 'Comedy' \
    ) \
    ORDER BY mp.rating DESC, mp.name, mp.id";

const TOP_5_MOVIES_PEOPLE_ROLES: &str = "\
    SELECT mp.name, COUNT(DISTINCT r.pid) AS people_count, \
           COUNT(DISTINCT r.role_name) AS role_count \
    FROM motion_picture mp \
    JOIN role r ON r.mpid = mp.id \
    GROUP BY mp.id, mp.name \
    ORDER BY people_count DESC, role_count DESC, mp.name, mp.id \
    LIMIT 5";

// `a1.id < a2.id` reports each unordered pair once and never self-pairs.
const ACTORS_WITH_COMMON_BIRTHDAY: &str = "\
    SELECT a1.name AS first_actor, a2.name AS second_actor, a1.dob AS birthday \
    FROM people a1 \
    JOIN people a2 ON a2.dob = a1.dob AND a1.id < a2.id \
    WHERE EXISTS (SELECT 1 FROM role r WHERE r.pid = a1.id AND r.role_name = 'Actor') \
      AND EXISTS (SELECT 1 FROM role r WHERE r.pid = a2.id AND r.role_name = 'Actor') \
    ORDER BY birthday, first_actor, second_actor, a1.id, a2.id";

/// Provides the fixed set of analytical queries.
pub struct MovieQueryRepo;

impl MovieQueryRepo {
    /// Names of all base tables in the current schema.
    pub async fn list_tables(conn: &mut PgConnection) -> Result<Vec<TableName>, sqlx::Error> {
        sqlx::query_as::<_, TableName>(LIST_TABLES)
            .fetch_all(conn)
            .await
    }

    /// Pictures whose name contains `movie_name`, case-insensitively.
    pub async fn search_movie(
        conn: &mut PgConnection,
        movie_name: &str,
    ) -> Result<Vec<PictureSummary>, sqlx::Error> {
        sqlx::query_as::<_, PictureSummary>(SEARCH_MOVIE)
            .bind(contains_pattern(movie_name))
            .fetch_all(conn)
            .await
    }

    /// Pictures liked by the user with exactly this email.
    pub async fn liked_movies(
        conn: &mut PgConnection,
        user_email: &str,
    ) -> Result<Vec<PictureSummary>, sqlx::Error> {
        sqlx::query_as::<_, PictureSummary>(LIKED_MOVIES)
            .bind(user_email)
            .fetch_all(conn)
            .await
    }

    /// Distinct names of pictures with a shooting location in `country`.
    pub async fn search_location(
        conn: &mut PgConnection,
        country: &str,
    ) -> Result<Vec<PictureName>, sqlx::Error> {
        sqlx::query_as::<_, PictureName>(SEARCH_LOCATION)
            .bind(country)
            .fetch_all(conn)
            .await
    }

    /// Directors of TV series shot at `zip_code`.
    pub async fn directors_by_zip(
        conn: &mut PgConnection,
        zip_code: &str,
    ) -> Result<Vec<DirectorSeries>, sqlx::Error> {
        sqlx::query_as::<_, DirectorSeries>(DIRECTORS_BY_ZIP)
            .bind(zip_code)
            .fetch_all(conn)
            .await
    }

    /// (person, picture, year) groups with more than `k` awards.
    pub async fn award_winners(
        conn: &mut PgConnection,
        k: i64,
    ) -> Result<Vec<PersonAwardCount>, sqlx::Error> {
        sqlx::query_as::<_, PersonAwardCount>(AWARD_WINNERS)
            .bind(k)
            .fetch_all(conn)
            .await
    }

    /// Every award received by an actor, with the actor's age at the time.
    ///
    /// Unfiltered; the caller reduces this to the youngest and oldest.
    pub async fn actor_award_ages(
        conn: &mut PgConnection,
    ) -> Result<Vec<ActorAwardAge>, sqlx::Error> {
        sqlx::query_as::<_, ActorAwardAge>(ACTOR_AWARD_AGES)
            .fetch_all(conn)
            .await
    }

    /// American producers of movies with box office at least
    /// `box_office_min` and budget at most `budget_max`.
    pub async fn search_producers(
        conn: &mut PgConnection,
        box_office_min: f64,
        budget_max: f64,
    ) -> Result<Vec<ProducerMovie>, sqlx::Error> {
        sqlx::query_as::<_, ProducerMovie>(SEARCH_PRODUCERS)
            .bind(box_office_min)
            .bind(budget_max)
            .fetch_all(conn)
            .await
    }

    /// People with more than one distinct role on a picture rated above
    /// `rating_threshold`.
    pub async fn search_multiple_roles(
        conn: &mut PgConnection,
        rating_threshold: f64,
    ) -> Result<Vec<PersonRoleCount>, sqlx::Error> {
        sqlx::query_as::<_, PersonRoleCount>(SEARCH_MULTIPLE_ROLES)
            .bind(rating_threshold)
            .fetch_all(conn)
            .await
    }

    /// The two best rated thrillers shot only in Boston.
    pub async fn top_thriller_movies_boston(
        conn: &mut PgConnection,
    ) -> Result<Vec<RatedPicture>, sqlx::Error> {
        sqlx::query_as::<_, RatedPicture>(TOP_THRILLER_MOVIES_BOSTON)
            .fetch_all(conn)
            .await
    }

    /// Pictures with more than `min_likes` likes from users younger than
    /// `max_age`.
    pub async fn search_movies_by_likes(
        conn: &mut PgConnection,
        min_likes: i64,
        max_age: i64,
    ) -> Result<Vec<PictureLikeCount>, sqlx::Error> {
        sqlx::query_as::<_, PictureLikeCount>(SEARCH_MOVIES_BY_LIKES)
            .bind(min_likes)
            .bind(max_age)
            .fetch_all(conn)
            .await
    }

    /// Actors with roles in both Marvel and Warner Bros productions, one row
    /// per (Marvel picture, Warner Bros picture) combination.
    pub async fn actors_marvel_warner(
        conn: &mut PgConnection,
    ) -> Result<Vec<ActorStudioPair>, sqlx::Error> {
        sqlx::query_as::<_, ActorStudioPair>(ACTORS_MARVEL_WARNER)
            .fetch_all(conn)
            .await
    }

    /// Pictures rated above the average rating of comedies, best first.
    pub async fn movies_higher_than_comedy_avg(
        conn: &mut PgConnection,
    ) -> Result<Vec<RatedPicture>, sqlx::Error> {
        sqlx::query_as::<_, RatedPicture>(MOVIES_HIGHER_THAN_COMEDY_AVG)
            .fetch_all(conn)
            .await
    }

    /// The five pictures with the most distinct people in a role.
    pub async fn top_5_movies_people_roles(
        conn: &mut PgConnection,
    ) -> Result<Vec<PictureCastSize>, sqlx::Error> {
        sqlx::query_as::<_, PictureCastSize>(TOP_5_MOVIES_PEOPLE_ROLES)
            .fetch_all(conn)
            .await
    }

    /// Pairs of distinct actors born on the same day, each pair once.
    pub async fn actors_with_common_birthday(
        conn: &mut PgConnection,
    ) -> Result<Vec<BirthdayPair>, sqlx::Error> {
        sqlx::query_as::<_, BirthdayPair>(ACTORS_WITH_COMMON_BIRTHDAY)
            .fetch_all(conn)
            .await
    }
}
