//! SQLite Movie Repository Implementation
//!
//! This module implements the `MovieRepository` trait on top of `rusqlite`.
//! It handles all SQL and converts SQLite errors to domain errors.

use std::{
    future::Future,
    sync::{Arc, Mutex},
};

use raspberry_domain::{
    awards::{AwardCategory, ProducerAward},
    error::AwardsError,
    movies::{MovieRecord, Winner},
    ports::MovieRepository,
};
use rusqlite::{params, Connection};
use tracing::{debug, error, info, instrument};

use super::{error::SqliteError, schema::SCHEMA};

const IN_MEMORY: &str = ":memory:";

/// SQLite-based implementation of the MovieRepository port
///
/// One connection is shared behind a mutex. Each batch insert runs in its own
/// transaction; nothing spans two calls. Reads return rows in insertion order.
///
/// Statements run on the calling task: batches are a few hundred rows and
/// the database is usually in memory.
#[derive(Clone)]
pub struct SqliteMovieRepository {
    connection: Arc<Mutex<Connection>>,
}

impl SqliteMovieRepository {
    /// Open a repository at `path`, creating the tables if needed
    ///
    /// `":memory:"` opens a private in-memory database.
    ///
    /// # Example
    ///
    /// ```rust
    /// use raspberry_sqlite::SqliteMovieRepository;
    ///
    /// let repository = SqliteMovieRepository::open(":memory:").unwrap();
    /// ```
    pub fn open(path: &str) -> Result<Self, AwardsError> {
        info!(path = %path, "Opening SQLite repository");

        let connection = if path == IN_MEMORY {
            Connection::open_in_memory()
        } else {
            Connection::open(path)
        }
        .map_err(|err| {
            error!(path = %path, error = ?err, "Failed to open SQLite database");
            AwardsError::storage_failure(format!("Failed to open database '{}': {}", path, err))
        })?;

        Self::from_connection(connection)
    }

    pub fn open_in_memory() -> Result<Self, AwardsError> {
        Self::open(IN_MEMORY)
    }

    /// Wrap an existing connection, creating the tables if needed
    pub fn from_connection(connection: Connection) -> Result<Self, AwardsError> {
        connection
            .execute_batch(SCHEMA)
            .map_err(SqliteError::from)?;

        Ok(Self {
            connection: Arc::new(Mutex::new(connection)),
        })
    }

    fn with_connection<T>(
        &self,
        operation: impl FnOnce(&mut Connection) -> Result<T, SqliteError>,
    ) -> Result<T, AwardsError> {
        let mut connection = self.connection.lock().map_err(|_| SqliteError::Poisoned)?;

        operation(&mut connection).map_err(|err| {
            error!(error = %err, "SQLite operation failed");
            AwardsError::from(err)
        })
    }

    fn insert_movies(&self, movies: &[MovieRecord]) -> Result<(), AwardsError> {
        self.with_connection(|connection| {
            let transaction = connection.transaction()?;
            {
                let mut statement = transaction.prepare(
                    "INSERT INTO movies (year, title, studios, producers, winner) VALUES (?1, ?2, ?3, ?4, ?5)",
                )?;
                for movie in movies {
                    statement.execute(params![
                        movie.year,
                        movie.title,
                        movie.studios,
                        movie.producers,
                        movie.winner.as_str(),
                    ])?;
                }
            }
            transaction.commit()?;
            Ok(())
        })
    }

    fn select_movies(&self) -> Result<Vec<MovieRecord>, AwardsError> {
        self.with_connection(|connection| {
            let mut statement = connection.prepare(
                "SELECT year, title, studios, producers, winner FROM movies ORDER BY id",
            )?;
            let movies = statement
                .query_map([], |row| {
                    let winner: String = row.get(4)?;
                    Ok(MovieRecord {
                        year: row.get(0)?,
                        title: row.get(1)?,
                        studios: row.get(2)?,
                        producers: row.get(3)?,
                        winner: Winner::normalize(&winner),
                    })
                })?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(movies)
        })
    }

    fn insert_awards(&self, awards: &[ProducerAward]) -> Result<(), AwardsError> {
        self.with_connection(|connection| {
            let transaction = connection.transaction()?;
            {
                let mut statement = transaction.prepare(
                    "INSERT INTO producer_awards (producer, interval_years, previous_win, following_win, category) VALUES (?1, ?2, ?3, ?4, ?5)",
                )?;
                for award in awards {
                    statement.execute(params![
                        award.producer,
                        award.interval,
                        award.previous_win,
                        award.following_win,
                        award.category.as_str(),
                    ])?;
                }
            }
            transaction.commit()?;
            Ok(())
        })
    }

    fn select_awards(&self, category: AwardCategory) -> Result<Vec<ProducerAward>, AwardsError> {
        self.with_connection(|connection| {
            let mut statement = connection.prepare(
                "SELECT producer, interval_years, previous_win, following_win FROM producer_awards WHERE category = ?1 ORDER BY id",
            )?;
            let awards = statement
                .query_map([category.as_str()], |row| {
                    Ok(ProducerAward {
                        producer: row.get(0)?,
                        interval: row.get(1)?,
                        previous_win: row.get(2)?,
                        following_win: row.get(3)?,
                        category,
                    })
                })?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(awards)
        })
    }
}

impl MovieRepository for SqliteMovieRepository {
    #[instrument(skip(self, movies), fields(count = movies.len()))]
    fn add_movies(
        &self,
        movies: &[MovieRecord],
    ) -> impl Future<Output = Result<(), AwardsError>> + Send {
        let repository = self.clone();
        let movies = movies.to_vec();

        async move {
            repository.insert_movies(&movies)?;
            debug!(count = movies.len(), "Inserted movies");
            Ok(())
        }
    }

    #[instrument(skip(self))]
    fn get_all_movies(&self) -> impl Future<Output = Result<Vec<MovieRecord>, AwardsError>> + Send {
        let repository = self.clone();

        async move { repository.select_movies() }
    }

    #[instrument(skip(self, awards), fields(count = awards.len()))]
    fn add_producer_awards(
        &self,
        awards: &[ProducerAward],
    ) -> impl Future<Output = Result<(), AwardsError>> + Send {
        let repository = self.clone();
        let awards = awards.to_vec();

        async move {
            repository.insert_awards(&awards)?;
            debug!(count = awards.len(), "Inserted producer awards");
            Ok(())
        }
    }

    #[instrument(skip(self))]
    fn get_producer_awards(
        &self,
        category: AwardCategory,
    ) -> impl Future<Output = Result<Vec<ProducerAward>, AwardsError>> + Send {
        let repository = self.clone();

        async move { repository.select_awards(category) }
    }
}
