//! Infrastructure implementations of the domain ports

mod error;
mod schema;
mod sqlite_repository;

pub use sqlite_repository::SqliteMovieRepository;
