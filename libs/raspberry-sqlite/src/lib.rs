//! SQLite adapter for the Raspberry domain
//!
//! Provides `SqliteMovieRepository`, the `MovieRepository` implementation
//! backing the API service. An in-memory database is the default; a file
//! path gives an on-disk store.

pub mod infrastructure;

pub use infrastructure::SqliteMovieRepository;
