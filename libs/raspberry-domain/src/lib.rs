//! # Raspberry Domain Layer
//!
//! Pure business logic for the Raspberry awards service: loading the
//! worst-picture nominee list and deriving producer award intervals.
//!
//! - **Movies**: validated nominations, row validation, the batch-load service
//! - **Awards**: producer win intervals and MIN/MAX selection
//! - **Ports**: traits for persistence and for reading the nominee file
//!
//! ## Architecture
//!
//! This layer has NO dependencies on infrastructure concerns (SQLite, CSV,
//! HTTP). Adapters implement the ports in separate crates.
//!
//! ## Example
//!
//! ```rust
//! use raspberry_domain::{aggregate_producer_awards, MovieRecord, Winner};
//!
//! let movies = vec![
//!     MovieRecord::new("1990", "The Adventures of Ford Fairlane", "20th Century Fox", "Joel Silver", Winner::Yes),
//!     MovieRecord::new("1991", "Hudson Hawk", "TriStar Pictures", "Joel Silver", Winner::Yes),
//! ];
//!
//! let ranges = aggregate_producer_awards(&movies).unwrap();
//! assert_eq!(ranges.min[0].interval, 1);
//! ```

pub mod awards;
pub mod error;
pub mod movies;
pub mod ports;

// Re-export commonly used types
pub use awards::{aggregate_producer_awards, AwardCategory, AwardRanges, ProducerAward, ProducerInterval};
pub use error::{AwardsError, Result};
pub use movies::{
    IngestionReport, MovieIngestion, MovieRecord, MoviesService, MoviesServicePort, RawMovieRow,
    ReadOutcome, ValidationFailure, Winner,
};
pub use ports::{MovieFileReader, MovieRepository};
