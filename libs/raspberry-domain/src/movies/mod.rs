//! Movies domain module
//!
//! Entities for validated nominations, the row validation pipeline and the
//! service that loads a nominee file and serves the read path.

mod entity;
mod ids;
mod ports;
mod service;
mod validation;

pub use entity::{MovieRecord, Winner};
pub use ids::BatchId;
pub use ports::MoviesServicePort;
pub use service::{IngestionReport, MoviesService};
pub use validation::{validate_row, MovieIngestion, RawMovieRow, ReadOutcome, ValidationFailure};
