//! DTOs for movie and award endpoints

use raspberry_domain::{MovieRecord, ProducerInterval};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A nominated movie
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MovieResponse {
    #[schema(example = "1980")]
    pub year: String,
    #[schema(example = "Can't Stop the Music")]
    pub title: String,
    #[schema(example = "Associated Film Distribution")]
    pub studios: String,
    /// Comma-separated producer names
    #[schema(example = "Allan Carr")]
    pub producers: String,
    /// Either `yes` or `no`
    #[schema(example = "yes")]
    pub winner: String,
}

impl From<MovieRecord> for MovieResponse {
    fn from(movie: MovieRecord) -> Self {
        Self {
            year: movie.year,
            title: movie.title,
            studios: movie.studios,
            producers: movie.producers,
            winner: movie.winner.as_str().to_string(),
        }
    }
}

/// Gap between two consecutive wins of a producer
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProducerIntervalResponse {
    #[schema(example = "Joel Silver")]
    pub producer: String,
    #[schema(example = 1)]
    pub interval: i64,
    #[schema(example = 1990)]
    pub previous_win: i64,
    #[schema(example = 1991)]
    pub following_win: i64,
}

impl From<ProducerInterval> for ProducerIntervalResponse {
    fn from(interval: ProducerInterval) -> Self {
        Self {
            producer: interval.producer,
            interval: interval.interval,
            previous_win: interval.previous_win,
            following_win: interval.following_win,
        }
    }
}

/// Producers with the shortest and the longest gap between wins
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AwardRangesResponse {
    pub min: Vec<ProducerIntervalResponse>,
    pub max: Vec<ProducerIntervalResponse>,
}

/// Error response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error description
    #[schema(example = "No awards found.")]
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
