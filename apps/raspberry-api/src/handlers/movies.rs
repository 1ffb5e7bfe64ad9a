//! Movie and award handlers
//!
//! Service failures never reach the response body: they are logged and
//! answered with a fixed 500 message.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use raspberry_domain::{AwardCategory, AwardsError, MoviesServicePort, ProducerInterval};
use tracing::{error, info};

use crate::{
    dto::movies::{AwardRangesResponse, ErrorResponse, MovieResponse, ProducerIntervalResponse},
    AppState,
};

const MOVIES_FAILURE: &str = "Failed to fetch movies.";
const AWARDS_FAILURE: &str = "Failed to fetch producer awards.";
const AWARDS_NOT_FOUND: &str = "No awards found.";

/// List every loaded movie
#[utoipa::path(
    get,
    path = "/v1/movies",
    responses(
        (status = 200, description = "Every loaded movie, in load order", body = [MovieResponse]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "movies"
)]
pub async fn list_movies_handler<S>(State(state): State<AppState<S>>) -> impl IntoResponse
where
    S: MoviesServicePort + 'static,
{
    match state.movies_service.all_movies().await {
        Ok(movies) => {
            info!(count = movies.len(), "Listing movies");
            let body: Vec<MovieResponse> = movies.into_iter().map(MovieResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(err) => {
            error!(error = ?err, "Error fetching movies");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(MOVIES_FAILURE)),
            )
                .into_response()
        }
    }
}

/// Producers with the shortest and longest gaps between consecutive wins
#[utoipa::path(
    get,
    path = "/v1/awards",
    responses(
        (status = 200, description = "Minimum and maximum award intervals", body = AwardRangesResponse),
        (status = 404, description = "No award intervals were stored", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "awards"
)]
pub async fn producer_awards_handler<S>(State(state): State<AppState<S>>) -> impl IntoResponse
where
    S: MoviesServicePort + 'static,
{
    match fetch_award_ranges(state.movies_service.as_ref()).await {
        Ok((min, max)) if min.is_empty() && max.is_empty() => {
            info!("No producer awards stored");
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new(AWARDS_NOT_FOUND)),
            )
                .into_response()
        }
        Ok((min, max)) => {
            info!(min = min.len(), max = max.len(), "Listing producer awards");
            let body = AwardRangesResponse {
                min: min.into_iter().map(ProducerIntervalResponse::from).collect(),
                max: max.into_iter().map(ProducerIntervalResponse::from).collect(),
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(err) => {
            error!(error = ?err, "Error fetching producer awards");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(AWARDS_FAILURE)),
            )
                .into_response()
        }
    }
}

async fn fetch_award_ranges<S: MoviesServicePort>(
    service: &S,
) -> Result<(Vec<ProducerInterval>, Vec<ProducerInterval>), AwardsError> {
    let min = service.producer_awards(AwardCategory::Min).await?;
    let max = service.producer_awards(AwardCategory::Max).await?;
    Ok((min, max))
}
