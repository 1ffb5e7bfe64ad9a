//! API routes

pub mod movies;

use axum::Router;
use raspberry_domain::MoviesServicePort;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    dto::movies::{AwardRangesResponse, ErrorResponse, MovieResponse, ProducerIntervalResponse},
    handlers, AppState,
};

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::movies::list_movies_handler,
        handlers::movies::producer_awards_handler,
        health_handler
    ),
    components(
        schemas(MovieResponse, ProducerIntervalResponse, AwardRangesResponse, ErrorResponse)
    ),
    tags(
        (name = "movies", description = "Nominated movies"),
        (name = "awards", description = "Producer award intervals"),
        (name = "health", description = "Health check endpoints")
    ),
    info(
        title = "Raspberry Awards API",
        version = "0.1.0",
        description = "Read service for worst-picture nominees and producer award intervals"
    )
)]
pub struct ApiDoc;

/// Create the main application router
pub fn create_router<S>(state: AppState<S>) -> Router
where
    S: MoviesServicePort + 'static,
{
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/v1", movies::routes())
        .route("/health", axum::routing::get(health_handler))
        .with_state(state)
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = String)
    ),
    tag = "health"
)]
async fn health_handler() -> &'static str {
    "OK"
}
