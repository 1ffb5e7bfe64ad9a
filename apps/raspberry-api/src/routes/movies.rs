//! Movie and award routes

use axum::{routing::get, Router};
use raspberry_domain::MoviesServicePort;

use crate::{
    handlers::movies::{list_movies_handler, producer_awards_handler},
    AppState,
};

/// Create movie and award routes
pub fn routes<S>() -> Router<AppState<S>>
where
    S: MoviesServicePort + 'static,
{
    Router::new()
        .route("/movies", get(list_movies_handler::<S>))
        .route("/awards", get(producer_awards_handler::<S>))
}
