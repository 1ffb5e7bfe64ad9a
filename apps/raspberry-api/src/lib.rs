//! Raspberry API - read service for award intervals
//!
//! Loads the worst-picture nominee list once at startup and serves the
//! stored movies and producer award intervals over HTTP.

pub mod config;
pub mod dto;
pub mod handlers;
pub mod routes;
pub mod telemetry;

use std::sync::Arc;

/// Application state shared across handlers
pub struct AppState<S> {
    pub movies_service: Arc<S>,
}

impl<S> AppState<S> {
    pub fn new(movies_service: S) -> Self {
        Self {
            movies_service: Arc::new(movies_service),
        }
    }
}

// Manual impl: `S` itself need not be Clone
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            movies_service: Arc::clone(&self.movies_service),
        }
    }
}
