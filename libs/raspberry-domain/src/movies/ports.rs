//! Port trait for the movies service read path
//!
//! The HTTP layer depends on this trait rather than on `MoviesService<R, F>`,
//! so handlers can be exercised against fakes.

use std::future::Future;

use crate::{
    awards::{AwardCategory, ProducerInterval},
    error::AwardsError,
    movies::MovieRecord,
};

/// Read operations exposed to the boundary layer
pub trait MoviesServicePort: Send + Sync {
    /// Every persisted movie, in insertion order
    fn all_movies(&self) -> impl Future<Output = Result<Vec<MovieRecord>, AwardsError>> + Send;

    /// Persisted awards of one category, without the category tag
    fn producer_awards(
        &self,
        category: AwardCategory,
    ) -> impl Future<Output = Result<Vec<ProducerInterval>, AwardsError>> + Send;
}
