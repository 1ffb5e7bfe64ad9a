//! Ports (trait definitions) for external dependencies
//!
//! The domain defines what it needs from persistence and from the movie file;
//! adapter crates provide the implementations.
//!
//! ## Static Dispatch
//!
//! Ports use native async traits with `impl Future` return types, so services
//! are monomorphized over their adapters instead of using trait objects.

use std::{future::Future, path::Path};

use crate::{
    awards::{AwardCategory, ProducerAward},
    error::AwardsError,
    movies::{MovieRecord, ReadOutcome},
};

/// Port for movie and award persistence
///
/// Implementations offer plain batch insert and filtered select. No
/// transaction spans several calls; callers rely only on call ordering.
pub trait MovieRepository: Send + Sync {
    /// Insert a batch of validated movies
    ///
    /// # Errors
    ///
    /// Returns `AwardsError::StorageFailure` if the insert fails
    fn add_movies(
        &self,
        movies: &[MovieRecord],
    ) -> impl Future<Output = Result<(), AwardsError>> + Send;

    /// Every stored movie, in insertion order
    fn get_all_movies(&self) -> impl Future<Output = Result<Vec<MovieRecord>, AwardsError>> + Send;

    /// Insert a batch of award intervals
    ///
    /// # Errors
    ///
    /// Returns `AwardsError::StorageFailure` if the insert fails
    fn add_producer_awards(
        &self,
        awards: &[ProducerAward],
    ) -> impl Future<Output = Result<(), AwardsError>> + Send;

    /// Stored awards of one category, in insertion order
    fn get_producer_awards(
        &self,
        category: AwardCategory,
    ) -> impl Future<Output = Result<Vec<ProducerAward>, AwardsError>> + Send;
}

/// Port for reading the nominee list
///
/// A read is a single pass over the source: every data row ends up either in
/// `valid_movies` or in `invalid_movies`, both in source order.
pub trait MovieFileReader: Send + Sync {
    /// Read and validate every data row of the file at `path`
    ///
    /// # Errors
    ///
    /// Returns `AwardsError::SourceUnavailable` if the file cannot be opened
    /// or the stream fails part way; no partial outcome is returned.
    fn read_movies(
        &self,
        path: &Path,
    ) -> impl Future<Output = Result<ReadOutcome, AwardsError>> + Send;
}
