//! Movies service - batch load and read path orchestration
//!
//! The service ties the file reader, the award aggregation and the
//! repository together. A batch load runs strictly in order: read, persist
//! movies, aggregate, persist MIN awards, persist MAX awards.

use std::{future::Future, path::Path};

use chrono::{DateTime, Utc};
use tracing::{info, instrument, warn};

use super::{BatchId, MovieRecord, MoviesServicePort, ReadOutcome, ValidationFailure};
use crate::{
    awards::{aggregate_producer_awards, AwardCategory, ProducerInterval},
    error::{AwardsError, Result},
    ports::{MovieFileReader, MovieRepository},
};

/// Summary of a successful batch load
#[derive(Debug, Clone)]
pub struct IngestionReport {
    pub batch_id: BatchId,
    pub loaded_at: DateTime<Utc>,
    /// Number of movies persisted
    pub valid_movies: usize,
    /// Rows rejected by validation, in source order
    pub invalid_movies: Vec<ValidationFailure>,
    pub min_awards: usize,
    pub max_awards: usize,
}

/// Service for loading the nominee list and serving movies and awards
///
/// Generic over the repository and file reader ports; the compiler generates
/// one specialized service per adapter pair.
pub struct MoviesService<R, F> {
    repository: R,
    reader: F,
}

impl<R, F> MoviesService<R, F>
where
    R: MovieRepository,
    F: MovieFileReader,
{
    pub fn new(repository: R, reader: F) -> Self {
        Self { repository, reader }
    }

    /// Load a nominee file, persist its valid movies and their award intervals
    ///
    /// Invalid rows are logged and reported, never fatal. Movies are persisted
    /// before aggregation runs, so they stay stored when aggregation fails.
    ///
    /// # Errors
    ///
    /// - `AwardsError::MissingFilePath` if `path` is blank (no I/O is attempted)
    /// - `AwardsError::SourceUnavailable` if the file cannot be read
    /// - `AwardsError::NoPrizeRange` if no producer has two or more wins
    /// - `AwardsError::StorageFailure` if a repository write fails
    #[instrument(skip(self))]
    pub async fn load_movies_from_csv(&self, path: &str) -> Result<IngestionReport> {
        if path.trim().is_empty() {
            return Err(AwardsError::MissingFilePath);
        }

        let batch_id = BatchId::new();
        info!(batch_id = %batch_id, "Loading movies from CSV");

        let ReadOutcome {
            valid_movies,
            invalid_movies,
        } = self.reader.read_movies(Path::new(path)).await?;

        if !invalid_movies.is_empty() {
            log_invalid_rows(&invalid_movies);
        }

        self.repository.add_movies(&valid_movies).await?;
        info!(batch_id = %batch_id, count = valid_movies.len(), "Persisted movies");

        let ranges = aggregate_producer_awards(&valid_movies)?;

        self.repository.add_producer_awards(&ranges.min).await?;
        self.repository.add_producer_awards(&ranges.max).await?;
        info!(
            batch_id = %batch_id,
            min_awards = ranges.min.len(),
            max_awards = ranges.max.len(),
            "Persisted producer awards"
        );

        Ok(IngestionReport {
            batch_id,
            loaded_at: Utc::now(),
            valid_movies: valid_movies.len(),
            invalid_movies,
            min_awards: ranges.min.len(),
            max_awards: ranges.max.len(),
        })
    }
}

fn log_invalid_rows(failures: &[ValidationFailure]) {
    warn!(count = failures.len(), "Invalid file data");
    for failure in failures {
        warn!(
            csv_line = failure.line_number,
            errors = %failure.errors.join(", "),
            "Skipped invalid movie row"
        );
    }
}

impl<R, F> MoviesServicePort for MoviesService<R, F>
where
    R: MovieRepository,
    F: MovieFileReader,
{
    fn all_movies(&self) -> impl Future<Output = Result<Vec<MovieRecord>>> + Send {
        self.repository.get_all_movies()
    }

    fn producer_awards(
        &self,
        category: AwardCategory,
    ) -> impl Future<Output = Result<Vec<ProducerInterval>>> + Send {
        let awards = self.repository.get_producer_awards(category);

        async move {
            Ok(awards
                .await?
                .into_iter()
                .map(ProducerInterval::from)
                .collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::awards::ProducerAward;
    use crate::movies::Winner;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    // In-memory repository for testing
    #[derive(Clone, Default)]
    struct InMemoryRepository {
        movies: Arc<Mutex<Vec<MovieRecord>>>,
        award_batches: Arc<Mutex<Vec<Vec<ProducerAward>>>>,
    }

    impl MovieRepository for InMemoryRepository {
        fn add_movies(
            &self,
            movies: &[MovieRecord],
        ) -> impl Future<Output = Result<()>> + Send {
            let movies = movies.to_vec();
            let store = self.movies.clone();

            async move {
                store.lock().unwrap().extend(movies);
                Ok(())
            }
        }

        fn get_all_movies(&self) -> impl Future<Output = Result<Vec<MovieRecord>>> + Send {
            let store = self.movies.clone();

            async move { Ok(store.lock().unwrap().clone()) }
        }

        fn add_producer_awards(
            &self,
            awards: &[ProducerAward],
        ) -> impl Future<Output = Result<()>> + Send {
            let awards = awards.to_vec();
            let store = self.award_batches.clone();

            async move {
                store.lock().unwrap().push(awards);
                Ok(())
            }
        }

        fn get_producer_awards(
            &self,
            category: AwardCategory,
        ) -> impl Future<Output = Result<Vec<ProducerAward>>> + Send {
            let store = self.award_batches.clone();

            async move {
                Ok(store
                    .lock()
                    .unwrap()
                    .iter()
                    .flatten()
                    .filter(|award| award.category == category)
                    .cloned()
                    .collect())
            }
        }
    }

    // Reader returning a fixed outcome, or a stream failure when there is none
    #[derive(Default)]
    struct StaticReader {
        outcome: Option<ReadOutcome>,
        calls: AtomicUsize,
    }

    impl StaticReader {
        fn with(valid_movies: Vec<MovieRecord>, invalid_movies: Vec<ValidationFailure>) -> Self {
            Self {
                outcome: Some(ReadOutcome {
                    valid_movies,
                    invalid_movies,
                }),
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl MovieFileReader for StaticReader {
        fn read_movies(&self, path: &Path) -> impl Future<Output = Result<ReadOutcome>> + Send {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let result = self.outcome.clone().ok_or_else(|| {
                AwardsError::source_unavailable(format!("{}: Stream error", path.display()))
            });

            async move { result }
        }
    }

    fn movie(year: &str, title: &str, producers: &str, winner: Winner) -> MovieRecord {
        MovieRecord::new(year, title, "Studio 1", producers, winner)
    }

    #[tokio::test]
    async fn test_blank_path_is_rejected_before_reading() {
        let repository = InMemoryRepository::default();
        let service = MoviesService::new(repository, StaticReader::default());

        let err = service.load_movies_from_csv("").await.unwrap_err();
        assert!(matches!(err, AwardsError::MissingFilePath));
        assert_eq!(err.to_string(), "CSV file path is required");

        let err = service.load_movies_from_csv("   ").await.unwrap_err();
        assert!(matches!(err, AwardsError::MissingFilePath));

        assert_eq!(service.reader.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_stream_failure_aborts_load() {
        let repository = InMemoryRepository::default();
        let service = MoviesService::new(repository.clone(), StaticReader::default());

        let err = service
            .load_movies_from_csv("path/to/movies.csv")
            .await
            .unwrap_err();

        assert!(matches!(err, AwardsError::SourceUnavailable(_)));
        assert!(repository.movies.lock().unwrap().is_empty());
        assert!(repository.award_batches.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_load_persists_movies_then_min_then_max() {
        let valid = vec![
            movie("2020", "Movie 1", "Producer 1", Winner::Yes),
            movie("2021", "Movie 2", "Producer 1", Winner::Yes),
        ];
        let invalid = vec![ValidationFailure {
            line_number: 2,
            errors: vec!["Invalid year: invalid".to_string()],
        }];
        let repository = InMemoryRepository::default();
        let service = MoviesService::new(repository.clone(), StaticReader::with(valid.clone(), invalid));

        let report = service
            .load_movies_from_csv("path/to/movies.csv")
            .await
            .unwrap();

        assert_eq!(report.valid_movies, 2);
        assert_eq!(report.invalid_movies.len(), 1);
        assert_eq!(report.invalid_movies[0].line_number, 2);
        assert_eq!((report.min_awards, report.max_awards), (1, 1));

        assert_eq!(*repository.movies.lock().unwrap(), valid);

        let batches = repository.award_batches.lock().unwrap();
        let expected = ProducerInterval::new("Producer 1", 2020, 2021).unwrap();
        assert_eq!(
            *batches,
            vec![
                vec![expected.clone().into_award(AwardCategory::Min)],
                vec![expected.into_award(AwardCategory::Max)],
            ]
        );
    }

    #[tokio::test]
    async fn test_no_prize_range_keeps_movies_but_writes_no_awards() {
        let valid = vec![
            movie("2020", "Movie 1", "Producer 1", Winner::No),
            movie("2021", "Movie 2", "Producer 2", Winner::No),
        ];
        let repository = InMemoryRepository::default();
        let service = MoviesService::new(repository.clone(), StaticReader::with(valid.clone(), vec![]));

        let err = service
            .load_movies_from_csv("path/to/movies.csv")
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "No prize range has been calculated.");
        assert_eq!(*repository.movies.lock().unwrap(), valid);
        assert!(repository.award_batches.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_all_movies_returns_repository_contents() {
        let repository = InMemoryRepository::default();
        let stored = vec![movie("2020", "Movie 1", "Producer 1", Winner::Yes)];
        repository.add_movies(&stored).await.unwrap();

        let service = MoviesService::new(repository, StaticReader::default());

        assert_eq!(service.all_movies().await.unwrap(), stored);
    }

    #[tokio::test]
    async fn test_producer_awards_strips_category_and_filters() {
        let repository = InMemoryRepository::default();
        repository
            .add_producer_awards(&[
                ProducerInterval::new("Producer 1", 2020, 2021).unwrap().into_award(AwardCategory::Min),
                ProducerInterval::new("Producer 2", 2000, 2010).unwrap().into_award(AwardCategory::Max),
            ])
            .await
            .unwrap();

        let service = MoviesService::new(repository, StaticReader::default());

        let min = service.producer_awards(AwardCategory::Min).await.unwrap();
        assert_eq!(min, vec![ProducerInterval::new("Producer 1", 2020, 2021).unwrap()]);

        let max = service.producer_awards(AwardCategory::Max).await.unwrap();
        assert_eq!(max, vec![ProducerInterval::new("Producer 2", 2000, 2010).unwrap()]);
    }
}
