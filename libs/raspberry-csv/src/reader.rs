//! CSV Movie Reader Implementation
//!
//! This module implements the `MovieFileReader` port with the `csv` crate.
//! Rows are streamed one at a time through the domain's `MovieIngestion`
//! accumulator; the file is never loaded whole.

use std::{fs::File, future::Future, io::Read, path::Path};

use csv::{ReaderBuilder, StringRecord};
use raspberry_domain::{
    error::AwardsError,
    movies::{MovieIngestion, RawMovieRow, ReadOutcome},
    ports::MovieFileReader,
};
use tracing::{debug, error, info, instrument};

/// Configuration for the CSV reader
#[derive(Debug, Clone)]
pub struct CsvReaderConfig {
    /// Field delimiter (default: `;`)
    pub delimiter: u8,
}

impl Default for CsvReaderConfig {
    fn default() -> Self {
        Self { delimiter: b';' }
    }
}

/// CSV-based implementation of the MovieFileReader port
///
/// The header row names the columns (`year;title;studios;producers;winner`).
/// Columns are matched by name, ignoring case and a leading byte order mark;
/// a column missing from the header reads as empty for every row, which the
/// validation rules then report.
#[derive(Debug, Clone, Default)]
pub struct CsvMovieReader {
    config: CsvReaderConfig,
}

impl CsvMovieReader {
    pub fn new(config: CsvReaderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CsvReaderConfig {
        &self.config
    }

    /// Read and validate every data row from `source`
    ///
    /// # Errors
    ///
    /// Returns `AwardsError::SourceUnavailable` if the stream fails at any
    /// row (I/O error, invalid UTF-8); rows read before the failure are
    /// discarded.
    pub fn read_from<S: Read>(&self, source: S) -> Result<ReadOutcome, AwardsError> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.config.delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(source);

        let columns = ColumnIndex::from_headers(reader.headers().map_err(stream_failure)?);
        let mut ingestion = MovieIngestion::new();

        for record in reader.records() {
            let record = record.map_err(stream_failure)?;
            ingestion.push(columns.row(&record));
        }

        debug!(rows = ingestion.rows_seen(), "Finished reading CSV rows");
        Ok(ingestion.finish())
    }

    fn read_file(&self, path: &Path) -> Result<ReadOutcome, AwardsError> {
        let file = File::open(path).map_err(|err| {
            error!(path = %path.display(), error = ?err, "Failed to open movie file");
            AwardsError::source_unavailable(format!("{}: {}", path.display(), err))
        })?;

        self.read_from(file)
    }
}

fn stream_failure(err: csv::Error) -> AwardsError {
    error!(error = ?err, "Failed to read CSV stream");
    AwardsError::source_unavailable(err.to_string())
}

/// Positions of the known columns in the header row
#[derive(Debug, Default)]
struct ColumnIndex {
    year: Option<usize>,
    title: Option<usize>,
    studios: Option<usize>,
    producers: Option<usize>,
    winner: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Self {
        let mut columns = Self::default();

        for (position, header) in headers.iter().enumerate() {
            let name = header.trim_start_matches('\u{feff}').trim().to_ascii_lowercase();
            let slot = match name.as_str() {
                "year" => &mut columns.year,
                "title" => &mut columns.title,
                "studios" => &mut columns.studios,
                "producers" => &mut columns.producers,
                "winner" => &mut columns.winner,
                _ => continue,
            };
            slot.get_or_insert(position);
        }

        columns
    }

    fn row(&self, record: &StringRecord) -> RawMovieRow {
        let field = |position: Option<usize>| {
            position
                .and_then(|position| record.get(position))
                .unwrap_or_default()
                .to_string()
        };

        RawMovieRow {
            year: field(self.year),
            title: field(self.title),
            studios: field(self.studios),
            producers: field(self.producers),
            winner: field(self.winner),
        }
    }
}

impl MovieFileReader for CsvMovieReader {
    #[instrument(skip(self, path), fields(path = %path.display()))]
    fn read_movies(
        &self,
        path: &Path,
    ) -> impl Future<Output = Result<ReadOutcome, AwardsError>> + Send {
        let reader = self.clone();
        let path = path.to_path_buf();

        async move {
            let outcome = tokio::task::spawn_blocking(move || reader.read_file(&path))
                .await
                .map_err(|err| {
                    AwardsError::internal_error(format!("CSV reader task failed: {err}"))
                })??;

            info!(
                valid = outcome.valid_movies.len(),
                invalid = outcome.invalid_movies.len(),
                "Read movie file"
            );
            Ok(outcome)
        }
    }
}
