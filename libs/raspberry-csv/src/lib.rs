//! CSV adapter for the Raspberry domain
//!
//! Provides `CsvMovieReader`, the `MovieFileReader` implementation used by
//! the API service to load the nominee list.

pub mod reader;

pub use reader::{CsvMovieReader, CsvReaderConfig};
