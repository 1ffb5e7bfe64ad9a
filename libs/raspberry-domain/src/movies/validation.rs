//! Row validation for the nominee list
//!
//! Each data row is checked against an ordered table of rules. Every rule is
//! evaluated, so one row can collect several messages; a row is accepted only
//! when the table yields none.

use super::entity::{MovieRecord, Winner};

/// One data row as read from the source, before validation
///
/// Columns absent from the source are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawMovieRow {
    pub year: String,
    pub title: String,
    pub studios: String,
    pub producers: String,
    pub winner: String,
}

/// A rejected data row
///
/// `line_number` counts data rows only (the header is not a line here),
/// starting at 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    pub line_number: usize,
    pub errors: Vec<String>,
}

/// Result of reading one source: accepted and rejected rows, both in source order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadOutcome {
    pub valid_movies: Vec<MovieRecord>,
    pub invalid_movies: Vec<ValidationFailure>,
}

struct ValidationRule {
    value: fn(&RawMovieRow) -> &str,
    is_valid: fn(&str) -> bool,
    message: fn(&str) -> String,
}

impl ValidationRule {
    fn check(&self, row: &RawMovieRow) -> Option<String> {
        let value = (self.value)(row);
        if (self.is_valid)(value) {
            None
        } else {
            Some((self.message)(value))
        }
    }
}

const RULES: [ValidationRule; 4] = [
    ValidationRule {
        value: year_of,
        is_valid: is_integer,
        message: invalid_year,
    },
    ValidationRule {
        value: title_of,
        is_valid: is_non_blank,
        message: invalid_title,
    },
    ValidationRule {
        value: studios_of,
        is_valid: is_non_blank,
        message: invalid_studios,
    },
    ValidationRule {
        value: producers_of,
        is_valid: is_non_blank,
        message: invalid_producers,
    },
];

fn year_of(row: &RawMovieRow) -> &str {
    &row.year
}

fn title_of(row: &RawMovieRow) -> &str {
    &row.title
}

fn studios_of(row: &RawMovieRow) -> &str {
    &row.studios
}

fn producers_of(row: &RawMovieRow) -> &str {
    &row.producers
}

// Range is not checked: "-5" or "99999" are accepted years.
fn is_integer(value: &str) -> bool {
    value.trim().parse::<i64>().is_ok()
}

fn is_non_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

fn invalid_year(value: &str) -> String {
    format!("Invalid year: {value}")
}

fn invalid_title(_: &str) -> String {
    "Title is empty or invalid".to_string()
}

fn invalid_studios(_: &str) -> String {
    "Studios is empty or invalid".to_string()
}

fn invalid_producers(_: &str) -> String {
    "Producers is empty or invalid".to_string()
}

/// Validate one data row
///
/// # Errors
///
/// Returns a `ValidationFailure` carrying every failed rule's message, in
/// rule order (year, title, studios, producers).
pub fn validate_row(
    row: RawMovieRow,
    line_number: usize,
) -> std::result::Result<MovieRecord, ValidationFailure> {
    let errors: Vec<String> = RULES.iter().filter_map(|rule| rule.check(&row)).collect();

    if !errors.is_empty() {
        return Err(ValidationFailure {
            line_number,
            errors,
        });
    }

    Ok(MovieRecord {
        year: row.year,
        title: row.title,
        studios: row.studios,
        producers: row.producers,
        winner: Winner::normalize(&row.winner),
    })
}

/// Single-pass accumulator for one read of a source
///
/// Owned by the reader for the duration of one read; rows are numbered in
/// the order they are pushed.
#[derive(Debug, Default)]
pub struct MovieIngestion {
    rows_seen: usize,
    outcome: ReadOutcome,
}

impl MovieIngestion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the next data row and route it to the valid or invalid list
    pub fn push(&mut self, row: RawMovieRow) {
        self.rows_seen += 1;
        match validate_row(row, self.rows_seen) {
            Ok(movie) => self.outcome.valid_movies.push(movie),
            Err(failure) => self.outcome.invalid_movies.push(failure),
        }
    }

    pub fn rows_seen(&self) -> usize {
        self.rows_seen
    }

    pub fn finish(self) -> ReadOutcome {
        self.outcome
    }
}
