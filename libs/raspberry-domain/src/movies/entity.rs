//! Domain entities for movie nominations
//!
//! A `MovieRecord` is one validated row of the nominee list. Records are only
//! produced by the validation pipeline or read back from storage; they are
//! never mutated after creation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether a nomination won the award
///
/// The input column is free text; normalization is total, so a row never
/// fails validation because of this field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Yes,
    No,
}

impl Winner {
    /// Normalize raw column text: case-insensitive `yes` is a win, anything
    /// else (including an empty cell or padded text) is not.
    pub fn normalize(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("yes") {
            Self::Yes
        } else {
            Self::No
        }
    }

    /// Canonical text form, as stored and served
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }

    pub fn is_winner(&self) -> bool {
        matches!(self, Self::Yes)
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated movie nomination
///
/// `year` keeps the numeric text of the source row and `producers` keeps the
/// comma-separated list as written; award aggregation splits it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub year: String,
    pub title: String,
    pub studios: String,
    pub producers: String,
    pub winner: Winner,
}

impl MovieRecord {
    pub fn new(
        year: impl Into<String>,
        title: impl Into<String>,
        studios: impl Into<String>,
        producers: impl Into<String>,
        winner: Winner,
    ) -> Self {
        Self {
            year: year.into(),
            title: title.into(),
            studios: studios.into(),
            producers: producers.into(),
            winner,
        }
    }

    /// Individual producer names, trimmed, in listed order
    ///
    /// Empty entries left by stray commas are skipped.
    pub fn producer_names(&self) -> impl Iterator<Item = &str> {
        self.producers
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winner_normalization_is_case_insensitive() {
        assert_eq!(Winner::normalize("yes"), Winner::Yes);
        assert_eq!(Winner::normalize("YES"), Winner::Yes);
        assert_eq!(Winner::normalize("Yes"), Winner::Yes);
    }

    #[test]
    fn test_winner_normalization_defaults_to_no() {
        assert_eq!(Winner::normalize("no"), Winner::No);
        assert_eq!(Winner::normalize(""), Winner::No);
        assert_eq!(Winner::normalize("maybe"), Winner::No);
        assert_eq!(Winner::normalize("yess"), Winner::No);
    }

    #[test]
    fn test_padded_yes_is_not_a_win() {
        assert_eq!(Winner::normalize(" yes"), Winner::No);
        assert_eq!(Winner::normalize("yes "), Winner::No);
    }

    #[test]
    fn test_winner_serializes_lowercase() {
        let json = serde_json::to_string(&Winner::Yes).unwrap();
        assert_eq!(json, "\"yes\"");
        assert_eq!(Winner::No.to_string(), "no");
    }

    #[test]
    fn test_producer_names_are_split_and_trimmed() {
        let movie = MovieRecord::new(
            "1980",
            "Can't Stop the Music",
            "Associated Film Distribution",
            "Allan Carr,  Jacques Morali , ",
            Winner::Yes,
        );

        let names: Vec<&str> = movie.producer_names().collect();
        assert_eq!(names, vec!["Allan Carr", "Jacques Morali"]);
    }
}
