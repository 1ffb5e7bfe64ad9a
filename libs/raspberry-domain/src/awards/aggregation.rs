//! Producer award interval aggregation
//!
//! Winning movies credit their year to every listed producer. For each
//! producer with two or more wins, every pair of consecutive win years is a
//! candidate interval. The MIN set is every candidate equal to the smallest
//! interval and the MAX set every candidate equal to the largest; ties are
//! all kept.

use std::collections::HashMap;

use tracing::debug;

use super::entity::{AwardCategory, AwardRanges, ProducerAward, ProducerInterval};
use crate::error::{AwardsError, Result};
use crate::movies::MovieRecord;

/// Win years per producer, in order of first discovery
///
/// Owned by a single aggregation call.
#[derive(Debug, Default)]
struct ProducerWins {
    positions: HashMap<String, usize>,
    wins: Vec<(String, Vec<i64>)>,
}

impl ProducerWins {
    fn record(&mut self, producer: &str, year: i64) {
        match self.positions.get(producer) {
            Some(&position) => self.wins[position].1.push(year),
            None => {
                self.positions.insert(producer.to_string(), self.wins.len());
                self.wins.push((producer.to_string(), vec![year]));
            }
        }
    }

    fn into_candidates(self) -> Result<Vec<ProducerInterval>> {
        let mut candidates = Vec::new();

        for (producer, mut years) in self.wins {
            years.sort_unstable();
            for pair in years.windows(2) {
                candidates.push(ProducerInterval::new(producer.clone(), pair[0], pair[1])?);
            }
        }

        Ok(candidates)
    }
}

fn collect_wins(movies: &[MovieRecord]) -> Result<ProducerWins> {
    let mut wins = ProducerWins::default();

    for movie in movies.iter().filter(|movie| movie.winner.is_winner()) {
        let year: i64 = movie
            .year
            .trim()
            .parse()
            .map_err(|_| AwardsError::invalid_data(format!("Invalid year: {}", movie.year)))?;

        // "A, B, A" credits A once for this movie
        let mut credited: Vec<&str> = Vec::new();
        for producer in movie.producer_names() {
            if credited.contains(&producer) {
                continue;
            }
            credited.push(producer);
            wins.record(producer, year);
        }
    }

    Ok(wins)
}

/// Compute the MIN and MAX producer award sets for one batch of movies
///
/// # Errors
///
/// - `AwardsError::NoPrizeRange` if no producer has two or more wins
/// - `AwardsError::InvalidData` if a winning movie's year is not an integer,
///   or the gap between two win years does not fit in an `i64`
pub fn aggregate_producer_awards(movies: &[MovieRecord]) -> Result<AwardRanges> {
    let candidates = collect_wins(movies)?.into_candidates()?;

    let intervals = candidates.iter().map(|candidate| candidate.interval);
    let (Some(min_interval), Some(max_interval)) = (intervals.clone().min(), intervals.max())
    else {
        return Err(AwardsError::NoPrizeRange);
    };

    debug!(
        candidates = candidates.len(),
        min_interval,
        max_interval,
        "Computed producer intervals"
    );

    let select = |target: i64, category: AwardCategory| -> Vec<ProducerAward> {
        candidates
            .iter()
            .filter(|candidate| candidate.interval == target)
            .map(|candidate| candidate.clone().into_award(category))
            .collect()
    };

    Ok(AwardRanges {
        min: select(min_interval, AwardCategory::Min),
        max: select(max_interval, AwardCategory::Max),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movies::{MovieIngestion, RawMovieRow, Winner};

    fn win(year: &str, producers: &str) -> MovieRecord {
        MovieRecord::new(year, "Movie", "Studio", producers, Winner::Yes)
    }

    fn nomination(year: &str, producers: &str) -> MovieRecord {
        MovieRecord::new(year, "Movie", "Studio", producers, Winner::No)
    }

    fn award(producer: &str, previous: i64, following: i64, category: AwardCategory) -> ProducerAward {
        ProducerInterval::new(producer, previous, following).unwrap().into_award(category)
    }

    #[test]
    fn test_three_wins_yield_distinct_min_and_max() {
        let movies = vec![win("2020", "P1"), win("2021", "P1"), win("2023", "P1")];

        let ranges = aggregate_producer_awards(&movies).unwrap();

        assert_eq!(ranges.min, vec![award("P1", 2020, 2021, AwardCategory::Min)]);
        assert_eq!(ranges.max, vec![award("P1", 2021, 2023, AwardCategory::Max)]);
    }

    #[test]
    fn test_single_interval_appears_in_both_sets() {
        let movies = vec![win("2020", "Producer 1"), win("2021", "Producer 1")];

        let ranges = aggregate_producer_awards(&movies).unwrap();

        assert_eq!(ranges.min, vec![award("Producer 1", 2020, 2021, AwardCategory::Min)]);
        assert_eq!(ranges.max, vec![award("Producer 1", 2020, 2021, AwardCategory::Max)]);
    }

    #[test]
    fn test_single_win_has_no_prize_range() {
        let movies = vec![win("1980", "Allan Carr")];

        let err = aggregate_producer_awards(&movies).unwrap_err();

        assert!(matches!(err, AwardsError::NoPrizeRange));
        assert_eq!(err.to_string(), "No prize range has been calculated.");
    }

    #[test]
    fn test_non_winners_are_ignored() {
        let movies = vec![nomination("2020", "Producer 1"), nomination("2021", "Producer 1")];

        assert!(matches!(
            aggregate_producer_awards(&movies),
            Err(AwardsError::NoPrizeRange)
        ));
    }

    #[test]
    fn test_ties_at_minimum_are_all_kept() {
        let movies = vec![
            win("1990", "Joel Silver"),
            win("2000", "Bo Derek"),
            win("1991", "Joel Silver"),
            win("2001", "Bo Derek"),
            win("2015", "Bo Derek"),
        ];

        let ranges = aggregate_producer_awards(&movies).unwrap();

        assert_eq!(
            ranges.min,
            vec![
                award("Joel Silver", 1990, 1991, AwardCategory::Min),
                award("Bo Derek", 2000, 2001, AwardCategory::Min),
            ]
        );
        assert_eq!(ranges.max, vec![award("Bo Derek", 2001, 2015, AwardCategory::Max)]);
    }

    #[test]
    fn test_co_produced_win_credits_each_producer() {
        let movies = vec![
            win("2008", "Bo Derek, John Derek"),
            win("2010", "John Derek and Friends, Bo Derek"),
            win("2013", "John Derek"),
        ];

        let ranges = aggregate_producer_awards(&movies).unwrap();

        assert_eq!(ranges.min, vec![award("Bo Derek", 2008, 2010, AwardCategory::Min)]);
        assert_eq!(ranges.max, vec![award("John Derek", 2008, 2013, AwardCategory::Max)]);
    }

    #[test]
    fn test_producer_listed_twice_on_one_movie_is_credited_once() {
        let movies = vec![win("2000", "Ann, Ann"), win("2004", "Ann")];

        let ranges = aggregate_producer_awards(&movies).unwrap();

        assert_eq!(ranges.min, vec![award("Ann", 2000, 2004, AwardCategory::Min)]);
        assert_eq!(ranges.max, vec![award("Ann", 2000, 2004, AwardCategory::Max)]);
    }

    #[test]
    fn test_wins_are_sorted_before_pairing() {
        let movies = vec![win("2010", "Ann"), win("2001", "Ann"), win("2004", "Ann")];

        let ranges = aggregate_producer_awards(&movies).unwrap();

        assert_eq!(ranges.min, vec![award("Ann", 2001, 2004, AwardCategory::Min)]);
        assert_eq!(ranges.max, vec![award("Ann", 2004, 2010, AwardCategory::Max)]);
    }

    #[test]
    fn test_two_wins_in_same_year_give_zero_interval() {
        let movies = vec![win("1999", "Ann"), win("1999", "Ann"), win("2005", "Ann")];

        let ranges = aggregate_producer_awards(&movies).unwrap();

        assert_eq!(ranges.min, vec![award("Ann", 1999, 1999, AwardCategory::Min)]);
        assert_eq!(ranges.min[0].interval, 0);
    }

    #[test]
    fn test_aggregation_is_repeatable() {
        let movies = vec![
            win("1990", "Joel Silver"),
            win("1991", "Joel Silver"),
            win("2002", "Matthew Vaughn"),
            win("2015", "Matthew Vaughn"),
        ];

        let first = aggregate_producer_awards(&movies).unwrap();
        let second = aggregate_producer_awards(&movies).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_unparseable_winner_year_is_invalid_data() {
        let movies = vec![win("19x0", "Ann"), win("1990", "Ann")];

        let err = aggregate_producer_awards(&movies).unwrap_err();
        assert!(matches!(err, AwardsError::InvalidData(_)));
    }

    #[test]
    fn test_extreme_validated_years_fail_instead_of_overflowing() {
        let mut ingestion = MovieIngestion::new();
        for year in [i64::MIN, i64::MAX] {
            ingestion.push(RawMovieRow {
                year: year.to_string(),
                title: "Movie".to_string(),
                studios: "Studio".to_string(),
                producers: "Producer 1".to_string(),
                winner: "yes".to_string(),
            });
        }
        let outcome = ingestion.finish();
        assert_eq!(outcome.valid_movies.len(), 2);

        let err = aggregate_producer_awards(&outcome.valid_movies).unwrap_err();
        assert!(matches!(err, AwardsError::InvalidData(_)));
    }

    #[test]
    fn test_extreme_years_with_small_gap_are_accepted() {
        let movies = vec![
            win(&i64::MAX.to_string(), "Producer 1"),
            win(&(i64::MAX - 1).to_string(), "Producer 1"),
        ];

        let ranges = aggregate_producer_awards(&movies).unwrap();
        assert_eq!(ranges.min[0].interval, 1);
    }
}
