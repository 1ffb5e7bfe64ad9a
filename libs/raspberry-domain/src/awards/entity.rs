//! Award interval entities
//!
//! A `ProducerAward` is a derived row: one gap between two consecutive wins
//! of a producer, tagged with the extremum set (MIN or MAX) it belongs to.
//! The tag is internal; readers get a `ProducerInterval`.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::AwardsError;

/// Which extremum set an award belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AwardCategory {
    Min,
    Max,
}

impl AwardCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Min => "MIN",
            Self::Max => "MAX",
        }
    }
}

impl fmt::Display for AwardCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AwardCategory {
    type Err = AwardsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MIN" => Ok(Self::Min),
            "MAX" => Ok(Self::Max),
            other => Err(AwardsError::invalid_data(format!(
                "Unknown award category: {other}"
            ))),
        }
    }
}

/// The gap between two consecutive wins of one producer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProducerInterval {
    pub producer: String,
    pub interval: i64,
    pub previous_win: i64,
    pub following_win: i64,
}

impl ProducerInterval {
    /// Build the interval between two win years, `previous_win <= following_win`
    ///
    /// # Errors
    ///
    /// Returns `AwardsError::InvalidData` if the years are out of order or
    /// their gap does not fit in an `i64`.
    pub fn new(
        producer: impl Into<String>,
        previous_win: i64,
        following_win: i64,
    ) -> Result<Self, AwardsError> {
        let interval = following_win
            .checked_sub(previous_win)
            .filter(|interval| *interval >= 0)
            .ok_or_else(|| {
                AwardsError::invalid_data(format!(
                    "Interval between {previous_win} and {following_win} is out of range"
                ))
            })?;

        Ok(Self {
            producer: producer.into(),
            interval,
            previous_win,
            following_win,
        })
    }

    /// Tag this interval with the set it was selected into
    pub fn into_award(self, category: AwardCategory) -> ProducerAward {
        ProducerAward {
            producer: self.producer,
            interval: self.interval,
            previous_win: self.previous_win,
            following_win: self.following_win,
            category,
        }
    }
}

/// A persisted award interval
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProducerAward {
    pub producer: String,
    pub interval: i64,
    pub previous_win: i64,
    pub following_win: i64,
    pub category: AwardCategory,
}

impl From<ProducerAward> for ProducerInterval {
    fn from(award: ProducerAward) -> Self {
        Self {
            producer: award.producer,
            interval: award.interval,
            previous_win: award.previous_win,
            following_win: award.following_win,
        }
    }
}

/// Output of one aggregation run: the two extremum sets
///
/// When every candidate has the same interval, both sets hold the same
/// intervals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AwardRanges {
    pub min: Vec<ProducerAward>,
    pub max: Vec<ProducerAward>,
}
