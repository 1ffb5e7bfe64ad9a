//! Awards domain module
//!
//! Derives producer win intervals from validated movies and selects the
//! minimum and maximum interval sets.

mod aggregation;
mod entity;

pub use aggregation::aggregate_producer_awards;
pub use entity::{AwardCategory, AwardRanges, ProducerAward, ProducerInterval};
