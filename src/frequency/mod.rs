//! Frequency aggregation
//!
//! This module provides the word → count table, the streaming aggregator and
//! shard-parallel aggregation.

pub mod aggregator;
pub mod parallel;
pub mod table;

pub use aggregator::{aggregate, FrequencyAggregator};
pub use parallel::{aggregate_parallel, aggregate_shards};
pub use table::{Aggregate, FrequencyTable};
