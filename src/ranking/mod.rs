//! Ranking and derived statistics
//!
//! Operates only on a finished aggregate; no I/O happens here.

pub mod stats;
pub mod top_n;

pub use stats::{summary_stats, top_n_ratio};
pub use top_n::{covered_count, rank_all, top_n};
