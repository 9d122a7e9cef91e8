//! Threshold validation and the support rule shared by every miner.
//!
//! An itemset seen in `count` of `num_transactions` transactions is frequent
//! when its support fraction `count / num_transactions` is at least
//! `min_support`. This is the same fraction `FrequentItemsets::support`
//! reports, so an itemset sitting exactly on the threshold is kept. The
//! FPTree needs an integer threshold, so [`min_count`] returns the smallest
//! count satisfying the same predicate; all miners therefore agree on
//! itemsets sitting exactly on the boundary.

use crate::error::{MiningError, Result};

pub const MIN_SUPPORT: &str = "Minimum support";
pub const MIN_CONFIDENCE: &str = "Minimum confidence";

/// Rejects thresholds outside (0, 1], including NaN.
pub fn validate_fraction(name: &'static str, value: f64) -> Result<f64> {
    if value > 0.0 && value <= 1.0 {
        Ok(value)
    } else {
        Err(MiningError::InvalidThreshold { name, value })
    }
}

pub fn is_frequent(count: u32, num_transactions: usize, min_support: f64) -> bool {
    num_transactions > 0 && fraction(count, num_transactions) >= min_support
}

pub fn min_count(num_transactions: usize, min_support: f64) -> u32 {
    let mut count = (min_support * num_transactions as f64).ceil().max(1.0) as u32;
    // Nudge across any floating point error in the ceil.
    while count > 1 && is_frequent(count - 1, num_transactions, min_support) {
        count -= 1;
    }
    while !is_frequent(count, num_transactions, min_support) && (count as usize) <= num_transactions {
        count += 1;
    }
    count
}

pub fn fraction(count: u32, num_transactions: usize) -> f64 {
    if num_transactions == 0 {
        return 0.0;
    }
    count as f64 / num_transactions as f64
}
