//! Brute force mining: test every combination of the distinct items,
//! growing the combination size until a size yields nothing frequent.
//! No candidate is ever ruled out by its subsets, so cost grows with the
//! number of combinations of the item universe.

use crate::dataset::Dataset;
use crate::error::Result;
use crate::item::Item;
use crate::itemset::FrequentItemsets;
use crate::miner::{ItemsetMiner, Strategy};
use crate::support::{is_frequent, validate_fraction, MIN_SUPPORT};
use itertools::Itertools;
use tracing::{debug, info};

pub struct BruteForce;

impl ItemsetMiner for BruteForce {
    fn strategy(&self) -> Strategy {
        Strategy::BruteForce
    }

    fn mine(&self, dataset: &Dataset, min_support: f64) -> Result<FrequentItemsets> {
        let min_support = validate_fraction(MIN_SUPPORT, min_support)?;
        let items = dataset.distinct_items();
        let mut frequent = FrequentItemsets::new(dataset.len());

        // Sizes 1 and 2 are always enumerated in full.
        mine_size(dataset, &items, 1, min_support, &mut frequent);
        mine_size(dataset, &items, 2, min_support, &mut frequent);

        let mut k = 3;
        while mine_size(dataset, &items, k, min_support, &mut frequent) > 0 {
            k += 1;
        }

        info!(
            itemsets = frequent.len(),
            max_size = frequent.max_size(),
            "brute force mining complete"
        );
        Ok(frequent)
    }
}

// Counts every k-combination of items with a full scan of the dataset and
// records the frequent ones. Returns how many were frequent.
fn mine_size(
    dataset: &Dataset,
    items: &[Item],
    k: usize,
    min_support: f64,
    frequent: &mut FrequentItemsets,
) -> usize {
    let mut found = 0;
    for candidate in items.iter().cloned().combinations(k) {
        let count = dataset.count_containing(&candidate);
        if is_frequent(count, dataset.len(), min_support) {
            frequent.insert(candidate, count);
            found += 1;
        }
    }
    debug!(size = k, found, "brute force level");
    found
}
