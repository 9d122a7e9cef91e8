//! The common interface of the three mining strategies.

use crate::apriori::Apriori;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::exhaustive::BruteForce;
use crate::fptree::FPGrowth;
use crate::itemset::FrequentItemsets;
use std::fmt;

/// Mines every itemset whose support fraction is at least `min_support`.
/// Implementations validate the threshold and return an empty collection
/// for an empty dataset.
pub trait ItemsetMiner {
    fn strategy(&self) -> Strategy;
    fn mine(&self, dataset: &Dataset, min_support: f64) -> Result<FrequentItemsets>;
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Strategy {
    BruteForce,
    Apriori,
    FPGrowth,
}

impl Strategy {
    /// Benchmark order. Also the tie-break order when timings are equal.
    pub const ALL: [Strategy; 3] = [Strategy::BruteForce, Strategy::Apriori, Strategy::FPGrowth];

    pub fn label(&self) -> &'static str {
        match *self {
            Strategy::BruteForce => "Brute Force",
            Strategy::Apriori => "Apriori",
            Strategy::FPGrowth => "FP-Growth",
        }
    }

    pub fn miner(&self) -> Box<dyn ItemsetMiner> {
        match *self {
            Strategy::BruteForce => Box::new(BruteForce),
            Strategy::Apriori => Box::new(Apriori),
            Strategy::FPGrowth => Box::new(FPGrowth),
        }
    }

    pub fn mine(&self, dataset: &Dataset, min_support: f64) -> Result<FrequentItemsets> {
        self.miner().mine(dataset, min_support)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}
