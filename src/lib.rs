// Copyright 2018 Chris Pearce
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Frequent itemset mining and association rule generation, with three
//! interchangeable strategies (brute force, Apriori, FPGrowth) and a
//! harness that times them against each other.
//!
//! ```
//! use basket::{benchmark, Dataset, MiningConfig};
//!
//! let dataset = Dataset::from_transactions(vec![
//!     vec!["a", "b"],
//!     vec!["a", "b", "c"],
//!     vec!["a"],
//!     vec!["b", "c"],
//! ]);
//! let config = MiningConfig::new(0.5, 0.5).unwrap();
//! let result = benchmark::run(&dataset, &config).unwrap();
//! assert!(result.reports.iter().all(|r| r.itemset_count() == 5));
//! ```

pub mod apriori;
pub mod benchmark;
pub mod config;
pub mod dataset;
pub mod error;
pub mod exhaustive;
pub mod fptree;
pub mod generate_rules;
pub mod item;
pub mod item_counter;
pub mod itemizer;
pub mod itemset;
pub mod miner;
pub mod report;
pub mod rule;
pub mod support;
pub mod transaction_reader;
pub mod vec_sets;

#[cfg(test)]
mod properties;

pub use benchmark::{BenchmarkResult, StrategyReport};
pub use config::MiningConfig;
pub use dataset::Dataset;
pub use error::{MiningError, Result};
pub use itemset::{FrequentItemsets, ItemSet};
pub use miner::{ItemsetMiner, Strategy};
pub use rule::Rule;
