//! Runs every mining strategy over the same dataset and times each one,
//! including rule generation over its output.

use crate::config::MiningConfig;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::generate_rules::generate_rules;
use crate::itemset::FrequentItemsets;
use crate::miner::Strategy;
use crate::rule::Rule;
use std::time::{Duration, Instant};
use tracing::{info, info_span};

/// What one strategy produced and how long mining plus rule generation took.
#[derive(Debug, Clone)]
pub struct StrategyReport {
    pub strategy: Strategy,
    pub elapsed: Duration,
    pub itemsets: FrequentItemsets,
    pub rules: Vec<Rule>,
}

impl StrategyReport {
    pub fn itemset_count(&self) -> usize {
        self.itemsets.len()
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    /// One report per strategy, in `Strategy::ALL` order.
    pub reports: Vec<StrategyReport>,
    pub fastest: Strategy,
}

impl BenchmarkResult {
    pub fn report(&self, strategy: Strategy) -> Option<&StrategyReport> {
        self.reports.iter().find(|r| r.strategy == strategy)
    }

    pub fn fastest_report(&self) -> Option<&StrategyReport> {
        self.report(self.fastest)
    }
}

pub fn run_strategy(
    dataset: &Dataset,
    config: &MiningConfig,
    strategy: Strategy,
) -> Result<StrategyReport> {
    let _span = info_span!("strategy", name = strategy.label()).entered();
    let start = Instant::now();
    let itemsets = strategy.mine(dataset, config.min_support())?;
    let rules = generate_rules(&itemsets, config.min_confidence())?;
    let elapsed = start.elapsed();
    info!(
        itemsets = itemsets.len(),
        rules = rules.len(),
        seconds = elapsed.as_secs_f64(),
        "strategy finished"
    );
    Ok(StrategyReport {
        strategy,
        elapsed,
        itemsets,
        rules,
    })
}

/// Runs brute force, Apriori and FPGrowth in that order, one after the
/// other, over the same dataset.
pub fn run(dataset: &Dataset, config: &MiningConfig) -> Result<BenchmarkResult> {
    let mut reports = Vec::with_capacity(Strategy::ALL.len());
    for &strategy in Strategy::ALL.iter() {
        reports.push(run_strategy(dataset, config, strategy)?);
    }
    let timings: Vec<(Strategy, Duration)> =
        reports.iter().map(|r| (r.strategy, r.elapsed)).collect();
    let fastest = pick_fastest(&timings).unwrap_or(Strategy::BruteForce);
    info!(fastest = fastest.label(), "benchmark complete");
    Ok(BenchmarkResult { reports, fastest })
}

// The strategy with the smallest time; on a tie the earliest listed wins.
pub fn pick_fastest(timings: &[(Strategy, Duration)]) -> Option<Strategy> {
    let mut best: Option<(Strategy, Duration)> = None;
    for &(strategy, elapsed) in timings {
        match best {
            Some((_, best_elapsed)) if elapsed >= best_elapsed => {}
            _ => best = Some((strategy, elapsed)),
        }
    }
    best.map(|(strategy, _)| strategy)
}
