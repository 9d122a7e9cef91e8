//! Plain text and CSV rendering of benchmark output.

use crate::benchmark::BenchmarkResult;
use crate::itemizer::Itemizer;
use crate::itemset::FrequentItemsets;
use crate::rule::Rule;
use crate::support::fraction;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::io::{self, Write};

pub fn summary(dataset_name: &str, result: &BenchmarkResult) -> Vec<String> {
    let mut lines: Vec<String> = result
        .reports
        .iter()
        .map(|report| {
            format!(
                "{}: {} frequent itemsets and {} rules found in {:.5} seconds.",
                report.strategy,
                report.itemset_count(),
                report.rule_count(),
                report.elapsed.as_secs_f64()
            )
        })
        .collect();
    if let Some(fastest) = result.fastest_report() {
        lines.push(format!(
            "The fastest algorithm for {} is {} with a time of {:.5} sec.",
            dataset_name,
            fastest.strategy,
            fastest.elapsed.as_secs_f64()
        ));
    }
    lines
}

pub fn itemset_lines(itemsets: &FrequentItemsets, itemizer: &Itemizer) -> Vec<String> {
    let n = itemsets.num_transactions();
    itemsets
        .sorted()
        .iter()
        .map(|itemset| {
            format!(
                "{} (support {:.4})",
                itemset.to_string(itemizer),
                fraction(itemset.count, n)
            )
        })
        .collect()
}

// Highest confidence first, then highest support, then by text.
pub fn sort_rules<'a>(rules: &'a [Rule], itemizer: &Itemizer) -> Vec<(&'a Rule, String)> {
    let mut v: Vec<(&Rule, String)> = rules.iter().map(|r| (r, r.to_string(itemizer))).collect();
    v.sort_by_key(|(rule, text)| {
        (
            Reverse(OrderedFloat(rule.confidence)),
            Reverse(OrderedFloat(rule.support)),
            text.clone(),
        )
    });
    v
}

pub fn rule_lines(rules: &[Rule], itemizer: &Itemizer) -> Vec<String> {
    sort_rules(rules, itemizer)
        .into_iter()
        .map(|(rule, text)| {
            format!(
                "{} confidence={:.4} support={:.4}",
                text, rule.confidence, rule.support
            )
        })
        .collect()
}

pub fn write_rules_csv<W: Write>(output: &mut W, rules: &[Rule], itemizer: &Itemizer) -> io::Result<()> {
    writeln!(output, "Antecedent->Consequent,Confidence,Support")?;
    for (rule, text) in sort_rules(rules, itemizer) {
        writeln!(output, "{},{},{}", text, rule.confidence, rule.support)?;
    }
    Ok(())
}
