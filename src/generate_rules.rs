use crate::error::Result;
use crate::item::Item;
use crate::itemset::FrequentItemsets;
use crate::rule::Rule;
use crate::support::{validate_fraction, MIN_CONFIDENCE};
use crate::vec_sets::difference;
use itertools::Itertools;
use tracing::debug;

// Every (antecedent, consequent) split of a sorted itemset where neither
// side is empty: 2^n - 2 of them, smallest antecedents first.
pub fn splits(itemset: &[Item]) -> impl Iterator<Item = (Vec<Item>, Vec<Item>)> + '_ {
    (1..itemset.len()).flat_map(move |size| {
        itemset.iter().cloned().combinations(size).map(move |antecedent| {
            let consequent = difference(itemset, &antecedent);
            (antecedent, consequent)
        })
    })
}

/// Derives every rule whose confidence is at least `min_confidence` from
/// the frequent itemsets of size two or more. Splits whose antecedent is
/// missing from `frequent` are skipped. Rules come out grouped by itemset,
/// in the collection's sorted order.
pub fn generate_rules(frequent: &FrequentItemsets, min_confidence: f64) -> Result<Vec<Rule>> {
    let min_confidence = validate_fraction(MIN_CONFIDENCE, min_confidence)?;
    let mut rules: Vec<Rule> = vec![];
    for itemset in frequent.sorted().iter().filter(|i| i.len() > 1) {
        for (antecedent, consequent) in splits(&itemset.items) {
            if let Some(rule) =
                Rule::make(antecedent, consequent, itemset.count, frequent, min_confidence)
            {
                rules.push(rule);
            }
        }
    }
    debug!(rules = rules.len(), "generated rules");
    Ok(rules)
}
