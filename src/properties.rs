// Randomised checks that hold across every strategy.

use crate::dataset::Dataset;
use crate::generate_rules::generate_rules;
use crate::miner::Strategy;
use crate::vec_sets::split_out_item;
use quickcheck::quickcheck;

// Small alphabets and short datasets keep brute force tractable while still
// producing plenty of multi-item itemsets.
fn to_dataset(raw: &[Vec<u8>]) -> Dataset {
    Dataset::from_transactions(raw.iter().take(12).map(|t| {
        t.iter()
            .take(6)
            .map(|&i| format!("item{}", i % 7))
            .collect::<Vec<String>>()
    }))
}

fn to_fraction(x: u8) -> f64 {
    ((x % 10) + 1) as f64 / 10.0
}

quickcheck! {
    fn strategies_agree(raw: Vec<Vec<u8>>, support: u8) -> bool {
        let dataset = to_dataset(&raw);
        let support = to_fraction(support);
        let brute_force = Strategy::BruteForce.mine(&dataset, support).unwrap();
        let apriori = Strategy::Apriori.mine(&dataset, support).unwrap();
        let fpgrowth = Strategy::FPGrowth.mine(&dataset, support).unwrap();
        brute_force == apriori && apriori == fpgrowth
    }

    fn support_is_anti_monotone(raw: Vec<Vec<u8>>, support: u8) -> bool {
        let dataset = to_dataset(&raw);
        let frequent = Strategy::FPGrowth.mine(&dataset, to_fraction(support)).unwrap();
        let anti_monotone = frequent
            .iter()
            .filter(|(items, _)| items.len() > 1)
            .all(|(items, &count)| {
                items.iter().all(|item| match frequent.count(&split_out_item(items, item)) {
                    Some(subset_count) => subset_count >= count,
                    None => false,
                })
            });
        anti_monotone
    }

    fn mining_is_idempotent(raw: Vec<Vec<u8>>, support: u8) -> bool {
        let dataset = to_dataset(&raw);
        let support = to_fraction(support);
        Strategy::ALL.iter().all(|strategy| {
            strategy.mine(&dataset, support).unwrap() == strategy.mine(&dataset, support).unwrap()
        })
    }

    fn rules_respect_confidence(raw: Vec<Vec<u8>>, support: u8, confidence: u8) -> bool {
        let dataset = to_dataset(&raw);
        let min_confidence = to_fraction(confidence);
        let frequent = Strategy::Apriori.mine(&dataset, to_fraction(support)).unwrap();
        generate_rules(&frequent, min_confidence).unwrap().iter().all(|rule| {
            rule.confidence > 0.0 && rule.confidence <= 1.0 && rule.confidence >= min_confidence
        })
    }
}

#[test]
fn test_scenario_b_empty_dataset() {
    let dataset = Dataset::from_transactions(Vec::<Vec<String>>::new());
    for strategy in Strategy::ALL.iter() {
        let frequent = strategy.mine(&dataset, 0.4).unwrap();
        assert!(frequent.is_empty());
        assert!(generate_rules(&frequent, 0.4).unwrap().is_empty());
    }
}

#[test]
fn test_scenario_c_full_support() {
    let dataset = Dataset::from_transactions(vec![vec!["a"], vec!["a", "b"]]);
    let a = dataset.item("a").unwrap();
    for strategy in Strategy::ALL.iter() {
        let frequent = strategy.mine(&dataset, 1.0).unwrap();
        assert_eq!(frequent.len(), 1, "{}", strategy);
        assert_eq!(frequent.support(&[a]), Some(1.0));
    }
}

#[test]
fn test_itemset_at_exact_threshold_is_kept() {
    // 7 of 100 transactions is exactly 0.07 support.
    let mut transactions = vec![vec!["x"]; 7];
    transactions.extend(vec![vec!["y"]; 93]);
    let dataset = Dataset::from_transactions(transactions);
    let x = dataset.item("x").unwrap();
    for strategy in Strategy::ALL.iter() {
        let frequent = strategy.mine(&dataset, 0.07).unwrap();
        assert_eq!(frequent.support(&[x]), Some(0.07), "{}", strategy);
        assert_eq!(frequent.len(), 2, "{}", strategy);
    }
}
