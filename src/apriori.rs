//! Level-wise Apriori mining. Candidates of size k are joined from frequent
//! (k-1)-itemsets sharing their first k-2 items, and any candidate with an
//! infrequent (k-1)-subset is discarded before support counting.

use crate::dataset::Dataset;
use crate::error::Result;
use crate::item::Item;
use crate::itemset::FrequentItemsets;
use crate::miner::{ItemsetMiner, Strategy};
use crate::support::{is_frequent, validate_fraction, MIN_SUPPORT};
use crate::vec_sets::{is_subset, split_out_item, union};
use fnv::FnvHashSet;
use tracing::{debug, info};

pub struct Apriori;

impl ItemsetMiner for Apriori {
    fn strategy(&self) -> Strategy {
        Strategy::Apriori
    }

    fn mine(&self, dataset: &Dataset, min_support: f64) -> Result<FrequentItemsets> {
        let min_support = validate_fraction(MIN_SUPPORT, min_support)?;
        let mut frequent = FrequentItemsets::new(dataset.len());

        let item_count = dataset.item_counts();
        let mut level: Vec<Vec<Item>> = vec![];
        for item in item_count.items_with_count_at_least(1) {
            let count = item_count.get(&item);
            if is_frequent(count, dataset.len(), min_support) {
                frequent.insert(vec![item], count);
                level.push(vec![item]);
            }
        }
        debug!(size = 1, found = level.len(), "apriori level");

        let mut k = 2;
        while !level.is_empty() {
            let candidates = generate_candidates(&level);
            let counts = count_candidates(dataset, &candidates, k);
            let mut next_level = vec![];
            for (candidate, count) in candidates.into_iter().zip(counts) {
                if is_frequent(count, dataset.len(), min_support) {
                    frequent.insert(candidate.clone(), count);
                    next_level.push(candidate);
                }
            }
            debug!(size = k, found = next_level.len(), "apriori level");
            level = next_level;
            k += 1;
        }

        info!(
            itemsets = frequent.len(),
            max_size = frequent.max_size(),
            "apriori mining complete"
        );
        Ok(frequent)
    }
}

// Joins sorted frequent (k-1)-itemsets which agree on all but their last
// item, keeping only candidates whose every (k-1)-subset is frequent.
// `level` must be sorted; the output is then sorted too.
pub fn generate_candidates(level: &[Vec<Item>]) -> Vec<Vec<Item>> {
    let previous: FnvHashSet<&[Item]> = level.iter().map(|v| v.as_slice()).collect();
    let mut candidates = vec![];
    for i in 0..level.len() {
        let a = &level[i];
        let prefix = &a[..a.len() - 1];
        for b in &level[i + 1..] {
            if &b[..b.len() - 1] != prefix {
                // Itemsets sharing a prefix are adjacent.
                break;
            }
            let candidate = union(a, b);
            let all_subsets_frequent = candidate
                .iter()
                .all(|item| previous.contains(split_out_item(&candidate, item).as_slice()));
            if all_subsets_frequent {
                candidates.push(candidate);
            }
        }
    }
    candidates
}

// One pass over the dataset counting every candidate of size k.
fn count_candidates(dataset: &Dataset, candidates: &[Vec<Item>], k: usize) -> Vec<u32> {
    let mut counts = vec![0u32; candidates.len()];
    if candidates.is_empty() {
        return counts;
    }
    for transaction in dataset.transactions().iter().filter(|t| t.len() >= k) {
        for (candidate, count) in candidates.iter().zip(counts.iter_mut()) {
            if is_subset(candidate, transaction) {
                *count += 1;
            }
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::{generate_candidates, Apriori};
    use crate::dataset::Dataset;
    use crate::exhaustive::BruteForce;
    use crate::item::Item;
    use crate::miner::ItemsetMiner;

    fn to_item_vec(nums: &[u32]) -> Vec<Item> {
        nums.iter().map(|&i| Item::with_id(i)).collect()
    }

    #[test]
    fn test_generate_candidates_joins_on_prefix() {
        let level: Vec<Vec<Item>> = [vec![1, 2], vec![1, 3], vec![2, 3], vec![2, 4]]
            .iter()
            .map(|v| to_item_vec(v))
            .collect();
        // {1,2,3} survives; {2,3,4} is dropped because {3,4} isn't frequent.
        assert_eq!(generate_candidates(&level), vec![to_item_vec(&[1, 2, 3])]);
    }

    #[test]
    fn test_generate_candidates_from_singletons() {
        let level: Vec<Vec<Item>> = [vec![1], vec![2], vec![5]]
            .iter()
            .map(|v| to_item_vec(v))
            .collect();
        assert_eq!(
            generate_candidates(&level),
            vec![to_item_vec(&[1, 2]), to_item_vec(&[1, 5]), to_item_vec(&[2, 5])]
        );
    }

    #[test]
    fn test_matches_brute_force() {
        let dataset = Dataset::from_transactions(vec![
            vec!["a", "b", "c"],
            vec!["d", "b", "c"],
            vec!["a", "b", "e"],
            vec!["f", "g", "c"],
            vec!["d", "g", "e"],
            vec!["f", "b", "c"],
            vec!["f", "b", "c"],
            vec!["a", "b", "e"],
            vec!["a", "b", "c"],
            vec!["a", "b", "e"],
            vec!["a", "b", "e"],
        ]);
        for &support in &[0.05, 0.1, 0.2, 0.3, 0.5, 0.9] {
            assert_eq!(
                Apriori.mine(&dataset, support).unwrap(),
                BruteForce.mine(&dataset, support).unwrap()
            );
        }
    }

    #[test]
    fn test_scenario_c() {
        let dataset = Dataset::from_transactions(vec![vec!["a"], vec!["a", "b"]]);
        let frequent = Apriori.mine(&dataset, 1.0).unwrap();
        let a = dataset.item("a").unwrap();
        assert_eq!(frequent.len(), 1);
        assert_eq!(frequent.support(&[a]), Some(1.0));
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::from_transactions(Vec::<Vec<&str>>::new());
        assert!(Apriori.mine(&dataset, 0.5).unwrap().is_empty());
    }
}
