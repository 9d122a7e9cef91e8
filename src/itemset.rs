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

use crate::item::Item;
use crate::itemizer::Itemizer;
use crate::support::fraction;
use fnv::FnvHashMap;
use std::cmp;
use std::collections::BTreeMap;

#[derive(Clone, Hash, PartialEq, Eq, Debug)]
pub struct ItemSet {
    pub items: Vec<Item>,
    pub count: u32,
}

// Smaller itemsets first, then by items.
impl Ord for ItemSet {
    fn cmp(&self, other: &ItemSet) -> cmp::Ordering {
        self.len()
            .cmp(&other.len())
            .then_with(|| self.items.cmp(&other.items))
            .then_with(|| self.count.cmp(&other.count))
    }
}

impl PartialOrd for ItemSet {
    fn partial_cmp(&self, other: &ItemSet) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl ItemSet {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn to_string(&self, itemizer: &Itemizer) -> String {
        Item::item_vec_to_string(&self.items, itemizer)
    }
}

/// Frequent itemsets mapped to their support counts, along with the size of
/// the dataset they were mined from so support fractions can be derived.
/// Keys are always sorted item vectors.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct FrequentItemsets {
    itemsets: FnvHashMap<Vec<Item>, u32>,
    num_transactions: usize,
}

impl FrequentItemsets {
    pub fn new(num_transactions: usize) -> FrequentItemsets {
        FrequentItemsets {
            itemsets: FnvHashMap::default(),
            num_transactions,
        }
    }

    pub fn insert(&mut self, mut items: Vec<Item>, count: u32) {
        items.sort();
        self.itemsets.insert(items, count);
    }

    pub fn count(&self, items: &[Item]) -> Option<u32> {
        self.itemsets.get(items).cloned()
    }

    pub fn support(&self, items: &[Item]) -> Option<f64> {
        self.count(items)
            .map(|count| fraction(count, self.num_transactions))
    }

    pub fn len(&self) -> usize {
        self.itemsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.itemsets.is_empty()
    }

    pub fn num_transactions(&self) -> usize {
        self.num_transactions
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Vec<Item>, &u32)> {
        self.itemsets.iter()
    }

    // Deterministic order: by size, then by items.
    pub fn sorted(&self) -> Vec<ItemSet> {
        let mut v: Vec<ItemSet> = self
            .itemsets
            .iter()
            .map(|(items, &count)| ItemSet {
                items: items.clone(),
                count,
            })
            .collect();
        v.sort();
        v
    }

    pub fn max_size(&self) -> usize {
        self.itemsets.keys().map(|items| items.len()).max().unwrap_or(0)
    }

    pub fn to_label_map(&self, itemizer: &Itemizer) -> BTreeMap<Vec<String>, u32> {
        self.itemsets
            .iter()
            .map(|(items, &count)| {
                let mut labels: Vec<String> = items
                    .iter()
                    .map(|&item| itemizer.str_of(item).to_owned())
                    .collect();
                labels.sort();
                (labels, count)
            })
            .collect()
    }
}
