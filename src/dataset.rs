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
use crate::item_counter::ItemCounter;
use crate::itemizer::Itemizer;
use crate::vec_sets::is_subset;

/// An immutable, in-memory sequence of transactions. Each transaction is
/// stored sorted and duplicate free. Miners only ever borrow it.
pub struct Dataset {
    transactions: Vec<Vec<Item>>,
    itemizer: Itemizer,
}

impl Dataset {
    pub fn from_transactions<I, T, S>(transactions: I) -> Dataset
    where
        I: IntoIterator<Item = T>,
        T: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut itemizer = Itemizer::new();
        let raw: Vec<Vec<Item>> = transactions
            .into_iter()
            .map(|t| t.into_iter().map(|s| itemizer.id_of(s.as_ref())).collect())
            .collect();

        // Renumber so ids follow label order, then sort and drop duplicate
        // items within each transaction.
        let remap = itemizer.reorder_sorted();
        let transactions = raw
            .into_iter()
            .map(|t| {
                let mut t: Vec<Item> = t.into_iter().map(|i| remap[i.as_index()]).collect();
                t.sort();
                t.dedup();
                t
            })
            .collect();

        Dataset {
            transactions,
            itemizer,
        }
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn transactions(&self) -> &[Vec<Item>] {
        &self.transactions
    }

    pub fn itemizer(&self) -> &Itemizer {
        &self.itemizer
    }

    pub fn item(&self, label: &str) -> Option<Item> {
        self.itemizer.get(label)
    }

    pub fn item_counts(&self) -> ItemCounter {
        let mut counter = ItemCounter::new();
        for transaction in &self.transactions {
            for item in transaction {
                counter.add(item, 1);
            }
        }
        counter
    }

    // Every item that appears in at least one transaction, in label order.
    pub fn distinct_items(&self) -> Vec<Item> {
        self.item_counts().items_with_count_at_least(1)
    }

    // Full scan: number of transactions containing every item of itemset.
    pub fn count_containing(&self, itemset: &[Item]) -> u32 {
        self.transactions
            .iter()
            .filter(|t| is_subset(itemset, t))
            .count() as u32
    }
}
