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

use crate::dataset::Dataset;
use crate::error::Result;
use crate::item::Item;
use crate::item_counter::ItemCounter;
use crate::itemset::FrequentItemsets;
use crate::miner::{ItemsetMiner, Strategy};
use crate::support::{min_count, validate_fraction, MIN_SUPPORT};
use fnv::FnvHashMap;
use tracing::{debug, info};

const ROOT: usize = 0;

#[derive(Debug)]
struct FPNode {
    item: Item,
    count: u32,
    children: FnvHashMap<Item, usize>,
    parent: usize,
}

impl FPNode {
    fn new(item: Item, parent: usize) -> FPNode {
        FPNode {
            item,
            count: 0,
            children: FnvHashMap::default(),
            parent,
        }
    }

    fn is_root(&self) -> bool {
        self.item.is_null()
    }
}

/// A prefix tree over frequency ordered transactions. Nodes live in an
/// arena and refer to each other by index; `item_lists` is the per item
/// index of every node holding that item, in insertion order.
pub struct FPTree {
    nodes: Vec<FPNode>,
    item_count: ItemCounter,
    item_lists: Vec<Vec<usize>>,
    num_transactions: u32,
}

impl FPTree {
    pub fn new() -> FPTree {
        FPTree {
            // Add root.
            nodes: vec![FPNode::new(Item::null(), ROOT)],
            item_count: ItemCounter::new(),
            item_lists: Vec::new(),
            num_transactions: 0,
        }
    }

    /// Builds a tree from weighted transactions in two passes: count each
    /// item, then insert every transaction with its infrequent items dropped
    /// and the rest ordered most frequent first.
    pub fn build<'a, I>(transactions: I, min_count: u32) -> FPTree
    where
        I: IntoIterator<Item = (&'a [Item], u32)> + Clone,
    {
        let mut item_count = ItemCounter::new();
        for (transaction, count) in transactions.clone() {
            for item in transaction {
                item_count.add(item, count);
            }
        }

        let mut tree = FPTree::new();
        let mut filtered: Vec<Item> = vec![];
        for (transaction, count) in transactions {
            filtered.clear();
            filtered.extend(
                transaction
                    .iter()
                    .filter(|item| item_count.get(item) >= min_count),
            );
            item_count.sort_descending(&mut filtered);
            tree.insert(&filtered, count);
        }
        tree
    }

    fn add_node(&mut self, parent: usize, item: Item) -> usize {
        let id = self.nodes.len();
        self.nodes.push(FPNode::new(item, parent));
        self.nodes[parent].children.insert(item, id);
        self.add_to_item_list(item, id);
        id
    }

    fn add_to_item_list(&mut self, item: Item, id: usize) {
        let index = item.as_index();
        if index >= self.item_lists.len() {
            self.item_lists.resize(index + 1, vec![]);
        }
        self.item_lists[index].push(id);
    }

    fn child_of(&self, id: usize, item: Item) -> Option<usize> {
        self.nodes[id].children.get(&item).cloned()
    }

    fn insert_child(&mut self, id: usize, item: Item, count: u32) -> usize {
        let child_id = match self.child_of(id, item) {
            Some(child_id) => child_id,
            None => self.add_node(id, item),
        };
        self.nodes[child_id].count += count;
        child_id
    }

    pub fn insert(&mut self, transaction: &[Item], count: u32) {
        self.num_transactions += count;
        // Start iterating at the root node.
        let mut id = ROOT;
        for &item in transaction {
            // Keep a count of item frequencies of what's in the
            // tree to make sorting later easier.
            self.item_count.add(&item, count);
            id = self.insert_child(id, item, count);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes[ROOT].children.is_empty()
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn num_transactions(&self) -> u32 {
        self.num_transactions
    }

    pub fn item_support(&self, item: Item) -> u32 {
        self.item_count.get(&item)
    }

    // Items present in the tree, most frequent first.
    pub fn header(&self) -> Vec<Item> {
        let mut items = self.item_count.items_with_count_at_least(1);
        self.item_count.sort_descending(&mut items);
        items
    }

    /// The prefix path above every node holding `item`, weighted by that
    /// node's count.
    pub fn conditional_pattern_base(&self, item: Item) -> Vec<(Vec<Item>, u32)> {
        let item_list = match self.item_lists.get(item.as_index()) {
            Some(list) => list,
            None => return vec![],
        };
        item_list
            .iter()
            .map(|&node_id| {
                (
                    self.path_from_root_to_excluding(node_id),
                    self.nodes[node_id].count,
                )
            })
            .filter(|(path, _)| !path.is_empty())
            .collect()
    }

    fn path_from_root_to_excluding(&self, node_id: usize) -> Vec<Item> {
        let mut path = vec![];
        let mut id = self.nodes[node_id].parent;
        loop {
            let node = &self.nodes[id];
            if node.is_root() {
                break;
            }
            path.push(node.item);
            id = node.parent;
        }
        path.reverse();
        path
    }

    pub fn construct_conditional_tree(&self, item: Item, min_count: u32) -> FPTree {
        let base = self.conditional_pattern_base(item);
        FPTree::build(base.iter().map(|(path, count)| (path.as_slice(), *count)), min_count)
    }
}

impl Default for FPTree {
    fn default() -> FPTree {
        FPTree::new()
    }
}

/// Mines `fptree` for itemsets extending `suffix`. Items are visited least
/// frequent first; each is reported with `suffix` and then its conditional
/// tree is mined in turn.
pub fn fp_growth(
    fptree: &FPTree,
    min_count: u32,
    suffix: &[Item],
    frequent: &mut FrequentItemsets,
) {
    for item in fptree.header().into_iter().rev() {
        let support = fptree.item_support(item);
        if support < min_count {
            continue;
        }
        let mut itemset: Vec<Item> = Vec::with_capacity(suffix.len() + 1);
        itemset.extend_from_slice(suffix);
        itemset.push(item);

        let conditional_tree = fptree.construct_conditional_tree(item, min_count);
        if !conditional_tree.is_empty() {
            debug!(
                depth = itemset.len(),
                nodes = conditional_tree.num_nodes(),
                "mining conditional tree"
            );
            fp_growth(&conditional_tree, min_count, &itemset, frequent);
        }
        frequent.insert(itemset, support);
    }
}

pub struct FPGrowth;

impl ItemsetMiner for FPGrowth {
    fn strategy(&self) -> Strategy {
        Strategy::FPGrowth
    }

    fn mine(&self, dataset: &Dataset, min_support: f64) -> Result<FrequentItemsets> {
        let min_support = validate_fraction(MIN_SUPPORT, min_support)?;
        let mut frequent = FrequentItemsets::new(dataset.len());
        if dataset.is_empty() {
            return Ok(frequent);
        }

        let min_count = min_count(dataset.len(), min_support);
        let fptree = FPTree::build(
            dataset.transactions().iter().map(|t| (t.as_slice(), 1)),
            min_count,
        );
        debug!(nodes = fptree.num_nodes(), min_count, "built initial FPTree");

        fp_growth(&fptree, min_count, &[], &mut frequent);

        info!(
            itemsets = frequent.len(),
            max_size = frequent.max_size(),
            "fpgrowth mining complete"
        );
        Ok(frequent)
    }
}
