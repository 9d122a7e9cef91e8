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

use crate::itemizer::Itemizer;

/// An interned item label. Id 0 is reserved for the FPTree root, real
/// items start at 1. Once a dataset is loaded ids ascend with their labels,
/// so ordering items orders their labels.
#[derive(Copy, Clone, Hash, PartialOrd, PartialEq, Eq, Ord, Debug)]
pub struct Item {
    id: u32,
}

impl Item {
    pub fn null() -> Item {
        Item { id: 0 }
    }
    pub fn with_id(id: u32) -> Item {
        Item { id }
    }
    pub fn as_index(&self) -> usize {
        self.id as usize
    }
    pub fn is_null(&self) -> bool {
        self.id == 0
    }
    pub fn item_vec_to_string(items: &[Item], itemizer: &Itemizer) -> String {
        let mut sorted = items.to_vec();
        sorted.sort();
        let labels: Vec<&str> = sorted.iter().map(|&item| itemizer.str_of(item)).collect();
        labels.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::Item;
    use crate::itemizer::Itemizer;

    #[test]
    fn test_null_item() {
        assert!(Item::null().is_null());
        assert!(!Item::with_id(1).is_null());
        assert_eq!(Item::with_id(7).as_index(), 7);
    }

    #[test]
    fn test_item_vec_to_string() {
        let mut itemizer = Itemizer::new();
        let milk = itemizer.id_of("milk");
        let bread = itemizer.id_of("bread");
        let remap = itemizer.reorder_sorted();
        let milk = remap[milk.as_index()];
        let bread = remap[bread.as_index()];
        assert_eq!(Item::item_vec_to_string(&[milk, bread], &itemizer), "bread milk");
    }
}
