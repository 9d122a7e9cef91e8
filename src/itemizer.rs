use crate::item::Item;
use fnv::FnvHashMap;

/// Interns item labels as `Item` ids.
pub struct Itemizer {
    next_item_id: u32,
    item_str_to_id: FnvHashMap<String, Item>,
    item_id_to_str: Vec<String>,
}

impl Itemizer {
    pub fn new() -> Itemizer {
        Itemizer {
            next_item_id: 1,
            item_str_to_id: FnvHashMap::default(),
            item_id_to_str: vec![],
        }
    }
    pub fn id_of(&mut self, item: &str) -> Item {
        if let Some(id) = self.item_str_to_id.get(item) {
            return *id;
        }
        let id = self.next_item_id;
        self.next_item_id += 1;
        self.item_str_to_id
            .insert(String::from(item), Item::with_id(id));
        self.item_id_to_str.push(String::from(item));
        debug_assert_eq!(self.item_id_to_str.len(), id as usize);
        Item::with_id(id)
    }
    pub fn get(&self, item: &str) -> Option<Item> {
        self.item_str_to_id.get(item).cloned()
    }
    pub fn str_of(&self, id: Item) -> &str {
        &self.item_id_to_str[id.as_index() - 1]
    }
    pub fn len(&self) -> usize {
        self.item_id_to_str.len()
    }
    pub fn is_empty(&self) -> bool {
        self.item_id_to_str.is_empty()
    }

    // Renumbers items so that ids ascend in label order. Returns a table
    // mapping each old id (by index) to its new id.
    pub fn reorder_sorted(&mut self) -> Vec<Item> {
        let mut remap = vec![Item::null(); self.item_id_to_str.len() + 1];
        self.item_id_to_str.sort();
        for (index, item_str) in self.item_id_to_str.iter().enumerate() {
            let new_id = Item::with_id((index + 1) as u32);
            let old_id = self.item_str_to_id[item_str];
            remap[old_id.as_index()] = new_id;
            self.item_str_to_id.insert(item_str.clone(), new_id);
        }
        remap
    }
}

impl Default for Itemizer {
    fn default() -> Itemizer {
        Itemizer::new()
    }
}
