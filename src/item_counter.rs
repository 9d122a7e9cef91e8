use crate::item::Item;

/// Per-item counts, indexed densely by item id.
#[derive(Clone, Debug, Default)]
pub struct ItemCounter {
    counter: Vec<u32>,
}

impl ItemCounter {
    pub fn new() -> ItemCounter {
        ItemCounter { counter: vec![] }
    }
    pub fn add(&mut self, item: &Item, count: u32) {
        let index = item.as_index();
        if self.counter.len() <= index {
            self.counter.resize(index + 1, 0);
        }
        self.counter[index] += count;
    }
    pub fn get(&self, item: &Item) -> u32 {
        let index = item.as_index();
        if index >= self.counter.len() {
            0
        } else {
            self.counter[index]
        }
    }
    pub fn items_with_count_at_least(&self, min_count: u32) -> Vec<Item> {
        let mut v: Vec<Item> = vec![];
        for i in 1..self.counter.len() {
            if self.counter[i] > 0 && self.counter[i] >= min_count {
                v.push(Item::with_id(i as u32));
            }
        }
        v
    }
    // Most frequent first; equal counts fall back to label order.
    pub fn sort_descending(&self, v: &mut [Item]) {
        v.sort_by(|a, b| self.get(b).cmp(&self.get(a)).then_with(|| a.cmp(b)));
    }
}

#[cfg(test)]
mod tests {
    use super::ItemCounter;
    use crate::item::Item;

    #[test]
    fn test_counts_and_threshold() {
        let mut counter = ItemCounter::new();
        counter.add(&Item::with_id(3), 2);
        counter.add(&Item::with_id(1), 1);
        counter.add(&Item::with_id(3), 1);
        assert_eq!(counter.get(&Item::with_id(3)), 3);
        assert_eq!(counter.get(&Item::with_id(2)), 0);
        assert_eq!(counter.get(&Item::with_id(99)), 0);
        assert_eq!(
            counter.items_with_count_at_least(2),
            vec![Item::with_id(3)]
        );
        assert_eq!(
            counter.items_with_count_at_least(0),
            vec![Item::with_id(1), Item::with_id(3)]
        );
    }

    #[test]
    fn test_sort_descending_breaks_ties_by_item() {
        let mut counter = ItemCounter::new();
        counter.add(&Item::with_id(1), 2);
        counter.add(&Item::with_id(2), 5);
        counter.add(&Item::with_id(3), 2);
        let mut items = vec![Item::with_id(3), Item::with_id(1), Item::with_id(2)];
        counter.sort_descending(&mut items);
        assert_eq!(
            items,
            vec![Item::with_id(2), Item::with_id(1), Item::with_id(3)]
        );
    }
}
