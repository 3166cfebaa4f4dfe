use crate::item::Item;

/// Dense per-item counter indexed by item id.
pub struct ItemCounter {
    counter: Vec<u32>,
}

impl ItemCounter {
    pub fn with_capacity(num_items: usize) -> ItemCounter {
        ItemCounter {
            counter: vec![0; num_items],
        }
    }

    pub fn add(&mut self, item: &Item, count: u32) {
        let index = item.as_index();
        if self.counter.len() <= index {
            self.counter.resize(index + 1, 0);
        }
        self.counter[index] += count;
    }

    pub fn get(&self, item: &Item) -> u32 {
        self.counter.get(item.as_index()).cloned().unwrap_or(0)
    }

    /// Items whose count is at least `min_count`, in ascending id order.
    pub fn items_with_count_at_least(&self, min_count: u32) -> Vec<Item> {
        self.counter
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0 && count >= min_count)
            .map(|(index, _)| Item::with_id(index as u32))
            .collect()
    }
}
