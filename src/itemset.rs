use crate::item::Item;
use crate::itemizer::Itemizer;
use fnv::FnvHashMap;
use std::cmp;

/// Maps a canonical itemset to the number of transactions containing it.
pub type ItemsetSupport = FnvHashMap<Vec<Item>, u32>;

/// A frequent itemset: sorted items, the number of transactions containing
/// them, and that count as a fraction of all transactions.
#[derive(Clone, PartialEq, Debug)]
pub struct ItemSet {
    pub items: Vec<Item>,
    pub count: u32,
    pub support: f64,
}

impl ItemSet {
    pub fn new(mut items: Vec<Item>, count: u32, num_transactions: usize) -> ItemSet {
        items.sort();
        items.dedup();
        ItemSet {
            items,
            count,
            support: count as f64 / num_transactions as f64,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn labels<'a>(&self, itemizer: &'a Itemizer) -> Vec<&'a str> {
        self.items.iter().map(|&item| itemizer.str_of(item)).collect()
    }

    // Size first, then lexical.
    fn cmp_canonical(&self, other: &ItemSet) -> cmp::Ordering {
        self.len()
            .cmp(&other.len())
            .then_with(|| self.items.cmp(&other.items))
    }
}

/// Result of a mining run. Records are ordered by size, then lexically.
#[derive(Clone, Debug)]
pub struct FrequentItemsets {
    itemsets: Vec<ItemSet>,
    lookup: ItemsetSupport,
    num_transactions: usize,
}

impl FrequentItemsets {
    pub fn new(mut itemsets: Vec<ItemSet>, num_transactions: usize) -> FrequentItemsets {
        itemsets.sort_by(|a, b| a.cmp_canonical(b));
        itemsets.dedup_by(|a, b| a.items == b.items);
        let lookup = itemsets
            .iter()
            .map(|itemset| (itemset.items.clone(), itemset.count))
            .collect();
        FrequentItemsets {
            itemsets,
            lookup,
            num_transactions,
        }
    }

    pub fn empty(num_transactions: usize) -> FrequentItemsets {
        FrequentItemsets::new(vec![], num_transactions)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ItemSet> {
        self.itemsets.iter()
    }

    pub fn as_slice(&self) -> &[ItemSet] {
        &self.itemsets
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

    pub fn count_of(&self, items: &[Item]) -> Option<u32> {
        self.lookup.get(items).cloned()
    }

    pub fn support_of(&self, items: &[Item]) -> Option<f64> {
        self.count_of(items)
            .map(|count| count as f64 / self.num_transactions as f64)
    }

    pub fn contains(&self, items: &[Item]) -> bool {
        self.lookup.contains_key(items)
    }

    /// Largest itemset size present, 0 when empty.
    pub fn max_len(&self) -> usize {
        self.itemsets.last().map(|itemset| itemset.len()).unwrap_or(0)
    }
}

impl<'a> IntoIterator for &'a FrequentItemsets {
    type Item = &'a ItemSet;
    type IntoIter = std::slice::Iter<'a, ItemSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.itemsets.iter()
    }
}
