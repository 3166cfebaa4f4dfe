use crate::item::Item;
use fnv::FnvHashMap;
use std::collections::BTreeSet;

/// Maps item labels to dense `Item` ids and back.
///
/// Ids are assigned in lexical order of the labels, so sorting a `Vec<Item>`
/// gives the same order as sorting the labels.
#[derive(Clone, Debug, Default)]
pub struct Itemizer {
    item_str_to_id: FnvHashMap<String, Item>,
    item_id_to_str: Vec<String>,
}

impl Itemizer {
    pub fn from_labels<I, S>(labels: I) -> Itemizer
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let sorted: BTreeSet<String> = labels
            .into_iter()
            .map(|label| label.as_ref().to_owned())
            .collect();
        let mut itemizer = Itemizer::default();
        for (index, label) in sorted.into_iter().enumerate() {
            let item = Item::with_id(index as u32);
            itemizer.item_str_to_id.insert(label.clone(), item);
            itemizer.item_id_to_str.push(label);
        }
        itemizer
    }

    pub fn id_of(&self, item: &str) -> Option<Item> {
        self.item_str_to_id.get(item).cloned()
    }

    pub fn str_of(&self, item: Item) -> &str {
        &self.item_id_to_str[item.as_index()]
    }

    /// Canonical (sorted, deduplicated) itemset for the given labels, or None
    /// if any label is unknown.
    pub fn to_id_vec<S: AsRef<str>>(&self, labels: &[S]) -> Option<Vec<Item>> {
        let mut items = labels
            .iter()
            .map(|label| self.id_of(label.as_ref()))
            .collect::<Option<Vec<Item>>>()?;
        items.sort();
        items.dedup();
        Some(items)
    }

    pub fn labels(&self) -> &[String] {
        &self.item_id_to_str
    }

    pub fn len(&self) -> usize {
        self.item_id_to_str.len()
    }

    pub fn is_empty(&self) -> bool {
        self.item_id_to_str.is_empty()
    }
}
