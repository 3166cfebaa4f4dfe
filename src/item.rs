use crate::itemizer::Itemizer;

/// Interned item label. Ids are dense and start at 0; the `Itemizer` hands
/// them out in lexical order of the labels, so comparing two `Item`s compares
/// their labels.
#[derive(Copy, Clone, Hash, PartialOrd, PartialEq, Eq, Ord, Debug)]
pub struct Item {
    id: u32,
}

impl Item {
    pub fn with_id(id: u32) -> Item {
        Item { id }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn as_index(&self) -> usize {
        self.id as usize
    }

    pub fn item_vec_to_string(items: &[Item], itemizer: &Itemizer) -> String {
        let mut a: Vec<&str> = items.iter().map(|&item| itemizer.str_of(item)).collect();
        a.sort();
        a.join(" ")
    }
}
