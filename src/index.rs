use crate::dataset::Dataset;
use crate::item::Item;

/// Vertical layout of a dataset: for every item, the ascending list of ids of
/// the transactions containing it. Counting an itemset intersects its items'
/// lists.
pub struct Index {
    index: Vec<Vec<usize>>,
    transaction_count: usize,
}

impl Index {
    pub fn new(dataset: &Dataset) -> Index {
        let mut index = Index {
            index: vec![vec![]; dataset.num_items()],
            transaction_count: 0,
        };
        for transaction in dataset.transactions() {
            index.insert(transaction);
        }
        index
    }

    fn insert(&mut self, transaction: &[Item]) {
        let tid = self.transaction_count;
        self.transaction_count += 1;
        for item in transaction {
            let item_index = item.as_index();
            if self.index.len() <= item_index {
                self.index.resize(item_index + 1, vec![]);
            }
            self.index[item_index].push(tid);
        }
    }

    pub fn transaction_count(&self) -> usize {
        self.transaction_count
    }

    /// Number of transactions containing every item in `itemset`.
    pub fn count(&self, itemset: &[Item]) -> u32 {
        if itemset.is_empty() {
            return 0;
        }

        let mut tid_lists: Vec<&Vec<usize>> = Vec::with_capacity(itemset.len());
        for item in itemset {
            match self.index.get(item.as_index()) {
                Some(tids) => tid_lists.push(tids),
                None => return 0,
            }
        }
        if tid_lists.len() == 1 {
            return tid_lists[0].len() as u32;
        }
        // Drive the scan from the shortest list.
        tid_lists.sort_by_key(|tids| tids.len());

        let mut p: Vec<usize> = vec![0; tid_lists.len()];
        let mut count = 0;
        for &tid in tid_lists[0].iter() {
            // Check whether all the other tid lists contain that tid.
            let mut tid_in_all_item_tid_lists = true;
            for i in 1..tid_lists.len() {
                while p[i] < tid_lists[i].len() && tid_lists[i][p[i]] < tid {
                    p[i] += 1;
                }
                if p[i] == tid_lists[i].len() || tid_lists[i][p[i]] != tid {
                    tid_in_all_item_tid_lists = false;
                    break;
                }
            }
            if tid_in_all_item_tid_lists {
                count += 1;
            }
        }
        count
    }
}
