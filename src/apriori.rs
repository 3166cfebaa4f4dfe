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
use crate::error::{Error, Result};
use crate::index::Index;
use crate::item::Item;
use crate::item_counter::ItemCounter;
use crate::itemset::{FrequentItemsets, ItemSet};
use crate::vec_sets::{subsets_missing_one, union};
use fnv::FnvHashSet;
use rayon::prelude::*;
use tracing::debug;

#[derive(Clone, Debug, PartialEq)]
pub struct AprioriOptions {
    /// Minimum fraction of transactions an itemset must appear in, in (0,1].
    pub min_support: f64,
    /// Largest itemset size to generate. `None` means no limit.
    pub max_len: Option<usize>,
}

impl AprioriOptions {
    pub fn new(min_support: f64) -> AprioriOptions {
        AprioriOptions {
            min_support,
            max_len: None,
        }
    }

    pub fn with_max_len(mut self, max_len: usize) -> AprioriOptions {
        self.max_len = Some(max_len);
        self
    }

    fn validate(&self) -> Result<()> {
        // Written so that NaN fails too.
        if !(self.min_support > 0.0 && self.min_support <= 1.0) {
            return Err(Error::invalid_input(format!(
                "minimum support must be in range (0,1], got {}",
                self.min_support
            )));
        }
        if self.max_len == Some(0) {
            return Err(Error::invalid_input("maximum itemset length must be at least 1"));
        }
        Ok(())
    }
}

/// Mines every itemset whose support is at least `min_support`.
pub fn mine(dataset: &Dataset, min_support: f64) -> Result<FrequentItemsets> {
    mine_with_options(dataset, &AprioriOptions::new(min_support))
}

pub fn mine_with_options(dataset: &Dataset, options: &AprioriOptions) -> Result<FrequentItemsets> {
    options.validate()?;
    validate_dataset(dataset)?;

    let num_transactions = dataset.len();
    let max_len = options
        .max_len
        .unwrap_or(usize::MAX)
        .min(dataset.num_items());

    let mut item_count = ItemCounter::with_capacity(dataset.num_items());
    for transaction in dataset.transactions() {
        for item in transaction {
            item_count.add(item, 1);
        }
    }
    let mut level: Vec<ItemSet> = item_count
        .items_with_count_at_least(1)
        .into_iter()
        .map(|item| ItemSet::new(vec![item], item_count.get(&item), num_transactions))
        .filter(|itemset| itemset.support >= options.min_support)
        .collect();

    let index = Index::new(dataset);
    let mut itemsets: Vec<ItemSet> = vec![];
    let mut k = 1;
    while !level.is_empty() {
        debug!(k, frequent = level.len(), "apriori level complete");
        let previous: Vec<Vec<Item>> = level.iter().map(|itemset| itemset.items.clone()).collect();
        itemsets.append(&mut level);
        if k >= max_len {
            break;
        }
        k += 1;

        let candidates = generate_candidates(&previous);
        debug!(k, candidates = candidates.len(), "counting candidates");
        level = count_candidates(candidates, &index, options.min_support);
    }

    Ok(FrequentItemsets::new(itemsets, num_transactions))
}

fn validate_dataset(dataset: &Dataset) -> Result<()> {
    if dataset.is_empty() {
        return Err(Error::invalid_input("transaction set is empty"));
    }
    if let Some(position) = dataset.transactions().iter().position(|t| t.is_empty()) {
        return Err(Error::invalid_input(format!("transaction {} is empty", position)));
    }
    Ok(())
}

// Joins pairs of frequent (k-1)-itemsets that agree on their first k-2 items,
// then drops any candidate with an infrequent (k-1)-subset. `previous` must be
// sorted lexically, which makes the output sorted lexically as well.
fn generate_candidates(previous: &[Vec<Item>]) -> Vec<Vec<Item>> {
    let frequent: FnvHashSet<&[Item]> = previous.iter().map(|items| items.as_slice()).collect();
    let mut candidates: Vec<Vec<Item>> = vec![];
    for (i, a) in previous.iter().enumerate() {
        let prefix_len = a.len() - 1;
        for b in &previous[i + 1..] {
            if a[..prefix_len] != b[..prefix_len] {
                break;
            }
            let candidate = union(a, b);
            if subsets_missing_one(&candidate).all(|subset| frequent.contains(subset.as_slice())) {
                candidates.push(candidate);
            }
        }
    }
    candidates
}

fn count_candidates(candidates: Vec<Vec<Item>>, index: &Index, min_support: f64) -> Vec<ItemSet> {
    let num_transactions = index.transaction_count();
    candidates
        .into_par_iter()
        .map(|items| {
            let count = index.count(&items);
            ItemSet::new(items, count, num_transactions)
        })
        .filter(|itemset| itemset.support >= min_support)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{generate_candidates, mine, mine_with_options, AprioriOptions};
    use crate::dataset::Dataset;
    use crate::item::Item;

    fn grocery() -> Dataset {
        Dataset::from_transactions(vec![
            vec!["milk", "bread", "nuts", "apple"],
            vec!["milk", "bread", "nuts"],
            vec!["milk", "bread"],
            vec!["milk", "apple"],
            vec!["bread", "apple"],
        ])
    }

    fn items(ids: &[u32]) -> Vec<Item> {
        ids.iter().map(|&id| Item::with_id(id)).collect()
    }

    #[test]
    fn test_grocery_itemsets() {
        let dataset = grocery();
        let itemizer = dataset.itemizer();
        let itemsets = mine(&dataset, 0.6).unwrap();

        let found: Vec<(Vec<&str>, f64)> = itemsets
            .iter()
            .map(|itemset| (itemset.labels(itemizer), itemset.support))
            .collect();
        assert_eq!(
            found,
            vec![
                (vec!["apple"], 0.6),
                (vec!["bread"], 0.8),
                (vec!["milk"], 0.8),
                (vec!["bread", "milk"], 0.6),
            ]
        );
        assert!(!itemsets.contains(&itemizer.to_id_vec(&["nuts"]).unwrap()));
    }

    #[test]
    fn test_census() {
        // HARM's census2.csv test dataset. At this threshold every itemset
        // occurring in at least one transaction is frequent.
        let dataset = Dataset::from_transactions(vec![
            vec!["a", "b", "c"],
            vec!["d", "b", "c"],
            vec!["a", "b", "e"],
            vec!["f", "g", "c"],
            vec!["d", "g", "e"],
            vec!["f", "b", "c"],
            vec!["f", "b", "c"],
            vec!["a", "b", "e"],
            vec!["a", "b", "c"],
            vec!["a", "b", "e"],
            vec!["a", "b", "e"],
        ]);
        let itemizer = dataset.itemizer();
        let expected = [
            vec!["a"],
            vec!["a", "b"],
            vec!["b"],
            vec!["c"],
            vec!["b", "c"],
            vec!["a", "c"],
            vec!["a", "b", "c"],
            vec!["d"],
            vec!["b", "d"],
            vec!["c", "d"],
            vec!["b", "c", "d"],
            vec!["d", "e"],
            vec!["e"],
            vec!["b", "e"],
            vec!["a", "e"],
            vec!["a", "b", "e"],
            vec!["f"],
            vec!["c", "f"],
            vec!["b", "f"],
            vec!["b", "c", "f"],
            vec!["g"],
            vec!["c", "g"],
            vec!["d", "g"],
            vec!["d", "e", "g"],
            vec!["e", "g"],
            vec!["f", "g"],
            vec!["c", "f", "g"],
        ];

        let itemsets = mine(&dataset, 0.05).unwrap();
        assert_eq!(itemsets.len(), expected.len());
        for labels in expected.iter() {
            assert!(itemsets.contains(&itemizer.to_id_vec(labels).unwrap()));
        }
        assert_eq!(
            itemsets.count_of(&itemizer.to_id_vec(&["a", "b", "e"]).unwrap()),
            Some(4)
        );
        assert_eq!(itemsets.max_len(), 3);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let dataset = Dataset::from_transactions(vec![vec!["a", "b"], vec!["a"], vec!["b"], vec!["c"]]);
        let itemsets = mine(&dataset, 0.25).unwrap();
        let itemizer = dataset.itemizer();
        assert!(itemsets.contains(&itemizer.to_id_vec(&["a", "b"]).unwrap()));
        assert!(itemsets.contains(&itemizer.to_id_vec(&["c"]).unwrap()));
    }

    #[test]
    fn test_no_frequent_items_is_not_an_error() {
        let dataset = Dataset::from_transactions(vec![vec!["a"], vec!["b"], vec!["c"]]);
        let itemsets = mine(&dataset, 0.5).unwrap();
        assert!(itemsets.is_empty());
        assert_eq!(itemsets.num_transactions(), 3);
    }

    #[test]
    fn test_max_len() {
        let dataset = Dataset::from_transactions(vec![vec!["a", "b", "c"], vec!["a", "b", "c"]]);
        let all = mine(&dataset, 1.0).unwrap();
        assert_eq!(all.len(), 7);
        let capped = mine_with_options(&dataset, &AprioriOptions::new(1.0).with_max_len(2)).unwrap();
        assert_eq!(capped.len(), 6);
        assert_eq!(capped.max_len(), 2);
    }

    #[test]
    fn test_invalid_input() {
        let dataset = grocery();
        for &min_support in &[0.0, -0.1, 1.01, f64::NAN] {
            assert!(mine(&dataset, min_support).unwrap_err().is_invalid_input());
        }
        assert!(mine(&dataset, 1.0).is_ok());

        let empty = Dataset::from_transactions(Vec::<Vec<&str>>::new());
        assert!(mine(&empty, 0.5).unwrap_err().is_invalid_input());

        let with_empty = Dataset::from_transactions(vec![vec!["a"], vec![]]);
        assert!(mine(&with_empty, 0.5).unwrap_err().is_invalid_input());

        let zero_len = AprioriOptions::new(0.5).with_max_len(0);
        assert!(mine_with_options(&dataset, &zero_len).unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_generate_candidates_prunes() {
        // {0,1}, {0,2}, {1,2} frequent; {0,3} frequent but {1,3} is not, so
        // {0,1,3} must be pruned.
        let previous = vec![items(&[0, 1]), items(&[0, 2]), items(&[0, 3]), items(&[1, 2])];
        let candidates = generate_candidates(&previous);
        assert_eq!(candidates, vec![items(&[0, 1, 2])]);
    }

    #[test]
    fn test_deterministic() {
        let dataset = grocery();
        let a = mine(&dataset, 0.4).unwrap();
        let b = mine(&dataset, 0.4).unwrap();
        assert_eq!(a.as_slice(), b.as_slice());
    }
}
