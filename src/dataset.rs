use crate::error::{Error, Result};
use crate::item::Item;
use crate::itemizer::Itemizer;
use fnv::FnvHashSet;

/// An in-memory transaction set. Each transaction is stored as a sorted,
/// deduplicated `Vec<Item>`; the number of transactions is the support
/// denominator, so empty transactions are kept here and rejected by the miner.
#[derive(Clone, Debug)]
pub struct Dataset {
    itemizer: Itemizer,
    transactions: Vec<Vec<Item>>,
}

impl Dataset {
    /// Builds a dataset from sequences of item labels.
    pub fn from_transactions<T, I, S>(transactions: T) -> Dataset
    where
        T: IntoIterator<Item = I>,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let raw: Vec<Vec<String>> = transactions
            .into_iter()
            .map(|t| t.into_iter().map(|s| s.as_ref().to_owned()).collect())
            .collect();
        let itemizer = Itemizer::from_labels(raw.iter().flatten());
        Dataset::with_itemizer(itemizer, &raw)
    }

    // Every label in `raw` must be known to `itemizer`.
    fn with_itemizer<S: AsRef<str>>(itemizer: Itemizer, raw: &[Vec<S>]) -> Dataset {
        let transactions = raw
            .iter()
            .map(|labels| {
                let mut items: Vec<Item> = labels
                    .iter()
                    .filter_map(|label| itemizer.id_of(label.as_ref()))
                    .collect();
                items.sort();
                items.dedup();
                items
            })
            .collect();
        Dataset {
            itemizer,
            transactions,
        }
    }

    /// Builds a dataset from a one-hot matrix: `rows[t][c]` is true when
    /// transaction `t` contains the item labelled `columns[c]`.
    pub fn from_one_hot<S: AsRef<str>>(columns: &[S], rows: &[Vec<bool>]) -> Result<Dataset> {
        let mut seen: FnvHashSet<&str> = FnvHashSet::default();
        for column in columns {
            if !seen.insert(column.as_ref()) {
                return Err(Error::invalid_input(format!(
                    "duplicate column label '{}'",
                    column.as_ref()
                )));
            }
        }
        for (index, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(Error::invalid_input(format!(
                    "row {} has {} cells but there are {} columns",
                    index,
                    row.len(),
                    columns.len()
                )));
            }
        }
        let transactions: Vec<Vec<&str>> = rows
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .zip(row.iter())
                    .filter(|&(_, &present)| present)
                    .map(|(column, _)| column.as_ref())
                    .collect()
            })
            .collect();
        // Columns that are never set still get an id, so they survive
        // re-encoding.
        let itemizer = Itemizer::from_labels(columns);
        Ok(Dataset::with_itemizer(itemizer, &transactions))
    }

    /// One-hot encoding of this dataset: column labels in lexical order and
    /// one boolean row per transaction.
    pub fn to_one_hot(&self) -> (Vec<String>, Vec<Vec<bool>>) {
        let columns = self.itemizer.labels().to_vec();
        let rows = self
            .transactions
            .iter()
            .map(|transaction| {
                let mut row = vec![false; columns.len()];
                for item in transaction {
                    row[item.as_index()] = true;
                }
                row
            })
            .collect();
        (columns, rows)
    }

    pub fn itemizer(&self) -> &Itemizer {
        &self.itemizer
    }

    pub fn transactions(&self) -> &[Vec<Item>] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn num_items(&self) -> usize {
        self.itemizer.len()
    }
}
