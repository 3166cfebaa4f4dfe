//! Frequent itemset mining with Apriori, and association rule generation
//! over the mined itemsets.
//!
//! ```
//! use basket::{generate_rules, mine, Dataset, Metric};
//!
//! let dataset = Dataset::from_transactions(vec![
//!     vec!["milk", "bread"],
//!     vec!["milk", "bread", "nuts"],
//!     vec!["milk"],
//! ]);
//! let itemsets = mine(&dataset, 0.6).unwrap();
//! let rules = generate_rules(&itemsets, Metric::Confidence, 0.5);
//! assert_eq!(rules.len(), 2);
//! ```

pub mod apriori;
pub mod dataset;
pub mod error;
pub mod generate_rules;
mod index;
pub mod item;
mod item_counter;
pub mod itemizer;
pub mod itemset;
pub mod logging;
pub mod metric;
pub mod ranking;
pub mod report;
pub mod rule;
pub mod transaction_reader;
pub mod vec_sets;

pub use apriori::{mine, mine_with_options, AprioriOptions};
pub use dataset::Dataset;
pub use error::{Error, Result};
pub use generate_rules::{generate_rules, generate_rules_by_name};
pub use item::Item;
pub use itemizer::Itemizer;
pub use itemset::{FrequentItemsets, ItemSet};
pub use metric::Metric;
pub use ranking::top_n;
pub use rule::Rule;
