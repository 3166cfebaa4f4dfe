use crate::item::Item;
use crate::itemizer::Itemizer;
use crate::itemset::{FrequentItemsets, ItemSet};
use crate::vec_sets::difference;
use std::hash::{Hash, Hasher};

/// An association rule `antecedent => consequent`. Both sides are sorted,
/// disjoint and non-empty, and together form a frequent itemset.
#[derive(Clone, Debug)]
pub struct Rule {
    pub antecedent: Vec<Item>,
    pub consequent: Vec<Item>,
    pub antecedent_support: f64,
    pub consequent_support: f64,
    pub support: f64,
    pub confidence: f64,
    pub lift: f64,
    pub leverage: f64,
    pub conviction: f64,
}

// Rules are identified by their split alone; the scores follow from it.
impl PartialEq for Rule {
    fn eq(&self, other: &Rule) -> bool {
        self.antecedent == other.antecedent && self.consequent == other.consequent
    }
}

// Can't derive Eq as f64 doesn't satisfy Eq.
impl Eq for Rule {}

impl Hash for Rule {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.antecedent.hash(state);
        self.consequent.hash(state);
    }
}

impl Rule {
    /// Scores the rule `antecedent => itemset \ antecedent`. Returns None if
    /// either side is empty, either side's support is unknown, or a side has
    /// zero support.
    pub fn make(itemset: &ItemSet, antecedent: Vec<Item>, itemsets: &FrequentItemsets) -> Option<Rule> {
        let consequent = difference(&itemset.items, &antecedent);
        if antecedent.is_empty() || consequent.is_empty() {
            return None;
        }
        if antecedent.len() + consequent.len() != itemset.len() {
            // Antecedent wasn't a subset of the itemset.
            return None;
        }

        let a_count = itemsets.count_of(&antecedent)?;
        let c_count = itemsets.count_of(&consequent)?;
        if a_count == 0 || c_count == 0 {
            return None;
        }

        let n = itemsets.num_transactions() as f64;
        let ac_count = itemset.count as f64;
        let a_sup = a_count as f64 / n;
        let c_sup = c_count as f64 / n;
        let ac_sup = itemset.support;

        let confidence = ac_count / a_count as f64;
        let lift = (ac_count * n) / (a_count as f64 * c_count as f64);
        let leverage = ac_sup - a_sup * c_sup;
        let conviction = if confidence >= 1.0 {
            f64::INFINITY
        } else {
            (1.0 - c_sup) / (1.0 - confidence)
        };

        Some(Rule {
            antecedent,
            consequent,
            antecedent_support: a_sup,
            consequent_support: c_sup,
            support: ac_sup,
            confidence,
            lift,
            leverage,
            conviction,
        })
    }

    pub fn to_string(&self, itemizer: &Itemizer) -> String {
        [
            Item::item_vec_to_string(&self.antecedent, itemizer),
            " => ".to_owned(),
            Item::item_vec_to_string(&self.consequent, itemizer),
        ]
        .join("")
    }
}
