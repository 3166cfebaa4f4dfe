use crate::error::Result;
use crate::itemset::FrequentItemsets;
use crate::metric::Metric;
use crate::rule::Rule;
use itertools::Itertools;
use tracing::debug;

/// Derives every rule from `itemsets` whose `metric` is at least
/// `min_threshold`.
///
/// Itemsets are visited in record order (size, then lexical). For each one,
/// antecedents are enumerated by size ascending, and lexically within a size;
/// the consequent is the rest of the itemset. Splits whose antecedent or
/// consequent isn't itself a frequent itemset are skipped. The result is in
/// emission order, not sorted by score.
pub fn generate_rules(itemsets: &FrequentItemsets, metric: Metric, min_threshold: f64) -> Vec<Rule> {
    let mut rules: Vec<Rule> = vec![];
    for itemset in itemsets.iter().filter(|i| i.len() > 1) {
        let before = rules.len();
        for size in 1..itemset.len() {
            for antecedent in itemset.items.iter().cloned().combinations(size) {
                if let Some(rule) = Rule::make(itemset, antecedent, itemsets) {
                    if metric.value(&rule) >= min_threshold {
                        rules.push(rule);
                    }
                }
            }
        }
        debug!(
            size = itemset.len(),
            count = itemset.count,
            rules = rules.len() - before,
            "derived rules from itemset"
        );
    }
    rules
}

/// As `generate_rules`, with the metric given by name.
pub fn generate_rules_by_name(
    itemsets: &FrequentItemsets,
    metric: &str,
    min_threshold: f64,
) -> Result<Vec<Rule>> {
    let metric: Metric = metric.parse()?;
    Ok(generate_rules(itemsets, metric, min_threshold))
}

#[cfg(test)]
mod tests {
    use super::{generate_rules, generate_rules_by_name};
    use crate::apriori::mine;
    use crate::dataset::Dataset;
    use crate::item::Item;
    use crate::itemset::{FrequentItemsets, ItemSet};
    use crate::metric::Metric;
    use crate::rule::Rule;
    use fnv::FnvHashSet;

    fn census() -> Dataset {
        // HARM's census2.csv test dataset.
        Dataset::from_transactions(vec![
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
        ])
    }

    fn find<'a>(rules: &'a [Rule], dataset: &Dataset, a: &[&str], c: &[&str]) -> Option<&'a Rule> {
        let itemizer = dataset.itemizer();
        let antecedent = itemizer.to_id_vec(a)?;
        let consequent = itemizer.to_id_vec(c)?;
        rules
            .iter()
            .find(|r| r.antecedent == antecedent && r.consequent == consequent)
    }

    #[test]
    fn test_grocery_rules() {
        let dataset = Dataset::from_transactions(vec![
            vec!["milk", "bread", "nuts", "apple"],
            vec!["milk", "bread", "nuts"],
            vec!["milk", "bread"],
            vec!["milk", "apple"],
            vec!["bread", "apple"],
        ]);
        let itemsets = mine(&dataset, 0.6).unwrap();
        let rules = generate_rules(&itemsets, Metric::Confidence, 0.5);

        let itemizer = dataset.itemizer();
        let described: Vec<String> = rules.iter().map(|r| r.to_string(itemizer)).collect();
        assert_eq!(described, vec!["bread => milk", "milk => bread"]);

        let rule = find(&rules, &dataset, &["milk"], &["bread"]).unwrap();
        assert!((rule.support - 0.6).abs() < 1e-12);
        assert!((rule.confidence - 0.75).abs() < 1e-12);
        assert!((rule.lift - 0.9375).abs() < 1e-12);
    }

    #[test]
    fn test_census_rules() {
        let dataset = census();
        let itemsets = mine(&dataset, 0.05).unwrap();
        let rules = generate_rules(&itemsets, Metric::Confidence, 0.05);

        // Expected values generated by HARM.
        let expected: Vec<(Vec<&str>, Vec<&str>, f64, f64)> = vec![
            (vec!["a"], vec!["e"], 0.6666666666666667, 1.4666666666666668),
            (vec!["a"], vec!["b"], 1.0, 1.222222222222222),
            (vec!["a", "b"], vec!["e"], 0.6666666666666667, 1.4666666666666668),
            (vec!["b"], vec!["c", "d"], 0.1111111111111111, 1.222222222222222),
            (vec!["b"], vec!["c"], 0.5555555555555555, 1.0185185185185184),
            (vec!["b", "d"], vec!["c"], 1.0, 1.8333333333333335),
            (vec!["c", "g"], vec!["f"], 1.0, 3.666666666666667),
            (vec!["d"], vec!["e", "g"], 0.5, 5.5),
            (vec!["f"], vec!["c", "g"], 0.33333333333333337, 3.666666666666667),
            (vec!["g"], vec!["c", "f"], 0.5, 1.8333333333333335),
        ];
        for (a, c, confidence, lift) in expected {
            let rule = find(&rules, &dataset, &a, &c).unwrap();
            assert!((rule.confidence - confidence).abs() < 1e-9, "{:?} => {:?}", a, c);
            assert!((rule.lift - lift).abs() < 1e-9, "{:?} => {:?}", a, c);
        }

        // Every split of every itemset of size > 1 clears a 0.05 confidence
        // threshold here: 2 rules per pair, 6 per triple.
        let pairs = itemsets.iter().filter(|i| i.len() == 2).count();
        let triples = itemsets.iter().filter(|i| i.len() == 3).count();
        assert_eq!(rules.len(), pairs * 2 + triples * 6);

        let unique: FnvHashSet<&Rule> = rules.iter().collect();
        assert_eq!(unique.len(), rules.len());
    }

    #[test]
    fn test_threshold_filters_by_metric() {
        let dataset = census();
        let itemsets = mine(&dataset, 0.05).unwrap();
        for &(metric, threshold) in &[
            (Metric::Confidence, 0.9),
            (Metric::Lift, 1.5),
            (Metric::Support, 0.3),
            (Metric::Leverage, 0.05),
        ] {
            let rules = generate_rules(&itemsets, metric, threshold);
            assert!(!rules.is_empty());
            assert!(rules.iter().all(|r| metric.value(r) >= threshold));
        }
    }

    #[test]
    fn test_emission_order() {
        let dataset = census();
        let itemizer = dataset.itemizer();
        let itemsets = mine(&dataset, 0.3).unwrap();
        // Frequent at 0.3: a, b, c, e, {a,b}, {a,e}, {b,c}, {b,e}, {a,b,e}.
        let rules = generate_rules(&itemsets, Metric::Confidence, 0.0);
        let described: Vec<String> = rules.iter().map(|r| r.to_string(itemizer)).collect();
        assert_eq!(
            described,
            vec![
                "a => b",
                "b => a",
                "a => e",
                "e => a",
                "b => c",
                "c => b",
                "b => e",
                "e => b",
                "a => b e",
                "b => a e",
                "e => a b",
                "a b => e",
                "a e => b",
                "b e => a",
            ]
        );
    }

    #[test]
    fn test_single_items_give_no_rules() {
        let items = |ids: &[u32]| ids.iter().map(|&id| Item::with_id(id)).collect::<Vec<Item>>();
        let itemsets = FrequentItemsets::new(
            vec![ItemSet::new(items(&[0]), 3, 4), ItemSet::new(items(&[1]), 2, 4)],
            4,
        );
        assert!(generate_rules(&itemsets, Metric::Lift, 0.0).is_empty());
        assert!(generate_rules(&FrequentItemsets::empty(4), Metric::Lift, 0.0).is_empty());
    }

    #[test]
    fn test_by_name() {
        let itemsets = mine(&census(), 0.3).unwrap();
        let rules = generate_rules_by_name(&itemsets, "lift", 1.0).unwrap();
        assert!(rules.iter().all(|r| r.lift >= 1.0));
        assert!(generate_rules_by_name(&itemsets, "interest", 1.0)
            .unwrap_err()
            .is_invalid_input());
    }
}
