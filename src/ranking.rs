use crate::metric::Metric;
use crate::rule::Rule;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;

/// The `n` highest scoring rules by `metric`, best first. Equal scores keep
/// their original relative order.
pub fn top_n(rules: &[Rule], metric: Metric, n: usize) -> Vec<Rule> {
    let mut ranked: Vec<&Rule> = rules.iter().collect();
    // sort_by_key is stable.
    ranked.sort_by_key(|rule| Reverse(OrderedFloat(metric.value(rule))));
    ranked.into_iter().take(n).cloned().collect()
}
