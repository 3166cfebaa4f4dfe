use crate::item::Item;
use crate::itemizer::Itemizer;
use crate::itemset::FrequentItemsets;
use crate::metric::Metric;
use crate::ranking::top_n;
use crate::rule::Rule;
use std::borrow::Cow;
use std::io::{self, Write};

pub fn write_rules_csv<W: Write>(output: &mut W, rules: &[Rule], itemizer: &Itemizer) -> io::Result<()> {
    writeln!(
        output,
        "Antecedent->Consequent,Support,Confidence,Lift,Leverage,Conviction"
    )?;
    for rule in rules {
        writeln!(
            output,
            "{},{},{},{},{},{}",
            csv_field(&rule.to_string(itemizer)),
            rule.support,
            rule.confidence,
            rule.lift,
            rule.leverage,
            rule.conviction
        )?;
    }
    Ok(())
}

pub fn write_itemsets_csv<W: Write>(
    output: &mut W,
    itemsets: &FrequentItemsets,
    itemizer: &Itemizer,
) -> io::Result<()> {
    writeln!(output, "Itemset,Count,Support")?;
    for itemset in itemsets {
        writeln!(
            output,
            "{},{},{}",
            csv_field(&itemset.labels(itemizer).join(" ")),
            itemset.count,
            itemset.support
        )?;
    }
    Ok(())
}

/// One line per rule in plain language, with percentages rounded to two
/// places. Prints a notice instead when there are no rules.
pub fn write_rule_summary<W: Write>(output: &mut W, rules: &[Rule], itemizer: &Itemizer) -> io::Result<()> {
    if rules.is_empty() {
        return writeln!(output, "No association rules met the threshold.");
    }
    for (index, rule) in rules.iter().enumerate() {
        writeln!(
            output,
            "{}. [{}] => [{}] (support: {:.2}%, confidence: {:.2}%, lift: {:.2})",
            index + 1,
            labels(&rule.antecedent, itemizer),
            labels(&rule.consequent, itemizer),
            rule.support * 100.0,
            rule.confidence * 100.0,
            rule.lift
        )?;
    }
    Ok(())
}

/// Every rule, then the `count` highest by lift under a heading. The ranked
/// listing is left out when there are no rules or `count` is 0.
pub fn write_run_summary<W: Write>(
    output: &mut W,
    rules: &[Rule],
    count: usize,
    itemizer: &Itemizer,
) -> io::Result<()> {
    write_rule_summary(output, rules, itemizer)?;
    if rules.is_empty() || count == 0 {
        return Ok(());
    }
    let best = top_n(rules, Metric::Lift, count);
    writeln!(output)?;
    writeln!(output, "Top {} rules by lift:", best.len())?;
    write_rule_summary(output, &best, itemizer)
}

// Quotes a field if it holds a separator, quote or line break, doubling any
// embedded quotes.
fn csv_field(field: &str) -> Cow<'_, str> {
    if field.contains(|c: char| c == ',' || c == '"' || c == '\n' || c == '\r') {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

fn labels(items: &[Item], itemizer: &Itemizer) -> String {
    items
        .iter()
        .map(|&item| itemizer.str_of(item))
        .collect::<Vec<&str>>()
        .join(", ")
}
