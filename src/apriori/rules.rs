use super::counting::percentage;
use super::itemset::{Item, Itemset};
use super::storage::FrequentItemsets;
use std::convert::Infallible;
use std::fmt;

/// `antecedent => consequent`, with support and confidence as percentages.
#[derive(Debug, Clone, PartialEq)]
pub struct AssociationRule {
    pub antecedent: Itemset,
    pub consequent: Itemset,
    pub support: f64,
    pub confidence: f64,
}

/// Tab-separated output record: `{a,b}\t{c}\t50.00\t66.67`.
impl fmt::Display for AssociationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{:.2}\t{:.2}",
            self.antecedent, self.consequent, self.support, self.confidence
        )
    }
}

/// Visits every split of `items` into two sequences, depth-first, sending the
/// current item to the antecedent side before the consequent side. Both
/// sides keep the input order. Trivial splits are included.
pub fn for_each_partition<E, F>(items: &[Item], callback: &mut F) -> Result<(), E>
where
    F: FnMut(&[Item], &[Item]) -> Result<(), E>,
{
    let mut antecedent = Vec::with_capacity(items.len());
    let mut consequent = Vec::with_capacity(items.len());
    partition_recursive(items, 0, &mut antecedent, &mut consequent, callback)
}

fn partition_recursive<E, F>(
    items: &[Item],
    index: usize,
    antecedent: &mut Vec<Item>,
    consequent: &mut Vec<Item>,
    callback: &mut F,
) -> Result<(), E>
where
    F: FnMut(&[Item], &[Item]) -> Result<(), E>,
{
    if index == items.len() {
        return callback(antecedent, consequent);
    }

    antecedent.push(items[index]);
    partition_recursive(items, index + 1, antecedent, consequent, callback)?;
    antecedent.pop();

    consequent.push(items[index]);
    partition_recursive(items, index + 1, antecedent, consequent, callback)?;
    consequent.pop();

    Ok(())
}

/// Emits every non-trivial rule of every frequent itemset of size two or
/// more, level by level and in itemset order within a level. Stops at the
/// first error the callback returns.
pub fn try_for_each_rule<E, F>(frequent: &FrequentItemsets, mut callback: F) -> Result<(), E>
where
    F: FnMut(AssociationRule) -> Result<(), E>,
{
    let total = frequent.num_transactions();

    for level in frequent.levels().iter().skip(1) {
        for (itemset, itemset_support) in level.iter() {
            for_each_partition(itemset.items(), &mut |antecedent: &[Item], consequent: &[Item]| {
                if antecedent.is_empty() || consequent.is_empty() {
                    return Ok(());
                }

                let antecedent_support = frequent.support(antecedent);
                if antecedent_support == 0 {
                    return Ok(());
                }

                callback(AssociationRule {
                    antecedent: Itemset::from_sorted(antecedent.to_vec()),
                    consequent: Itemset::from_sorted(consequent.to_vec()),
                    support: percentage(itemset_support, total),
                    confidence: percentage(itemset_support, antecedent_support),
                })
            })?;
        }
    }

    Ok(())
}

pub fn for_each_rule<F>(frequent: &FrequentItemsets, mut callback: F)
where
    F: FnMut(AssociationRule),
{
    let outcome: Result<(), Infallible> = try_for_each_rule(frequent, |rule| {
        callback(rule);
        Ok(())
    });
    if let Err(never) = outcome {
        match never {}
    }
}

/// Collects every rule in emission order.
pub fn generate_rules(frequent: &FrequentItemsets) -> Vec<AssociationRule> {
    let mut rules = Vec::new();
    for_each_rule(frequent, |rule| rules.push(rule));
    rules
}
