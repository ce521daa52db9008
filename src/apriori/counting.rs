use super::database::TransactionDatabase;
use super::itemset::Itemset;
use super::storage::{CandidateTable, FrequentTable};
use rayon::prelude::*;

/// `count / total * 100`, the percentage every threshold and rule value uses.
pub fn percentage(count: usize, total: usize) -> f64 {
    count as f64 / total as f64 * 100.0
}

/// Number of transactions that contain `itemset`.
pub fn support_count(itemset: &Itemset, database: &TransactionDatabase) -> usize {
    database
        .iter()
        .filter(|transaction| itemset.is_subset_of(transaction))
        .count()
}

/// Adds to each candidate the number of transactions containing it.
///
/// The parallel path computes every candidate's count independently and
/// writes them back in table order, so both paths give identical tables.
pub fn count_support(candidates: &mut CandidateTable, database: &TransactionDatabase, parallel: bool) {
    if parallel {
        let itemsets: Vec<&Itemset> = candidates.itemsets().collect();
        let counts: Vec<usize> = itemsets
            .par_iter()
            .map(|itemset| support_count(itemset, database))
            .collect();

        for ((_, slot), count) in candidates.counts_mut().zip(counts) {
            *slot += count;
        }
    } else {
        for (itemset, slot) in candidates.counts_mut() {
            *slot += support_count(itemset, database);
        }
    }
}

/// Keeps the candidates whose support percentage reaches `min_support`.
pub fn filter_frequent(
    candidates: CandidateTable,
    num_transactions: usize,
    min_support: f64,
) -> FrequentTable {
    let mut frequent = FrequentTable::new(candidates.itemset_size);

    for (itemset, count) in candidates {
        if percentage(count, num_transactions) >= min_support {
            frequent.insert(itemset, count);
        }
    }

    frequent
}
