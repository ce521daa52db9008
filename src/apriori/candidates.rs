use super::database::TransactionDatabase;
use super::itemset::Itemset;
use super::storage::{CandidateTable, FrequentTable};

/// Builds C[1] by counting every item occurrence in the database.
pub fn first_level_candidates(database: &TransactionDatabase) -> CandidateTable {
    let mut candidates = CandidateTable::new(1);

    for transaction in database.iter() {
        for &item in transaction.iter() {
            candidates.increment(Itemset::singleton(item));
        }
    }

    candidates
}

/// Builds C[k + 1] from L[k] by self-join and subset pruning. Counts start at 0.
///
/// Pairs are visited once, with `b` never preceding `a` in table order. A pair
/// only joins when the two itemsets share all but one item.
pub fn next_level_candidates(frequent: &FrequentTable) -> CandidateTable {
    let mut candidates = CandidateTable::new(frequent.itemset_size + 1);
    let itemsets: Vec<&Itemset> = frequent.itemsets().collect();

    for (idx, a) in itemsets.iter().enumerate() {
        for b in &itemsets[idx..] {
            let Some(candidate) = a.merge(b) else {
                continue;
            };

            if has_frequent_subsets(&candidate, frequent) {
                candidates.insert(candidate, 0);
            }
        }
    }

    candidates
}

/// Downward closure: every subset one item smaller must already be frequent.
pub fn has_frequent_subsets(candidate: &Itemset, frequent: &FrequentTable) -> bool {
    (0..candidate.len()).all(|idx| frequent.contains(candidate.remove_at(idx).items()))
}
