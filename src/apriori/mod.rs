pub mod candidates;
pub mod counting;
pub mod database;
pub mod itemset;
pub mod mining;
pub mod rules;
pub mod storage;

#[cfg(test)]
mod tests;

pub use database::{Transaction, TransactionDatabase};
pub use itemset::{Item, Itemset};
pub use mining::{apriori_algorithm, MiningConfig};
pub use rules::{for_each_rule, generate_rules, try_for_each_rule, AssociationRule};
pub use storage::{CandidateTable, FrequentItemsets, FrequentTable, ItemsetTable};
