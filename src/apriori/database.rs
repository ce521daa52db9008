use super::itemset::{Item, Itemset};
use ndarray::ArrayView2;

pub type Transaction = Itemset;

/// Ordered, read-only collection of transactions.
///
/// Transactions are normalized to sets when added, so an item repeated on one
/// line is counted once everywhere.
#[derive(Debug, Clone, Default)]
pub struct TransactionDatabase {
    transactions: Vec<Transaction>,
    duplicates_dropped: usize,
}

impl TransactionDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, items: Vec<Item>) {
        let raw_len = items.len();
        let transaction = Itemset::new(items);
        self.duplicates_dropped += raw_len - transaction.len();
        self.transactions.push(transaction);
    }

    /// Builds transactions from a binary transaction matrix: row `i` is a
    /// transaction holding item `j` wherever column `j` is non-zero.
    ///
    /// Item ids are `i32`, so columns past `Item::MAX` have no id and are
    /// left out.
    pub fn from_dense(matrix: ArrayView2<i32>) -> Self {
        let mut database = Self::new();
        database.transactions.reserve(matrix.nrows());

        for row in matrix.outer_iter() {
            let items: Vec<Item> = row
                .iter()
                .enumerate()
                .filter(|&(_, &value)| value != 0)
                .filter_map(|(col, _)| Item::try_from(col).ok())
                .collect();
            database.transactions.push(Itemset::from_sorted(items));
        }

        database
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter()
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Repeated items removed while normalizing transactions.
    pub fn duplicates_dropped(&self) -> usize {
        self.duplicates_dropped
    }
}

impl FromIterator<Vec<Item>> for TransactionDatabase {
    fn from_iter<I: IntoIterator<Item = Vec<Item>>>(iter: I) -> Self {
        let mut database = Self::new();
        for items in iter {
            database.push(items);
        }
        database
    }
}
